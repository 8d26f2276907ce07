pub mod analytics_service;
pub mod campaign_service;
pub mod comment_service;
pub mod earnings_service;
pub mod ipfs_service;
pub mod latency;
pub mod nft_service;
pub mod payment_service;
pub mod upload_service;
pub mod video_service;
