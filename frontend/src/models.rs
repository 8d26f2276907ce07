use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Video {
    pub id: u32,
    pub title: String,
    pub creator: String,
    pub creator_address: String,
    pub creator_avatar: String,
    pub views: String,
    pub likes: String,
    pub duration: String,
    pub video_url: String,
    pub thumbnail: String,
    pub earnings: String,
    pub upload_time: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub nft_token_id: String,
    pub ipfs_hash: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoSummary {
    pub id: u32,
    pub title: String,
    pub creator: String,
    pub views: String,
    pub duration: String,
    pub thumbnail: String,
    pub earnings: String,
    pub creator_avatar: String,
    pub upload_time: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Comment {
    pub id: u32,
    pub author: String,
    pub author_address: String,
    pub author_avatar: String,
    pub content: String,
    pub timestamp: String,
    pub likes: u32,
    pub dislikes: u32,
    pub is_verified: bool,
    pub zk_proof_verified: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewComment {
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    Paused,
    Completed,
}

impl CampaignStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "active",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Completed => "completed",
        }
    }
}

/// Token amounts arrive as decimal strings and are kept that way.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AdCampaign {
    pub id: u32,
    pub title: String,
    pub budget: String,
    pub spent: String,
    pub impressions: u64,
    pub clicks: u64,
    pub ctr: f64,
    pub status: CampaignStatus,
    pub target_category: String,
    pub bid_amount: String,
    pub end_date: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct NewCampaign {
    pub title: String,
    pub budget: String,
    pub bid_amount: String,
    pub target_category: String,
    pub description: String,
    pub duration_days: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AdStats {
    pub total_spent: String,
    pub total_impressions: u64,
    pub average_ctr: f64,
    pub active_campaigns: usize,
    pub paused_campaigns: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PaymentTransaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: String,
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub video_id: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
    pub timestamp: String,
    pub tx_hash: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreatorEarnings {
    pub total_earnings: String,
    pub monthly_earnings: String,
    pub pending_payouts: String,
    pub total_views: u64,
    pub average_view_payout: String,
    pub last_payout_date: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Payout {
    pub id: u32,
    pub amount: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: String,
    pub tx_hash: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EarningVideo {
    pub id: u32,
    pub title: String,
    pub views: String,
    pub earnings: String,
    pub thumbnail: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ViewPayoutRequest {
    pub video_id: u32,
    pub creator_address: String,
    pub viewer_address: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DonationRequest {
    pub amount: String,
    pub from: String,
    pub to: String,
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WithdrawRequest {
    pub creator_address: String,
    pub amount: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TokenPrice {
    pub symbol: String,
    pub usd: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct IpfsUploadResult {
    pub hash: String,
    pub url: String,
    pub size: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PinnedFile {
    pub cid: String,
    pub gateway_url: String,
    pub file_name: String,
    pub content_type: String,
    pub size: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UploadRequest {
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: String,
    pub thumbnail_hash: Option<String>,
    pub monetization: bool,
    pub nft_price: String,
    pub file: Option<PinnedFile>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UploadStage {
    Idle,
    Uploading,
    Processing,
    Minting,
    Complete,
    Error,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UploadProgress {
    pub stage: UploadStage,
    pub progress: u8,
    pub message: String,
}

impl Default for UploadProgress {
    fn default() -> Self {
        UploadProgress {
            stage: UploadStage::Idle,
            progress: 0,
            message: String::new(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UploadJob {
    pub id: String,
    pub title: String,
    pub file_name: String,
    pub progress: UploadProgress,
    pub history: Vec<UploadProgress>,
    pub ipfs_hash: Option<String>,
    pub nft_token_id: Option<String>,
    pub transaction_hash: Option<String>,
    pub created_at: String,
    pub finished_at: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub change: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ViewsPoint {
    pub date: String,
    pub views: u64,
    pub earnings: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EngagementPoint {
    pub date: String,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AudienceSlice {
    pub name: String,
    pub value: u8,
    pub color: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TopVideo {
    pub title: String,
    pub views: u64,
    pub earnings: u64,
    pub engagement: u8,
    pub thumbnail: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AnalyticsOverview {
    pub metrics: Vec<MetricCard>,
    pub views: Vec<ViewsPoint>,
    pub engagement: Vec<EngagementPoint>,
    pub audience: Vec<AudienceSlice>,
    pub top_videos: Vec<TopVideo>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
