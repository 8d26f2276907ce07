use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::Responder;
use rocket::serde::{Deserialize, Serialize};
use rocket::{response, Response};
use rust_decimal::Decimal;
use std::io::Cursor;

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

/// Card shown in the home grid and the recommendation column.
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

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AdCampaign {
    pub id: u32,
    pub title: String,
    pub budget: Decimal,
    pub spent: Decimal,
    pub impressions: u64,
    pub clicks: u64,
    pub ctr: f64,
    pub status: CampaignStatus,
    pub target_category: String,
    pub bid_amount: Decimal,
    pub end_date: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct NewCampaign {
    pub title: String,
    pub budget: String,
    pub bid_amount: String,
    #[serde(default)]
    pub target_category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration_days: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AdStats {
    pub total_spent: Decimal,
    pub total_impressions: u64,
    pub average_ctr: f64,
    pub active_campaigns: usize,
    pub paused_campaigns: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    ViewPayout,
    Donation,
    Subscription,
    NftSale,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PaymentTransaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: Decimal,
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub video_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
    pub timestamp: String,
    pub tx_hash: String,
    pub status: TransactionStatus,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreatorEarnings {
    pub total_earnings: Decimal,
    pub monthly_earnings: Decimal,
    pub pending_payouts: Decimal,
    pub total_views: u64,
    pub average_view_payout: Decimal,
    pub last_payout_date: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Payout {
    pub id: u32,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: String,
    pub tx_hash: String,
    pub status: TransactionStatus,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EarningVideo {
    pub id: u32,
    pub title: String,
    pub views: String,
    pub earnings: Decimal,
    pub thumbnail: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RevenueDistribution {
    pub creators: Decimal,
    pub platform: Decimal,
    pub ecosystem: Decimal,
}

#[derive(Debug, Serialize, Deserialize)]
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
    #[serde(default)]
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
    pub usd: Decimal,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct VideoMetadata {
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub thumbnail: Option<String>,
    pub creator: String,
    pub created_at: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct IpfsUploadResult {
    pub hash: String,
    pub url: String,
    pub size: u64,
}

/// A selected video that has already been pinned and is ready for submit.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PinnedFile {
    pub cid: String,
    pub gateway_url: String,
    pub file_name: String,
    pub content_type: String,
    pub size: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NftMintResult {
    pub token_id: String,
    pub transaction_hash: String,
    pub contract_address: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MintRequest {
    pub ipfs_hash: String,
    pub metadata: VideoMetadata,
    #[serde(default = "default_mint_price")]
    pub price: String,
}

fn default_mint_price() -> String {
    "0".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TokenAttribute {
    pub trait_type: String,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TokenMetadata {
    pub name: String,
    pub description: String,
    pub image: String,
    pub attributes: Vec<TokenAttribute>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct UploadRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub thumbnail_hash: Option<String>,
    #[serde(default = "default_monetization")]
    pub monetization: bool,
    #[serde(default = "default_nft_price")]
    pub nft_price: String,
    #[serde(default)]
    pub file: Option<PinnedFile>,
}

fn default_monetization() -> bool {
    true
}

fn default_nft_price() -> String {
    "0.1".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
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

#[derive(Debug, Serialize, Deserialize)]
pub struct PinataEnvResponse {
    pub jwt: Option<String>,
    pub gateway: Option<String>,
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

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip)]
    pub status: Status,
}

impl ErrorResponse {
    pub fn bad_request(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
            status: Status::BadRequest,
        }
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }
}

impl<'r> Responder<'r, 'static> for ErrorResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let json = serde_json::to_string(&self).map_err(|_| Status::InternalServerError)?;
        Response::build()
            .status(self.status)
            .header(ContentType::JSON)
            .sized_body(json.len(), Cursor::new(json))
            .ok()
    }
}
