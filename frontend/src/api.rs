use crate::env_variable_utils::BACKEND_URL;
use crate::models::{
    AdCampaign, AdStats, AnalyticsOverview, Comment, CreatorEarnings, DonationRequest,
    EarningVideo, ErrorResponse, IpfsUploadResult, NewCampaign, NewComment, PaymentTransaction,
    Payout, PinnedFile, TokenPrice, UploadJob, UploadRequest, Video, VideoSummary,
    ViewPayoutRequest, WithdrawRequest,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{File, FormData};

fn url(path: &str) -> String {
    format!("{}{}", &*BACKEND_URL, path)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|e| format!("JSON parse error: {}", e))
    } else {
        Err(read_error(response).await)
    }
}

/// Prefers the backend's `ErrorResponse` message over the bare status.
async fn read_error(response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(error) => error.message,
        Err(_) => format!("HTTP error: {}", status),
    }
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&url(path))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    read_json(response).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = Request::post(&url(path))
        .json(body)
        .map_err(|e| format!("Request error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    read_json(response).await
}

async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::post(&url(path))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    read_json(response).await
}

async fn post_file<T: DeserializeOwned>(path: &str, file: &File) -> Result<T, String> {
    let form = FormData::new().map_err(|e| format!("Request error: {:?}", e))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| format!("Request error: {:?}", e))?;
    let response = Request::post(&url(path))
        .body(form)
        .map_err(|e| format!("Request error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    read_json(response).await
}

pub async fn fetch_videos() -> Result<Vec<VideoSummary>, String> {
    get_json("/videos").await
}

pub async fn fetch_video(id: u32) -> Result<Video, String> {
    get_json(&format!("/videos/{id}")).await
}

pub async fn fetch_recommendations(id: u32) -> Result<Vec<VideoSummary>, String> {
    get_json(&format!("/videos/{id}/recommendations")).await
}

pub async fn fetch_comments(video_id: u32) -> Result<Vec<Comment>, String> {
    get_json(&format!("/videos/{video_id}/comments")).await
}

/// `Ok(None)` when the backend ignored a blank comment.
pub async fn post_comment(video_id: u32, content: &str) -> Result<Option<Comment>, String> {
    let body = NewComment {
        content: content.to_string(),
    };
    let response = Request::post(&url(&format!("/videos/{video_id}/comments")))
        .json(&body)
        .map_err(|e| format!("Request error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    if response.status() == 204 {
        return Ok(None);
    }
    read_json(response).await.map(Some)
}

pub async fn like_comment(video_id: u32, comment_id: u32) -> Result<Comment, String> {
    post_empty(&format!("/videos/{video_id}/comments/{comment_id}/like")).await
}

pub async fn pin_video(file: &File) -> Result<PinnedFile, String> {
    post_file("/upload/file", file).await
}

pub async fn upload_thumbnail(file: &File) -> Result<IpfsUploadResult, String> {
    post_file("/upload/thumbnail", file).await
}

pub async fn start_upload(request: &UploadRequest) -> Result<UploadJob, String> {
    post_json("/upload", request).await
}

pub async fn fetch_upload(job_id: &str) -> Result<UploadJob, String> {
    get_json(&format!("/upload/{}", urlencoding::encode(job_id))).await
}

pub async fn forget_upload(job_id: &str) -> Result<(), String> {
    let response = Request::delete(&url(&format!("/upload/{}", urlencoding::encode(job_id))))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    if response.ok() {
        Ok(())
    } else {
        Err(read_error(response).await)
    }
}

pub async fn track_view(request: &ViewPayoutRequest) -> Result<PaymentTransaction, String> {
    post_json("/payments/view", request).await
}

pub async fn donate(request: &DonationRequest) -> Result<PaymentTransaction, String> {
    post_json("/payments/donation", request).await
}

pub async fn fetch_token_price() -> Result<TokenPrice, String> {
    get_json("/payments/token-price").await
}

pub async fn fetch_earnings(address: &str) -> Result<CreatorEarnings, String> {
    get_json(&format!("/earnings/{}", urlencoding::encode(address))).await
}

pub async fn fetch_payouts(address: &str) -> Result<Vec<Payout>, String> {
    get_json(&format!("/earnings/{}/payouts", urlencoding::encode(address))).await
}

pub async fn fetch_top_videos(address: &str) -> Result<Vec<EarningVideo>, String> {
    get_json(&format!("/earnings/{}/top-videos", urlencoding::encode(address))).await
}

pub async fn withdraw(request: &WithdrawRequest) -> Result<PaymentTransaction, String> {
    post_json("/earnings/withdraw", request).await
}

pub async fn fetch_campaigns() -> Result<Vec<AdCampaign>, String> {
    get_json("/ads/campaigns").await
}

pub async fn create_campaign(request: &NewCampaign) -> Result<AdCampaign, String> {
    post_json("/ads/campaigns", request).await
}

pub async fn toggle_campaign(id: u32) -> Result<AdCampaign, String> {
    post_empty(&format!("/ads/campaigns/{id}/toggle")).await
}

pub async fn fetch_ad_stats() -> Result<AdStats, String> {
    get_json("/ads/stats").await
}

pub async fn fetch_analytics() -> Result<AnalyticsOverview, String> {
    get_json("/analytics/overview").await
}
