use crate::config::create_services;
use crate::models::{
    AdCampaign, AdStats, CampaignStatus, Comment, PaymentTransaction, PinnedFile,
    RevenueDistribution, UploadJob, UploadStage, Video, VideoSummary,
};
use crate::services::latency::Latency;
use crate::build_rocket;
use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::Client;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use std::time::Duration;

const BOUNDARY: &str = "threetube-test-boundary";

async fn client() -> Client {
    Client::tracked(build_rocket(create_services(Latency::none())))
        .await
        .expect("valid rocket instance")
}

fn multipart(file_name: &str, content_type: &str, contents: &str) -> (ContentType, String) {
    let body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
         Content-Type: {content_type}\r\n\r\n\
         {contents}\r\n\
         --{BOUNDARY}--\r\n"
    );
    let header = ContentType::new("multipart", "form-data").with_params(("boundary", BOUNDARY));
    (header, body)
}

fn pinned_file() -> Value {
    json!({
        "cid": "QmPinnedTestContent",
        "gateway_url": "https://ipfs.io/ipfs/QmPinnedTestContent",
        "file_name": "clip.mp4",
        "content_type": "video/mp4",
        "size": 9
    })
}

#[rocket::async_test]
async fn grid_lists_six_videos() {
    let client = client().await;
    let response = client.get("/videos").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    let videos: Vec<VideoSummary> = response.into_json().await.unwrap();
    assert_eq!(videos.len(), 6);
}

#[rocket::async_test]
async fn unknown_video_falls_back_to_first_record() {
    let client = client().await;
    let video: Video = client
        .get("/videos/not-a-number")
        .dispatch()
        .await
        .into_json()
        .await
        .unwrap();
    assert_eq!(video.id, 1);
}

#[rocket::async_test]
async fn recommendations_exclude_the_resolved_watch_record() {
    let client = client().await;
    for id in ["1", "3", "999", "abc"] {
        let cards: Vec<VideoSummary> = client
            .get(format!("/videos/{id}/recommendations"))
            .dispatch()
            .await
            .into_json()
            .await
            .unwrap();
        let ids: Vec<u32> = cards.iter().map(|card| card.id).collect();
        assert_eq!(ids, vec![2, 3, 4], "recommendations for {id}");
    }
}

#[rocket::async_test]
async fn comments_on_unknown_videos_are_404() {
    let client = client().await;
    let listed = client.get("/videos/4242/comments").dispatch().await;
    assert_eq!(listed.status(), Status::NotFound);

    let posted = client
        .post("/videos/4242/comments")
        .json(&json!({ "content": "hello" }))
        .dispatch()
        .await;
    assert_eq!(posted.status(), Status::NotFound);
    let body: Value = posted.into_json().await.unwrap();
    assert_eq!(body["error"], "video_not_found");

    let liked = client.post("/videos/4242/comments/1/like").dispatch().await;
    assert_eq!(liked.status(), Status::NotFound);
}

#[rocket::async_test]
async fn blank_comment_is_ignored_and_real_one_prepended() {
    let client = client().await;

    let blank = client
        .post("/videos/1/comments")
        .json(&json!({ "content": "   " }))
        .dispatch()
        .await;
    assert_eq!(blank.status(), Status::NoContent);
    let thread: Vec<Comment> = client
        .get("/videos/1/comments")
        .dispatch()
        .await
        .into_json()
        .await
        .unwrap();
    assert_eq!(thread.len(), 2);

    let posted = client
        .post("/videos/1/comments")
        .json(&json!({ "content": "Loved it" }))
        .dispatch()
        .await;
    assert_eq!(posted.status(), Status::Created);
    let comment: Comment = posted.into_json().await.unwrap();
    assert_eq!(comment.id, 3);

    let thread: Vec<Comment> = client
        .get("/videos/1/comments")
        .dispatch()
        .await
        .into_json()
        .await
        .unwrap();
    assert_eq!(thread[0].content, "Loved it");
}

#[rocket::async_test]
async fn liking_missing_comment_is_404() {
    let client = client().await;
    let response = client.post("/videos/1/comments/77/like").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["error"], "comment_not_found");
}

#[rocket::async_test]
async fn campaign_toggle_round_trips_status() {
    let client = client().await;
    let paused: AdCampaign = client
        .post("/ads/campaigns/1/toggle")
        .dispatch()
        .await
        .into_json()
        .await
        .unwrap();
    assert_eq!(paused.status, CampaignStatus::Paused);

    let stats: AdStats = client
        .get("/ads/stats")
        .dispatch()
        .await
        .into_json()
        .await
        .unwrap();
    assert_eq!(stats.paused_campaigns, 1);

    let resumed: AdCampaign = client
        .post("/ads/campaigns/1/toggle")
        .dispatch()
        .await
        .into_json()
        .await
        .unwrap();
    assert_eq!(resumed.status, CampaignStatus::Active);

    let missing = client.post("/ads/campaigns/9/toggle").dispatch().await;
    assert_eq!(missing.status(), Status::NotFound);
}

#[rocket::async_test]
async fn campaign_creation_validates_input() {
    let client = client().await;
    let rejected = client
        .post("/ads/campaigns")
        .json(&json!({ "title": "", "budget": "10", "bid_amount": "0.001" }))
        .dispatch()
        .await;
    assert_eq!(rejected.status(), Status::BadRequest);

    let created = client
        .post("/ads/campaigns")
        .json(&json!({
            "title": "NFT Drop",
            "budget": "10",
            "bid_amount": "0.001",
            "target_category": "NFTs",
            "duration_days": 3
        }))
        .dispatch()
        .await;
    assert_eq!(created.status(), Status::Created);
    let campaign: AdCampaign = created.into_json().await.unwrap();
    assert_eq!(campaign.id, 3);
    assert_eq!(campaign.status, CampaignStatus::Active);
}

#[rocket::async_test]
async fn view_payout_amount_is_fixed() {
    let client = client().await;
    let response = client
        .post("/payments/view")
        .json(&json!({
            "video_id": 1,
            "creator_address": "0x1234...5678",
            "viewer_address": "0xviewer"
        }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["amount"], "0.001200");
    assert_eq!(body["type"], "view_payout");
}

#[rocket::async_test]
async fn donation_requires_positive_amount() {
    let client = client().await;
    let zero = client
        .post("/payments/donation")
        .json(&json!({ "amount": "0", "from": "0xfan", "to": "0xcreator" }))
        .dispatch()
        .await;
    assert_eq!(zero.status(), Status::BadRequest);

    let tx: PaymentTransaction = client
        .post("/payments/donation")
        .json(&json!({ "amount": "0.05", "from": "0xfan", "to": "0xcreator", "message": "gm" }))
        .dispatch()
        .await
        .into_json()
        .await
        .unwrap();
    assert_eq!(tx.amount, dec!(0.05));
    assert!(tx.id.starts_with("donation_"));
}

#[rocket::async_test]
async fn revenue_split_and_price() {
    let client = client().await;
    let split: RevenueDistribution = client
        .get("/payments/revenue-split?total=100")
        .dispatch()
        .await
        .into_json()
        .await
        .unwrap();
    assert_eq!(split.creators, dec!(70));
    assert_eq!(split.ecosystem, dec!(10));

    let bad = client
        .get("/payments/revenue-split?total=lots")
        .dispatch()
        .await;
    assert_eq!(bad.status(), Status::BadRequest);

    let price: Value = client
        .get("/payments/token-price")
        .dispatch()
        .await
        .into_json()
        .await
        .unwrap();
    assert_eq!(price["usd"], "0.85");
}

#[rocket::async_test]
async fn earnings_endpoints_respond() {
    let client = client().await;
    for path in [
        "/earnings/0xabc",
        "/earnings/0xabc/payouts",
        "/earnings/0xabc/top-videos",
        "/analytics/overview",
        "/nft/42",
        "/ipfs/QmSample/metadata",
        "/api/test-env",
    ] {
        let response = client.get(path).dispatch().await;
        assert_eq!(response.status(), Status::Ok, "GET {path}");
    }

    let withdrawal: PaymentTransaction = client
        .post("/earnings/withdraw")
        .json(&json!({ "creator_address": "0xabc", "amount": "123.45" }))
        .dispatch()
        .await
        .into_json()
        .await
        .unwrap();
    assert!(withdrawal.id.starts_with("withdrawal_"));
}

#[rocket::async_test]
async fn non_video_selection_is_rejected() {
    let client = client().await;
    let (header, body) = multipart("notes.txt", "text/plain", "hello");
    let response = client
        .post("/upload/file")
        .header(header)
        .body(body)
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::UnsupportedMediaType);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["message"], "Please select a valid video file");
}

#[rocket::async_test]
async fn video_selection_is_pinned() {
    let client = client().await;
    let (header, body) = multipart("clip.mp4", "video/mp4", "fakevideo");
    let response = client
        .post("/upload/file")
        .header(header)
        .body(body)
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let pinned: PinnedFile = response.into_json().await.unwrap();
    assert!(pinned.cid.starts_with("Qm"));
    assert_eq!(pinned.size, 9);
    assert_eq!(pinned.gateway_url, format!("https://ipfs.io/ipfs/{}", pinned.cid));
}

#[rocket::async_test]
async fn submit_without_file_or_title_is_rejected() {
    let client = client().await;
    let no_file = client
        .post("/upload")
        .json(&json!({ "title": "My video" }))
        .dispatch()
        .await;
    assert_eq!(no_file.status(), Status::BadRequest);
    let body: Value = no_file.into_json().await.unwrap();
    assert_eq!(body["message"], "Please select a video file");

    let no_title = client
        .post("/upload")
        .json(&json!({ "title": "  ", "file": pinned_file() }))
        .dispatch()
        .await;
    assert_eq!(no_title.status(), Status::BadRequest);
    let body: Value = no_title.into_json().await.unwrap();
    assert_eq!(body["message"], "Please enter a video title");
}

#[rocket::async_test]
async fn upload_job_runs_to_completion_and_can_be_forgotten() {
    let client = client().await;
    let started = client
        .post("/upload")
        .json(&json!({ "title": "My video", "tags": "web3, demo", "file": pinned_file() }))
        .dispatch()
        .await;
    assert_eq!(started.status(), Status::Accepted);
    let job: UploadJob = started.into_json().await.unwrap();
    assert_eq!(job.progress.stage, UploadStage::Idle);

    let path = format!("/upload/{}", job.id);
    let mut finished = None;
    for _ in 0..100 {
        let current: UploadJob = client
            .get(path.as_str())
            .dispatch()
            .await
            .into_json()
            .await
            .unwrap();
        if current.progress.stage == UploadStage::Complete {
            finished = Some(current);
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    let finished = finished.expect("pipeline should complete");
    assert_eq!(finished.history.len(), 5);
    assert_eq!(finished.ipfs_hash.as_deref(), Some("QmPinnedTestContent"));

    let forgotten = client.delete(path.as_str()).dispatch().await;
    assert_eq!(forgotten.status(), Status::NoContent);
    let gone = client.get(path.as_str()).dispatch().await;
    assert_eq!(gone.status(), Status::NotFound);
}
