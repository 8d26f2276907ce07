#[macro_use]
extern crate rocket;

mod api;
mod config;
mod models;
mod services;
mod utils;

#[cfg(test)]
mod tests;

use crate::services::campaign_service::CampaignStore;
use crate::services::comment_service::CommentStore;
use crate::services::ipfs_service::IpfsClient;
use crate::services::latency::Latency;
use crate::services::nft_service::NftContract;
use crate::services::payment_service::PaymentSystem;
use crate::services::upload_service::UploadJobs;
use log::error;
use rocket::data::{Limits, ToByteUnit};
use rocket::{Build, Rocket};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_cron_scheduler::JobScheduler;

pub struct AppState {
    pub ipfs: IpfsClient,
    pub nft: NftContract,
    pub payments: PaymentSystem,
    pub comments: CommentStore,
    pub campaigns: Arc<CampaignStore>,
    pub uploads: Arc<UploadJobs>,
    pub latency: Latency,
    pub scheduler: Option<Mutex<JobScheduler>>,
}

#[get("/")]
fn index() -> &'static str {
    "ThreeTube backend"
}

pub fn build_rocket(app_state: AppState) -> Rocket<Build> {
    let limits = Limits::default()
        .limit("file", 500.mebibytes())
        .limit("data-form", 512.mebibytes())
        .limit("json", 1.mebibytes());
    let figment = rocket::Config::figment().merge(("limits", limits));

    rocket::custom(figment)
        .manage(app_state)
        .mount("/", routes![index])
        .mount("/api", routes![api::test_env])
        .mount(
            "/videos",
            routes![
                api::list_videos,
                api::get_video,
                api::get_recommendations,
                api::list_comments,
                api::post_comment,
                api::like_comment
            ],
        )
        .mount(
            "/upload",
            routes![
                api::upload_file,
                api::upload_thumbnail,
                api::start_upload,
                api::get_upload,
                api::forget_upload
            ],
        )
        .mount(
            "/ipfs",
            routes![api::get_ipfs_metadata, api::pin_ipfs_content],
        )
        .mount("/nft", routes![api::get_nft_metadata, api::mint_nft])
        .mount(
            "/payments",
            routes![
                api::view_payout,
                api::donate,
                api::revenue_split,
                api::token_price
            ],
        )
        .mount(
            "/earnings",
            routes![
                api::creator_earnings,
                api::creator_payouts,
                api::creator_top_videos,
                api::withdraw
            ],
        )
        .mount(
            "/ads",
            routes![
                api::list_campaigns,
                api::create_campaign,
                api::toggle_campaign,
                api::campaign_stats
            ],
        )
        .mount("/analytics", routes![api::analytics_overview])
}

#[launch]
async fn rocket() -> _ {
    config::load_environment();
    config::init_logger();
    config::log_configuration();

    let app_state = match config::create_app_state().await {
        Ok(state) => state,
        Err(e) => {
            error!("Failed to create app state: {e:?}");
            std::process::exit(1);
        }
    };

    let cors = match config::create_cors() {
        Ok(cors) => cors,
        Err(e) => {
            error!("Failed to configure CORS: {e:?}");
            std::process::exit(1);
        }
    };

    build_rocket(app_state).attach(cors)
}
