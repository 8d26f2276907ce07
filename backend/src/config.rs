use crate::services::campaign_service::CampaignStore;
use crate::services::comment_service::CommentStore;
use crate::services::ipfs_service::{IpfsClient, DEFAULT_GATEWAY};
use crate::services::latency::Latency;
use crate::services::nft_service::NftContract;
use crate::services::payment_service::PaymentSystem;
use crate::services::upload_service::UploadJobs;
use crate::utils::today;
use crate::AppState;
use anyhow::Result;
use env_logger::Builder;
use lazy_static::lazy_static;
use log::{info, warn, LevelFilter};
use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use std::env;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

lazy_static! {
    pub static ref PINATA_JWT: Option<String> = env::var("PINATA_JWT")
        .ok()
        .filter(|jwt| !jwt.trim().is_empty());
    pub static ref PINATA_GATEWAY: String = env::var("NEXT_PUBLIC_PINATA_GATEWAY")
        .or_else(|_| env::var("PINATA_GATEWAY"))
        .unwrap_or_else(|_| DEFAULT_GATEWAY.to_string());
    pub static ref SIMULATED_LATENCY_SCALE: f64 = env::var("SIMULATED_LATENCY_SCALE")
        .unwrap_or_else(|_| "1.0".to_string())
        .parse::<f64>()
        .unwrap_or(1.0);
    pub static ref CAMPAIGN_EXPIRY_SCHEDULE: String =
        env::var("CAMPAIGN_EXPIRY_SCHEDULE").unwrap_or_else(|_| "0 * * * * *".to_string());
    pub static ref UPLOAD_JOB_TTL_SECS: i64 = env::var("UPLOAD_JOB_TTL_SECS")
        .ok()
        .and_then(|secs| secs.parse::<i64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(3600);
    pub static ref FRONTEND_ORIGIN: String =
        env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| "http://localhost:8080".to_string());
}

pub fn init_logger() {
    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
    info!("Starting ThreeTube backend...");
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

pub fn log_configuration() {
    info!("IPFS gateway: {}", &*PINATA_GATEWAY);
    info!(
        "Pinata pinning: {}",
        match (&*PINATA_JWT, cfg!(feature = "pinata")) {
            (Some(_), true) => "enabled",
            (Some(_), false) => "token set, but built without the pinata feature",
            (None, _) => "disabled (simulated)",
        }
    );
    info!("Simulated latency scale: {}", *SIMULATED_LATENCY_SCALE);
    info!("Campaign expiry schedule: {}", &*CAMPAIGN_EXPIRY_SCHEDULE);
    info!("Finished upload jobs kept for {}s", *UPLOAD_JOB_TTL_SECS);
    info!("Allowed frontend origin: {}", &*FRONTEND_ORIGIN);
}

pub async fn setup_scheduler(campaigns: Arc<CampaignStore>, uploads: Arc<UploadJobs>) -> Result<JobScheduler> {
    let scheduler = JobScheduler::new().await?;
    let campaigns_clone = campaigns.clone();
    let uploads_clone = uploads.clone();

    let expiry_job = Job::new_async(CAMPAIGN_EXPIRY_SCHEDULE.as_str(), move |_uuid, _l| {
        let store = campaigns_clone.clone();
        Box::pin(async move {
            let completed = store.expire(&today()).await;
            if !completed.is_empty() {
                info!("Completed ad campaigns {completed:?}");
            }
        })
    })?;

    let eviction_job = Job::new_async(CAMPAIGN_EXPIRY_SCHEDULE.as_str(), move |_uuid, _l| {
        let jobs = uploads_clone.clone();
        Box::pin(async move {
            let ttl = chrono::Duration::seconds(*UPLOAD_JOB_TTL_SECS);
            let evicted = jobs.evict_finished(chrono::Utc::now(), ttl);
            if !evicted.is_empty() {
                info!("Evicted {} finished upload jobs, {} left", evicted.len(), jobs.len());
            }
        })
    })?;

    scheduler.add(expiry_job).await?;
    scheduler.add(eviction_job).await?;
    scheduler.start().await?;
    info!("Campaign expiry and upload eviction scheduler started.");

    Ok(scheduler)
}

/// Services and stores without the cron job attached.
pub fn create_services(latency: Latency) -> AppState {
    if latency.scale() == 0.0 {
        warn!("Simulated latency disabled, mock calls resolve immediately");
    }
    AppState {
        ipfs: IpfsClient::new(&PINATA_GATEWAY, PINATA_JWT.clone(), latency),
        nft: NftContract::new(latency),
        payments: PaymentSystem::new(latency),
        comments: CommentStore::new(latency),
        campaigns: Arc::new(CampaignStore::new()),
        uploads: Arc::new(UploadJobs::new()),
        latency,
        scheduler: None,
    }
}

pub async fn create_app_state() -> Result<AppState> {
    let mut state = create_services(Latency::scaled(*SIMULATED_LATENCY_SCALE));
    let scheduler = setup_scheduler(state.campaigns.clone(), state.uploads.clone()).await?;
    state.scheduler = Some(Mutex::new(scheduler));
    Ok(state)
}

pub fn create_cors() -> Result<rocket_cors::Cors> {
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::some_exact(&[FRONTEND_ORIGIN.as_str()]))
        .allowed_methods(
            vec![Method::Get, Method::Post, Method::Delete, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allowed_headers(AllowedHeaders::some(&["Accept", "Content-Type"]))
        .allow_credentials(true)
        .to_cors()
        .map_err(|e| anyhow::anyhow!("Failed to create CORS options: {}", e))?;

    Ok(cors)
}
