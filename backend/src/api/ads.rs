use crate::models::{AdCampaign, AdStats, ErrorResponse, NewCampaign};
use crate::AppState;
use log::warn;
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::{get, post, State};

#[get("/campaigns")]
pub async fn list_campaigns(state: &State<AppState>) -> Json<Vec<AdCampaign>> {
    Json(state.campaigns.list().await)
}

#[post("/campaigns", data = "<request>")]
pub async fn create_campaign(
    state: &State<AppState>,
    request: Json<NewCampaign>,
) -> Result<Custom<Json<AdCampaign>>, ErrorResponse> {
    match state.campaigns.create(&request).await {
        Ok(campaign) => Ok(Custom(Status::Created, Json(campaign))),
        Err(e) => {
            warn!("Rejected campaign {:?}: {e}", request.title);
            Err(ErrorResponse::bad_request("invalid_campaign", e.to_string()))
        }
    }
}

#[post("/campaigns/<id>/toggle")]
pub async fn toggle_campaign(state: &State<AppState>, id: u32) -> Option<Json<AdCampaign>> {
    state.campaigns.toggle(id).await.map(Json)
}

#[get("/stats")]
pub async fn campaign_stats(state: &State<AppState>) -> Json<AdStats> {
    Json(state.campaigns.stats().await)
}
