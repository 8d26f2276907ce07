use crate::models::AnalyticsOverview;
use crate::services::analytics_service;
use rocket::get;
use rocket::serde::json::Json;

#[get("/overview")]
pub async fn analytics_overview() -> Json<AnalyticsOverview> {
    Json(analytics_service::overview())
}
