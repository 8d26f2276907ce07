use crate::config::{PINATA_GATEWAY, PINATA_JWT};
use crate::models::PinataEnvResponse;
use log::warn;
use rocket::get;
use rocket::serde::json::Json;

// Unauthenticated: anyone who can reach the backend can read the pinning token.
#[get("/test-env")]
pub async fn test_env() -> Json<PinataEnvResponse> {
    if PINATA_JWT.is_some() {
        warn!("Serving PINATA_JWT through /api/test-env");
    }
    Json(PinataEnvResponse {
        jwt: PINATA_JWT.clone(),
        gateway: Some(PINATA_GATEWAY.clone()),
    })
}
