use crate::models::{MintRequest, NftMintResult, TokenMetadata, VideoMetadata};
use crate::AppState;
use rocket::serde::json::{json, Json, Value};
use rocket::{get, post, State};

#[get("/<hash>/metadata")]
pub async fn get_ipfs_metadata(state: &State<AppState>, hash: &str) -> Json<VideoMetadata> {
    Json(state.ipfs.get_video_metadata(hash))
}

#[post("/<hash>/pin")]
pub async fn pin_ipfs_content(state: &State<AppState>, hash: &str) -> Json<Value> {
    let pinned = state.ipfs.pin_content(hash).await;
    Json(json!({
        "hash": hash,
        "pinned": pinned,
        "url": state.ipfs.gateway_url(hash),
    }))
}

#[get("/<token_id>")]
pub async fn get_nft_metadata(state: &State<AppState>, token_id: &str) -> Json<TokenMetadata> {
    Json(state.nft.get_token_metadata(token_id))
}

#[post("/mint", data = "<request>")]
pub async fn mint_nft(state: &State<AppState>, request: Json<MintRequest>) -> Json<NftMintResult> {
    Json(
        state
            .nft
            .mint_video_nft(&request.ipfs_hash, &request.metadata, &request.price)
            .await,
    )
}
