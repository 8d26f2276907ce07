use crate::models::{
    CreatorEarnings, DonationRequest, EarningVideo, ErrorResponse, PaymentTransaction, Payout,
    RevenueDistribution, TokenPrice, ViewPayoutRequest, WithdrawRequest,
};
use crate::services::earnings_service;
use crate::utils::parse_amount;
use crate::AppState;
use log::warn;
use rocket::serde::json::Json;
use rocket::{get, post, State};
use rust_decimal::Decimal;

/// A strictly positive token amount, or a 400 naming the field.
fn positive_amount(field: &str, input: &str) -> Result<Decimal, ErrorResponse> {
    match parse_amount(input) {
        Some(amount) if amount > Decimal::ZERO => Ok(amount),
        _ => {
            warn!("Rejected {field} {input:?}");
            Err(ErrorResponse::bad_request(
                "invalid_amount",
                format!("{field} must be a positive $TUBE amount"),
            ))
        }
    }
}

#[post("/view", data = "<request>")]
pub async fn view_payout(
    state: &State<AppState>,
    request: Json<ViewPayoutRequest>,
) -> Json<PaymentTransaction> {
    Json(
        state
            .payments
            .process_view_payout(
                request.video_id,
                &request.creator_address,
                &request.viewer_address,
            )
            .await,
    )
}

#[post("/donation", data = "<request>")]
pub async fn donate(
    state: &State<AppState>,
    request: Json<DonationRequest>,
) -> Result<Json<PaymentTransaction>, ErrorResponse> {
    let request = request.into_inner();
    let amount = positive_amount("Donation amount", &request.amount)?;
    Ok(Json(
        state
            .payments
            .process_donation(amount, &request.from, &request.to, request.message)
            .await,
    ))
}

#[get("/revenue-split?<total>")]
pub async fn revenue_split(
    state: &State<AppState>,
    total: &str,
) -> Result<Json<RevenueDistribution>, ErrorResponse> {
    let total = parse_amount(total).ok_or_else(|| {
        ErrorResponse::bad_request("invalid_amount", "total must be a non-negative amount")
    })?;
    Ok(Json(state.payments.calculate_revenue_distribution(total)))
}

#[get("/token-price")]
pub async fn token_price(state: &State<AppState>) -> Json<TokenPrice> {
    Json(TokenPrice {
        symbol: "TUBE".to_string(),
        usd: state.payments.get_tube_token_price(),
    })
}

#[get("/<address>")]
pub async fn creator_earnings(state: &State<AppState>, address: &str) -> Json<CreatorEarnings> {
    Json(state.payments.get_creator_earnings(address))
}

#[get("/<address>/payouts")]
pub async fn creator_payouts(address: &str) -> Json<Vec<Payout>> {
    Json(earnings_service::recent_payouts(address))
}

#[get("/<address>/top-videos")]
pub async fn creator_top_videos(address: &str) -> Json<Vec<EarningVideo>> {
    Json(earnings_service::top_earning_videos(address))
}

#[post("/withdraw", data = "<request>")]
pub async fn withdraw(
    state: &State<AppState>,
    request: Json<WithdrawRequest>,
) -> Result<Json<PaymentTransaction>, ErrorResponse> {
    let amount = positive_amount("Withdrawal amount", &request.amount)?;
    Ok(Json(
        state
            .payments
            .withdraw_earnings(&request.creator_address, amount)
            .await,
    ))
}
