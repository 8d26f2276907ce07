use crate::models::{
    CreatorEarnings, PaymentTransaction, RevenueDistribution, TransactionStatus, TransactionType,
};
use crate::services::latency::Latency;
use crate::utils::{now_millis, now_rfc3339, random_tx_hash};
use chrono::{Duration, Utc};
use log::info;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const TREASURY_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

const BASE_VIEW_PAYOUT: Decimal = dec!(0.001);
const QUALITY_MULTIPLIER: Decimal = dec!(1.2);
const TUBE_PRICE_USD: Decimal = dec!(0.85);

const VIEW_PAYOUT_DELAY_MS: u64 = 1000;
const DONATION_DELAY_MS: u64 = 2000;
const WITHDRAWAL_DELAY_MS: u64 = 3000;

/// Simulated $TUBE settlement. Every call waits, then fabricates a completed
/// transaction.
#[derive(Debug, Clone, Default)]
pub struct PaymentSystem {
    latency: Latency,
}

/// Per-view payout, fixed to six decimal places.
pub fn view_payout_amount() -> Decimal {
    let mut amount = BASE_VIEW_PAYOUT * QUALITY_MULTIPLIER;
    amount.rescale(6);
    amount
}

impl PaymentSystem {
    pub fn new(latency: Latency) -> Self {
        PaymentSystem { latency }
    }

    pub async fn process_view_payout(
        &self,
        video_id: u32,
        creator_address: &str,
        viewer_address: &str,
    ) -> PaymentTransaction {
        info!(
            "Processing view payout for video {video_id} (creator {creator_address}, viewer {viewer_address})..."
        );
        self.latency.wait(VIEW_PAYOUT_DELAY_MS).await;

        let transaction = PaymentTransaction {
            id: format!("view_{}", now_millis()),
            kind: TransactionType::ViewPayout,
            amount: view_payout_amount(),
            from: TREASURY_ADDRESS.to_string(),
            to: creator_address.to_string(),
            video_id: Some(video_id),
            message: None,
            timestamp: now_rfc3339(),
            tx_hash: random_tx_hash(),
            status: TransactionStatus::Completed,
        };
        info!("View payout processed: {} ({})", transaction.id, transaction.tx_hash);
        transaction
    }

    pub async fn process_donation(
        &self,
        amount: Decimal,
        from_address: &str,
        to_address: &str,
        message: Option<String>,
    ) -> PaymentTransaction {
        info!("Processing donation of {amount} from {from_address} to {to_address}...");
        self.latency.wait(DONATION_DELAY_MS).await;

        let transaction = PaymentTransaction {
            id: format!("donation_{}", now_millis()),
            kind: TransactionType::Donation,
            amount,
            from: from_address.to_string(),
            to: to_address.to_string(),
            video_id: None,
            message: message.filter(|m| !m.trim().is_empty()),
            timestamp: now_rfc3339(),
            tx_hash: random_tx_hash(),
            status: TransactionStatus::Completed,
        };
        info!("Donation processed: {} ({})", transaction.id, transaction.tx_hash);
        transaction
    }

    pub fn get_creator_earnings(&self, creator_address: &str) -> CreatorEarnings {
        info!("Fetching creator earnings for {creator_address}");
        CreatorEarnings {
            total_earnings: dec!(2847.50),
            monthly_earnings: dec!(456.20),
            pending_payouts: dec!(123.45),
            total_views: 145_200,
            average_view_payout: dec!(0.0032),
            last_payout_date: (Utc::now() - Duration::days(1)).to_rfc3339(),
        }
    }

    /// Withdrawals settle accumulated view payouts, so they are recorded as
    /// `view_payout` transactions from the treasury.
    pub async fn withdraw_earnings(&self, creator_address: &str, amount: Decimal) -> PaymentTransaction {
        info!("Processing withdrawal of {amount} for {creator_address}...");
        self.latency.wait(WITHDRAWAL_DELAY_MS).await;

        let transaction = PaymentTransaction {
            id: format!("withdrawal_{}", now_millis()),
            kind: TransactionType::ViewPayout,
            amount,
            from: TREASURY_ADDRESS.to_string(),
            to: creator_address.to_string(),
            video_id: None,
            message: None,
            timestamp: now_rfc3339(),
            tx_hash: random_tx_hash(),
            status: TransactionStatus::Completed,
        };
        info!("Withdrawal processed: {} ({})", transaction.id, transaction.tx_hash);
        transaction
    }

    pub fn calculate_revenue_distribution(&self, total_revenue: Decimal) -> RevenueDistribution {
        RevenueDistribution {
            creators: total_revenue * dec!(0.7),
            platform: total_revenue * dec!(0.2),
            ecosystem: total_revenue * dec!(0.1),
        }
    }

    pub fn get_tube_token_price(&self) -> Decimal {
        TUBE_PRICE_USD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_payout_has_six_decimals() {
        assert_eq!(view_payout_amount().to_string(), "0.001200");
    }

    #[tokio::test]
    async fn view_payout_comes_from_treasury() {
        let payments = PaymentSystem::new(Latency::none());
        let tx = payments.process_view_payout(1, "0xcreator", "0xviewer").await;
        assert_eq!(tx.kind, TransactionType::ViewPayout);
        assert_eq!(tx.from, TREASURY_ADDRESS);
        assert_eq!(tx.to, "0xcreator");
        assert_eq!(tx.video_id, Some(1));
        assert!(tx.id.starts_with("view_"));
        assert_eq!(tx.tx_hash.len(), 66);
        assert_eq!(tx.status, TransactionStatus::Completed);
    }

    #[tokio::test]
    async fn donation_keeps_amount_and_message() {
        let payments = PaymentSystem::new(Latency::none());
        let tx = payments
            .process_donation(dec!(0.05), "0xfan", "0xcreator", Some("gm".to_string()))
            .await;
        assert_eq!(tx.kind, TransactionType::Donation);
        assert_eq!(tx.amount, dec!(0.05));
        assert_eq!(tx.message.as_deref(), Some("gm"));
        assert!(tx.id.starts_with("donation_"));

        let silent = payments
            .process_donation(dec!(0.01), "0xfan", "0xcreator", Some("  ".to_string()))
            .await;
        assert!(silent.message.is_none());
    }

    #[tokio::test]
    async fn withdrawal_is_recorded_as_view_payout() {
        let payments = PaymentSystem::new(Latency::none());
        let tx = payments.withdraw_earnings("0xcreator", dec!(123.45)).await;
        assert_eq!(tx.kind, TransactionType::ViewPayout);
        assert_eq!(tx.from, TREASURY_ADDRESS);
        assert!(tx.id.starts_with("withdrawal_"));
        assert!(tx.video_id.is_none());
    }

    #[test]
    fn revenue_split_is_70_20_10() {
        let split = PaymentSystem::default().calculate_revenue_distribution(dec!(100));
        assert_eq!(split.creators, dec!(70));
        assert_eq!(split.platform, dec!(20));
        assert_eq!(split.ecosystem, dec!(10));
    }

    #[test]
    fn earnings_are_constant() {
        let earnings = PaymentSystem::default().get_creator_earnings("0xabc");
        assert_eq!(earnings.total_earnings, dec!(2847.50));
        assert_eq!(earnings.total_views, 145_200);
        assert_eq!(PaymentSystem::default().get_tube_token_price(), dec!(0.85));
    }
}
