use crate::models::{AdCampaign, AdStats, CampaignStatus, NewCampaign};
use crate::utils::{date_in_days, parse_amount};
use log::info;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;
use tokio::sync::RwLock;

pub const CAMPAIGN_DURATIONS: [u32; 4] = [3, 7, 14, 30];
const DEFAULT_DURATION_DAYS: u32 = 7;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CampaignRejected {
    #[error("Campaign title is required")]
    MissingTitle,
    #[error("Budget must be a non-negative $TUBE amount")]
    InvalidBudget,
    #[error("Bid amount must be a non-negative $TUBE amount")]
    InvalidBid,
    #[error("Campaign duration must be 3, 7, 14 or 30 days, got {0}")]
    InvalidDuration(u32),
}

impl CampaignStatus {
    /// Pause/resume flip. Completed campaigns cannot be resumed.
    pub fn toggled(self) -> Self {
        match self {
            CampaignStatus::Active => CampaignStatus::Paused,
            CampaignStatus::Paused => CampaignStatus::Active,
            CampaignStatus::Completed => CampaignStatus::Completed,
        }
    }
}

fn seed_campaigns() -> Vec<AdCampaign> {
    vec![
        AdCampaign {
            id: 1,
            title: "Web3 Development Course".to_string(),
            budget: dec!(50.0),
            spent: dec!(23.5),
            impressions: 12450,
            clicks: 342,
            ctr: 2.75,
            status: CampaignStatus::Active,
            target_category: "Education".to_string(),
            bid_amount: dec!(0.002),
            end_date: date_in_days(14),
        },
        AdCampaign {
            id: 2,
            title: "DeFi Trading Platform".to_string(),
            budget: dec!(100.0),
            spent: dec!(67.8),
            impressions: 28900,
            clicks: 891,
            ctr: 3.08,
            status: CampaignStatus::Active,
            target_category: "DeFi".to_string(),
            bid_amount: dec!(0.0035),
            end_date: date_in_days(19),
        },
    ]
}

pub struct CampaignStore {
    campaigns: RwLock<Vec<AdCampaign>>,
}

impl Default for CampaignStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CampaignStore {
    pub fn new() -> Self {
        CampaignStore {
            campaigns: RwLock::new(seed_campaigns()),
        }
    }

    pub async fn list(&self) -> Vec<AdCampaign> {
        self.campaigns.read().await.clone()
    }

    pub async fn create(&self, request: &NewCampaign) -> Result<AdCampaign, CampaignRejected> {
        let title = request.title.trim();
        if title.is_empty() {
            return Err(CampaignRejected::MissingTitle);
        }
        let budget = parse_amount(&request.budget).ok_or(CampaignRejected::InvalidBudget)?;
        let bid_amount = parse_amount(&request.bid_amount).ok_or(CampaignRejected::InvalidBid)?;
        let duration = request.duration_days.unwrap_or(DEFAULT_DURATION_DAYS);
        if !CAMPAIGN_DURATIONS.contains(&duration) {
            return Err(CampaignRejected::InvalidDuration(duration));
        }

        let mut campaigns = self.campaigns.write().await;
        let campaign = AdCampaign {
            id: campaigns.len() as u32 + 1,
            title: title.to_string(),
            budget,
            spent: Decimal::ZERO,
            impressions: 0,
            clicks: 0,
            ctr: 0.0,
            status: CampaignStatus::Active,
            target_category: request.target_category.clone(),
            bid_amount,
            end_date: date_in_days(duration as i64),
        };
        info!(
            "Created ad campaign {} \"{}\" (budget {} $TUBE, bid {} $TUBE, ends {})",
            campaign.id, campaign.title, campaign.budget, campaign.bid_amount, campaign.end_date
        );
        campaigns.push(campaign.clone());
        Ok(campaign)
    }

    /// Flips the campaign between active and paused. Only `status` changes.
    pub async fn toggle(&self, campaign_id: u32) -> Option<AdCampaign> {
        let mut campaigns = self.campaigns.write().await;
        let campaign = campaigns.iter_mut().find(|c| c.id == campaign_id)?;
        campaign.status = campaign.status.toggled();
        info!("Campaign {} is now {:?}", campaign.id, campaign.status);
        Some(campaign.clone())
    }

    pub async fn stats(&self) -> AdStats {
        compute_stats(&self.campaigns.read().await)
    }

    /// Completes running campaigns whose end date is before `today` or whose
    /// budget is used up. Returns the ids that changed.
    pub async fn expire(&self, today: &str) -> Vec<u32> {
        let mut campaigns = self.campaigns.write().await;
        let mut completed = Vec::new();
        for campaign in campaigns.iter_mut() {
            if campaign.status == CampaignStatus::Completed {
                continue;
            }
            let ended = campaign.end_date.as_str() < today;
            let exhausted = campaign.spent >= campaign.budget;
            if ended || exhausted {
                campaign.status = CampaignStatus::Completed;
                completed.push(campaign.id);
            }
        }
        completed
    }
}

pub fn compute_stats(campaigns: &[AdCampaign]) -> AdStats {
    let with_traffic: Vec<f64> = campaigns
        .iter()
        .filter(|c| c.impressions > 0)
        .map(|c| c.ctr)
        .collect();
    let average_ctr = if with_traffic.is_empty() {
        0.0
    } else {
        let mean = with_traffic.iter().sum::<f64>() / with_traffic.len() as f64;
        (mean * 100.0).round() / 100.0
    };

    AdStats {
        total_spent: campaigns.iter().map(|c| c.spent).sum(),
        total_impressions: campaigns.iter().map(|c| c.impressions).sum(),
        average_ctr,
        active_campaigns: campaigns
            .iter()
            .filter(|c| c.status == CampaignStatus::Active)
            .count(),
        paused_campaigns: campaigns
            .iter()
            .filter(|c| c.status == CampaignStatus::Paused)
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: &str, budget: &str, bid: &str) -> NewCampaign {
        NewCampaign {
            title: title.to_string(),
            budget: budget.to_string(),
            bid_amount: bid.to_string(),
            target_category: "Gaming".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn toggle_flips_between_active_and_paused_only() {
        let store = CampaignStore::new();
        let before = store.list().await[0].clone();

        let paused = store.toggle(1).await.unwrap();
        assert_eq!(paused.status, CampaignStatus::Paused);
        assert_eq!(
            AdCampaign {
                status: before.status,
                ..paused.clone()
            },
            before
        );

        let resumed = store.toggle(1).await.unwrap();
        assert_eq!(resumed, before);
    }

    #[tokio::test]
    async fn toggle_does_not_touch_other_campaigns() {
        let store = CampaignStore::new();
        let other = store.list().await[1].clone();
        store.toggle(1).await;
        assert_eq!(store.list().await[1], other);
        assert!(store.toggle(99).await.is_none());
    }

    #[test]
    fn completed_campaigns_stay_completed() {
        assert_eq!(CampaignStatus::Completed.toggled(), CampaignStatus::Completed);
    }

    #[tokio::test]
    async fn create_appends_active_campaign() {
        let store = CampaignStore::new();
        let campaign = store.create(&request("Launch", "25", "0.001")).await.unwrap();
        assert_eq!(campaign.id, 3);
        assert_eq!(campaign.status, CampaignStatus::Active);
        assert_eq!(campaign.spent, Decimal::ZERO);
        assert_eq!(campaign.budget, dec!(25));
        assert_eq!(campaign.end_date, date_in_days(7));
        assert_eq!(store.list().await.len(), 3);
    }

    #[tokio::test]
    async fn create_rejects_incomplete_forms() {
        let store = CampaignStore::new();
        assert_eq!(
            store.create(&request("  ", "25", "0.001")).await,
            Err(CampaignRejected::MissingTitle)
        );
        assert_eq!(
            store.create(&request("Launch", "", "0.001")).await,
            Err(CampaignRejected::InvalidBudget)
        );
        assert_eq!(
            store.create(&request("Launch", "25", "x")).await,
            Err(CampaignRejected::InvalidBid)
        );
        let mut odd = request("Launch", "25", "0.001");
        odd.duration_days = Some(5);
        assert_eq!(
            store.create(&odd).await,
            Err(CampaignRejected::InvalidDuration(5))
        );
        assert_eq!(store.list().await.len(), 2);
    }

    #[tokio::test]
    async fn stats_are_computed_from_the_list() {
        let store = CampaignStore::new();
        let stats = store.stats().await;
        assert_eq!(stats.total_spent, dec!(91.3));
        assert_eq!(stats.total_impressions, 41350);
        assert!((stats.average_ctr - 2.91).abs() < 0.011);
        assert_eq!(stats.active_campaigns, 2);

        store.toggle(2).await;
        let stats = store.stats().await;
        assert_eq!(stats.active_campaigns, 1);
        assert_eq!(stats.paused_campaigns, 1);
    }

    #[tokio::test]
    async fn expire_completes_ended_and_exhausted_campaigns() {
        let store = CampaignStore::new();
        assert!(store.expire(&date_in_days(0)).await.is_empty());

        assert_eq!(store.expire(&date_in_days(15)).await, vec![1]);
        let campaigns = store.list().await;
        assert_eq!(campaigns[0].status, CampaignStatus::Completed);
        assert_eq!(campaigns[1].status, CampaignStatus::Active);

        assert!(store.toggle(1).await.unwrap().status == CampaignStatus::Completed);
    }

    #[tokio::test]
    async fn zero_budget_campaign_is_exhausted_at_once() {
        let store = CampaignStore::new();
        let campaign = store.create(&request("Free ride", "0", "0")).await.unwrap();
        assert_eq!(campaign.budget, Decimal::ZERO);

        assert_eq!(store.expire(&date_in_days(0)).await, vec![campaign.id]);
        let stored = store.list().await;
        assert_eq!(stored[2].status, CampaignStatus::Completed);
        assert_eq!(stored[0].status, CampaignStatus::Active);
    }
}
