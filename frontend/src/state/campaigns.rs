use crate::models::{AdCampaign, NewCampaign};
use crate::utils::parse_positive;
use std::rc::Rc;
use yew::Reducible;

pub const DURATIONS: [u32; 4] = [3, 7, 14, 30];
pub const TARGET_CATEGORIES: [&str; 5] = ["Education", "DeFi", "NFTs", "Gaming", "Technology"];

/// Swaps in the server's copy of a campaign, leaving the others untouched.
pub fn replace_campaign(campaigns: &mut [AdCampaign], updated: AdCampaign) -> bool {
    match campaigns.iter_mut().find(|c| c.id == updated.id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Campaign table. Server responses are applied as actions against the
/// current list, never against the list a request started from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignBoard {
    pub campaigns: Vec<AdCampaign>,
}

pub enum CampaignAction {
    Loaded(Vec<AdCampaign>),
    Updated(AdCampaign),
    Created(AdCampaign),
}

impl Reducible for CampaignBoard {
    type Action = CampaignAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CampaignAction::Loaded(campaigns) => next.campaigns = campaigns,
            CampaignAction::Updated(updated) => {
                if !replace_campaign(&mut next.campaigns, updated) {
                    return self;
                }
            }
            CampaignAction::Created(campaign) => {
                if next.campaigns.iter().any(|c| c.id == campaign.id) {
                    return self;
                }
                next.campaigns.push(campaign);
            }
        }
        next.into()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CampaignForm {
    pub title: String,
    pub budget: String,
    pub bid_amount: String,
    pub target_category: String,
    pub description: String,
    pub duration_days: u32,
}

impl Default for CampaignForm {
    fn default() -> Self {
        CampaignForm {
            title: String::new(),
            budget: String::new(),
            bid_amount: String::new(),
            target_category: String::new(),
            description: String::new(),
            duration_days: 7,
        }
    }
}

impl CampaignForm {
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty()
            && parse_positive(&self.budget).is_some()
            && parse_positive(&self.bid_amount).is_some()
    }

    pub fn to_request(&self) -> Option<NewCampaign> {
        if !self.is_complete() {
            return None;
        }
        Some(NewCampaign {
            title: self.title.trim().to_string(),
            budget: self.budget.trim().to_string(),
            bid_amount: self.bid_amount.trim().to_string(),
            target_category: self.target_category.clone(),
            description: self.description.clone(),
            duration_days: Some(self.duration_days),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CampaignStatus;

    fn campaign(id: u32, status: CampaignStatus) -> AdCampaign {
        AdCampaign {
            id,
            title: format!("Campaign {id}"),
            budget: "50.0".to_string(),
            spent: "23.5".to_string(),
            impressions: 12450,
            clicks: 342,
            ctr: 2.75,
            status,
            target_category: "Education".to_string(),
            bid_amount: "0.002".to_string(),
            end_date: "2030-01-01".to_string(),
        }
    }

    #[test]
    fn toggled_campaign_replaces_only_its_slot() {
        let mut list = vec![
            campaign(1, CampaignStatus::Active),
            campaign(2, CampaignStatus::Active),
        ];
        let untouched = list[1].clone();
        assert!(replace_campaign(&mut list, campaign(1, CampaignStatus::Paused)));
        assert_eq!(list[0].status, CampaignStatus::Paused);
        assert_eq!(list[1], untouched);
        assert!(!replace_campaign(&mut list, campaign(9, CampaignStatus::Paused)));
    }

    #[test]
    fn overlapping_responses_both_land() {
        let board = Rc::new(CampaignBoard::default()).reduce(CampaignAction::Loaded(vec![
            campaign(1, CampaignStatus::Active),
            campaign(2, CampaignStatus::Active),
        ]));
        // Two toggles started from the same list resolve one after another.
        let board = board.reduce(CampaignAction::Updated(campaign(1, CampaignStatus::Paused)));
        let board = board.reduce(CampaignAction::Updated(campaign(2, CampaignStatus::Paused)));
        let board = board.reduce(CampaignAction::Created(campaign(3, CampaignStatus::Active)));

        let statuses: Vec<CampaignStatus> = board.campaigns.iter().map(|c| c.status).collect();
        assert_eq!(
            statuses,
            vec![CampaignStatus::Paused, CampaignStatus::Paused, CampaignStatus::Active]
        );
    }

    #[test]
    fn unknown_or_duplicate_campaigns_leave_board_alone() {
        let board = Rc::new(CampaignBoard {
            campaigns: vec![campaign(1, CampaignStatus::Active)],
        });
        let same = board.clone().reduce(CampaignAction::Updated(campaign(9, CampaignStatus::Paused)));
        assert!(Rc::ptr_eq(&board, &same));
        let same = board.clone().reduce(CampaignAction::Created(campaign(1, CampaignStatus::Paused)));
        assert!(Rc::ptr_eq(&board, &same));
    }

    #[test]
    fn form_needs_title_budget_and_bid() {
        let mut form = CampaignForm::default();
        assert!(form.to_request().is_none());
        form.title = "Launch".to_string();
        form.budget = "25".to_string();
        assert!(!form.is_complete());
        form.bid_amount = "0.001".to_string();
        let request = form.to_request().unwrap();
        assert_eq!(request.duration_days, Some(7));
        assert_eq!(request.title, "Launch");
    }
}
