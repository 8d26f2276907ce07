use crate::utils::parse_positive;

pub const ETH_USD_RATE: f64 = 2500.0;

pub struct Preset {
    pub amount: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const PRESETS: [Preset; 4] = [
    Preset {
        amount: "0.01",
        label: "☕ Coffee",
        description: "Buy me a coffee",
    },
    Preset {
        amount: "0.05",
        label: "🍕 Pizza",
        description: "Support my work",
    },
    Preset {
        amount: "0.1",
        label: "🚀 Boost",
        description: "Love your content!",
    },
    Preset {
        amount: "0.5",
        label: "💎 Premium",
        description: "Amazing creator!",
    },
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonationForm {
    pub selected_amount: Option<String>,
    pub custom_amount: String,
    pub message: String,
    pub processing: bool,
    pub tx_hash: Option<String>,
}

impl DonationForm {
    /// Picking a preset clears the custom amount.
    pub fn select_preset(&mut self, amount: &str) {
        self.selected_amount = Some(amount.to_string());
        self.custom_amount.clear();
    }

    /// Typing a custom amount clears the preset.
    pub fn set_custom(&mut self, amount: &str) {
        self.custom_amount = amount.to_string();
        self.selected_amount = None;
    }

    pub fn amount(&self) -> &str {
        self.selected_amount
            .as_deref()
            .unwrap_or(self.custom_amount.as_str())
    }

    pub fn can_donate(&self) -> bool {
        !self.processing && parse_positive(self.amount()).is_some()
    }

    pub fn usd_estimate(&self) -> Option<String> {
        parse_positive(self.amount()).map(|eth| format!("{:.2}", eth * ETH_USD_RATE))
    }

    pub fn is_complete(&self) -> bool {
        self.tx_hash.is_some()
    }

    pub fn start(&mut self) -> bool {
        if !self.can_donate() {
            return false;
        }
        self.processing = true;
        true
    }

    pub fn finish(&mut self, tx_hash: Option<String>) {
        self.processing = false;
        self.tx_hash = tx_hash;
    }

    pub fn reset(&mut self) {
        *self = DonationForm::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_clears_custom_and_back() {
        let mut form = DonationForm::default();
        form.set_custom("0.3");
        form.select_preset("0.05");
        assert_eq!(form.custom_amount, "");
        assert_eq!(form.amount(), "0.05");

        form.set_custom("0.2");
        assert!(form.selected_amount.is_none());
        assert_eq!(form.amount(), "0.2");
    }

    #[test]
    fn donating_needs_positive_amount_and_no_request_in_flight() {
        let mut form = DonationForm::default();
        assert!(!form.can_donate());
        form.set_custom("0");
        assert!(!form.can_donate());
        form.set_custom("abc");
        assert!(!form.can_donate());

        form.select_preset(PRESETS[0].amount);
        assert!(form.start());
        assert!(!form.can_donate());
        assert!(!form.start());

        form.finish(Some("0xhash".to_string()));
        assert!(form.is_complete());
        assert!(!form.processing);
    }

    #[test]
    fn usd_estimate_uses_fixed_rate() {
        let mut form = DonationForm::default();
        form.select_preset("0.1");
        assert_eq!(form.usd_estimate().as_deref(), Some("250.00"));
        form.set_custom("");
        assert!(form.usd_estimate().is_none());
    }

    #[test]
    fn failed_donation_can_be_retried() {
        let mut form = DonationForm::default();
        form.select_preset("0.5");
        form.start();
        form.finish(None);
        assert!(!form.is_complete());
        assert!(form.can_donate());
    }
}
