use crate::models::{EarningVideo, Payout, TransactionStatus};
use rust_decimal_macros::dec;

pub fn recent_payouts(_creator_address: &str) -> Vec<Payout> {
    vec![
        Payout {
            id: 1,
            amount: dec!(45.67),
            kind: "View Rewards".to_string(),
            date: "2024-01-15".to_string(),
            tx_hash: "0xabcd...1234".to_string(),
            status: TransactionStatus::Completed,
        },
        Payout {
            id: 2,
            amount: dec!(12.34),
            kind: "Donations".to_string(),
            date: "2024-01-14".to_string(),
            tx_hash: "0xefgh...5678".to_string(),
            status: TransactionStatus::Completed,
        },
        Payout {
            id: 3,
            amount: dec!(89.12),
            kind: "NFT Sales".to_string(),
            date: "2024-01-13".to_string(),
            tx_hash: "0xijkl...9012".to_string(),
            status: TransactionStatus::Completed,
        },
    ]
}

pub fn top_earning_videos(_creator_address: &str) -> Vec<EarningVideo> {
    vec![
        EarningVideo {
            id: 1,
            title: "Building DApps with Next.js and Web3".to_string(),
            views: "45.2K".to_string(),
            earnings: dec!(125.50),
            thumbnail: "/web3-development-tutorial.png".to_string(),
        },
        EarningVideo {
            id: 2,
            title: "Smart Contract Security Best Practices".to_string(),
            views: "67.1K".to_string(),
            earnings: dec!(234.80),
            thumbnail: "/smart-contract-security-coding.png".to_string(),
        },
        EarningVideo {
            id: 3,
            title: "DeFi Protocols Explained Simply".to_string(),
            views: "89.3K".to_string(),
            earnings: dec!(445.20),
            thumbnail: "/defi-protocols-explanation.png".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payouts_are_newest_first() {
        let payouts = recent_payouts("0xabc");
        let dates: Vec<&str> = payouts.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-15", "2024-01-14", "2024-01-13"]);
    }

    #[test]
    fn payout_type_serializes_under_type_key() {
        let json = serde_json::to_value(&recent_payouts("0xabc")[0]).unwrap();
        assert_eq!(json["type"], "View Rewards");
        assert_eq!(json["amount"], "45.67");
    }
}
