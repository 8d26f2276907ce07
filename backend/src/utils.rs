use chrono::{Duration, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use std::str::FromStr;

const HEX: &[u8] = b"0123456789abcdef";
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const BASE58: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

fn random_chars(alphabet: &[u8], len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}

/// Fabricated transaction hash: `0x` followed by 64 hex digits.
pub fn random_tx_hash() -> String {
    format!("0x{}", random_chars(HEX, 64))
}

/// Fabricated CIDv0-shaped content id.
pub fn random_cid() -> String {
    format!("Qm{}", random_chars(BASE58, 44))
}

pub fn random_thumbnail_cid() -> String {
    format!("Qm{}thumb", random_chars(BASE36, 13))
}

pub fn random_token_id() -> String {
    rand::thread_rng().gen_range(0..10_000u32).to_string()
}

pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Calendar date `days` from today, formatted `YYYY-MM-DD`.
pub fn date_in_days(days: i64) -> String {
    (Utc::now() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

pub fn today() -> String {
    date_in_days(0)
}

/// Parses a decimal amount typed by a user. Blank, malformed and negative
/// input yields `None`.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .ok()
        .filter(|amount| !amount.is_sign_negative())
}

pub fn parse_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

pub fn is_video_content_type(content_type: &str) -> bool {
    content_type.starts_with("video/")
}

pub fn is_image_content_type(content_type: &str) -> bool {
    content_type.starts_with("image/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn tx_hash_is_prefixed_hex() {
        let hash = random_tx_hash();
        assert_eq!(hash.len(), 66);
        assert!(hash.starts_with("0x"));
        assert!(hash[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn cid_uses_base58_alphabet() {
        let cid = random_cid();
        assert_eq!(cid.len(), 46);
        assert!(cid.starts_with("Qm"));
        assert!(!cid[2..].chars().any(|c| "0OIl".contains(c)));
    }

    #[test]
    fn thumbnail_cid_has_suffix() {
        let cid = random_thumbnail_cid();
        assert!(cid.starts_with("Qm"));
        assert!(cid.ends_with("thumb"));
        assert_eq!(cid.len(), 2 + 13 + 5);
    }

    #[test]
    fn token_id_is_below_ten_thousand() {
        for _ in 0..100 {
            let id: u32 = random_token_id().parse().unwrap();
            assert!(id < 10_000);
        }
    }

    #[test]
    fn amounts_reject_blank_and_negative() {
        assert_eq!(parse_amount(" 0.05 "), Some(dec!(0.05)));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
        assert_eq!(parse_amount("-1"), None);
        assert_eq!(parse_amount("abc"), None);
    }

    #[test]
    fn tags_are_trimmed_and_blank_ones_dropped() {
        assert_eq!(
            parse_tags("web3, blockchain ,, tutorial "),
            vec!["web3", "blockchain", "tutorial"]
        );
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn content_type_checks() {
        assert!(is_video_content_type("video/mp4"));
        assert!(!is_video_content_type("image/png"));
        assert!(is_image_content_type("image/png"));
    }
}
