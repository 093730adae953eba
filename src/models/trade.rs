use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::market::is_valid_sector;

/// An options trading position. Ids are assigned by the backend on creation;
/// the client never invents one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    pub id: i64,
    pub ticker: String,
    pub sector: String,
    pub strategy_type: String,
    pub entry_date: DateTime<Utc>,
    pub expiration_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<f64>,
    pub status: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating or updating a trade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeRequest {
    pub ticker: String,
    pub sector: String,
    pub strategy_type: String,
    pub entry_date: DateTime<Utc>,
    pub expiration_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<f64>,
    pub notes: String,
}

/// Read-only reference data describing an options strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyType {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub description: String,
    pub color_hex: String,
}

// Trade status lifecycle tags (owned by the backend).
pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_CLOSED: &str = "closed";
pub const STATUS_EXPIRED: &str = "expired";

// Strategy categories.
pub const CATEGORY_BULLISH: &str = "Bullish";
pub const CATEGORY_BEARISH: &str = "Bearish";
pub const CATEGORY_NEUTRAL: &str = "Neutral";

pub fn valid_statuses() -> [&'static str; 3] {
    [STATUS_ACTIVE, STATUS_CLOSED, STATUS_EXPIRED]
}

pub fn valid_categories() -> [&'static str; 3] {
    [CATEGORY_BULLISH, CATEGORY_BEARISH, CATEGORY_NEUTRAL]
}

/// Checks a trade request before it is sent to the backend.
pub fn validate_trade_request(req: &TradeRequest) -> Result<()> {
    if req.ticker.is_empty() {
        bail!("ticker is required");
    }
    if req.sector.is_empty() {
        bail!("sector is required");
    }
    if !is_valid_sector(&req.sector) {
        bail!("unknown sector: {}", req.sector);
    }
    if req.strategy_type.is_empty() {
        bail!("strategy type is required");
    }
    if req.expiration_date < req.entry_date {
        bail!("expiration date must be after entry date");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TradeRequest {
        let entry = "2024-06-03T14:30:00Z".parse().unwrap();
        let expiration = "2024-06-21T20:00:00Z".parse().unwrap();
        TradeRequest {
            ticker: "AAPL".into(),
            sector: "Technology".into(),
            strategy_type: "Covered Call".into(),
            entry_date: entry,
            expiration_date: expiration,
            target_price: Some(195.0),
            stop_loss: None,
            notes: String::new(),
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(validate_trade_request(&request()).is_ok());
    }

    #[test]
    fn rejects_missing_fields_and_bad_dates() {
        let mut req = request();
        req.ticker.clear();
        assert!(validate_trade_request(&req).is_err());

        let mut req = request();
        req.sector = "Cryptocurrency".into();
        assert!(validate_trade_request(&req).is_err());

        let mut req = request();
        req.expiration_date = req.entry_date - chrono::Duration::days(1);
        assert!(validate_trade_request(&req).is_err());
    }

    #[test]
    fn status_and_category_reference_lists() {
        assert_eq!(valid_statuses(), [STATUS_ACTIVE, STATUS_CLOSED, STATUS_EXPIRED]);
        assert!(valid_categories().contains(&CATEGORY_BULLISH));
        assert!(valid_categories().contains(&CATEGORY_BEARISH));
        assert!(valid_categories().contains(&CATEGORY_NEUTRAL));
    }

    #[test]
    fn optional_prices_omitted_on_the_wire() {
        let mut req = request();
        req.target_price = None;
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("target_price"));
        assert!(!json.contains("stop_loss"));
        assert!(json.contains("\"entry_date\":\"2024-06-03T14:30:00Z\""));
    }
}
