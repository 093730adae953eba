use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The 11 market sectors, in display order. Every sector-valued field in the
/// app draws from this list.
pub const SECTORS: [&str; 11] = [
    "Basic Materials",
    "Communication Services",
    "Consumer Cyclical",
    "Consumer Defensive",
    "Energy",
    "Financial Services",
    "Healthcare",
    "Industrials",
    "Real Estate",
    "Technology",
    "Utilities",
];

pub fn is_valid_sector(name: &str) -> bool {
    SECTORS.contains(&name)
}

/// Per-sector ratings keyed by sector name. A missing key means unrated.
pub type SectorRatingMap = HashMap<String, i32>;

/// Overall market sentiment plus per-sector ratings, as persisted by the
/// backend. The backend returns an all-zero placeholder when nothing has been
/// saved yet; see [`MarketRating::is_sentinel`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketRating {
    pub id: i64,
    pub overall_rating: i32,
    #[serde(default)]
    pub sector_ratings: SectorRatingMap,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl MarketRating {
    /// True for the reserved "no rating saved yet" record. Must not be
    /// treated as real data.
    pub fn is_sentinel(&self) -> bool {
        self.id == 0 && self.overall_rating == 0
    }
}

/// Payload for saving the current ratings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketRatingRequest {
    pub overall_rating: i32,
    pub sector_ratings: SectorRatingMap,
}

/// Ratings span -3 (very bearish) to +3 (very bullish).
pub fn rating_in_range(rating: i32) -> bool {
    (-3..=3).contains(&rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_all_zero_record() {
        let now = chrono::Utc::now();
        let sentinel = MarketRating {
            id: 0,
            overall_rating: 0,
            sector_ratings: SectorRatingMap::new(),
            created_at: now,
            updated_at: now,
        };
        assert!(sentinel.is_sentinel());

        let real = MarketRating { id: 7, overall_rating: 0, ..sentinel.clone() };
        assert!(!real.is_sentinel());
        let rated = MarketRating { id: 0, overall_rating: 2, ..sentinel };
        assert!(!rated.is_sentinel());
    }

    #[test]
    fn deserializes_snake_case_wire_record() {
        let json = r#"{
            "id": 3,
            "overall_rating": 2,
            "sector_ratings": {"Energy": -1, "Technology": 3},
            "created_at": "2024-05-01T09:30:00Z",
            "updated_at": "2024-05-01T09:30:00Z"
        }"#;
        let rating: MarketRating = serde_json::from_str(json).unwrap();
        assert_eq!(rating.overall_rating, 2);
        assert_eq!(rating.sector_ratings.get("Energy"), Some(&-1));
        assert!(!rating.is_sentinel());
    }

    #[test]
    fn missing_sector_ratings_defaults_to_empty() {
        let json = r#"{
            "id": 0,
            "overall_rating": 0,
            "created_at": "2024-05-01T09:30:00Z",
            "updated_at": "2024-05-01T09:30:00Z"
        }"#;
        let rating: MarketRating = serde_json::from_str(json).unwrap();
        assert!(rating.sector_ratings.is_empty());
        assert!(rating.is_sentinel());
    }

    #[test]
    fn rating_range_bounds() {
        assert!(rating_in_range(-3));
        assert!(rating_in_range(3));
        assert!(!rating_in_range(4));
        assert!(!rating_in_range(-4));
    }
}
