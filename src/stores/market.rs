use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::bridge::SharedBridge;
use crate::models::market::{MarketRating, MarketRatingRequest, SectorRatingMap, SECTORS};
use crate::stores::store::{Store, SubscriptionId};
use crate::stores::{race_timeout, StoreError};

/// UI-visible snapshot of the market rating panel.
#[derive(Debug, Clone)]
pub struct MarketState {
    pub overall_rating: i32,
    pub sector_ratings: SectorRatingMap,
    pub sectors: &'static [&'static str],
    pub loading: bool,
    pub last_saved: Option<DateTime<Utc>>,
}

impl Default for MarketState {
    fn default() -> Self {
        Self {
            overall_rating: 0,
            sector_ratings: SectorRatingMap::new(),
            sectors: &SECTORS,
            loading: false,
            last_saved: None,
        }
    }
}

/// Holds the latest market rating and syncs it with the backend. Ratings are
/// edited locally and only persisted on [`MarketStore::save_rating`].
#[derive(Clone)]
pub struct MarketStore {
    state: Store<MarketState>,
    bridge: SharedBridge,
}

impl MarketStore {
    pub fn new(bridge: SharedBridge) -> Self {
        Self {
            state: Store::new(MarketState::default()),
            bridge,
        }
    }

    pub fn state(&self) -> MarketState {
        self.state.get()
    }

    pub fn subscribe(
        &self,
        observer: impl Fn(&MarketState) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.state.subscribe(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.state.unsubscribe(id)
    }

    pub fn set_overall_rating(&self, rating: i32) {
        self.state.update(|s| s.overall_rating = rating);
    }

    pub fn set_sector_rating(&self, sector: &str, rating: i32) {
        let sector = sector.to_string();
        self.state.update(|s| {
            s.sector_ratings.insert(sector, rating);
        });
    }

    /// Fetches the latest saved rating, raced against the request timeout.
    /// A sentinel response resets the panel to defaults; any failure does the
    /// same and re-signals the error.
    pub async fn load_latest_rating(&self) -> Result<MarketRating, StoreError> {
        self.state.update(|s| s.loading = true);

        let bridge = Arc::clone(&self.bridge);
        let result = race_timeout(async move { bridge.get_latest_market_rating().await }).await;

        match result {
            Ok(rating) => {
                if rating.is_sentinel() {
                    log::info!("no market rating saved yet, using defaults");
                } else {
                    log::info!("loaded market rating {} (overall {})", rating.id, rating.overall_rating);
                }
                self.state.update(|s| {
                    s.overall_rating = rating.overall_rating;
                    s.sector_ratings = rating.sector_ratings.clone();
                    s.last_saved = Some(rating.created_at);
                    s.loading = false;
                });
                Ok(rating)
            }
            Err(err) => {
                log::error!("failed to load latest market rating: {err}");
                self.state.update(|s| {
                    s.loading = false;
                    s.overall_rating = 0;
                    s.sector_ratings.clear();
                });
                Err(err)
            }
        }
    }

    /// Persists the ratings as they stand right now. No timeout race here;
    /// the save is awaited as long as the backend takes.
    pub async fn save_rating(&self) -> Result<MarketRating, StoreError> {
        self.state.update(|s| s.loading = true);

        let current = self.state.get();
        let request = MarketRatingRequest {
            overall_rating: current.overall_rating,
            sector_ratings: current.sector_ratings,
        };

        match self.bridge.save_market_rating(request).await {
            Ok(saved) => {
                self.state.update(|s| {
                    s.last_saved = Some(saved.created_at);
                    s.loading = false;
                });
                Ok(saved)
            }
            Err(err) => {
                log::error!("failed to save market rating: {err}");
                self.state.update(|s| s.loading = false);
                Err(StoreError::Bridge(err))
            }
        }
    }

    /// Local-only reset of the editable ratings.
    pub fn reset_ratings(&self) {
        self.state.update(|s| {
            s.overall_rating = 0;
            s.sector_ratings.clear();
        });
    }

    /// Drops everything back to defaults, `loading` and `last_saved`
    /// included. Teardown hook for tests.
    pub fn reset(&self) {
        self.state.set(MarketState::default());
    }

    pub fn sectors(&self) -> &'static [&'static str] {
        &SECTORS
    }
}
