//! Synthetic "live visitors" feed.
//!
//! The feed is decorative. It starts from one best-effort geolocation
//! lookup for the current client and is topped up with synthetic visitors
//! drawn from [`FALLBACK_LOCATIONS`]. When the lookup fails the feed is
//! seeded from the table alone, so it is never empty after seeding.

use std::collections::VecDeque;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::GeolocationConfig;
use crate::error::{FolioError, Result};

/// Synthetic visitors added when the feed is seeded.
pub const INITIAL_SYNTHETIC: usize = 6;

/// A fixed location used for synthetic visitors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallbackLocation {
    pub country: &'static str,
    pub city: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

pub static FALLBACK_LOCATIONS: [FallbackLocation; 12] = [
    FallbackLocation { country: "India", city: "Bengaluru", latitude: 12.9716, longitude: 77.5946 },
    FallbackLocation { country: "United States", city: "San Francisco", latitude: 37.7749, longitude: -122.4194 },
    FallbackLocation { country: "United Kingdom", city: "London", latitude: 51.5074, longitude: -0.1278 },
    FallbackLocation { country: "Germany", city: "Berlin", latitude: 52.52, longitude: 13.405 },
    FallbackLocation { country: "Japan", city: "Tokyo", latitude: 35.6762, longitude: 139.6503 },
    FallbackLocation { country: "Brazil", city: "São Paulo", latitude: -23.5505, longitude: -46.6333 },
    FallbackLocation { country: "Australia", city: "Sydney", latitude: -33.8688, longitude: 151.2093 },
    FallbackLocation { country: "Canada", city: "Toronto", latitude: 43.6532, longitude: -79.3832 },
    FallbackLocation { country: "Singapore", city: "Singapore", latitude: 1.3521, longitude: 103.8198 },
    FallbackLocation { country: "Nigeria", city: "Lagos", latitude: 6.5244, longitude: 3.3792 },
    FallbackLocation { country: "France", city: "Paris", latitude: 48.8566, longitude: 2.3522 },
    FallbackLocation { country: "United Arab Emirates", city: "Dubai", latitude: 25.2048, longitude: 55.2708 },
];

/// A location reported by the geolocation collaborator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeoLocation {
    #[serde(rename = "country_name")]
    pub country: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&FallbackLocation> for GeoLocation {
    fn from(loc: &FallbackLocation) -> Self {
        Self {
            country: loc.country.to_string(),
            city: loc.city.to_string(),
            latitude: loc.latitude,
            longitude: loc.longitude,
        }
    }
}

/// One decorative visitor.
#[derive(Debug, Clone, PartialEq)]
pub struct Visitor {
    pub id: u64,
    pub country: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: DateTime<Utc>,
    /// True only for the entry derived from the real lookup.
    pub is_current: bool,
}

/// Looks up the current client's location.
#[async_trait]
pub trait GeoLocator: Send + Sync {
    async fn locate(&self) -> Result<GeoLocation>;
}

/// ipapi-style JSON lookup.
#[derive(Debug, Clone)]
pub struct IpApiLocator {
    client: reqwest::Client,
    config: GeolocationConfig,
}

impl IpApiLocator {
    pub fn new(config: GeolocationConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl GeoLocator for IpApiLocator {
    async fn locate(&self) -> Result<GeoLocation> {
        if !self.config.enabled {
            return Err(FolioError::Geolocation("lookup disabled".into()));
        }

        let response = self
            .client
            .get(&self.config.endpoint)
            .send()
            .await
            .map_err(|e| FolioError::Geolocation(e.to_string()))?
            .error_for_status()
            .map_err(|e| FolioError::Geolocation(e.to_string()))?;

        response
            .json::<GeoLocation>()
            .await
            .map_err(|e| FolioError::Geolocation(format!("parse response: {e}")))
    }
}

/// Capped, growing sequence of visitors. Oldest entries fall off first.
#[derive(Debug, Clone)]
pub struct VisitorFeed {
    visitors: VecDeque<Visitor>,
    cap: usize,
    next_id: u64,
    live: bool,
}

impl VisitorFeed {
    pub fn new(cap: usize) -> Self {
        Self {
            visitors: VecDeque::with_capacity(cap),
            cap: cap.max(1),
            next_id: 0,
            live: false,
        }
    }

    /// Visitors, oldest first.
    pub fn visitors(&self) -> impl DoubleEndedIterator<Item = &Visitor> + ExactSizeIterator {
        self.visitors.iter()
    }

    pub fn len(&self) -> usize {
        self.visitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visitors.is_empty()
    }

    /// Whether the feed includes a real lookup result.
    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Number of distinct countries currently shown.
    pub fn country_count(&self) -> usize {
        let mut countries: Vec<&str> = self.visitors.iter().map(|v| v.country.as_str()).collect();
        countries.sort_unstable();
        countries.dedup();
        countries.len()
    }

    /// Appends a visitor at `location`.
    pub fn push(&mut self, location: GeoLocation, is_current: bool) -> &Visitor {
        let visitor = Visitor {
            id: self.next_id,
            country: location.country,
            city: location.city,
            latitude: location.latitude,
            longitude: location.longitude,
            timestamp: Utc::now(),
            is_current,
        };
        self.next_id += 1;

        self.visitors.push_back(visitor);
        while self.visitors.len() > self.cap {
            self.visitors.pop_front();
        }
        // cap >= 1, so the deque is never empty here
        &self.visitors[self.visitors.len() - 1]
    }

    /// Appends a synthetic visitor at a random table location, jittered
    /// by up to half a degree so repeats don't stack exactly.
    pub fn spawn_synthetic<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Visitor {
        let base = FALLBACK_LOCATIONS
            .choose(rng)
            .unwrap_or(&FALLBACK_LOCATIONS[0]);
        let mut location = GeoLocation::from(base);
        location.latitude += rng.random_range(-0.5..0.5);
        location.longitude += rng.random_range(-0.5..0.5);
        self.push(location, false)
    }

    /// Seeds the feed from a lookup result. On failure the synthetic table
    /// stands in for the real location.
    pub fn seed<R: Rng + ?Sized>(&mut self, lookup: Result<GeoLocation>, rng: &mut R) {
        match lookup {
            Ok(location) => {
                debug!(country = %location.country, "Seeding visitors with live location");
                self.push(location, true);
                self.live = true;
            }
            Err(e) => {
                warn!(error = %e, "Geolocation unavailable, using synthetic visitors");
                self.live = false;
            }
        }
        for _ in 0..INITIAL_SYNTHETIC {
            self.spawn_synthetic(rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    struct FailingLocator;

    #[async_trait]
    impl GeoLocator for FailingLocator {
        async fn locate(&self) -> Result<GeoLocation> {
            Err(FolioError::Geolocation("offline".into()))
        }
    }

    struct FixedLocator;

    #[async_trait]
    impl GeoLocator for FixedLocator {
        async fn locate(&self) -> Result<GeoLocation> {
            Ok(GeoLocation {
                country: "Kenya".into(),
                city: "Nairobi".into(),
                latitude: -1.2921,
                longitude: 36.8219,
            })
        }
    }

    #[tokio::test]
    async fn test_failed_lookup_still_renders_visitors() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut feed = VisitorFeed::new(24);

        feed.seed(FailingLocator.locate().await, &mut rng);

        assert!(!feed.is_empty());
        assert!(!feed.is_live());
        for visitor in feed.visitors() {
            assert!(!visitor.is_current);
            assert!(FALLBACK_LOCATIONS.iter().any(|l| l.city == visitor.city));
        }
    }

    #[tokio::test]
    async fn test_live_lookup_comes_first() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut feed = VisitorFeed::new(24);

        feed.seed(FixedLocator.locate().await, &mut rng);

        assert!(feed.is_live());
        assert_eq!(feed.len(), INITIAL_SYNTHETIC + 1);
        let first = feed.visitors().next().unwrap();
        assert_eq!(first.city, "Nairobi");
        assert!(first.is_current);
    }

    #[test]
    fn test_cap_drops_oldest() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut feed = VisitorFeed::new(3);
        for _ in 0..10 {
            feed.spawn_synthetic(&mut rng);
        }
        assert_eq!(feed.len(), 3);
        let ids: Vec<u64> = feed.visitors().map(|v| v.id).collect();
        assert_eq!(ids, vec![7, 8, 9]);
    }

    #[test]
    fn test_jitter_stays_near_table() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut feed = VisitorFeed::new(50);
        for _ in 0..50 {
            let v = feed.spawn_synthetic(&mut rng).clone();
            let base = FALLBACK_LOCATIONS.iter().find(|l| l.city == v.city).unwrap();
            assert!((v.latitude - base.latitude).abs() <= 0.5);
            assert!((v.longitude - base.longitude).abs() <= 0.5);
        }
        assert!(feed.country_count() > 1);
    }

    #[test]
    fn test_geolocation_json_shape() {
        let raw = r#"{"ip":"1.2.3.4","city":"Pune","country_name":"India","latitude":18.52,"longitude":73.85}"#;
        let loc: GeoLocation = serde_json::from_str(raw).unwrap();
        assert_eq!(loc.country, "India");
        assert_eq!(loc.city, "Pune");
    }

    #[tokio::test]
    async fn test_disabled_locator_fails() {
        let locator = IpApiLocator::new(GeolocationConfig {
            enabled: false,
            ..Default::default()
        });
        tokio_test::assert_err!(locator.locate().await);
    }
}
