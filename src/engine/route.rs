//! Illustrative route geometry for the map view.
//!
//! Not a routing engine: the path only reflects whether each leg exists,
//! never how long it is. Jitter comes from an injected generator so the
//! cost and emissions models stay deterministic and tests can pin
//! coordinates with a seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{GeoPoint, ScenarioInput};

/// Hissmofors mill
pub const ORIGIN: GeoPoint = GeoPoint::new(63.2, 14.8);
/// Östersund
pub const DESTINATION: GeoPoint = GeoPoint::new(63.2, 14.6);

/// Max offset of the terminal marker from the origin (degrees)
pub const TERMINAL_JITTER_DEG: f64 = 0.05;
/// Max offset of the customer marker from the destination (degrees)
pub const CUSTOMER_JITTER_DEG: f64 = 0.1;

pub struct RouteSynthesizer<R = StdRng> {
    rng: R,
}

impl RouteSynthesizer<StdRng> {
    /// Seeded for reproducible routes, otherwise from OS entropy.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl<R: Rng> RouteSynthesizer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Origin, a terminal stop when there is a terminal leg, then the
    /// destination (jittered only when there is a customer leg).
    pub fn synthesize(&mut self, input: &ScenarioInput) -> Vec<GeoPoint> {
        let mut route = Vec::with_capacity(3);
        route.push(ORIGIN);

        if input.distance_to_terminal > 0.0 {
            let terminal = self.jitter(ORIGIN, TERMINAL_JITTER_DEG);
            route.push(terminal);
        }

        if input.distance_to_customer > 0.0 {
            let customer = self.jitter(DESTINATION, CUSTOMER_JITTER_DEG);
            route.push(customer);
        } else {
            route.push(DESTINATION);
        }

        route
    }

    fn jitter(&mut self, around: GeoPoint, max_offset_deg: f64) -> GeoPoint {
        GeoPoint::new(
            around.lat + self.rng.gen_range(-max_offset_deg..=max_offset_deg),
            around.lon + self.rng.gen_range(-max_offset_deg..=max_offset_deg),
        )
    }
}
