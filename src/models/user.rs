//! User profile slice consumed by the engine.

use serde::{Deserialize, Serialize};

/// The profile fields the engine needs for filtering and scoring.
///
/// The full account record (names, photos, session state) lives with the
/// surrounding application; only this slice crosses the store boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// User ID (also used as document ID)
    pub user_id: u64,
    /// Age in years
    pub age: u32,
    /// Home latitude in degrees
    pub latitude: f64,
    /// Home longitude in degrees
    pub longitude: f64,
}
