//! Pairwise compatibility breakdown.

use serde::{Deserialize, Serialize};

/// Result of scoring one candidate pair. Ephemeral, never persisted; the
/// factor fields let the caller's API layer show users how a score breaks
/// down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    /// Weighted aggregate, 0-100
    pub overall: u8,
    /// Jaccard overlap of recent activity types, 0-100
    pub activity_overlap: u8,
    /// Similarity of weekly volume, count and pace, 0-100
    pub performance_similarity: u8,
    /// Linear decay with distance, 0 at >= 100 km
    pub location_proximity: u8,
    /// Linear decay with age gap, 0 at >= 20 years
    pub age_compatibility: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_named_factors() {
        let result = CompatibilityResult {
            overall: 87,
            activity_overlap: 100,
            performance_similarity: 91,
            location_proximity: 76,
            age_compatibility: 95,
        };

        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["overall"], 87);
        assert_eq!(json["activity_overlap"], 100);
        assert_eq!(json["location_proximity"], 76);
    }
}
