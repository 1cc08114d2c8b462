// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Persisted match relationship between two users.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Match lifecycle state. Active -> Archived only; Archived is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Active,
    Archived,
}

/// A matched pair of users.
///
/// The pair is its own identity: `user_a < user_b` always holds, and at most
/// one match exists per unordered pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    /// Lower user ID of the pair
    pub user_a: u64,
    /// Higher user ID of the pair
    pub user_b: u64,
    /// Compatibility score at match time, 0-100
    pub compatibility_score: u8,
    /// When the match was created
    pub matched_at: DateTime<Utc>,
    /// Lifecycle state
    pub status: MatchStatus,
}

impl Match {
    /// Create an active match, normalizing the pair order.
    pub fn new(first: u64, second: u64, compatibility_score: u8, matched_at: DateTime<Utc>) -> Self {
        let (user_a, user_b) = normalize_pair(first, second);
        Self {
            user_a,
            user_b,
            compatibility_score,
            matched_at,
            status: MatchStatus::Active,
        }
    }

    /// True if the given user is one of the pair members.
    pub fn involves(&self, user_id: u64) -> bool {
        self.user_a == user_id || self.user_b == user_id
    }

    /// The other member of the pair, if the given user is a member.
    pub fn other(&self, user_id: u64) -> Option<u64> {
        if self.user_a == user_id {
            Some(self.user_b)
        } else if self.user_b == user_id {
            Some(self.user_a)
        } else {
            None
        }
    }
}

/// Order-independent key for an unordered user pair.
pub fn normalize_pair(first: u64, second: u64) -> (u64, u64) {
    if first <= second {
        (first, second)
    } else {
        (second, first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_is_normalized() {
        let m = Match::new(42, 7, 88, Utc::now());
        assert_eq!(m.user_a, 7);
        assert_eq!(m.user_b, 42);
        assert_eq!(m.status, MatchStatus::Active);
    }

    #[test]
    fn test_involves_and_other() {
        let m = Match::new(7, 42, 88, Utc::now());
        assert!(m.involves(7));
        assert!(m.involves(42));
        assert!(!m.involves(8));
        assert_eq!(m.other(7), Some(42));
        assert_eq!(m.other(42), Some(7));
        assert_eq!(m.other(8), None);
    }

    #[test]
    fn test_normalize_pair_is_order_independent() {
        assert_eq!(normalize_pair(1, 2), normalize_pair(2, 1));
        assert_eq!(normalize_pair(5, 5), (5, 5));
    }
}
