//! Frontend Models
//!
//! Catalog entries and the persisted vote record format.

use serde::{Deserialize, Serialize};

/// A donut on the menu. Static, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: &'static str,
    pub name: &'static str,
    pub img: &'static str,
}

/// The current user's vote on an item (`null` in storage means no vote)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserVote {
    Up,
    /// Only produced by an older persisted format; never written by this app
    Down,
}

/// Per-item favorite state, stored as `{"score": n, "userVote": "up" | "down" | null}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRecord {
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub user_vote: Option<UserVote>,
}

impl VoteRecord {
    pub fn is_up(&self) -> bool {
        self.user_vote == Some(UserVote::Up)
    }

    /// Record after the user clicks the favorite star.
    ///
    /// `up` clears the vote (-1). Anything else becomes `up`: +1 from no vote,
    /// +2 from a legacy `down` (the old down-vote is cancelled as well).
    pub fn toggled_up(&self) -> Self {
        match self.user_vote {
            Some(UserVote::Up) => Self {
                score: self.score.saturating_sub(1),
                user_vote: None,
            },
            Some(UserVote::Down) => Self {
                score: self.score.saturating_add(2),
                user_vote: Some(UserVote::Up),
            },
            None => Self {
                score: self.score.saturating_add(1),
                user_vote: Some(UserVote::Up),
            },
        }
    }
}
