use crate::Address;
use alloc::{string::String, vec::Vec};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A votable proposal with a fixed set of options and a voting window.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Poll {
    /// Sequential identifier. This is the number of polls that existed at creation.
    pub id: u32,
    /// Headline shown on the poll card.
    pub title: String,
    pub description: String,
    /// Possible selections, in display order.
    pub options: Vec<String>,
    /// Per-option counts. Always zeroed: casting a vote never touches these.
    pub votes: Vec<u64>,
    /// When the voting window opened.
    pub start: DateTime<Utc>,
    /// When the voting window closes.
    pub end: DateTime<Utc>,
    /// Wallet that submitted the poll.
    pub creator: Address,
    /// Whether the connected wallet has already voted on this poll.
    pub has_voted: bool,
    pub finalized: bool,
    /// Static flag. This is not derived from the voting window.
    pub is_active: bool,
}
