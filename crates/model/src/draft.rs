use crate::{DEFAULT_DURATION, MIN_OPTIONS};
use alloc::{string::String, vec, vec::Vec};
use serde::{Deserialize, Serialize};

/// Editing buffer for a poll that has not been submitted yet.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Draft {
    pub title: String,
    pub description: String,
    /// Option texts as typed, including blank ones.
    pub options: Vec<String>,
    /// Length of the voting window (in hours).
    pub duration: u16,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            options: vec![String::new(); MIN_OPTIONS],
            duration: DEFAULT_DURATION,
        }
    }
}
