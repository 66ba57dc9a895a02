#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod address;
pub mod draft;
pub mod poll;

pub use address::Address;
pub use draft::Draft;
pub use poll::Poll;

use serde::{Deserialize, Serialize};

/// Fewest options a poll may be drafted with.
pub const MIN_OPTIONS: usize = 2;
/// Most options a poll may be drafted with.
pub const MAX_OPTIONS: usize = 10;
/// Voting window (in hours) of a fresh draft.
pub const DEFAULT_DURATION: u16 = 24;
/// Shortest accepted voting window (in hours).
pub const MIN_DURATION: u16 = 1;
/// Longest accepted voting window (in hours). This is thirty days.
pub const MAX_DURATION: u16 = 720;

/// The two top-level views of the interface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// List of all polls with their voting buttons.
    #[default]
    Browse,
    /// The poll draft editor.
    Create,
}
