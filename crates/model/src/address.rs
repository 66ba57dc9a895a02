use alloc::{boxed::Box, string::String};
use core::fmt::{self, Display};
use serde::{Deserialize, Serialize};

/// Mock wallet address. This is never validated against any real address format.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Address(Box<str>);

impl Address {
    const HEAD: usize = 6;
    const TAIL: usize = 4;

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortens the address into the familiar `0x1234...5678` form. Addresses that are
    /// too short to shorten are returned whole.
    pub fn abbreviate(&self) -> String {
        let text = self.as_str();
        let count = text.chars().count();
        if count <= Self::HEAD + Self::TAIL {
            return String::from(text);
        }

        let head: String = text.chars().take(Self::HEAD).collect();
        let tail: String = text.chars().skip(count - Self::TAIL).collect();
        alloc::format!("{head}...{tail}")
    }
}

impl From<String> for Address {
    fn from(text: String) -> Self {
        Self(text.into_boxed_str())
    }
}

impl From<&str> for Address {
    fn from(text: &str) -> Self {
        Self(text.into())
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
