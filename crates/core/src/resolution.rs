//! Resolution tokens a video can be offered in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the eight recognised output resolutions.
///
/// Serialized as the bare token (`"P144"`, `"P1080"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    P144,
    P240,
    P360,
    P480,
    P720,
    P1080,
    P1440,
    P2160,
}

/// Every recognised resolution, lowest first.
pub const ALL_RESOLUTIONS: [Resolution; 8] = [
    Resolution::P144,
    Resolution::P240,
    Resolution::P360,
    Resolution::P480,
    Resolution::P720,
    Resolution::P1080,
    Resolution::P1440,
    Resolution::P2160,
];

impl Resolution {
    pub fn as_str(self) -> &'static str {
        match self {
            Resolution::P144 => "P144",
            Resolution::P240 => "P240",
            Resolution::P360 => "P360",
            Resolution::P480 => "P480",
            Resolution::P720 => "P720",
            Resolution::P1080 => "P1080",
            Resolution::P1440 => "P1440",
            Resolution::P2160 => "P2160",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown resolution token: '{0}'")]
pub struct UnknownResolution(pub String);

impl FromStr for Resolution {
    type Err = UnknownResolution;

    /// Tokens are case-sensitive: `"p144"` is not a resolution.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        ALL_RESOLUTIONS
            .into_iter()
            .find(|r| r.as_str() == token)
            .ok_or_else(|| UnknownResolution(token.to_string()))
    }
}
