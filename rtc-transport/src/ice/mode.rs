use std::fmt;

use serde::{Deserialize, Serialize};

/// IceMode indicates whether an agent runs the complete ICE procedures or the
/// lite subset advertised with `a=ice-lite`.
///
/// A lite agent only gathers host candidates and never initiates
/// connectivity checks; it always takes the controlled role.
///
/// <https://datatracker.ietf.org/doc/html/rfc8445#section-2.5>
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IceMode {
    /// Full ICE agent.
    #[default]
    #[serde(rename = "full")]
    Full,

    /// Lite ICE agent.
    #[serde(rename = "lite")]
    Lite,
}

const ICE_MODE_FULL_STR: &str = "full";
const ICE_MODE_LITE_STR: &str = "lite";

impl IceMode {
    pub fn is_lite(self) -> bool {
        self == IceMode::Lite
    }
}

impl fmt::Display for IceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            IceMode::Full => write!(f, "{ICE_MODE_FULL_STR}"),
            IceMode::Lite => write!(f, "{ICE_MODE_LITE_STR}"),
        }
    }
}
