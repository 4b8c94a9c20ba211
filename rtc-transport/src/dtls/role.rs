use std::fmt;

use serde::{Deserialize, Serialize};

/// ConnectionRole is the `a=setup` attribute value a peer advertises for the
/// DTLS/TCP connection carried over the transport.
///
/// <https://datatracker.ietf.org/doc/html/rfc4145#section-4>
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionRole {
    /// No role negotiated. Has no wire token.
    #[default]
    #[serde(rename = "unspecified")]
    None,

    /// The endpoint will initiate an outgoing connection.
    #[serde(rename = "active")]
    Active,

    /// The endpoint will accept an incoming connection.
    #[serde(rename = "passive")]
    Passive,

    /// The endpoint is willing to accept an incoming connection or to
    /// initiate an outgoing connection.
    #[serde(rename = "actpass")]
    ActPass,

    /// The endpoint does not want the connection to be established for the
    /// time being.
    #[serde(rename = "holdconn")]
    HoldConn,
}

pub const CONNECTION_ROLE_ACTIVE_STR: &str = "active";
pub const CONNECTION_ROLE_PASSIVE_STR: &str = "passive";
pub const CONNECTION_ROLE_ACTPASS_STR: &str = "actpass";
pub const CONNECTION_ROLE_HOLDCONN_STR: &str = "holdconn";

const CONNECTION_ROLES: [(&str, ConnectionRole); 4] = [
    (CONNECTION_ROLE_ACTIVE_STR, ConnectionRole::Active),
    (CONNECTION_ROLE_PASSIVE_STR, ConnectionRole::Passive),
    (CONNECTION_ROLE_ACTPASS_STR, ConnectionRole::ActPass),
    (CONNECTION_ROLE_HOLDCONN_STR, ConnectionRole::HoldConn),
];

impl ConnectionRole {
    /// Decodes an `a=setup` token, ignoring ASCII case.
    ///
    /// Returns `None` for anything that is not one of the four known tokens;
    /// callers treat that as "no role".
    pub fn from_token(token: &str) -> Option<Self> {
        let role = CONNECTION_ROLES
            .iter()
            .find(|(role_str, _)| role_str.eq_ignore_ascii_case(token))
            .map(|(_, role)| *role);

        if role.is_none() {
            log::trace!("unknown connection role token {token:?}");
        }
        role
    }

    /// Encodes the role as its canonical lower-case token.
    ///
    /// [`ConnectionRole::None`] cannot be encoded.
    pub fn to_token(self) -> Option<&'static str> {
        match self {
            ConnectionRole::None => None,
            ConnectionRole::Active => Some(CONNECTION_ROLE_ACTIVE_STR),
            ConnectionRole::Passive => Some(CONNECTION_ROLE_PASSIVE_STR),
            ConnectionRole::ActPass => Some(CONNECTION_ROLE_ACTPASS_STR),
            ConnectionRole::HoldConn => Some(CONNECTION_ROLE_HOLDCONN_STR),
        }
    }
}

/// Unknown tokens map to [`ConnectionRole::None`].
impl From<&str> for ConnectionRole {
    fn from(raw: &str) -> Self {
        ConnectionRole::from_token(raw).unwrap_or_default()
    }
}

impl fmt::Display for ConnectionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_token() {
            Some(token) => write!(f, "{token}"),
            None => write!(f, "Unspecified"),
        }
    }
}
