//! The transport description aggregate.
//!
//! A [`TransportDescription`] is what the SDP layer produces for one
//! transport: ICE options, credentials and mode, the `a=setup` role and the
//! identity fingerprint. It is a plain value. Every copy owns its own
//! fingerprint, so two descriptions negotiated independently never share
//! state.
//!
//! Credentials are not validated here. Run raw strings through
//! [`IceParameters::parse`] before assembling a description; a description
//! may also hold empty credentials (legacy peers) or a draft that is still
//! being filled in.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::dtls::fingerprint::Fingerprint;
use crate::dtls::role::ConnectionRole;
use crate::ice::mode::IceMode;
use crate::ice::parameters::IceParameters;

mod builder;

pub use builder::TransportDescriptionBuilder;

/// `a=ice-options:trickle`
/// <https://datatracker.ietf.org/doc/html/rfc8840>
pub const ICE_OPTION_TRICKLE: &str = "trickle";
/// `a=ice-options:renomination`
pub const ICE_OPTION_RENOMINATION: &str = "renomination";

/// Protocol specific parameters carried alongside the description without
/// interpretation.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpaqueTransportParameters {
    pub protocol: String,
    pub parameters: Bytes,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportDescription {
    /// Values of `a=ice-options`, in the order they were added.
    pub transport_options: Vec<String>,
    pub ice_ufrag: String,
    pub ice_pwd: String,
    pub ice_mode: IceMode,
    pub connection_role: ConnectionRole,
    /// Exclusively owned by this description.
    pub identity_fingerprint: Option<Box<Fingerprint>>,
    pub opaque_parameters: Option<OpaqueTransportParameters>,
}

fn copy_fingerprint(fingerprint: Option<&Fingerprint>) -> Option<Box<Fingerprint>> {
    fingerprint.map(|fp| Box::new(fp.clone()))
}

impl Default for TransportDescription {
    fn default() -> Self {
        TransportDescription {
            transport_options: vec![],
            ice_ufrag: String::new(),
            ice_pwd: String::new(),
            ice_mode: IceMode::Full,
            connection_role: ConnectionRole::None,
            identity_fingerprint: None,
            opaque_parameters: None,
        }
    }
}

impl Clone for TransportDescription {
    fn clone(&self) -> Self {
        TransportDescription {
            transport_options: self.transport_options.clone(),
            ice_ufrag: self.ice_ufrag.clone(),
            ice_pwd: self.ice_pwd.clone(),
            ice_mode: self.ice_mode,
            connection_role: self.connection_role,
            identity_fingerprint: copy_fingerprint(self.identity_fingerprint.as_deref()),
            opaque_parameters: self.opaque_parameters.clone(),
        }
    }

    /// Assignment: the previously owned fingerprint is released and replaced
    /// by a fresh copy of `source`'s.
    fn clone_from(&mut self, source: &Self) {
        self.transport_options.clone_from(&source.transport_options);
        self.ice_ufrag.clone_from(&source.ice_ufrag);
        self.ice_pwd.clone_from(&source.ice_pwd);
        self.ice_mode = source.ice_mode;
        self.connection_role = source.connection_role;
        self.identity_fingerprint = copy_fingerprint(source.identity_fingerprint.as_deref());
        self.opaque_parameters.clone_from(&source.opaque_parameters);
    }
}

impl TransportDescription {
    pub fn new() -> Self {
        TransportDescription::default()
    }

    /// Creates a description from explicit values. The fingerprint, if any,
    /// is copied into storage owned by the new description.
    pub fn with_parameters(
        transport_options: Vec<String>,
        ice_ufrag: impl Into<String>,
        ice_pwd: impl Into<String>,
        ice_mode: IceMode,
        connection_role: ConnectionRole,
        identity_fingerprint: Option<&Fingerprint>,
    ) -> Self {
        TransportDescription {
            transport_options,
            ice_ufrag: ice_ufrag.into(),
            ice_pwd: ice_pwd.into(),
            ice_mode,
            connection_role,
            identity_fingerprint: copy_fingerprint(identity_fingerprint),
            opaque_parameters: None,
        }
    }

    /// Creates a full-ICE description carrying only credentials.
    pub fn with_credentials(ice_ufrag: impl Into<String>, ice_pwd: impl Into<String>) -> Self {
        TransportDescription {
            ice_ufrag: ice_ufrag.into(),
            ice_pwd: ice_pwd.into(),
            ..Default::default()
        }
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.transport_options.iter().any(|o| o == option)
    }

    /// Appends an ICE option unless it is already present.
    pub fn add_option(&mut self, option: impl Into<String>) {
        let option = option.into();
        if !self.has_option(&option) {
            self.transport_options.push(option);
        }
    }

    /// Returns the credentials of this description. They are not re-validated.
    pub fn ice_parameters(&self) -> IceParameters {
        IceParameters {
            ufrag: self.ice_ufrag.clone(),
            pwd: self.ice_pwd.clone(),
            renomination: self.has_option(ICE_OPTION_RENOMINATION),
        }
    }

    /// A description is secure once it asserts an identity fingerprint.
    pub fn secure(&self) -> bool {
        self.identity_fingerprint.is_some()
    }

    /// Replaces the identity fingerprint with a copy of `fingerprint`.
    pub fn set_identity_fingerprint(&mut self, fingerprint: Option<&Fingerprint>) {
        self.identity_fingerprint = copy_fingerprint(fingerprint);
    }
}
