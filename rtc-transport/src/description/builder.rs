use super::*;

#[derive(Default)]
pub struct TransportDescriptionBuilder {
    /// transport_options lists the `a=ice-options` values.
    pub(crate) transport_options: Vec<String>,

    /// ice_ufrag and ice_pwd are the ICE credentials. The builder does not
    /// validate them.
    pub(crate) ice_ufrag: String,
    pub(crate) ice_pwd: String,

    /// renomination adds the `renomination` ICE option on build.
    pub(crate) renomination: bool,

    pub(crate) ice_mode: IceMode,
    pub(crate) connection_role: ConnectionRole,
    pub(crate) identity_fingerprint: Option<Fingerprint>,
    pub(crate) opaque_parameters: Option<OpaqueTransportParameters>,
}

impl TransportDescriptionBuilder {
    pub fn new() -> Self {
        TransportDescriptionBuilder::default()
    }

    pub fn with_transport_options(mut self, transport_options: Vec<String>) -> Self {
        self.transport_options = transport_options;
        self
    }

    pub fn with_ice_credentials(
        mut self,
        ice_ufrag: impl Into<String>,
        ice_pwd: impl Into<String>,
    ) -> Self {
        self.ice_ufrag = ice_ufrag.into();
        self.ice_pwd = ice_pwd.into();
        self
    }

    pub fn with_ice_parameters(mut self, ice_parameters: &IceParameters) -> Self {
        self.ice_ufrag.clone_from(&ice_parameters.ufrag);
        self.ice_pwd.clone_from(&ice_parameters.pwd);
        self.renomination = ice_parameters.renomination;
        self
    }

    pub fn with_ice_mode(mut self, ice_mode: IceMode) -> Self {
        self.ice_mode = ice_mode;
        self
    }

    pub fn with_connection_role(mut self, connection_role: ConnectionRole) -> Self {
        self.connection_role = connection_role;
        self
    }

    pub fn with_identity_fingerprint(mut self, identity_fingerprint: Fingerprint) -> Self {
        self.identity_fingerprint = Some(identity_fingerprint);
        self
    }

    pub fn with_opaque_parameters(mut self, opaque_parameters: OpaqueTransportParameters) -> Self {
        self.opaque_parameters = Some(opaque_parameters);
        self
    }

    pub fn build(self) -> TransportDescription {
        let mut description = TransportDescription {
            transport_options: self.transport_options,
            ice_ufrag: self.ice_ufrag,
            ice_pwd: self.ice_pwd,
            ice_mode: self.ice_mode,
            connection_role: self.connection_role,
            identity_fingerprint: self.identity_fingerprint.map(Box::new),
            opaque_parameters: self.opaque_parameters,
        };

        if self.renomination {
            description.add_option(ICE_OPTION_RENOMINATION);
        }

        description
    }
}
