//! # RTC Transport - negotiated ICE/DTLS transport parameters
//!
//! Value types describing what two peers agreed on for one transport channel:
//!
//! - **[`IceParameters`](ice::parameters::IceParameters)** - validated ICE
//!   username fragment and password
//! - **[`ConnectionRole`](dtls::role::ConnectionRole)** - the `a=setup` role and
//!   its wire token codec
//! - **[`IceMode`](ice::mode::IceMode)** - full or lite ICE
//! - **[`Fingerprint`](dtls::fingerprint::Fingerprint)** - identity certificate
//!   fingerprint
//! - **[`TransportDescription`](description::TransportDescription)** - the
//!   aggregate handed between SDP assembly stages
//!
//! The crate performs no I/O. Raw strings come from an SDP parser, are checked
//! with [`IceParameters::parse`](ice::parameters::IceParameters::parse), and the
//! results are assembled into a [`TransportDescription`](description::TransportDescription).
//!
//! ```
//! use rtc_transport::description::TransportDescriptionBuilder;
//! use rtc_transport::dtls::role::ConnectionRole;
//! use rtc_transport::ice::parameters::IceParameters;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let params = IceParameters::parse("E2Fr", "OpQzg1PAwUdeOB244chlgd")?;
//! let role = ConnectionRole::from_token("actpass").unwrap_or_default();
//!
//! let description = TransportDescriptionBuilder::new()
//!     .with_ice_parameters(&params)
//!     .with_connection_role(role)
//!     .build();
//!
//! assert_eq!(description.ice_ufrag, "E2Fr");
//! assert_eq!(description.connection_role, ConnectionRole::ActPass);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Specifications
//!
//! - [RFC 8839] - SDP Offer/Answer Procedures for ICE
//! - [RFC 8445] - ICE: Interactive Connectivity Establishment
//! - [RFC 4145] - TCP-Based Media Transport in SDP (`a=setup`)
//! - [RFC 8122] - Connection-Oriented Media Transport over TLS (`a=fingerprint`)
//!
//! [RFC 8839]: https://datatracker.ietf.org/doc/html/rfc8839
//! [RFC 8445]: https://datatracker.ietf.org/doc/html/rfc8445
//! [RFC 4145]: https://datatracker.ietf.org/doc/html/rfc4145
//! [RFC 8122]: https://datatracker.ietf.org/doc/html/rfc8122

#![warn(rust_2018_idioms)]

pub use shared;

pub mod description;
pub mod dtls;
pub mod ice;
