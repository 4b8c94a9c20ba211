//! DTLS-related values negotiated in the session description: the `a=setup`
//! connection role and the `a=fingerprint` identity.

pub mod fingerprint;
pub mod role;
