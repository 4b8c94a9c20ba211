use serde::{Deserialize, Serialize};
use shared::error::{Error, Result};

use super::rand::{generate_pwd, generate_ufrag};
use super::*;

#[cfg(test)]
mod parameters_test;

/// IceParameters holds the ICE credentials of one side of a transport.
///
/// Either both `ufrag` and `pwd` are empty (peers that predate the
/// `a=ice-ufrag`/`a=ice-pwd` attributes), or both satisfy the length and
/// ice-char rules of [RFC 8839 Section 5.4]. Values produced by
/// [`IceParameters::parse`] and [`IceParameters::generate`] always hold this.
///
/// [RFC 8839 Section 5.4]: https://datatracker.ietf.org/doc/html/rfc8839#section-5.4
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawIceParameters")]
pub struct IceParameters {
    pub ufrag: String,
    pub pwd: String,
    /// Whether the peer advertised the `renomination` ICE option.
    pub renomination: bool,
}

impl IceParameters {
    /// Validates raw ufrag/pwd strings taken from a session description.
    ///
    /// The ufrag is checked before the pwd and the first violation is
    /// returned. Both strings empty is accepted as-is.
    pub fn parse(raw_ufrag: &str, raw_pwd: &str) -> Result<Self> {
        // Legacy peers omit credentials altogether.
        if raw_ufrag.is_empty() && raw_pwd.is_empty() {
            return Ok(IceParameters::default());
        }

        let ufrag = parse_ice_ufrag(raw_ufrag)?;
        let pwd = parse_ice_pwd(raw_pwd)?;

        Ok(IceParameters {
            ufrag,
            pwd,
            renomination: false,
        })
    }

    /// Generates a fresh random ufrag/pwd pair.
    pub fn generate() -> Self {
        IceParameters {
            ufrag: generate_ufrag(),
            pwd: generate_pwd(),
            renomination: false,
        }
    }

    /// Returns true for the legacy no-credentials case.
    pub fn is_empty(&self) -> bool {
        self.ufrag.is_empty() && self.pwd.is_empty()
    }
}

/// Wire shape of [`IceParameters`]; deserialized values go through
/// [`IceParameters::parse`].
#[derive(Deserialize)]
struct RawIceParameters {
    #[serde(default)]
    ufrag: String,
    #[serde(default)]
    pwd: String,
    #[serde(default)]
    renomination: bool,
}

impl TryFrom<RawIceParameters> for IceParameters {
    type Error = Error;

    fn try_from(raw: RawIceParameters) -> Result<Self> {
        let mut params = IceParameters::parse(&raw.ufrag, &raw.pwd)?;
        params.renomination = raw.renomination;
        Ok(params)
    }
}

fn parse_ice_ufrag(raw_ufrag: &str) -> Result<String> {
    let len = raw_ufrag.len();
    if !(ICE_UFRAG_MIN_LENGTH..=ICE_UFRAG_MAX_LENGTH).contains(&len) {
        log::debug!("rejecting ice-ufrag of length {len}");
        return Err(Error::ErrIceUfragLength {
            min: ICE_UFRAG_MIN_LENGTH,
            max: ICE_UFRAG_MAX_LENGTH,
        });
    }

    if !raw_ufrag.chars().all(is_ice_char) {
        log::debug!("rejecting ice-ufrag {raw_ufrag:?}: invalid character");
        return Err(Error::ErrIceUfragCharset);
    }

    Ok(raw_ufrag.to_owned())
}

fn parse_ice_pwd(raw_pwd: &str) -> Result<String> {
    let len = raw_pwd.len();
    if !(ICE_PWD_MIN_LENGTH..=ICE_PWD_MAX_LENGTH).contains(&len) {
        log::debug!("rejecting ice-pwd of length {len}");
        return Err(Error::ErrIcePwdLength {
            min: ICE_PWD_MIN_LENGTH,
            max: ICE_PWD_MAX_LENGTH,
        });
    }

    if !raw_pwd.chars().all(is_ice_char) {
        // never log the password itself
        log::debug!("rejecting ice-pwd of length {len}: invalid character");
        return Err(Error::ErrIcePwdCharset);
    }

    Ok(raw_pwd.to_owned())
}
