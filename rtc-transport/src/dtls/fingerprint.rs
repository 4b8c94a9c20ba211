use std::fmt;

use serde::{Deserialize, Serialize};
use shared::error::{Error, Result};

/// Fingerprint of a peer's identity certificate, as carried in the SDP
/// `a=fingerprint` attribute.
///
/// This crate never computes digests. It only carries the algorithm name and
/// digest bytes from the certificate layer to the description layer.
///
/// ```
/// use rtc_transport::dtls::fingerprint::Fingerprint;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let fingerprint = Fingerprint::from_rfc4572("sha-256", "AB:CD:EF:01")?;
/// assert_eq!(fingerprint.digest, vec![0xab, 0xcd, 0xef, 0x01]);
/// assert_eq!(fingerprint.to_string(), "sha-256 AB:CD:EF:01");
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
///
/// # Specifications
///
/// - [RFC 8122 Section 5] - Fingerprint Attribute
///
/// [RFC 8122 Section 5]: https://datatracker.ietf.org/doc/html/rfc8122#section-5
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint {
    /// Hash function textual name, e.g. `sha-256`.
    pub algorithm: String,
    /// Raw digest bytes.
    pub digest: Vec<u8>,
}

impl Fingerprint {
    pub fn new(algorithm: impl Into<String>, digest: impl Into<Vec<u8>>) -> Self {
        Fingerprint {
            algorithm: algorithm.into(),
            digest: digest.into(),
        }
    }

    /// Parses the colon separated upper- or lower-case hex value of an
    /// `a=fingerprint` attribute.
    pub fn from_rfc4572(algorithm: &str, value: &str) -> Result<Self> {
        if algorithm.is_empty() || value.is_empty() {
            return Err(Error::ErrInvalidFingerprint(format!("{algorithm} {value}")));
        }

        let digest = value
            .split(':')
            .map(|pair| {
                if pair.len() != 2 {
                    return Err(Error::ErrInvalidFingerprint(value.to_owned()));
                }
                let mut byte = [0u8; 1];
                hex::decode_to_slice(pair, &mut byte)
                    .map_err(|_| Error::ErrInvalidFingerprint(value.to_owned()))?;
                Ok(byte[0])
            })
            .collect::<Result<Vec<u8>>>()?;

        Ok(Fingerprint::new(algorithm.to_ascii_lowercase(), digest))
    }

    /// Formats the digest as upper-case hex pairs joined by `:`.
    pub fn rfc4572_value(&self) -> String {
        self.digest
            .iter()
            .map(|b| hex::encode_upper([*b]))
            .collect::<Vec<String>>()
            .join(":")
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.algorithm, self.rfc4572_value())
    }
}
