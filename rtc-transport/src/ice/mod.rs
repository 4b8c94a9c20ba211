pub mod mode;
pub mod parameters;
pub(crate) mod rand;

/// <https://datatracker.ietf.org/doc/html/rfc8839#section-5.4>
/// ice-ufrag-att = "ice-ufrag:" ufrag
/// ufrag         = 4*256ice-char
pub const ICE_UFRAG_MIN_LENGTH: usize = 4;
pub const ICE_UFRAG_MAX_LENGTH: usize = 256;

/// ice-pwd-att = "ice-pwd:" password
/// password    = 22*256ice-char
pub const ICE_PWD_MIN_LENGTH: usize = 22;
pub const ICE_PWD_MAX_LENGTH: usize = 256;

/// ice-char = ALPHA / DIGIT / "+" / "/"
pub fn is_ice_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '+' || c == '/'
}
