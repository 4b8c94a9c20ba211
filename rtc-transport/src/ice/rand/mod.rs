use shared::util::math_rand_alpha;


pub(crate) const LEN_UFRAG: usize = 16;
pub(crate) const LEN_PWD: usize = 32;

/// Generates ICE pwd.
/// This internally uses `generate_crypto_random_string`.
pub(crate) fn generate_pwd() -> String {
    math_rand_alpha(LEN_PWD)
}

/// ICE user fragment.
/// This internally uses `generate_crypto_random_string`.
pub(crate) fn generate_ufrag() -> String {
    math_rand_alpha(LEN_UFRAG)
}
