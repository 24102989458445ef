//! Profile record and role enum.

use soroban_sdk::{contracttype, BytesN};

use crate::validation::is_empty_token;

/// Role attached to a registered principal.
///
/// `None` is the sentinel for "no such principal" and is never stored.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    None = 0,
    User = 1,
    Admin = 2,
}

/// Credential profile stored for each registered principal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Profile {
    /// Opaque username token, unique across the registry.
    pub username: BytesN<32>,

    /// Opaque email token, unique across the registry.
    pub email: BytesN<32>,

    /// Caller-supplied hash of the secret. Compared byte-for-byte.
    pub credential_hash: BytesN<32>,

    /// Current role. Always `User` or `Admin` once stored.
    pub role: Role,

    /// Ledger sequence at registration.
    pub registered_at: u64,

    /// Ledger sequence of the last role change.
    pub updated_at: u64,
}

impl Profile {
    /// Create a freshly registered profile with role `User`.
    pub fn new(
        username: BytesN<32>,
        email: BytesN<32>,
        credential_hash: BytesN<32>,
        registered_at: u64,
    ) -> Self {
        Self {
            username,
            email,
            credential_hash,
            role: Role::User,
            registered_at,
            updated_at: registered_at,
        }
    }

    /// Whether this profile satisfies the full existence rule used by
    /// authentication: a real role and both identifiers set.
    pub fn is_complete(&self) -> bool {
        self.role != Role::None && !is_empty_token(&self.username) && !is_empty_token(&self.email)
    }

    /// Byte-for-byte comparison against the stored credential hash.
    pub fn credential_matches(&self, credential_hash: &BytesN<32>) -> bool {
        self.credential_hash == *credential_hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    fn token(env: &Env, byte: u8) -> BytesN<32> {
        BytesN::from_array(env, &[byte; 32])
    }

    #[test]
    fn test_new_profile_starts_as_user() {
        let env = Env::default();
        let profile = Profile::new(token(&env, 1), token(&env, 2), token(&env, 3), 7);

        assert_eq!(profile.role, Role::User);
        assert_eq!(profile.registered_at, 7);
        assert_eq!(profile.updated_at, 7);
        assert!(profile.is_complete());
    }

    #[test]
    fn test_incomplete_profiles() {
        let env = Env::default();

        // Missing username
        let profile = Profile::new(token(&env, 0), token(&env, 2), token(&env, 3), 0);
        assert!(!profile.is_complete());

        // Missing email
        let profile = Profile::new(token(&env, 1), token(&env, 0), token(&env, 3), 0);
        assert!(!profile.is_complete());

        // Sentinel role
        let mut profile = Profile::new(token(&env, 1), token(&env, 2), token(&env, 3), 0);
        profile.role = Role::None;
        assert!(!profile.is_complete());
    }

    #[test]
    fn test_credential_matches() {
        let env = Env::default();
        let profile = Profile::new(token(&env, 1), token(&env, 2), token(&env, 3), 0);

        assert!(profile.credential_matches(&token(&env, 3)));
        assert!(!profile.credential_matches(&token(&env, 4)));

        let mut almost = [3u8; 32];
        almost[31] = 4;
        assert!(!profile.credential_matches(&BytesN::from_array(&env, &almost)));
    }
}
