//! Storage key definitions for the identity registry.

use soroban_sdk::{contracttype, Address, BytesN, Env};

use crate::config::RegistryConfig;
use crate::profile::Profile;

/// Storage keys for the identity registry.
///
/// `Admin`, `Config` and `ProfileCount` live in instance storage; the rest
/// are persistent entries.
#[contracttype]
#[derive(Clone, Debug)]
pub enum RegistryKey {
    /// Bootstrap administrator address.
    Admin,

    /// Deployment policy chosen at initialization.
    Config,

    /// Total count of registered profiles.
    ProfileCount,

    /// Maps principal Address to its Profile.
    Profile(Address),

    /// Username index. Maps the token to the owning principal.
    Username(BytesN<32>),

    /// Email index. Maps the token to the owning principal.
    Email(BytesN<32>),
}

/// Time-to-live for registry data in ledger entries.
pub const PROFILE_TTL_THRESHOLD: u32 = 518400; // ~30 days
pub const PROFILE_TTL_EXTEND: u32 = 2592000; // ~150 days

pub fn load_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&RegistryKey::Admin)
}

pub fn load_config(env: &Env) -> Option<RegistryConfig> {
    env.storage().instance().get(&RegistryKey::Config)
}

pub fn load_profile(env: &Env, principal: &Address) -> Option<Profile> {
    env.storage()
        .persistent()
        .get(&RegistryKey::Profile(principal.clone()))
}

/// Write a profile and extend its TTL.
pub fn save_profile(env: &Env, principal: &Address, profile: &Profile) {
    let key = RegistryKey::Profile(principal.clone());
    env.storage().persistent().set(&key, profile);
    env.storage()
        .persistent()
        .extend_ttl(&key, PROFILE_TTL_THRESHOLD, PROFILE_TTL_EXTEND);
}

/// Point an index entry at its owning principal and extend its TTL.
pub fn claim_index(env: &Env, key: RegistryKey, principal: &Address) {
    env.storage().persistent().set(&key, principal);
    env.storage()
        .persistent()
        .extend_ttl(&key, PROFILE_TTL_THRESHOLD, PROFILE_TTL_EXTEND);
}

pub fn index_owner(env: &Env, key: RegistryKey) -> Option<Address> {
    env.storage().persistent().get(&key)
}

pub fn profile_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&RegistryKey::ProfileCount)
        .unwrap_or(0)
}

pub fn increment_profile_count(env: &Env) {
    let count = profile_count(env);
    env.storage()
        .instance()
        .set(&RegistryKey::ProfileCount, &(count + 1));
}
