//! # Soroban Identity Registry
//!
//! Permissioned identity registry for the Soroban blockchain.
//!
//! The contract records one credential profile per principal and serves as a
//! shared, tamper-evident service of record for login and authorization flows
//! built elsewhere. Features include:
//!
//! - Globally unique username and email tokens
//! - Verification of a caller-supplied, pre-hashed credential
//! - A role attribute (`None` / `User` / `Admin`) behind privileged mutation
//! - Deployment-time choice between admin-issued and self-service registration
//!
//! The registry never hashes anything. Usernames, emails and credentials are
//! opaque 32-byte tokens produced upstream.
//!
//! ## Usage
//!
//! ```rust,ignore
//! client.init(&admin, &RegistryConfig::canonical());
//!
//! // Admin-issued registration
//! client.register(&alice, &username, &email, &credential_hash, &admin);
//!
//! // Credential check returns the stored username token
//! let username = client.authenticate(&alice, &credential_hash, &admin);
//!
//! // Promote
//! client.set_role(&alice, &Role::Admin, &admin);
//! assert_eq!(client.get_role(&alice), Role::Admin);
//! ```

#![no_std]

mod config;
mod events;
mod profile;
mod storage;
mod validation;

pub use config::{RegistrationMode, RegistryConfig};
pub use profile::Role;

use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, BytesN, Env};

use crate::events::*;
use crate::profile::Profile;
use crate::storage::RegistryKey;

/// Error codes for the identity registry contract.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum RegistryError {
    /// Contract has already been initialized.
    AlreadyInitialized = 1,
    /// Contract has not been initialized.
    NotInitialized = 2,
    /// Caller lacks the privilege required for this operation.
    Unauthorized = 3,
    /// Principal already has a profile.
    AlreadyRegistered = 4,
    /// Email token is already in use.
    EmailTaken = 5,
    /// Username token is already in use.
    UsernameTaken = 6,
    /// Username, email and credential hash are all empty.
    InvalidInput = 7,
    /// No profile exists for the principal.
    NotRegistered = 8,
    /// Supplied credential hash does not match the stored one.
    IncorrectCredential = 9,
    /// `Role::None` cannot be assigned.
    InvalidRole = 10,
}

impl From<RegistryError> for soroban_sdk::Error {
    fn from(e: RegistryError) -> Self {
        soroban_sdk::Error::from_contract_error(e as u32)
    }
}

#[contract]
pub struct IdentityRegistryContract;

#[contractimpl]
impl IdentityRegistryContract {
    // ========== Initialization ==========

    /// Initialize the contract with a bootstrap admin and a policy.
    ///
    /// This must be called once before any gated operation.
    pub fn init(env: Env, admin: Address, config: RegistryConfig) {
        if env.storage().instance().has(&RegistryKey::Admin) {
            panic_with_error!(&env, RegistryError::AlreadyInitialized);
        }

        admin.require_auth();
        env.storage().instance().set(&RegistryKey::Admin, &admin);
        env.storage().instance().set(&RegistryKey::Config, &config);
        env.storage().instance().set(&RegistryKey::ProfileCount, &0u64);
    }

    /// Get the bootstrap admin address.
    pub fn admin(env: Env) -> Address {
        storage::load_admin(&env)
            .unwrap_or_else(|| panic_with_error!(&env, RegistryError::NotInitialized))
    }

    /// Get the policy chosen at initialization.
    pub fn config(env: Env) -> RegistryConfig {
        storage::load_config(&env)
            .unwrap_or_else(|| panic_with_error!(&env, RegistryError::NotInitialized))
    }

    // ========== Registration ==========

    /// Register a profile for `principal`.
    ///
    /// # Arguments
    /// * `principal` - Address the profile belongs to
    /// * `username` - Opaque username token
    /// * `email` - Opaque email token
    /// * `credential_hash` - Hash of the secret, computed by the caller
    /// * `caller` - Registering address (an admin, or `principal` itself in
    ///   self-service mode)
    ///
    /// # Panics
    /// Checks run in this order and the first failure wins:
    /// - `Unauthorized` if the caller may not register this principal
    /// - `AlreadyRegistered` if the principal already has a profile
    /// - `EmailTaken` if the email token is in use
    /// - `UsernameTaken` if the username token is in use
    /// - `InvalidInput` if all three tokens are empty
    pub fn register(
        env: Env,
        principal: Address,
        username: BytesN<32>,
        email: BytesN<32>,
        credential_hash: BytesN<32>,
        caller: Address,
    ) {
        let config = Self::load_config(&env);
        if config.is_self_service() {
            if caller != principal {
                log!(&env, "self-service registration for another principal", caller);
                panic_with_error!(&env, RegistryError::Unauthorized);
            }
            caller.require_auth();
        } else {
            Self::require_privileged(&env, &caller, &config);
        }

        if env
            .storage()
            .persistent()
            .has(&RegistryKey::Profile(principal.clone()))
        {
            panic_with_error!(&env, RegistryError::AlreadyRegistered);
        }

        if env
            .storage()
            .persistent()
            .has(&RegistryKey::Email(email.clone()))
        {
            panic_with_error!(&env, RegistryError::EmailTaken);
        }

        if env
            .storage()
            .persistent()
            .has(&RegistryKey::Username(username.clone()))
        {
            panic_with_error!(&env, RegistryError::UsernameTaken);
        }

        if !validation::has_any_identity(&username, &email, &credential_hash) {
            panic_with_error!(&env, RegistryError::InvalidInput);
        }

        let timestamp = env.ledger().sequence() as u64;
        let profile = Profile::new(username.clone(), email.clone(), credential_hash, timestamp);

        storage::claim_index(&env, RegistryKey::Username(username.clone()), &principal);
        storage::claim_index(&env, RegistryKey::Email(email.clone()), &principal);
        storage::save_profile(&env, &principal, &profile);
        storage::increment_profile_count(&env);

        log!(&env, "registered", principal);
        emit_registered(&env, &principal, &username, &email, profile.role);
    }

    // ========== Authentication ==========

    /// Check a credential hash against the stored one.
    ///
    /// Returns the stored username token on success. Never writes state.
    ///
    /// # Panics
    /// - `Unauthorized` if the caller may not authenticate this principal
    /// - `NotRegistered` if there is no complete profile for the principal
    /// - `IncorrectCredential` if the hashes differ
    pub fn authenticate(
        env: Env,
        principal: Address,
        credential_hash: BytesN<32>,
        caller: Address,
    ) -> BytesN<32> {
        let config = Self::load_config(&env);
        if config.is_self_service() && caller == principal {
            caller.require_auth();
        } else {
            Self::require_privileged(&env, &caller, &config);
        }

        let profile = storage::load_profile(&env, &principal)
            .filter(|p| p.is_complete())
            .unwrap_or_else(|| panic_with_error!(&env, RegistryError::NotRegistered));

        if !profile.credential_matches(&credential_hash) {
            panic_with_error!(&env, RegistryError::IncorrectCredential);
        }

        profile.username
    }

    // ========== Roles ==========

    /// Overwrite the role of a registered principal (privileged).
    ///
    /// # Panics
    /// - `Unauthorized` if the caller is not privileged
    /// - `NotRegistered` if the principal has no profile
    /// - `InvalidRole` if `role` is `Role::None`
    pub fn set_role(env: Env, principal: Address, role: Role, caller: Address) {
        let config = Self::load_config(&env);
        Self::require_privileged(&env, &caller, &config);

        let mut profile = storage::load_profile(&env, &principal)
            .unwrap_or_else(|| panic_with_error!(&env, RegistryError::NotRegistered));

        // Clearing the role would leave a profile that no longer "exists".
        if role == Role::None {
            panic_with_error!(&env, RegistryError::InvalidRole);
        }

        profile.role = role;
        profile.updated_at = env.ledger().sequence() as u64;
        storage::save_profile(&env, &principal, &profile);

        log!(&env, "role updated", principal, role);
        emit_role_updated(&env, &principal, role);
    }

    /// Get the role of a principal. Unknown principals are `Role::None`.
    pub fn get_role(env: Env, principal: Address) -> Role {
        storage::load_profile(&env, &principal)
            .map(|p| p.role)
            .unwrap_or(Role::None)
    }

    // ========== Queries ==========

    /// Whether the principal has a profile.
    pub fn is_registered(env: Env, principal: Address) -> bool {
        env.storage()
            .persistent()
            .has(&RegistryKey::Profile(principal))
    }

    /// Check if a username token is free.
    pub fn is_username_available(env: Env, username: BytesN<32>) -> bool {
        !env.storage()
            .persistent()
            .has(&RegistryKey::Username(username))
    }

    /// Check if an email token is free.
    pub fn is_email_available(env: Env, email: BytesN<32>) -> bool {
        !env.storage()
            .persistent()
            .has(&RegistryKey::Email(email))
    }

    /// Principal that owns a username token, if any.
    pub fn username_owner(env: Env, username: BytesN<32>) -> Option<Address> {
        storage::index_owner(&env, RegistryKey::Username(username))
    }

    /// Principal that owns an email token, if any.
    pub fn email_owner(env: Env, email: BytesN<32>) -> Option<Address> {
        storage::index_owner(&env, RegistryKey::Email(email))
    }

    /// Get total profile count.
    pub fn profile_count(env: Env) -> u64 {
        storage::profile_count(&env)
    }

    // ========== Internal Helpers ==========

    fn load_config(env: &Env) -> RegistryConfig {
        storage::load_config(env)
            .unwrap_or_else(|| panic_with_error!(env, RegistryError::NotInitialized))
    }

    /// The bootstrap admin is always privileged. With role delegation on,
    /// so is any principal holding `Role::Admin` whose profile would also
    /// pass `authenticate`'s existence rule.
    fn require_privileged(env: &Env, caller: &Address, config: &RegistryConfig) {
        let admin = storage::load_admin(env)
            .unwrap_or_else(|| panic_with_error!(env, RegistryError::NotInitialized));

        let privileged = *caller == admin
            || (config.role_delegation
                && storage::load_profile(env, caller)
                    .filter(|p| p.is_complete())
                    .map(|p| p.role)
                    == Some(Role::Admin));

        if !privileged {
            log!(env, "unprivileged caller rejected", caller.clone());
            panic_with_error!(env, RegistryError::Unauthorized);
        }

        caller.require_auth();
    }
}
