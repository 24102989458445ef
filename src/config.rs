//! Deployment-time authorization policy.
//!
//! The registry supports two registration models and an optional
//! role-based delegation of privilege. The choice is fixed at `init` and
//! cannot be changed afterwards.

use soroban_sdk::contracttype;

/// Who may register principals and run credential checks.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum RegistrationMode {
    /// Only a privileged caller registers principals and authenticates them.
    AdminIssued = 0,

    /// A principal registers itself. Authentication may be requested by the
    /// principal or by a privileged caller.
    SelfService = 1,
}

/// Registry policy stored at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryConfig {
    /// Registration and authentication model.
    pub registration: RegistrationMode,

    /// When set, registered principals holding `Role::Admin` are privileged
    /// in addition to the bootstrap admin.
    pub role_delegation: bool,
}

impl RegistryConfig {
    /// Most restrictive policy: admin-issued registration, and the bootstrap
    /// admin is the only privileged caller.
    pub fn canonical() -> Self {
        Self {
            registration: RegistrationMode::AdminIssued,
            role_delegation: false,
        }
    }

    /// Whether principals register themselves.
    pub fn is_self_service(&self) -> bool {
        self.registration == RegistrationMode::SelfService
    }
}
