//! Event emission helpers for the identity registry.

use soroban_sdk::{Address, BytesN, Env, Symbol};

use crate::profile::Role;

/// Emit an event when a principal is registered.
pub fn emit_registered(
    env: &Env,
    principal: &Address,
    username: &BytesN<32>,
    email: &BytesN<32>,
    role: Role,
) {
    let topics = (Symbol::new(env, "registered"), principal.clone());
    env.events()
        .publish(topics, (username.clone(), email.clone(), role));
}

/// Emit an event when a principal's role is changed.
pub fn emit_role_updated(env: &Env, principal: &Address, role: Role) {
    let topics = (Symbol::new(env, "role_updated"), principal.clone());
    env.events().publish(topics, role);
}
