//! Administrator access control for poll contracts
//!
//! A poll has exactly one administrator: the identity that drives the
//! workflow and maintains the voter whitelist. This module stores that
//! identity and provides the checks every privileged entry point goes
//! through.
//!
//! ## Features
//! - One-time admin initialization
//! - Explicit admin checks returning `AuthError` instead of panicking
//! - Admin handover with an audit event

#![no_std]

use soroban_sdk::{contracttype, symbol_short, Address, Env};

/// Roughly 30 days of ledgers at ~5s per ledger.
pub const ADMIN_TTL_LEDGERS: u32 = 518_400;
pub const ADMIN_TTL_THRESHOLD: u32 = ADMIN_TTL_LEDGERS - 17_280;

/// Storage keys for the admin identity
#[contracttype]
#[derive(Clone)]
pub enum AdminKey {
    /// Contract-level admin address
    Admin,
}

/// Authorization errors
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AuthError {
    Unauthorized,
    NotInitialized,
    AlreadyInitialized,
}

fn store_admin(env: &Env, admin: &Address) {
    env.storage().persistent().set(&AdminKey::Admin, admin);
    env.storage()
        .persistent()
        .extend_ttl(&AdminKey::Admin, ADMIN_TTL_THRESHOLD, ADMIN_TTL_LEDGERS);
}

/// Initialize contract admin (call once during contract initialization)
pub fn initialize_admin(env: &Env, admin: &Address) -> Result<(), AuthError> {
    if has_admin(env) {
        return Err(AuthError::AlreadyInitialized);
    }
    store_admin(env, admin);
    Ok(())
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().persistent().has(&AdminKey::Admin)
}

/// Get the contract admin address. Every read keeps the entry alive for
/// another `ADMIN_TTL_LEDGERS`.
pub fn get_admin(env: &Env) -> Option<Address> {
    let admin = env.storage().persistent().get(&AdminKey::Admin);
    if admin.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&AdminKey::Admin, ADMIN_TTL_THRESHOLD, ADMIN_TTL_LEDGERS);
    }
    admin
}

/// Require admin privileges.
///
/// Only compares identities; the caller's signature is checked separately
/// with `require_auth` (see [`verify_and_require_admin`]).
pub fn require_admin(env: &Env, address: &Address) -> Result<(), AuthError> {
    let admin = get_admin(env).ok_or(AuthError::NotInitialized)?;
    if admin == *address {
        Ok(())
    } else {
        Err(AuthError::Unauthorized)
    }
}

/// Utility: Combine identity verification with the admin check
pub fn verify_and_require_admin(env: &Env, caller: &Address) -> Result<(), AuthError> {
    caller.require_auth();
    require_admin(env, caller)
}

/// Hand the admin role over to `new_admin` (admin only).
///
/// Returns the previous admin.
pub fn transfer_admin(
    env: &Env,
    caller: &Address,
    new_admin: &Address,
) -> Result<Address, AuthError> {
    verify_and_require_admin(env, caller)?;

    store_admin(env, new_admin);

    env.events().publish(
        (symbol_short!("adm_xfer"),),
        (caller.clone(), new_admin.clone()),
    );

    Ok(caller.clone())
}
