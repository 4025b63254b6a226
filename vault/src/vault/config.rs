use soroban_sdk::{panic_with_error, Address, Env, Vec};

use crate::constants::SCALAR_7;
use crate::dependencies::ProviderClient;
use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::storage;
use crate::types::{DepositPolicy, VaultConfig};

pub fn execute_initialize(
    e: &Env,
    admin: &Address,
    token: &Address,
    providers: &Vec<Address>,
    config: &VaultConfig,
) {
    if storage::has_token(e) {
        panic_with_error!(e, VaultError::AlreadyInitialized);
    }
    require_valid_providers(e, providers);
    require_valid_config(e, config);
    require_valid_policy(e, &config.deposit_policy, providers);

    storage::set_admin(e, admin);
    storage::set_token(e, token);
    storage::set_config(e, config);
    storage::set_providers(e, providers);
    storage::set_total_units(e, &0);
    storage::set_paused(e, false);
}

/// Replace the provider registry. Funds held by a provider dropped from the
/// list are NOT migrated; rebalancing out first is the operator's job.
pub fn execute_set_providers(e: &Env, providers: &Vec<Address>) {
    require_valid_providers(e, providers);
    storage::set_providers(e, providers);
    VaultEvents::set_providers(e, providers.clone());
}

pub fn execute_set_caps(e: &Env, user_cap: i128, vault_cap: i128) {
    if user_cap <= 0 || vault_cap <= 0 {
        panic_with_error!(e, VaultError::InvalidConfig);
    }
    let mut config = storage::get_config(e);
    config.user_cap = user_cap;
    config.vault_cap = vault_cap;
    storage::set_config(e, &config);
    VaultEvents::set_caps(e, user_cap, vault_cap);
}

pub fn execute_set_fee(e: &Env, fee_rate: i128, fee_sink: &Address) {
    if fee_rate < 0 || fee_rate >= SCALAR_7 {
        panic_with_error!(e, VaultError::InvalidConfig);
    }
    let mut config = storage::get_config(e);
    config.fee_rate = fee_rate;
    config.fee_sink = fee_sink.clone();
    storage::set_config(e, &config);
    VaultEvents::set_fee(e, fee_rate, fee_sink.clone());
}

pub fn execute_set_deposit_policy(e: &Env, policy: &DepositPolicy) {
    let providers = storage::get_providers(e);
    require_valid_policy(e, policy, &providers);
    let mut config = storage::get_config(e);
    config.deposit_policy = policy.clone();
    storage::set_config(e, &config);
    VaultEvents::set_deposit_policy(e, policy.clone());
}

pub fn execute_set_paused(e: &Env, paused: bool) {
    storage::set_paused(e, paused);
    if paused {
        VaultEvents::paused(e);
    } else {
        VaultEvents::unpaused(e);
    }
}

/// Grant or revoke rebalance authority. Idempotent; revocation takes effect
/// on the next call, there is no grace period.
pub fn execute_set_executor(e: &Env, executor: &Address, allowed: bool) {
    storage::set_executor(e, executor, allowed);
    VaultEvents::set_executor(e, executor.clone(), allowed);
}

/// Every registry entry must be unique and able to answer a balance probe;
/// an entry that cannot be queried would orphan value the moment it held any
fn require_valid_providers(e: &Env, providers: &Vec<Address>) {
    let vault = e.current_contract_address();
    for i in 0..providers.len() {
        let provider = providers.get_unchecked(i);
        for j in (i + 1)..providers.len() {
            if providers.get_unchecked(j) == provider {
                panic_with_error!(e, VaultError::DuplicateOrInvalidProvider);
            }
        }
        match ProviderClient::new(e, &provider).try_deposit_balance(&vault, &vault) {
            Ok(Ok(_)) => (),
            _ => panic_with_error!(e, VaultError::DuplicateOrInvalidProvider),
        }
    }
}

fn require_valid_config(e: &Env, config: &VaultConfig) {
    if config.fee_rate < 0 || config.fee_rate >= SCALAR_7 {
        panic_with_error!(e, VaultError::InvalidConfig);
    }
    if config.user_cap <= 0 || config.vault_cap <= 0 {
        panic_with_error!(e, VaultError::InvalidConfig);
    }
}

fn require_valid_policy(e: &Env, policy: &DepositPolicy, providers: &Vec<Address>) {
    if let DepositPolicy::Designated(index) = policy {
        if *index >= providers.len() {
            panic_with_error!(e, VaultError::InvalidConfig);
        }
    }
}
