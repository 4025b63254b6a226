use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{panic_with_error, token::TokenClient, Address, Env};

use crate::constants::SCALAR_7;
use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::storage;
use crate::vault::{providers, shares};

/// Deposit `amount` of the base asset for `from` and issue claim units at
/// the current exchange rate. The asset is routed to the provider selected
/// by the configured deposit policy.
///
/// Returns the amount of units issued.
///
/// ### Panics
/// * `ZeroAmount` - If `amount` is not positive, or rounds to zero units
/// * `Paused` - If the vault is paused
/// * `NotInitialized` - If the vault has not been seeded
/// * `CapExceeded` - If the account or vault-wide cap would be breached
pub fn execute_deposit(e: &Env, from: &Address, amount: i128) -> i128 {
    if amount <= 0 {
        panic_with_error!(e, VaultError::ZeroAmount);
    }
    if storage::get_paused(e) {
        panic_with_error!(e, VaultError::Paused);
    }
    let total_units = storage::get_total_units(e);
    if total_units == 0 {
        // bootstrap pricing is reserved for seed_shares
        panic_with_error!(e, VaultError::NotInitialized);
    }

    let config = storage::get_config(e);
    let total_assets = shares::total_assets(e);
    if amount > config.vault_cap - total_assets {
        panic_with_error!(e, VaultError::CapExceeded);
    }

    let user_units = storage::get_user_units(e, from);
    let redeemable = shares::to_assets_floor(e, user_units, total_units, total_assets);
    if amount > config.user_cap - redeemable {
        panic_with_error!(e, VaultError::CapExceeded);
    }

    let units = shares::to_units_floor(e, amount, total_units, total_assets);
    if units <= 0 {
        // dust that rounds to no units would be donated to existing holders
        panic_with_error!(e, VaultError::ZeroAmount);
    }

    // Unit ledger updates land before any external transfer, so a backend
    // re-entering the vault observes post-deposit accounting
    storage::set_user_units(e, from, &(user_units + units));
    storage::set_total_units(e, &(total_units + units));

    let token = storage::get_token(e);
    TokenClient::new(e, &token).transfer(from, &e.current_contract_address(), &amount);

    let provider_list = storage::get_providers(e);
    let target = providers::deposit_target(e, &provider_list, &config.deposit_policy);
    providers::push_to_provider(e, &token, &target, amount);

    VaultEvents::deposit(e, from.clone(), amount, units);
    units
}

/// Withdraw `amount` of the base asset for `from`, burning claim units at
/// the current exchange rate (rounded against the withdrawer) and sweeping
/// providers oldest-registered-first for liquidity. The configured fee is
/// retained from the gross amount and routed to the fee sink.
///
/// Returns the net amount transferred to `from`.
///
/// ### Panics
/// * `ZeroAmount` - If `amount` is not positive
/// * `Paused` - If the vault is paused
/// * `InsufficientBalance` - If `amount` exceeds the account's redeemable
///   value, or the aggregate provider liquidity cannot cover it (the
///   latter signals a provider/accounting desync)
pub fn execute_withdraw(e: &Env, from: &Address, amount: i128) -> i128 {
    if amount <= 0 {
        panic_with_error!(e, VaultError::ZeroAmount);
    }
    if storage::get_paused(e) {
        panic_with_error!(e, VaultError::Paused);
    }

    let total_units = storage::get_total_units(e);
    let total_assets = shares::total_assets(e);
    let user_units = storage::get_user_units(e, from);

    let redeemable = shares::to_assets_floor(e, user_units, total_units, total_assets);
    if amount > redeemable {
        panic_with_error!(e, VaultError::InsufficientBalance);
    }

    let units = shares::to_units_ceil(e, amount, total_units, total_assets);

    // Burn before touching any provider or token balance
    storage::set_user_units(e, from, &(user_units - units));
    storage::set_total_units(e, &(total_units - units));

    // Sweep providers in registry order until the gross amount is covered
    let provider_list = storage::get_providers(e);
    let mut remaining = amount;
    for provider in provider_list.iter() {
        if remaining == 0 {
            break;
        }
        let available = providers::provider_balance(e, &provider);
        if available <= 0 {
            continue;
        }
        let take = remaining.min(available);
        providers::pull_from_provider(e, &provider, take);
        remaining -= take;
    }
    if remaining > 0 {
        // total_assets said the value exists - a provider is out of sync
        panic_with_error!(e, VaultError::InsufficientBalance);
    }

    let config = storage::get_config(e);
    let fee = amount.fixed_mul_floor(e, &config.fee_rate, &SCALAR_7);
    let net = amount - fee;

    let token_client = TokenClient::new(e, &storage::get_token(e));
    if fee > 0 {
        token_client.transfer(&e.current_contract_address(), &config.fee_sink, &fee);
    }
    token_client.transfer(&e.current_contract_address(), from, &net);

    VaultEvents::withdraw(e, from.clone(), amount, fee, net, units);
    net
}

/// The gross amount `account` can withdraw right now: its redeemable value
/// bounded by the liquidity actually available across providers
pub fn max_withdraw(e: &Env, account: &Address) -> i128 {
    let total_units = storage::get_total_units(e);
    if total_units == 0 {
        return 0;
    }

    let provider_list = storage::get_providers(e);
    let mut available = 0_i128;
    for provider in provider_list.iter() {
        available += providers::provider_balance(e, &provider);
    }

    let user_units = storage::get_user_units(e, account);
    let redeemable = shares::to_assets_floor(e, user_units, total_units, available);
    redeemable.min(available)
}
