use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{panic_with_error, token::TokenClient, Address, Env};

use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::storage;
use crate::vault::providers;

/// Total valued assets: the sum of every active provider's reported balance
/// for this vault. Zero when the registry is empty.
pub fn total_assets(e: &Env) -> i128 {
    let provider_list = storage::get_providers(e);
    let mut total = 0_i128;
    for provider in provider_list.iter() {
        total += providers::provider_balance(e, &provider);
    }
    total
}

/// Claim units issued for a deposit of `amount`, rounded down so the
/// remainder accrues to existing holders. The bootstrap branch (zero total
/// units) mints 1:1 and is reachable only through `seed_shares`.
pub fn to_units_floor(e: &Env, amount: i128, total_units: i128, total_assets: i128) -> i128 {
    if total_units == 0 {
        return amount;
    }
    amount.fixed_mul_floor(e, &total_units, &total_assets)
}

/// Claim units burned for a withdrawal of `amount`, rounded up against the
/// withdrawer
pub fn to_units_ceil(e: &Env, amount: i128, total_units: i128, total_assets: i128) -> i128 {
    amount.fixed_mul_ceil(e, &total_units, &total_assets)
}

/// Asset value redeemable for `units`, rounded down
pub fn to_assets_floor(e: &Env, units: i128, total_units: i128, total_assets: i128) -> i128 {
    if total_units == 0 {
        return 0;
    }
    units.fixed_mul_floor(e, &total_assets, &total_units)
}

/// Seed the vault with its initial claim unit position, minted 1:1 to the
/// admin. The seed is meant to be small and economically insignificant; its
/// only job is to pin the exchange rate before public deposits open, so a
/// first depositor cannot manipulate the rate.
///
/// ### Panics
/// * `ZeroAmount` - If `amount` is not positive
/// * `AlreadyInitialized` - If any units have already been issued
pub fn execute_seed_shares(e: &Env, admin: &Address, amount: i128) -> i128 {
    if amount <= 0 {
        panic_with_error!(e, VaultError::ZeroAmount);
    }
    if storage::get_total_units(e) != 0 {
        panic_with_error!(e, VaultError::AlreadyInitialized);
    }

    // Unit ledger updates land before any external transfer
    storage::set_user_units(e, admin, &amount);
    storage::set_total_units(e, &amount);

    let token = storage::get_token(e);
    TokenClient::new(e, &token).transfer(admin, &e.current_contract_address(), &amount);

    let provider_list = storage::get_providers(e);
    let config = storage::get_config(e);
    let target = providers::deposit_target(e, &provider_list, &config.deposit_policy);
    providers::push_to_provider(e, &token, &target, amount);

    VaultEvents::seed_shares(e, admin.clone(), amount);
    amount
}
