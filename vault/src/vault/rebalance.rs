use soroban_sdk::{panic_with_error, Address, Env};

use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::storage;
use crate::vault::{providers, shares};

/// Move `amount` of value from `source` to `destination`, both active
/// providers, without touching unit totals or account balances.
///
/// `min_accepted` is the lowest post-rebalance total asset value the
/// executor will accept; it bounds how much value a lossy destination is
/// allowed to burn before the whole operation reverts. Passing the
/// pre-rebalance total demands a lossless move.
///
/// ### Panics
/// * `Unauthorized` - If `executor` is not on the allow-list
/// * `ZeroAmount` - If `amount` is not positive
/// * `InvalidConfig` - If `source` equals `destination`
/// * `ProviderNotActive` - If either endpoint is not in the registry
/// * `InsufficientBalance` - If `source` holds less than `amount`
/// * `SlippageExceeded` - If total assets after the move fall below
///   `min_accepted`
pub fn execute_rebalance(
    e: &Env,
    executor: &Address,
    source: &Address,
    destination: &Address,
    amount: i128,
    min_accepted: i128,
) {
    if !storage::get_executor(e, executor) {
        panic_with_error!(e, VaultError::Unauthorized);
    }
    if amount <= 0 {
        panic_with_error!(e, VaultError::ZeroAmount);
    }
    if source == destination {
        panic_with_error!(e, VaultError::InvalidConfig);
    }
    let provider_list = storage::get_providers(e);
    if !provider_list.contains(source) {
        panic_with_error!(e, VaultError::ProviderNotActive);
    }
    if !provider_list.contains(destination) {
        panic_with_error!(e, VaultError::ProviderNotActive);
    }

    let before = shares::total_assets(e);
    let source_balance = providers::provider_balance(e, source);
    if amount > source_balance {
        panic_with_error!(e, VaultError::InsufficientBalance);
    }

    providers::pull_from_provider(e, source, amount);
    let token = storage::get_token(e);
    providers::push_to_provider(e, &token, destination, amount);

    // Revalue the whole vault to catch a destination that burned value
    let after = shares::total_assets(e);
    if after < min_accepted {
        panic_with_error!(e, VaultError::SlippageExceeded);
    }

    VaultEvents::rebalance(
        e,
        executor.clone(),
        source.clone(),
        destination.clone(),
        amount,
        before,
        after,
    );
}
