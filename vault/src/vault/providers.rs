use soroban_sdk::{panic_with_error, token::TokenClient, Address, Env, Vec};

use crate::dependencies::ProviderClient;
use crate::errors::VaultError;
use crate::types::DepositPolicy;

/// Fetch the value a provider currently holds for this vault
///
/// ### Panics
/// With `ProviderQueryFailed` if the provider cannot report a balance. An
/// unreachable provider is a fault, never a zero balance.
pub fn provider_balance(e: &Env, provider: &Address) -> i128 {
    let vault = e.current_contract_address();
    match ProviderClient::new(e, provider).try_deposit_balance(&vault, &vault) {
        Ok(Ok(balance)) => balance,
        _ => panic_with_error!(e, VaultError::ProviderQueryFailed),
    }
}

/// Fetch a provider's current deposit rate (SCALAR_27 fraction)
pub fn provider_rate(e: &Env, provider: &Address) -> i128 {
    match ProviderClient::new(e, provider).try_deposit_rate(&e.current_contract_address()) {
        Ok(Ok(rate)) => rate,
        _ => panic_with_error!(e, VaultError::ProviderQueryFailed),
    }
}

/// Resolve the provider that receives inbound principal under `policy`
///
/// ### Panics
/// With `ProviderNotActive` if the policy cannot resolve to an active
/// provider (empty registry, or a designated index past the end)
pub fn deposit_target(e: &Env, providers: &Vec<Address>, policy: &DepositPolicy) -> Address {
    match policy {
        DepositPolicy::Designated(index) => match providers.get(*index) {
            Some(provider) => provider,
            None => panic_with_error!(e, VaultError::ProviderNotActive),
        },
        DepositPolicy::BestRate => {
            let mut target: Option<Address> = None;
            let mut best_rate = 0_i128;
            for provider in providers.iter() {
                let rate = provider_rate(e, &provider);
                // strict comparison keeps the earliest provider on ties
                if target.is_none() || rate > best_rate {
                    target = Some(provider);
                    best_rate = rate;
                }
            }
            match target {
                Some(provider) => provider,
                None => panic_with_error!(e, VaultError::ProviderNotActive),
            }
        }
    }
}

/// Push `amount` of the base asset from the vault to `provider` and commit
/// it to the underlying market
///
/// ### Panics
/// With `ProviderOperationFailed` if the provider rejects or errors on the
/// deposit. The push transfer is rolled back with the rest of the operation.
pub fn push_to_provider(e: &Env, token: &Address, provider: &Address, amount: i128) {
    TokenClient::new(e, token).transfer(&e.current_contract_address(), provider, &amount);
    match ProviderClient::new(e, provider).try_deposit(&amount, &e.current_contract_address()) {
        Ok(Ok(true)) => (),
        _ => panic_with_error!(e, VaultError::ProviderOperationFailed),
    }
}

/// Pull `amount` of the base asset out of `provider` back into the vault
///
/// ### Panics
/// With `ProviderOperationFailed` if the provider rejects or errors on the
/// withdrawal
pub fn pull_from_provider(e: &Env, provider: &Address, amount: i128) {
    match ProviderClient::new(e, provider).try_withdraw(&amount, &e.current_contract_address()) {
        Ok(Ok(true)) => (),
        _ => panic_with_error!(e, VaultError::ProviderOperationFailed),
    }
}
