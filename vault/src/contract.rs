use soroban_sdk::{
    contract, contractclient, contractimpl, unwrap::UnwrapOptimized, Address, BytesN, Env, Vec,
};

use crate::events::VaultEvents;
use crate::types::{DepositPolicy, VaultConfig};
use crate::{storage, vault};

#[contract]
pub struct VaultContract;

#[contractclient(name = "VaultClient")]
pub trait Vault {
    /// Returns the address of the base asset managed by this vault
    ///
    /// This is the token that users deposit and that providers hold on the
    /// vault's behalf. Claim unit value is denominated in this token.
    fn token(e: Env) -> Address;

    /// Returns the total number of claim units in circulation
    ///
    /// Used together with `total_assets` to derive the exchange rate.
    fn total_units(e: Env) -> i128;

    /// Returns the total valued assets: the sum of every active provider's
    /// reported balance for this vault
    ///
    /// ### Panics
    /// - `ProviderQueryFailed` if an active provider cannot report a balance
    fn total_assets(e: Env) -> i128;

    /// Returns the claim unit balance of an account
    ///
    /// ### Arguments
    /// * `account` - The account to look up
    fn balance(e: Env, account: Address) -> i128;

    /// Converts a unit amount to its current redeemable asset value,
    /// rounded down
    ///
    /// ### Arguments
    /// * `units` - The amount of claim units
    fn convert_to_assets(e: Env, units: i128) -> i128;

    /// Converts an asset amount to the claim units it would mint at the
    /// current exchange rate, rounded down
    ///
    /// ### Arguments
    /// * `amount` - The amount of the base asset
    fn convert_to_shares(e: Env, amount: i128) -> i128;

    /// Returns the gross amount an account can withdraw right now: its
    /// redeemable value bounded by the liquidity available across providers
    ///
    /// ### Arguments
    /// * `account` - The account to look up
    fn max_withdraw(e: Env, account: Address) -> i128;

    /// Returns the ordered list of active providers, oldest-registered first
    fn get_providers(e: Env) -> Vec<Address>;

    /// Returns the current vault configuration (caps, fee, deposit policy)
    fn get_config(e: Env) -> VaultConfig;

    /// Checks an address against the rebalance executor allow-list
    ///
    /// ### Arguments
    /// * `executor` - The address to check
    fn is_executor(e: Env, executor: Address) -> bool;

    /// Returns whether deposits and withdrawals are currently halted
    fn is_paused(e: Env) -> bool;

    /// Deposits the base asset and issues claim units at the current
    /// exchange rate, rounded down in favor of existing holders. The asset
    /// is routed to the provider selected by the configured deposit policy.
    ///
    /// ### Arguments
    /// * `from` - The depositing account (must authorize)
    /// * `amount` - The amount of the base asset to deposit (must be > 0)
    ///
    /// ### Returns
    /// The amount of claim units issued
    ///
    /// ### Panics
    /// - `ZeroAmount` if `amount` is not positive or rounds to zero units
    /// - `Paused` if the vault is paused
    /// - `NotInitialized` if the vault has not been seeded
    /// - `CapExceeded` if an account or vault-wide cap would be breached
    fn deposit(e: Env, from: Address, amount: i128) -> i128;

    /// Withdraws the base asset, burning claim units at the current exchange
    /// rate rounded against the withdrawer. Liquidity is swept from
    /// providers in registry order. The configured fee is retained from the
    /// gross amount and routed to the fee sink; the remainder goes to
    /// `from`.
    ///
    /// ### Arguments
    /// * `from` - The withdrawing account (must authorize)
    /// * `amount` - The gross amount of the base asset to redeem (must be > 0)
    ///
    /// ### Returns
    /// The net amount transferred to `from`
    ///
    /// ### Panics
    /// - `ZeroAmount` if `amount` is not positive
    /// - `Paused` if the vault is paused
    /// - `InsufficientBalance` if `amount` exceeds the account's redeemable
    ///   value, or aggregate provider liquidity cannot cover it
    fn withdraw(e: Env, from: Address, amount: i128) -> i128;

    /// (Executor only) Moves value from one active provider to another
    /// without changing unit totals or account balances. Total assets are
    /// revalued before and after; the operation reverts if the
    /// post-rebalance total falls below `min_accepted`.
    ///
    /// ### Arguments
    /// * `executor` - The allow-listed caller (must authorize)
    /// * `source` - The provider to withdraw from
    /// * `destination` - The provider to deposit into
    /// * `amount` - The amount of value to move (must be > 0)
    /// * `min_accepted` - The lowest acceptable post-rebalance total assets
    ///
    /// ### Panics
    /// - `Unauthorized` if `executor` is not allow-listed
    /// - `ProviderNotActive` if either endpoint is not registered
    /// - `SlippageExceeded` if the destination burned more value than the
    ///   executor tolerates
    fn rebalance(
        e: Env,
        executor: Address,
        source: Address,
        destination: Address,
        amount: i128,
        min_accepted: i128,
    );

    /// (Admin only) Set a new address to become the admin of the vault. This
    /// must be accepted by the new admin w/ `accept_admin` to take effect.
    ///
    /// ### Arguments
    /// * `new_admin` - The new admin address
    ///
    /// ### Panics
    /// If the caller is not the admin
    fn propose_admin(e: Env, new_admin: Address);

    /// (Proposed admin only) Accept the admin role. Ensures the new admin
    /// can safely submit transactions before taking over the vault.
    ///
    /// ### Panics
    /// If the caller is not the proposed admin
    fn accept_admin(e: Env);

    /// (Admin only) Replace the provider registry. Funds held by a provider
    /// removed from the list are not migrated automatically - rebalance out
    /// of a provider before removing it, or its value is orphaned.
    ///
    /// ### Arguments
    /// * `providers` - The new provider list, oldest-registered first
    ///
    /// ### Panics
    /// - `DuplicateOrInvalidProvider` if the list has duplicates or an
    ///   entry that cannot answer a balance probe
    fn set_providers(e: Env, providers: Vec<Address>);

    /// (Admin only) Update the per-account and vault-wide deposit caps
    ///
    /// ### Arguments
    /// * `user_cap` - Max redeemable value per account (i128::MAX = uncapped)
    /// * `vault_cap` - Max total assets across providers (i128::MAX = uncapped)
    fn set_caps(e: Env, user_cap: i128, vault_cap: i128);

    /// (Admin only) Update the withdrawal fee
    ///
    /// ### Arguments
    /// * `fee_rate` - Fee as a SCALAR_7 fraction of the gross amount,
    ///   below 100%
    /// * `fee_sink` - Receiver of retained fees
    fn set_fee(e: Env, fee_rate: i128, fee_sink: Address);

    /// (Admin only) Update the deposit routing policy
    ///
    /// ### Arguments
    /// * `policy` - `Designated(index)` or `BestRate`
    ///
    /// ### Panics
    /// - `InvalidConfig` if a designated index is past the registry end
    fn set_deposit_policy(e: Env, policy: DepositPolicy);

    /// (Admin only) Halt or resume deposits and withdrawals
    ///
    /// ### Arguments
    /// * `paused` - The new pause state
    fn set_paused(e: Env, paused: bool);

    /// (Admin only) Seed the vault with its initial claim unit position,
    /// minted 1:1 to the admin. Usable exactly once; the seed pins the
    /// exchange rate before public deposits open so a first depositor
    /// cannot manipulate it.
    ///
    /// ### Arguments
    /// * `amount` - The seed amount (must be > 0)
    ///
    /// ### Returns
    /// The amount of claim units issued
    ///
    /// ### Panics
    /// - `AlreadyInitialized` if any units have already been issued
    fn seed_shares(e: Env, amount: i128) -> i128;

    /// (Admin only) Grant or revoke rebalance authority for an address.
    /// Idempotent; revocation takes effect immediately.
    ///
    /// ### Arguments
    /// * `executor` - The address to update
    /// * `allowed` - Whether the address may trigger rebalances
    fn set_executor(e: Env, executor: Address, allowed: bool);

    /// (Admin only) Upgrade the contract to a new WASM binary
    ///
    /// The contract is written against a single fixed storage schema; any
    /// schema change ships inside the new binary and runs its migration at
    /// upgrade time, outside the operational paths.
    ///
    /// ### Arguments
    /// * `wasm_hash` - The hash of the new WASM binary
    ///
    /// ### Panics
    /// If the caller is not the admin
    fn upgrade_wasm(e: Env, wasm_hash: BytesN<32>);
}

#[contractimpl]
impl VaultContract {
    /// Constructor for initializing the vault when deployed
    ///
    /// ### Arguments
    /// * `admin` - The admin address
    /// * `token` - The base asset token contract
    /// * `providers` - The initial provider registry
    /// * `config` - Caps, fee, and deposit policy
    pub fn __constructor(
        e: Env,
        admin: Address,
        token: Address,
        providers: Vec<Address>,
        config: VaultConfig,
    ) {
        admin.require_auth();
        vault::execute_initialize(&e, &admin, &token, &providers, &config);
    }
}

#[contractimpl]
impl Vault for VaultContract {
    fn token(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_token(&e)
    }

    fn total_units(e: Env) -> i128 {
        storage::extend_instance(&e);
        storage::get_total_units(&e)
    }

    fn total_assets(e: Env) -> i128 {
        storage::extend_instance(&e);
        vault::total_assets(&e)
    }

    fn balance(e: Env, account: Address) -> i128 {
        storage::extend_instance(&e);
        storage::get_user_units(&e, &account)
    }

    fn convert_to_assets(e: Env, units: i128) -> i128 {
        storage::extend_instance(&e);
        let total_units = storage::get_total_units(&e);
        let total_assets = vault::total_assets(&e);
        vault::to_assets_floor(&e, units, total_units, total_assets)
    }

    fn convert_to_shares(e: Env, amount: i128) -> i128 {
        storage::extend_instance(&e);
        let total_units = storage::get_total_units(&e);
        let total_assets = vault::total_assets(&e);
        vault::to_units_floor(&e, amount, total_units, total_assets)
    }

    fn max_withdraw(e: Env, account: Address) -> i128 {
        storage::extend_instance(&e);
        vault::max_withdraw(&e, &account)
    }

    fn get_providers(e: Env) -> Vec<Address> {
        storage::extend_instance(&e);
        storage::get_providers(&e)
    }

    fn get_config(e: Env) -> VaultConfig {
        storage::extend_instance(&e);
        storage::get_config(&e)
    }

    fn is_executor(e: Env, executor: Address) -> bool {
        storage::extend_instance(&e);
        storage::get_executor(&e, &executor)
    }

    fn is_paused(e: Env) -> bool {
        storage::extend_instance(&e);
        storage::get_paused(&e)
    }

    fn deposit(e: Env, from: Address, amount: i128) -> i128 {
        storage::extend_instance(&e);
        from.require_auth();
        vault::execute_deposit(&e, &from, amount)
    }

    fn withdraw(e: Env, from: Address, amount: i128) -> i128 {
        storage::extend_instance(&e);
        from.require_auth();
        vault::execute_withdraw(&e, &from, amount)
    }

    fn rebalance(
        e: Env,
        executor: Address,
        source: Address,
        destination: Address,
        amount: i128,
        min_accepted: i128,
    ) {
        storage::extend_instance(&e);
        executor.require_auth();
        vault::execute_rebalance(&e, &executor, &source, &destination, amount, min_accepted);
    }

    fn propose_admin(e: Env, new_admin: Address) {
        storage::extend_instance(&e);
        let admin = storage::get_admin(&e);
        admin.require_auth();

        storage::set_proposed_admin(&e, &new_admin);
        VaultEvents::propose_admin(&e, admin, new_admin);
    }

    fn accept_admin(e: Env) {
        storage::extend_instance(&e);
        let proposed_admin = storage::get_proposed_admin(&e).unwrap_optimized();
        proposed_admin.require_auth();
        storage::set_admin(&e, &proposed_admin);
        VaultEvents::accept_admin(&e, proposed_admin);
    }

    fn set_providers(e: Env, providers: Vec<Address>) {
        storage::extend_instance(&e);
        let admin = storage::get_admin(&e);
        admin.require_auth();

        vault::execute_set_providers(&e, &providers);
    }

    fn set_caps(e: Env, user_cap: i128, vault_cap: i128) {
        storage::extend_instance(&e);
        let admin = storage::get_admin(&e);
        admin.require_auth();

        vault::execute_set_caps(&e, user_cap, vault_cap);
    }

    fn set_fee(e: Env, fee_rate: i128, fee_sink: Address) {
        storage::extend_instance(&e);
        let admin = storage::get_admin(&e);
        admin.require_auth();

        vault::execute_set_fee(&e, fee_rate, &fee_sink);
    }

    fn set_deposit_policy(e: Env, policy: DepositPolicy) {
        storage::extend_instance(&e);
        let admin = storage::get_admin(&e);
        admin.require_auth();

        vault::execute_set_deposit_policy(&e, &policy);
    }

    fn set_paused(e: Env, paused: bool) {
        storage::extend_instance(&e);
        let admin = storage::get_admin(&e);
        admin.require_auth();

        vault::execute_set_paused(&e, paused);
    }

    fn seed_shares(e: Env, amount: i128) -> i128 {
        storage::extend_instance(&e);
        let admin = storage::get_admin(&e);
        admin.require_auth();

        vault::execute_seed_shares(&e, &admin, amount)
    }

    fn set_executor(e: Env, executor: Address, allowed: bool) {
        storage::extend_instance(&e);
        let admin = storage::get_admin(&e);
        admin.require_auth();

        vault::execute_set_executor(&e, &executor, allowed);
    }

    fn upgrade_wasm(e: Env, wasm_hash: BytesN<32>) {
        storage::extend_instance(&e);
        let admin = storage::get_admin(&e);
        admin.require_auth();

        e.deployer().update_current_contract_wasm(wasm_hash.clone());
        VaultEvents::upgrade_wasm(&e, admin, wasm_hash);
    }
}
