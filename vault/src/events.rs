use soroban_sdk::{Address, BytesN, Env, Symbol, Vec};

use crate::types::DepositPolicy;

pub struct VaultEvents {}

impl VaultEvents {
    /// Emitted when the base asset is deposited into the vault
    ///
    /// - topics - `["deposit", from: Address]`
    /// - data - `[amount: i128, units: i128]`
    ///
    /// ### Arguments
    /// * from - The depositing account
    /// * amount - The amount of the base asset deposited
    /// * units - The amount of claim units issued
    pub fn deposit(e: &Env, from: Address, amount: i128, units: i128) {
        let topics = (Symbol::new(e, "deposit"), from);
        e.events().publish(topics, (amount, units));
    }

    /// Emitted when the base asset is withdrawn from the vault
    ///
    /// - topics - `["withdraw", from: Address]`
    /// - data - `[amount: i128, fee: i128, net: i128, units: i128]`
    ///
    /// ### Arguments
    /// * from - The withdrawing account
    /// * amount - The gross amount redeemed
    /// * fee - The withdrawal fee retained
    /// * net - The amount transferred to the account
    /// * units - The amount of claim units burned
    pub fn withdraw(e: &Env, from: Address, amount: i128, fee: i128, net: i128, units: i128) {
        let topics = (Symbol::new(e, "withdraw"), from);
        e.events().publish(topics, (amount, fee, net, units));
    }

    /// Emitted when value is moved between two active providers
    ///
    /// - topics - `["rebalance", executor: Address]`
    /// - data - `[source: Address, destination: Address, amount: i128, before: i128, after: i128]`
    ///
    /// ### Arguments
    /// * executor - The allow-listed address that triggered the rebalance
    /// * source - The provider value was withdrawn from
    /// * destination - The provider value was deposited into
    /// * amount - The amount moved
    /// * before - Total assets before the rebalance
    /// * after - Total assets after the rebalance
    pub fn rebalance(
        e: &Env,
        executor: Address,
        source: Address,
        destination: Address,
        amount: i128,
        before: i128,
        after: i128,
    ) {
        let topics = (Symbol::new(e, "rebalance"), executor);
        e.events()
            .publish(topics, (source, destination, amount, before, after));
    }

    /// Emitted when the initial claim unit position is seeded
    ///
    /// - topics - `["seed_shares", admin: Address]`
    /// - data - `[amount: i128]`
    pub fn seed_shares(e: &Env, admin: Address, amount: i128) {
        let topics = (Symbol::new(e, "seed_shares"), admin);
        e.events().publish(topics, (amount,));
    }

    /// Emitted when the provider registry is replaced
    ///
    /// - topics - `["set_providers"]`
    /// - data - `providers: Vec<Address>`
    ///
    /// ### Arguments
    /// * providers - The new provider list, oldest-registered first
    pub fn set_providers(e: &Env, providers: Vec<Address>) {
        let topics = (Symbol::new(e, "set_providers"),);
        e.events().publish(topics, providers);
    }

    /// Emitted when an address's executor allow-list membership changes
    ///
    /// - topics - `["set_executor", executor: Address]`
    /// - data - `allowed: bool`
    pub fn set_executor(e: &Env, executor: Address, allowed: bool) {
        let topics = (Symbol::new(e, "set_executor"), executor);
        e.events().publish(topics, allowed);
    }

    /// Emitted when deposits and withdrawals are halted
    ///
    /// - topics - `["paused"]`
    /// - data - `()`
    pub fn paused(e: &Env) {
        let topics = (Symbol::new(e, "paused"),);
        e.events().publish(topics, ());
    }

    /// Emitted when deposits and withdrawals are resumed
    ///
    /// - topics - `["unpaused"]`
    /// - data - `()`
    pub fn unpaused(e: &Env) {
        let topics = (Symbol::new(e, "unpaused"),);
        e.events().publish(topics, ());
    }

    /// Emitted when the deposit caps are updated
    ///
    /// - topics - `["set_caps"]`
    /// - data - `[user_cap: i128, vault_cap: i128]`
    pub fn set_caps(e: &Env, user_cap: i128, vault_cap: i128) {
        let topics = (Symbol::new(e, "set_caps"),);
        e.events().publish(topics, (user_cap, vault_cap));
    }

    /// Emitted when the withdrawal fee configuration is updated
    ///
    /// - topics - `["set_fee"]`
    /// - data - `[fee_rate: i128, fee_sink: Address]`
    pub fn set_fee(e: &Env, fee_rate: i128, fee_sink: Address) {
        let topics = (Symbol::new(e, "set_fee"),);
        e.events().publish(topics, (fee_rate, fee_sink));
    }

    /// Emitted when the deposit routing policy is updated
    ///
    /// - topics - `["set_policy"]`
    /// - data - `policy: DepositPolicy`
    pub fn set_deposit_policy(e: &Env, policy: DepositPolicy) {
        let topics = (Symbol::new(e, "set_policy"),);
        e.events().publish(topics, policy);
    }

    /// Emitted when a new admin is proposed
    ///
    /// - topics - `["propose_admin"]`
    /// - data - `[admin: Address, new_admin: Address]`
    pub fn propose_admin(e: &Env, admin: Address, new_admin: Address) {
        let topics = (Symbol::new(e, "propose_admin"),);
        e.events().publish(topics, (admin, new_admin));
    }

    /// Emitted when a proposed admin accepts the role
    ///
    /// - topics - `["accept_admin"]`
    /// - data - `[new_admin: Address]`
    pub fn accept_admin(e: &Env, new_admin: Address) {
        let topics = (Symbol::new(e, "accept_admin"),);
        e.events().publish(topics, (new_admin,));
    }

    /// Emitted when the contract WASM is upgraded
    ///
    /// - topics - `["upgrade_wasm"]`
    /// - data - `[admin: Address, wasm_hash: BytesN<32>]`
    pub fn upgrade_wasm(e: &Env, admin: Address, wasm_hash: BytesN<32>) {
        let topics = (Symbol::new(e, "upgrade_wasm"),);
        e.events().publish(topics, (admin, wasm_hash));
    }
}
