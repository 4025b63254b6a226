use soroban_sdk::{contractclient, Address, Env, String, Symbol};

/// Provider capability protocol. Every yield backend the vault allocates
/// into sits behind this interface as a thin adapter contract.
///
/// Valuation is always delegated: the vault never caches a provider-side
/// balance, it queries `deposit_balance` on demand.
#[contractclient(name = "ProviderClient")]
pub trait Provider {
    /// Short identifier for the wrapped market, used as a diagnostic tag
    fn identifier(e: Env) -> String;

    /// Resolves which underlying market instance backs the given key set
    fn resolve_source(e: Env, key_a: Symbol, key_b: Symbol, key_c: Symbol) -> Address;

    /// Commits `amount` of the base asset, already pushed to the adapter by
    /// `vault`, into the external market. Returns false if the market
    /// rejected the deposit.
    fn deposit(e: Env, amount: i128, vault: Address) -> bool;

    /// Returns `amount` of the base asset from the external market to
    /// `vault`. Returns false if the market rejected the withdrawal.
    fn withdraw(e: Env, amount: i128, vault: Address) -> bool;

    /// Current deposit rate of the wrapped market as a SCALAR_27 fraction
    /// (1e27 = 100%)
    fn deposit_rate(e: Env, vault: Address) -> i128;

    /// Current value owed to `account` by this provider on behalf of `vault`
    fn deposit_balance(e: Env, account: Address, vault: Address) -> i128;
}
