use soroban_sdk::{
    contracttype, unwrap::UnwrapOptimized, Address, Env, IntoVal, Symbol, TryFromVal, Val,
    Vec as SorobanVec,
};

use crate::types::VaultConfig;

/********** Ledger Thresholds **********/

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days
const LEDGER_THRESHOLD_SHARED: u32 = ONE_DAY_LEDGERS * 45; // ~ 45 days
const LEDGER_BUMP_SHARED: u32 = LEDGER_THRESHOLD_SHARED + ONE_DAY_LEDGERS; // ~ 46 days
const LEDGER_THRESHOLD_USER: u32 = ONE_DAY_LEDGERS * 100; // ~ 100 days
const LEDGER_BUMP_USER: u32 = LEDGER_THRESHOLD_USER + 20 * ONE_DAY_LEDGERS; // ~ 120 days

/********** Storage Types **********/

const ADMIN_KEY: &str = "Admin";
const PROPOSED_ADMIN_KEY: &str = "PropAdmin";
const TOKEN_KEY: &str = "Token";
const CONFIG_KEY: &str = "Config";
const PROVIDERS_KEY: &str = "Providers";
const TOTAL_UNITS_KEY: &str = "TotalUnits";
const PAUSED_KEY: &str = "Paused";

#[derive(Clone)]
#[contracttype]
pub enum VaultDataKey {
    // A map of account to issued claim units
    UserUnits(Address),
    // A map of address to rebalance allow-list membership
    Executor(Address),
}

/********** Storage **********/

/// Bump the instance rent for the contract
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

/// Fetch an entry in persistent storage that has a default value if it doesn't exist
fn get_persistent_default<K: IntoVal<Env, Val>, V: TryFromVal<Env, Val>, F: FnOnce() -> V>(
    e: &Env,
    key: &K,
    default: F,
    bump_threshold: u32,
    bump_amount: u32,
) -> V {
    if let Some(result) = e.storage().persistent().get::<K, V>(key) {
        e.storage()
            .persistent()
            .extend_ttl(key, bump_threshold, bump_amount);
        result
    } else {
        default()
    }
}

/********** Admin **********/

/// Fetch the current admin Address
///
/// ### Panics
/// If the admin does not exist
pub fn get_admin(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&Symbol::new(e, ADMIN_KEY))
        .unwrap_optimized()
}

/// Set a new admin
///
/// ### Arguments
/// * `new_admin` - The Address for the admin
pub fn set_admin(e: &Env, new_admin: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, ADMIN_KEY), new_admin);
}

/// Fetch the current proposed admin Address
pub fn get_proposed_admin(e: &Env) -> Option<Address> {
    e.storage()
        .temporary()
        .get(&Symbol::new(e, PROPOSED_ADMIN_KEY))
}

/// Set a new proposed admin
///
/// ### Arguments
/// * `proposed_admin` - The Address for the proposed admin
pub fn set_proposed_admin(e: &Env, proposed_admin: &Address) {
    e.storage()
        .temporary()
        .set::<Symbol, Address>(&Symbol::new(e, PROPOSED_ADMIN_KEY), proposed_admin);
    e.storage().temporary().extend_ttl(
        &Symbol::new(e, PROPOSED_ADMIN_KEY),
        10 * ONE_DAY_LEDGERS,
        10 * ONE_DAY_LEDGERS,
    );
}

/********** Token **********/

/// Fetch the base asset token address
///
/// ### Panics
/// If the token address is not set
pub fn get_token(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&Symbol::new(e, TOKEN_KEY))
        .unwrap_optimized()
}

/// Set the base asset token address (set once during initialization)
///
/// ### Arguments
/// * `token` - The Address of the token contract
pub fn set_token(e: &Env, token: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, TOKEN_KEY), token);
}

/// Check if the vault has been initialized
pub fn has_token(e: &Env) -> bool {
    e.storage().instance().has(&Symbol::new(e, TOKEN_KEY))
}

/********** Vault Config **********/

/// Fetch the vault configuration
///
/// ### Panics
/// If the vault config is not set
pub fn get_config(e: &Env) -> VaultConfig {
    e.storage()
        .instance()
        .get(&Symbol::new(e, CONFIG_KEY))
        .unwrap_optimized()
}

/// Set the vault configuration
///
/// ### Arguments
/// * `config` - The vault configuration
pub fn set_config(e: &Env, config: &VaultConfig) {
    e.storage()
        .instance()
        .set::<Symbol, VaultConfig>(&Symbol::new(e, CONFIG_KEY), config);
}

/********** Provider Registry **********/

/// Fetch the ordered list of active providers
pub fn get_providers(e: &Env) -> SorobanVec<Address> {
    e.storage()
        .instance()
        .get(&Symbol::new(e, PROVIDERS_KEY))
        .unwrap_optimized()
}

/// Replace the ordered list of active providers
///
/// ### Arguments
/// * `providers` - The new provider list, oldest-registered first
pub fn set_providers(e: &Env, providers: &SorobanVec<Address>) {
    e.storage()
        .instance()
        .set::<Symbol, SorobanVec<Address>>(&Symbol::new(e, PROVIDERS_KEY), providers);
}

/********** Total Units **********/

/// Fetch the total issued claim units
pub fn get_total_units(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&Symbol::new(e, TOTAL_UNITS_KEY))
        .unwrap_optimized()
}

/// Set the total issued claim units
///
/// ### Arguments
/// * `total_units` - The new total
pub fn set_total_units(e: &Env, total_units: &i128) {
    e.storage()
        .instance()
        .set::<Symbol, i128>(&Symbol::new(e, TOTAL_UNITS_KEY), total_units);
}

/********** Pause Flag **********/

/// Fetch the pause flag
pub fn get_paused(e: &Env) -> bool {
    e.storage()
        .instance()
        .get(&Symbol::new(e, PAUSED_KEY))
        .unwrap_optimized()
}

/// Set the pause flag
///
/// ### Arguments
/// * `paused` - Whether deposits and withdrawals are halted
pub fn set_paused(e: &Env, paused: bool) {
    e.storage()
        .instance()
        .set::<Symbol, bool>(&Symbol::new(e, PAUSED_KEY), &paused);
}

/********** User Units **********/

/// Fetch an account's claim unit balance, or zero if it has never deposited
///
/// ### Arguments
/// * `user` - The address of the account
pub fn get_user_units(e: &Env, user: &Address) -> i128 {
    let key = VaultDataKey::UserUnits(user.clone());
    get_persistent_default(e, &key, || 0_i128, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER)
}

/// Set an account's claim unit balance
///
/// ### Arguments
/// * `user` - The address of the account
/// * `units` - The new unit balance
pub fn set_user_units(e: &Env, user: &Address, units: &i128) {
    let key = VaultDataKey::UserUnits(user.clone());
    e.storage()
        .persistent()
        .set::<VaultDataKey, i128>(&key, units);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
}

/********** Executor Allow-list **********/

/// Check an address against the rebalance executor allow-list
///
/// ### Arguments
/// * `executor` - The address to check
pub fn get_executor(e: &Env, executor: &Address) -> bool {
    let key = VaultDataKey::Executor(executor.clone());
    get_persistent_default(
        e,
        &key,
        || false,
        LEDGER_THRESHOLD_SHARED,
        LEDGER_BUMP_SHARED,
    )
}

/// Set an address's rebalance executor allow-list membership
///
/// ### Arguments
/// * `executor` - The address to update
/// * `allowed` - Whether the address may trigger rebalances
pub fn set_executor(e: &Env, executor: &Address, allowed: bool) {
    let key = VaultDataKey::Executor(executor.clone());
    e.storage()
        .persistent()
        .set::<VaultDataKey, bool>(&key, &allowed);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}
