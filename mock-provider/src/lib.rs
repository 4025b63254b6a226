#![no_std]

//! Configurable in-memory yield backend for vault tests.
//!
//! Implements the provider capability protocol against a token balance the
//! contract itself holds: the vault pushes the base asset here before
//! calling `deposit`, and `withdraw` transfers it back. Test knobs simulate
//! yield accrual, principal loss, a lossy entry (deposit haircut), rejected
//! deposits, and query outages.

use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{
    contract, contractimpl, contracttype, panic_with_error, token::TokenClient,
    unwrap::UnwrapOptimized, Address, Env, Error, String, Symbol,
};

const SCALAR_7: i128 = 10_000_000;

const TOKEN_KEY: &str = "Token";
const IDENT_KEY: &str = "Ident";
const RATE_KEY: &str = "Rate";
const HAIRCUT_KEY: &str = "Haircut";
const REJECT_KEY: &str = "Reject";
const FAIL_QUERIES_KEY: &str = "FailQry";

#[derive(Clone)]
#[contracttype]
pub enum MockProviderDataKey {
    // A map of vault address to the value held on its behalf
    Deposits(Address),
}

fn get_deposits(e: &Env, vault: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&MockProviderDataKey::Deposits(vault.clone()))
        .unwrap_or(0)
}

fn set_deposits(e: &Env, vault: &Address, amount: i128) {
    e.storage()
        .persistent()
        .set(&MockProviderDataKey::Deposits(vault.clone()), &amount);
}

fn fail_queries(e: &Env) -> bool {
    e.storage()
        .instance()
        .get(&Symbol::new(e, FAIL_QUERIES_KEY))
        .unwrap_or(false)
}

#[contract]
pub struct MockProvider;

#[contractimpl]
impl MockProvider {
    /// ### Arguments
    /// * `token` - The base asset this backend accepts
    /// * `identifier` - The diagnostic tag reported to callers
    /// * `rate` - The deposit rate to report, as a SCALAR_27 fraction
    pub fn __constructor(e: Env, token: Address, identifier: String, rate: i128) {
        e.storage().instance().set(&Symbol::new(&e, TOKEN_KEY), &token);
        e.storage()
            .instance()
            .set(&Symbol::new(&e, IDENT_KEY), &identifier);
        e.storage().instance().set(&Symbol::new(&e, RATE_KEY), &rate);
    }

    /********** Provider capability protocol **********/

    pub fn identifier(e: Env) -> String {
        e.storage()
            .instance()
            .get(&Symbol::new(&e, IDENT_KEY))
            .unwrap_optimized()
    }

    /// A mock wraps exactly one market: itself
    pub fn resolve_source(e: Env, _key_a: Symbol, _key_b: Symbol, _key_c: Symbol) -> Address {
        e.current_contract_address()
    }

    /// Commit a pushed deposit. A configured entry haircut is skimmed off
    /// the recorded balance to simulate a lossy market entry.
    pub fn deposit(e: Env, amount: i128, vault: Address) -> bool {
        if amount <= 0 {
            return false;
        }
        let reject: bool = e
            .storage()
            .instance()
            .get(&Symbol::new(&e, REJECT_KEY))
            .unwrap_or(false);
        if reject {
            return false;
        }
        let haircut_rate: i128 = e
            .storage()
            .instance()
            .get(&Symbol::new(&e, HAIRCUT_KEY))
            .unwrap_or(0);
        let haircut = amount.fixed_mul_floor(&e, &haircut_rate, &SCALAR_7);
        set_deposits(&e, &vault, get_deposits(&e, &vault) + amount - haircut);
        true
    }

    pub fn withdraw(e: Env, amount: i128, vault: Address) -> bool {
        if amount <= 0 {
            return false;
        }
        let held = get_deposits(&e, &vault);
        if amount > held {
            return false;
        }
        set_deposits(&e, &vault, held - amount);
        let token: Address = e
            .storage()
            .instance()
            .get(&Symbol::new(&e, TOKEN_KEY))
            .unwrap_optimized();
        TokenClient::new(&e, &token).transfer(&e.current_contract_address(), &vault, &amount);
        true
    }

    pub fn deposit_rate(e: Env, _vault: Address) -> i128 {
        if fail_queries(&e) {
            panic_with_error!(&e, Error::from_contract_error(1));
        }
        e.storage()
            .instance()
            .get(&Symbol::new(&e, RATE_KEY))
            .unwrap_optimized()
    }

    pub fn deposit_balance(e: Env, _account: Address, vault: Address) -> i128 {
        if fail_queries(&e) {
            panic_with_error!(&e, Error::from_contract_error(1));
        }
        get_deposits(&e, &vault)
    }

    /********** Test knobs **********/

    pub fn set_rate(e: Env, rate: i128) {
        e.storage().instance().set(&Symbol::new(&e, RATE_KEY), &rate);
    }

    /// Skim this SCALAR_7 fraction off every future deposit's recorded value
    pub fn set_entry_haircut(e: Env, haircut_rate: i128) {
        e.storage()
            .instance()
            .set(&Symbol::new(&e, HAIRCUT_KEY), &haircut_rate);
    }

    /// Make every future deposit report failure
    pub fn set_reject_deposits(e: Env, reject: bool) {
        e.storage()
            .instance()
            .set(&Symbol::new(&e, REJECT_KEY), &reject);
    }

    /// Make balance and rate queries error, simulating an unreachable market
    pub fn set_fail_queries(e: Env, fail: bool) {
        e.storage()
            .instance()
            .set(&Symbol::new(&e, FAIL_QUERIES_KEY), &fail);
    }

    /// Mark `amount` of value held for `vault` as gone, simulating principal
    /// loss in the wrapped market
    pub fn simulate_loss(e: Env, vault: Address, amount: i128) {
        let held = get_deposits(&e, &vault);
        set_deposits(&e, &vault, held - amount);
    }

    /// Credit `amount` of value to `vault`, simulating yield accrual. The
    /// matching tokens must be transferred to this contract by the caller
    /// for later withdrawals to succeed.
    pub fn simulate_yield(e: Env, vault: Address, amount: i128) {
        let held = get_deposits(&e, &vault);
        set_deposits(&e, &vault, held + amount);
    }
}
