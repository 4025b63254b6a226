//! Share accounting integration tests: exchange-rate behavior, inflation
//! resistance, multi-provider liquidity sweeps, and the unit conservation
//! property.

use proptest::prelude::*;
use test_suites::setup::create_fixture_with_data;
use test_suites::test_fixture::{TestFixture, SEED_AMOUNT};
use test_suites::SCALAR_7;

// ================================
// Exchange Rate
// ================================

#[test]
fn test_exchange_rate_monotonic_across_operations() {
    let fixture = TestFixture::create();

    let mut rate = fixture.unit_value();
    let flows = [
        (0usize, 1_000 * SCALAR_7, true),
        (1, 2_500 * SCALAR_7, true),
        (0, 400 * SCALAR_7, false),
        (1, 2_500 * SCALAR_7, false),
        (0, 10 * SCALAR_7, true),
    ];

    for (user, amount, is_deposit) in flows {
        if is_deposit {
            fixture.vault.deposit(&fixture.users[user], &amount);
        } else {
            fixture.vault.withdraw(&fixture.users[user], &amount);
        }
        let new_rate = fixture.unit_value();
        assert!(
            new_rate >= rate,
            "rate regressed: {} -> {}",
            rate,
            new_rate
        );
        rate = new_rate;
    }

    println!("✅ Exchange rate never decreases across deposits/withdrawals");
}

#[test]
fn test_yield_accrual_raises_rate() {
    let fixture = create_fixture_with_data();

    let rate_before = fixture.unit_value();
    fixture.accrue_yield(0, 800 * SCALAR_7);
    let rate_after = fixture.unit_value();

    assert!(rate_after > rate_before);

    // Accrued yield is shared pro rata: both depositors gained
    let value0 = fixture
        .vault
        .convert_to_assets(&fixture.vault.balance(&fixture.users[0]));
    let value1 = fixture
        .vault
        .convert_to_assets(&fixture.vault.balance(&fixture.users[1]));
    assert!(value0 > 5_000 * SCALAR_7);
    assert!(value1 > 3_000 * SCALAR_7);

    println!("✅ Yield accrual raises the exchange rate for all holders");
}

#[test]
fn test_provider_loss_lowers_rate() {
    let fixture = create_fixture_with_data();

    let rate_before = fixture.unit_value();
    fixture.providers[0].simulate_loss(&fixture.vault.address, &(500 * SCALAR_7));
    let rate_after = fixture.unit_value();

    // Principal loss is the one sanctioned way the rate moves down
    assert!(rate_after < rate_before);

    // Withdrawals keep working against the reduced valuation
    let gross = fixture.vault.max_withdraw(&fixture.users[1]);
    assert!(gross < 3_000 * SCALAR_7);
    fixture.vault.withdraw(&fixture.users[1], &gross);

    println!("✅ Provider loss marks down every holder proportionally");
}

// ================================
// Inflation Attack Resistance
// ================================

#[test]
fn test_donation_cannot_capture_later_deposits() {
    let fixture = TestFixture::create();
    let attacker = &fixture.users[0];
    let victim = &fixture.users[1];

    // Attacker gets in first with a small position
    let attacker_principal = 1_000_000i128;
    fixture.vault.deposit(attacker, &attacker_principal);

    // Out-of-band donation straight to the provider inflates the rate
    let donation = 1_999_999i128;
    fixture.accrue_yield(0, donation);

    // Victim deposits at the inflated rate
    let victim_principal = 3_000_000i128;
    fixture.vault.deposit(victim, &victim_principal);

    // Floor rounding keeps the victim's value loss inside rounding dust
    let victim_value = fixture
        .vault
        .convert_to_assets(&fixture.vault.balance(victim));
    assert!(victim_value >= victim_principal - 2);

    // The donation is socialized across the seed too, so the attacker
    // cannot recoup what they donated
    let attacker_value = fixture
        .vault
        .convert_to_assets(&fixture.vault.balance(attacker));
    assert!(attacker_value < attacker_principal + donation);

    println!("✅ Donation attack is unprofitable against a seeded vault");
    println!(
        "  Attacker spent {} and can redeem {}",
        attacker_principal + donation,
        attacker_value
    );
}

// ================================
// Multi-Provider Liquidity
// ================================

#[test]
fn test_withdraw_sweeps_providers_in_registry_order() {
    let fixture = create_fixture_with_data();

    // Spread liquidity: 4,000 of the 8,000 deposited moves to provider b
    fixture.vault.rebalance(
        &fixture.executor,
        &fixture.provider_id(0),
        &fixture.provider_id(1),
        &(4_000 * SCALAR_7),
        &0,
    );
    assert_eq!(
        fixture.provider_balance(0),
        SEED_AMOUNT + 4_000 * SCALAR_7
    );

    // A withdrawal larger than provider a's balance drains it first, then
    // takes the remainder from provider b
    let gross = 5_000 * SCALAR_7;
    fixture.vault.withdraw(&fixture.users[0], &gross);

    assert_eq!(fixture.provider_balance(0), 0);
    assert_eq!(
        fixture.provider_balance(1),
        4_000 * SCALAR_7 - (gross - (SEED_AMOUNT + 4_000 * SCALAR_7))
    );

    println!("✅ Withdrawals sweep oldest-registered providers first");
}

#[test]
#[should_panic(expected = "Error(Contract, #122)")]
fn test_unreachable_provider_is_fatal_not_zero() {
    let fixture = create_fixture_with_data();

    fixture.providers[0].set_fail_queries(&true);

    // An active provider that cannot report a balance poisons valuation
    fixture.vault.total_assets();
}

#[test]
#[should_panic(expected = "Error(Contract, #122)")]
fn test_unreachable_provider_blocks_withdrawals() {
    let fixture = create_fixture_with_data();

    fixture.providers[0].set_fail_queries(&true);

    fixture.vault.withdraw(&fixture.users[0], &(100 * SCALAR_7));
}

// ================================
// Conservation Property
// ================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// For any in-cap sequence of deposits and withdrawals, total issued
    /// units always equal the sum of account balances, and the exchange
    /// rate never regresses.
    #[test]
    fn conservation_of_units(
        ops in proptest::collection::vec(
            (0..2usize, proptest::bool::ANY, 1i128..=2_000i128),
            1..12,
        )
    ) {
        let fixture = TestFixture::create();
        let mut rate = fixture.unit_value();

        for (user_index, is_deposit, raw_amount) in ops {
            let user = &fixture.users[user_index];
            let amount = raw_amount * SCALAR_7;
            if is_deposit {
                let _ = fixture.vault.try_deposit(user, &amount);
            } else {
                // May exceed the account's redeemable value; a rejection
                // must leave the ledger untouched
                let _ = fixture.vault.try_withdraw(user, &amount);
            }

            let account_sum = fixture.vault.balance(&fixture.admin)
                + fixture.vault.balance(&fixture.users[0])
                + fixture.vault.balance(&fixture.users[1]);
            prop_assert_eq!(fixture.vault.total_units(), account_sum);

            let new_rate = fixture.unit_value();
            prop_assert!(new_rate >= rate);
            rate = new_rate;
        }
    }
}
