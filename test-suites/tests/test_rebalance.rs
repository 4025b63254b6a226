//! Rebalancing, executor gating, and provider registry integration tests

use soroban_sdk::{testutils::Address as _, vec as svec, Address, String};
use test_suites::setup::create_fixture_with_data;
use test_suites::test_fixture::SEED_AMOUNT;
use test_suites::{SCALAR_7, SCALAR_27};

// ================================
// Rebalancing
// ================================

#[test]
fn test_rebalance_moves_value_between_providers() {
    let fixture = create_fixture_with_data();

    let before = fixture.vault.total_assets();
    let user_value_before = fixture
        .vault
        .convert_to_assets(&fixture.vault.balance(&fixture.users[0]));

    let amount = 2_000 * SCALAR_7;
    fixture.vault.rebalance(
        &fixture.executor,
        &fixture.provider_id(0),
        &fixture.provider_id(1),
        &amount,
        &before,
    );

    // Provider balances shift, vault totals and account values do not
    assert_eq!(
        fixture.provider_balance(0),
        SEED_AMOUNT + 6_000 * SCALAR_7
    );
    assert_eq!(fixture.provider_balance(1), amount);
    assert_eq!(fixture.vault.total_assets(), before);
    assert_eq!(
        fixture
            .vault
            .convert_to_assets(&fixture.vault.balance(&fixture.users[0])),
        user_value_before
    );

    println!("✅ Rebalance is value-neutral while provider balances shift");
}

#[test]
fn test_rebalance_accepts_bounded_loss() {
    let fixture = create_fixture_with_data();

    // Destination skims 10% on entry
    fixture.providers[1].set_entry_haircut(&(SCALAR_7 / 10));

    let before = fixture.vault.total_assets();
    let amount = 1_000 * SCALAR_7;
    let expected_loss = amount / 10;

    fixture.vault.rebalance(
        &fixture.executor,
        &fixture.provider_id(0),
        &fixture.provider_id(1),
        &amount,
        &(before - expected_loss),
    );

    assert_eq!(fixture.vault.total_assets(), before - expected_loss);
    assert_eq!(fixture.provider_balance(1), amount - expected_loss);

    println!("✅ Loss inside the executor's tolerance is accepted");
}

#[test]
#[should_panic(expected = "Error(Contract, #130)")]
fn test_rebalance_slippage_guard() {
    let fixture = create_fixture_with_data();

    // Destination burns 10% of every deposit; demanding a lossless move
    // trips the guard
    fixture.providers[1].set_entry_haircut(&(SCALAR_7 / 10));

    let before = fixture.vault.total_assets();
    fixture.vault.rebalance(
        &fixture.executor,
        &fixture.provider_id(0),
        &fixture.provider_id(1),
        &(1_000 * SCALAR_7),
        &before,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #110)")]
fn test_rebalance_zero_amount_fails() {
    let fixture = create_fixture_with_data();

    fixture.vault.rebalance(
        &fixture.executor,
        &fixture.provider_id(0),
        &fixture.provider_id(1),
        &0,
        &0,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_rebalance_same_provider_fails() {
    let fixture = create_fixture_with_data();

    fixture.vault.rebalance(
        &fixture.executor,
        &fixture.provider_id(0),
        &fixture.provider_id(0),
        &(100 * SCALAR_7),
        &0,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #120)")]
fn test_rebalance_unregistered_destination_fails() {
    let fixture = create_fixture_with_data();

    let outsider = fixture.env.register(
        mock_provider::MockProvider,
        (
            fixture.vault.token(),
            String::from_str(&fixture.env, "gamma"),
            SCALAR_27 / 100,
        ),
    );

    fixture.vault.rebalance(
        &fixture.executor,
        &fixture.provider_id(0),
        &outsider,
        &(100 * SCALAR_7),
        &0,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #111)")]
fn test_rebalance_exceeding_source_balance_fails() {
    let fixture = create_fixture_with_data();

    // Source only holds the seed plus 8,000 tokens
    fixture.vault.rebalance(
        &fixture.executor,
        &fixture.provider_id(0),
        &fixture.provider_id(1),
        &(9_000 * SCALAR_7),
        &0,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #123)")]
fn test_rebalance_rejected_deposit_fails() {
    let fixture = create_fixture_with_data();

    fixture.providers[1].set_reject_deposits(&true);

    fixture.vault.rebalance(
        &fixture.executor,
        &fixture.provider_id(0),
        &fixture.provider_id(1),
        &(100 * SCALAR_7),
        &0,
    );
}

// ================================
// Executor Allow-list
// ================================

#[test]
#[should_panic(expected = "Error(Contract, #140)")]
fn test_rebalance_requires_allowlisted_executor() {
    let fixture = create_fixture_with_data();

    let outsider = Address::generate(&fixture.env);
    fixture.vault.rebalance(
        &outsider,
        &fixture.provider_id(0),
        &fixture.provider_id(1),
        &(100 * SCALAR_7),
        &0,
    );
}

#[test]
fn test_revoking_executor_blocks_immediately() {
    let fixture = create_fixture_with_data();

    let amount = 100 * SCALAR_7;
    fixture.vault.rebalance(
        &fixture.executor,
        &fixture.provider_id(0),
        &fixture.provider_id(1),
        &amount,
        &0,
    );

    fixture.vault.set_executor(&fixture.executor, &false);
    assert!(!fixture.vault.is_executor(&fixture.executor));

    let result = fixture.vault.try_rebalance(
        &fixture.executor,
        &fixture.provider_id(0),
        &fixture.provider_id(1),
        &amount,
        &0,
    );
    assert!(result.is_err());

    // The first rebalance went through, the revoked one did not
    assert_eq!(fixture.provider_balance(1), amount);

    println!("✅ Executor revocation takes effect on the next call");
}

#[test]
fn test_set_executor_is_idempotent() {
    let fixture = create_fixture_with_data();

    fixture.vault.set_executor(&fixture.executor, &true);
    fixture.vault.set_executor(&fixture.executor, &true);
    assert!(fixture.vault.is_executor(&fixture.executor));

    let outsider = Address::generate(&fixture.env);
    fixture.vault.set_executor(&outsider, &false);
    assert!(!fixture.vault.is_executor(&outsider));
}

// ================================
// Provider Registry
// ================================

#[test]
#[should_panic(expected = "Error(Contract, #121)")]
fn test_set_providers_rejects_duplicates() {
    let fixture = create_fixture_with_data();

    fixture.vault.set_providers(&svec![
        &fixture.env,
        fixture.provider_id(0),
        fixture.provider_id(0),
    ]);
}

#[test]
#[should_panic(expected = "Error(Contract, #121)")]
fn test_set_providers_rejects_unqueryable_entry() {
    let fixture = create_fixture_with_data();

    // A bare address with no contract behind it cannot answer the probe
    let phantom = Address::generate(&fixture.env);
    fixture
        .vault
        .set_providers(&svec![&fixture.env, fixture.provider_id(0), phantom]);
}

#[test]
fn test_set_providers_replaces_registry() {
    let fixture = create_fixture_with_data();

    // Park some value in the second provider before dropping it
    fixture.vault.rebalance(
        &fixture.executor,
        &fixture.provider_id(0),
        &fixture.provider_id(1),
        &(1_000 * SCALAR_7),
        &0,
    );

    let gamma = fixture.env.register(
        mock_provider::MockProvider,
        (
            fixture.vault.token(),
            String::from_str(&fixture.env, "gamma"),
            SCALAR_27 / 100,
        ),
    );

    fixture
        .vault
        .set_providers(&svec![&fixture.env, fixture.provider_id(0), gamma.clone()]);

    let providers = fixture.vault.get_providers();
    assert_eq!(providers.len(), 2);
    assert_eq!(providers.get_unchecked(1), gamma);

    // Dropping a funded provider does not move its value; total_assets now
    // only counts the remaining registry, and the dropped provider still
    // reports the orphaned balance
    assert_eq!(
        fixture.vault.total_assets(),
        SEED_AMOUNT + 7_000 * SCALAR_7
    );
    assert_eq!(fixture.provider_balance(1), 1_000 * SCALAR_7);

    println!("✅ Registry replacement leaves removed-provider funds untouched");
}
