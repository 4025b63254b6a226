use crate::test_fixture::TestFixture;
use crate::SCALAR_7;

/// Fixture with both users holding live deposits: 5,000 tokens from user 0
/// and 3,000 from user 1, all routed to the first provider.
pub fn create_fixture_with_data<'a>() -> TestFixture<'a> {
    let fixture = TestFixture::create();

    fixture.vault.deposit(&fixture.users[0], &(5_000 * SCALAR_7));
    fixture.vault.deposit(&fixture.users[1], &(3_000 * SCALAR_7));

    fixture
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixture::SEED_AMOUNT;

    #[test]
    fn test_create_fixture_with_data() {
        let fixture: TestFixture<'_> = create_fixture_with_data();

        assert_eq!(
            fixture.vault.total_units(),
            SEED_AMOUNT + 8_000 * SCALAR_7
        );
        assert_eq!(fixture.provider_balance(0), SEED_AMOUNT + 8_000 * SCALAR_7);
        assert_eq!(fixture.provider_balance(1), 0);
    }
}
