use mock_provider::{MockProvider, MockProviderClient};
use sep_41_token::testutils::MockTokenClient;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec as svec, Address, Env, String, Vec as SorobanVec};
use vault::{testutils::default_config, VaultClient, VaultContract};

use crate::token::create_stellar_token;
use crate::{SCALAR_7, SCALAR_27};

/// Claim units seeded at vault creation (1e6 base units)
pub const SEED_AMOUNT: i128 = 1_000_000;

pub struct TestFixture<'a> {
    pub env: Env,
    pub admin: Address,
    pub executor: Address,
    pub fee_sink: Address,
    pub users: Vec<Address>,
    pub token: MockTokenClient<'a>,
    pub providers: Vec<MockProviderClient<'a>>,
    pub vault: VaultClient<'a>,
}

impl TestFixture<'_> {
    /// Wires a token, two mock providers (4% and 6% rates), and a seeded
    /// vault with an allow-listed executor and two funded users.
    pub fn create<'a>() -> TestFixture<'a> {
        let e = Env::default();
        e.cost_estimate().budget().reset_unlimited();
        e.mock_all_auths();

        let admin = Address::generate(&e);
        let executor = Address::generate(&e);
        let fee_sink = Address::generate(&e);

        let (token_id, token_client) = create_stellar_token(&e, &admin);

        let provider_a = e.register(
            MockProvider,
            (
                token_id.clone(),
                String::from_str(&e, "alpha"),
                4 * SCALAR_27 / 100,
            ),
        );
        let provider_b = e.register(
            MockProvider,
            (
                token_id.clone(),
                String::from_str(&e, "beta"),
                6 * SCALAR_27 / 100,
            ),
        );

        let vault_id = e.register(
            VaultContract,
            (
                admin.clone(),
                token_id.clone(),
                svec![&e, provider_a.clone(), provider_b.clone()],
                default_config(fee_sink.clone()),
            ),
        );
        let vault_client = VaultClient::new(&e, &vault_id);

        let user1 = Address::generate(&e);
        let user2 = Address::generate(&e);
        token_client.mint(&user1, &(100_000 * SCALAR_7));
        token_client.mint(&user2, &(100_000 * SCALAR_7));

        // Seed the initial unit position and authorize the executor
        token_client.mint(&admin, &SEED_AMOUNT);
        vault_client.seed_shares(&SEED_AMOUNT);
        vault_client.set_executor(&executor, &true);

        TestFixture {
            env: e.clone(),
            admin,
            executor,
            fee_sink,
            users: vec![user1, user2],
            token: token_client,
            providers: vec![
                MockProviderClient::new(&e, &provider_a),
                MockProviderClient::new(&e, &provider_b),
            ],
            vault: vault_client,
        }
    }

    /// Address of the provider at `index` in the registry
    pub fn provider_id(&self, index: usize) -> Address {
        self.providers[index].address.clone()
    }

    /// The value the provider at `index` reports for the vault
    pub fn provider_balance(&self, index: usize) -> i128 {
        self.providers[index].deposit_balance(&self.vault.address, &self.vault.address)
    }

    /// Simulate the provider at `index` accruing `amount` of yield for the
    /// vault, backing the claim with freshly minted tokens
    pub fn accrue_yield(&self, index: usize, amount: i128) {
        self.token.mint(&self.providers[index].address, &amount);
        self.providers[index].simulate_yield(&self.vault.address, &amount);
    }

    /// Current exchange rate probe: the asset value of one whole unit
    pub fn unit_value(&self) -> i128 {
        self.vault.convert_to_assets(&SCALAR_7)
    }
}
