use sep_41_token::testutils::MockTokenClient;
use soroban_sdk::{Address, Env};

/// Deploy a Stellar asset contract to act as the vault's base asset
pub fn create_stellar_token<'a>(e: &Env, admin: &Address) -> (Address, MockTokenClient<'a>) {
    let contract_id = e.register_stellar_asset_contract_v2(admin.clone());
    let client = MockTokenClient::new(e, &contract_id.address());
    (contract_id.address(), client)
}
