#![cfg(feature = "testutils")]

use crate::{DepositPolicy, VaultConfig};
use soroban_sdk::Address;

/// Uncapped config with a 1% withdrawal fee, routed to `fee_sink`
pub fn default_config(fee_sink: Address) -> VaultConfig {
    VaultConfig {
        user_cap: i128::MAX,
        vault_cap: i128::MAX,
        fee_rate: 0_0100000, // 1% in SCALAR_7
        fee_sink,
        deposit_policy: DepositPolicy::Designated(0),
    }
}
