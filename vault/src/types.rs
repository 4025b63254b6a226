use soroban_sdk::{contracttype, Address};

/// Policy selecting which active provider receives inbound principal
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DepositPolicy {
    /// Deposits go to the provider at this registry index
    Designated(u32),
    /// Deposits go to the active provider reporting the highest deposit rate,
    /// with ties broken in favor of the earliest-registered provider
    BestRate,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct VaultConfig {
    pub user_cap: i128,  // Max redeemable value per account (i128::MAX = uncapped)
    pub vault_cap: i128, // Max total assets across all providers (i128::MAX = uncapped)
    pub fee_rate: i128,  // Withdrawal fee as a SCALAR_7 fraction of the gross amount
    pub fee_sink: Address, // Receiver of retained withdrawal fees
    pub deposit_policy: DepositPolicy, // Where inbound principal is routed
}
