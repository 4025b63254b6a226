use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultError {
    // Configuration
    AlreadyInitialized = 100,
    NotInitialized = 101,
    InvalidConfig = 102,

    // Amount validation
    ZeroAmount = 110,
    InsufficientBalance = 111,
    CapExceeded = 112,

    // Providers
    ProviderNotActive = 120,
    DuplicateOrInvalidProvider = 121,
    ProviderQueryFailed = 122,
    ProviderOperationFailed = 123,

    // Rebalancing
    SlippageExceeded = 130,

    // Access and status
    Unauthorized = 140,
    Paused = 141,
}
