#![no_std]

mod constants;
mod errors;
pub mod storage;
mod contract;
mod vault;

mod types;
mod dependencies;
pub mod testutils;
mod events;

pub use constants::{SCALAR_27, SCALAR_7};
pub use contract::*;
pub use dependencies::{Provider, ProviderClient};
pub use errors::VaultError;
pub use types::*;
