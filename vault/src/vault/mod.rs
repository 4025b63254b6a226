mod providers;
mod shares;
pub use shares::{execute_seed_shares, to_assets_floor, to_units_floor, total_assets};
mod actions;
pub use actions::{execute_deposit, execute_withdraw, max_withdraw};
mod rebalance;
pub use rebalance::execute_rebalance;
mod config;
pub use config::{
    execute_initialize, execute_set_caps, execute_set_deposit_policy, execute_set_executor,
    execute_set_fee, execute_set_paused, execute_set_providers,
};
