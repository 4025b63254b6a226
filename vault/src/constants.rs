// Token precision
pub const SCALAR_7: i128 = 10_000_000; // 7 decimal places

// Provider deposit rates are quoted against 1e27 (1e27 = 100%)
pub const SCALAR_27: i128 = 1_000_000_000_000_000_000_000_000_000;
