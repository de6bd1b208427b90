use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

/// The two asset contracts this pool trades between, in the order the first
/// liquidity provider supplied them. Absent until the first add-liquidity.
#[cw_serde]
pub struct TokenPair {
    pub token_a: Addr,
    pub token_b: Addr,
}

pub const TOKEN_PAIR: Item<TokenPair> = Item::new("token_pair");

// Reserves are tracked by the pool itself and reconciled after every
// transfer it issues; asset-contract balances are never re-queried.
pub const RESERVE_A: Item<Uint128> = Item::new("reserve_a");
pub const RESERVE_B: Item<Uint128> = Item::new("reserve_b");

// Contract name and version (optional, but good practice)
pub const CONTRACT_NAME: &str = "crates.io:cw-simple-swap";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// The pool doubles as its own LP token ledger (embedded cw20-base).
pub const LP_TOKEN_NAME: &str = "SimpleSwap LP";
pub const LP_TOKEN_SYMBOL: &str = "SSLP";
pub const LP_TOKEN_DECIMALS: u8 = 18;

// 0.3% fee, charged on the input side of every swap.
pub const SWAP_FEE_NUMERATOR: u128 = 997;
pub const SWAP_FEE_DENOMINATOR: u128 = 1000;

/// Fixed-point unit for spot prices (18 decimals).
pub const PRICE_SCALE: u128 = 1_000_000_000_000_000_000;
