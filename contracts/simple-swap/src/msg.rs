use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128, Uint256, Uint64};
use cw20::Expiration;

/// The pool deploys empty and unbound; the first add-liquidity call binds
/// the token pair.
#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    AddLiquidity {
        token_a: String,
        token_b: String,
        amount_a_desired: Uint128,
        amount_b_desired: Uint128,
        amount_a_min: Uint128,
        amount_b_min: Uint128,
        recipient: String,
        deadline: Uint64,
    },
    RemoveLiquidity {
        token_a: String,
        token_b: String,
        liquidity: Uint128,
        amount_a_min: Uint128,
        amount_b_min: Uint128,
        recipient: String,
        deadline: Uint64,
    },
    SwapExactTokensForTokens {
        amount_in: Uint128,
        amount_out_min: Uint128,
        /// Exactly two entries: [input token, output token].
        path: Vec<String>,
        recipient: String,
        deadline: Uint64,
    },
    // Standard CW20 surface of the embedded LP share token.
    Transfer {
        recipient: String,
        amount: Uint128,
    },
    Send {
        contract: String,
        amount: Uint128,
        msg: Binary,
    },
    IncreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    DecreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    SendFrom {
        owner: String,
        contract: String,
        amount: Uint128,
        msg: Binary,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(PoolStateResponse)]
    PoolState {},
    /// Pure pricing helper; operates only on the supplied reserves.
    #[returns(AmountOutResponse)]
    GetAmountOut {
        amount_in: Uint128,
        reserve_in: Uint128,
        reserve_out: Uint128,
    },
    /// Spot price of one unit of `token_a` in units of `token_b`,
    /// at 18-decimal fixed point.
    #[returns(PriceResponse)]
    GetPrice { token_a: String, token_b: String },
    // LP share token queries (embedded cw20-base ledger).
    #[returns(cw20::BalanceResponse)]
    Balance { address: String },
    #[returns(cw20::TokenInfoResponse)]
    TokenInfo {},
    #[returns(cw20::AllowanceResponse)]
    Allowance { owner: String, spender: String },
}

#[cw_serde]
pub struct PoolStateResponse {
    /// Bound pair, `None` until the first successful add-liquidity.
    pub token_a: Option<Addr>,
    pub token_b: Option<Addr>,
    pub reserve_a: Uint128,
    pub reserve_b: Uint128,
    pub total_shares: Uint128,
}

#[cw_serde]
pub struct AmountOutResponse {
    pub amount_out: Uint128,
}

#[cw_serde]
pub struct PriceResponse {
    pub price: Uint256,
}
