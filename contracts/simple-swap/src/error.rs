use cosmwasm_std::{DivideByZeroError, OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    DivideByZeroError(#[from] DivideByZeroError),

    #[error("{0}")]
    OverflowError(#[from] OverflowError),

    #[error("{0}")]
    ConversionOverflowError(#[from] cosmwasm_std::ConversionOverflowError),

    #[error("{0}")]
    LpToken(#[from] cw20_base::ContractError),

    #[error("Transaction deadline has expired")]
    Expired {},

    #[error("Token pair does not match the pool's bound pair")]
    InvalidTokens {},

    #[error("Swap path must be exactly the two pool tokens")]
    InvalidPath {},

    #[error("Cannot compute price against a zero reserve")]
    InvalidReserve {},

    #[error("Token A amount below requested minimum")]
    InsufficientAAmount {},

    #[error("Token B amount below requested minimum")]
    InsufficientBAmount {},

    #[error("Swap output below requested minimum")]
    InsufficientOutputAmount {},

    #[error("Deposit too small to mint any LP shares")]
    InsufficientLiquidityMinted {},

    #[error("LP share amount is zero or exceeds caller balance")]
    InsufficientLpTokenBurned {},

    #[error("Swap input amount must be positive")]
    InsufficientInputAmount {},

    #[error("Cannot price against empty reserves")]
    InsufficientLiquidity {},
}
