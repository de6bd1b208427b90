use crate::error::ContractError;
use crate::state::TokenPair;
use cosmwasm_std::{Addr, BlockInfo, Uint64};

/// Rejects calls whose deadline lies strictly before the current block time.
/// A deadline equal to the block time is still acceptable.
pub(crate) fn assert_not_expired(block: &BlockInfo, deadline: Uint64) -> Result<(), ContractError> {
    if block.time.seconds() > deadline.u64() {
        return Err(ContractError::Expired {});
    }
    Ok(())
}

/// Checks the caller-supplied tokens against the bound pair.
/// Returns `true` when the caller supplied the pair in reversed order.
pub(crate) fn match_token_pair(
    pair: &TokenPair,
    token_a: &Addr,
    token_b: &Addr,
) -> Result<bool, ContractError> {
    if token_a == &pair.token_a && token_b == &pair.token_b {
        Ok(false)
    } else if token_a == &pair.token_b && token_b == &pair.token_a {
        Ok(true)
    } else {
        Err(ContractError::InvalidTokens {})
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum SwapDirection {
    AToB,
    BToA,
}

/// Validates a swap path: exactly two entries covering both pool tokens.
pub(crate) fn resolve_swap_path(
    pair: &TokenPair,
    path: &[Addr],
) -> Result<SwapDirection, ContractError> {
    match path {
        [input, output] if input == &pair.token_a && output == &pair.token_b => {
            Ok(SwapDirection::AToB)
        }
        [input, output] if input == &pair.token_b && output == &pair.token_a => {
            Ok(SwapDirection::BToA)
        }
        _ => Err(ContractError::InvalidPath {}),
    }
}
