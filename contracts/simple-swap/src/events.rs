use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Event, Uint128};

// Events specific to this pool contract

#[cw_serde]
pub struct LiquidityAddedEvent {
    pub sender: Addr,
    pub recipient: Addr,
    pub amount_a_deposited: Uint128,
    pub amount_b_deposited: Uint128,
    pub shares_minted: Uint128,
}

impl From<LiquidityAddedEvent> for Event {
    fn from(val: LiquidityAddedEvent) -> Self {
        Event::new("liquidity_added")
            .add_attribute("sender", val.sender.into_string())
            .add_attribute("recipient", val.recipient.into_string())
            .add_attribute("amount_a_deposited", val.amount_a_deposited.to_string())
            .add_attribute("amount_b_deposited", val.amount_b_deposited.to_string())
            .add_attribute("shares_minted", val.shares_minted.to_string())
    }
}

#[cw_serde]
pub struct LiquidityRemovedEvent {
    pub sender: Addr,    // Holder whose shares were burned
    pub recipient: Addr, // Account receiving the withdrawn assets
    pub shares_burned: Uint128,
    pub return_a: Uint128,
    pub return_b: Uint128,
}

impl From<LiquidityRemovedEvent> for Event {
    fn from(val: LiquidityRemovedEvent) -> Self {
        Event::new("liquidity_removed")
            .add_attribute("sender", val.sender.into_string())
            .add_attribute("recipient", val.recipient.into_string())
            .add_attribute("shares_burned", val.shares_burned.to_string())
            .add_attribute("return_a", val.return_a.to_string())
            .add_attribute("return_b", val.return_b.to_string())
    }
}

#[cw_serde]
pub struct SwapEvent {
    pub sender: Addr,
    pub recipient: Addr,
    pub offer_token: Addr,
    pub ask_token: Addr,
    pub offer_amount: Uint128,
    pub return_amount: Uint128,
}

impl From<SwapEvent> for Event {
    fn from(val: SwapEvent) -> Self {
        Event::new("swap")
            .add_attribute("sender", val.sender.into_string())
            .add_attribute("recipient", val.recipient.into_string())
            .add_attribute("offer_token", val.offer_token.into_string())
            .add_attribute("ask_token", val.ask_token.into_string())
            .add_attribute("offer_amount", val.offer_amount.to_string())
            .add_attribute("return_amount", val.return_amount.to_string())
    }
}
