use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128, Uint256};
use cw_storage_plus::{Item, Map};
use launch_pools_common::{PoolPhase, TicketLedger};

pub const CONFIG: Item<PoolConfig> = Item::new("config");
pub const POOL_STATE: Item<PoolStateInfo> = Item::new("pool_state");
pub const LEDGER: Item<TicketLedger> = Item::new("ledger");

/// Per-contributor ticket totals, aggregated across repeat contributions
pub const CONTRIBUTOR_TICKETS: Map<&Addr, Uint256> = Map::new("contributor_tickets");

#[cw_serde]
pub struct PoolConfig {
    pub creator: Addr,
    /// Denom contributions must be paid in
    pub funding_denom: String,
    /// Smallest accepted contribution (in funding_denom base units)
    pub minimum_contribution: Uint128,
    /// After this time contributions stop and anyone may close the pool
    pub end_time: Timestamp,
}

#[cw_serde]
pub struct PoolStateInfo {
    pub phase: PoolPhase,
    /// Distinct contributing addresses (ledger entries may be more)
    pub contributor_count: u32,
    pub closed_at: Option<Timestamp>,
    pub winner: Option<WinnerInfo>,
}

#[cw_serde]
pub struct WinnerInfo {
    pub address: Addr,
    /// seed % total_weight at draw time
    pub winning_ticket: Uint256,
    /// The 32-byte seed as submitted, hex-encoded
    pub randomness: String,
    pub total_weight: Uint256,
    pub drawn_at: Timestamp,
}
