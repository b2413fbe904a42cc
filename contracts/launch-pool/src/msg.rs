use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Timestamp, Uint128, Uint256};
use launch_pools_common::PoolPhase;

use crate::state::{PoolConfig, WinnerInfo};

#[cw_serde]
pub struct InstantiateMsg {
    /// Denom contributions are paid in, e.g. "inj"
    pub funding_denom: String,
    /// Smallest accepted contribution (base units)
    pub minimum_contribution: Uint128,
    /// Unix time (seconds) after which the pool stops accepting contributions
    pub end_time_seconds: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Contribute to the pool. Send the funding denom in info.funds;
    /// one ticket per base unit contributed.
    Contribute {},
    /// Close the pool. Creator at any time, anyone once the end time passed.
    ClosePool {},
    /// Draw the winner from an externally verified random seed.
    /// Creator only, pool must be closed, at most once.
    DrawWinner {
        /// 32-byte random seed, hex-encoded
        random_seed_hex: String,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(PoolConfig)]
    Config {},
    #[returns(PoolStateResponse)]
    PoolState {},
    /// Dry-run winner selection with an arbitrary seed. Does not require the
    /// pool to be closed and never affects state.
    #[returns(PreviewWinnerResponse)]
    PreviewWinner { random_seed_hex: String },
    #[returns(TicketRangesResponse)]
    TicketRanges {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(ContributorTicketsResponse)]
    ContributorTickets { address: String },
    #[returns(ContributorsResponse)]
    Contributors {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct PoolStateResponse {
    pub phase: PoolPhase,
    pub total_tickets: Uint256,
    /// Number of ledger entries (contribution events)
    pub participant_count: u64,
    /// Number of distinct contributing addresses
    pub contributor_count: u32,
    pub closed_at: Option<Timestamp>,
    pub winner: Option<WinnerInfo>,
}

#[cw_serde]
pub struct PreviewWinnerResponse {
    pub winner: String,
    pub winning_ticket: Uint256,
    pub total_weight: Uint256,
}

#[cw_serde]
pub struct TicketRangeEntry {
    pub index: u64,
    pub owner: String,
    pub lower_bound: Uint256,
    pub upper_bound: Uint256,
}

#[cw_serde]
pub struct TicketRangesResponse {
    pub ranges: Vec<TicketRangeEntry>,
}

#[cw_serde]
pub struct ContributorTicketsResponse {
    pub address: String,
    pub tickets: Uint256,
}

#[cw_serde]
pub struct ContributorsResponse {
    pub contributors: Vec<ContributorTicketsResponse>,
}

#[cw_serde]
pub struct MigrateMsg {}
