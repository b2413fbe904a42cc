use cosmwasm_std::{to_json_binary, Binary, Deps, Order, StdError, StdResult, Uint256};
use cw_storage_plus::Bound;

use crate::execute::decode_seed;
use crate::msg::{
    ContributorTicketsResponse, ContributorsResponse, PoolStateResponse, PreviewWinnerResponse,
    TicketRangeEntry, TicketRangesResponse,
};
use crate::state::{CONFIG, CONTRIBUTOR_TICKETS, LEDGER, POOL_STATE};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_pool_state(deps: Deps) -> StdResult<Binary> {
    let state = POOL_STATE.load(deps.storage)?;
    let ledger = LEDGER.load(deps.storage)?;

    to_json_binary(&PoolStateResponse {
        phase: state.phase,
        total_tickets: ledger.total_weight,
        participant_count: ledger.len() as u64,
        contributor_count: state.contributor_count,
        closed_at: state.closed_at,
        winner: state.winner,
    })
}

/// Dry-run of the winner selection. Same algorithm as the draw, without
/// touching state, so it can be used for simulation and auditing in any
/// phase.
pub fn query_preview_winner(deps: Deps, random_seed_hex: String) -> StdResult<Binary> {
    let seed = decode_seed(&random_seed_hex).map_err(|e| StdError::generic_err(e.to_string()))?;

    let ledger = LEDGER.load(deps.storage)?;
    let winner = ledger
        .select_winner(seed)
        .map_err(|e| StdError::generic_err(e.to_string()))?;
    let winning_ticket = ledger
        .winning_ticket(seed)
        .map_err(|e| StdError::generic_err(e.to_string()))?;

    to_json_binary(&PreviewWinnerResponse {
        winner: winner.to_string(),
        winning_ticket,
        total_weight: ledger.total_weight,
    })
}

pub fn query_ticket_ranges(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(50).min(100) as usize;
    let start = start_after.map(|i| i + 1).unwrap_or(0) as usize;

    let ledger = LEDGER.load(deps.storage)?;

    let ranges: Vec<TicketRangeEntry> = ledger
        .ranges
        .iter()
        .enumerate()
        .skip(start)
        .take(limit)
        .map(|(index, range)| {
            let lower_bound = if index == 0 {
                Uint256::zero()
            } else {
                ledger.ranges[index - 1].upper_bound
            };
            TicketRangeEntry {
                index: index as u64,
                owner: range.owner.to_string(),
                lower_bound,
                upper_bound: range.upper_bound,
            }
        })
        .collect();

    to_json_binary(&TicketRangesResponse { ranges })
}

pub fn query_contributor_tickets(deps: Deps, address: String) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&address)?;
    let tickets = CONTRIBUTOR_TICKETS
        .may_load(deps.storage, &addr)?
        .unwrap_or_default();

    to_json_binary(&ContributorTicketsResponse { address, tickets })
}

pub fn query_contributors(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(50).min(100) as usize;
    let start_addr = start_after
        .map(|a| deps.api.addr_validate(&a))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let contributors: Vec<ContributorTicketsResponse> = CONTRIBUTOR_TICKETS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .filter_map(|r| r.ok())
        .map(|(addr, tickets)| ContributorTicketsResponse {
            address: addr.to_string(),
            tickets,
        })
        .collect();

    to_json_binary(&ContributorsResponse { contributors })
}
