use cosmwasm_std::{DepsMut, Env, Event, MessageInfo, Response, Uint256};
use launch_pools_common::PoolPhase;

use crate::error::ContractError;
use crate::state::{WinnerInfo, CONFIG, CONTRIBUTOR_TICKETS, LEDGER, POOL_STATE};

/// Record a contribution. The ticket weight equals the amount of the funding
/// denom sent with the message.
pub fn contribute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut state = POOL_STATE.load(deps.storage)?;

    if state.phase != PoolPhase::Open {
        return Err(ContractError::PoolNotOpen);
    }
    if env.block.time >= config.end_time {
        return Err(ContractError::PoolEnded {
            end_time: config.end_time.seconds(),
        });
    }

    if info.funds.is_empty() {
        return Err(ContractError::NoFundsSent {
            denom: config.funding_denom,
        });
    }
    if info.funds.len() != 1 {
        return Err(ContractError::InvalidFunds);
    }
    let coin = &info.funds[0];
    if coin.denom != config.funding_denom {
        return Err(ContractError::WrongDenom {
            expected: config.funding_denom,
            denom: coin.denom.clone(),
        });
    }
    if coin.amount < config.minimum_contribution {
        return Err(ContractError::ContributionBelowMinimum {
            amount: coin.amount,
            minimum: config.minimum_contribution,
        });
    }

    let weight = Uint256::from(coin.amount);

    let mut ledger = LEDGER.load(deps.storage)?;
    let range = ledger.record_contribution(info.sender.clone(), weight)?;
    LEDGER.save(deps.storage, &ledger)?;

    // Running per-contributor total; repeat contributions add separate
    // ledger entries but aggregate here.
    let previous = CONTRIBUTOR_TICKETS.may_load(deps.storage, &info.sender)?;
    if previous.is_none() {
        state.contributor_count += 1;
        POOL_STATE.save(deps.storage, &state)?;
    }
    CONTRIBUTOR_TICKETS.save(
        deps.storage,
        &info.sender,
        &(previous.unwrap_or_default() + weight),
    )?;

    let lower_bound = range.upper_bound - weight;

    Ok(Response::new()
        .add_attribute("action", "contribute")
        .add_attribute("contributor", info.sender.to_string())
        .add_attribute("amount", coin.amount.to_string())
        .add_event(
            Event::new("launchpool_contribution")
                .add_attribute("contributor", info.sender.to_string())
                .add_attribute("amount", coin.amount.to_string())
                .add_attribute("ticket_lower_bound", lower_bound.to_string())
                .add_attribute("ticket_upper_bound", range.upper_bound.to_string())
                .add_attribute("total_tickets", ledger.total_weight.to_string())
                .add_attribute("participants", ledger.len().to_string()),
        ))
}

/// Close the pool. The creator may close at any time; anyone else only once
/// the end time has passed.
pub fn close_pool(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut state = POOL_STATE.load(deps.storage)?;

    if state.phase != PoolPhase::Open {
        return Err(ContractError::PoolNotOpen);
    }
    if info.sender != config.creator && env.block.time < config.end_time {
        return Err(ContractError::Unauthorized {
            reason: "only the creator can close before the end time".to_string(),
        });
    }

    state.phase = PoolPhase::Closed;
    state.closed_at = Some(env.block.time);
    POOL_STATE.save(deps.storage, &state)?;

    let ledger = LEDGER.load(deps.storage)?;

    Ok(Response::new()
        .add_attribute("action", "close_pool")
        .add_event(
            Event::new("launchpool_closed")
                .add_attribute("closed_at", env.block.time.seconds().to_string())
                .add_attribute("total_tickets", ledger.total_weight.to_string())
                .add_attribute("participants", ledger.len().to_string()),
        ))
}

/// Draw the winner from an externally verified 32-byte seed. One-shot: once
/// a winner is recorded the pool is permanently in the Drawn phase.
pub fn draw_winner(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    random_seed_hex: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut state = POOL_STATE.load(deps.storage)?;

    if info.sender != config.creator {
        return Err(ContractError::Unauthorized {
            reason: "only the creator can draw the winner".to_string(),
        });
    }
    match state.phase {
        PoolPhase::Open => return Err(ContractError::PoolNotClosed),
        PoolPhase::Drawn => return Err(ContractError::WinnerAlreadyDrawn),
        PoolPhase::Closed => {}
    }

    let seed = decode_seed(&random_seed_hex)?;

    let ledger = LEDGER.load(deps.storage)?;
    let winner = ledger.select_winner(seed)?;
    let winning_ticket = ledger.winning_ticket(seed)?;

    state.phase = PoolPhase::Drawn;
    state.winner = Some(WinnerInfo {
        address: winner.clone(),
        winning_ticket,
        randomness: random_seed_hex.clone(),
        total_weight: ledger.total_weight,
        drawn_at: env.block.time,
    });
    POOL_STATE.save(deps.storage, &state)?;

    Ok(Response::new()
        .add_attribute("action", "draw_winner")
        .add_attribute("winner", winner.to_string())
        .add_event(
            Event::new("launchpool_winner_drawn")
                .add_attribute("winner", winner.to_string())
                .add_attribute("winning_ticket", winning_ticket.to_string())
                .add_attribute("total_tickets", ledger.total_weight.to_string())
                .add_attribute("participants", ledger.len().to_string())
                .add_attribute("randomness", random_seed_hex)
                .add_attribute("drawn_at", env.block.time.seconds().to_string()),
        ))
}

/// Decode a hex-encoded 32-byte seed into a big-endian Uint256.
pub fn decode_seed(random_seed_hex: &str) -> Result<Uint256, ContractError> {
    let bytes = hex::decode(random_seed_hex).map_err(|_| ContractError::InvalidHex {
        field: "random_seed_hex".to_string(),
    })?;
    let bytes: [u8; 32] = bytes
        .try_into()
        .map_err(|b: Vec<u8>| ContractError::InvalidSeedLength { got: b.len() })?;
    Ok(Uint256::from_be_bytes(bytes))
}
