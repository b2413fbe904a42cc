use cosmwasm_std::{
    entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, Timestamp,
};
use cw2::{get_contract_version, set_contract_version};
use launch_pools_common::{PoolPhase, TicketLedger};

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{PoolConfig, PoolStateInfo, CONFIG, LEDGER, POOL_STATE};

const CONTRACT_NAME: &str = "crates.io:launch-pool";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.funding_denom.is_empty() {
        return Err(ContractError::InvalidDenom);
    }
    if msg.end_time_seconds <= env.block.time.seconds() {
        return Err(ContractError::InvalidEndTime {
            end_time: msg.end_time_seconds,
            now: env.block.time.seconds(),
        });
    }

    let config = PoolConfig {
        creator: info.sender.clone(),
        funding_denom: msg.funding_denom.clone(),
        minimum_contribution: msg.minimum_contribution,
        end_time: Timestamp::from_seconds(msg.end_time_seconds),
    };
    CONFIG.save(deps.storage, &config)?;

    LEDGER.save(deps.storage, &TicketLedger::new())?;
    POOL_STATE.save(
        deps.storage,
        &PoolStateInfo {
            phase: PoolPhase::Open,
            contributor_count: 0,
            closed_at: None,
            winner: None,
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "launch-pool")
        .add_attribute("creator", info.sender.to_string())
        .add_attribute("funding_denom", msg.funding_denom)
        .add_attribute("end_time", msg.end_time_seconds.to_string()))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Contribute {} => execute::contribute(deps, env, info),
        ExecuteMsg::ClosePool {} => execute::close_pool(deps, env, info),
        ExecuteMsg::DrawWinner { random_seed_hex } => {
            execute::draw_winner(deps, env, info, random_seed_hex)
        }
    }
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::PoolState {} => query::query_pool_state(deps),
        QueryMsg::PreviewWinner { random_seed_hex } => {
            query::query_preview_winner(deps, random_seed_hex)
        }
        QueryMsg::TicketRanges { start_after, limit } => {
            query::query_ticket_ranges(deps, start_after, limit)
        }
        QueryMsg::ContributorTickets { address } => {
            query::query_contributor_tickets(deps, address)
        }
        QueryMsg::Contributors { start_after, limit } => {
            query::query_contributors(deps, start_after, limit)
        }
    }
}

#[entry_point]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::Unauthorized {
            reason: "Cannot migrate from different contract type".to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
