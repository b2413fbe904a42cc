//! Integration tests for the launch-pool contract.
//!
//! These drive the full pool lifecycle through the public entry points:
//! instantiate → contribute → preview → close → draw → query, using the
//! cosmwasm testing mocks, so they run without wasm artifacts.

use cosmwasm_std::testing::{message_info, mock_dependencies, mock_env, MockApi};
use cosmwasm_std::{coins, Uint128, Uint256};
use sha2::{Digest, Sha256};

use launch_pool::contract::{execute, instantiate, query};
use launch_pool::msg::{
    ExecuteMsg, InstantiateMsg, PoolStateResponse, PreviewWinnerResponse, QueryMsg,
    TicketRangesResponse,
};
use launch_pools_common::PoolPhase;

const WEEK_SECONDS: u64 = 7 * 24 * 60 * 60;

/// Hex-encoded 32-byte seed whose big-endian value is `target`.
fn seed_hex(target: u128) -> String {
    let mut bytes = [0u8; 32];
    bytes[16..].copy_from_slice(&target.to_be_bytes());
    hex::encode(bytes)
}

fn instantiate_msg() -> InstantiateMsg {
    InstantiateMsg {
        funding_denom: "inj".to_string(),
        minimum_contribution: Uint128::from(10u128),
        end_time_seconds: mock_env().block.time.seconds() + WEEK_SECONDS,
    }
}

#[test]
fn test_full_pool_lifecycle() {
    let mut deps = mock_dependencies();
    let api = MockApi::default();

    let creator = api.addr_make("creator");
    let info = message_info(&creator, &[]);
    instantiate(deps.as_mut(), mock_env(), info, instantiate_msg()).unwrap();

    // Three contributors buy proportional shares
    for (name, amount) in [("alice", 100u128), ("bob", 200), ("carol", 700)] {
        let contributor = api.addr_make(name);
        let info = message_info(&contributor, &coins(amount, "inj"));
        execute(deps.as_mut(), mock_env(), info, ExecuteMsg::Contribute {}).unwrap();
    }

    // Ranges are contiguous and preserve contribution order
    let res = query(
        deps.as_ref(),
        mock_env(),
        QueryMsg::TicketRanges {
            start_after: None,
            limit: None,
        },
    )
    .unwrap();
    let ranges: TicketRangesResponse = serde_json::from_slice(&res).unwrap();
    assert_eq!(ranges.ranges.len(), 3);
    assert_eq!(ranges.ranges[0].lower_bound, Uint256::zero());
    for window in ranges.ranges.windows(2) {
        assert_eq!(window[0].upper_bound, window[1].lower_bound);
    }

    // Preview while still open, with a realistic hashed seed
    let digest: [u8; 32] = Sha256::digest(b"beacon-round-4242").into();
    let seed = hex::encode(digest);
    let res = query(
        deps.as_ref(),
        mock_env(),
        QueryMsg::PreviewWinner {
            random_seed_hex: seed.clone(),
        },
    )
    .unwrap();
    let preview: PreviewWinnerResponse = serde_json::from_slice(&res).unwrap();
    assert_eq!(preview.total_weight, Uint256::from(1000u128));
    // sha256("beacon-round-4242") mod 1000 = 2, inside alice's range [0, 100)
    assert_eq!(preview.winning_ticket, Uint256::from(2u128));
    assert_eq!(preview.winner, api.addr_make("alice").to_string());

    // Close and draw with the same seed: the draw must agree with the preview
    let info = message_info(&creator, &[]);
    execute(deps.as_mut(), mock_env(), info, ExecuteMsg::ClosePool {}).unwrap();

    let info = message_info(&creator, &[]);
    let res = execute(
        deps.as_mut(),
        mock_env(),
        info,
        ExecuteMsg::DrawWinner {
            random_seed_hex: seed,
        },
    )
    .unwrap();
    assert!(res
        .events
        .iter()
        .any(|e| e.ty == "launchpool_winner_drawn"));

    let res = query(deps.as_ref(), mock_env(), QueryMsg::PoolState {}).unwrap();
    let state: PoolStateResponse = serde_json::from_slice(&res).unwrap();
    assert_eq!(state.phase, PoolPhase::Drawn);
    assert_eq!(state.participant_count, 3);

    let winner = state.winner.unwrap();
    assert_eq!(winner.address.to_string(), preview.winner);
    assert_eq!(winner.winning_ticket, preview.winning_ticket);
}

#[test]
fn test_preview_fairness_exhaustive() {
    let mut deps = mock_dependencies();
    let api = MockApi::default();

    let creator = api.addr_make("creator");
    let info = message_info(&creator, &[]);
    instantiate(deps.as_mut(), mock_env(), info, instantiate_msg()).unwrap();

    let alice = api.addr_make("alice");
    let info = message_info(&alice, &coins(30, "inj"));
    execute(deps.as_mut(), mock_env(), info, ExecuteMsg::Contribute {}).unwrap();

    let bob = api.addr_make("bob");
    let info = message_info(&bob, &coins(70, "inj"));
    execute(deps.as_mut(), mock_env(), info, ExecuteMsg::Contribute {}).unwrap();

    // Sweep every residue of the ticket space once: win counts must match
    // contributed weights exactly.
    let mut alice_wins = 0u32;
    let mut bob_wins = 0u32;
    for target in 0u128..100 {
        let res = query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::PreviewWinner {
                random_seed_hex: seed_hex(target),
            },
        )
        .unwrap();
        let preview: PreviewWinnerResponse = serde_json::from_slice(&res).unwrap();
        if preview.winner == alice.to_string() {
            alice_wins += 1;
        } else if preview.winner == bob.to_string() {
            bob_wins += 1;
        }
    }
    assert_eq!(alice_wins, 30);
    assert_eq!(bob_wins, 70);
}

#[test]
fn test_expired_pool_closed_by_anyone_then_drawn() {
    let mut deps = mock_dependencies();
    let api = MockApi::default();

    let creator = api.addr_make("creator");
    let info = message_info(&creator, &[]);
    instantiate(deps.as_mut(), mock_env(), info, instantiate_msg()).unwrap();

    let alice = api.addr_make("alice");
    let info = message_info(&alice, &coins(50, "inj"));
    execute(deps.as_mut(), mock_env(), info, ExecuteMsg::Contribute {}).unwrap();

    // Past the end time a stranger may close, and late contributions bounce
    let mut env = mock_env();
    env.block.time = env.block.time.plus_seconds(WEEK_SECONDS + 1);

    let bob = api.addr_make("bob");
    let info = message_info(&bob, &coins(50, "inj"));
    execute(deps.as_mut(), env.clone(), info, ExecuteMsg::Contribute {}).unwrap_err();

    let info = message_info(&bob, &[]);
    execute(deps.as_mut(), env.clone(), info, ExecuteMsg::ClosePool {}).unwrap();

    // Single participant wins regardless of seed
    let info = message_info(&creator, &[]);
    execute(
        deps.as_mut(),
        env,
        info,
        ExecuteMsg::DrawWinner {
            random_seed_hex: seed_hex(u128::MAX),
        },
    )
    .unwrap();

    let res = query(deps.as_ref(), mock_env(), QueryMsg::PoolState {}).unwrap();
    let state: PoolStateResponse = serde_json::from_slice(&res).unwrap();
    assert_eq!(state.winner.unwrap().address, alice);
}
