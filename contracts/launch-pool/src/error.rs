use cosmwasm_std::{StdError, Uint128};
use launch_pools_common::LedgerError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Ledger(#[from] LedgerError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("funding denom must not be empty")]
    InvalidDenom,

    #[error("end time {end_time} is not in the future (current time {now})")]
    InvalidEndTime { end_time: u64, now: u64 },

    #[error("no {denom} sent with contribution")]
    NoFundsSent { denom: String },

    #[error("must send exactly one coin")]
    InvalidFunds,

    #[error("must contribute {expected}, got {denom}")]
    WrongDenom { expected: String, denom: String },

    #[error("contribution {amount} is below minimum {minimum}")]
    ContributionBelowMinimum { amount: Uint128, minimum: Uint128 },

    #[error("pool is not accepting contributions")]
    PoolNotOpen,

    #[error("pool ended at {end_time} and no longer accepts contributions")]
    PoolEnded { end_time: u64 },

    #[error("pool must be closed before drawing a winner")]
    PoolNotClosed,

    #[error("winner has already been drawn")]
    WinnerAlreadyDrawn,

    #[error("invalid hex: {field}")]
    InvalidHex { field: String },

    #[error("random seed must be 32 bytes, got {got}")]
    InvalidSeedLength { got: usize },
}
