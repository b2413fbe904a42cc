use cosmwasm_schema::cw_serde;

/// The lifecycle phase of a launch pool.
///
/// Contributions are only accepted while `Open`. The pool becomes read-only
/// once `Closed`, and `Drawn` after the one-shot winner selection.
#[cw_serde]
pub enum PoolPhase {
    Open,
    Closed,
    Drawn,
}
