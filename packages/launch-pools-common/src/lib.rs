pub mod ledger;
pub mod types;

pub use ledger::{LedgerError, TicketLedger, TicketRange};
pub use types::PoolPhase;
