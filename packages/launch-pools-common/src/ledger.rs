use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint256};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum LedgerError {
    #[error("contribution weight must be greater than zero")]
    InvalidWeight,

    #[error("cannot select a winner from an empty ledger")]
    NoParticipants,

    #[error("total ticket weight overflow")]
    Overflow,
}

/// One ticket range per contribution event.
///
/// `upper_bound` is the cumulative total of all weights recorded up to and
/// including this entry. Entry `i` covers winning tickets in
/// `[ranges[i-1].upper_bound, upper_bound)`, so its width equals the
/// contributed weight.
#[cw_serde]
pub struct TicketRange {
    pub owner: Addr,
    pub upper_bound: Uint256,
}

/// Append-only cumulative index of ticket ranges.
///
/// `upper_bound` is strictly increasing across `ranges` (every recorded
/// weight is non-zero), so the sequence is sorted without duplicates and
/// winner selection is a binary search. `total_weight` always equals the
/// last entry's `upper_bound`, maintained incrementally.
#[cw_serde]
pub struct TicketLedger {
    pub ranges: Vec<TicketRange>,
    pub total_weight: Uint256,
}

impl TicketLedger {
    pub fn new() -> Self {
        TicketLedger {
            ranges: Vec::new(),
            total_weight: Uint256::zero(),
        }
    }

    /// Append a contribution of `weight` tickets for `owner`.
    ///
    /// Repeat contributions by the same owner create separate entries; they
    /// are never merged. Rejects zero weight (a zero-width range would
    /// duplicate an `upper_bound` and break the search invariant) and
    /// rejects on cumulative overflow rather than wrapping. Either the full
    /// entry is appended or the ledger is left untouched.
    pub fn record_contribution(
        &mut self,
        owner: Addr,
        weight: Uint256,
    ) -> Result<TicketRange, LedgerError> {
        if weight.is_zero() {
            return Err(LedgerError::InvalidWeight);
        }

        let upper_bound = self
            .total_weight
            .checked_add(weight)
            .map_err(|_| LedgerError::Overflow)?;

        let range = TicketRange { owner, upper_bound };
        self.ranges.push(range.clone());
        self.total_weight = upper_bound;

        Ok(range)
    }

    /// Reduce a uniformly distributed 256-bit seed to a winning ticket in
    /// `[0, total_weight)`.
    pub fn winning_ticket(&self, random_seed: Uint256) -> Result<Uint256, LedgerError> {
        if self.ranges.is_empty() || self.total_weight.is_zero() {
            return Err(LedgerError::NoParticipants);
        }
        // total_weight > 0 whenever ranges is non-empty
        Ok(random_seed % self.total_weight)
    }

    /// Select the winning owner for a uniformly distributed 256-bit seed.
    ///
    /// Reduces the seed via [`Self::winning_ticket`], then binary searches
    /// for the lowest entry with `upper_bound > target`. A target landing
    /// exactly on an entry's `upper_bound` therefore belongs to the next
    /// entry. Selection probability is proportional to an owner's summed
    /// weight across all their entries.
    ///
    /// Pure: same ledger state and seed always yield the same owner. Also
    /// serves as the preview path, callable any number of times.
    pub fn select_winner(&self, random_seed: Uint256) -> Result<Addr, LedgerError> {
        let target = self.winning_ticket(random_seed)?;
        let index = self.ranges.partition_point(|r| r.upper_bound <= target);
        Ok(self.ranges[index].owner.clone())
    }

    /// Sum of `owner`'s range widths across all their entries.
    pub fn tickets_of(&self, owner: &Addr) -> Uint256 {
        let mut previous = Uint256::zero();
        let mut total = Uint256::zero();
        for range in &self.ranges {
            if range.owner == *owner {
                total += range.upper_bound - previous;
            }
            previous = range.upper_bound;
        }
        total
    }

    /// Number of recorded contributions (not distinct owners).
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl Default for TicketLedger {
    fn default() -> Self {
        Self::new()
    }
}
