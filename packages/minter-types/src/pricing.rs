use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Timestamp, Uint128};

use crate::config::ConfigurationError;

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Interval after instantiation during which allowlisted addresses pay the
/// discounted price.
#[cw_serde]
pub struct DiscountWindow {
    pub start: Timestamp,
    // Seconds
    pub duration: u64,
}

impl DiscountWindow {
    /// Open while `now - start < duration`. At exactly `duration` the window
    /// is closed. A clock reading before `start` counts as no time elapsed.
    pub fn is_open(&self, now: Timestamp) -> bool {
        let elapsed = now.nanos().saturating_sub(self.start.nanos());
        elapsed < self.duration.saturating_mul(NANOS_PER_SECOND)
    }

    /// First instant at which the window is closed. Saturates at the maximum
    /// timestamp for durations past the representable range.
    pub fn end(&self) -> Timestamp {
        Timestamp::from_nanos(
            self.start
                .nanos()
                .saturating_add(self.duration.saturating_mul(NANOS_PER_SECOND)),
        )
    }
}

#[cw_serde]
pub struct PriceSchedule {
    pub discounted_price: Uint128,
    pub regular_price: Uint128,
}

impl PriceSchedule {
    pub fn check_integrity(&self) -> Result<(), ConfigurationError> {
        if self.regular_price.is_zero() {
            return Err(ConfigurationError::InvalidMintPrice {});
        }
        if self.discounted_price > self.regular_price {
            return Err(ConfigurationError::InvalidPriceSchedule {
                discounted_price: self.discounted_price,
                regular_price: self.regular_price,
            });
        }
        Ok(())
    }

    /// Price owed for one unit. Evaluated from scratch on every call.
    pub fn cost(&self, window: &DiscountWindow, is_member: bool, now: Timestamp) -> Uint128 {
        if is_member && window.is_open(now) {
            self.discounted_price
        } else {
            self.regular_price
        }
    }
}
