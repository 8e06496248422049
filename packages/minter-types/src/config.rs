use cosmwasm_schema::cw_serde;
use cosmwasm_std::{HexBinary, Uint128};
use thiserror::Error;

use crate::pricing::{DiscountWindow, PriceSchedule};

pub const ALLOWLIST_ROOT_LENGTH: usize = 32;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigurationError {
    #[error("Invalid mint price")]
    InvalidMintPrice {},
    #[error("Discounted price {discounted_price} exceeds regular price {regular_price}")]
    InvalidPriceSchedule {
        discounted_price: Uint128,
        regular_price: Uint128,
    },
    #[error("Invalid mint denom")]
    InvalidMintDenom {},
    #[error("Invalid max supply")]
    InvalidMaxSupply {},
    #[error("Allowlist root must be {expected} bytes, got {actual}")]
    InvalidAllowlistRoot { expected: usize, actual: usize },
}

/// Immutable minting configuration, fixed at instantiation.
#[cw_serde]
pub struct Config {
    pub allowlist_root: HexBinary,
    pub mint_denom: String,
    pub price_schedule: PriceSchedule,
    pub discount_window: DiscountWindow,
    pub max_supply: u32,
}

impl Config {
    pub fn check_integrity(&self) -> Result<(), ConfigurationError> {
        if self.allowlist_root.len() != ALLOWLIST_ROOT_LENGTH {
            return Err(ConfigurationError::InvalidAllowlistRoot {
                expected: ALLOWLIST_ROOT_LENGTH,
                actual: self.allowlist_root.len(),
            });
        }
        if self.mint_denom.trim().is_empty() {
            return Err(ConfigurationError::InvalidMintDenom {});
        }
        if self.max_supply == 0 {
            return Err(ConfigurationError::InvalidMaxSupply {});
        }
        self.price_schedule.check_integrity()
    }
}
