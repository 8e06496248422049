use access_control::AccessError;
use cosmwasm_std::{OverflowError, StdError, Uint128};
use cw_utils::PaymentError;
use minter_types::{CollectionDetailsError, ConfigurationError, TokenDetailsError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    ConfigurationError(#[from] ConfigurationError),

    #[error(transparent)]
    CollectionDetailsError(#[from] CollectionDetailsError),

    #[error(transparent)]
    TokenDetailsError(#[from] TokenDetailsError),

    #[error("Payment error")]
    PaymentError(#[from] PaymentError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Invalid creation fee")]
    InvalidCreationFee { expected: Uint128, sent: Uint128 },

    #[error("Max supply of {max_supply} reached")]
    SupplyExhausted { max_supply: u32 },

    #[error("Address has already minted")]
    AlreadyMinted {},

    #[error("Insufficient funds: required {required}, sent {sent}")]
    InsufficientFunds { required: Uint128, sent: Uint128 },

    #[error("Invalid address: {address}")]
    InvalidAddress { address: String },

    #[error("Transfer to beneficiary failed: {reason}")]
    TransferFailed { reason: String },

    #[error("Token {token_id} has not been minted")]
    TokenNotMinted { token_id: u32 },

    #[error("Unknown reply id {id}")]
    UnknownReplyId { id: u64 },

    #[error("Cannot migrate from contract {contract}")]
    InvalidMigration { contract: String },

    #[error("Invalid contract version {version}: {reason}")]
    InvalidVersion { version: String, reason: String },

    #[error("Cannot migrate from version {stored} to older version {current}")]
    CannotMigrateToOlderVersion { stored: String, current: String },
}

impl From<ContractError> for StdError {
    fn from(err: ContractError) -> StdError {
        StdError::generic_err(err.to_string())
    }
}
