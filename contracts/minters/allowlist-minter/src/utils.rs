use cosmwasm_std::{Addr, Api};

use crate::error::ContractError;

/// Validates a payout address. Empty input, anything the chain would not
/// accept, and the all-zero address are rejected.
pub fn validate_beneficiary(api: &dyn Api, address: &str) -> Result<Addr, ContractError> {
    let invalid = || ContractError::InvalidAddress {
        address: address.to_string(),
    };
    if address.trim().is_empty() {
        return Err(invalid());
    }
    let addr = api.addr_validate(address).map_err(|_| invalid())?;
    let canonical = api.addr_canonicalize(addr.as_str()).map_err(|_| invalid())?;
    if canonical.as_slice().iter().all(|byte| *byte == 0) {
        return Err(invalid());
    }
    Ok(addr)
}
