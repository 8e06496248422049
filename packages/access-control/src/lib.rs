use cosmwasm_std::{Addr, Api, StdError, Storage};
use cw_ownable::Ownership;
use cw_storage_plus::Item;
use thiserror::Error;

pub const PAUSED_KEY: &str = "paused";

#[derive(Error, Debug, PartialEq)]
pub enum AccessError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error("contract is paused")]
    ContractPaused {},

    #[error("caller is not the owner")]
    NotOwner {},
}

/// Owner gate plus pause switch. The owner is written once through
/// cw-ownable at instantiation and never transferred.
pub struct AccessState<'a> {
    pub paused: Item<'a, bool>,
}

impl<'a> AccessState<'a> {
    pub const fn new(paused_key: &'a str) -> Self {
        AccessState {
            paused: Item::new(paused_key),
        }
    }

    /// Records the owner and starts unpaused.
    pub fn initialize(
        &self,
        storage: &mut dyn Storage,
        api: &dyn Api,
        owner: &Addr,
    ) -> Result<(), AccessError> {
        cw_ownable::initialize_owner(storage, api, Some(owner.as_str()))?;
        self.paused.save(storage, &false)?;
        Ok(())
    }

    pub fn ownership(&self, storage: &dyn Storage) -> Result<Ownership<Addr>, AccessError> {
        Ok(cw_ownable::get_ownership(storage)?)
    }

    /// Errors unless `sender` is the owner. Callers run this before looking
    /// at any other state.
    pub fn error_if_not_owner(
        &self,
        storage: &dyn Storage,
        sender: &Addr,
    ) -> Result<(), AccessError> {
        let ownership = self.ownership(storage)?;
        if ownership.owner.as_ref() != Some(sender) {
            return Err(AccessError::NotOwner {});
        }
        Ok(())
    }

    /// Errors if the contract is paused, does nothing otherwise.
    pub fn error_if_paused(&self, storage: &dyn Storage) -> Result<(), AccessError> {
        if self.is_paused(storage)? {
            Err(AccessError::ContractPaused {})
        } else {
            Ok(())
        }
    }

    /// Pausing an already paused contract only reasserts the flag.
    pub fn pause(&self, storage: &mut dyn Storage, sender: &Addr) -> Result<(), AccessError> {
        self.error_if_not_owner(storage, sender)?;
        self.paused.save(storage, &true)?;
        Ok(())
    }

    pub fn unpause(&self, storage: &mut dyn Storage, sender: &Addr) -> Result<(), AccessError> {
        self.error_if_not_owner(storage, sender)?;
        self.paused.save(storage, &false)?;
        Ok(())
    }

    pub fn is_paused(&self, storage: &dyn Storage) -> Result<bool, AccessError> {
        let is_paused = self.paused.may_load(storage)?.unwrap_or(false);
        Ok(is_paused)
    }
}
