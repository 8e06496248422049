use access_control::{AccessState, PAUSED_KEY};
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

use minter_types::{CollectionDetails, Config, TokenDetails};

pub const CONFIG: Item<Config> = Item::new("config");
pub const COLLECTION: Item<CollectionDetails> = Item::new("collection");
pub const TOKEN_DETAILS: Item<TokenDetails> = Item::new("token_details");
// Issued units, also the last issued token id
pub const MINTED_COUNT: Item<u32> = Item::new("minted_count");
// Address and the token id it minted. Presence means the address used its one mint
pub const MINTED_TOKENS: Map<&Addr, u32> = Map::new("minted_tokens");
pub const BENEFICIARY: Item<Addr> = Item::new("beneficiary");
// Payments collected by mints and not yet withdrawn
pub const TREASURY_BALANCE: Item<Uint128> = Item::new("treasury_balance");

pub const ACCESS: AccessState = AccessState::new(PAUSED_KEY);
