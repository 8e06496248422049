use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin, HexBinary, Uint128};
use cw_ownable::Ownership;
use minter_types::{CollectionDetails, Config, TokenDetails};

#[cw_serde]
pub struct InstantiateMsg {
    pub collection_details: CollectionDetails,
    pub token_details: TokenDetails,
    // Root of the sorted-pair sha256 tree over allowlisted addresses
    pub allowlist_root: HexBinary,
    pub mint_denom: String,
    pub discounted_price: Uint128,
    pub regular_price: Uint128,
    pub beneficiary: String,
    // Seconds after instantiation during which allowlisted addresses get the discount
    pub discount_duration: u64,
    pub max_supply: u32,
}

#[cw_serde]
pub enum ExecuteMsg {
    // Proof may be empty for addresses paying the regular price
    Mint { proof: Vec<HexBinary> },
    Pause {},
    Unpause {},
    UpdateBeneficiaryAddress { address: String },
    Withdraw {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},
    #[returns(CollectionDetails)]
    Collection {},
    #[returns(TokenDetails)]
    TokenDetails {},
    // Price the address would pay right now with this proof
    #[returns(Coin)]
    Cost {
        address: String,
        proof: Vec<HexBinary>,
    },
    #[returns(bool)]
    IsAllowlisted {
        address: String,
        proof: Vec<HexBinary>,
    },
    #[returns(u32)]
    TotalMinted {},
    #[returns(u32)]
    MintCount { address: String },
    #[returns(bool)]
    IsPaused {},
    #[returns(Ownership<Addr>)]
    Owner {},
    #[returns(Addr)]
    Beneficiary {},
    #[returns(Coin)]
    TreasuryBalance {},
    #[returns(String)]
    TokenUri { token_id: u32 },
}

#[cw_serde]
pub struct MigrateMsg {}
