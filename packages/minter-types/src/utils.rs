use crate::collection_details::CollectionDetails;
use crate::token_details::TokenDetails;
use cosmwasm_std::{Addr, Coin, Decimal, QuerierWrapper, StdError, Uint128};
use omniflix_std::types::omniflix::onft::v1beta1::{
    Metadata, MsgCreateDenom, MsgMintOnft, OnftQuerier, WeightedAddress,
};
use std::str::FromStr;

/// Builds the onft mint for one unit. Every unit shares the collection's
/// token uri, only the name carries the token id.
pub fn generate_mint_message(
    collection: &CollectionDetails,
    token_details: &TokenDetails,
    token_id: u32,
    minter_address: &Addr,
    recipient: &Addr,
) -> MsgMintOnft {
    let metadata = Metadata {
        name: format!("{} #{}", token_details.token_name, token_id),
        description: token_details.description.clone().unwrap_or_default(),
        media_uri: token_details.token_uri.clone(),
        preview_uri: token_details
            .preview_uri
            .clone()
            .unwrap_or_else(|| token_details.token_uri.clone()),
        uri_hash: collection.uri_hash.clone().unwrap_or_default(),
    };

    MsgMintOnft {
        data: token_details.data.clone().unwrap_or_default(),
        id: token_id.to_string(),
        metadata: Some(metadata),
        denom_id: collection.id.clone(),
        transferable: token_details.transferable,
        sender: minter_address.to_string(),
        extensible: token_details.extensible,
        nsfw: token_details.nsfw,
        recipient: recipient.to_string(),
        // Secondary market royalties are not handled by this minter
        royalty_share: Decimal::zero().atomics().to_string(),
    }
}

pub fn generate_create_denom_msg(
    collection: &CollectionDetails,
    minter_address: &Addr,
    creation_fee: Coin,
    beneficiary: &Addr,
) -> MsgCreateDenom {
    MsgCreateDenom {
        creation_fee: Some(creation_fee.into()),
        id: collection.id.clone(),
        symbol: collection.symbol.clone(),
        name: collection.collection_name.clone(),
        description: collection.description.clone().unwrap_or_default(),
        preview_uri: collection.preview_uri.clone().unwrap_or_default(),
        schema: collection.schema.clone().unwrap_or_default(),
        sender: minter_address.to_string(),
        uri: collection.uri.clone().unwrap_or_default(),
        uri_hash: collection.uri_hash.clone().unwrap_or_default(),
        data: collection.data.clone().unwrap_or_default(),
        // The onft module requires at least one receiver
        royalty_receivers: vec![WeightedAddress {
            address: beneficiary.to_string(),
            weight: Decimal::one().atomics().to_string(),
        }],
    }
}

pub fn check_collection_creation_fee(querier: QuerierWrapper) -> Result<Coin, StdError> {
    let onft_querier = OnftQuerier::new(&querier);
    let params = onft_querier.params()?;
    let creation_fee = params
        .params
        .and_then(|params| params.denom_creation_fee)
        .ok_or_else(|| StdError::not_found("denom creation fee"))?;
    Ok(Coin {
        denom: creation_fee.denom,
        amount: Uint128::from_str(&creation_fee.amount)?,
    })
}
