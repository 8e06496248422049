use anyhow::{bail, Result};
use cosmwasm_std::{from_json, to_json_binary, Addr, Api, Binary, BlockInfo, Querier, Storage};
use cw_multi_test::{error::AnyResult, AppResponse, CosmosRouter, Stargate};
use omniflix_std::types::omniflix::onft::v1beta1::{
    Collection, Denom, MsgCreateDenom, MsgMintOnft, Onft,
};
use omniflix_std::types::{
    cosmos::base::v1beta1::Coin,
    omniflix::onft::v1beta1::{Params, QueryParamsResponse},
};
use prost::Message;

pub const CREATE_DENOM_TYPE_URL: &str = "/OmniFlix.onft.v1beta1.MsgCreateDenom";
pub const MINT_ONFT_TYPE_URL: &str = "/OmniFlix.onft.v1beta1.MsgMintONFT";
pub const PARAMS_QUERY_PATH: &str = "/OmniFlix.onft.v1beta1.Query/Params";

pub const DENOM_CREATION_FEE_DENOM: &str = "uflix";
pub const DENOM_CREATION_FEE_AMOUNT: u128 = 1_000_000;

fn collection_key(creator: &str) -> String {
    format!("onft:collection:{}", creator)
}

/// Collection created by `creator`, with every onft minted into it so far.
pub fn load_collection(storage: &dyn Storage, creator: &str) -> Result<Option<Collection>> {
    match storage.get(collection_key(creator).as_bytes()) {
        Some(raw) => Ok(Some(from_json(raw)?)),
        None => Ok(None),
    }
}

fn save_collection(storage: &mut dyn Storage, creator: &str, collection: &Collection) -> Result<()> {
    storage.set(
        collection_key(creator).as_bytes(),
        to_json_binary(collection)?.as_slice(),
    );
    Ok(())
}

/// Stand-in for the onft module. Each contract owns at most one collection,
/// keyed by its address, and may only mint into it.
pub struct StargateKeeper {}

impl StargateKeeper {
    fn create_denom(storage: &mut dyn Storage, sender: &Addr, msg: MsgCreateDenom) -> Result<()> {
        if load_collection(storage, sender.as_str())?.is_some() {
            bail!("collection already exists for {}", sender);
        }
        let collection = Collection {
            denom: Some(Denom {
                creator: sender.to_string(),
                data: msg.data,
                name: msg.name,
                id: msg.id,
                preview_uri: msg.preview_uri,
                description: msg.description,
                schema: msg.schema,
                symbol: msg.symbol,
                uri: msg.uri,
                uri_hash: msg.uri_hash,
                royalty_receivers: msg.royalty_receivers,
            }),
            onfts: vec![],
        };
        save_collection(storage, sender.as_str(), &collection)
    }

    fn mint_onft(storage: &mut dyn Storage, sender: &Addr, msg: MsgMintOnft) -> Result<()> {
        let mut collection = match load_collection(storage, sender.as_str())? {
            Some(collection) => collection,
            None => bail!("no collection created by {}", sender),
        };
        if collection.onfts.iter().any(|onft| onft.id == msg.id) {
            bail!("onft {} already exists", msg.id);
        }
        collection.onfts.push(Onft {
            id: msg.id,
            created_at: None,
            nsfw: msg.nsfw,
            owner: msg.recipient,
            data: msg.data,
            transferable: msg.transferable,
            extensible: msg.extensible,
            metadata: msg.metadata,
            royalty_share: msg.royalty_share,
        });
        save_collection(storage, sender.as_str(), &collection)
    }
}

impl Stargate for StargateKeeper {
    fn execute<ExecC, QueryC>(
        &self,
        _api: &dyn Api,
        storage: &mut dyn Storage,
        _router: &dyn CosmosRouter<ExecC = ExecC, QueryC = QueryC>,
        _block: &BlockInfo,
        sender: Addr,
        type_url: String,
        value: Binary,
    ) -> AnyResult<AppResponse> {
        match type_url.as_str() {
            CREATE_DENOM_TYPE_URL => {
                let msg = MsgCreateDenom::decode(value.as_slice())?;
                Self::create_denom(storage, &sender, msg)?;
            }
            MINT_ONFT_TYPE_URL => {
                let msg = MsgMintOnft::decode(value.as_slice())?;
                Self::mint_onft(storage, &sender, msg)?;
            }
            _ => bail!("unsupported stargate message {}", type_url),
        }
        Ok(AppResponse::default())
    }

    fn query(
        &self,
        _api: &dyn Api,
        _storage: &dyn Storage,
        _querier: &dyn Querier,
        _block: &BlockInfo,
        path: String,
        _data: Binary,
    ) -> AnyResult<Binary> {
        if path == PARAMS_QUERY_PATH {
            let params = QueryParamsResponse {
                params: Some(Params {
                    denom_creation_fee: Some(Coin {
                        denom: DENOM_CREATION_FEE_DENOM.to_string(),
                        amount: DENOM_CREATION_FEE_AMOUNT.to_string(),
                    }),
                }),
            };
            return Ok(to_json_binary(&params)?);
        }
        bail!("unsupported stargate query {}", path)
    }
}
