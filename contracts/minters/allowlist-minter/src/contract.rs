#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    coins, to_json_binary, Addr, BankMsg, Binary, Coin, CosmosMsg, Deps, DepsMut, Env,
    HexBinary, MessageInfo, Reply, Response, StdResult, SubMsg, SubMsgResult, Uint128,
};
use cw2::{get_contract_version, set_contract_version};
use cw_ownable::Ownership;
use cw_utils::{may_pay, must_pay, nonpayable};
use minter_types::{
    check_collection_creation_fee, generate_create_denom_msg, generate_mint_message,
    CollectionDetails, Config, DiscountWindow, PriceSchedule, TokenDetails,
};
use semver::Version;

use crate::allowlist::is_allowlisted;
use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::{
    ACCESS, BENEFICIARY, COLLECTION, CONFIG, MINTED_COUNT, MINTED_TOKENS, TOKEN_DETAILS,
    TREASURY_BALANCE,
};
use crate::utils::validate_beneficiary;

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:omniflix-allowlist-minter";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const WITHDRAW_REPLY_ID: u64 = 1;

#[cfg(not(test))]
const CREATION_FEE: Uint128 = Uint128::new(0);
#[cfg(not(test))]
const CREATION_FEE_DENOM: &str = "";

#[cfg(test)]
pub const CREATION_FEE: Uint128 = Uint128::new(100_000_000);
#[cfg(test)]
pub const CREATION_FEE_DENOM: &str = "uflix";

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    // Unit tests cannot reach the onft module so the fee is fixed there
    let creation_fee = if CREATION_FEE.is_zero() {
        check_collection_creation_fee(deps.querier)?
    } else {
        Coin {
            denom: CREATION_FEE_DENOM.to_string(),
            amount: CREATION_FEE,
        }
    };
    let amount = must_pay(&info, &creation_fee.denom)?;
    // Exact amount must be paid
    if amount != creation_fee.amount {
        return Err(ContractError::InvalidCreationFee {
            expected: creation_fee.amount,
            sent: amount,
        });
    }

    msg.collection_details.check_integrity()?;
    msg.token_details.check_integrity()?;

    let config = Config {
        allowlist_root: msg.allowlist_root,
        mint_denom: msg.mint_denom,
        price_schedule: PriceSchedule {
            discounted_price: msg.discounted_price,
            regular_price: msg.regular_price,
        },
        // The discount window opens with the contract
        discount_window: DiscountWindow {
            start: env.block.time,
            duration: msg.discount_duration,
        },
        max_supply: msg.max_supply,
    };
    config.check_integrity()?;

    let beneficiary = validate_beneficiary(deps.api, &msg.beneficiary)?;

    ACCESS.initialize(deps.storage, deps.api, &info.sender)?;
    CONFIG.save(deps.storage, &config)?;
    COLLECTION.save(deps.storage, &msg.collection_details)?;
    TOKEN_DETAILS.save(deps.storage, &msg.token_details)?;
    MINTED_COUNT.save(deps.storage, &0)?;
    BENEFICIARY.save(deps.storage, &beneficiary)?;
    TREASURY_BALANCE.save(deps.storage, &Uint128::zero())?;

    let collection_creation_msg: CosmosMsg = generate_create_denom_msg(
        &msg.collection_details,
        &env.contract.address,
        creation_fee,
        &beneficiary,
    )
    .into();

    let res = Response::new()
        .add_message(collection_creation_msg)
        .add_attribute("action", "instantiate")
        .add_attribute("owner", info.sender)
        .add_attribute("beneficiary", beneficiary)
        .add_attribute("allowlist_root", config.allowlist_root.to_hex())
        .add_attribute("max_supply", config.max_supply.to_string())
        .add_attribute("discount_ends", config.discount_window.end().to_string());

    Ok(res)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Mint { proof } => execute_mint(deps, env, info, proof),
        ExecuteMsg::Pause {} => execute_pause(deps, env, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, env, info),
        ExecuteMsg::UpdateBeneficiaryAddress { address } => {
            execute_update_beneficiary_address(deps, env, info, address)
        }
        ExecuteMsg::Withdraw {} => execute_withdraw(deps, env, info),
    }
}

/// Issues one unit to the sender. Every check runs before the first write so
/// a rejected mint leaves storage untouched.
pub fn execute_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    proof: Vec<HexBinary>,
) -> Result<Response, ContractError> {
    ACCESS.error_if_paused(deps.storage)?;

    let config = CONFIG.load(deps.storage)?;
    let minted_count = MINTED_COUNT.load(deps.storage)?;
    if minted_count >= config.max_supply {
        return Err(ContractError::SupplyExhausted {
            max_supply: config.max_supply,
        });
    }
    if MINTED_TOKENS.has(deps.storage, &info.sender) {
        return Err(ContractError::AlreadyMinted {});
    }

    let is_member = is_allowlisted(deps.api, &config.allowlist_root, &info.sender, &proof);
    let price = config
        .price_schedule
        .cost(&config.discount_window, is_member, env.block.time);

    // Overpayment is accepted and kept by the treasury
    let paid = may_pay(&info, &config.mint_denom)?;
    if paid < price {
        return Err(ContractError::InsufficientFunds {
            required: price,
            sent: paid,
        });
    }
    let treasury_balance = TREASURY_BALANCE.load(deps.storage)?.checked_add(paid)?;

    let token_id = minted_count + 1;
    MINTED_COUNT.save(deps.storage, &token_id)?;
    MINTED_TOKENS.save(deps.storage, &info.sender, &token_id)?;
    TREASURY_BALANCE.save(deps.storage, &treasury_balance)?;

    let collection = COLLECTION.load(deps.storage)?;
    let token_details = TOKEN_DETAILS.load(deps.storage)?;
    let mint_msg: CosmosMsg = generate_mint_message(
        &collection,
        &token_details,
        token_id,
        &env.contract.address,
        &info.sender,
    )
    .into();

    let res = Response::new()
        .add_message(mint_msg)
        .add_attribute("action", "mint")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("recipient", info.sender)
        .add_attribute("collection_id", collection.id)
        .add_attribute("price", price.to_string())
        .add_attribute("paid", paid.to_string())
        .add_attribute("allowlisted", is_member.to_string());

    Ok(res)
}

pub fn execute_pause(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    ACCESS.pause(deps.storage, &info.sender)?;
    let res = Response::new().add_attribute("action", "pause");
    Ok(res)
}

pub fn execute_unpause(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    ACCESS.unpause(deps.storage, &info.sender)?;
    let res = Response::new().add_attribute("action", "unpause");
    Ok(res)
}

pub fn execute_update_beneficiary_address(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    ACCESS.error_if_not_owner(deps.storage, &info.sender)?;
    nonpayable(&info)?;

    let beneficiary = validate_beneficiary(deps.api, &address)?;
    let previous = BENEFICIARY.load(deps.storage)?;
    BENEFICIARY.save(deps.storage, &beneficiary)?;

    let res = Response::new()
        .add_attribute("action", "update_beneficiary_address")
        .add_attribute("previous", previous)
        .add_attribute("beneficiary", beneficiary);
    Ok(res)
}

/// Sends the whole treasury to the beneficiary. The balance is cleared here;
/// if the bank send fails the reply turns it into an error and the chain
/// reverts the whole call, balance included.
pub fn execute_withdraw(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    ACCESS.error_if_not_owner(deps.storage, &info.sender)?;
    nonpayable(&info)?;

    let config = CONFIG.load(deps.storage)?;
    let beneficiary = BENEFICIARY.load(deps.storage)?;
    let amount = TREASURY_BALANCE.load(deps.storage)?;

    let res = Response::new()
        .add_attribute("action", "withdraw")
        .add_attribute("beneficiary", beneficiary.to_string())
        .add_attribute("amount", amount.to_string());
    if amount.is_zero() {
        return Ok(res);
    }

    TREASURY_BALANCE.save(deps.storage, &Uint128::zero())?;
    let bank_msg = BankMsg::Send {
        to_address: beneficiary.into_string(),
        amount: coins(amount.u128(), config.mint_denom),
    };
    Ok(res.add_submessage(SubMsg::reply_on_error(bank_msg, WITHDRAW_REPLY_ID)))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(_deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        WITHDRAW_REPLY_ID => match msg.result {
            SubMsgResult::Err(reason) => Err(ContractError::TransferFailed { reason }),
            SubMsgResult::Ok(_) => Ok(Response::new()),
        },
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::InvalidMigration {
            contract: stored.contract,
        });
    }
    let stored_version = parse_version(&stored.version)?;
    let current_version = parse_version(CONTRACT_VERSION)?;
    if stored_version > current_version {
        return Err(ContractError::CannotMigrateToOlderVersion {
            stored: stored.version,
            current: CONTRACT_VERSION.to_string(),
        });
    }
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let res = Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION);
    Ok(res)
}

fn parse_version(version: &str) -> Result<Version, ContractError> {
    version
        .parse::<Version>()
        .map_err(|err| ContractError::InvalidVersion {
            version: version.to_string(),
            reason: err.to_string(),
        })
}

// Implement Queries
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps, env)?),
        QueryMsg::Collection {} => to_json_binary(&query_collection(deps, env)?),
        QueryMsg::TokenDetails {} => to_json_binary(&query_token_details(deps, env)?),
        QueryMsg::Cost { address, proof } => {
            to_json_binary(&query_cost(deps, env, address, proof)?)
        }
        QueryMsg::IsAllowlisted { address, proof } => {
            to_json_binary(&query_is_allowlisted(deps, env, address, proof)?)
        }
        QueryMsg::TotalMinted {} => to_json_binary(&query_total_minted(deps, env)?),
        QueryMsg::MintCount { address } => {
            to_json_binary(&query_mint_count(deps, env, address)?)
        }
        QueryMsg::IsPaused {} => to_json_binary(&query_is_paused(deps, env)?),
        QueryMsg::Owner {} => to_json_binary(&query_owner(deps, env)?),
        QueryMsg::Beneficiary {} => to_json_binary(&query_beneficiary(deps, env)?),
        QueryMsg::TreasuryBalance {} => to_json_binary(&query_treasury_balance(deps, env)?),
        QueryMsg::TokenUri { token_id } => {
            to_json_binary(&query_token_uri(deps, env, token_id)?)
        }
    }
}

fn query_config(deps: Deps, _env: Env) -> Result<Config, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config)
}

fn query_collection(deps: Deps, _env: Env) -> Result<CollectionDetails, ContractError> {
    let collection = COLLECTION.load(deps.storage)?;
    Ok(collection)
}

fn query_token_details(deps: Deps, _env: Env) -> Result<TokenDetails, ContractError> {
    let token_details = TOKEN_DETAILS.load(deps.storage)?;
    Ok(token_details)
}

// Same pricing path as minting, available while paused
fn query_cost(
    deps: Deps,
    env: Env,
    address: String,
    proof: Vec<HexBinary>,
) -> Result<Coin, ContractError> {
    let address = deps.api.addr_validate(&address)?;
    let config = CONFIG.load(deps.storage)?;
    let is_member = is_allowlisted(deps.api, &config.allowlist_root, &address, &proof);
    let price = config
        .price_schedule
        .cost(&config.discount_window, is_member, env.block.time);
    Ok(Coin {
        denom: config.mint_denom,
        amount: price,
    })
}

fn query_is_allowlisted(
    deps: Deps,
    _env: Env,
    address: String,
    proof: Vec<HexBinary>,
) -> Result<bool, ContractError> {
    let address = deps.api.addr_validate(&address)?;
    let config = CONFIG.load(deps.storage)?;
    Ok(is_allowlisted(
        deps.api,
        &config.allowlist_root,
        &address,
        &proof,
    ))
}

fn query_total_minted(deps: Deps, _env: Env) -> Result<u32, ContractError> {
    let total_minted = MINTED_COUNT.may_load(deps.storage)?.unwrap_or(0);
    Ok(total_minted)
}

fn query_mint_count(deps: Deps, _env: Env, address: String) -> Result<u32, ContractError> {
    let address = deps.api.addr_validate(&address)?;
    let minted = MINTED_TOKENS.has(deps.storage, &address);
    Ok(u32::from(minted))
}

fn query_is_paused(deps: Deps, _env: Env) -> Result<bool, ContractError> {
    let is_paused = ACCESS.is_paused(deps.storage)?;
    Ok(is_paused)
}

fn query_owner(deps: Deps, _env: Env) -> Result<Ownership<Addr>, ContractError> {
    let ownership = ACCESS.ownership(deps.storage)?;
    Ok(ownership)
}

fn query_beneficiary(deps: Deps, _env: Env) -> Result<Addr, ContractError> {
    let beneficiary = BENEFICIARY.load(deps.storage)?;
    Ok(beneficiary)
}

fn query_treasury_balance(deps: Deps, _env: Env) -> Result<Coin, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let balance = TREASURY_BALANCE.may_load(deps.storage)?.unwrap_or_default();
    Ok(Coin {
        denom: config.mint_denom,
        amount: balance,
    })
}

fn query_token_uri(deps: Deps, _env: Env, token_id: u32) -> Result<String, ContractError> {
    let minted_count = MINTED_COUNT.may_load(deps.storage)?.unwrap_or(0);
    if token_id == 0 || token_id > minted_count {
        return Err(ContractError::TokenNotMinted { token_id });
    }
    let token_details = TOKEN_DETAILS.load(deps.storage)?;
    Ok(token_details.token_uri)
}
