use cosmwasm_std::{Addr, Coin, HexBinary, Timestamp, Uint128};
use cw_multi_test::{BankSudo, Executor, SudoMsg};
use merkle_allowlist::MerkleTree;
use omniflix_allowlist_minter::allowlist::allowlist_leaf;
use omniflix_allowlist_minter::error::ContractError;
use omniflix_allowlist_minter::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use omniflix_std::types::omniflix::onft::v1beta1::Collection;
use omniflix_testing::app::OmniflixApp;
use omniflix_testing::stargate::{
    load_collection, DENOM_CREATION_FEE_AMOUNT, DENOM_CREATION_FEE_DENOM,
};

use crate::helpers::setup::DENOM;

pub fn mint_to_address(app: &mut OmniflixApp, to_address: String, amount: Vec<Coin>) {
    app.sudo(SudoMsg::Bank(BankSudo::Mint { to_address, amount }))
        .unwrap();
}

/// Tree over `members` using the same leaf encoding as the contract.
pub fn build_allowlist(app: &OmniflixApp, members: &[Addr]) -> MerkleTree {
    let leaves = members
        .iter()
        .map(|member| allowlist_leaf(app.api(), member).unwrap())
        .collect();
    MerkleTree::new(leaves).unwrap()
}

pub fn proof_for(tree: &MerkleTree, index: usize) -> Vec<HexBinary> {
    tree.proof(index)
        .unwrap()
        .into_iter()
        .map(HexBinary::from)
        .collect()
}

pub fn creation_fee() -> Vec<Coin> {
    vec![Coin::new(DENOM_CREATION_FEE_AMOUNT, DENOM_CREATION_FEE_DENOM)]
}

pub fn instantiate_minter(
    app: &mut OmniflixApp,
    code_id: u64,
    owner: &Addr,
    msg: &InstantiateMsg,
) -> Addr {
    app.instantiate_contract(
        code_id,
        owner.clone(),
        msg,
        &creation_fee(),
        "allowlist-minter",
        None,
    )
    .unwrap()
}

pub fn mint(
    app: &mut OmniflixApp,
    minter: &Addr,
    sender: &Addr,
    proof: Vec<HexBinary>,
    funds: &[Coin],
) -> anyhow::Result<cw_multi_test::AppResponse> {
    app.execute_contract(
        sender.clone(),
        minter.clone(),
        &ExecuteMsg::Mint { proof },
        funds,
    )
}

/// First contract error found anywhere in the failure chain.
pub fn contract_error(error: &anyhow::Error) -> &ContractError {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<ContractError>())
        .unwrap()
}

/// Errors raised from a reply handler reach the caller as plain messages, so
/// they can only be matched by their rendered text.
pub fn error_chain_contains(error: &anyhow::Error, text: &str) -> bool {
    error.chain().any(|cause| cause.to_string().contains(text))
}

pub fn set_block_time(app: &mut OmniflixApp, time: Timestamp) {
    app.update_block(|block| block.time = time);
}

pub fn query_total_minted(app: &OmniflixApp, minter: &Addr) -> u32 {
    app.wrap()
        .query_wasm_smart(minter, &QueryMsg::TotalMinted {})
        .unwrap()
}

pub fn query_treasury_balance(app: &OmniflixApp, minter: &Addr) -> Uint128 {
    let balance: Coin = app
        .wrap()
        .query_wasm_smart(minter, &QueryMsg::TreasuryBalance {})
        .unwrap();
    balance.amount
}

pub fn query_cost(
    app: &OmniflixApp,
    minter: &Addr,
    address: &Addr,
    proof: Vec<HexBinary>,
) -> Uint128 {
    let cost: Coin = app
        .wrap()
        .query_wasm_smart(
            minter,
            &QueryMsg::Cost {
                address: address.to_string(),
                proof,
            },
        )
        .unwrap();
    cost.amount
}

pub fn query_bank_balance(app: &OmniflixApp, address: &Addr) -> Uint128 {
    app.wrap().query_balance(address, DENOM).unwrap().amount
}

pub fn query_onft_collection(app: &OmniflixApp, minter: &Addr) -> Collection {
    load_collection(app.storage(), minter.as_str())
        .unwrap()
        .unwrap()
}
