use access_control::AccessError;
use cosmwasm_std::{coin, Addr, HexBinary, Uint128};
use cw_multi_test::Executor;
use omniflix_allowlist_minter::error::ContractError;
use omniflix_allowlist_minter::msg::{ExecuteMsg, QueryMsg};

use crate::helpers::mock_messages::minter_mock_messages::{
    return_minter_instantiate_msg, DISCOUNTED_PRICE, REGULAR_PRICE,
};
use crate::helpers::setup::{setup, DENOM};
use crate::helpers::utils::{
    build_allowlist, contract_error, error_chain_contains, instantiate_minter, mint, proof_for,
    query_bank_balance, query_treasury_balance,
};

#[test]
fn withdraw_to_beneficiary() {
    let res = setup();
    let owner = res.test_accounts.owner;
    let beneficiary = res.test_accounts.beneficiary;
    let members = res.test_accounts.members;
    let outsider = res.test_accounts.outsider;
    let mut app = res.app;

    let tree = build_allowlist(&app, &members);
    let msg = return_minter_instantiate_msg(HexBinary::from(tree.root()));
    let minter = instantiate_minter(&mut app, res.minter_code_id, &owner, &msg);

    // Nothing collected yet
    let res = app
        .execute_contract(owner.clone(), minter.clone(), &ExecuteMsg::Withdraw {}, &[])
        .unwrap();
    assert!(!res.events.iter().any(|e| e.ty == "transfer"));
    assert_eq!(query_bank_balance(&app, &beneficiary), Uint128::zero());

    mint(
        &mut app,
        &minter,
        &members[0],
        proof_for(&tree, 0),
        &[coin(DISCOUNTED_PRICE, DENOM)],
    )
    .unwrap();
    // Overpayment is kept
    mint(
        &mut app,
        &minter,
        &outsider,
        vec![],
        &[coin(REGULAR_PRICE + 50, DENOM)],
    )
    .unwrap();
    let collected = Uint128::new(DISCOUNTED_PRICE + REGULAR_PRICE + 50);
    assert_eq!(query_treasury_balance(&app, &minter), collected);

    let error = app
        .execute_contract(outsider.clone(), minter.clone(), &ExecuteMsg::Withdraw {}, &[])
        .unwrap_err();
    assert_eq!(
        contract_error(&error),
        &ContractError::Access(AccessError::NotOwner {})
    );

    let error = app
        .execute_contract(
            owner.clone(),
            minter.clone(),
            &ExecuteMsg::Withdraw {},
            &[coin(1, DENOM)],
        )
        .unwrap_err();
    assert_eq!(
        contract_error(&error),
        &ContractError::PaymentError(cw_utils::PaymentError::NonPayable {})
    );

    let res = app
        .execute_contract(owner.clone(), minter.clone(), &ExecuteMsg::Withdraw {}, &[])
        .unwrap();
    let wasm_event = res.events.iter().find(|e| e.ty == "wasm").unwrap();
    assert!(wasm_event
        .attributes
        .iter()
        .any(|attr| attr.key == "amount" && attr.value == collected.to_string()));

    assert_eq!(query_bank_balance(&app, &beneficiary), collected);
    assert_eq!(query_treasury_balance(&app, &minter), Uint128::zero());
    // Creation fee was never part of the treasury
    assert_eq!(query_bank_balance(&app, &minter), Uint128::new(1_000_000));
}

#[test]
fn failed_transfer_rolls_back_withdraw() {
    let res = setup();
    let owner = res.test_accounts.owner;
    let beneficiary = res.test_accounts.beneficiary;
    let members = res.test_accounts.members;
    let mut app = res.app;

    let tree = build_allowlist(&app, &members);
    let msg = return_minter_instantiate_msg(HexBinary::from(tree.root()));
    let minter = instantiate_minter(&mut app, res.minter_code_id, &owner, &msg);

    mint(
        &mut app,
        &minter,
        &members[0],
        proof_for(&tree, 0),
        &[coin(DISCOUNTED_PRICE, DENOM)],
    )
    .unwrap();

    // Drain the contract's bank balance behind its back
    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &minter, vec![])
            .unwrap()
    });

    let error = app
        .execute_contract(owner.clone(), minter.clone(), &ExecuteMsg::Withdraw {}, &[])
        .unwrap_err();
    assert!(error_chain_contains(
        &error,
        &ContractError::TransferFailed {
            reason: String::new()
        }
        .to_string()
    ));

    // Tracked balance is untouched and nothing reached the beneficiary
    assert_eq!(
        query_treasury_balance(&app, &minter),
        Uint128::new(DISCOUNTED_PRICE)
    );
    assert_eq!(query_bank_balance(&app, &beneficiary), Uint128::zero());
}

#[test]
fn update_beneficiary_address() {
    let res = setup();
    let owner = res.test_accounts.owner;
    let members = res.test_accounts.members;
    let outsider = res.test_accounts.outsider;
    let mut app = res.app;

    let tree = build_allowlist(&app, &members);
    let msg = return_minter_instantiate_msg(HexBinary::from(tree.root()));
    let minter = instantiate_minter(&mut app, res.minter_code_id, &owner, &msg);

    let error = app
        .execute_contract(
            outsider.clone(),
            minter.clone(),
            &ExecuteMsg::UpdateBeneficiaryAddress {
                address: outsider.to_string(),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        contract_error(&error),
        &ContractError::Access(AccessError::NotOwner {})
    );

    let error = app
        .execute_contract(
            owner.clone(),
            minter.clone(),
            &ExecuteMsg::UpdateBeneficiaryAddress {
                address: "".to_string(),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        contract_error(&error),
        &ContractError::InvalidAddress {
            address: "".to_string()
        }
    );

    let new_beneficiary = Addr::unchecked("treasury");
    app.execute_contract(
        owner.clone(),
        minter.clone(),
        &ExecuteMsg::UpdateBeneficiaryAddress {
            address: new_beneficiary.to_string(),
        },
        &[],
    )
    .unwrap();
    let beneficiary: Addr = app
        .wrap()
        .query_wasm_smart(&minter, &QueryMsg::Beneficiary {})
        .unwrap();
    assert_eq!(beneficiary, new_beneficiary);

    mint(
        &mut app,
        &minter,
        &members[2],
        proof_for(&tree, 2),
        &[coin(DISCOUNTED_PRICE, DENOM)],
    )
    .unwrap();
    app.execute_contract(owner.clone(), minter.clone(), &ExecuteMsg::Withdraw {}, &[])
        .unwrap();
    assert_eq!(
        query_bank_balance(&app, &new_beneficiary),
        Uint128::new(DISCOUNTED_PRICE)
    );
}
