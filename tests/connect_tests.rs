// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::time::Duration;

use rust_decimal::Decimal;

use financeflow::connect::connect_account;
use financeflow::models::AccountType;

#[test]
fn fabricated_balance_stays_in_range() {
    for _ in 0..50 {
        let account = connect_account("Chase", AccountType::Checking, "john@chase", Duration::ZERO);
        assert!(account.balance >= Decimal::from(500));
        assert!(account.balance < Decimal::from(15500));
    }
}

#[test]
fn account_is_named_after_institution_and_type() {
    let account = connect_account("Ally", AccountType::Savings, "jane@ally", Duration::ZERO);
    assert_eq!(account.name, "Ally Savings");
    assert_eq!(account.institution, "Ally");
    assert_eq!(account.identifier, "jane@ally");
    assert_eq!(account.r#type, AccountType::Savings);
}

#[test]
fn connected_liability_classifies_as_debt() {
    let account = connect_account("Chase", AccountType::Credit, "xxx-4242", Duration::ZERO);
    assert!(account.r#type.is_liability());
    assert!(!account.r#type.is_asset());
}
