// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Utc;
use rust_decimal::Decimal;

use financeflow::models::{Category, TransactionType};
use financeflow::state::{AppState, NewTransaction};
use financeflow::store::{Store, TRANSACTIONS_KEY};

fn empty_state(store: &Store) -> AppState {
    store.save_slot(TRANSACTIONS_KEY, &Vec::<financeflow::models::Transaction>::new()).unwrap();
    store
        .save_slot(
            financeflow::store::ACCOUNTS_KEY,
            &Vec::<financeflow::models::Account>::new(),
        )
        .unwrap();
    AppState::load(store)
}

fn draft(amount: i64) -> NewTransaction {
    NewTransaction {
        amount: Decimal::from(amount),
        r#type: TransactionType::Expense,
        category: Category::Food,
        date: Utc::now(),
        description: "Groceries".to_string(),
    }
}

#[test]
fn add_transaction_prepends_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open_at(dir.path().to_path_buf()).unwrap();
    let mut state = empty_state(&store);

    state.add_transaction(&store, draft(10)).unwrap();
    let id = state.add_transaction(&store, draft(20)).unwrap().id.clone();

    assert_eq!(state.transactions.len(), 2);
    // Newest first.
    assert_eq!(state.transactions[0].id, id);
    assert_eq!(state.transactions[0].amount, Decimal::from(20));

    // A fresh load sees the same arrays.
    let reloaded = AppState::load(&store);
    assert_eq!(reloaded.transactions, state.transactions);
}

#[test]
fn assigned_ids_are_unique() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open_at(dir.path().to_path_buf()).unwrap();
    let mut state = empty_state(&store);

    let a = state.add_transaction(&store, draft(1)).unwrap().id.clone();
    let b = state.add_transaction(&store, draft(1)).unwrap().id.clone();
    assert_ne!(a, b);
}

#[test]
fn delete_transaction_filters_by_id() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open_at(dir.path().to_path_buf()).unwrap();
    let mut state = empty_state(&store);

    let id = state.add_transaction(&store, draft(10)).unwrap().id.clone();
    state.add_transaction(&store, draft(20)).unwrap();

    assert!(state.delete_transaction(&store, &id).unwrap());
    assert_eq!(state.transactions.len(), 1);
    assert!(state.transactions.iter().all(|t| t.id != id));

    // Unknown id is a no-op.
    assert!(!state.delete_transaction(&store, "nope").unwrap());
    assert_eq!(state.transactions.len(), 1);
}

#[test]
fn remove_account_filters_by_id() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open_at(dir.path().to_path_buf()).unwrap();
    let mut state = empty_state(&store);

    let account = financeflow::connect::connect_account(
        "Chase",
        financeflow::models::AccountType::Checking,
        "john@chase",
        std::time::Duration::ZERO,
    );
    let id = account.id.clone();
    state.add_account(&store, account).unwrap();
    assert_eq!(state.accounts.len(), 1);

    assert!(state.remove_account(&store, &id).unwrap());
    assert!(state.accounts.is_empty());
    assert!(!state.remove_account(&store, &id).unwrap());

    let reloaded = AppState::load(&store);
    assert!(reloaded.accounts.is_empty());
}
