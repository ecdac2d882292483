// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Starter data used whenever a storage slot is missing or corrupt, dated
//! within the current month so the dashboard has something to show.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::models::{Account, AccountType, Category, Transaction, TransactionType};

fn this_month(day: u32) -> DateTime<Utc> {
    let now = Utc::now();
    Utc.with_ymd_and_hms(now.year(), now.month(), day, 12, 0, 0)
        .single()
        .unwrap_or(now)
}

pub fn seed_transactions() -> Vec<Transaction> {
    let rows: [(u32, i64, TransactionType, Category, &str); 6] = [
        (1, 5000, TransactionType::Income, Category::Salary, "Monthly Salary"),
        (2, 1200, TransactionType::Expense, Category::Housing, "Rent Payment"),
        (5, 150, TransactionType::Expense, Category::Utilities, "Electric Bill"),
        (10, 400, TransactionType::Expense, Category::Food, "Groceries"),
        (12, 100, TransactionType::Expense, Category::Entertainment, "Movie Night"),
        (15, 50, TransactionType::Expense, Category::Transportation, "Uber"),
    ];
    rows.iter()
        .enumerate()
        .map(|(i, &(day, amount, r#type, category, desc))| Transaction {
            id: (i + 1).to_string(),
            amount: Decimal::from(amount),
            r#type,
            category,
            date: this_month(day),
            description: desc.to_string(),
        })
        .collect()
}

pub fn seed_accounts() -> Vec<Account> {
    let now = Utc::now();
    vec![
        Account {
            id: "acc_1".to_string(),
            name: "Primary Checking".to_string(),
            institution: "Chase".to_string(),
            r#type: AccountType::Checking,
            balance: Decimal::new(450050, 2),
            identifier: "john.doe@chase".to_string(),
            last_synced: now,
        },
        Account {
            id: "acc_2".to_string(),
            name: "High Yield Savings".to_string(),
            institution: "Ally".to_string(),
            r#type: AccountType::Savings,
            balance: Decimal::from(12000),
            identifier: "john.savings@ally".to_string(),
            last_synced: now,
        },
        Account {
            id: "acc_3".to_string(),
            name: "Sapphire Preferred".to_string(),
            institution: "Chase".to_string(),
            r#type: AccountType::Credit,
            balance: Decimal::from(1250),
            identifier: "xxx-xxx-4242".to_string(),
            last_synced: now,
        },
    ]
}
