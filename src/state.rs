// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{Account, Category, Transaction, TransactionType};
use crate::seed;
use crate::store::{LoadOutcome, Store, ACCOUNTS_KEY, TRANSACTIONS_KEY};

/// Input for a new transaction; the id is assigned on insert.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub amount: Decimal,
    pub r#type: TransactionType,
    pub category: Category,
    pub date: DateTime<Utc>,
    pub description: String,
}

/// Single owner of the two persisted arrays. All mutation goes through the
/// command methods below; each one replaces the full array and saves the
/// affected slot before returning.
pub struct AppState {
    pub transactions: Vec<Transaction>,
    pub accounts: Vec<Account>,
}

impl AppState {
    pub fn load(store: &Store) -> Self {
        let (transactions, tx_outcome) =
            store.load_slot(TRANSACTIONS_KEY, seed::seed_transactions());
        let (accounts, acct_outcome) = store.load_slot(ACCOUNTS_KEY, seed::seed_accounts());
        if tx_outcome != LoadOutcome::Stored {
            tracing::debug!(?tx_outcome, "transactions slot not loaded, seeded defaults");
        }
        if acct_outcome != LoadOutcome::Stored {
            tracing::debug!(?acct_outcome, "accounts slot not loaded, seeded defaults");
        }
        AppState {
            transactions,
            accounts,
        }
    }

    pub fn add_transaction(&mut self, store: &Store, new: NewTransaction) -> Result<&Transaction> {
        let t = Transaction {
            id: Uuid::new_v4().to_string(),
            amount: new.amount,
            r#type: new.r#type,
            category: new.category,
            date: new.date,
            description: new.description,
        };
        // Newest first, matching list order.
        self.transactions.insert(0, t);
        store.save_slot(TRANSACTIONS_KEY, &self.transactions)?;
        Ok(&self.transactions[0])
    }

    /// Unknown ids are a no-op; the filter semantics make that free.
    pub fn delete_transaction(&mut self, store: &Store, id: &str) -> Result<bool> {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        let removed = self.transactions.len() != before;
        if removed {
            store.save_slot(TRANSACTIONS_KEY, &self.transactions)?;
        }
        Ok(removed)
    }

    pub fn add_account(&mut self, store: &Store, account: Account) -> Result<()> {
        self.accounts.push(account);
        store.save_slot(ACCOUNTS_KEY, &self.accounts)?;
        Ok(())
    }

    pub fn remove_account(&mut self, store: &Store, id: &str) -> Result<bool> {
        let before = self.accounts.len();
        self.accounts.retain(|a| a.id != id);
        let removed = self.accounts.len() != before;
        if removed {
            store.save_slot(ACCOUNTS_KEY, &self.accounts)?;
        }
        Ok(removed)
    }
}
