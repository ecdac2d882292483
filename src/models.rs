// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Income => write!(f, "income"),
            TransactionType::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(anyhow!("Unknown transaction type '{}'", other)),
        }
    }
}

/// Informational spending/earning tag. Serialized as the capitalized variant
/// name so stored JSON keeps the original slot format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Housing,
    Food,
    Transportation,
    Utilities,
    Insurance,
    Healthcare,
    Savings,
    Personal,
    Entertainment,
    Salary,
    Freelance,
    Investment,
    Other,
}

pub const EXPENSE_CATEGORIES: &[Category] = &[
    Category::Housing,
    Category::Food,
    Category::Transportation,
    Category::Utilities,
    Category::Insurance,
    Category::Healthcare,
    Category::Personal,
    Category::Entertainment,
    Category::Other,
];

pub const INCOME_CATEGORIES: &[Category] = &[
    Category::Salary,
    Category::Freelance,
    Category::Investment,
    Category::Savings,
    Category::Other,
];

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Housing => "Housing",
            Category::Food => "Food",
            Category::Transportation => "Transportation",
            Category::Utilities => "Utilities",
            Category::Insurance => "Insurance",
            Category::Healthcare => "Healthcare",
            Category::Savings => "Savings",
            Category::Personal => "Personal",
            Category::Entertainment => "Entertainment",
            Category::Salary => "Salary",
            Category::Freelance => "Freelance",
            Category::Investment => "Investment",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "housing" => Ok(Category::Housing),
            "food" => Ok(Category::Food),
            "transportation" => Ok(Category::Transportation),
            "utilities" => Ok(Category::Utilities),
            "insurance" => Ok(Category::Insurance),
            "healthcare" => Ok(Category::Healthcare),
            "savings" => Ok(Category::Savings),
            "personal" => Ok(Category::Personal),
            "entertainment" => Ok(Category::Entertainment),
            "salary" => Ok(Category::Salary),
            "freelance" => Ok(Category::Freelance),
            "investment" => Ok(Category::Investment),
            "other" => Ok(Category::Other),
            other => Err(anyhow!("Unknown category '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Checking,
    Savings,
    Investment,
    Credit,
    Loan,
}

impl AccountType {
    /// The asset/liability split is fixed: checking, savings, and investment
    /// balances are held; credit and loan balances are owed.
    pub fn is_asset(&self) -> bool {
        matches!(
            self,
            AccountType::Checking | AccountType::Savings | AccountType::Investment
        )
    }

    pub fn is_liability(&self) -> bool {
        !self.is_asset()
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccountType::Checking => "Checking",
            AccountType::Savings => "Savings",
            AccountType::Investment => "Investment",
            AccountType::Credit => "Credit",
            AccountType::Loan => "Loan",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountType::Checking => write!(f, "checking"),
            AccountType::Savings => write!(f, "savings"),
            AccountType::Investment => write!(f, "investment"),
            AccountType::Credit => write!(f, "credit"),
            AccountType::Loan => write!(f, "loan"),
        }
    }
}

impl FromStr for AccountType {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "checking" => Ok(AccountType::Checking),
            "savings" => Ok(AccountType::Savings),
            "investment" => Ok(AccountType::Investment),
            "credit" => Ok(AccountType::Credit),
            "loan" => Ok(AccountType::Loan),
            other => Err(anyhow!("Unknown account type '{}'", other)),
        }
    }
}

/// A single recorded income or expense. Immutable once created; deletion is
/// the only permitted mutation, handled by the owning state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub amount: Decimal,
    pub r#type: TransactionType,
    pub category: Category,
    pub date: DateTime<Utc>,
    pub description: String,
}

/// A linked bank-style account. For credit/loan accounts `balance` is the
/// amount owed, not a signed balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub institution: String,
    pub r#type: AccountType,
    pub balance: Decimal,
    pub identifier: String,
    pub last_synced: DateTime<Utc>,
}

/// Derived totals; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialSummary {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    pub net_worth: Decimal,
}
