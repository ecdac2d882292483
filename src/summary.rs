// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregations over the transaction and account arrays. Everything here
//! is order independent and tolerates empty input.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::models::{Account, Category, FinancialSummary, Transaction, TransactionType};

pub fn summarize(transactions: &[Transaction], accounts: &[Account]) -> FinancialSummary {
    let income: Decimal = transactions
        .iter()
        .filter(|t| t.r#type == TransactionType::Income)
        .map(|t| t.amount)
        .sum();
    let expense: Decimal = transactions
        .iter()
        .filter(|t| t.r#type == TransactionType::Expense)
        .map(|t| t.amount)
        .sum();

    let total_assets: Decimal = accounts
        .iter()
        .filter(|a| a.r#type.is_asset())
        .map(|a| a.balance)
        .sum();
    let total_liabilities: Decimal = accounts
        .iter()
        .filter(|a| a.r#type.is_liability())
        .map(|a| a.balance)
        .sum();

    FinancialSummary {
        income,
        expense,
        balance: income - expense,
        total_assets,
        total_liabilities,
        net_worth: total_assets - total_liabilities,
    }
}

/// Expense totals grouped by category, largest first. Tie order is whatever
/// the sort leaves; nothing depends on it.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<(Category, Decimal)> {
    let mut grouped: HashMap<Category, Decimal> = HashMap::new();
    for t in transactions
        .iter()
        .filter(|t| t.r#type == TransactionType::Expense)
    {
        *grouped.entry(t.category).or_insert(Decimal::ZERO) += t.amount;
    }
    let mut items: Vec<_> = grouped.into_iter().collect();
    items.sort_by(|a, b| b.1.cmp(&a.1));
    items
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MonthBucket {
    /// Short month label for display ("Jan", "Feb", ...).
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub income: Decimal,
    pub expense: Decimal,
}

/// The six calendar months ending at `today`, oldest first.
fn month_window(today: NaiveDate) -> Vec<(i32, u32)> {
    let mut months = Vec::with_capacity(6);
    let (mut y, mut m) = (today.year(), today.month());
    for _ in 0..6 {
        months.push((y, m));
        if m == 1 {
            y -= 1;
            m = 12;
        } else {
            m -= 1;
        }
    }
    months.reverse();
    months
}

/// Income/expense totals per month for the trailing 6-month window (current
/// month plus the five before it), oldest first. Buckets key on year+month,
/// so a transaction from the same-named month of a different year falls
/// outside the window instead of aliasing into it; anything outside the
/// window, including future-dated transactions, is excluded.
pub fn monthly_trend(transactions: &[Transaction], today: NaiveDate) -> Vec<MonthBucket> {
    let mut buckets: Vec<MonthBucket> = month_window(today)
        .into_iter()
        .map(|(year, month)| MonthBucket {
            label: month_label(year, month),
            year,
            month,
            income: Decimal::ZERO,
            expense: Decimal::ZERO,
        })
        .collect();

    for t in transactions {
        let d = t.date;
        if let Some(b) = buckets
            .iter_mut()
            .find(|b| b.year == d.year() && b.month == d.month())
        {
            match t.r#type {
                TransactionType::Income => b.income += t.amount,
                TransactionType::Expense => b.expense += t.amount,
            }
        }
    }
    buckets
}

fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%b").to_string())
        .unwrap_or_default()
}
