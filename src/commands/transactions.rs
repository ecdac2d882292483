// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{anyhow, Result};
use chrono::Utc;
use serde::Serialize;

use crate::models::{Category, Transaction, TransactionType, EXPENSE_CATEGORIES, INCOME_CATEGORIES};
use crate::state::{AppState, NewTransaction};
use crate::store::Store;
use crate::utils::{maybe_print_json, parse_date, parse_decimal, date_to_timestamp, pretty_table};

pub fn handle(store: &Store, state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, state, sub)?,
        Some(("list", sub)) => list(state, sub)?,
        Some(("rm", sub)) => rm(store, state, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &Store, state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    if amount.is_sign_negative() || amount.is_zero() {
        return Err(anyhow!("Amount must be positive, got '{}'", amount));
    }
    let r#type: TransactionType = sub.get_one::<String>("type").unwrap().parse()?;
    let category: Category = sub.get_one::<String>("category").unwrap().parse()?;
    // Same pairing the entry form enforces via its category dropdown.
    let allowed = match r#type {
        TransactionType::Income => INCOME_CATEGORIES,
        TransactionType::Expense => EXPENSE_CATEGORIES,
    };
    if !allowed.contains(&category) {
        return Err(anyhow!("Category '{}' is not valid for {}", category, r#type));
    }
    let description = sub.get_one::<String>("description").unwrap().trim().to_string();
    if description.is_empty() {
        return Err(anyhow!("Description must not be empty"));
    }
    let date = match sub.get_one::<String>("date") {
        Some(s) => date_to_timestamp(parse_date(s)?),
        None => Utc::now(),
    };

    let t = state.add_transaction(
        store,
        NewTransaction {
            amount,
            r#type,
            category,
            date,
            description,
        },
    )?;
    println!(
        "Recorded {} of ${} ({}) on {} [{}]",
        t.r#type,
        t.amount,
        t.category,
        t.date.format("%Y-%m-%d"),
        t.id
    );
    Ok(())
}

fn list(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(&state.transactions, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.r#type.clone(),
                    r.category.clone(),
                    r.description.clone(),
                    r.amount.clone(),
                    r.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Type", "Category", "Description", "Amount", "Id"],
                rows,
            )
        );
    }
    Ok(())
}

fn rm(store: &Store, state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    if state.delete_transaction(store, id)? {
        println!("Deleted transaction {}", id);
    } else {
        println!("No transaction with id {}", id);
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub r#type: String,
    pub category: String,
    pub description: String,
    pub amount: String,
}

/// Applies the list view's filters: optional type filter, case-insensitive
/// search over description and category, newest-first order, optional limit.
pub fn query_rows(transactions: &[Transaction], sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let type_filter: Option<TransactionType> = sub
        .get_one::<String>("type")
        .map(|s| s.parse())
        .transpose()?;
    let search = sub.get_one::<String>("search").map(|s| s.to_lowercase());

    let mut rows: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| type_filter.map_or(true, |f| t.r#type == f))
        .filter(|t| {
            search.as_deref().map_or(true, |q| {
                t.description.to_lowercase().contains(q)
                    || t.category.name().to_lowercase().contains(q)
            })
        })
        .collect();
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    if let Some(limit) = sub.get_one::<usize>("limit") {
        rows.truncate(*limit);
    }

    Ok(rows
        .into_iter()
        .map(|t| {
            let sign = match t.r#type {
                TransactionType::Income => "+",
                TransactionType::Expense => "-",
            };
            TransactionRow {
                id: t.id.clone(),
                date: t.date.format("%Y-%m-%d").to_string(),
                r#type: t.r#type.to_string(),
                category: t.category.to_string(),
                description: t.description.clone(),
                amount: format!("{}${:.2}", sign, t.amount),
            }
        })
        .collect())
}
