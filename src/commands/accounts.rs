// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{anyhow, Result};
use rust_decimal::Decimal;

use crate::connect::{connect_account, CONNECT_DELAY};
use crate::models::{Account, AccountType};
use crate::state::AppState;
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(store: &Store, state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("connect", sub)) => connect(store, state, sub)?,
        Some(("list", sub)) => list(state, sub)?,
        Some(("unlink", sub)) => unlink(store, state, sub)?,
        _ => {}
    }
    Ok(())
}

fn connect(store: &Store, state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let institution = sub.get_one::<String>("institution").unwrap().trim().to_string();
    let identifier = sub.get_one::<String>("id").unwrap().trim().to_string();
    if institution.is_empty() || identifier.is_empty() {
        return Err(anyhow!("Institution and connection id must not be empty"));
    }
    let r#type: AccountType = sub.get_one::<String>("type").unwrap().parse()?;

    println!("Connecting to {}... verifying credentials and fetching balance.", institution);
    let account = connect_account(&institution, r#type, &identifier, CONNECT_DELAY);
    println!(
        "Linked '{}' ({}) with balance {} [{}]",
        account.name,
        account.r#type,
        fmt_money(&account.balance),
        account.id
    );
    state.add_account(store, account)?;
    Ok(())
}

fn account_rows(accounts: &[&Account]) -> Vec<Vec<String>> {
    accounts
        .iter()
        .map(|a| {
            vec![
                a.name.clone(),
                a.institution.clone(),
                a.identifier.clone(),
                fmt_money(&a.balance),
                a.last_synced.format("%Y-%m-%d %H:%M").to_string(),
                a.id.clone(),
            ]
        })
        .collect()
}

fn list(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if maybe_print_json(json_flag, jsonl_flag, &state.accounts)? {
        return Ok(());
    }

    let assets: Vec<&Account> = state.accounts.iter().filter(|a| a.r#type.is_asset()).collect();
    let liabilities: Vec<&Account> = state
        .accounts
        .iter()
        .filter(|a| a.r#type.is_liability())
        .collect();
    let total_assets: Decimal = assets.iter().map(|a| a.balance).sum();
    let total_liabilities: Decimal = liabilities.iter().map(|a| a.balance).sum();

    let headers = ["Name", "Institution", "Identifier", "Balance", "Synced", "Id"];
    println!("Assets (Total: {})", fmt_money(&total_assets));
    if assets.is_empty() {
        println!("No asset accounts linked.");
    } else {
        println!("{}", pretty_table(&headers, account_rows(&assets)));
    }
    println!();
    println!("Liabilities & Debt (Total: {})", fmt_money(&total_liabilities));
    if liabilities.is_empty() {
        println!("No debt accounts linked.");
    } else {
        println!("{}", pretty_table(&headers, account_rows(&liabilities)));
    }
    Ok(())
}

fn unlink(store: &Store, state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    if state.remove_account(store, id)? {
        println!("Unlinked account {}", id);
    } else {
        println!("No account with id {}", id);
    }
    Ok(())
}
