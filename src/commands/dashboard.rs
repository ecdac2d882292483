// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;

use crate::state::AppState;
use crate::summary::{category_breakdown, monthly_trend, summarize};
use crate::utils::{fmt_money, pretty_table};

pub fn handle(state: &AppState, m: &clap::ArgMatches) -> Result<()> {
    let summary = summarize(&state.transactions, &state.accounts);
    let breakdown = category_breakdown(&state.transactions);
    let trend = monthly_trend(&state.transactions, Utc::now().date_naive());

    if m.get_flag("json") {
        let by_category: Vec<serde_json::Value> = breakdown
            .iter()
            .map(|(c, v)| serde_json::json!({ "category": c.name(), "total": v }))
            .collect();
        let out = serde_json::json!({
            "summary": summary,
            "expense_breakdown": by_category,
            "monthly_trend": trend,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let asset_count = state.accounts.iter().filter(|a| a.r#type.is_asset()).count();
    println!("Net Worth:    {}  (Total Assets - Total Debt)", fmt_money(&summary.net_worth));
    println!(
        "Total Assets: {}  (across {} accounts)",
        fmt_money(&summary.total_assets),
        asset_count
    );
    println!("Total Debt:   {}  (Loans & Credit Cards)", fmt_money(&summary.total_liabilities));
    println!();

    println!("Monthly Cash Flow");
    println!("  Income:   +{}", fmt_money(&summary.income));
    println!("  Expenses: -{}", fmt_money(&summary.expense));
    let sign = if summary.balance.is_sign_negative() { "" } else { "+" };
    println!("  Net Flow: {}{}", sign, fmt_money(&summary.balance));
    println!();

    println!("Monthly Activity");
    let trend_rows: Vec<Vec<String>> = trend
        .iter()
        .map(|b| {
            vec![
                b.label.clone(),
                format!("{:.2}", b.income),
                format!("{:.2}", b.expense),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Month", "Income", "Expense"], trend_rows));
    println!();

    println!("Expense Breakdown");
    if breakdown.is_empty() {
        println!("No expenses recorded yet.");
    } else {
        let rows: Vec<Vec<String>> = breakdown
            .iter()
            .map(|(c, v)| vec![c.to_string(), format!("{:.2}", v)])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], rows));
    }
    Ok(())
}
