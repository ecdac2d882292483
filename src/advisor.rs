// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Best-effort advisory round trip: snapshot the books into a prompt, send it
//! to the Gemini generateContent endpoint once, and collapse every failure
//! into a fixed user-visible string.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Account, Transaction};
use crate::summary;
use crate::utils::http_client;

const MODEL: &str = "gemini-2.5-flash";
const API_KEY_VAR: &str = "GEMINI_API_KEY";
const MAX_PROMPT_TRANSACTIONS: usize = 50;

pub const FALLBACK_MESSAGE: &str =
    "Sorry, I'm having trouble connecting to my financial brain right now. Please try again later.";
const EMPTY_RESPONSE_MESSAGE: &str = "I couldn't generate a response at this time.";

const SYSTEM_INSTRUCTION: &str = "You are a helpful, encouraging, but realistic financial \
     planner. You have access to the user's full balance sheet.";

#[derive(Debug, Error)]
enum AdvisorError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("client setup failed: {0}")]
    Client(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Builds the fixed-shape prompt: balance-sheet standing, the first 50
/// transactions one per line, then the question (or the default
/// comprehensive-assessment instruction).
pub fn build_prompt(
    transactions: &[Transaction],
    accounts: &[Account],
    question: Option<&str>,
) -> String {
    let transaction_summary = transactions
        .iter()
        .take(MAX_PROMPT_TRANSACTIONS)
        .map(|t| {
            format!(
                "- {}: {} ${} ({}) - {}",
                t.date.format("%Y-%m-%d"),
                t.r#type.to_string().to_uppercase(),
                t.amount,
                t.category,
                t.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let s = summary::summarize(transactions, accounts);
    let asset_lines = accounts
        .iter()
        .filter(|a| a.r#type.is_asset())
        .map(|a| format!("- {} {}: ${}", a.institution, a.name, a.balance))
        .collect::<Vec<_>>()
        .join("\n");
    let liability_lines = accounts
        .iter()
        .filter(|a| a.r#type.is_liability())
        .map(|a| format!("- {} {}: ${} (Owed)", a.institution, a.name, a.balance))
        .collect::<Vec<_>>()
        .join("\n");

    let account_summary = format!(
        "Current Financial Standing (Net Worth: ${:.2}):\n\n\
         Assets (Total: ${:.2}):\n{}\n\n\
         Liabilities/Debts (Total: ${:.2}):\n{}",
        s.net_worth, s.total_assets, asset_lines, s.total_liabilities, liability_lines
    );

    let ask = match question {
        Some(q) => format!("The user has a specific question: \"{}\"", q),
        None => "Please provide a comprehensive financial health assessment. Focus on their \
                 Net Worth, Debt-to-Asset ratio, and spending habits from the transactions."
            .to_string(),
    };

    format!(
        "You are an expert financial advisor for a personal finance app called \"FinanceFlow\".\n\n\
         Here is the user's financial overview:\n\n{}\n\n\
         Recent Transactions Analysis Context:\n{}\n\n{}\n\n\
         Provide a concise, actionable response in Markdown format. Use bolding for key points. \
         If they have high debt, prioritize advice on paying it down.",
        account_summary, transaction_summary, ask
    )
}

/// One outbound round trip, no retry. Any failure, from a missing API key to
/// an empty candidate list, surfaces as the fixed fallback text; the caller
/// cannot distinguish causes.
pub fn advise(transactions: &[Transaction], accounts: &[Account], question: Option<&str>) -> String {
    match request_advice(&build_prompt(transactions, accounts, question)) {
        Ok(Some(text)) => text,
        Ok(None) => EMPTY_RESPONSE_MESSAGE.to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "advisory request failed");
            FALLBACK_MESSAGE.to_string()
        }
    }
}

fn request_advice(prompt: &str) -> Result<Option<String>, AdvisorError> {
    let api_key = std::env::var(API_KEY_VAR).map_err(|_| AdvisorError::MissingApiKey)?;
    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
        MODEL, api_key
    );
    let body = GenerateRequest {
        system_instruction: Content {
            parts: vec![Part {
                text: SYSTEM_INSTRUCTION.to_string(),
            }],
        },
        contents: vec![Content {
            parts: vec![Part {
                text: prompt.to_string(),
            }],
        }],
    };
    let client = http_client()?;
    let resp: GenerateResponse = client
        .post(url)
        .json(&body)
        .send()?
        .error_for_status()?
        .json()?;
    Ok(extract_text(resp))
}

fn extract_text(resp: GenerateResponse) -> Option<String> {
    let text = resp
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .filter_map(|p| p.text)
        .collect::<Vec<_>>()
        .join("");
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
