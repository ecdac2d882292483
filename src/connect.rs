// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Simulated bank-connection flow. Stands in for a real integration: waits a
//! fixed delay, fabricates a balance, and stamps the sync time. No
//! verification or reconciliation happens here.

use chrono::Utc;
use rand::Rng;
use rust_decimal::Decimal;
use std::time::Duration;
use uuid::Uuid;

use crate::models::{Account, AccountType};

pub const CONNECT_DELAY: Duration = Duration::from_secs(2);

const MIN_BALANCE: i64 = 500;
const MAX_BALANCE: i64 = 15500;

/// Fabricates a linked account after the artificial delay. The balance is a
/// whole amount in [500, 15500); the account is named "{institution} {Type}".
pub fn connect_account(
    institution: &str,
    r#type: AccountType,
    identifier: &str,
    delay: Duration,
) -> Account {
    std::thread::sleep(delay);

    let balance = rand::thread_rng().gen_range(MIN_BALANCE..MAX_BALANCE);
    Account {
        id: Uuid::new_v4().to_string(),
        name: format!("{} {}", institution, r#type.label()),
        institution: institution.to_string(),
        r#type,
        balance: Decimal::from(balance),
        identifier: identifier.to_string(),
        last_synced: Utc::now(),
    }
}
