// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::advisor;
use crate::state::AppState;

pub fn handle(state: &AppState, m: &clap::ArgMatches) -> Result<()> {
    let question = m
        .get_many::<String>("question")
        .map(|vals| vals.cloned().collect::<Vec<_>>().join(" "))
        .filter(|q| !q.trim().is_empty());

    // Single blocking round trip; the terminal is the disabled submit button.
    println!("Analyzing your finances...");
    println!();
    let answer = advisor::advise(&state.transactions, &state.accounts, question.as_deref());
    println!("{}", answer);
    Ok(())
}
