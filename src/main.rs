// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use financeflow::store::{ACCOUNTS_KEY, TRANSACTIONS_KEY};
use financeflow::{cli, commands, state::AppState, store::Store};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let store = Store::open_default()?;
    let mut state = AppState::load(&store);

    match matches.subcommand() {
        Some(("init", _)) => {
            store.save_slot(TRANSACTIONS_KEY, &state.transactions)?;
            store.save_slot(ACCOUNTS_KEY, &state.accounts)?;
            println!("Storage initialized at {}", store.dir().display());
        }
        Some(("dashboard", sub)) => commands::dashboard::handle(&state, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&store, &mut state, sub)?,
        Some(("account", sub)) => commands::accounts::handle(&store, &mut state, sub)?,
        Some(("advisor", sub)) => commands::advisor::handle(&state, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
