// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, ArgAction, Command};

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print as pretty JSON")
}

fn jsonl_flag() -> Arg {
    Arg::new("jsonl")
        .long("jsonl")
        .action(ArgAction::SetTrue)
        .help("Print as JSON lines")
}

pub fn build_cli() -> Command {
    Command::new("financeflow")
        .version(crate_version!())
        .about("FinanceFlow: local-first personal finance tracker with an AI advisor")
        .subcommand(Command::new("init").about("Create the data directory and seed storage slots"))
        .subcommand(
            Command::new("dashboard")
                .about("Net worth, cash flow, monthly activity, and expense breakdown")
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("tx")
                .about("Manage income and expense transactions")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .help("Positive amount, e.g. 42.50"),
                        )
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .default_value("expense")
                                .help("income or expense"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .required(true)
                                .help("Category tag, e.g. Food, Salary"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD (defaults to today)"),
                        )
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .required(true)
                                .help("Free-text description"),
                        ),
                )
                .subcommand(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .help("Filter to income or expense"),
                        )
                        .arg(
                            Arg::new("search")
                                .long("search")
                                .help("Match against description and category"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(clap::value_parser!(usize)),
                        )
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction by id")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("account")
                .about("Linked accounts and debts")
                .subcommand_required(true)
                .subcommand(
                    Command::new("connect")
                        .about("Connect a bank account (simulated)")
                        .arg(
                            Arg::new("institution")
                                .required(true)
                                .help("Bank / institution name, e.g. Chase"),
                        )
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .default_value("checking")
                                .help("checking, savings, investment, credit, or loan"),
                        )
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .help("Connection ID (UPI / Interac)"),
                        ),
                )
                .subcommand(
                    Command::new("list")
                        .about("Assets and liabilities with totals")
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                )
                .subcommand(
                    Command::new("unlink")
                        .about("Unlink an account by id")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("advisor")
                .about("Ask the AI advisor about your finances")
                .arg(
                    Arg::new("question")
                        .num_args(0..)
                        .trailing_var_arg(true)
                        .help("Optional free-text question; omit for a full assessment"),
                ),
        )
}
