//! realmchat-cli: command-line front-end for the Realm Chat API.
//!
//! Every command is one request. Results are printed as pretty JSON on
//! stdout, errors on stderr with exit code 1.

#![allow(
    missing_docs,
    missing_debug_implementations,
    clippy::print_stderr,
    clippy::print_stdout
)]

mod cmd;
mod error;

use std::process;

use clap::Parser;
use serde_json::Value;

use crate::cmd::config::ProfileConfig;
use crate::cmd::{Cli, Command, lookup, message};
use crate::error::Result;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = realmchat::init_logger(Some(&cli.log_level)) {
        eprintln!("warning: {e}");
    }

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let client = || ProfileConfig::load(&cli.profile)?.merged(cli).client();

    let output = match &cli.command {
        Command::Config(command) => return cmd::config::run(&cli.profile, command),
        Command::Device(command) => lookup::device(&client()?, command)?,
        Command::Send(args) => message::send(&client()?, args)?,
        Command::Buttons(args) => message::buttons(&client()?, args)?,
        Command::Template(args) => message::template(&client()?, args)?,
        Command::Chats => lookup::chats(&client()?)?,
        Command::Contacts => lookup::contacts(&client()?)?,
        Command::Check { number } => lookup::check(&client()?, number)?,
    };
    print_json(&output);
    Ok(())
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(_) => println!("{value}"),
    }
}
