//! Tests for interactive and completions.

use super::parse;
use crate::cli::CliCommand;
use clap_complete::Shell;

#[test]
fn cli_parse_interactive() {
    match parse(&["harscan", "interactive"]) {
        CliCommand::Interactive => {}
        _ => panic!("expected Interactive"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["harscan", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_command_is_well_formed() {
    use clap::CommandFactory;
    crate::cli::Cli::command().debug_assert();
}
