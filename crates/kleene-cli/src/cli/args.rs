//! Shared argument builders for CLI commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};
use kleene_compiler::MAX_STATE_LIMIT;

/// Regular expression (positional).
pub fn pattern_arg() -> Arg {
    Arg::new("pattern")
        .value_name("PATTERN")
        .required(true)
        .help("Regular expression over letters and digits")
}

/// Words to check (positional, one or more).
pub fn words_arg() -> Arg {
    Arg::new("words")
        .value_name("WORD")
        .num_args(1..)
        .required(true)
        .help("Words to check (use '' for the empty word)")
}

/// Single word to trace (positional).
pub fn word_arg() -> Arg {
    Arg::new("word")
        .value_name("WORD")
        .required(true)
        .help("Word to trace (use '' for the empty word)")
}

/// JSON test specification (positional).
pub fn file_arg() -> Arg {
    Arg::new("file")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("JSON test specification")
}

/// Colorize output (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Largest fragment composition may build (--state-limit).
pub fn state_limit_arg() -> Arg {
    Arg::new("state_limit")
        .long("state-limit")
        .value_name("N")
        .value_parser(value_parser!(u64).range(..=MAX_STATE_LIMIT as u64))
        .help("Maximum number of states per automaton [default: 10000]")
}

/// Run subset construction after compiling (--dfa).
pub fn dfa_arg() -> Arg {
    Arg::new("dfa")
        .long("dfa")
        .action(ArgAction::SetTrue)
        .help("Determinize the automaton")
}

/// Only print mismatches and the summary (--quiet).
pub fn quiet_arg() -> Arg {
    Arg::new("quiet")
        .short('q')
        .long("quiet")
        .action(ArgAction::SetTrue)
        .help("Only print failures and the summary")
}
