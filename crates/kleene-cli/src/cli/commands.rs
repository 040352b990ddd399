//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("kleene")
        .about("Compile regular expressions to automata and run them")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(postfix_command())
        .subcommand(dump_command())
        .subcommand(exec_command())
        .subcommand(trace_command())
        .subcommand(test_command())
}

/// Validate a pattern.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a pattern")
        .after_help(
            r#"EXAMPLES:
  kleene check '(a|b)*abb'       # silent on success
  kleene check 'a||b'            # reports the dangling alternation"#,
        )
        .arg(pattern_arg())
        .arg(state_limit_arg())
        .arg(color_arg())
}

/// Show the postfix form of a pattern.
pub fn postfix_command() -> Command {
    Command::new("postfix")
        .about("Show the postfix form of a pattern")
        .after_help(
            r#"EXAMPLES:
  kleene postfix 'ab|c'          # ab.c|"#,
        )
        .arg(pattern_arg())
        .arg(color_arg())
}

/// Show the compiled automaton.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show the compiled automaton")
        .after_help(
            r#"EXAMPLES:
  kleene dump 'a*b'              # epsilon-free automaton
  kleene dump '(a|b)*abb' --dfa  # after subset construction"#,
        )
        .arg(pattern_arg())
        .arg(dfa_arg())
        .arg(state_limit_arg())
        .arg(color_arg())
}

/// Check words against a pattern.
pub fn exec_command() -> Command {
    Command::new("exec")
        .about("Check words against a pattern")
        .after_help(
            r#"EXAMPLES:
  kleene exec 'a*b' b aab ba     # one verdict per word
  kleene exec 'a?' ''            # the empty word"#,
        )
        .arg(pattern_arg())
        .arg(words_arg())
        .arg(dfa_arg())
        .arg(state_limit_arg())
        .arg(color_arg())
}

/// Trace the simulation of one word.
pub fn trace_command() -> Command {
    Command::new("trace")
        .about("Trace the simulation of one word")
        .after_help(
            r#"EXAMPLES:
  kleene trace '(a|b)*abb' aabb"#,
        )
        .arg(pattern_arg())
        .arg(word_arg())
        .arg(dfa_arg())
        .arg(state_limit_arg())
        .arg(color_arg())
}

/// Run a JSON test specification.
pub fn test_command() -> Command {
    Command::new("test")
        .about("Run a JSON test specification")
        .after_help(
            r#"EXAMPLES:
  kleene test demos/data.json    # every batch, every word
  kleene test data.json -q       # failures and summary only"#,
        )
        .arg(file_arg())
        .arg(quiet_arg())
        .arg(dfa_arg())
        .arg(state_limit_arg())
        .arg(color_arg())
}
