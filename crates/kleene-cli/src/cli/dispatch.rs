//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the relevant fields
//! - `Into<*Args>` impls bridge dispatch to command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use kleene_compiler::{DEFAULT_STATE_LIMIT, PatternConfig};

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::exec::ExecArgs;
use crate::commands::postfix::PostfixArgs;
use crate::commands::test::TestArgs;
use crate::commands::trace::TraceArgs;

pub struct CheckParams {
    pub pattern: String,
    pub state_limit: usize,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: parse_pattern(m),
            state_limit: parse_state_limit(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            pattern: p.pattern,
            config: PatternConfig {
                state_limit: p.state_limit,
                determinize: false,
            },
            color: p.color.should_colorize(),
        }
    }
}

pub struct PostfixParams {
    pub pattern: String,
    pub color: ColorChoice,
}

impl PostfixParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: parse_pattern(m),
            color: parse_color(m),
        }
    }
}

impl From<PostfixParams> for PostfixArgs {
    fn from(p: PostfixParams) -> Self {
        Self {
            pattern: p.pattern,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub pattern: String,
    pub dfa: bool,
    pub state_limit: usize,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: parse_pattern(m),
            dfa: m.get_flag("dfa"),
            state_limit: parse_state_limit(m),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            pattern: p.pattern,
            config: PatternConfig {
                state_limit: p.state_limit,
                determinize: p.dfa,
            },
            color: p.color.should_colorize(),
        }
    }
}

pub struct ExecParams {
    pub pattern: String,
    pub words: Vec<String>,
    pub dfa: bool,
    pub state_limit: usize,
    pub color: ColorChoice,
}

impl ExecParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: parse_pattern(m),
            words: m
                .get_many::<String>("words")
                .map(|words| words.cloned().collect())
                .unwrap_or_default(),
            dfa: m.get_flag("dfa"),
            state_limit: parse_state_limit(m),
            color: parse_color(m),
        }
    }
}

impl From<ExecParams> for ExecArgs {
    fn from(p: ExecParams) -> Self {
        Self {
            pattern: p.pattern,
            words: p.words,
            config: PatternConfig {
                state_limit: p.state_limit,
                determinize: p.dfa,
            },
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub pattern: String,
    pub word: String,
    pub dfa: bool,
    pub state_limit: usize,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: parse_pattern(m),
            word: m.get_one::<String>("word").cloned().unwrap_or_default(),
            dfa: m.get_flag("dfa"),
            state_limit: parse_state_limit(m),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        Self {
            pattern: p.pattern,
            word: p.word,
            config: PatternConfig {
                state_limit: p.state_limit,
                determinize: p.dfa,
            },
            color: p.color.should_colorize(),
        }
    }
}

pub struct TestParams {
    pub file: PathBuf,
    pub quiet: bool,
    pub dfa: bool,
    pub state_limit: usize,
    pub color: ColorChoice,
}

impl TestParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            file: m.get_one::<PathBuf>("file").cloned().unwrap_or_default(),
            quiet: m.get_flag("quiet"),
            dfa: m.get_flag("dfa"),
            state_limit: parse_state_limit(m),
            color: parse_color(m),
        }
    }
}

impl From<TestParams> for TestArgs {
    fn from(p: TestParams) -> Self {
        Self {
            file: p.file,
            quiet: p.quiet,
            config: PatternConfig {
                state_limit: p.state_limit,
                determinize: p.dfa,
            },
            color: p.color.should_colorize(),
        }
    }
}

fn parse_pattern(m: &ArgMatches) -> String {
    m.get_one::<String>("pattern").cloned().unwrap_or_default()
}

fn parse_state_limit(m: &ArgMatches) -> usize {
    m.get_one::<u64>("state_limit")
        .and_then(|&n| usize::try_from(n).ok())
        .unwrap_or(DEFAULT_STATE_LIMIT)
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
