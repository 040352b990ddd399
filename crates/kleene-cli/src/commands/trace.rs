//! Trace the simulation of one word.

use kleene_compiler::PatternConfig;
use kleene_core::{Colors, PrintTracer};

use super::run_common;

pub struct TraceArgs {
    pub pattern: String,
    pub word: String,
    pub config: PatternConfig,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let pattern = run_common::compile_or_exit(&args.pattern, args.config, args.color);
    let mut tracer = PrintTracer::new(Colors::new(args.color));

    let accepted = pattern
        .automaton()
        .accepts_traced(&args.word, &mut tracer);
    tracer.print();

    if !accepted {
        std::process::exit(1);
    }
}
