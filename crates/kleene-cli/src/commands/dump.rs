use kleene_compiler::PatternConfig;
use kleene_core::Colors;

use super::run_common;

pub struct DumpArgs {
    pub pattern: String,
    pub config: PatternConfig,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let pattern = run_common::compile_or_exit(&args.pattern, args.config, args.color);
    let colors = Colors::new(args.color);

    println!("{}", kleene_core::dump(pattern.automaton(), colors));
}
