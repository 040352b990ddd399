use kleene_compiler::PatternConfig;

use super::run_common;

pub struct CheckArgs {
    pub pattern: String,
    pub config: PatternConfig,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    run_common::compile_or_exit(&args.pattern, args.config, args.color);

    // Silent on success (like cargo check)
}
