//! Check words against a compiled pattern.

use kleene_compiler::PatternConfig;
use kleene_core::Colors;

use super::run_common;

pub struct ExecArgs {
    pub pattern: String,
    pub words: Vec<String>,
    pub config: PatternConfig,
    pub color: bool,
}

pub fn run(args: ExecArgs) {
    let pattern = run_common::compile_or_exit(&args.pattern, args.config, args.color);
    let colors = Colors::new(args.color);

    for word in &args.words {
        let accepted = pattern.is_match(word);
        println!("{}", verdict_line(word, accepted, colors));
    }
}

pub fn verdict_line(word: &str, accepted: bool, colors: Colors) -> String {
    format!(
        "'{word}' -> {}{accepted}{}",
        colors.verdict(accepted),
        colors.reset
    )
}
