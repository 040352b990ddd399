//! Print the postfix form of a pattern.

use kleene_compiler::PatternBuilder;

pub struct PostfixArgs {
    pub pattern: String,
    pub color: bool,
}

pub fn run(args: PostfixArgs) {
    let parsed = PatternBuilder::new(&args.pattern).parse();
    let diagnostics = parsed.diagnostics();

    if !diagnostics.is_empty() {
        eprintln!("{}", diagnostics.render_colored(&args.pattern, args.color));
    }
    if !parsed.is_valid() {
        std::process::exit(1);
    }

    println!("{}", parsed.postfix());
}
