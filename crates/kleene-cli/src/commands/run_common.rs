//! Shared logic for commands that compile a pattern.

use kleene_compiler::{Error, Pattern, PatternBuilder, PatternConfig};

/// Compile `source`, or print why it failed and exit with status 1.
///
/// Warnings are printed to stderr and do not stop compilation.
pub fn compile_or_exit(source: &str, config: PatternConfig, color: bool) -> Pattern {
    match PatternBuilder::new(source).with_config(config).parse().compile() {
        Ok(pattern) => {
            if pattern.diagnostics().has_warnings() {
                eprintln!("{}", pattern.diagnostics().render_colored(source, color));
            }
            pattern
        }
        Err(e) => {
            report_compile_error(source, &e, color);
            std::process::exit(1);
        }
    }
}

pub fn report_compile_error(source: &str, error: &Error, color: bool) {
    match error {
        Error::InvalidExpression(diagnostics) => {
            eprintln!("{}", diagnostics.render_colored(source, color));
        }
        Error::StateLimitExceeded { .. } => {
            eprintln!("error: {}", error);
        }
    }
}
