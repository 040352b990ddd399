pub mod batch;
pub mod check;
pub mod dump;
pub mod exec;
pub mod postfix;
pub mod run_common;
pub mod trace;

#[cfg(test)]
mod test_tests;
