//! Test harness for CLI integration tests.
//!
//! Provides isolated site directories and a fluent command builder
//! using `assert_cmd`.

mod command;
mod env;

#[allow(unused_imports)]
pub use command::CmsCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
