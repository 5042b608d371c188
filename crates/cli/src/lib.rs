pub mod check;
pub mod checks;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod markers;
pub mod output;
pub mod process;
pub mod runner;
pub mod selftest;

pub use check::{CaseContext, CaseResult, CheckError, ErrorKind, RunReport, TestCase};
pub use cli::{Cli, Command, FrontendArgs, OutputFormat, SelftestArgs};
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use process::{CommandOutput, CommandRunner, SystemRunner};
pub use runner::{Registry, RunObserver};
