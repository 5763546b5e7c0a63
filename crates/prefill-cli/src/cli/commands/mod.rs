//! CLI command handlers.

mod generate;
mod init;

pub use generate::run_generate;
pub use init::run_init;
