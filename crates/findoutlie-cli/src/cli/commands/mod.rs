//! CLI command handlers, one file per command.

pub(super) mod checksum;
pub(super) mod dvars;
pub(super) mod validate;

pub use checksum::run_checksum;
pub use dvars::run_dvars;
pub use validate::run_validate;
