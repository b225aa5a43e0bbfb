//! Command implementations

pub mod css;
pub mod init;

pub use css::run_css;
pub use init::run_init;
