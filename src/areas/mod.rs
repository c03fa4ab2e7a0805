//! Command-line session components
//!
//! - `session`: Output writer and input files shared by the commands
//! - `workspace`: File system access relative to the working directory

pub mod session;
pub(crate) mod workspace;
