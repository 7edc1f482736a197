//! Pieces shared by the rooch binaries.

pub mod logging;
