//! Library components of the resource dashboard CLI.

pub mod commands;
pub mod logging;
