//! CLI command implementations

pub mod add;
pub mod backup;
pub mod check;
pub mod copy;
pub mod describe;
pub mod group;
pub mod list;
pub mod remove;
pub mod rename;
pub mod run;
