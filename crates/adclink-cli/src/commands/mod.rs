//! CLI subcommands
//!
//! Every command returns `Ok(true)` for a positive answer and `Ok(false)`
//! for a negative one; `main` turns the latter into exit status 1 where it
//! is meaningful.

pub mod config;
pub mod info;
pub mod lock;
pub mod path;
pub mod service;
pub mod sync;
