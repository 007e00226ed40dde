//! Rules engine for a grid box-pushing puzzle, plus the thin terminal front
//! end that plays it.

pub mod config;
pub mod console_interface;
pub mod core;
pub mod error;
pub mod input;
pub mod models;
pub mod runner;
