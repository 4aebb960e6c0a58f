//! Command-line front end: reads calendar responses, merges them, and prints
//! the agenda.

pub mod cli;
pub mod error;
pub mod output;
pub mod run;
