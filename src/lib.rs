//! True random integers and alphanumeric passwords from CPU timing jitter.
//!
//! The library is the consumption layer: [`rand::EntropySource`] hands out
//! 32-bit words, [`hex`] and [`pass`] turn them into text, [`timing`] measures
//! what it cost. The `jytter` binary wires it to the command line.

pub mod cli;
pub mod error;
pub mod exits;
pub mod hex;
pub mod logger;
pub mod pass;
pub mod rand;
pub mod report;
pub mod settings;
pub mod terminal;
pub mod timing;

pub use error::{Error, Result};
pub use hex::format_hex_words;
pub use pass::format_password;
pub use timing::elapsed_ticks;
