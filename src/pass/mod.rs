//! Alphanumeric passwords from true random words.

pub mod charset;
mod generate;

pub use generate::format_password;
