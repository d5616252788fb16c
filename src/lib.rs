//! Quizcycle library exports for testing

pub mod core;
pub mod extract;
pub mod source;
pub mod tui;

#[cfg(test)]
pub mod test_support;
