//! remcal library exports for testing

pub mod core;
pub mod remind;
pub mod tui;

#[cfg(test)]
pub mod test_support;
