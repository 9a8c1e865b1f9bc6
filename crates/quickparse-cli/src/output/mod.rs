//! Output formatting for each output format

pub mod colors;
pub mod human;
pub mod json;
pub mod minimal;
