//! CLI command implementations

pub mod chat;
pub mod form;
pub mod pass;
pub mod pnr;
