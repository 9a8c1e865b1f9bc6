//! quickparse-core - Parsers and validators for short structured text
//!
//! Four independent, pure transformations: chat export lines, registration
//! forms, local train passes and PNR status records. None of them shares
//! state with another.

pub mod types;
pub mod errors;
pub mod message;
pub mod chat;
pub mod form;
pub mod pass;
pub mod pnr;

pub use types::*;
pub use errors::*;
pub use message::*;
pub use chat::*;
pub use form::*;
pub use pass::*;
pub use pnr::*;
