//! Core vocabulary shared by every layer: input tokens and UI errors.

pub mod error;
pub mod token;

pub use error::{Result, UiError};
pub use token::Token;
