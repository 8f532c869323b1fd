//! # Models
//!
//! Data shapes exchanged between the relay engine and its collaborators.
mod creation;
pub use creation::*;

mod error;
pub use error::*;

mod gas;
pub use gas::*;

mod relay;
pub use relay::*;

mod safe;
pub use safe::*;

mod token;
pub use token::*;
