//! Constants shared by the relay engine and its collaborators.
mod gas;
pub use gas::*;

mod logging;
pub use logging::*;

mod safe;
pub use safe::*;
