mod relay;
pub use relay::*;

mod repository_error;
pub use repository_error::*;

mod token;
pub use token::*;
