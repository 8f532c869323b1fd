mod relay_service;
pub use relay_service::*;

mod validation;
pub use validation::*;
