pub mod error;
pub mod output;
pub mod validation;
pub mod whois;

pub use error::{QwsError, Result};
pub use output::JsonFormatter;
pub use validation::normalize_domain;
pub use whois::{WhoisClient, WhoisRecord};
