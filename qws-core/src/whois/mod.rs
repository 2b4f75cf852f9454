mod client;
mod fields;
mod parser;
mod servers;

pub use client::WhoisClient;
pub use parser::WhoisRecord;
pub use servers::{query_for, tld, whois_server};
