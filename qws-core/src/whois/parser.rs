//! Tolerant line-oriented parser for raw WHOIS replies.

use serde::{Deserialize, Serialize};

use super::fields::{classify, Field};
use crate::error::{QwsError, Result};

/// Normalized view of a WHOIS reply.
///
/// Values are stored as raw text exactly as the registry sent them; date
/// formats in particular vary too widely across registries to normalize
/// here, so no coercion is attempted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoisRecord {
    pub domain_name: String,
    pub registrar: String,
    pub statuses: Vec<String>,
    pub creation_date: String,
    pub expiration_date: String,
}

impl WhoisRecord {
    /// Builds a record from a raw WHOIS reply.
    ///
    /// Lines are split on the first colon into label and value; colon-less
    /// lines and lines with unrecognized labels contribute nothing. A reply
    /// naming two domains is rejected — that indicates a batched or
    /// malformed response, not one record. Every other field overwrites on
    /// repeat, keeping the last occurrence.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut record = WhoisRecord::default();

        for line in raw.split('\n') {
            let Some((label, value)) = line.split_once(':') else {
                continue;
            };
            let label = label.trim().to_lowercase();
            // Trimming also sheds the trailing CR left by CRLF line endings.
            let value = value.trim();

            match classify(&label) {
                Some(Field::DomainName) => {
                    if !record.domain_name.is_empty() {
                        return Err(QwsError::DuplicateDomain);
                    }
                    record.domain_name = value.to_string();
                }
                Some(Field::Registrar) => record.registrar = value.to_string(),
                Some(Field::Status) => record.statuses.push(truncate_status(value)),
                Some(Field::CreationDate) => record.creation_date = value.to_string(),
                Some(Field::ExpirationDate) => record.expiration_date = value.to_string(),
                None => {}
            }
        }

        Ok(record)
    }
}

/// Drops the reference URL registries append to status values
/// ("clientTransferProhibited https://icann.org/epp#...").
fn truncate_status(value: &str) -> String {
    value.split("http").next().unwrap_or(value).trim().to_string()
}
