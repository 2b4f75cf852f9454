//! Domain name normalization and validation.

use crate::error::{QwsError, Result};

/// Normalize and validate a domain name.
///
/// Strips `http://`/`https://` prefixes, a leading `www.`, and any path;
/// lowercases the rest; then validates the shape (at least one dot, only
/// ASCII alphanumerics/hyphens/dots, no empty labels, no label starting or
/// ending with a hyphen).
pub fn normalize_domain(domain: &str) -> Result<String> {
    let domain = domain.trim().to_lowercase();

    // Remove protocol
    let domain = domain
        .strip_prefix("http://")
        .or_else(|| domain.strip_prefix("https://"))
        .unwrap_or(&domain);

    // Remove trailing slash and path
    let domain = domain.split('/').next().unwrap_or(domain);

    // Remove www. prefix
    let domain = domain.strip_prefix("www.").unwrap_or(domain);

    if domain.is_empty() || !domain.contains('.') {
        return Err(QwsError::InvalidDomain(domain.to_string()));
    }

    let valid = domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
    if !valid {
        return Err(QwsError::InvalidDomain(domain.to_string()));
    }

    for label in domain.split('.') {
        if label.is_empty() || label.starts_with('-') || label.ends_with('-') {
            return Err(QwsError::InvalidDomain(domain.to_string()));
        }
    }

    Ok(domain.to_string())
}
