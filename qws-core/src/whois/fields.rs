//! Label classification for WHOIS reply lines.
//!
//! Registries disagree on field names ("Registrar" vs "Sponsoring
//! Registrar", "Expiry" vs "paid-till"), so each canonical field is backed
//! by a small vocabulary of known labels. Predicates expect the label
//! already lower-cased and trimmed.

/// Canonical fields a WHOIS reply line can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    DomainName,
    Registrar,
    Status,
    CreationDate,
    ExpirationDate,
}

/// Maps a label to its canonical field, if any.
///
/// Checks run in a fixed priority order (domain name first, expiration
/// last) so a label that would satisfy more than one predicate resolves
/// deterministically to the first match.
pub(crate) fn classify(label: &str) -> Option<Field> {
    if is_domain_name(label) {
        Some(Field::DomainName)
    } else if is_registrar(label) {
        Some(Field::Registrar)
    } else if is_status(label) {
        Some(Field::Status)
    } else if is_creation_date(label) {
        Some(Field::CreationDate)
    } else if is_expiration_date(label) {
        Some(Field::ExpirationDate)
    } else {
        None
    }
}

fn is_domain_name(label: &str) -> bool {
    label == "domain" || label == "domain name"
}

fn is_registrar(label: &str) -> bool {
    label == "registrar" || label == "sponsoring registrar"
}

fn is_status(label: &str) -> bool {
    label == "status" || label == "domain status"
}

// Substring matches: registries append qualifiers ("Creation Date",
// "Created On", "Record created").
fn is_creation_date(label: &str) -> bool {
    label.contains("created") || label.contains("creation")
}

fn is_expiration_date(label: &str) -> bool {
    label == "expiry"
        || label == "paid-till"
        || label.contains("expiry date")
        || label.contains("expiration")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_name_exact_only() {
        assert_eq!(classify("domain"), Some(Field::DomainName));
        assert_eq!(classify("domain name"), Some(Field::DomainName));
        assert_eq!(classify("domain names"), None);
    }

    #[test]
    fn test_registrar_vocabulary() {
        assert_eq!(classify("registrar"), Some(Field::Registrar));
        assert_eq!(classify("sponsoring registrar"), Some(Field::Registrar));
        assert_eq!(classify("registrar url"), None);
    }

    #[test]
    fn test_status_vocabulary() {
        assert_eq!(classify("status"), Some(Field::Status));
        assert_eq!(classify("domain status"), Some(Field::Status));
    }

    #[test]
    fn test_creation_date_is_substring_match() {
        assert_eq!(classify("creation date"), Some(Field::CreationDate));
        assert_eq!(classify("created on"), Some(Field::CreationDate));
        assert_eq!(classify("record created"), Some(Field::CreationDate));
    }

    #[test]
    fn test_expiration_date_vocabulary() {
        assert_eq!(classify("expiry"), Some(Field::ExpirationDate));
        assert_eq!(classify("paid-till"), Some(Field::ExpirationDate));
        assert_eq!(classify("registry expiry date"), Some(Field::ExpirationDate));
        assert_eq!(classify("expiration time"), Some(Field::ExpirationDate));
        // Exact-only vocabulary does not match with qualifiers appended.
        assert_eq!(classify("paid-till date"), None);
    }

    #[test]
    fn test_unknown_labels_are_unclassified() {
        assert_eq!(classify("name server"), None);
        assert_eq!(classify("dnssec"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_classification_is_deterministic() {
        for label in ["domain", "registrar", "creation date", "expiry", "foo"] {
            assert_eq!(classify(label), classify(label));
        }
    }

    #[test]
    fn test_priority_order_resolves_overlaps() {
        // "domain status" satisfies the status predicate and nothing
        // earlier in the chain.
        assert_eq!(classify("domain status"), Some(Field::Status));
    }
}
