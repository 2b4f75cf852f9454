//! WHOIS server derivation and registry query formatting.

/// Extracts the TLD (the suffix after the last dot).
pub fn tld(domain: &str) -> &str {
    domain.rsplit('.').next().unwrap_or(domain)
}

/// Derives the WHOIS server for a domain.
///
/// The `whois-servers.net` zone maintains a CNAME per TLD pointing at the
/// registry's WHOIS host, so the server is derived rather than tabulated.
pub fn whois_server(domain: &str) -> String {
    format!("{}.whois-servers.net", tld(domain))
}

/// Formats the query line for a domain, without the trailing CRLF.
///
/// Most registries take the bare domain name. This match is the extension
/// point for per-registry query syntax.
pub fn query_for(domain: &str) -> String {
    match tld(domain) {
        // Verisign's server matches substrings across record types unless
        // the query is =-prefixed to ask for a single exact domain.
        "com" => format!("={}", domain),
        _ => domain.to_string(),
    }
}
