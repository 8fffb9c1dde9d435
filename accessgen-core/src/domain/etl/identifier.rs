// accessgen-core/src/domain/etl/identifier.rs

use regex::Regex;
use std::sync::OnceLock;

use crate::domain::error::DomainError;

fn re_identifier() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$")
            .unwrap_or_else(|_| Regex::new("$^").unwrap_or_else(|_| unreachable!()))
    })
}

/// Table and column names are spliced into SQL, so only plain identifiers pass.
pub fn validate_identifier(name: &str) -> Result<&str, DomainError> {
    if re_identifier().is_match(name) {
        Ok(name)
    } else {
        Err(DomainError::InvalidIdentifier(name.to_string()))
    }
}

/// Double-quoted SQL identifier. Callers validate first.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Single-quoted SQL string literal.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
