//! Environment variable parsing with warn-level logging for invalid values.

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    parse_or_default(var, std::env::var(var).ok(), default)
}

fn parse_or_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    raw: Option<String>,
    default: T,
) -> T {
    match raw {
        Some(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_value_wins() {
        let port: u16 = parse_or_default("SNIPBIN_PORT", Some("8080".into()), 3001);
        assert_eq!(port, 8080);
    }

    #[test]
    fn invalid_value_falls_back() {
        let port: u16 = parse_or_default("SNIPBIN_PORT", Some("banana".into()), 3001);
        assert_eq!(port, 3001);
    }

    #[test]
    fn missing_var_falls_back() {
        let port: u16 = parse_or_default("SNIPBIN_PORT", None, 3001);
        assert_eq!(port, 3001);
    }

    #[test]
    fn empty_value_falls_back() {
        let port: u16 = parse_or_default("SNIPBIN_PORT", Some(String::new()), 3001);
        assert_eq!(port, 3001);
    }
}
