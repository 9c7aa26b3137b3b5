use std::str::FromStr;

/// Parses an environment value, falling back to `default` when it doesn't parse
pub fn parse<T: FromStr>(s: &str, default: T) -> T {
    match s.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!("Unable to parse configuration value {s:?}, using default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(parse(" 2 ", 4usize), 2);
        assert_eq!(parse("two", 4usize), 4);
    }
}
