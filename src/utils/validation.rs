use crate::utils::error::{DaemonError, Result};

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(DaemonError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn parse_u64_in_range(field_name: &str, raw: &str, min: u64, max: u64) -> Result<u64> {
    let value = raw
        .trim()
        .parse::<u64>()
        .map_err(|e| DaemonError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: format!("Not a whole number of milliseconds: {}", e),
        })?;
    validate_range(field_name, value, min, max)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range() {
        assert!(validate_range("tick_ms", 500u64, 1, 60_000).is_ok());
        assert!(validate_range("tick_ms", 1u64, 1, 60_000).is_ok());
        assert!(validate_range("tick_ms", 60_000u64, 1, 60_000).is_ok());
        assert!(validate_range("tick_ms", 0u64, 1, 60_000).is_err());
        assert!(validate_range("tick_ms", 60_001u64, 1, 60_000).is_err());
    }

    #[test]
    fn test_validate_range_error_names_field() {
        let err = validate_range("wait_ms", 5u64, 10, 20).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("wait_ms"));
        assert!(message.contains("between 10 and 20"));
    }

    #[test]
    fn test_parse_u64_in_range() {
        assert_eq!(parse_u64_in_range("wait_ms", "2000", 0, 10_000).unwrap(), 2_000);
        assert_eq!(parse_u64_in_range("wait_ms", " 42 ", 0, 10_000).unwrap(), 42);
        assert!(parse_u64_in_range("wait_ms", "abc", 0, 10_000).is_err());
        assert!(parse_u64_in_range("wait_ms", "-5", 0, 10_000).is_err());
        assert!(parse_u64_in_range("wait_ms", "", 0, 10_000).is_err());
        assert!(parse_u64_in_range("wait_ms", "10001", 0, 10_000).is_err());
    }
}
