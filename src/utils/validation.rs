use crate::utils::error::{OltError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 非空且只含 ASCII 數字
pub fn is_all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(OltError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(OltError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(OltError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_digits(field_name: &str, value: &str) -> Result<()> {
    if !is_all_digits(value) {
        return Err(OltError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must contain digits only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(OltError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_all_digits() {
        assert!(is_all_digits("4455"));
        assert!(!is_all_digits(""));
        assert!(!is_all_digits("44a5"));
        assert!(!is_all_digits("-1"));
        assert!(!is_all_digits("٣"));
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output.directory", "./out").is_ok());
        assert!(validate_path("output.directory", "").is_err());
        assert!(validate_path("output.directory", "a\0b").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("catalog.dynamic_range.start", 2900, 1, 4094).is_ok());
        assert!(validate_range("catalog.dynamic_range.start", 0, 1, 4094).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("label", "10").is_ok());
        assert!(validate_non_empty_string("label", "   ").is_err());
    }
}
