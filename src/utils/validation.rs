use crate::utils::error::{FlowError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FlowError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Flow names are identifiers: ASCII letters, digits, `_` and `-`.
pub fn validate_flow_name(field_name: &str, name: &str) -> Result<()> {
    validate_non_empty_string(field_name, name)?;

    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
    {
        return Err(FlowError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: format!("Invalid character '{}' in flow name", bad),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(FlowError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_flow_name() {
        assert!(validate_flow_name("flow", "hello_flow").is_ok());
        assert!(validate_flow_name("flow", "etl-nightly2").is_ok());
        assert!(validate_flow_name("flow", "").is_err());
        assert!(validate_flow_name("flow", "   ").is_err());
        assert!(validate_flow_name("flow", "hello flow").is_err());
        assert!(validate_flow_name("flow", "hello.flow").is_err());
    }

    #[test]
    fn test_validate_one_of_reports_allowed_values() {
        let err = validate_one_of("logging.format", "xml", &["compact", "json"]).unwrap_err();
        match err {
            FlowError::InvalidConfigValueError { field, reason, .. } => {
                assert_eq!(field, "logging.format");
                assert!(reason.contains("compact, json"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
