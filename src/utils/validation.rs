use crate::utils::error::{PatchError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PatchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PatchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PatchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list(field_name: &str, values: &[String]) -> Result<()> {
    if values.is_empty() {
        return Err(PatchError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    for value in values {
        validate_non_empty_string(field_name, value)?;
    }
    Ok(())
}

/// Fails if a target mentions a protected name, since such a target could never be replaced.
pub fn validate_not_shadowed(field_name: &str, protected: &[String], targets: &[String]) -> Result<()> {
    for target in targets {
        if let Some(name) = protected.iter().find(|name| target.contains(name.as_str())) {
            return Err(PatchError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: target.clone(),
                reason: format!("Target is shadowed by protected name '{}'", name),
            });
        }
    }
    Ok(())
}

/// Fails if `value` spans more than one line.
pub fn validate_single_line(field_name: &str, value: &str) -> Result<()> {
    if value.contains(['\n', '\r']) {
        return Err(PatchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.escape_debug().to_string(),
            reason: "Value must not contain line breaks".to_string(),
        });
    }
    Ok(())
}

/// Fails if `text` contains any of `names` as a substring.
pub fn validate_free_of(field_name: &str, text: &str, names: &[String]) -> Result<()> {
    if let Some(name) = names.iter().find(|name| text.contains(name.as_str())) {
        return Err(PatchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: text.to_string(),
            reason: format!("Must not mention component '{}'", name),
        });
    }
    Ok(())
}
