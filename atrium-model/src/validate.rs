//! Field-level validation helpers shared by the payload types.

use crate::error::ValidationError;

pub(crate) fn require_len(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min {
        return Err(ValidationError::new(
            field,
            format!("must be at least {min} characters"),
        ));
    }
    if len > max {
        return Err(ValidationError::new(
            field,
            format!("must be at most {max} characters"),
        ));
    }
    Ok(())
}

pub(crate) fn optional_len(
    field: &'static str,
    value: Option<&str>,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    match value {
        Some(v) => require_len(field, v, min, max),
        None => Ok(()),
    }
}

/// Link fields must carry an explicit scheme.
pub(crate) fn require_url(
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ValidationError::new(field, "must be a valid URL"))
    }
}

pub(crate) fn optional_url(
    field: &'static str,
    value: Option<&str>,
) -> Result<(), ValidationError> {
    match value {
        Some(v) => require_url(field, v),
        None => Ok(()),
    }
}

/// Structural email check: one `@`, non-empty local part, dotted domain.
pub(crate) fn require_email(
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    let Some((local, domain)) = value.split_once('@') else {
        return Err(ValidationError::new(field, "invalid email format"));
    };
    let valid = !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-@".contains(c));
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new(field, "invalid email format"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_requires_scheme() {
        assert!(require_url("link", "https://example.edu/apply").is_ok());
        assert!(require_url("link", "http://example.edu").is_ok());
        assert!(require_url("link", "example.edu/apply").is_err());
        assert!(require_url("link", "ftp://example.edu").is_err());
    }

    #[test]
    fn email_structure() {
        assert!(require_email("email", "oia@university.ac.in").is_ok());
        assert!(require_email("email", "first.last+tag@dept.edu").is_ok());
        assert!(require_email("email", "not-an-email").is_err());
        assert!(require_email("email", "a@b").is_err());
        assert!(require_email("email", "@dept.edu").is_err());
    }

    #[test]
    fn length_bounds_count_chars() {
        assert!(require_len("title", "héllo", 5, 5).is_ok());
        assert!(require_len("title", "hi", 3, 10).is_err());
        assert!(require_len("title", "toolongvalue", 1, 5).is_err());
    }
}
