//! Field checks run by builders in `build()`

use crate::{Error, Result};

/// Require that a field was set
pub fn not_null<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(Error::MissingField(field))
}

/// Require that a string field was set to a non-empty value
pub fn not_empty(value: Option<String>, field: &'static str) -> Result<String> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::EmptyField(field)),
    }
}

/// Require that a list field was set and has at least one element
pub fn not_empty_list<T>(value: Option<Vec<T>>, field: &'static str) -> Result<Vec<T>> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::EmptyField(field)),
    }
}

/// Require that a cross-field rule holds
pub fn is_true(condition: bool, message: &str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::InvalidArgument(message.to_owned()))
    }
}

/// Rule shared by every upload option: a file needs a filename
pub fn file_has_name<T>(file: Option<&T>, filename: Option<&str>) -> Result<()> {
    is_true(
        file.is_none() || filename.is_some(),
        "filename cannot be null if file is not null.",
    )
}

/// Rule shared by document uploads: send a file, metadata or both
pub fn file_or_metadata<T>(file: Option<&T>, metadata: Option<&str>) -> Result<()> {
    is_true(
        file.is_some() || metadata.is_some(),
        "At least one of file or metadata must be supplied.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_null_passes_value_through() {
        assert_eq!(not_null(Some(3), "count").unwrap(), 3);
        assert!(matches!(not_null::<u8>(None, "count"), Err(Error::MissingField("count"))));
    }

    #[test]
    fn not_null_accepts_empty_string() {
        assert_eq!(not_null(Some(String::new()), "name").unwrap(), "");
    }

    #[test]
    fn not_empty_rejects_missing_and_empty() {
        assert_eq!(not_empty(Some("env".to_owned()), "id").unwrap(), "env");
        assert!(matches!(not_empty(None, "id"), Err(Error::EmptyField("id"))));
        assert!(matches!(not_empty(Some(String::new()), "id"), Err(Error::EmptyField("id"))));
    }

    #[test]
    fn not_empty_list_requires_elements() {
        assert_eq!(not_empty_list(Some(vec![1]), "ids").unwrap(), vec![1]);
        assert!(not_empty_list::<u8>(Some(Vec::new()), "ids").is_err());
        assert!(not_empty_list::<u8>(None, "ids").is_err());
    }

    #[test]
    fn file_requires_filename() {
        assert!(file_has_name::<u8>(None, None).is_ok());
        assert!(file_has_name(Some(&1), Some("a.pdf")).is_ok());

        let err = file_has_name(Some(&1), None).unwrap_err();
        assert_eq!(err.to_string(), "filename cannot be null if file is not null.");
    }

    #[test]
    fn upload_needs_file_or_metadata() {
        assert!(file_or_metadata(Some(&1), None).is_ok());
        assert!(file_or_metadata::<u8>(None, Some("{}")).is_ok());

        let err = file_or_metadata::<u8>(None, None).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(err.to_string(), "At least one of file or metadata must be supplied.");
    }
}
