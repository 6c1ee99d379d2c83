//! Required-field validation shared by the entity builders

use chrono::NaiveDate;

/// A record could not be built because of missing or unusable input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field '{field}' for {entity}")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("{entity} field '{field}' must be a non-zero amount")]
    ZeroAmount {
        entity: &'static str,
        field: &'static str,
    },

    #[error("{entity} field '{field}' must be a finite number")]
    NotFinite {
        entity: &'static str,
        field: &'static str,
    },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField { field, .. }
            | ValidationError::ZeroAmount { field, .. }
            | ValidationError::NotFinite { field, .. } => field,
        }
    }
}

/// Blank and whitespace-only strings count as missing.
pub(crate) fn required_text(
    entity: &'static str,
    field: &'static str,
    value: Option<String>,
) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ValidationError::MissingField { entity, field }),
    }
}

pub(crate) fn required_date(
    entity: &'static str,
    field: &'static str,
    value: Option<NaiveDate>,
) -> Result<NaiveDate, ValidationError> {
    value.ok_or(ValidationError::MissingField { entity, field })
}

/// JSON has no representation for `inf` or `NaN`; they would be saved as `null`.
pub(crate) fn finite(
    entity: &'static str,
    field: &'static str,
    value: f64,
) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NotFinite { entity, field })
    }
}

/// Empty optional text collapses to `None`.
pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_counts_as_missing() {
        let err = required_text("sheep", "id", Some("   ".to_string())).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                entity: "sheep",
                field: "id"
            }
        );
        assert_eq!(err.to_string(), "missing required field 'id' for sheep");
    }

    #[test]
    fn present_text_is_kept_verbatim() {
        let v = required_text("pen", "name", Some(" Pen 1 ".to_string())).unwrap();
        assert_eq!(v, " Pen 1 ");
    }

    #[test]
    fn infinite_and_nan_are_not_finite() {
        assert_eq!(finite("feed record", "inQuantity", -12.5), Ok(-12.5));
        for bad in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let err = finite("feed record", "inQuantity", bad).unwrap_err();
            assert_eq!(err.field(), "inQuantity");
            assert_eq!(err.to_string(), "feed record field 'inQuantity' must be a finite number");
        }
    }

    #[test]
    fn empty_optional_text_is_none() {
        assert_eq!(optional_text(Some(String::new())), None);
        assert_eq!(optional_text(Some("R01".into())), Some("R01".into()));
    }
}
