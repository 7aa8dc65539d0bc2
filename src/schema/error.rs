use thiserror::Error;

/// Why a raw description was rejected. Raised only during construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("missing required attribute `{name}`")]
    MissingRequiredAttribute { name: String },

    #[error("attribute `{name}` must be {expected}")]
    TypeMismatch { name: String, expected: String },

    #[error("attribute `{name}` = {value} violates {rule}")]
    ConstraintViolation {
        name: String,
        rule: String,
        value: String,
    },

    #[error("{}: {source}", segment(name, *index))]
    Nested {
        name: String,
        index: Option<usize>,
        source: Box<ValidationError>,
    },
}

fn segment(name: &str, index: Option<usize>) -> String {
    match index {
        Some(i) => format!("{}[{}]", name, i),
        None => name.to_string(),
    }
}

impl ValidationError {
    pub(crate) fn nested(name: &str, index: Option<usize>, inner: ValidationError) -> Self {
        ValidationError::Nested {
            name: name.to_string(),
            index,
            source: Box::new(inner),
        }
    }

    /// Dotted path to the offending attribute, e.g. `group[0].task[1].resources.cpu`.
    pub fn path(&self) -> String {
        match self {
            ValidationError::MissingRequiredAttribute { name }
            | ValidationError::TypeMismatch { name, .. }
            | ValidationError::ConstraintViolation { name, .. } => name.clone(),
            ValidationError::Nested {
                name,
                index,
                source,
            } => format!("{}.{}", segment(name, *index), source.path()),
        }
    }

    /// Innermost, non-nested error.
    pub fn root_cause(&self) -> &ValidationError {
        match self {
            ValidationError::Nested { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nested_errors_carry_the_path() {
        let inner = ValidationError::ConstraintViolation {
            name: "cpu".into(),
            rule: ">= 1".into(),
            value: "0".into(),
        };
        let err = ValidationError::nested(
            "group",
            Some(0),
            ValidationError::nested(
                "task",
                Some(1),
                ValidationError::nested("resources", None, inner.clone()),
            ),
        );

        assert_eq!(err.path(), "group[0].task[1].resources.cpu");
        assert_eq!(err.root_cause(), &inner);
        assert_eq!(
            err.to_string(),
            "group[0]: task[1]: resources: attribute `cpu` = 0 violates >= 1"
        );
    }
}
