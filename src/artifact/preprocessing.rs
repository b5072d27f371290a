//! Preprocessing script validation

use super::error::{ExportError, Result};

/// Required entry-point name for preprocessing scripts.
pub const CANONICAL_ENTRY_POINT: &str = "preprocess";

/// A preprocessing step shipped alongside a model as Python source text.
///
/// The service invokes the script's entry point on inference inputs, so
/// the declared function must carry exactly the name
/// [`CANONICAL_ENTRY_POINT`]. Absence of preprocessing is represented by
/// `Option::None`, never by a placeholder script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreprocessingScript {
    source: String,
}

impl PreprocessingScript {
    /// Validate source text and build a script.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::NamingConvention`] if the first declared
    /// function is not named `preprocess`.
    pub fn parse(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        match declared_name(&source) {
            Some(name) if name == CANONICAL_ENTRY_POINT => Ok(Self { source }),
            found => Err(ExportError::NamingConvention {
                expected: CANONICAL_ENTRY_POINT,
                found: found.unwrap_or_default(),
            }),
        }
    }

    /// The exact source text uploaded to the service.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Name of the function declared at the top of `source`, if any.
fn declared_name(source: &str) -> Option<String> {
    let rest = source.trim_start().strip_prefix("def ")?;
    let name: String = rest
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_name() {
        let script = PreprocessingScript::parse("def preprocess(x):\n    return x\n").unwrap();
        assert_eq!(script.source(), "def preprocess(x):\n    return x\n");
    }

    #[test]
    fn test_parse_preserves_source_verbatim() {
        let source = "def preprocess(data):\n    # strip nulls\n    return [d for d in data if d]\n";
        let script = PreprocessingScript::parse(source).unwrap();
        assert_eq!(script.source(), source);
    }

    #[test]
    fn test_parse_rejects_misnamed_function() {
        let err = PreprocessingScript::parse("def clean_data(x):\n    return x\n").unwrap_err();
        match err {
            ExportError::NamingConvention { expected, found } => {
                assert_eq!(expected, "preprocess");
                assert_eq!(found, "clean_data");
            }
            other => panic!("Expected NamingConvention, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_name_with_canonical_prefix() {
        let err = PreprocessingScript::parse("def preprocessor(x):\n    return x\n").unwrap_err();
        assert!(matches!(err, ExportError::NamingConvention { .. }));
    }

    #[test]
    fn test_parse_rejects_non_function_source() {
        let err = PreprocessingScript::parse("import numpy as np\n").unwrap_err();
        match err {
            ExportError::NamingConvention { found, .. } => assert!(found.is_empty()),
            other => panic!("Expected NamingConvention, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_allows_leading_whitespace() {
        assert!(PreprocessingScript::parse("\n\ndef preprocess(x):\n    return x\n").is_ok());
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_only_canonical_name_accepted(name in "[a-z_][a-z0-9_]{0,20}") {
            let source = format!("def {name}(x):\n    return x\n");
            let result = PreprocessingScript::parse(source);
            prop_assert_eq!(result.is_ok(), name == CANONICAL_ENTRY_POINT);
        }

        #[test]
        fn prop_canonical_body_always_accepted(body in "[ -~]{0,80}") {
            let source = format!("def preprocess(x):\n    {body}\n");
            prop_assert!(PreprocessingScript::parse(source).is_ok());
        }
    }
}
