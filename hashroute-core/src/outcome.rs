//! Outcome conversion for callback return values.

use crate::error::BoxError;

/// Trait for converting a callback's return value into a dispatch outcome.
///
/// # Default Implementations
///
/// - `()` → success
/// - `Result<T, E>` → delegates to inner `T` or propagates the error, for any
///   `E` convertible into [`BoxError`] (typed errors, `BoxError` itself, `String`)
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid callback return type",
    label = "missing `IntoOutcome` implementation",
    note = "Callbacks must return `()` or a `Result` whose error converts into `BoxError`."
)]
pub trait IntoOutcome {
    /// Convert the return value into success or a boxed error.
    fn into_outcome(self) -> Result<(), BoxError>;
}

impl IntoOutcome for () {
    fn into_outcome(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<T, E> IntoOutcome for Result<T, E>
where
    T: IntoOutcome,
    E: Into<BoxError>,
{
    fn into_outcome(self) -> Result<(), BoxError> {
        match self {
            Ok(t) => t.into_outcome(),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_is_success() {
        assert!(().into_outcome().is_ok());
    }

    #[test]
    fn test_typed_error_is_boxed() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        let err = result.into_outcome().unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_boxed_error_passes_through() {
        let result: Result<(), BoxError> = Err("already boxed".into());
        let err = result.into_outcome().unwrap_err();
        assert_eq!(err.to_string(), "already boxed");
    }
}
