//! Result type alias for PiiScout

use super::errors::PiiScoutError;

/// Result type alias for PiiScout operations
///
/// # Examples
///
/// ```
/// use piiscout::domain::result::Result;
/// use piiscout::domain::errors::PiiScoutError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(PiiScoutError::Report("sink closed".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, PiiScoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(PiiScoutError::Other("test error".to_string()));
        assert!(result.is_err());
    }
}
