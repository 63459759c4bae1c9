use crate::utils::error::{Result, SumError};

pub fn validate_required_argument<T>(value: &Option<T>) -> Result<&T> {
    value.as_ref().ok_or(SumError::MissingArgument)
}

/// Converts the raw token into an integer. Surrounding whitespace, a leading
/// `+` and single `_` separators between digits (`1_000`) are accepted.
pub fn parse_integer(raw: &str) -> Result<i128> {
    strip_digit_separators(raw.trim())
        .parse::<i128>()
        .map_err(|source| SumError::InvalidInput {
            input: raw.to_string(),
            source,
        })
}

/// Drops `_` only when it sits between two digits; any other underscore is
/// kept so the conversion rejects it.
fn strip_digit_separators(token: &str) -> String {
    let bytes = token.as_bytes();
    token
        .char_indices()
        .filter(|&(i, c)| {
            if c != '_' {
                return true;
            }
            let before = i.checked_sub(1).and_then(|j| bytes.get(j));
            let after = bytes.get(i + 1);
            !matches!(
                (before, after),
                (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit()
            )
        })
        .map(|(_, c)| c)
        .collect()
}

pub fn validate_positive(value: i128) -> Result<i128> {
    if value <= 0 {
        return Err(SumError::NotPositive { value });
    }
    Ok(value)
}

pub fn parse_positive_integer(raw: &str) -> Result<i128> {
    parse_integer(raw).and_then(validate_positive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorCategory;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("42").unwrap(), 42);
        assert_eq!(parse_integer(" 7\n").unwrap(), 7);
        assert_eq!(parse_integer("+5").unwrap(), 5);
        assert_eq!(parse_integer("-3").unwrap(), -3);

        for bad in ["abc", "", "1.5", "12abc", "1e3"] {
            let err = parse_integer(bad).unwrap_err();
            assert_eq!(err.category(), ErrorCategory::Conversion, "input {bad:?}");
        }
    }

    #[test]
    fn test_parse_integer_digit_separators() {
        assert_eq!(parse_integer("1_000").unwrap(), 1000);
        assert_eq!(parse_integer("-1_0").unwrap(), -10);

        for bad in ["_1000", "1000_", "1__000", "+_1"] {
            let err = parse_integer(bad).unwrap_err();
            assert_eq!(err.category(), ErrorCategory::Conversion, "input {bad:?}");
        }
    }

    #[test]
    fn test_parse_integer_out_of_range() {
        let err = parse_integer("999999999999999999999999999999999999999999").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Conversion);
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(1).is_ok());
        assert!(matches!(
            validate_positive(0),
            Err(SumError::NotPositive { value: 0 })
        ));
        assert!(matches!(
            validate_positive(-3),
            Err(SumError::NotPositive { value: -3 })
        ));
    }

    #[test]
    fn test_validate_required_argument() {
        assert_eq!(validate_required_argument(&Some(3)).unwrap(), &3);
        assert!(matches!(
            validate_required_argument::<String>(&None),
            Err(SumError::MissingArgument)
        ));
    }
}
