//! # Directive Arguments
//!
//! `len` and `range` take exactly two bounds written `name(min:max)`. The
//! splitter accepts only that shape: the opening parenthesis directly
//! after the name, the closing one as the final character, no nested
//! parentheses, and exactly two non-empty tokens. `len((0:3)`, `len(:3)`,
//! `len(1,3)` and `len(0:3:4)` are all argument-count errors.
//!
//! The bound parsers reject inverted ranges regardless of number family.

use std::str::FromStr;

use crate::error::TagError;

/// Split `function(min:max)` into its two raw tokens.
pub fn split_arguments<'a>(directive: &'a str, function: &str) -> Result<(&'a str, &'a str), TagError> {
    let count_error = || TagError::ArgumentCount {
        function: function.to_string(),
        directive: directive.to_string(),
    };

    let inner = directive
        .strip_prefix(function)
        .and_then(|rest| rest.strip_prefix('('))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(count_error)?;
    if inner.contains(['(', ')']) {
        return Err(count_error());
    }

    let mut tokens = inner.split(':');
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(min), Some(max), None) if !min.is_empty() && !max.is_empty() => Ok((min, max)),
        _ => Err(count_error()),
    }
}

/// Parse signed 64-bit bounds.
pub fn int_bounds(min: &str, max: &str, function: &str) -> Result<(i64, i64), TagError> {
    parse_bounds(min, max, function, "signed integer")
}

/// Parse unsigned 64-bit bounds. Sign characters and decimal points are
/// rejected rather than truncated.
pub fn uint_bounds(min: &str, max: &str, function: &str) -> Result<(u64, u64), TagError> {
    reject_unsigned_noise(min, function)?;
    reject_unsigned_noise(max, function)?;
    parse_bounds(min, max, function, "unsigned integer")
}

/// Parse 64-bit floating bounds. NaN is not a usable bound.
pub fn float_bounds(min: &str, max: &str, function: &str) -> Result<(f64, f64), TagError> {
    let (lo, hi): (f64, f64) = parse_bounds(min, max, function, "float")?;
    for (token, parsed) in [(min, lo), (max, hi)] {
        if parsed.is_nan() {
            return Err(invalid(function, token, "float"));
        }
    }
    Ok((lo, hi))
}

/// Parse `len` bounds, which count bytes and are therefore unsigned.
pub fn length_bounds(min: &str, max: &str, function: &str) -> Result<(usize, usize), TagError> {
    reject_unsigned_noise(min, function)?;
    reject_unsigned_noise(max, function)?;
    parse_bounds(min, max, function, "length")
}

fn parse_bounds<T>(min: &str, max: &str, function: &str, expected: &'static str) -> Result<(T, T), TagError>
where
    T: FromStr + PartialOrd,
{
    let lo: T = min.parse().map_err(|_| invalid(function, min, expected))?;
    let hi: T = max.parse().map_err(|_| invalid(function, max, expected))?;
    if hi < lo {
        return Err(TagError::InvertedBounds {
            function: function.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok((lo, hi))
}

// `u64::from_str` accepts a leading '+'.
fn reject_unsigned_noise(token: &str, function: &str) -> Result<(), TagError> {
    if token.contains(['+', '-', '.']) {
        return Err(invalid(function, token, "unsigned integer"));
    }
    Ok(())
}

fn invalid(function: &str, value: &str, expected: &'static str) -> TagError {
    TagError::InvalidArgument {
        function: function.to_string(),
        value: value.to_string(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_count_error(result: Result<(&str, &str), TagError>) -> bool {
        matches!(result, Err(TagError::ArgumentCount { .. }))
    }

    #[test]
    fn test_split_two_tokens() {
        assert_eq!(split_arguments("len(0:3)", "len").unwrap(), ("0", "3"));
        assert_eq!(split_arguments("range(-10:10)", "range").unwrap(), ("-10", "10"));
    }

    #[test]
    fn test_split_rejects_wrong_count() {
        assert!(is_count_error(split_arguments("len(0:3:4)", "len")));
        assert!(is_count_error(split_arguments("len(1,3)", "len")));
        assert!(is_count_error(split_arguments("len(:3)", "len")));
        assert!(is_count_error(split_arguments("len(3:)", "len")));
        assert!(is_count_error(split_arguments("len()", "len")));
    }

    #[test]
    fn test_split_rejects_bad_shape() {
        assert!(is_count_error(split_arguments("len((0:3)", "len")));
        assert!(is_count_error(split_arguments("len(0:3))", "len")));
        assert!(is_count_error(split_arguments("len", "len")));
        assert!(is_count_error(split_arguments("len 0:3", "len")));
        assert!(is_count_error(split_arguments("len(0:3", "len")));
        assert!(is_count_error(split_arguments("len(0:3)x", "len")));
    }

    #[test]
    fn test_int_bounds() {
        assert_eq!(int_bounds("-10", "10", "range").unwrap(), (-10, 10));
        assert!(matches!(
            int_bounds("a", "10", "range"),
            Err(TagError::InvalidArgument { ref value, .. }) if value == "a"
        ));
        assert!(matches!(
            int_bounds("5", "1", "range"),
            Err(TagError::InvertedBounds { .. })
        ));
    }

    #[test]
    fn test_equal_bounds_accepted() {
        assert_eq!(int_bounds("3", "3", "range").unwrap(), (3, 3));
        assert_eq!(length_bounds("2", "2", "len").unwrap(), (2, 2));
    }

    #[test]
    fn test_uint_bounds_reject_sign_and_point() {
        assert_eq!(uint_bounds("0", "18446744073709551615", "range").unwrap(), (0, u64::MAX));
        assert!(uint_bounds("+1", "3", "range").is_err());
        assert!(uint_bounds("-1", "3", "range").is_err());
        assert!(uint_bounds("1", "3.5", "range").is_err());
    }

    #[test]
    fn test_uint_bounds_error_names_offending_token() {
        match uint_bounds("1", "x", "range") {
            Err(TagError::InvalidArgument { value, .. }) => assert_eq!(value, "x"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_float_bounds() {
        let (lo, hi) = float_bounds("0.00000003", "0.000006", "range").unwrap();
        assert!(lo < hi);
        assert!(float_bounds("NaN", "1.0", "range").is_err());
        assert!(matches!(
            float_bounds("3.3", "1.2", "range"),
            Err(TagError::InvertedBounds { .. })
        ));
    }

    #[test]
    fn test_length_bounds_are_unsigned() {
        assert_eq!(length_bounds("0", "5", "len").unwrap(), (0, 5));
        assert!(length_bounds("-1", "5", "len").is_err());
    }
}
