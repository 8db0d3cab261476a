//! # String Conversion
//!
//! Parses one input string into a [`Value`] of the field's element kind.
//! Integer and unsigned inputs are parsed as 64-bit decimal and then
//! checked against the declared width; floats are parsed at 64 bits and
//! rounded to single precision for 32-bit fields, where magnitudes beyond
//! `f32::MAX` are overflow. Booleans accept `1 t T TRUE true True` and
//! `0 f F FALSE false False`.
//!
//! Failure yields a [`ConversionError`] and the field's validators are not
//! run.

use formtag_core::{ConversionError, ScalarKind, Value};

/// Convert `text` for parameter `param` into `kind`.
pub fn convert(text: &str, kind: ScalarKind, param: &str) -> Result<Value, ConversionError> {
    let converted = match kind {
        ScalarKind::Text => Some(Value::Text(text.to_string())),
        ScalarKind::Int { bits } => parse_int(text, bits).map(Value::Int),
        ScalarKind::Uint { bits } => parse_uint(text, bits).map(Value::Uint),
        ScalarKind::Float { bits } => parse_float(text, bits),
        ScalarKind::Bool => parse_bool(text).map(Value::Bool),
    };

    converted.ok_or_else(|| ConversionError {
        param: param.to_string(),
        value: text.to_string(),
        kind,
    })
}

fn parse_int(text: &str, bits: u32) -> Option<i64> {
    let n: i64 = text.parse().ok()?;
    if bits >= 64 {
        return Some(n);
    }
    let limit = 1i64 << (bits - 1);
    (-limit..limit).contains(&n).then_some(n)
}

fn parse_uint(text: &str, bits: u32) -> Option<u64> {
    // `u64::from_str` accepts a leading '+'.
    if text.starts_with('+') {
        return None;
    }
    let n: u64 = text.parse().ok()?;
    (bits >= 64 || n >> bits == 0).then_some(n)
}

fn parse_float(text: &str, bits: u32) -> Option<Value> {
    let n: f64 = text.parse().ok()?;
    if bits >= 64 {
        return Some(Value::Float(n));
    }
    let narrowed = n as f32;
    if narrowed.is_infinite() && n.is_finite() {
        return None;
    }
    Some(Value::Float32(narrowed))
}

fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const I8: ScalarKind = ScalarKind::Int { bits: 8 };
    const U8: ScalarKind = ScalarKind::Uint { bits: 8 };
    const F32: ScalarKind = ScalarKind::Float { bits: 32 };

    #[test]
    fn test_text_passthrough() {
        assert_eq!(convert(" a b ", ScalarKind::Text, "p").unwrap(), Value::Text(" a b ".into()));
        assert_eq!(convert("", ScalarKind::Text, "p").unwrap(), Value::Text(String::new()));
    }

    #[test]
    fn test_signed_width() {
        assert_eq!(convert("-128", I8, "n").unwrap(), Value::Int(-128));
        assert_eq!(convert("127", I8, "n").unwrap(), Value::Int(127));
        assert!(convert("128", I8, "n").is_err());
        assert!(convert("-129", I8, "n").is_err());
        assert_eq!(
            convert("-9223372036854775808", ScalarKind::Int { bits: 64 }, "n").unwrap(),
            Value::Int(i64::MIN)
        );
        assert!(convert("9223372036854775808", ScalarKind::Int { bits: 64 }, "n").is_err());
    }

    #[test]
    fn test_unsigned_width() {
        assert_eq!(convert("255", U8, "n").unwrap(), Value::Uint(255));
        let err = convert("300", U8, "n").unwrap_err();
        assert_eq!(err.value, "300");
        assert_eq!(err.kind, U8);
        assert!(convert("-1", U8, "n").is_err());
        assert!(convert("+1", U8, "n").is_err());
        assert_eq!(
            convert("18446744073709551615", ScalarKind::Uint { bits: 64 }, "n").unwrap(),
            Value::Uint(u64::MAX)
        );
    }

    #[test]
    fn test_not_a_number() {
        for input in ["", "abc", "1.5", " 1"] {
            assert!(convert(input, ScalarKind::Int { bits: 32 }, "n").is_err(), "{input:?}");
        }
    }

    #[test]
    fn test_float_single_precision() {
        match convert("0.1", F32, "x").unwrap() {
            Value::Float32(n) => assert_eq!(n, 0.1f32),
            other => panic!("unexpected {other:?}"),
        }
        assert!(convert("1e39", F32, "x").is_err());
        assert!(convert("1e39", ScalarKind::Float { bits: 64 }, "x").is_ok());
        assert!(convert("one", F32, "x").is_err());
    }

    #[test]
    fn test_single_precision_renders_as_written() {
        let value = convert("0.1", F32, "x").unwrap();
        assert_eq!(value.to_string(), "0.1");
        let wide = convert("0.1", ScalarKind::Float { bits: 64 }, "x").unwrap();
        assert_eq!(wide, Value::Float(0.1));
    }

    #[test]
    fn test_bool_forms() {
        for input in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(convert(input, ScalarKind::Bool, "b").unwrap(), Value::Bool(true));
        }
        for input in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(convert(input, ScalarKind::Bool, "b").unwrap(), Value::Bool(false));
        }
        assert!(convert("yes", ScalarKind::Bool, "b").is_err());
        assert!(convert("tRuE", ScalarKind::Bool, "b").is_err());
    }

    #[test]
    fn test_error_message() {
        let err = convert("300", U8, "count").unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"error parsing parameter count with value "300" into value of type u8"#
        );
    }
}
