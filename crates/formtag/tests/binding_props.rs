//! # Binding Properties
//!
//! Range and length boundaries hold end to end, every in-width integer
//! round-trips through conversion, and out-of-width input never reaches
//! the record.

use formtag::{form, Decoder, DecoderConfig, FormError, Params};
use proptest::prelude::*;

form! {
    #[derive(Debug, Default)]
    struct Bounded {
        pub level: i32 => r#"validate:"level,range(-50:50)""#,
        pub label: String => r#"validate:"label,optional,len(2:6)""#,
    }
}

form! {
    #[derive(Debug, Default)]
    struct Widths {
        pub small: i8 => r#"validate:"small""#,
        pub byte: u8 => r#"validate:"byte""#,
    }
}

fn single(name: &str, value: &str) -> Params {
    [(name, value)].into_iter().collect()
}

proptest! {
    #[test]
    fn test_range_inclusive_end_to_end(level in -200i32..200) {
        let decoder = Decoder::new(DecoderConfig::default());
        let mut form = Bounded::default();
        let result = decoder.assign(&single("level", &level.to_string()), &mut form);
        if (-50..=50).contains(&level) {
            prop_assert!(result.is_ok());
            prop_assert_eq!(form.level, level);
        } else {
            let rejected = matches!(result, Err(FormError::Validation(_)));
            prop_assert!(rejected);
            prop_assert_eq!(form.level, 0);
        }
    }

    #[test]
    fn test_len_inclusive_end_to_end(label in "[a-z]{1,9}") {
        let decoder = Decoder::new(DecoderConfig::default());
        let mut form = Bounded::default();
        let mut params = single("level", "0");
        params.append("label", label.clone());
        let result = decoder.assign(&params, &mut form);
        prop_assert_eq!(result.is_ok(), (2..=6).contains(&label.len()));
    }

    #[test]
    fn test_integer_widths(small in any::<i16>(), byte in any::<u16>()) {
        let decoder = Decoder::new(DecoderConfig::default());
        let mut form = Widths::default();
        let mut params = single("small", &small.to_string());
        params.append("byte", byte.to_string());

        let result = decoder.assign(&params, &mut form);
        let fits = i8::try_from(small).is_ok() && u8::try_from(byte).is_ok();
        prop_assert_eq!(result.is_ok(), fits);
        if fits {
            prop_assert_eq!(i16::from(form.small), small);
            prop_assert_eq!(u16::from(form.byte), byte);
        } else {
            let conversion = matches!(result, Err(FormError::Conversion(_)));
            prop_assert!(conversion);
        }
    }
}
