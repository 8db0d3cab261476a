//! # Directive Compilation Properties
//!
//! Boundary behavior of compiled `range` and `len` validators, and
//! determinism of compilation for arbitrary well-formed tags.

use formtag_core::{FieldKind, FieldSpec, ScalarKind, TagPolicy, Value};
use formtag_schema::{TagCompiler, Validator, ValidatorRegistry};
use proptest::prelude::*;

fn compile_one(kind: FieldKind, tag: String) -> Result<formtag_schema::FieldDescriptor, formtag_schema::TagError> {
    let registry = ValidatorRegistry::new();
    let compiler = TagCompiler::new(&registry, TagPolicy::Strict);
    // Field specs carry `'static` tags; leaking is acceptable in tests.
    let tag: &'static str = Box::leak(tag.into_boxed_str());
    compiler.compile(0, &FieldSpec::new("Field", kind, tag))
}

proptest! {
    #[test]
    fn test_int_range_accepts_exactly_its_interval(
        a in -1000i64..1000,
        b in -1000i64..1000,
        sample in -1200i64..1200,
    ) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let descriptor = compile_one(
            FieldKind::Scalar(ScalarKind::Int { bits: 64 }),
            format!(r#"validate:"n,range({min}:{max})""#),
        ).unwrap();
        prop_assert_eq!(&descriptor.validators, &vec![Validator::IntRange { min, max }]);
        let inside = min <= sample && sample <= max;
        prop_assert_eq!(descriptor.validators[0].validate("n", &Value::Int(sample)).is_ok(), inside);
    }

    #[test]
    fn test_inverted_range_always_rejected(a in 0u64..500, gap in 1u64..500) {
        let result = compile_one(
            FieldKind::Scalar(ScalarKind::Uint { bits: 32 }),
            format!(r#"validate:"n,range({}:{})""#, a + gap, a),
        );
        prop_assert!(result.is_err());
    }

    #[test]
    fn test_len_counts_bytes(min in 0usize..8, extra in 0usize..8, text in "\\PC{0,12}") {
        let max = min + extra;
        let descriptor = compile_one(
            FieldKind::List(ScalarKind::Text),
            format!(r#"validate:"names,len({min}:{max})""#),
        ).unwrap();
        let ok = descriptor.validators[0]
            .validate("names", &Value::Text(text.clone()))
            .is_ok();
        prop_assert_eq!(ok, (min..=max).contains(&text.len()));
    }

    #[test]
    fn test_compilation_is_deterministic(
        param in "[a-z][a-z0-9_]{0,10}",
        optional in any::<bool>(),
        lo in 0usize..10,
    ) {
        let tag = format!(
            r#"validate:"{param}{},len({lo}:{})""#,
            if optional { ",optional" } else { "" },
            lo + 5,
        );
        let first = compile_one(FieldKind::Scalar(ScalarKind::Text), tag.clone()).unwrap();
        let second = compile_one(FieldKind::Scalar(ScalarKind::Text), tag).unwrap();
        prop_assert_eq!(&first.param, &param);
        prop_assert_eq!(first.optional, optional);
        prop_assert_eq!(first, second);
    }
}
