//! Integration tests for record, optional and sequence transforms.

use std::sync::Once;

use morphcopy_core::{
    describe, init_tracing, reflect_record, reflect_scalar_alias, transform, MorphConfig,
    NumericConversion, TransformError,
};

static TRACING: Once = Once::new();

fn setup() {
    TRACING.call_once(|| init_tracing(false, tracing::Level::TRACE));
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct MyInt(i64);
reflect_scalar_alias!(MyInt => i64);

#[derive(Debug, Default, Clone, PartialEq)]
struct MyString(String);
reflect_scalar_alias!(MyString => String);

#[derive(Debug, Default, Clone, PartialEq)]
struct SingleDepth {
    t_int: i64,
    t_int8: i8,
    t_int16: i16,
    t_int32: i32,
    t_myint: MyInt,
    t_string: String,
    t_mystring: MyString,
}
reflect_record!(SingleDepth {
    t_int,
    t_int8,
    t_int16,
    t_int32,
    t_myint,
    t_string,
    t_mystring,
});

#[derive(Debug, Default, Clone, PartialEq)]
struct SameSingleDepth {
    t_int: i64,
    t_int8: i8,
    t_int16: i16,
    t_int32: i32,
    t_myint: MyInt,
    t_string: String,
    t_mystring: MyString,
    t_extra_int: i64,
    t_extra: String,
}
reflect_record!(SameSingleDepth {
    t_int,
    t_int8,
    t_int16,
    t_int32,
    t_myint,
    t_string,
    t_mystring,
    t_extra_int,
    t_extra,
});

#[derive(Debug, Default, Clone, PartialEq)]
struct DepthOfTwo {
    description: String,
    same_single_depth: SameSingleDepth,
}
reflect_record!(DepthOfTwo {
    description,
    same_single_depth,
});

#[derive(Debug, Default, Clone, PartialEq)]
struct SameDepthOfTwo {
    description: String,
    extra_description: String,
    same_single_depth: SameSingleDepth,
    same_type_different_name: SameSingleDepth,
}
reflect_record!(SameDepthOfTwo {
    description,
    extra_description,
    same_single_depth,
    same_type_different_name,
});

fn single_depth() -> SingleDepth {
    SingleDepth {
        t_int: 1,
        t_int8: 127,
        t_int16: 32767,
        t_int32: 512,
        t_myint: MyInt(1024),
        t_string: "animagi".to_string(),
        t_mystring: MyString("animato".to_string()),
    }
}

#[test]
fn test_single_depth_into_wider_record() {
    setup();
    let src = single_depth();
    let mut dst = SameSingleDepth::default();
    transform(&src, &mut dst).unwrap();

    assert_eq!(dst.t_int, src.t_int);
    assert_eq!(dst.t_int8, src.t_int8);
    assert_eq!(dst.t_int16, src.t_int16);
    assert_eq!(dst.t_int32, src.t_int32);
    assert_eq!(dst.t_myint, src.t_myint);
    assert_eq!(dst.t_string, src.t_string);
    assert_eq!(dst.t_mystring, src.t_mystring);
    assert_eq!(dst.t_extra_int, 0);
    assert!(dst.t_extra.is_empty());
}

#[test]
fn test_identity_copy() {
    setup();
    let src = single_depth();
    let mut dst = SingleDepth::default();
    transform(&src, &mut dst).unwrap();
    assert_eq!(dst, src);
}

#[test]
fn test_wider_source_into_narrower_record() {
    setup();
    let src = SameSingleDepth {
        t_extra_int: 42,
        t_extra: "ignored".to_string(),
        ..SameSingleDepth::default()
    };
    let mut dst = single_depth();
    transform(&src, &mut dst).unwrap();
    assert_eq!(dst, SingleDepth::default());
}

#[test]
fn test_depth_of_two() {
    setup();
    let src = DepthOfTwo {
        description: "two".to_string(),
        same_single_depth: SameSingleDepth {
            t_int: 1,
            t_int8: 127,
            t_int16: 32767,
            t_int32: 512,
            t_myint: MyInt(1024),
            t_string: "animagi".to_string(),
            t_mystring: MyString("animato".to_string()),
            t_extra_int: 42,
            t_extra: "extra".to_string(),
        },
    };
    let mut dst = SameDepthOfTwo::default();
    transform(&src, &mut dst).unwrap();

    assert_eq!(dst.description, "two");
    assert!(dst.extra_description.is_empty());
    assert_eq!(dst.same_single_depth, src.same_single_depth);
    assert_eq!(dst.same_type_different_name, SameSingleDepth::default());
}

#[derive(Debug, Default)]
struct Abc {
    a: i32,
    b: String,
}
reflect_record!(Abc { a, b });

#[derive(Debug, Default)]
struct Acd {
    a: MyInt,
    c: u8,
}
reflect_record!(Acd { a, c });

#[test]
fn test_field_converts_across_alias_and_extra_stays_zero() {
    setup();
    let src = Abc {
        a: 420,
        b: "a string".to_string(),
    };
    let mut dst = Acd::default();
    transform(&src, &mut dst).unwrap();
    assert_eq!(dst.a, MyInt(420));
    assert_eq!(dst.c, 0);
}

#[derive(Debug, Default)]
struct Plain {
    i: i32,
    s: String,
}
reflect_record!(Plain { i, s });

#[derive(Debug, Default, PartialEq)]
struct Pointy {
    i: Option<i64>,
    s: Option<String>,
}
reflect_record!(Pointy { i, s });

#[test]
fn test_plain_field_into_optional_allocates() {
    setup();
    let src = Plain {
        i: 32,
        s: "not pointy".to_string(),
    };
    let mut dst = Pointy::default();
    transform(&src, &mut dst).unwrap();
    assert_eq!(dst.i, Some(32));
    assert_eq!(dst.s.as_deref(), Some("not pointy"));
}

#[test]
fn test_optional_field_into_plain_unwraps() {
    setup();
    let src = Pointy {
        i: Some(31),
        s: Some("pointy str".to_string()),
    };
    let mut dst = Plain::default();
    transform(&src, &mut dst).unwrap();
    assert_eq!(dst.i, 31);
    assert_eq!(dst.s, "pointy str");
}

#[test]
fn test_optional_to_optional_is_a_fresh_copy() {
    setup();
    let src = Pointy {
        i: Some(33),
        s: Some("point to me".to_string()),
    };
    let mut dst = Pointy::default();
    transform(&src, &mut dst).unwrap();
    assert_eq!(dst, src);
}

#[test]
fn test_unset_source_optional_leaves_destination() {
    setup();
    let src = Pointy { i: None, s: None };
    let mut dst = Plain {
        i: 8,
        s: "before".to_string(),
    };
    transform(&src, &mut dst).unwrap();
    assert_eq!(dst.i, 8);
    assert_eq!(dst.s, "before");
}

#[derive(Debug, Default, Clone, PartialEq)]
struct Address {
    city: String,
    zip: u32,
}
reflect_record!(Address { city, zip });

#[derive(Debug, Default, Clone, PartialEq)]
struct Contact {
    name: String,
    home: Address,
    work: Option<Address>,
    phones: Vec<String>,
    previous: Vec<Address>,
}
reflect_record!(Contact {
    name,
    home,
    work,
    phones,
    previous,
});

#[derive(Debug, Default, Clone, PartialEq)]
struct ContactView {
    name: String,
    home: Option<Address>,
    work: Option<Address>,
    phones: Vec<String>,
    previous: Vec<Address>,
}
reflect_record!(ContactView {
    name,
    home,
    work,
    phones,
    previous,
});

fn contact() -> Contact {
    Contact {
        name: "Grace".to_string(),
        home: Address {
            city: "Arlington".to_string(),
            zip: 22201,
        },
        work: None,
        phones: vec!["555-0100".to_string(), "555-0199".to_string()],
        previous: vec![Address {
            city: "New York".to_string(),
            zip: 10001,
        }],
    }
}

#[test]
fn test_record_into_optional_record_is_allocated() {
    setup();
    let src = contact();
    let mut dst = ContactView::default();
    transform(&src, &mut dst).unwrap();

    assert_eq!(dst.name, "Grace");
    assert_eq!(dst.home, Some(src.home.clone()));
    assert_eq!(dst.work, None);
    assert_eq!(dst.phones, src.phones);
    assert_eq!(dst.previous, src.previous);
}

#[test]
fn test_optional_record_into_plain_record() {
    setup();
    let src = ContactView {
        name: "Grace".to_string(),
        home: None,
        work: Some(Address {
            city: "Quantico".to_string(),
            zip: 22134,
        }),
        ..ContactView::default()
    };
    let mut dst = contact();
    transform(&src, &mut dst).unwrap();

    assert_eq!(dst.home, contact().home);
    assert_eq!(
        dst.work,
        Some(Address {
            city: "Quantico".to_string(),
            zip: 22134,
        })
    );
    assert!(dst.phones.is_empty());
    assert!(dst.previous.is_empty());
}

#[test]
fn test_set_optional_record_keeps_fields_the_source_lacks() {
    setup();

    #[derive(Debug, Default)]
    struct CityOnly {
        city: String,
    }
    reflect_record!(CityOnly { city });

    #[derive(Debug, Default)]
    struct Moved {
        home: CityOnly,
    }
    reflect_record!(Moved { home });

    #[derive(Debug, Default)]
    struct Resident {
        home: Address,
    }
    reflect_record!(Resident { home });

    #[derive(Debug, Default)]
    struct MaybeResident {
        home: Option<Address>,
    }
    reflect_record!(MaybeResident { home });

    let src = Moved {
        home: CityOnly {
            city: "Oslo".to_string(),
        },
    };
    let expected = Address {
        city: "Oslo".to_string(),
        zip: 42,
    };

    let mut plain = Resident {
        home: Address {
            city: "x".to_string(),
            zip: 42,
        },
    };
    transform(&src, &mut plain).unwrap();
    assert_eq!(plain.home, expected);

    let mut wrapped = MaybeResident {
        home: Some(Address {
            city: "x".to_string(),
            zip: 42,
        }),
    };
    transform(&src, &mut wrapped).unwrap();
    assert_eq!(wrapped.home, Some(expected));
}

#[test]
fn test_incompatible_nested_leaf_is_skipped() {
    setup();

    #[derive(Debug, Default)]
    struct Loose {
        name: i64,
        zip: String,
    }
    reflect_record!(Loose { name, zip });

    #[derive(Debug, Default)]
    struct Strict {
        name: String,
        zip: u32,
    }
    reflect_record!(Strict { name, zip });

    let src = Loose {
        name: 7,
        zip: "22201".to_string(),
    };
    let mut dst = Strict {
        name: "kept".to_string(),
        zip: 1,
    };
    transform(&src, &mut dst).unwrap();
    assert_eq!(dst.name, "kept");
    assert_eq!(dst.zip, 1);
}

#[test]
fn test_sequence_of_records_into_scalar_fails_up_front() {
    setup();
    let src = contact();
    let mut dst = 0u32;
    let err = transform(&src.previous, &mut dst).unwrap_err();
    assert!(matches!(err, TransformError::UnsupportedTransformation { .. }));
}

#[test]
fn test_configured_copier_skips_out_of_range_fields() {
    setup();

    #[derive(Debug, Default)]
    struct Wide {
        small: i64,
        big: i64,
    }
    reflect_record!(Wide { small, big });

    #[derive(Debug, Default)]
    struct Narrow {
        small: u8,
        big: u8,
    }
    reflect_record!(Narrow { small, big });

    let config: MorphConfig = toml::from_str("[copy]\nnumeric = \"checked\"\n").unwrap();
    assert_eq!(config.copy.numeric, NumericConversion::Checked);

    let src = Wide { small: 12, big: 4096 };
    let mut dst = Narrow::default();
    config.copier().transform(&src, &mut dst).unwrap();
    assert_eq!(dst.small, 12);
    assert_eq!(dst.big, 0);
}

#[test]
fn test_description_matches_copied_paths() {
    setup();
    let src = contact();
    let desc = describe(&src);
    let paths: Vec<&str> = desc.paths().map(|p| p.as_str()).collect();
    assert_eq!(
        paths,
        vec!["home.city", "home.zip", "name", "phones", "previous"]
    );
}
