#![allow(clippy::unwrap_used, reason = "test assertions")]

use std::collections::HashSet;
use std::thread;

use css_logical::{
    LOGICALS, PhysicalProperty, PropertyFamily, SIDES, Side, TEXT_ALIGN, TextAlign,
    UnrecognizedPropertyKey, camel_case, logical_css, logical_size_css, logical_style,
    logical_text_align_css, try_logical_css, try_logical_style, try_logical_text_align_css,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn every_property_renders_its_logical_declaration() {
    init_logging();
    for &property in PhysicalProperty::ALL {
        let logical = LOGICALS.get(property.name()).unwrap();
        assert_eq!(logical_css(property, "1px"), format!("{logical}: 1px;"));
    }
}

#[test]
fn every_property_styles_under_camel_cased_logical_name() {
    init_logging();
    for &property in PhysicalProperty::ALL {
        let style = logical_style(property, "v");
        assert_eq!(style.len(), 1);
        let (key, value) = style.iter().next().unwrap();
        assert_eq!(key, &camel_case(property.logical_name()));
        assert!(!key.contains('-'));
        assert_eq!(*value, "v");
    }
}

#[test]
fn key_sets_match_their_tables() {
    let master: Vec<_> = LOGICALS.keys().collect();
    let typed: Vec<_> = PhysicalProperty::ALL.iter().map(|property| property.name()).collect();
    assert_eq!(master, typed);
    assert_eq!(master.iter().collect::<HashSet<_>>().len(), master.len());

    for &family in PropertyFamily::ALL {
        let table = family.table();
        let from_enum: Vec<_> = PhysicalProperty::ALL
            .iter()
            .filter(|property| property.family() == family)
            .map(|property| property.name())
            .collect();
        assert_eq!(table.keys().collect::<Vec<_>>(), from_enum, "{}", table.name());
    }

    let sides: Vec<_> = Side::ALL.iter().map(|side| side.name()).collect();
    assert_eq!(SIDES.keys().collect::<Vec<_>>(), sides);
    let aligns: Vec<_> = TextAlign::ALL.iter().map(|align| align.name()).collect();
    assert_eq!(TEXT_ALIGN.keys().collect::<Vec<_>>(), aligns);
}

#[test]
fn size_css_contains_both_declarations() {
    let css = logical_size_css("10px", "20px");
    assert!(css.contains("inline-size: 10px;"));
    assert!(css.contains("block-size: 20px;"));
}

#[test]
fn text_align_values() {
    assert_eq!(logical_text_align_css(TextAlign::Left), "text-align: start;");
    assert_eq!(logical_text_align_css(TextAlign::Right), "text-align: end;");
    assert_eq!(logical_text_align_css(TextAlign::Center), "text-align: center;");
}

#[test]
fn corner_radius_style() {
    let style = logical_style(PhysicalProperty::BorderTopLeftRadius, "4px");
    assert_eq!(style.len(), 1);
    assert_eq!(style.get("borderStartStartRadius"), Some(&"4px"));
}

fn translate_by_name(property: &str) -> anyhow::Result<String> {
    Ok(try_logical_css(property, 0)?)
}

#[test]
fn unknown_names_are_typed_errors() -> anyhow::Result<()> {
    init_logging();
    assert_eq!(try_logical_css("margin-top", "2px")?, "margin-block-start: 2px;");

    let err = try_logical_css("float", "left").unwrap_err();
    assert_eq!(err.key(), "float");
    assert_eq!(err.table(), "logicals");
    assert!(!err.to_string().contains("undefined"));

    let err = try_logical_style("margin-inline-start", "1px").unwrap_err();
    assert_eq!(err.key(), "margin-inline-start");
    let err = try_logical_text_align_css("justify").unwrap_err();
    assert_eq!(err.table(), "text-align");

    let wrapped = translate_by_name("").unwrap_err();
    assert_eq!(
        wrapped.downcast_ref::<UnrecognizedPropertyKey>().map(UnrecognizedPropertyKey::key),
        Some("")
    );
    assert_eq!(translate_by_name("max-height")?, "max-block-size: 0;");
    Ok(())
}

#[test]
fn lookups_are_shareable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|index| {
            thread::spawn(move || {
                let property = PhysicalProperty::ALL[index];
                try_logical_css(property.name(), index).unwrap()
            })
        })
        .collect();
    for (index, handle) in handles.into_iter().enumerate() {
        let expected = logical_css(PhysicalProperty::ALL[index], index);
        assert_eq!(handle.join().unwrap(), expected);
    }
}

const EXPECTED_LOGICALS: [(&str, &str); 55] = [
    ("margin-left", "margin-inline-start"),
    ("margin-right", "margin-inline-end"),
    ("margin-top", "margin-block-start"),
    ("margin-bottom", "margin-block-end"),
    ("margin-horizontal", "margin-inline"),
    ("margin-vertical", "margin-block"),
    ("padding-left", "padding-inline-start"),
    ("padding-right", "padding-inline-end"),
    ("padding-top", "padding-block-start"),
    ("padding-bottom", "padding-block-end"),
    ("padding-horizontal", "padding-inline"),
    ("padding-vertical", "padding-block"),
    ("top", "inset-block-start"),
    ("right", "inset-inline-end"),
    ("bottom", "inset-block-end"),
    ("left", "inset-inline-start"),
    ("horizontal", "inset-block"),
    ("vertical", "inset-inline"),
    ("inset", "inset"),
    ("height", "block-size"),
    ("width", "inline-size"),
    ("max-height", "max-block-size"),
    ("max-width", "max-inline-size"),
    ("min-height", "min-block-size"),
    ("min-width", "min-inline-size"),
    ("overflow-x", "overflow-block"),
    ("overflow-y", "overflow-inline"),
    ("border-horizontal", "border-inline"),
    ("border-horizontal-color", "border-inline-color"),
    ("border-horizontal-width", "border-inline-width"),
    ("border-horizontal-style", "border-inline-style"),
    ("border-vertical", "border-block"),
    ("border-vertical-color", "border-block-color"),
    ("border-vertical-width", "border-block-width"),
    ("border-vertical-style", "border-block-style"),
    ("border-bottom", "border-block-end"),
    ("border-bottom-color", "border-block-end-color"),
    ("border-bottom-style", "border-block-end-style"),
    ("border-bottom-width", "border-block-end-width"),
    ("border-top", "border-block-start"),
    ("border-top-color", "border-block-start-color"),
    ("border-top-style", "border-block-start-style"),
    ("border-top-width", "border-block-start-width"),
    ("border-right", "border-inline-end"),
    ("border-right-color", "border-inline-end-color"),
    ("border-right-style", "border-inline-end-style"),
    ("border-right-width", "border-inline-end-width"),
    ("border-left", "border-inline-start"),
    ("border-left-color", "border-inline-start-color"),
    ("border-left-style", "border-inline-start-style"),
    ("border-left-width", "border-inline-start-width"),
    ("border-top-left-radius", "border-start-start-radius"),
    ("border-top-right-radius", "border-start-end-radius"),
    ("border-bottom-left-radius", "border-end-start-radius"),
    ("border-bottom-right-radius", "border-end-end-radius"),
];

#[test]
fn logicals_table_contents() {
    assert_eq!(LOGICALS.entries(), EXPECTED_LOGICALS.as_slice());
    for (physical, logical) in EXPECTED_LOGICALS {
        assert_eq!(
            try_logical_css(physical, "0").unwrap(),
            format!("{logical}: 0;"),
            "{physical}"
        );
    }
}

#[test]
fn sides_table_contents() {
    let expected = [
        ("left", "inline-start"),
        ("right", "inline-end"),
        ("top", "block-start"),
        ("bottom", "block-end"),
        ("horizontal", "inline"),
        ("vertical", "block"),
    ];
    assert_eq!(SIDES.entries(), expected.as_slice());
}

#[test]
fn text_align_table_contents() {
    let expected = [("left", "start"), ("center", "center"), ("right", "end")];
    assert_eq!(TEXT_ALIGN.entries(), expected.as_slice());
}
