use std::sync::Arc;
use std::thread;

use stokes_css_shorthand::{
    expand_margin, zero_margin, CssValue, Declaration, Origin, PrimitiveType,
    PropertyDeclarationFactory, PropertyName, ShorthandConfig, ShorthandMarginExpander,
};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn parse_all(css: &str) -> Vec<Arc<CssValue>> {
    css.split_whitespace().map(|v| Arc::new(CssValue::parse(v))).collect()
}

fn value_of<'a>(declarations: &'a [Declaration], property: &PropertyName) -> &'a CssValue {
    declarations
        .iter()
        .find(|d| &d.property == property)
        .map(|d| d.value.as_ref())
        .unwrap_or_else(|| panic!("{} missing", property))
}

#[test]
fn every_arity_covers_all_four_sides_once() {
    init_logging();
    for css in ["1px", "1px 2px", "1px 2px 3px", "1px 2px 3px 4px"] {
        let declarations = expand_margin(&parse_all(css), false, Origin::Author);
        assert_eq!(declarations.len(), 4, "{}", css);
        for side in [
            PropertyName::MarginTop,
            PropertyName::MarginRight,
            PropertyName::MarginBottom,
            PropertyName::MarginLeft,
        ] {
            assert_eq!(declarations.iter().filter(|d| d.property == side).count(), 1);
        }
    }
}

#[test]
fn sides_follow_the_box_model_rules() {
    init_logging();
    let two = expand_margin(&parse_all("4em 10%"), false, Origin::Author);
    assert_eq!(value_of(&two, &PropertyName::MarginTop), value_of(&two, &PropertyName::MarginBottom));
    assert_eq!(value_of(&two, &PropertyName::MarginRight), value_of(&two, &PropertyName::MarginLeft));
    assert_eq!(value_of(&two, &PropertyName::MarginLeft).css_text(), "10%");

    let three = expand_margin(&parse_all("1px auto 3px"), false, Origin::Author);
    assert_eq!(value_of(&three, &PropertyName::MarginTop).css_text(), "1px");
    assert_eq!(value_of(&three, &PropertyName::MarginRight), &CssValue::Zero);
    assert_eq!(value_of(&three, &PropertyName::MarginLeft), &CssValue::Zero);
    assert_eq!(value_of(&three, &PropertyName::MarginBottom).css_text(), "3px");
}

#[test]
fn no_auto_survives_expansion() {
    init_logging();
    let input = vec![
        Arc::new(CssValue::Auto),
        Arc::new(CssValue::Keyword("AUTO".to_string())),
        Arc::new(CssValue::Keyword(" Auto ".to_string())),
        Arc::new(CssValue::parse("auto")),
    ];
    let declarations = expand_margin(&input, true, Origin::UserAgent);
    assert_eq!(declarations.len(), 4);
    for declaration in &declarations {
        assert!(!declaration.value.is_auto());
        assert_eq!(declaration.value.css_text(), "0");
        assert_eq!(declaration.value.primitive_type(), PrimitiveType::Integer);
        assert!(declaration.important);
        assert_eq!(declaration.origin, Origin::UserAgent);
    }
}

#[test]
fn zero_placeholder_is_shared_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| {
            let declarations = expand_margin(&[Arc::new(CssValue::Auto)], false, Origin::Author);
            Arc::clone(&declarations[0].value)
        }))
        .collect();

    let zero = zero_margin();
    for handle in handles {
        let value = handle.join().unwrap();
        assert!(Arc::ptr_eq(&value, &zero));
    }
}

#[test]
fn stored_margin_declarations_expand_in_place() {
    init_logging();
    let stylesheet = vec![
        Declaration::new(PropertyName::Margin, Arc::new(CssValue::parse("0 auto"))),
        Declaration::new(PropertyName::MarginTop, Arc::new(CssValue::parse("2px"))),
        Declaration::new(PropertyName::Margin, Arc::new(CssValue::parse("1px 2px 3px 4px 5px"))),
    ];

    let expanded: Vec<Declaration> = stylesheet.iter().flat_map(|d| d.expand_shorthand()).collect();
    let rendered: Vec<String> = expanded.iter().map(|d| d.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "margin-top: 0",
            "margin-bottom: 0",
            "margin-right: 0",
            "margin-left: 0",
            "margin-top: 2px",
        ]
    );
}

#[test]
fn configured_expander_behaves_like_the_shared_one() {
    init_logging();
    let config = ShorthandConfig::from_json(r#"{ "warn_on_invalid_arity": false }"#).unwrap();
    let expander = ShorthandMarginExpander::new(config);
    assert!(!expander.config().warn_on_invalid_arity);

    let input = parse_all("1px 2px 3px");
    assert_eq!(
        expander.build_declarations(&input, false, &PropertyName::Margin, Origin::Author),
        expand_margin(&input, false, Origin::Author)
    );
    assert!(expander
        .build_declarations(&parse_all("1px 2px 3px 4px 5px"), false, &PropertyName::Margin, Origin::Author)
        .is_empty());
}
