//! Unit tests for the built-in and template response handlers.

use rstest::rstest;
use serde_json::{Value, json};

use crate::response::{
    adapters::{TemplateResponseHandler, defaults},
    domain::Effect,
    ports::handler::ResponseHandler,
};

#[rstest]
#[case(json!(null), Effect::None)]
#[case(json!("done"), Effect::None)]
fn unit_handler_discards_values(#[case] value: Value, #[case] expected: Effect) {
    assert_eq!(defaults::unit(&value), Ok(expected));
}

#[rstest]
fn reply_handler_requires_strings() {
    assert_eq!(
        defaults::reply(&json!("hello")),
        Ok(Effect::Reply("hello".to_owned()))
    );
    let error = defaults::reply(&json!(42)).expect_err("numbers are not strings");
    assert!(error.reason().contains("expected a string"));
}

#[rstest]
fn lines_handler_renders_each_element() {
    let effect = defaults::lines(&json!(["alpha", 2, true])).expect("arrays convert");
    assert_eq!(
        effect,
        Effect::Lines(vec!["alpha".to_owned(), "2".to_owned(), "true".to_owned()])
    );
    assert!(defaults::lines(&json!({"a": 1})).is_err());
}

#[rstest]
fn structured_handler_passes_values_through() {
    let value = json!({"count": 3});
    assert_eq!(defaults::structured(&value), Ok(Effect::Structured(value.clone())));
}

#[rstest]
fn template_handler_exposes_object_fields_and_value() {
    let handler = TemplateResponseHandler::new("{{ target }} / {{ value.days }}")
        .expect("template compiles");
    let effect = handler
        .apply(&json!({"target": "mallory", "days": 3}))
        .expect("render succeeds");

    assert_eq!(effect, Effect::Reply("mallory / 3".to_owned()));
}

#[rstest]
fn template_handler_can_split_lines() {
    let handler = TemplateResponseHandler::new("{% for item in value %}{{ item }}\n{% endfor %}")
        .expect("template compiles")
        .split_lines();
    let effect = handler.apply(&json!(["a", "b"])).expect("render succeeds");

    assert_eq!(effect, Effect::Lines(vec!["a".to_owned(), "b".to_owned()]));
}

#[rstest]
fn template_handler_rejects_undefined_variables_at_render() {
    let handler = TemplateResponseHandler::new("{{ missing }}").expect("template compiles");
    assert!(handler.apply(&json!({})).is_err());
}

#[rstest]
fn template_syntax_errors_fail_construction() {
    assert!(TemplateResponseHandler::new("{% if %}").is_err());
    assert!(TemplateResponseHandler::new("{{ value").is_err());
}

#[rstest]
fn template_handler_is_strict_about_nested_fields() {
    let handler = TemplateResponseHandler::new("{{ value.days }}").expect("template compiles");

    assert_eq!(handler.apply(&json!({"days": 2})), Ok(Effect::Reply("2".to_owned())));
    assert!(handler.apply(&json!({"weeks": 2})).is_err());
}

#[rstest]
fn batch_of_none_effects_is_none() {
    assert!(Effect::Batch(vec![Effect::None, Effect::Batch(Vec::new())]).is_none());
    assert!(!Effect::Batch(vec![Effect::None, Effect::Status(1)]).is_none());
}
