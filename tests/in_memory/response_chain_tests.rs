//! Return-type driven effect conversion through a frozen registry.

use crate::in_memory::helpers::{dispatcher, moderation_builder};
use corbel::command::domain::{CommandDefinition, CommandId, CommandPath, DispatchError, RegistryError};
use corbel::command::services::{Dispatcher, RegistryBuilder};
use corbel::response::adapters::TemplateResponseHandler;
use corbel::response::domain::{ConversionError, Effect};
use corbel::types::TypeKey;
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::Arc;

fn returning(path: &str, return_type: TypeKey, value: Value) -> CommandDefinition {
    CommandDefinition::builder(path)
        .expect("valid path")
        .returns(return_type)
        .build(move |_command| Ok(value.clone()))
}

fn tagged(tag: &'static str) -> impl Fn(&Value) -> Result<Effect, ConversionError> + Send + Sync {
    move |value: &Value| Ok(Effect::Reply(format!("{tag}:{value}")))
}

#[rstest]
fn list_and_object_returns_use_default_handlers(dispatcher: Dispatcher) {
    let users = dispatcher.dispatch("user list").expect("list dispatch");
    assert_eq!(
        users.effect(),
        &Effect::Lines(vec!["alice".to_owned(), "bob".to_owned(), "mallory".to_owned()])
    );

    let stats = dispatcher.dispatch("stats").expect("stats dispatch");
    assert_eq!(stats.effect(), &Effect::Structured(json!({"users": 3, "bans": 1})));
}

#[rstest]
fn permissive_number_handler_shadows_exact_integer_handler() {
    let mut builder = RegistryBuilder::new();
    builder
        .register_response_handler(TypeKey::NUMBER, true, tagged("number"))
        .register_response_handler(TypeKey::INTEGER, false, tagged("integer"));
    builder.register(returning("count", TypeKey::INTEGER, json!(7)));
    let dispatcher = Dispatcher::with_defaults(Arc::new(builder.freeze().expect("freezes")));

    let outcome = dispatcher.dispatch("count").expect("dispatch succeeds");
    assert_eq!(outcome.effect(), &Effect::Reply("number:7".to_owned()));
}

#[rstest]
fn unhandled_return_type_fails_freeze_every_time() {
    let record = TypeKey::new("ban-record").expect("valid key");

    for _ in 0..3 {
        let mut builder = moderation_builder();
        let id = builder.register(returning("audit", record.clone(), json!({})));

        let error = builder.freeze().err().expect("no handler for ban-record");
        assert_eq!(
            error,
            RegistryError::UnhandledReturnType {
                command: id,
                path: CommandPath::parse("audit").expect("valid"),
                return_type: record.clone(),
            }
        );
    }
}

#[rstest]
fn custom_types_render_through_templates() {
    let record = TypeKey::new("ban-record").expect("valid key");
    let mut builder = RegistryBuilder::new();
    builder.register_response_handler_shared(
        record.clone(),
        false,
        Arc::new(TemplateResponseHandler::new("{{ target }} banned until {{ until }}").expect("compiles")),
    );
    builder.register(returning(
        "audit",
        record,
        json!({"target": "mallory", "until": "2026-11-01"}),
    ));
    let dispatcher = Dispatcher::with_defaults(Arc::new(builder.freeze().expect("freezes")));

    let outcome = dispatcher.dispatch("audit").expect("dispatch succeeds");
    assert_eq!(outcome.effect(), &Effect::Reply("mallory banned until 2026-11-01".to_owned()));
    assert_eq!(outcome.command(), CommandId::new(0));
}

#[rstest]
fn handler_conversion_failure_is_isolated() {
    let mut builder = RegistryBuilder::with_default_handlers();
    builder.register(returning("bad", TypeKey::STRING, json!(["not", "a", "string"])));
    builder.register(returning("good", TypeKey::STRING, json!("fine")));
    let dispatcher = Dispatcher::with_defaults(Arc::new(builder.freeze().expect("freezes")));

    assert!(matches!(
        dispatcher.dispatch("bad"),
        Err(DispatchError::HandlerConversionFailure { .. })
    ));
    assert_eq!(
        dispatcher.dispatch("good").expect("unaffected").effect(),
        &Effect::Reply("fine".to_owned())
    );
    assert!(matches!(
        dispatcher.dispatch("bad"),
        Err(DispatchError::HandlerConversionFailure { .. })
    ));
}
