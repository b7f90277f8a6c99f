//! Overload resolution through the full dispatch pipeline.

use crate::in_memory::helpers::{dispatcher, moderation_builder, registry};
use corbel::command::domain::{
    BindFailure, CommandDefinition, CommandId, CommandPath, DispatchError, ParameterSpec,
};
use corbel::command::services::{CommandRegistry, Dispatcher};
use corbel::response::domain::Effect;
use corbel::types::TypeKey;
use rstest::rstest;
use serde_json::json;
use std::sync::Arc;

fn reply(text: &str) -> Effect {
    Effect::Reply(text.to_owned())
}

#[rstest]
fn numeric_input_selects_prioritized_overload(dispatcher: Dispatcher) {
    let outcome = dispatcher.dispatch("user ban 42").expect("dispatch succeeds");

    assert_eq!(outcome.effect(), &reply("banned user #42"));
    assert_eq!(outcome.command(), CommandId::new(1));
}

#[rstest]
fn non_numeric_input_falls_through_to_next_overload(dispatcher: Dispatcher) {
    let outcome = dispatcher
        .dispatch("user ban mallory 3 spamming the chat")
        .expect("dispatch succeeds");

    assert_eq!(outcome.effect(), &reply("banned mallory for 3d: spamming the chat"));
    assert_eq!(outcome.command(), CommandId::new(0));
}

#[rstest]
fn defaults_apply_when_input_runs_out(dispatcher: Dispatcher) {
    let outcome = dispatcher.dispatch("user ban mallory").expect("dispatch succeeds");
    assert_eq!(outcome.effect(), &reply("banned mallory for 1d: no reason given"));
}

#[rstest]
fn out_of_range_values_exhaust_every_overload(dispatcher: Dispatcher) {
    let error = dispatcher
        .dispatch("user ban mallory 999")
        .err()
        .expect("999 days is out of range");

    let DispatchError::NoMatchingOverload(no_match) = error else {
        panic!("expected NoMatchingOverload");
    };
    assert_eq!(no_match.path.to_string(), "user ban");
    assert_eq!(no_match.attempts.len(), 2);
    assert!(no_match.attempts.iter().all(|attempt| matches!(
        attempt.failure,
        BindFailure::Rejected { .. }
    )));
}

#[rstest]
fn option_constraints_gate_binding(dispatcher: Dispatcher) {
    assert!(dispatcher.dispatch("user mute mallory voice").is_ok());
    assert!(matches!(
        dispatcher.dispatch("user mute mallory everywhere"),
        Err(DispatchError::NoMatchingOverload(_))
    ));
}

#[rstest]
fn equal_priority_resolution_is_stable_across_runs() {
    for _ in 0..5 {
        let mut builder = moderation_builder();
        let first = builder.register(
            CommandDefinition::builder("ping")
                .expect("valid path")
                .priority(3)
                .returns(TypeKey::STRING)
                .build(|_command| Ok(json!("first"))),
        );
        builder.register(
            CommandDefinition::builder("ping")
                .expect("valid path")
                .priority(3)
                .returns(TypeKey::STRING)
                .build(|_command| Ok(json!("second"))),
        );
        let dispatcher = Dispatcher::with_defaults(Arc::new(builder.freeze().expect("freezes")));

        let outcome = dispatcher.dispatch("ping").expect("dispatch succeeds");
        assert_eq!(outcome.command(), first);
        assert_eq!(outcome.effect(), &reply("first"));
    }
}

#[rstest]
fn longest_registered_prefix_wins(registry: Arc<CommandRegistry>) {
    let mut builder = moderation_builder();
    builder.register(
        CommandDefinition::builder("user")
            .expect("valid path")
            .parameter(
                ParameterSpec::new("rest", TypeKey::TEXT).expect("valid parameter"),
            )
            .returns(TypeKey::STRING)
            .build(|_command| Ok(json!("user root"))),
    );
    let dispatcher = Dispatcher::with_defaults(Arc::new(builder.freeze().expect("freezes")));

    assert_eq!(
        dispatcher.dispatch("user kick mallory").expect("kick matches").effect(),
        &Effect::None
    );
    assert_eq!(
        dispatcher.dispatch("user wave mallory").expect("root matches").effect(),
        &reply("user root")
    );
    let user = CommandPath::parse("user").expect("valid path");
    assert!(!registry.contains_path(&user));
}
