//! Registries loaded from JSON manifests.

use crate::in_memory::helpers::{MODERATION_MANIFEST, moderation_handlers};
use corbel::command::adapters::{CommandManifest, HandlerTable, ManifestError};
use corbel::command::services::{Dispatcher, RegistryBuilder};
use corbel::config::DispatchConfig;
use corbel::response::domain::Effect;
use rstest::rstest;
use std::sync::Arc;

#[rstest]
fn manifest_round_trips_through_serde() {
    let manifest = CommandManifest::from_json(MODERATION_MANIFEST).expect("manifest parses");
    let encoded = serde_json::to_string(&manifest).expect("manifest serialises");

    assert_eq!(CommandManifest::from_json(&encoded).expect("re-parses"), manifest);
    assert_eq!(manifest.commands.len(), 7);
}

#[rstest]
fn manifest_registry_dispatches_with_loaded_config() {
    let config = DispatchConfig::from_json(r#"{"reject_trailing_input": false}"#).expect("config parses");
    let mut builder = RegistryBuilder::with_default_handlers();
    builder.register_all(
        CommandManifest::from_json(MODERATION_MANIFEST)
            .expect("manifest parses")
            .into_definitions(&moderation_handlers())
            .expect("handlers resolve"),
    );
    let dispatcher = Dispatcher::with_config(Arc::new(builder.freeze().expect("freezes")), config);

    let outcome = dispatcher.dispatch("user kick mallory please").expect("trailing input tolerated");
    assert_eq!(outcome.effect(), &Effect::None);
}

#[rstest]
fn missing_handlers_are_reported_before_registration() {
    let error = CommandManifest::from_json(MODERATION_MANIFEST)
        .expect("manifest parses")
        .into_definitions(&HandlerTable::new())
        .err()
        .expect("empty table resolves nothing");

    assert!(matches!(error, ManifestError::UnknownHandler { .. }));
}
