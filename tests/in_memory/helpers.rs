//! Shared fixtures for in-memory dispatch integration tests.

use corbel::command::adapters::{CommandManifest, HandlerTable};
use corbel::command::domain::{CommandFailure, ResolvedCommand};
use corbel::command::services::{CommandRegistry, Dispatcher, RegistryBuilder};
use rstest::fixture;
use serde_json::{Value, json};
use std::sync::Arc;

/// Manifest describing a small moderation command set.
pub const MODERATION_MANIFEST: &str = r#"{
    "commands": [
        {
            "path": "user ban",
            "description": "Ban a user by name",
            "parameters": [
                { "name": "target", "type": "string" },
                { "name": "days", "type": "integer", "default": 1, "min": 1, "max": 365 },
                { "name": "reason", "type": "text", "default": "no reason given" }
            ],
            "returns": "string",
            "handler": "ban_by_name"
        },
        {
            "path": "user ban",
            "description": "Ban a user by numeric id",
            "parameters": [ { "name": "id", "type": "integer" } ],
            "priority": 1,
            "returns": "string",
            "handler": "ban_by_id"
        },
        {
            "path": "user kick",
            "description": "Kick a user",
            "parameters": [ { "name": "target", "type": "string" } ],
            "handler": "noop"
        },
        {
            "path": "user list",
            "description": "List users",
            "returns": "list",
            "handler": "list_users"
        },
        {
            "path": "user mute",
            "description": "Mute a user",
            "parameters": [
                { "name": "target", "type": "string" },
                { "name": "scope", "type": "string", "options": ["voice", "text"], "default": "text" }
            ],
            "handler": "noop"
        },
        {
            "path": "config reload",
            "description": "Reload configuration",
            "handler": "noop"
        },
        {
            "path": "stats",
            "description": "Show statistics",
            "returns": "object",
            "handler": "stats"
        }
    ]
}"#;

fn argument_text(command: &ResolvedCommand<'_>, name: &str) -> String {
    command
        .argument(name)
        .map(|value| value.as_str().map_or_else(|| value.to_string(), str::to_owned))
        .unwrap_or_default()
}

/// Command bodies referenced by [`MODERATION_MANIFEST`].
#[must_use]
pub fn moderation_handlers() -> HandlerTable {
    let mut table = HandlerTable::new();
    table
        .insert("noop", |_command: &ResolvedCommand<'_>| Ok(Value::Null))
        .insert("ban_by_name", |command: &ResolvedCommand<'_>| {
            Ok(json!(format!(
                "banned {} for {}d: {}",
                argument_text(command, "target"),
                argument_text(command, "days"),
                argument_text(command, "reason"),
            )))
        })
        .insert("ban_by_id", |command: &ResolvedCommand<'_>| {
            Ok(json!(format!("banned user #{}", argument_text(command, "id"))))
        })
        .insert("list_users", |_command: &ResolvedCommand<'_>| {
            Ok(json!(["alice", "bob", "mallory"]))
        })
        .insert("stats", |_command: &ResolvedCommand<'_>| -> Result<Value, CommandFailure> {
            Ok(json!({ "users": 3, "bans": 1 }))
        });
    table
}

/// Builds a registry builder holding the moderation commands and the
/// default response handlers.
///
/// # Panics
///
/// Panics when the manifest or handler table is inconsistent.
#[must_use]
pub fn moderation_builder() -> RegistryBuilder {
    let definitions = CommandManifest::from_json(MODERATION_MANIFEST)
        .expect("manifest parses")
        .into_definitions(&moderation_handlers())
        .expect("every handler is known");
    let mut builder = RegistryBuilder::with_default_handlers();
    builder.register_all(definitions);
    builder
}

/// Provides the frozen moderation registry.
#[fixture]
pub fn registry() -> Arc<CommandRegistry> {
    Arc::new(moderation_builder().freeze().expect("registry freezes"))
}

/// Provides a dispatcher with the reference collaborators.
#[fixture]
pub fn dispatcher(registry: Arc<CommandRegistry>) -> Dispatcher {
    Dispatcher::with_defaults(registry)
}
