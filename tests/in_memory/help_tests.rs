//! Help listings over the moderation registry.

use crate::in_memory::helpers::registry;
use corbel::command::domain::CommandPath;
use corbel::command::services::CommandRegistry;
use corbel::config::DispatchConfig;
use corbel::help::adapters::HelpPageRenderer;
use corbel::help::domain::{InvalidPageRequest, ListKind, PageSize};
use corbel::help::services::HelpIndex;
use corbel::response::domain::Effect;
use rstest::rstest;
use std::sync::Arc;

fn path(raw: &str) -> CommandPath {
    CommandPath::parse(raw).expect("valid path")
}

#[rstest]
fn children_of_user_paginate_without_gaps(registry: Arc<CommandRegistry>) {
    let index = HelpIndex::new(registry, PageSize::new(2).expect("non-zero"));
    let children = index.children(&path("user"));

    assert_eq!(children.len(), 5);
    assert_eq!(children.page_count(index.page_size()), 3);

    let mut seen = Vec::new();
    for number in 1..=3 {
        let page = index.page(&children, number).expect("page in range");
        seen.extend(page.iter().cloned());
    }
    assert_eq!(seen.as_slice(), children.all());

    assert_eq!(
        index.page(&children, 0).err(),
        Some(InvalidPageRequest {
            page: 0,
            page_size: 2,
            page_count: 3
        })
    );
    assert_eq!(index.page(&children, 4).err().map(|error| error.page_count), Some(3));
}

#[rstest]
fn sibling_and_related_lists_share_the_same_contract(registry: Arc<CommandRegistry>) {
    let index = HelpIndex::from_config(registry, &DispatchConfig::default());

    let siblings = index.siblings(&path("user kick"));
    assert_eq!(siblings.kind(), ListKind::Siblings);
    assert_eq!(siblings.len(), 4);
    assert_eq!(siblings.page_count(index.page_size()), 1);

    let related = index.related(&path("config"));
    assert_eq!(related.kind(), ListKind::Related);
    let related_paths: Vec<String> = related.iter().map(|entry| entry.path.to_string()).collect();
    assert_eq!(related_paths, vec!["config reload", "stats"]);
}

#[rstest]
fn rendered_page_lists_usage_and_description(registry: Arc<CommandRegistry>) {
    let index = HelpIndex::new(registry, PageSize::new(3).expect("non-zero"));
    let children = index.children(&path("user"));
    let page = index.page(&children, 1).expect("first page");

    let effect = HelpPageRenderer::default()
        .render(children.kind().as_str(), &page)
        .expect("renders");

    assert_eq!(
        effect,
        Effect::Lines(vec![
            "children commands (page 1/2)".to_owned(),
            "user ban <target> [days] [reason...] - Ban a user by name".to_owned(),
            "user ban <id> - Ban a user by numeric id".to_owned(),
            "user kick <target> - Kick a user".to_owned(),
        ])
    );
}
