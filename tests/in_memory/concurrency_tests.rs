//! Concurrent dispatch over one shared registry.

use crate::in_memory::helpers::registry;
use corbel::command::services::{CommandRegistry, Dispatcher};
use corbel::response::domain::Effect;
use rstest::rstest;
use std::sync::Arc;

const INPUTS: [&str; 4] = [
    "user ban 42",
    "user ban mallory 3 spamming",
    "user list",
    "user kick mallory",
];

fn effects(dispatcher: &Dispatcher) -> Vec<Effect> {
    INPUTS
        .iter()
        .map(|input| dispatcher.dispatch(input).expect("dispatch succeeds").into_effect())
        .collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_dispatches_observe_identical_outcomes(registry: Arc<CommandRegistry>) {
    let expected = effects(&Dispatcher::with_defaults(Arc::clone(&registry)));

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let shared = Arc::clone(&registry);
            tokio::task::spawn_blocking(move || effects(&Dispatcher::with_defaults(shared)))
        })
        .collect();

    for task in tasks {
        let observed = task.await.expect("dispatch task completes");
        assert_eq!(observed, expected);
    }
}

#[rstest]
fn registry_is_shareable_across_threads(registry: Arc<CommandRegistry>) {
    fn assert_send_sync<T: Send + Sync>(_value: &T) {}
    assert_send_sync(&*registry);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&registry);
            std::thread::spawn(move || effects(&Dispatcher::with_defaults(shared)))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().expect("thread completes").len(), INPUTS.len());
    }
}
