//! Channel-driven event handling.

use super::helpers::{Harness, harness, seed};
use rstest::rstest;
use serde_json::json;
use todo_controller::todo::domain::{RenderInstruction, TodoId, ViewEvent};
use tokio::sync::mpsc;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn run_handles_events_until_the_view_disconnects(harness: Harness) {
    seed(&harness.store, &[(1, "a", false), (2, "b", false)]).expect("seed");
    let (events, receiver) = mpsc::channel(8);
    let controller = harness.controller.clone();
    let worker = tokio::spawn(async move { controller.run(receiver).await });

    events
        .send(ViewEvent::ToggleAll { completed: true })
        .await
        .expect("send");
    events
        .send(ViewEvent::ItemRemove { id: TodoId::new(99) })
        .await
        .expect("send");
    events
        .send(ViewEvent::ItemRemove { id: TodoId::new(2) })
        .await
        .expect("send");
    drop(events);
    worker.await.expect("event loop finishes");

    assert_eq!(
        harness.presenter.instructions().expect("presenter log"),
        vec![
            RenderInstruction::ElementComplete {
                id: TodoId::new(1),
                completed: true
            },
            RenderInstruction::ElementComplete {
                id: TodoId::new(2),
                completed: true
            },
            RenderInstruction::RemoveItem(TodoId::new(2)),
            RenderInstruction::UpdateElementCount(0),
        ]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn wire_events_drive_the_controller(harness: Harness) {
    seed(&harness.store, &[(21, "my todo", false)]).expect("seed");

    harness
        .controller
        .handle_wire("itemToggle", json!({"id": 21, "completed": true}))
        .await
        .expect("toggle");
    harness
        .controller
        .handle_wire("itemEditDone", json!({"id": 21, "title": "renamed"}))
        .await
        .expect("edit");
    harness
        .controller
        .handle_wire("itemToggle", json!({"completed": true}))
        .await
        .expect("malformed event ignored");

    let stored = harness.store.snapshot().expect("snapshot");
    assert!(matches!(
        stored.as_slice(),
        [todo] if todo.completed() && todo.title() == "renamed"
    ));
    assert_eq!(
        harness.presenter.instructions().expect("presenter log").len(),
        2
    );
}
