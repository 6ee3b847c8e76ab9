//! Route activation against a populated in-memory store.

use super::helpers::{Harness, harness, seed};
use rstest::rstest;
use todo_controller::todo::domain::{Filter, RenderInstruction, ViewEvent};

#[rstest]
#[case("", "", 3)]
#[case("#/", "", 3)]
#[case("#/active", "active", 1)]
#[case("#/completed", "completed", 2)]
#[tokio::test(flavor = "multi_thread")]
async fn activation_shows_filtered_entries(
    harness: Harness,
    #[case] route: &str,
    #[case] filter: &str,
    #[case] shown: usize,
) {
    seed(
        &harness.store,
        &[(1, "a", true), (2, "b", false), (3, "c", true)],
    )
    .expect("seed");

    harness.controller.activate(route).await.expect("activation");

    let entries = harness.presenter.named("showEntries").expect("presenter log");
    assert!(matches!(
        entries.as_slice(),
        [RenderInstruction::ShowEntries(todos)] if todos.len() == shown
    ));
    assert!(harness
        .presenter
        .contains(&RenderInstruction::SetFilter(filter.to_owned()))
        .expect("presenter log"));
    assert!(harness
        .presenter
        .contains(&RenderInstruction::ClearCompletedButton {
            completed: 2,
            visible: true
        })
        .expect("presenter log"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn new_todo_in_completed_view_is_not_shown(harness: Harness) {
    seed(&harness.store, &[(1, "done", true)]).expect("seed");
    harness
        .controller
        .activate("#/completed")
        .await
        .expect("activation");
    harness.presenter.clear().expect("presenter log");

    harness
        .controller
        .handle(ViewEvent::NewTodo {
            title: "open".to_owned(),
        })
        .await
        .expect("creation");

    let instructions = harness.presenter.instructions().expect("presenter log");
    assert!(matches!(
        instructions.as_slice(),
        [RenderInstruction::ShowEntries(todos), RenderInstruction::ClearNewTodo]
            if todos.len() == 1 && todos.iter().all(|todo| todo.completed())
    ));
    assert_eq!(harness.store.snapshot().expect("snapshot").len(), 2);
    assert_eq!(harness.controller.current_filter().await, Filter::Completed);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn remove_completed_then_reactivate_hides_content(harness: Harness) {
    seed(&harness.store, &[(1, "a", true), (2, "b", true)]).expect("seed");

    harness
        .controller
        .handle(ViewEvent::RemoveCompleted)
        .await
        .expect("removal");
    harness.controller.activate("").await.expect("activation");

    assert_eq!(
        harness.presenter.named("removeItem").expect("presenter log").len(),
        2
    );
    assert!(harness
        .presenter
        .contains(&RenderInstruction::ContentBlockVisibility { visible: false })
        .expect("presenter log"));
    assert!(harness
        .presenter
        .contains(&RenderInstruction::ToggleAll { checked: false })
        .expect("presenter log"));
}
