//! When steps for todo controller BDD scenarios.

use super::world::{TodoWorld, run_async};
use rstest_bdd_macros::when;
use todo_controller::todo::domain::ViewEvent;

#[when(r#"the view switches to route "{route}""#)]
fn show_list(world: &mut TodoWorld, route: String) {
    world.last_result = Some(run_async(world.controller.activate(&route)));
}

#[when("all todos are toggled to completed")]
fn toggle_all(world: &mut TodoWorld) {
    world.last_result = Some(run_async(
        world
            .controller
            .handle(ViewEvent::ToggleAll { completed: true }),
    ));
}

#[when(r#"the edit of "{title}" is finished with a blank title"#)]
fn finish_edit_blank(world: &mut TodoWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.id_of(&title)?;
    world.last_result = Some(run_async(world.controller.handle(ViewEvent::ItemEditDone {
        id,
        title: String::new(),
    })));
    Ok(())
}

#[when(r#"the edit of "{title}" is cancelled"#)]
fn cancel_edit(world: &mut TodoWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.id_of(&title)?;
    world.last_result = Some(run_async(
        world.controller.handle(ViewEvent::ItemEditCancel { id }),
    ));
    Ok(())
}

#[when(r#"a new todo "{title}" is submitted"#)]
fn submit_new_todo(world: &mut TodoWorld, title: String) {
    world.last_result = Some(run_async(world.controller.handle(ViewEvent::NewTodo { title })));
}
