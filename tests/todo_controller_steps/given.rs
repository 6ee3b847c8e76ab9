//! Given steps for todo controller BDD scenarios.

use super::world::{TodoWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use todo_controller::todo::domain::TodoId;

fn seed(world: &mut TodoWorld, title: String, completed: bool) -> Result<(), eyre::Report> {
    let id = TodoId::new(world.next_seed_id);
    world.next_seed_id += 1;
    world
        .store
        .seed(id, title, completed)
        .wrap_err("seed todo for scenario")?;
    Ok(())
}

#[given(r#"a todo "{title}""#)]
fn a_todo(world: &mut TodoWorld, title: String) -> Result<(), eyre::Report> {
    seed(world, title, false)
}

#[given(r#"a completed todo "{title}""#)]
fn a_completed_todo(world: &mut TodoWorld, title: String) -> Result<(), eyre::Report> {
    seed(world, title, true)
}

#[given(r#"the list is shown for route "{route}""#)]
fn list_is_shown(world: &mut TodoWorld, route: String) -> Result<(), eyre::Report> {
    run_async(world.controller.activate(&route)).wrap_err("activate route in scenario setup")?;
    Ok(())
}

#[given(r#"the todo "{title}" is being edited"#)]
fn todo_is_being_edited(world: &mut TodoWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.id_of(&title)?;
    run_async(world.controller.edit_item(id)).wrap_err("enter edit mode in scenario setup")?;
    Ok(())
}
