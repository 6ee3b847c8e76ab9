//! Then steps for todo controller BDD scenarios.

use super::world::TodoWorld;
use eyre::eyre;
use rstest_bdd_macros::then;

fn ensure_last_step_succeeded(world: &TodoWorld) -> Result<(), eyre::Report> {
    match &world.last_result {
        Some(Err(err)) => Err(eyre!("last controller step failed: {err}")),
        _ => Ok(()),
    }
}

#[then("the view shows {count:u64} entries")]
fn view_shows_entries(world: &TodoWorld, count: u64) -> Result<(), eyre::Report> {
    ensure_last_step_succeeded(world)?;
    let model = world.view.snapshot()?;
    let shown = u64::try_from(model.entries().len())?;
    eyre::ensure!(shown == count, "expected {count} entries, view shows {shown}");
    Ok(())
}

#[then(r#"the highlighted filter is "{filter}""#)]
fn highlighted_filter(world: &TodoWorld, filter: String) -> Result<(), eyre::Report> {
    let model = world.view.snapshot()?;
    eyre::ensure!(
        model.filter() == filter,
        "expected filter {filter:?}, view highlights {:?}",
        model.filter()
    );
    Ok(())
}

#[then("every visible todo is completed")]
fn every_todo_completed(world: &TodoWorld) -> Result<(), eyre::Report> {
    ensure_last_step_succeeded(world)?;
    let model = world.view.snapshot()?;
    eyre::ensure!(!model.entries().is_empty(), "view shows no entries");
    eyre::ensure!(
        model.entries().iter().all(|entry| entry.completed()),
        "some entries are still active"
    );
    Ok(())
}

#[then("the toggle-all control is checked")]
fn toggle_all_checked(world: &TodoWorld) -> Result<(), eyre::Report> {
    let model = world.view.snapshot()?;
    eyre::ensure!(model.toggle_all_checked(), "toggle-all is not checked");
    Ok(())
}

#[then(r#"the todo "{title}" is no longer stored"#)]
fn todo_not_stored(world: &TodoWorld, title: String) -> Result<(), eyre::Report> {
    ensure_last_step_succeeded(world)?;
    eyre::ensure!(world.id_of(&title).is_err(), "todo {title:?} is still stored");
    Ok(())
}

#[then(r#"the view shows the title "{title}""#)]
fn view_shows_title(world: &TodoWorld, title: String) -> Result<(), eyre::Report> {
    ensure_last_step_succeeded(world)?;
    let model = world.view.snapshot()?;
    let entry = model
        .entries()
        .iter()
        .find(|entry| entry.title() == title)
        .ok_or_else(|| eyre!("no visible entry titled {title:?}"))?;
    eyre::ensure!(
        entry.edit_state().as_str() == "display",
        "entry is still {}",
        entry.edit_state()
    );
    Ok(())
}

#[then("the store holds {count:u64} todos")]
fn store_holds(world: &TodoWorld, count: u64) -> Result<(), eyre::Report> {
    ensure_last_step_succeeded(world)?;
    let stored = u64::try_from(world.store.snapshot()?.len())?;
    eyre::ensure!(stored == count, "expected {count} stored todos, found {stored}");
    Ok(())
}
