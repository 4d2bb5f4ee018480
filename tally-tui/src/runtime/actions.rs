use crate::app::{App, DeleteTarget, View};
use tally_core::{BackendError, NewTimeEntry, TimeTrackingBackend, ValidationError};
use tracing::{info, warn};

use super::action_queue::Action;

/// Load projects, entries and summary from the backend into App state.
pub(crate) async fn refresh_snapshot(
    app: &mut App,
    backend: &dyn TimeTrackingBackend,
) -> Result<(), BackendError> {
    let snapshot = backend.snapshot().await?;
    app.apply_snapshot(snapshot);
    Ok(())
}

pub(super) async fn run_action(action: Action, app: &mut App, backend: &dyn TimeTrackingBackend) {
    match action {
        Action::LogTimeEntry(entry) => handle_log_time_entry(entry, app, backend).await,
        Action::AddProject { name } => handle_add_project(&name, app, backend).await,
        Action::ConfirmDelete => handle_confirm_delete(app, backend).await,
        Action::Refresh => {
            if reload(app, backend).await {
                app.set_status("Refreshed".to_string());
            }
        }
    }
}

async fn handle_log_time_entry(
    entry: NewTimeEntry,
    app: &mut App,
    backend: &dyn TimeTrackingBackend,
) {
    match backend.add_time_entry(entry).await {
        Ok(entry) => {
            info!(
                entry_id = %entry.id,
                project_id = %entry.project_id,
                hours = entry.hours,
                "time entry logged"
            );
            app.log_form.clear_logged();
            app.navigate_to(View::Dashboard);
            if reload(app, backend).await {
                let project = app.project_name(entry.project_id).to_string();
                app.set_status(format!("Logged {:.1}h on {}", entry.hours, project));
            }
        }
        Err(e) => report_failure(app, "Could not log time", &e),
    }
}

async fn handle_add_project(name: &str, app: &mut App, backend: &dyn TimeTrackingBackend) {
    match backend.add_project(name).await {
        Ok(Some(project)) => {
            info!(project_id = %project.id, name = %project.name, "project added");
            app.project_form.clear_name();
            if reload(app, backend).await {
                app.set_status(format!("Added project \"{}\"", project.name));
            }
        }
        Ok(None) => {
            // Name was taken after the form validated it.
            app.project_form.error = Some(ValidationError::DuplicateProjectName.to_string());
        }
        Err(e) => report_failure(app, "Could not add project", &e),
    }
}

async fn handle_confirm_delete(app: &mut App, backend: &dyn TimeTrackingBackend) {
    let Some(ctx) = app.close_delete_confirm() else {
        return;
    };

    let result = match ctx.target {
        DeleteTarget::Entry(id) => backend.delete_time_entry(id).await,
        DeleteTarget::Project(id) => backend.delete_project(id).await,
    };

    match result {
        Ok(deleted) => {
            info!(delete_target = ?ctx.target, deleted, "delete confirmed");
            if !reload(app, backend).await {
                return;
            }
            if deleted {
                app.set_status(format!("Deleted {}", ctx.label));
            } else {
                app.set_status(format!("{} was already gone", ctx.label));
            }
        }
        Err(e) => report_failure(app, "Could not delete", &e),
    }
}

/// Refresh the snapshot, reporting failures in the status bar.
async fn reload(app: &mut App, backend: &dyn TimeTrackingBackend) -> bool {
    match refresh_snapshot(app, backend).await {
        Ok(()) => true,
        Err(e) => {
            report_failure(app, "Could not reload data", &e);
            false
        }
    }
}

fn report_failure(app: &mut App, what: &str, error: &BackendError) {
    warn!(error = %error, "{}", what);
    app.set_status(format!("{}: {}", what, error));
}
