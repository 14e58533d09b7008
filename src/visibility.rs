//! Role-scoped visibility resolution.
//!
//! Pure functions mapping (user, full collections) to the authorized subset.
//! No side effects, no timers, no caching: identical inputs always yield an
//! identical, order-stable output. Callers re-run these on every relevant
//! state change (login, project selection, task mutation).
//!
//! Precedence of the rules:
//!
//! 1. Admins see every project and pick the active one by selection, falling
//!    back to the first project when the selection is absent or stale.
//! 2. Everyone else sees exactly their own project, which is unconditionally
//!    the active project; selection is not honored.
//! 3. Within the active project, tasks narrow further by role: admins see
//!    all, department heads their department, employees their own tasks.
//! 4. No active project means no visible tasks. Never an error.

use uuid::Uuid;

use crate::project::Project;
use crate::task::Task;
use crate::user::{Role, User};

/// Projects the user is authorized to see, in input order.
pub fn visible_projects<'a>(user: &User, projects: &'a [Project]) -> Vec<&'a Project> {
    match user.role {
        Role::Admin => projects.iter().collect(),
        _ => projects
            .iter()
            .filter(|p| Some(p.id) == user.project_id)
            .collect(),
    }
}

/// The project whose tasks the user is currently working against.
///
/// `selected` is the admin's explicit choice; it is ignored for other roles.
pub fn active_project<'a>(
    user: &User,
    selected: Option<Uuid>,
    projects: &'a [Project],
) -> Option<&'a Project> {
    if user.role != Role::Admin {
        return visible_projects(user, projects).into_iter().next();
    }
    selected
        .and_then(|id| projects.iter().find(|p| p.id == id))
        .or_else(|| projects.first())
}

/// Tasks of the active project the user is authorized to see, in input order.
pub fn visible_tasks<'a>(
    user: &User,
    active: Option<&Project>,
    tasks: &'a [Task],
) -> Vec<&'a Task> {
    let Some(project) = active else {
        return Vec::new();
    };

    tasks
        .iter()
        .filter(|t| t.project_id == project.id)
        .filter(|t| match user.role {
            Role::Admin => true,
            Role::DeptHead => Some(t.department_id) == user.department_id,
            Role::Employee => t.employee_id == user.id,
        })
        .collect()
}
