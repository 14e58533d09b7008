#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use hemma::alert::{Alerter, Chime, Silent};
use hemma::config::EngineConfig;
use hemma::project::{Department, Project};
use hemma::session::{OrgData, Session};
use hemma::task::{Task, TaskStatus};
use hemma::user::{Role, User};

/// Fixed "session start" instant used across scenario tests.
pub fn start_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// A small organization: two projects, one department in the first, and an
/// employee working there.
pub struct TestOrg {
    pub alpha: Project,
    pub beta: Project,
    pub dept: Department,
    pub employee_id: Uuid,
    pub tasks: Vec<Task>,
}

impl TestOrg {
    pub fn new() -> Self {
        let alpha = Project::new("Alpha");
        let beta = Project::new("Beta");
        let dept = Department::new("Engineering", alpha.id);
        Self {
            alpha,
            beta,
            dept,
            employee_id: Uuid::new_v4(),
            tasks: Vec::new(),
        }
    }

    /// Add a task in project alpha, assigned to the fixture employee.
    pub fn task_due_in(&mut self, title: &str, remaining: Duration) -> Uuid {
        let task = Task {
            id: Uuid::new_v4(),
            title: title.to_string(),
            project_id: self.alpha.id,
            department_id: self.dept.id,
            employee_id: self.employee_id,
            status: TaskStatus::Pending,
            deadline: start_instant() + remaining,
        };
        let id = task.id;
        self.tasks.push(task);
        id
    }

    pub fn admin(&self) -> User {
        User::new("Admin", Role::Admin)
    }

    pub fn employee(&self) -> User {
        User {
            id: self.employee_id,
            name: "Employee".to_string(),
            role: Role::Employee,
            department_id: Some(self.dept.id),
            project_id: Some(self.alpha.id),
        }
    }

    pub fn dept_head(&self) -> User {
        User::new("Head", Role::DeptHead)
            .in_department(self.dept.id)
            .in_project(self.alpha.id)
    }

    pub fn data(&self) -> OrgData {
        OrgData {
            projects: vec![self.alpha.clone(), self.beta.clone()],
            departments: vec![self.dept.clone()],
            tasks: self.tasks.clone(),
        }
    }

    /// Start a session with default config and a silent chime.
    pub fn session_for(&self, user: User) -> Session {
        Session::start(
            user,
            self.data(),
            EngineConfig::default(),
            Alerter::new(Box::new(Silent)),
            start_instant(),
        )
    }
}

/// Chime that counts rings, for asserting the audible-cue path.
#[derive(Clone, Default)]
pub struct CountingChime {
    pub rings: Arc<AtomicUsize>,
}

impl Chime for CountingChime {
    fn ring(&mut self) -> std::io::Result<()> {
        self.rings.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Chime whose audio path is permanently broken, for the swallow contract.
pub struct BrokenChime;

impl Chime for BrokenChime {
    fn ring(&mut self) -> std::io::Result<()> {
        Err(std::io::Error::other("audio subsystem unavailable"))
    }
}
