mod support;

use chrono::Duration;
use uuid::Uuid;

use hemma::alert::Alerter;
use hemma::config::EngineConfig;
use hemma::notification::NotificationKind;
use hemma::session::Session;
use hemma::task::TaskStatus;

use support::{start_instant, BrokenChime, CountingChime, TestOrg};

#[test]
fn status_change_emits_once_and_is_idempotent() {
    let mut org = TestOrg::new();
    let task_id = org.task_due_in("Ship release", Duration::days(3));
    let mut session = org.session_for(org.admin());
    let now = start_instant();

    session.update_task_status(task_id, TaskStatus::InProgress, now);
    session.update_task_status(task_id, TaskStatus::InProgress, now);

    assert_eq!(session.store().len(), 1);
    let record = session.store().iter().next().expect("record");
    assert_eq!(record.kind, NotificationKind::Status);
    assert!(record.message.contains("Ship release"));
    assert!(record.message.contains("In Progress"));
    assert!(!record.read);
    assert_eq!(record.timestamp, now);
}

#[test]
fn unknown_task_id_is_a_silent_noop() {
    let org = TestOrg::new();
    let mut session = org.session_for(org.admin());

    session.update_task_status(Uuid::new_v4(), TaskStatus::Completed, start_instant());

    assert_eq!(session.store().len(), 0);
    assert!(session.tray().is_empty());
}

#[test]
fn status_detection_covers_tasks_outside_the_visible_subset() {
    let mut org = TestOrg::new();
    let task_id = org.task_due_in("Someone else's task", Duration::days(2));
    // An employee in the same project who is NOT assigned to the task.
    let outsider = hemma::user::User::new("Outsider", hemma::user::Role::Employee)
        .in_project(org.alpha.id)
        .in_department(org.dept.id);
    let mut session = org.session_for(outsider);

    assert!(session.visible_tasks().is_empty());

    // Detection runs on the full collection, not the visible subset, so a
    // status pushed on someone else's task still registers.
    session.update_task_status(task_id, TaskStatus::Overdue, start_instant());
    assert_eq!(session.store().len(), 1);
}

#[test]
fn add_task_announces_an_assignment() {
    let mut org = TestOrg::new();
    org.task_due_in("seed", Duration::days(5));
    let mut session = org.session_for(org.employee());
    let now = start_instant();

    let id = session.add_task(
        "Prepare quarterly review",
        org.dept.id,
        org.employee_id,
        now + Duration::days(7),
        now,
    );
    assert!(id.is_some());

    assert_eq!(session.store().len(), 1);
    let record = session.store().iter().next().expect("record");
    assert_eq!(record.kind, NotificationKind::Assignment);
    assert!(record.message.contains("Prepare quarterly review"));

    // The task landed on the active project and is visible to its assignee.
    assert!(session
        .visible_tasks()
        .iter()
        .any(|t| t.title == "Prepare quarterly review"));
}

#[test]
fn add_task_without_active_project_is_a_noop() {
    let org = TestOrg::new();
    // Employee with no project affiliation: no active project resolves.
    let mut session = org.session_for(hemma::user::User::new(
        "Unaffiliated",
        hemma::user::Role::Employee,
    ));
    let now = start_instant();

    let id = session.add_task("orphan", org.dept.id, org.employee_id, now, now);
    assert!(id.is_none());
    assert_eq!(session.store().len(), 0);
}

#[test]
fn emission_rings_the_chime_and_survives_a_broken_one() {
    let org = TestOrg::new();
    let chime = CountingChime::default();
    let rings = chime.rings.clone();
    let mut session = Session::start(
        org.admin(),
        org.data(),
        EngineConfig::default(),
        Alerter::new(Box::new(chime)),
        start_instant(),
    );

    session.emit("t", "m", NotificationKind::System, start_instant());
    assert_eq!(rings.load(std::sync::atomic::Ordering::SeqCst), 1);

    // A dead audio path must not fail or delay emission.
    let mut broken = Session::start(
        org.admin(),
        org.data(),
        EngineConfig::default(),
        Alerter::new(Box::new(BrokenChime)),
        start_instant(),
    );
    broken.emit("t", "m", NotificationKind::System, start_instant());
    assert_eq!(broken.store().len(), 1);
    assert_eq!(broken.tray().len(), 1);
}

#[test]
fn display_order_is_newest_first() {
    let org = TestOrg::new();
    let mut session = org.session_for(org.admin());
    let now = start_instant();

    session.emit("one", "m", NotificationKind::System, now);
    session.emit("two", "m", NotificationKind::System, now);
    session.emit("three", "m", NotificationKind::System, now);

    let display: Vec<&str> = session
        .store()
        .iter_display()
        .map(|n| n.title.as_str())
        .collect();
    assert_eq!(display, ["three", "two", "one"]);
}

#[test]
fn mark_all_read_then_new_arrivals_count_from_zero() {
    let org = TestOrg::new();
    let mut session = org.session_for(org.admin());
    let now = start_instant();

    session.emit("a", "m", NotificationKind::Status, now);
    session.emit("b", "m", NotificationKind::Deadline, now);
    assert_eq!(session.unread_count(), 2);

    session.mark_all_read();
    assert_eq!(session.unread_count(), 0);

    session.emit("c", "m", NotificationKind::System, now);
    assert_eq!(session.unread_count(), 1);
}

#[test]
fn grouping_is_stable_across_arrival_order() {
    let org = TestOrg::new();
    let mut session = org.session_for(org.admin());
    let now = start_instant();

    session.emit("s1", "m", NotificationKind::Status, now);
    session.emit("d1", "m", NotificationKind::Deadline, now);
    session.emit("a1", "m", NotificationKind::Assignment, now);
    session.emit("s2", "m", NotificationKind::Status, now);

    let groups = session.grouped_notifications();
    let kinds: Vec<NotificationKind> = groups.iter().map(|g| g.kind).collect();
    assert_eq!(
        kinds,
        [
            NotificationKind::Assignment,
            NotificationKind::Deadline,
            NotificationKind::Status,
        ]
    );
    let status_titles: Vec<&str> = groups[2].items.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(status_titles, ["s1", "s2"]);
}
