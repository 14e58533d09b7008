//! Imminent-deadline detection.
//!
//! The scanner itself is a pure filter; the session drives it from a
//! repeating timer and applies the batching policy (one notification per
//! scan, carrying the count, never one per task).

use chrono::{DateTime, Duration, Utc};

use crate::task::Task;

/// Tasks whose deadline is strictly in the future and strictly less than
/// `window` away.
///
/// Already past-due tasks do not count (they are the overdue status's
/// problem), and neither do tasks due exactly at the window boundary or
/// beyond it. Input order is preserved.
pub fn imminent_tasks<'a>(
    tasks: &[&'a Task],
    now: DateTime<Utc>,
    window: Duration,
) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| {
            let remaining = t.deadline - now;
            remaining > Duration::zero() && remaining < window
        })
        .copied()
        .collect()
}

/// Message body for a batched deadline alert covering `count` tasks.
pub fn batch_message(count: usize, window: Duration) -> String {
    let hours = window.num_hours();
    if count == 1 {
        format!("You have 1 task due within the next {} hours.", hours)
    } else {
        format!("You have {} tasks due within the next {} hours.", count, hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskStatus;
    use uuid::Uuid;

    fn task_due_in(now: DateTime<Utc>, remaining: Duration) -> Task {
        Task {
            id: Uuid::new_v4(),
            title: "t".to_string(),
            project_id: Uuid::new_v4(),
            department_id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            status: TaskStatus::InProgress,
            deadline: now + remaining,
        }
    }

    #[test]
    fn window_bounds_are_strict() {
        let now = Utc::now();
        let window = Duration::hours(24);
        let past = task_due_in(now, Duration::hours(-1));
        let due_now = task_due_in(now, Duration::zero());
        let soon = task_due_in(now, Duration::hours(2));
        let at_boundary = task_due_in(now, Duration::hours(24));
        let far = task_due_in(now, Duration::hours(30));

        let all = [&past, &due_now, &soon, &at_boundary, &far];
        let imminent = imminent_tasks(&all, now, window);

        assert_eq!(imminent.len(), 1);
        assert_eq!(imminent[0].id, soon.id);
    }

    #[test]
    fn preserves_input_order() {
        let now = Utc::now();
        let a = task_due_in(now, Duration::hours(10));
        let b = task_due_in(now, Duration::hours(2));
        let imminent = imminent_tasks(&[&a, &b], now, Duration::hours(24));
        assert_eq!(imminent[0].id, a.id);
        assert_eq!(imminent[1].id, b.id);
    }

    #[test]
    fn batch_message_counts() {
        let window = Duration::hours(24);
        assert_eq!(
            batch_message(1, window),
            "You have 1 task due within the next 24 hours."
        );
        assert_eq!(
            batch_message(2, window),
            "You have 2 tasks due within the next 24 hours."
        );
    }
}
