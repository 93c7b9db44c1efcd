use chrono::{DateTime, Datelike, Utc, Weekday};

/// Decides whether today's invocation does any work
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleGate {
    days: Vec<Weekday>,
}

impl Default for ScheduleGate {
    /// Mondays and Fridays
    fn default() -> Self {
        ScheduleGate::new(&[Weekday::Mon, Weekday::Fri])
    }
}

impl ScheduleGate {
    pub fn new(days: &[Weekday]) -> ScheduleGate {
        ScheduleGate { days: days.to_vec() }
    }

    /// True when `now` (UTC) falls on one of the run days
    pub fn should_run(&self, now: DateTime<Utc>) -> bool {
        self.days.contains(&now.weekday())
    }
}
