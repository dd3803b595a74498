//! Chronological life events derived from the records

use serde::Serialize;
use tracing::debug;

use crate::context::BuildContext;
use crate::record::PersonRecord;

/// Kind of life event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Birth
    Birth,
    /// Death
    Death,
}

/// A dated event in a person's life.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEvent {
    /// Record the event belongs to
    pub id: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// e.g. "John Doe born"
    pub label: String,
    /// What happened
    pub kind: EventKind,
}

/// Project records into events sorted ascending by date.
///
/// Records without a valid birth date contribute no birth event. Dates are
/// compared as strings, which orders `YYYY-MM-DD` chronologically. The sort
/// is stable, so events on the same day keep input order.
pub fn timeline(records: &[PersonRecord], ctx: &BuildContext) -> Vec<TimelineEvent> {
    let mut events = Vec::with_capacity(records.len());
    for record in records {
        if let Some(date) = record.resolvable_birth_date() {
            events.push(event(record, date, EventKind::Birth));
        }
        if ctx.include_deaths {
            if let Some(date) = record.resolvable_death_date() {
                events.push(event(record, date, EventKind::Death));
            }
        }
    }

    events.sort_by(|a, b| a.date.cmp(&b.date));
    debug!(records = records.len(), events = events.len(), "derived timeline");
    events
}

fn event(record: &PersonRecord, date: &str, kind: EventKind) -> TimelineEvent {
    let verb = match kind {
        EventKind::Birth => "born",
        EventKind::Death => "died",
    };
    TimelineEvent {
        id: record.id.clone(),
        date: date.to_string(),
        label: format!("{} {}", record.display_name(), verb),
        kind,
    }
}
