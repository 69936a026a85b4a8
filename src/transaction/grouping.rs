//! Grouping of transactions into calendar-day groups for the timeline.

use time::UtcOffset;

use crate::{
    timezone::local_date,
    transaction::{EnrichedTransaction, Transaction},
};

/// Anything with a user-editable transaction date in epoch milliseconds.
pub trait HasDate {
    /// The transaction date in epoch milliseconds.
    fn date_millis(&self) -> i64;
}

impl HasDate for Transaction {
    fn date_millis(&self) -> i64 {
        self.date
    }
}

impl HasDate for EnrichedTransaction {
    fn date_millis(&self) -> i64 {
        self.transaction.date
    }
}

/// The transactions of one calendar day, keyed `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup<T> {
    /// The calendar day, formatted `YYYY-MM-DD`.
    pub date: String,
    /// The day's transactions, in the order they appeared in the source.
    pub entries: Vec<T>,
}

/// Group transactions by the calendar day of their `date` field in the given
/// timezone.
///
/// Day keys appear in first-encounter order and within a day the source
/// order is preserved; a caller that wants the timeline ordering sorts the
/// source descending by date first.
pub fn group_by_day<T>(items: &[T], timezone_offset: UtcOffset) -> Vec<DayGroup<T>>
where
    T: HasDate + Clone,
{
    let mut groups: Vec<DayGroup<T>> = Vec::new();

    for item in items {
        let date = local_date(item.date_millis(), timezone_offset).to_string();

        match groups.iter_mut().find(|group| group.date == date) {
            Some(group) => group.entries.push(item.clone()),
            None => groups.push(DayGroup {
                date,
                entries: vec![item.clone()],
            }),
        }
    }

    groups
}
