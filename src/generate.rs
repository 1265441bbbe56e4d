use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::error::{HarmonogramError, Result};
use crate::validate::DayArg;
use crate::vocab::{TimeOfDay, Vocabulary};

/// One `month/day/time` leaf of the schedule tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GeneratedPath {
    pub month: String,
    pub day: &'static str,
    pub time: TimeOfDay,
}

impl GeneratedPath {
    pub fn relative(&self) -> PathBuf {
        [self.month.as_str(), self.day, self.time.name()]
            .iter()
            .collect()
    }
}

impl Display for GeneratedPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.month, self.day, self.time)
    }
}

/// Expands a day argument into full day names, walking the table once.
pub fn expand_days(vocab: &Vocabulary, arg: &DayArg) -> Result<Vec<&'static str>> {
    match arg {
        DayArg::Single(token) => vocab
            .day(token)
            .map(|entry| vec![entry.name])
            .ok_or_else(|| HarmonogramError::UnknownDay(token.clone())),
        DayArg::Range { start, end } => {
            let mut names = Vec::new();
            let mut in_range = false;
            for entry in vocab.days() {
                if entry.token == start.as_str() {
                    in_range = true;
                }
                if in_range {
                    names.push(entry.name);
                    if entry.token == end.as_str() {
                        return Ok(names);
                    }
                }
            }
            Err(HarmonogramError::UnclosedRange {
                start: start.clone(),
                end: end.clone(),
            })
        }
    }
}

/// Builds every path for the validated arguments, month-major.
///
/// Time tokens form one queue for the whole run: the cursor is not reset
/// when the month changes, so `-t w` with `pn` in one month and `wt-cz` in
/// the next marks only the first generated path as evening. Once the queue
/// is empty every further path is morning.
pub fn generate<M, T>(
    vocab: &Vocabulary,
    months: &[M],
    days: &[DayArg],
    times: &[T],
) -> Result<Vec<GeneratedPath>>
where
    M: AsRef<str>,
    T: AsRef<str>,
{
    if months.len() != days.len() {
        return Err(HarmonogramError::LengthMismatch {
            months: months.len(),
            days: days.len(),
        });
    }

    let times: Vec<TimeOfDay> = times
        .iter()
        .map(|t| TimeOfDay::from_token(t.as_ref()))
        .collect();
    let mut cursor = 0usize;
    let mut paths = Vec::new();

    for (month, arg) in months.iter().zip(days) {
        for day in expand_days(vocab, arg)? {
            let time = match times.get(cursor) {
                Some(time) => {
                    cursor += 1;
                    *time
                }
                None => TimeOfDay::default(),
            };
            paths.push(GeneratedPath {
                month: month.as_ref().to_string(),
                day,
                time,
            });
        }
    }

    debug!(
        target: "harmonogram::generate",
        paths = paths.len(),
        times_used = cursor,
        times_given = times.len(),
        "generated schedule paths"
    );
    Ok(paths)
}
