use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use serde::Serialize;
use tracing::debug;

use crate::error::{HarmonogramError, Result};
use crate::vocab::Vocabulary;

/// A day argument as given on the command line: `pn` or `pn-sr`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DayArg {
    Single(String),
    Range { start: String, end: String },
}

impl DayArg {
    /// Splits at the first `-`; anything after it is the end token verbatim.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once('-') {
            Some((start, end)) => DayArg::Range {
                start: start.to_string(),
                end: end.to_string(),
            },
            None => DayArg::Single(raw.to_string()),
        }
    }

    fn check(&self, vocab: &Vocabulary) -> Result<()> {
        match self {
            DayArg::Single(token) if vocab.is_day(token) => Ok(()),
            DayArg::Single(token) => Err(HarmonogramError::UnknownDay(token.clone())),
            DayArg::Range { start, end } if vocab.is_day(start) && vocab.is_day(end) => Ok(()),
            DayArg::Range { .. } => Err(HarmonogramError::InvalidDayRange(self.to_string())),
        }
    }
}

impl Display for DayArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DayArg::Single(token) => write!(f, "{token}"),
            DayArg::Range { start, end } => write!(f, "{start}-{end}"),
        }
    }
}

/// Checks raw month and day lists, stopping at the first violated rule.
/// Time tokens are never rejected, so they are not inspected here.
pub fn validate<M, D>(vocab: &Vocabulary, months: &[M], days: &[D]) -> Result<Vec<DayArg>>
where
    M: AsRef<str>,
    D: AsRef<str>,
{
    if months.is_empty() {
        return Err(HarmonogramError::NoMonths);
    }

    let mut seen = HashSet::with_capacity(months.len());
    for month in months {
        if !seen.insert(month.as_ref()) {
            return Err(HarmonogramError::DuplicateMonth(month.as_ref().to_string()));
        }
    }

    if months.len() != days.len() {
        return Err(HarmonogramError::LengthMismatch {
            months: months.len(),
            days: days.len(),
        });
    }

    if let Some(month) = months.iter().find(|m| !vocab.is_month(m.as_ref())) {
        return Err(HarmonogramError::UnknownMonth(month.as_ref().to_string()));
    }

    let parsed = days
        .iter()
        .map(|raw| {
            let arg = DayArg::parse(raw.as_ref());
            arg.check(vocab).map(|_| arg)
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(target: "harmonogram::validate", months = months.len(), "arguments accepted");
    Ok(parsed)
}
