use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Abbreviation and directory name of one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayEntry {
    pub token: &'static str,
    pub name: &'static str,
}

const POLISH_MONTHS: [&str; 12] = [
    "styczen",
    "luty",
    "marzec",
    "kwiecien",
    "maj",
    "czerwiec",
    "lipiec",
    "sierpien",
    "wrzesien",
    "pazdziernik",
    "listopad",
    "grudzien",
];

const POLISH_DAYS: [DayEntry; 7] = [
    DayEntry { token: "pn", name: "poniedzialek" },
    DayEntry { token: "wt", name: "wtorek" },
    DayEntry { token: "sr", name: "sroda" },
    DayEntry { token: "cz", name: "czwartek" },
    DayEntry { token: "pt", name: "piatek" },
    DayEntry { token: "so", name: "sobota" },
    DayEntry { token: "nd", name: "niedziela" },
];

static POLISH: Vocabulary = Vocabulary {
    months: &POLISH_MONTHS,
    days: &POLISH_DAYS,
};

/// Fixed month and weekday tables. Day order is the iteration order used
/// when expanding `start-end` ranges.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    months: &'static [&'static str],
    days: &'static [DayEntry],
}

impl Vocabulary {
    pub fn polish() -> &'static Vocabulary {
        &POLISH
    }

    pub fn months(&self) -> &'static [&'static str] {
        self.months
    }

    pub fn days(&self) -> &'static [DayEntry] {
        self.days
    }

    pub fn is_month(&self, token: &str) -> bool {
        self.months.iter().any(|month| *month == token)
    }

    pub fn is_day(&self, token: &str) -> bool {
        self.day(token).is_some()
    }

    pub fn day(&self, token: &str) -> Option<&'static DayEntry> {
        self.days.iter().find(|entry| entry.token == token)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    #[default]
    Rano,
    Wieczorem,
}

impl TimeOfDay {
    /// `w` selects the evening; every other token falls back to morning.
    pub fn from_token(token: &str) -> Self {
        match token {
            "w" => TimeOfDay::Wieczorem,
            _ => TimeOfDay::Rano,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TimeOfDay::Rano => "rano",
            TimeOfDay::Wieczorem => "wieczorem",
        }
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
