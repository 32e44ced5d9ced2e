use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

pub const OVERNIGHT_SUFFIX: &str = " (Overnight)";

/// The shift a record is attributed to after overnight reclassification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ReportingShift {
    pub code: String,    // cleaned shift code, e.g. "2200"
    pub overnight: bool, // early-morning tail of the previous evening's shift
}

impl ReportingShift {
    pub fn same_day(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            overnight: false,
        }
    }

    pub fn overnight(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            overnight: true,
        }
    }

    /// Parse a label such as "2200 (Overnight)" back into a shift.
    pub fn from_label(label: &str) -> Self {
        match label.strip_suffix(OVERNIGHT_SUFFIX) {
            Some(code) => Self::overnight(code),
            None => Self::same_day(label),
        }
    }

    /// "1430" or "2200 (Overnight)".
    pub fn label(&self) -> String {
        if self.overnight {
            format!("{}{}", self.code, OVERNIGHT_SUFFIX)
        } else {
            self.code.clone()
        }
    }

    /// Overnight continuations sort before the day's own shifts.
    pub fn sort_key(&self) -> String {
        let prefix = if self.overnight { "0_" } else { "1_" };
        format!("{}{}", prefix, self.label())
    }

    /// Numeric value of the label prefix (text before the first space), if any.
    pub fn start_value(&self) -> Option<u32> {
        let label = self.label();
        let prefix = label.split(' ').next().unwrap_or_default();
        prefix.parse().ok()
    }

    /// Code shown as "HH:MM" by inserting a colon after the first two characters.
    pub fn display_time(&self) -> String {
        let head: String = self.code.chars().take(2).collect();
        let tail: String = self.code.chars().skip(2).collect();
        format!("{head}:{tail}")
    }
}

impl Ord for ReportingShift {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for ReportingShift {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ReportingShift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
