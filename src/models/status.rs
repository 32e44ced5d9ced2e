use serde::Serialize;

/// Four-step rating shared by driver rows and the site-wide average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    VeryBad, // 🔴
    Bad,     // 🟠
    Fine,    // 🟡
    Great,   // 🟢
}

impl Status {
    /// Rate a driver/shift idle impact score.
    pub fn from_idle_impact(impact: f64) -> Self {
        if impact >= 20.0 {
            Status::VeryBad
        } else if impact >= 10.0 {
            Status::Bad
        } else if impact >= 0.0 {
            Status::Fine
        } else {
            Status::Great
        }
    }

    /// Rate the site-wide average idle time (different thresholds).
    pub fn from_site_average(average: f64) -> Self {
        if average > 1.35 {
            Status::VeryBad
        } else if average > 1.00 {
            Status::Bad
        } else if average >= 0.68 {
            Status::Fine
        } else {
            Status::Great
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Status::VeryBad => "🔴",
            Status::Bad => "🟠",
            Status::Fine => "🟡",
            Status::Great => "🟢",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::VeryBad => "Very Bad",
            Status::Bad => "Bad",
            Status::Fine => "Fine",
            Status::Great => "Great",
        }
    }
}
