//! ListOrder value object
//! Sort orders accepted by `ProcessRegistry::list`

use crate::domain::Process;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ListOrder {
    /// Ascending process id
    #[default]
    #[serde(alias = "by-pid")]
    ById,

    /// Ascending priority
    ByPriority,

    /// Ascending admission time
    #[serde(alias = "by-time-started")]
    ByAdmittedAt,
}

impl ListOrder {
    /// Compare two processes under this order
    ///
    /// Equal keys fall back to ascending id so listings are deterministic.
    pub fn compare(&self, a: &Process, b: &Process) -> Ordering {
        let primary = match self {
            ListOrder::ById => Ordering::Equal,
            ListOrder::ByPriority => a.priority().cmp(&b.priority()),
            ListOrder::ByAdmittedAt => a.admitted_at().cmp(&b.admitted_at()),
        };
        primary.then_with(|| a.id().cmp(&b.id()))
    }

    /// Parse a ListOrder from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "by-id" | "by_id" | "id" | "by-pid" | "pid" => Some(Self::ById),
            "by-priority" | "by_priority" | "priority" => Some(Self::ByPriority),
            "by-admitted-at" | "by_admitted_at" | "admitted-at" | "by-time-started" | "time" => {
                Some(Self::ByAdmittedAt)
            }
            _ => None,
        }
    }
}

impl fmt::Display for ListOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ById => "by-id",
            Self::ByPriority => "by-priority",
            Self::ByAdmittedAt => "by-admitted-at",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for ListOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!(
                "Invalid list order: '{}'. Valid options: by-id, by-priority, by-admitted-at",
                s
            )
        })
    }
}
