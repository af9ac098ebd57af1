//! PolicyKind value object
//!
//! Names the built-in replacement policies so they can be selected from
//! configuration files and environment variables.

use crate::domain::policies::{NeverEvictPolicy, OldestFirstPolicy, PriorityAwarePolicy};
use crate::domain::ports::ReplacementPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    /// Reject new processes once the registry is full
    #[default]
    #[serde(alias = "default")]
    NeverEvict,

    /// Evict the process admitted first
    #[serde(alias = "fifo")]
    OldestFirst,

    /// Evict the least important, oldest process if the newcomer outranks it
    #[serde(alias = "priority")]
    PriorityAware,
}

impl PolicyKind {
    /// Parse a PolicyKind from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "never-evict" | "never_evict" | "never" | "default" => Some(Self::NeverEvict),
            "oldest-first" | "oldest_first" | "oldest" | "fifo" => Some(Self::OldestFirst),
            "priority-aware" | "priority_aware" | "priority" | "prio" => {
                Some(Self::PriorityAware)
            }
            _ => None,
        }
    }

    /// Instantiate the policy this kind names
    pub fn build(&self) -> Arc<dyn ReplacementPolicy> {
        match self {
            Self::NeverEvict => Arc::new(NeverEvictPolicy),
            Self::OldestFirst => Arc::new(OldestFirstPolicy),
            Self::PriorityAware => Arc::new(PriorityAwarePolicy),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NeverEvict => "never-evict",
            Self::OldestFirst => "oldest-first",
            Self::PriorityAware => "priority-aware",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for PolicyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!(
                "Invalid replacement policy: '{}'. Valid options: never-evict, oldest-first, priority-aware",
                s
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(PolicyKind::default(), PolicyKind::NeverEvict);
    }

    #[test]
    fn test_parse() {
        assert_eq!(PolicyKind::parse("never-evict"), Some(PolicyKind::NeverEvict));
        assert_eq!(PolicyKind::parse("default"), Some(PolicyKind::NeverEvict));
        assert_eq!(PolicyKind::parse("FIFO"), Some(PolicyKind::OldestFirst));
        assert_eq!(PolicyKind::parse("oldest-first"), Some(PolicyKind::OldestFirst));
        assert_eq!(PolicyKind::parse("priority"), Some(PolicyKind::PriorityAware));
        assert_eq!(PolicyKind::parse("lru"), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "priority-aware".parse::<PolicyKind>().unwrap(),
            PolicyKind::PriorityAware
        );
        assert!("random".parse::<PolicyKind>().is_err());
    }

    #[test]
    fn test_build_matches_kind() {
        assert_eq!(PolicyKind::NeverEvict.build().name(), "never-evict");
        assert_eq!(PolicyKind::OldestFirst.build().name(), "oldest-first");
        assert_eq!(PolicyKind::PriorityAware.build().name(), "priority-aware");
    }
}
