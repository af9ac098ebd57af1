//! Priority value object
//!
//! The entity is agnostic about what a priority means. Policies decide;
//! [`PriorityAwarePolicy`](crate::domain::policies::PriorityAwarePolicy)
//! treats lower values as less important.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Priority(i32);

impl Priority {
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Priority {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_value_orders_first() {
        assert!(Priority::new(-1) < Priority::new(0));
        assert!(Priority::new(2) < Priority::new(5));
        assert_eq!(Priority::default(), Priority::new(0));
    }
}
