//! Report criteria string builder
//!
//! Platform report URLs filter with a `criteria=` query fragment whose
//! conjunctions are pre-encoded `%26%26` (`&&`). The fragment is built
//! here and appended verbatim — running it through a URL encoder again
//! would double-encode the conjunction.

use std::fmt;

/// Builder for the `criteria=` query fragment of a report URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CriteriaString {
    criteria: String,
}

impl CriteriaString {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one condition, conjoined with any existing ones.
    pub fn add(&mut self, condition: &str) {
        if self.criteria.is_empty() {
            self.criteria = format!("criteria={condition}");
        } else {
            self.criteria = format!("{}%26%26{condition}", self.criteria);
        }
    }

    /// Append every condition of another builder.
    pub fn merge(&mut self, other: &Self) {
        if let Some(conditions) = other.criteria.strip_prefix("criteria=") {
            for condition in conditions.split("%26%26") {
                self.add(condition);
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

impl fmt::Display for CriteriaString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.criteria)
    }
}
