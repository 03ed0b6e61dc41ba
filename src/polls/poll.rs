//! A single poll: one fixed option set and its tallies.

use parking_lot::RwLock;
use std::collections::HashMap;

use super::error::PollError;

/// One poll's authoritative vote tally.
///
/// The option set is sealed at construction and never changes afterwards;
/// voting only ever increments an existing counter. All access goes through
/// the poll's own readers-writer lock, so activity on one poll never
/// contends with activity on another.
#[derive(Debug)]
pub struct Poll {
    /// Option name -> vote count.
    counts: RwLock<HashMap<String, u64>>,
}

impl Poll {
    /// Build a poll with every option starting at zero votes.
    ///
    /// Duplicate option names collapse to a single entry; all counts start
    /// at zero either way.
    pub(crate) fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let counts = options.into_iter().map(|o| (o.into(), 0)).collect();
        Self {
            counts: RwLock::new(counts),
        }
    }

    /// Record one vote for `option`.
    ///
    /// The increment happens under the poll's write lock, so concurrent
    /// votes never lose an update.
    pub fn cast_vote(&self, option: &str) -> Result<(), PollError> {
        let mut counts = self.counts.write();
        match counts.get_mut(option) {
            Some(count) => {
                *count += 1;
                Ok(())
            }
            None => Err(PollError::OptionNotFound(option.to_string())),
        }
    }

    /// Point-in-time copy of all tallies.
    ///
    /// Taken under the poll's read lock, so no count from one instant is
    /// ever mixed with a count from another. The lock is held only for the
    /// duration of the copy.
    pub fn snapshot(&self) -> HashMap<String, u64> {
        self.counts.read().clone()
    }

    /// The poll's fixed option names.
    pub fn options(&self) -> Vec<String> {
        self.counts.read().keys().cloned().collect()
    }

    /// Total votes cast across all options.
    pub fn total_votes(&self) -> u64 {
        self.counts.read().values().sum()
    }
}
