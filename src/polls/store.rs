//! Identifier-keyed poll registry.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use super::error::PollError;
use super::poll::Poll;

/// Registry of polls keyed by identifier; the sole authority on poll
/// existence and creation.
///
/// Lock order is fixed: store lock first, then a poll's own lock. The
/// `Arc<Poll>` is cloned out and the map guard dropped before any poll lock
/// is taken, so the two levels are never held at once.
#[derive(Debug, Default)]
pub struct PollStore {
    polls: RwLock<HashMap<String, Arc<Poll>>>,
}

impl PollStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            polls: RwLock::new(HashMap::new()),
        }
    }

    /// Create a poll under `id` with the given options, all counts starting
    /// at zero.
    ///
    /// The existence check and the insert happen under a single write lock:
    /// of any number of racing creations for the same id, exactly one
    /// succeeds and the rest fail with `AlreadyExists` without mutating
    /// anything.
    pub fn create_poll<I, S>(&self, id: &str, options: I) -> Result<(), PollError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if id.is_empty() {
            return Err(PollError::EmptyPollId);
        }

        let poll = Poll::new(options);
        if poll.options().is_empty() {
            return Err(PollError::NoOptions);
        }

        let mut polls = self.polls.write();
        if polls.contains_key(id) {
            return Err(PollError::AlreadyExists(id.to_string()));
        }
        polls.insert(id.to_string(), Arc::new(poll));
        Ok(())
    }

    /// Look up a poll by identifier.
    ///
    /// Only the store's read lock is touched; no poll lock is taken, so a
    /// lookup never blocks on another poll's voting.
    pub fn get_poll(&self, id: &str) -> Result<Arc<Poll>, PollError> {
        let polls = self.polls.read();
        polls
            .get(id)
            .cloned()
            .ok_or_else(|| PollError::PollNotFound(id.to_string()))
    }

    /// Record one vote for `option` in the poll `id`.
    pub fn cast_vote(&self, id: &str, option: &str) -> Result<(), PollError> {
        // get_poll drops the store guard before the poll lock is taken.
        self.get_poll(id)?.cast_vote(option)
    }

    /// Point-in-time copy of the tallies for the poll `id`.
    pub fn snapshot(&self, id: &str) -> Result<HashMap<String, u64>, PollError> {
        Ok(self.get_poll(id)?.snapshot())
    }

    /// Number of polls currently registered.
    pub fn len(&self) -> usize {
        self.polls.read().len()
    }

    /// Whether the store holds no polls.
    pub fn is_empty(&self) -> bool {
        self.polls.read().is_empty()
    }
}

/// Create a shared poll store.
pub fn create_store() -> Arc<PollStore> {
    Arc::new(PollStore::new())
}
