use std::collections::{HashMap, hash_map::Entry};

use log_tally_shared_kernel::Frequency;
use serde::Serialize;

/// Number of ranked message slots every summary carries.
pub const TOP_MESSAGE_SLOTS: usize = 5;

/// One ranked `(message, frequency)` slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RankedMessage {
    pub message: String,
    pub frequency: Frequency,
}

impl RankedMessage {
    pub fn new(message: impl Into<String>, frequency: impl Into<Frequency>) -> Self {
        Self { message: message.into(), frequency: frequency.into() }
    }

    /// Unfilled slot: empty message with zero frequency.
    pub fn is_placeholder(&self) -> bool {
        self.message.is_empty() && self.frequency.is_zero()
    }
}

/// Fixed-size ranking of the most frequent messages, highest first.
///
/// Unused trailing slots hold placeholders; use [`TopMessages::iter`] to skip them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopMessages([RankedMessage; TOP_MESSAGE_SLOTS]);

impl TopMessages {
    /// Rank `(message, frequency)` tallies.
    ///
    /// Frequencies of repeated messages are summed. Ties keep the order in
    /// which each distinct message was first seen in `tallies`.
    pub fn rank<'a, I>(tallies: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Frequency)>,
    {
        let mut distinct: Vec<(&'a str, Frequency)> = Vec::new();
        let mut positions: HashMap<&'a str, usize> = HashMap::new();

        for (message, frequency) in tallies {
            match positions.entry(message) {
                Entry::Occupied(slot) => distinct[*slot.get()].1 += frequency,
                Entry::Vacant(slot) => {
                    slot.insert(distinct.len());
                    distinct.push((message, frequency));
                }
            }
        }

        // sort_by is stable: equal counts stay in first-seen order
        distinct.sort_by(|a, b| b.1.cmp(&a.1));

        let mut slots: [RankedMessage; TOP_MESSAGE_SLOTS] = Default::default();
        for (slot, (message, frequency)) in slots.iter_mut().zip(distinct) {
            *slot = RankedMessage::new(message, frequency);
        }
        Self(slots)
    }

    /// All slots, placeholders included.
    pub fn slots(&self) -> &[RankedMessage; TOP_MESSAGE_SLOTS] {
        &self.0
    }

    /// Filled slots in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &RankedMessage> {
        self.0.iter().filter(|slot| !slot.is_placeholder())
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn first(&self) -> Option<&RankedMessage> {
        self.iter().next()
    }
}
