use std::collections::VecDeque;

/// Watches key presses for a fixed sequence, e.g. the Konami code.
///
/// Only the most recent `sequence.len()` keys are kept, so a match fires as
/// soon as the tail of the input equals the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySequenceDetector {
    sequence: Vec<String>,
    recent: VecDeque<String>,
}

impl KeySequenceDetector {
    #[must_use]
    pub fn new(sequence: Vec<String>) -> Self {
        let capacity = sequence.len();
        Self {
            sequence,
            recent: VecDeque::with_capacity(capacity),
        }
    }

    /// Record a key; returns `true` when it completes the sequence.
    pub fn push(&mut self, key: &str) -> bool {
        if self.sequence.is_empty() {
            return false;
        }
        if self.recent.len() == self.sequence.len() {
            self.recent.pop_front();
        }
        self.recent.push_back(key.to_string());
        self.recent.iter().eq(self.sequence.iter())
    }

    pub fn clear(&mut self) {
        self.recent.clear();
    }
}
