//! Cyclic message rotation for long-running wait notices.

#[cfg(test)]
#[path = "message_cycle_test.rs"]
mod message_cycle_test;

/// Interval between message changes, in milliseconds.
pub const ROTATE_INTERVAL_MS: u32 = 3000;

const MIN_MESSAGES: usize = 2;

/// Messages shown while the analysis service prepares feedback.
pub const LOADING_MESSAGES: &[&str] = &[
    "AI가 당신의 목소리를 더 멋지게 만들어줄 팁을 생각하고 있어요...",
    "곧 준비가 완료됩니다...",
];

/// A fixed message list with a wrapping cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageCycle {
    messages: &'static [&'static str],
    index: usize,
}

impl MessageCycle {
    /// Start a cycle at the first message.
    ///
    /// Returns `None` unless there are at least two messages to rotate.
    pub fn new(messages: &'static [&'static str]) -> Option<Self> {
        if messages.len() < MIN_MESSAGES {
            return None;
        }
        Some(Self { messages, index: 0 })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'static str {
        self.messages[self.index]
    }

    /// Move to the next message, wrapping after the last one.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.messages.len();
    }
}

impl Default for MessageCycle {
    fn default() -> Self {
        Self { messages: LOADING_MESSAGES, index: 0 }
    }
}
