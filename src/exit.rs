// src/exit.rs
//! Standardized process exit codes for `hottopic`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum HotTopicExit {
    /// A most viewed topic was found and reported.
    Success = 0,
    /// Generic error (e.g. IO, config).
    Error = 1,
    /// Input records were malformed or overflowed a counter.
    InvalidInput = 2,
    /// Input was valid but held no (video, topic) pairs.
    NoTopic = 3,
}

impl HotTopicExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for HotTopicExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        let codes = [
            HotTopicExit::Success,
            HotTopicExit::Error,
            HotTopicExit::InvalidInput,
            HotTopicExit::NoTopic,
        ]
        .map(HotTopicExit::code);
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
