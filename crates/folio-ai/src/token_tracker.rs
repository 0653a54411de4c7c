//! Token usage tracking across the turns of a session.

use crate::TokenUsage;

/// Tracks cumulative token usage and completed turns.
#[derive(Debug, Clone, Default)]
pub struct TokenTracker {
    total: TokenUsage,
    turns: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the usage reported for one completed turn.
    pub fn record(&mut self, usage: &TokenUsage) {
        self.total.input_tokens = self.total.input_tokens.saturating_add(usage.input_tokens);
        self.total.output_tokens = self
            .total
            .output_tokens
            .saturating_add(usage.output_tokens);
        self.turns += 1;
    }

    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    pub fn total_tokens(&self) -> u64 {
        self.total.total_tokens()
    }

    /// Number of turns recorded.
    pub fn turns(&self) -> u64 {
        self.turns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_accumulate() {
        let mut tracker = TokenTracker::new();
        tracker.record(&TokenUsage {
            input_tokens: 10,
            output_tokens: 4,
        });
        tracker.record(&TokenUsage {
            input_tokens: 20,
            output_tokens: 6,
        });
        assert_eq!(tracker.total().input_tokens, 30);
        assert_eq!(tracker.total().output_tokens, 10);
        assert_eq!(tracker.total_tokens(), 40);
        assert_eq!(tracker.turns(), 2);
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        let mut tracker = TokenTracker::new();
        tracker.record(&TokenUsage {
            input_tokens: u64::MAX,
            output_tokens: 0,
        });
        tracker.record(&TokenUsage {
            input_tokens: 5,
            output_tokens: 0,
        });
        assert_eq!(tracker.total().input_tokens, u64::MAX);
        assert_eq!(tracker.total_tokens(), u64::MAX);
    }
}
