//! Ordered filter chain with short-circuit evaluation

use super::{Filter, FilterDecision};
use crate::core::LogEvent;

/// An ordered sequence of filters owned by one appender.
///
/// Insertion order is significant: evaluation walks the chain and the first
/// non-neutral decision wins.
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter to the end of the chain.
    pub fn add(&mut self, filter: Box<dyn Filter>) {
        self.filters.push(filter);
    }

    /// Evaluate the chain for `event`.
    ///
    /// Returns the first non-neutral decision; if every filter is neutral
    /// (including the empty chain), the event is accepted.
    pub fn decide(&self, event: &LogEvent) -> FilterDecision {
        for filter in &self.filters {
            match filter.decide(event) {
                FilterDecision::Neutral => continue,
                decision => return decision,
            }
        }
        FilterDecision::Accept
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogEvent, LogLevel, OptionHandler};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Fixed-decision filter that counts how often it is consulted.
    struct SpyFilter {
        decision: FilterDecision,
        calls: Arc<AtomicUsize>,
    }

    impl OptionHandler for SpyFilter {
        fn set_option(&mut self, _key: &str, _value: &str) {}
        fn activate_options(&mut self) {}
    }

    impl Filter for SpyFilter {
        fn decide(&self, _event: &LogEvent) -> FilterDecision {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.decision
        }

        fn name(&self) -> &str {
            "Spy"
        }
    }

    fn spy(decision: FilterDecision) -> (Box<dyn Filter>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Box::new(SpyFilter {
                decision,
                calls: Arc::clone(&calls),
            }),
            calls,
        )
    }

    #[test]
    fn test_empty_chain_accepts() {
        let chain = FilterChain::new();
        let event = LogEvent::new("app", LogLevel::Info, "x");
        assert_eq!(chain.decide(&event), FilterDecision::Accept);
    }

    #[test]
    fn test_all_neutral_accepts() {
        let mut chain = FilterChain::new();
        let (a, _) = spy(FilterDecision::Neutral);
        let (b, _) = spy(FilterDecision::Neutral);
        chain.add(a);
        chain.add(b);

        let event = LogEvent::new("app", LogLevel::Info, "x");
        assert_eq!(chain.decide(&event), FilterDecision::Accept);
    }

    #[test]
    fn test_first_decisive_result_short_circuits() {
        let mut chain = FilterChain::new();
        let (first, first_calls) = spy(FilterDecision::Deny);
        let (second, second_calls) = spy(FilterDecision::Accept);
        chain.add(first);
        chain.add(second);

        let event = LogEvent::new("app", LogLevel::Info, "x");
        assert_eq!(chain.decide(&event), FilterDecision::Deny);
        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_neutral_passes_to_next() {
        let mut chain = FilterChain::new();
        let (first, _) = spy(FilterDecision::Neutral);
        let (second, second_calls) = spy(FilterDecision::Deny);
        chain.add(first);
        chain.add(second);

        let event = LogEvent::new("app", LogLevel::Info, "x");
        assert_eq!(chain.decide(&event), FilterDecision::Deny);
        assert_eq!(second_calls.load(Ordering::SeqCst), 1);
    }
}
