//! Text-input lifecycle handling around the match filter.
//!
//! The controller owns the candidate values and decides when the filter
//! runs. The text input reports three triggers: the query was acquired
//! (the field gained focus with text already present), the query changed,
//! or the query was cleared (the field lost focus). Queries shorter than
//! the configured minimum never reach the filter.
//!
//! The absolute indexes of the currently exposed hints are retained, so a
//! row selection resolves against the original candidate list with a
//! direct lookup. Each filtering pass replaces the previous hint state
//! wholesale; the most recent pass is always authoritative.

mod config;
mod events;


pub use config::AutocompleteConfig;
pub use events::{AutocompleteEvents, NoEvents};

use tracing::trace;

use crate::matching::filter_candidates;

/// Drives autocomplete filtering from text-input lifecycle triggers.
///
/// The events sink is consulted before every trigger via
/// [`AutocompleteEvents::should_autocomplete`] and notified of match
/// state changes, selections, and dismissal.
pub struct AutocompleteController<E> {
    /// Candidate values hints are drawn from.
    values: Vec<String>,
    /// Active configuration.
    config: AutocompleteConfig,
    /// Absolute indexes of the currently exposed hints.
    current: Vec<usize>,
    /// Events sink.
    events: E,
}

impl<E: AutocompleteEvents> AutocompleteController<E> {
    /// Create a controller with the default configuration.
    pub fn new(events: E) -> Self {
        Self::with_config(AutocompleteConfig::default(), events)
    }

    /// Create a controller with an explicit configuration.
    pub fn with_config(config: AutocompleteConfig, events: E) -> Self {
        Self {
            values: Vec::new(),
            config,
            current: Vec::new(),
            events,
        }
    }

    /// Replace the candidate values.
    ///
    /// Hint indexes published so far are dropped, since they addressed the
    /// previous list.
    pub fn set_values<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values = values.into_iter().map(Into::into).collect();
        self.current.clear();
    }

    /// The candidate values currently installed.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// The active configuration.
    pub fn config(&self) -> &AutocompleteConfig {
        &self.config
    }

    /// Replace the configuration. Takes effect on the next trigger.
    pub fn set_config(&mut self, config: AutocompleteConfig) {
        self.config = config;
    }

    /// Read access to the events sink.
    pub fn events(&self) -> &E {
        &self.events
    }

    /// Mutable access to the events sink.
    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }

    /// The input gained focus with `query` already present.
    ///
    /// Runs the filter only when the query is long enough; a short query
    /// leaves the current hints untouched.
    pub fn query_acquired(&mut self, query: &str) {
        if !self.events.should_autocomplete() {
            return;
        }
        if query.chars().count() < self.config.min_chars {
            return;
        }
        self.refresh(query);
    }

    /// The query text changed.
    ///
    /// A query that falls below the minimum length clears the hints
    /// without reporting a match state.
    pub fn query_changed(&mut self, query: &str) {
        if !self.events.should_autocomplete() {
            return;
        }
        if query.chars().count() >= self.config.min_chars {
            self.refresh(query);
        } else {
            self.current.clear();
        }
    }

    /// The query was cleared (the input lost focus).
    pub fn query_cleared(&mut self) {
        self.current.clear();
        self.events.dismissed();
    }

    /// The hints currently exposed, as `(absolute index, value)` pairs in
    /// candidate-list order.
    pub fn hints(&self) -> Vec<(usize, &str)> {
        self.current
            .iter()
            .map(|&index| (index, self.values[index].as_str()))
            .collect()
    }

    /// Resolve the displayed row at position `row` to its candidate.
    ///
    /// Returns the `(absolute index, value)` pair, re-read from the live
    /// candidate list, and notifies the events sink. `None` if `row` is
    /// outside the displayed range.
    pub fn select(&mut self, row: usize) -> Option<(usize, &str)> {
        let index = *self.current.get(row)?;
        let value = self.values[index].as_str();
        self.events.hint_selected(index, value);
        Some((index, value))
    }

    /// Run the filter for `query` and publish the outcome.
    fn refresh(&mut self, query: &str) {
        let matched: Vec<usize> = filter_candidates(&self.values, query, &self.config.matching)
            .iter()
            .map(|m| m.index)
            .collect();
        let found = !matched.is_empty();

        trace!(
            target: "autotext::controller::refresh",
            query,
            hints = matched.len(),
        );

        self.events.matches_changed(found);
        if found {
            self.current = matched;
        } else {
            self.current.clear();
        }
    }
}
