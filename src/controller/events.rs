//! Event hooks emitted by the controller.

/// Hooks into the controller lifecycle.
///
/// Every method has a no-op default, so implementors override only the
/// hooks they need. The controller consults [`should_autocomplete`] before
/// reacting to any query trigger, which lets the caller suspend hinting
/// without tearing the controller down.
///
/// [`should_autocomplete`]: AutocompleteEvents::should_autocomplete
pub trait AutocompleteEvents {
    /// Whether the controller may currently produce hints.
    fn should_autocomplete(&self) -> bool {
        true
    }

    /// Called after every filtering pass with whether any candidate
    /// matched.
    fn matches_changed(&mut self, _found: bool) {}

    /// Called when a hint row is selected. `index` addresses the original
    /// candidate list, not the displayed subset.
    fn hint_selected(&mut self, _index: usize, _value: &str) {}

    /// Called when the query is cleared and the hint list dropped.
    fn dismissed(&mut self) {}
}

/// Events sink that reacts to nothing. Useful when the caller only polls
/// [`hints`](super::AutocompleteController::hints).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoEvents;

impl AutocompleteEvents for NoEvents {}
