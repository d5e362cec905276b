//! Search flow and toast state, kept free of DOM types so the rules
//! stay unit-testable.

use common::SearchQuery;

/// Outcome of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Nothing left after trimming; show the validation toast.
    EmptyInput,
    /// A search is already running; the attempt is dropped.
    AlreadyInFlight,
    /// Dispatch this query; the flow is now busy.
    Dispatch(SearchQuery),
}

/// One in-flight search at a time.
#[derive(Debug, Default)]
pub struct SearchFlow {
    in_flight: bool,
}

impl SearchFlow {
    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// Applies the submit rules to raw input. Empty input is rejected
    /// before the in-flight check.
    pub fn submit(&mut self, raw_input: &str) -> Submission {
        let Some(query) = SearchQuery::new(raw_input) else {
            return Submission::EmptyInput;
        };
        if self.in_flight {
            return Submission::AlreadyInFlight;
        }
        self.in_flight = true;
        Submission::Dispatch(query)
    }

    /// Dispatches a prepared query, bypassing the input field. Used
    /// for the initial page load.
    pub fn dispatch(&mut self, query: SearchQuery) -> Option<SearchQuery> {
        if self.in_flight {
            return None;
        }
        self.in_flight = true;
        Some(query)
    }

    /// The running search settled, successfully or not.
    pub fn settle(&mut self) {
        self.in_flight = false;
    }
}

/// The visible toast plus a generation counter, so a stale auto-hide
/// timer cannot dismiss a newer toast.
#[derive(Debug, Default)]
pub struct ToastState {
    message: Option<String>,
    generation: u32,
}

impl ToastState {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Shows a toast and returns the generation to hand to its
    /// auto-hide timer.
    pub fn show(&mut self, message: impl Into<String>) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.message = Some(message.into());
        self.generation
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    /// Auto-hide for one generation. Ignored when a newer toast has
    /// replaced it; returns whether anything changed.
    pub fn expire(&mut self, generation: u32) -> bool {
        if generation == self.generation && self.message.is_some() {
            self.message = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_input_dispatches_and_marks_the_flow_busy() {
        let mut flow = SearchFlow::default();
        let submission = flow.submit("  Paris ");
        assert_eq!(
            submission,
            Submission::Dispatch(SearchQuery {
                city: "Paris".to_string()
            })
        );
        assert!(flow.is_loading());
    }

    #[test]
    fn empty_input_is_rejected_without_touching_the_flow() {
        let mut flow = SearchFlow::default();
        for raw in ["", "   ", "\t\n"] {
            assert_eq!(flow.submit(raw), Submission::EmptyInput);
            assert!(!flow.is_loading());
        }
    }

    #[test]
    fn submits_while_busy_are_dropped() {
        let mut flow = SearchFlow::default();
        flow.submit("London");
        assert_eq!(flow.submit("Paris"), Submission::AlreadyInFlight);
        assert!(flow.is_loading());
    }

    #[test]
    fn empty_check_runs_before_the_busy_check() {
        let mut flow = SearchFlow::default();
        flow.submit("London");
        assert_eq!(flow.submit("   "), Submission::EmptyInput);
    }

    #[test]
    fn settling_allows_the_next_submit() {
        let mut flow = SearchFlow::default();
        flow.submit("London");
        flow.settle();
        assert!(!flow.is_loading());
        assert!(matches!(flow.submit("Paris"), Submission::Dispatch(_)));
    }

    #[test]
    fn direct_dispatch_respects_the_busy_flag() {
        let mut flow = SearchFlow::default();
        let query = SearchQuery {
            city: "London".to_string(),
        };
        assert_eq!(flow.dispatch(query.clone()), Some(query.clone()));
        assert_eq!(flow.dispatch(query), None);
    }

    #[test]
    fn toast_expiry_only_applies_to_its_own_generation() {
        let mut toast = ToastState::default();
        let first = toast.show("one");
        let second = toast.show("two");
        assert!(first != second);

        assert!(!toast.expire(first));
        assert_eq!(toast.message(), Some("two"));

        assert!(toast.expire(second));
        assert_eq!(toast.message(), None);
    }

    #[test]
    fn dismiss_clears_immediately_and_expiry_stays_quiet() {
        let mut toast = ToastState::default();
        let generation = toast.show("oops");
        toast.dismiss();
        assert_eq!(toast.message(), None);
        assert!(!toast.expire(generation));
    }
}
