//! Fetch state of a data-driven panel.
//!
//! A panel is always in exactly one of four states. Data shown to the user is
//! either wholly live or wholly fallback; the two are never merged.

/// Where the displayed view model came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Last successful fetch.
    Live,
    /// Fixed demonstration data.
    Fallback,
}

/// Result of one fetch cycle, already transformed into a view model.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    /// Fetch and shape validation succeeded.
    Live(T),
    /// Fetch failed; `data` is the panel's fallback constant.
    Fallback {
        /// Fallback view model.
        data: T,
        /// User-visible degraded-mode warning.
        reason: String,
    },
}

impl<T> FetchOutcome<T> {
    /// Returns provenance of the carried data.
    #[must_use]
    pub const fn provenance(&self) -> Provenance {
        match self {
            Self::Live(_) => Provenance::Live,
            Self::Fallback { .. } => Provenance::Fallback,
        }
    }

    /// Returns carried view model.
    #[must_use]
    pub const fn data(&self) -> &T {
        match self {
            Self::Live(data) | Self::Fallback { data, .. } => data,
        }
    }

    /// Returns warning, if the outcome is a fallback.
    #[must_use]
    pub fn warning(&self) -> Option<&str> {
        match self {
            Self::Live(_) => None,
            Self::Fallback { reason, .. } => Some(reason),
        }
    }
}

/// Borrowed view of whatever a panel should currently render.
#[derive(Debug)]
pub struct PanelView<'a, T> {
    /// View model to render.
    pub data: &'a T,
    /// Whether `data` is live or fallback.
    pub provenance: Provenance,
    /// Degraded-mode warning, present exactly when provenance is fallback.
    pub warning: Option<&'a str>,
    /// A background refresh is in flight.
    pub refreshing: bool,
}

/// Panel fetch state machine: `Idle -> Loading -> {Success, Failed}`.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelState<T> {
    /// Nothing requested yet.
    Idle,
    /// A fetch is in flight; `previous` stays visible during refreshes.
    Loading {
        /// Settled result of the previous cycle, if any.
        previous: Option<FetchOutcome<T>>,
    },
    /// Live data from the last successful fetch.
    Success(T),
    /// Fetch failed; fallback data is shown with a warning.
    Failed {
        /// Fallback view model.
        fallback: T,
        /// User-visible degraded-mode warning.
        reason: String,
    },
}

impl<T> Default for PanelState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> PanelState<T> {
    /// Enters `Loading`, keeping the previous result visible.
    ///
    /// Returns `false` and leaves the state untouched when already loading.
    pub fn begin_loading(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }

        let previous = match std::mem::replace(self, Self::Idle) {
            Self::Idle | Self::Loading { .. } => None,
            Self::Success(data) => Some(FetchOutcome::Live(data)),
            Self::Failed { fallback, reason } => Some(FetchOutcome::Fallback {
                data: fallback,
                reason,
            }),
        };

        *self = Self::Loading { previous };
        true
    }

    /// Applies the result of a fetch cycle.
    pub fn settle(&mut self, outcome: FetchOutcome<T>) {
        *self = match outcome {
            FetchOutcome::Live(data) => Self::Success(data),
            FetchOutcome::Fallback { data, reason } => Self::Failed {
                fallback: data,
                reason,
            },
        };
    }

    /// Returns whether a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Returns the view model to render, if any.
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        self.view().map(|view| view.data)
    }

    /// Returns the view model to render mutably, if any.
    pub fn data_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Idle | Self::Loading { previous: None } => None,
            Self::Loading {
                previous: Some(FetchOutcome::Live(data) | FetchOutcome::Fallback { data, .. }),
            }
            | Self::Success(data)
            | Self::Failed { fallback: data, .. } => Some(data),
        }
    }

    /// Returns the full render view, if there is data to show.
    #[must_use]
    pub fn view(&self) -> Option<PanelView<'_, T>> {
        match self {
            Self::Idle | Self::Loading { previous: None } => None,
            Self::Loading {
                previous: Some(outcome),
            } => Some(PanelView {
                data: outcome.data(),
                provenance: outcome.provenance(),
                warning: outcome.warning(),
                refreshing: true,
            }),
            Self::Success(data) => Some(PanelView {
                data,
                provenance: Provenance::Live,
                warning: None,
                refreshing: false,
            }),
            Self::Failed { fallback, reason } => Some(PanelView {
                data: fallback,
                provenance: Provenance::Fallback,
                warning: Some(reason),
                refreshing: false,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_load_has_no_view() {
        let mut state: PanelState<u32> = PanelState::Idle;
        assert!(state.begin_loading());
        assert_eq!(state, PanelState::Loading { previous: None });
        assert!(state.view().is_none());
    }

    #[test]
    fn test_begin_loading_is_rejected_while_loading() {
        let mut state: PanelState<u32> = PanelState::Idle;
        assert!(state.begin_loading());
        assert!(!state.begin_loading());
        assert!(state.is_loading());
    }

    #[test]
    fn test_success_clears_warning() {
        let mut state: PanelState<i32> = PanelState::Idle;
        state.begin_loading();
        state.settle(FetchOutcome::Fallback {
            data: 1,
            reason: "offline".to_string(),
        });
        assert_eq!(state.view().unwrap().warning, Some("offline"));

        state.begin_loading();
        state.settle(FetchOutcome::Live(2));

        let view = state.view().unwrap();
        assert_eq!(*view.data, 2);
        assert_eq!(view.provenance, Provenance::Live);
        assert!(view.warning.is_none());
    }

    #[test]
    fn test_background_refresh_keeps_previous_view() {
        let mut state = PanelState::Success(7);
        assert!(state.begin_loading());
        assert!(state.is_loading());

        let view = state.view().unwrap();
        assert_eq!(*view.data, 7);
        assert!(view.refreshing);
        assert_eq!(view.provenance, Provenance::Live);
    }

    #[test]
    fn test_refresh_after_failure_keeps_warning_visible() {
        let mut state = PanelState::Failed {
            fallback: 3,
            reason: "demo".to_string(),
        };
        state.begin_loading();

        let view = state.view().unwrap();
        assert_eq!(view.provenance, Provenance::Fallback);
        assert_eq!(view.warning, Some("demo"));
    }

    #[test]
    fn test_data_mut_targets_visible_model() {
        let mut state = PanelState::Success(vec![1, 2]);
        state.begin_loading();
        state.data_mut().unwrap().push(3);
        assert_eq!(state.data().unwrap().len(), 3);
    }
}
