//! View tracking outcome.

/// Whether a view moved the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewOutcome {
    Recorded,
    AlreadyCounted,
}

impl ViewOutcome {
    #[must_use]
    pub const fn is_recorded(self) -> bool {
        matches!(self, Self::Recorded)
    }
}

impl From<bool> for ViewOutcome {
    fn from(recorded: bool) -> Self {
        if recorded {
            Self::Recorded
        } else {
            Self::AlreadyCounted
        }
    }
}
