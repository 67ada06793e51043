//! Per-type processing state machine

/// States a type passes through within one processing pass
///
/// State transitions:
/// ```text
/// Discovered → Overridden                      (warning, terminal)
///            → NoEligibleFields                (silent, terminal)
///            → HasFields → Generated           (terminal)
///                        → IoFailure           (error, terminal)
/// ```
///
/// There are no retries and no transitions out of a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProcessingState {
    /// Returned by the type query, nothing decided yet
    #[default]
    Discovered,
    /// Type declares its own `toString()`
    Overridden,
    /// No instance, non-private field to render
    NoEligibleFields,
    /// Eligible fields selected, ready for synthesis
    HasFields,
    /// Artifact written
    Generated,
    /// Artifact could not be created or written
    IoFailure,
}

impl ProcessingState {
    /// Check if this state can transition to the target state
    pub fn can_transition_to(&self, target: ProcessingState) -> bool {
        use ProcessingState::*;
        matches!(
            (self, target),
            (Discovered, Overridden)
                | (Discovered, NoEligibleFields)
                | (Discovered, HasFields)
                | (HasFields, Generated)
                | (HasFields, IoFailure)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ProcessingState::Overridden
                | ProcessingState::NoEligibleFields
                | ProcessingState::Generated
                | ProcessingState::IoFailure
        )
    }

    /// Terminal states that produced no artifact by policy
    pub fn is_skipped(&self) -> bool {
        matches!(
            self,
            ProcessingState::Overridden | ProcessingState::NoEligibleFields
        )
    }

    /// Get a human-readable description of this state
    pub fn description(&self) -> &'static str {
        match self {
            ProcessingState::Discovered => "Type discovered, not yet inspected",
            ProcessingState::Overridden => "Type already declares toString()",
            ProcessingState::NoEligibleFields => "Type has no eligible fields",
            ProcessingState::HasFields => "Eligible fields selected",
            ProcessingState::Generated => "Artifact generated",
            ProcessingState::IoFailure => "Artifact could not be written",
        }
    }
}

impl std::fmt::Display for ProcessingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessingState::Discovered => write!(f, "Discovered"),
            ProcessingState::Overridden => write!(f, "Overridden"),
            ProcessingState::NoEligibleFields => write!(f, "NoEligibleFields"),
            ProcessingState::HasFields => write!(f, "HasFields"),
            ProcessingState::Generated => write!(f, "Generated"),
            ProcessingState::IoFailure => write!(f, "IoFailure"),
        }
    }
}
