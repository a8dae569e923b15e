// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use devcon_hub_domain::DomainError;

/// Errors that can occur while driving the funnel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunnelError {
    /// The event is not legal in the current state. The caller's state
    /// is untouched.
    InvalidTransition {
        /// The stage the funnel was in.
        stage: &'static str,
        /// The event that was applied.
        event: &'static str,
    },
    /// A `SetField` event named a field the current branch does not
    /// have.
    UnknownField {
        /// The unrecognized field name.
        field: String,
    },
    /// An edit event targeted the other volunteer-type branch.
    WrongBranch {
        /// The event that was applied.
        event: &'static str,
        /// The volunteer-type code of the active branch.
        volunteer_type: &'static str,
    },
    /// A record was built from a form missing a required selection.
    IncompleteForm {
        /// The missing field name.
        field: &'static str,
    },
    /// A domain rule was violated.
    DomainViolation(DomainError),
}

impl std::fmt::Display for FunnelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTransition { stage, event } => {
                write!(f, "Event '{event}' is not valid in the '{stage}' stage")
            }
            Self::UnknownField { field } => {
                write!(f, "Unknown form field: {field}")
            }
            Self::WrongBranch {
                event,
                volunteer_type,
            } => {
                write!(
                    f,
                    "Event '{event}' does not apply to the '{volunteer_type}' branch"
                )
            }
            Self::IncompleteForm { field } => {
                write!(f, "Form is missing a required selection: {field}")
            }
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
        }
    }
}

impl std::error::Error for FunnelError {}

impl From<DomainError> for FunnelError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
