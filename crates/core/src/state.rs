// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use devcon_hub_domain::{Event, FieldErrors, FormData};

/// The volunteer funnel, one state per page of the flow.
///
/// Transitions are pure and driven by [`crate::apply`]; the state is
/// immutable and every transition produces a fresh value. `Submitted` is
/// terminal: re-submission requires starting the funnel over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunnelState {
    /// The applicant is choosing an event.
    SelectingEvent,
    /// The applicant is choosing whether they are new or an existing
    /// member.
    SelectingVolunteerType {
        /// The chosen event.
        event: Event,
    },
    /// The applicant is filling in the branch-specific form.
    FillingForm {
        /// The chosen event.
        event: Event,
        /// The in-progress form, tagged by volunteer type.
        form: FormData,
        /// Current field-scoped validation errors.
        errors: FieldErrors,
    },
    /// The form passed validation and the insert is in flight.
    Submitting {
        /// The chosen event.
        event: Event,
        /// The validated form.
        form: FormData,
    },
    /// The application was persisted. Terminal.
    Submitted,
}

impl FunnelState {
    /// Returns the initial funnel state.
    #[must_use]
    pub const fn start() -> Self {
        Self::SelectingEvent
    }

    /// Returns the stage name, for logging and error reporting.
    #[must_use]
    pub const fn stage_name(&self) -> &'static str {
        match self {
            Self::SelectingEvent => "SelectingEvent",
            Self::SelectingVolunteerType { .. } => "SelectingVolunteerType",
            Self::FillingForm { .. } => "FillingForm",
            Self::Submitting { .. } => "Submitting",
            Self::Submitted => "Submitted",
        }
    }
}

impl Default for FunnelState {
    fn default() -> Self {
        Self::start()
    }
}
