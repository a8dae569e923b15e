// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use devcon_hub_domain::{
    Committee, EducationLevel, Event, FieldOfInterest, Member, TeamPreference, VolunteerType,
};

/// A funnel event represents user or route intent as data only.
///
/// Events are the only way to move the funnel between states; applying
/// one never mutates the current state in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunnelEvent {
    /// The `event` route parameter changed.
    SelectEvent(Event),
    /// The `type` route parameter changed.
    SelectVolunteerType(VolunteerType),
    /// A text field changed. Clears only that field's prior error.
    SetField {
        /// The form field name (e.g. `firstName`, `memberSearch`).
        field: String,
        /// The new raw value.
        value: String,
    },
    /// A skill checkbox was toggled (new-volunteer branch).
    ToggleSkill(String),
    /// A team-preference checkbox was toggled (new-volunteer branch).
    ToggleTeamPreference(TeamPreference),
    /// The committee selection changed.
    SetCommittee(Committee),
    /// The field-of-interest selection changed (new-volunteer branch).
    SetFieldOfInterest(FieldOfInterest),
    /// The education-level selection changed (new-volunteer branch).
    SetEducationLevel(Option<EducationLevel>),
    /// The member lookup resolved (existing-member branch). `None`
    /// records a legitimate zero-match outcome.
    MemberResolved(Option<Member>),
    /// The applicant pressed submit.
    Submit,
    /// The backend insert succeeded.
    SubmitSucceeded,
    /// The backend insert failed; the form returns unchanged.
    SubmitFailed,
}

impl FunnelEvent {
    /// Returns the event name, for logging and error reporting.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SelectEvent(_) => "SelectEvent",
            Self::SelectVolunteerType(_) => "SelectVolunteerType",
            Self::SetField { .. } => "SetField",
            Self::ToggleSkill(_) => "ToggleSkill",
            Self::ToggleTeamPreference(_) => "ToggleTeamPreference",
            Self::SetCommittee(_) => "SetCommittee",
            Self::SetFieldOfInterest(_) => "SetFieldOfInterest",
            Self::SetEducationLevel(_) => "SetEducationLevel",
            Self::MemberResolved(_) => "MemberResolved",
            Self::Submit => "Submit",
            Self::SubmitSucceeded => "SubmitSucceeded",
            Self::SubmitFailed => "SubmitFailed",
        }
    }
}
