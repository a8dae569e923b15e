// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-progress application form state.
//!
//! The two volunteer-type branches are separate structs joined by a
//! tagged union, so a field belonging to one branch cannot leak into the
//! other branch's submitted record.

use crate::types::{
    Committee, EducationLevel, FieldOfInterest, Member, TeamPreference, VolunteerType,
};
use serde::{Deserialize, Serialize};

/// Form state for a first-time applicant.
///
/// Text fields hold the raw user input; an empty string means the field
/// has not been filled in yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVolunteerForm {
    /// The applicant's first name.
    pub first_name: String,
    /// The applicant's last name.
    pub last_name: String,
    /// The applicant's email address.
    pub email: String,
    /// The applicant's phone number (optional).
    pub phone: String,
    /// Link to the applicant's Facebook profile.
    pub facebook_url: String,
    /// The applicant's school or organization.
    pub school_organization: String,
    /// The applicant's field of interest.
    pub field_of_interest: Option<FieldOfInterest>,
    /// The committee the applicant requests, scoped by the chosen event.
    pub committee: Option<Committee>,
    /// Selected skills (at least one required).
    pub skills: Vec<String>,
    /// Preferred teams (at least one required).
    pub team_preferences: Vec<TeamPreference>,
    /// Self-reported education level (optional).
    pub education_level: Option<EducationLevel>,
    /// Free-text motivation.
    pub motivation: String,
}

impl NewVolunteerForm {
    /// Sets a text field by its form field name.
    ///
    /// Returns `false` if the name does not refer to a text field of this
    /// branch, leaving the form unchanged.
    pub fn set_text_field(&mut self, field: &str, value: String) -> bool {
        match field {
            "firstName" => self.first_name = value,
            "lastName" => self.last_name = value,
            "email" => self.email = value,
            "phone" => self.phone = value,
            "facebookUrl" => self.facebook_url = value,
            "schoolOrganization" => self.school_organization = value,
            "motivation" => self.motivation = value,
            _ => return false,
        }
        true
    }

    /// Adds the skill if absent, removes it if present.
    pub fn toggle_skill(&mut self, skill: &str) {
        if let Some(position) = self.skills.iter().position(|s| s == skill) {
            self.skills.remove(position);
        } else {
            self.skills.push(skill.to_string());
        }
    }

    /// Adds the team preference if absent, removes it if present.
    pub fn toggle_team_preference(&mut self, preference: TeamPreference) {
        if let Some(position) = self
            .team_preferences
            .iter()
            .position(|p| *p == preference)
        {
            self.team_preferences.remove(position);
        } else {
            self.team_preferences.push(preference);
        }
    }
}

/// Form state for an existing community member.
///
/// Only the email search box is shown until a roster match is resolved;
/// after that, only the committee selection. Personal fields come from
/// the matched [`Member`] at submission time and are never edited here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingMemberForm {
    /// The email entered into the member search box.
    pub search_email: String,
    /// The resolved roster match, if any.
    pub matched: Option<Member>,
    /// The committee the applicant requests, scoped by the chosen event.
    pub committee: Option<Committee>,
}

/// The in-progress application form, tagged by volunteer type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormData {
    /// First-time applicant branch.
    NewVolunteer(NewVolunteerForm),
    /// Existing community member branch.
    ExistingMember(ExistingMemberForm),
}

impl FormData {
    /// Creates an empty form for the given volunteer type.
    #[must_use]
    pub fn empty(volunteer_type: VolunteerType) -> Self {
        match volunteer_type {
            VolunteerType::NewVolunteer => Self::NewVolunteer(NewVolunteerForm::default()),
            VolunteerType::ExistingMember => Self::ExistingMember(ExistingMemberForm::default()),
        }
    }

    /// Returns the volunteer type this form belongs to.
    #[must_use]
    pub const fn volunteer_type(&self) -> VolunteerType {
        match self {
            Self::NewVolunteer(_) => VolunteerType::NewVolunteer,
            Self::ExistingMember(_) => VolunteerType::ExistingMember,
        }
    }

    /// Returns the selected committee, if any.
    #[must_use]
    pub const fn committee(&self) -> Option<Committee> {
        match self {
            Self::NewVolunteer(form) => form.committee,
            Self::ExistingMember(form) => form.committee,
        }
    }
}
