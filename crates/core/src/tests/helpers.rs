// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::FunnelState;
use devcon_hub_domain::{
    Committee, Event, ExistingMemberForm, FieldErrors, FieldOfInterest, FormData, Member,
    NewVolunteerForm, TeamPreference,
};

/// A new-volunteer form that passes validation for `DevconGeekup`.
pub fn complete_new_volunteer_form() -> NewVolunteerForm {
    NewVolunteerForm {
        first_name: String::from("Ana"),
        last_name: String::from("Reyes"),
        email: String::from("ana.reyes@example.com"),
        phone: String::from("+63 912 345 6789"),
        facebook_url: String::from("https://facebook.com/ana.reyes"),
        school_organization: String::from("MSU-IIT"),
        field_of_interest: Some(FieldOfInterest::WebDevelopment),
        committee: Some(Committee::Registration),
        skills: vec![String::from("Python"), String::from("React")],
        team_preferences: vec![TeamPreference::Programs],
        education_level: None,
        motivation: String::from("I want to help the community grow."),
    }
}

/// A roster member for existing-member submissions.
pub fn matched_member() -> Member {
    Member {
        member_id: Some(7),
        first_name: String::from("Ben"),
        last_name: String::from("Santos"),
        email: String::from("ben@example.com"),
        phone: Some(String::from("+63 900 000 0000")),
        experience: Some(String::from("Volunteered at GeekUp 2023")),
        skills: Some(String::from("Java, DevOps")),
        created_at: Some(String::from("2024-01-05 10:00:00")),
    }
}

/// An existing-member form with a resolved match and a committee.
pub fn complete_member_form() -> ExistingMemberForm {
    ExistingMemberForm {
        search_email: String::from("ben@example.com"),
        matched: Some(matched_member()),
        committee: Some(Committee::General),
    }
}

/// Wraps a form into the `FillingForm` stage with no errors.
pub fn filling(event: Event, form: FormData) -> FunnelState {
    FunnelState::FillingForm {
        event,
        form,
        errors: FieldErrors::new(),
    }
}
