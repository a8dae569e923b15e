// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::forms::{ExistingMemberForm, FormData, NewVolunteerForm};
use crate::types::Event;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Field-scoped validation errors, keyed by the form field name.
///
/// A form is valid iff its error map is empty.
pub type FieldErrors = BTreeMap<String, String>;

/// General `local@domain.tld` shape; deliberately permissive beyond the
/// no-whitespace, single-`@`, dotted-domain requirements.
#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Checks that an email matches the `local@domain.tld` shape.
#[must_use]
pub fn validate_email_format(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn require_text(errors: &mut FieldErrors, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(field.to_string(), message.to_string());
    }
}

fn require_email(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.insert(field.to_string(), String::from("Email is required"));
    } else if !validate_email_format(value.trim()) {
        errors.insert(
            field.to_string(),
            String::from("Please enter a valid email address"),
        );
    }
}

fn require_committee(
    errors: &mut FieldErrors,
    event: Event,
    committee: Option<crate::types::Committee>,
) {
    match committee {
        None => {
            errors.insert(
                String::from("committee"),
                String::from("Please select a committee"),
            );
        }
        Some(committee) if !committee.is_offered_for(event) => {
            errors.insert(
                String::from("committee"),
                String::from("This committee is not offered for the selected event"),
            );
        }
        Some(_) => {}
    }
}

fn validate_new_volunteer(event: Event, form: &NewVolunteerForm) -> FieldErrors {
    let mut errors: FieldErrors = FieldErrors::new();

    require_text(
        &mut errors,
        "firstName",
        &form.first_name,
        "First name is required",
    );
    require_text(
        &mut errors,
        "lastName",
        &form.last_name,
        "Last name is required",
    );
    require_email(&mut errors, "email", &form.email);
    require_text(
        &mut errors,
        "facebookUrl",
        &form.facebook_url,
        "Facebook profile link is required",
    );
    require_text(
        &mut errors,
        "schoolOrganization",
        &form.school_organization,
        "School or organization is required",
    );

    if form.field_of_interest.is_none() {
        errors.insert(
            String::from("fieldOfInterest"),
            String::from("Please select your field of interest"),
        );
    }
    require_committee(&mut errors, event, form.committee);
    if form.skills.is_empty() {
        errors.insert(
            String::from("skills"),
            String::from("Please select at least one skill"),
        );
    }
    if form.team_preferences.is_empty() {
        errors.insert(
            String::from("teamPreferences"),
            String::from("Please select at least one team preference"),
        );
    }
    require_text(
        &mut errors,
        "motivation",
        &form.motivation,
        "Motivation is required",
    );

    // Phone and education level are optional on this branch.
    errors
}

fn validate_existing_member(event: Event, form: &ExistingMemberForm) -> FieldErrors {
    let mut errors: FieldErrors = FieldErrors::new();

    if form.matched.is_none() {
        if form.search_email.trim().is_empty() {
            errors.insert(
                String::from("memberSearch"),
                String::from("Email is required"),
            );
        } else if validate_email_format(form.search_email.trim()) {
            errors.insert(
                String::from("memberSearch"),
                String::from("Look up your membership before submitting"),
            );
        } else {
            errors.insert(
                String::from("memberSearch"),
                String::from("Please enter a valid email address"),
            );
        }
        // Committee selection is not shown until a member is matched, so
        // reporting it unmatched would surface an error the user cannot
        // see. Stop here.
        return errors;
    }

    require_committee(&mut errors, event, form.committee);
    errors
}

/// Validates a form against its volunteer-type branch's rules.
///
/// Pure: `(form) -> mapping of field name to error message`. The mapping
/// is empty iff the form may be submitted.
#[must_use]
pub fn validate_form(event: Event, form: &FormData) -> FieldErrors {
    match form {
        FormData::NewVolunteer(form) => validate_new_volunteer(event, form),
        FormData::ExistingMember(form) => validate_existing_member(event, form),
    }
}
