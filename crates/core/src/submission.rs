// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::FunnelError;
use devcon_hub_domain::{
    ApplicationRecord, DomainError, Event, ExistingMemberForm, FormData, Member, NewVolunteerForm,
    join_skills,
};

/// Maps a validated form to exactly one application record.
///
/// The caller is expected to have driven the form through the `Submit`
/// transition first; this function still refuses forms missing required
/// selections and re-checks the branch invariant on the finished record,
/// so an unvalidated form cannot produce a mixed-branch row.
///
/// For the existing-member branch the applicant's name, email, phone,
/// skills, and experience are copied from the matched member verbatim.
///
/// # Errors
///
/// Returns an error if:
/// - The existing-member branch has no resolved roster match
/// - A required selection (committee) is missing
/// - The finished record violates the branch invariant
pub fn build_application(
    event: Event,
    form: &FormData,
) -> Result<ApplicationRecord, FunnelError> {
    let record: ApplicationRecord = match form {
        FormData::NewVolunteer(branch) => build_new_volunteer(event, branch)?,
        FormData::ExistingMember(branch) => build_existing_member(event, branch)?,
    };
    record.check_branch_invariant()?;
    Ok(record)
}

fn build_new_volunteer(
    event: Event,
    form: &NewVolunteerForm,
) -> Result<ApplicationRecord, FunnelError> {
    let committee = form
        .committee
        .ok_or(FunnelError::IncompleteForm { field: "committee" })?;

    let team_preferences: Vec<String> = form
        .team_preferences
        .iter()
        .map(|preference| preference.as_str().to_string())
        .collect();

    Ok(ApplicationRecord {
        application_id: None,
        first_name: form.first_name.trim().to_string(),
        last_name: form.last_name.trim().to_string(),
        email: form.email.trim().to_string(),
        phone: non_empty(&form.phone),
        event: event.as_str().to_string(),
        volunteer_type: String::from("new-volunteer"),
        committee: committee.as_str().to_string(),
        facebook_url: non_empty(&form.facebook_url),
        school_organization: non_empty(&form.school_organization),
        field_of_interest: form.field_of_interest.map(|field| field.as_str().to_string()),
        team_preferences: Some(join_skills(&team_preferences)),
        education_level: form.education_level.map(|level| level.as_str().to_string()),
        skills: Some(join_skills(&form.skills)),
        experience: None,
        motivation: non_empty(&form.motivation),
        created_at: None,
        updated_at: None,
    })
}

fn build_existing_member(
    event: Event,
    form: &ExistingMemberForm,
) -> Result<ApplicationRecord, FunnelError> {
    let member: &Member = form
        .matched
        .as_ref()
        .ok_or(FunnelError::DomainViolation(DomainError::MissingMemberMatch))?;
    let committee = form
        .committee
        .ok_or(FunnelError::IncompleteForm { field: "committee" })?;

    Ok(ApplicationRecord {
        application_id: None,
        first_name: member.first_name.clone(),
        last_name: member.last_name.clone(),
        email: member.email.clone(),
        phone: member.phone.clone(),
        event: event.as_str().to_string(),
        volunteer_type: String::from("existing-member"),
        committee: committee.as_str().to_string(),
        facebook_url: None,
        school_organization: None,
        field_of_interest: None,
        team_preferences: None,
        education_level: None,
        skills: member.skills.clone(),
        experience: member.experience.clone(),
        motivation: None,
        created_at: None,
        updated_at: None,
    })
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
