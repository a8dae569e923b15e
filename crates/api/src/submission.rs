// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The submission pipeline and the member lookup.
//!
//! `submit_application` drives the funnel's `Submit` transition, builds
//! exactly one application record from the validated form, and performs
//! a single insert. A backend failure abandons the operation with the
//! caller's state unchanged; there are no retries.

use crate::error::{ApiError, translate_domain_error, translate_funnel_error};
use crate::request_response::{
    MemberLookupResponse, MemberSummary, SubmitApplicationRequest, SubmitApplicationResponse,
};
use devcon_hub::{FunnelEvent, FunnelState, apply, build_application};
use devcon_hub_domain::{
    ApplicationRecord, Committee, EducationLevel, Event, ExistingMemberForm, FieldErrors,
    FieldOfInterest, FormData, Member, NewVolunteerForm, TeamPreference,
};
use devcon_hub_persistence::Persistence;
use std::str::FromStr;
use tracing::{error, info};

/// Looks up a member by exact email match.
///
/// Zero matches are a normal outcome (`found: false`); a backend
/// failure is surfaced distinctly so an outage is never mistaken for
/// "you're not a member yet".
///
/// # Errors
///
/// Returns an error if the email is empty or the backend query fails.
pub fn lookup_member(
    persistence: &mut Persistence,
    email: &str,
) -> Result<MemberLookupResponse, ApiError> {
    let email: &str = email.trim();
    if email.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("email"),
            message: String::from("Email is required"),
        });
    }

    match persistence.find_member_by_email(email) {
        Ok(Some(member)) => Ok(MemberLookupResponse {
            found: true,
            member: Some(MemberSummary::from(member)),
        }),
        Ok(None) => Ok(MemberLookupResponse {
            found: false,
            member: None,
        }),
        Err(err) => {
            error!(error = %err, "Member lookup failed");
            Err(ApiError::Backend {
                operation: String::from("member lookup"),
                message: err.to_string(),
            })
        }
    }
}

/// Validates a submission, builds one application record, and inserts
/// it.
///
/// # Errors
///
/// Returns an error if:
/// - A code in the request does not parse
/// - The form fails field validation (`ValidationFailed` carries the
///   field-error map; nothing is persisted)
/// - The insert fails (`Backend`; the form may be re-submitted)
pub fn submit_application(
    persistence: &mut Persistence,
    request: &SubmitApplicationRequest,
) -> Result<SubmitApplicationResponse, ApiError> {
    let event: Event =
        Event::from_str(request.event_code()).map_err(translate_domain_error)?;
    let form: FormData = build_form(persistence, request)?;

    // Drive the funnel: Submit either advances to Submitting or stays
    // in FillingForm carrying the error map.
    let filling: FunnelState = FunnelState::FillingForm {
        event,
        form,
        errors: FieldErrors::new(),
    };
    let (event, form) = match apply(&filling, FunnelEvent::Submit)
        .map_err(translate_funnel_error)?
    {
        FunnelState::Submitting { event, form } => (event, form),
        FunnelState::FillingForm { errors, .. } => {
            return Err(ApiError::ValidationFailed { errors });
        }
        other => unreachable!("Submit produced unexpected stage {}", other.stage_name()),
    };

    let record: ApplicationRecord =
        build_application(event, &form).map_err(translate_funnel_error)?;

    let application_id: i64 = match persistence.insert_application(&record) {
        Ok(id) => id,
        Err(err) => {
            error!(error = %err, "Application insert failed");
            return Err(ApiError::Backend {
                operation: String::from("application insert"),
                message: err.to_string(),
            });
        }
    };

    let terminal: FunnelState = apply(
        &FunnelState::Submitting { event, form },
        FunnelEvent::SubmitSucceeded,
    )
    .map_err(translate_funnel_error)?;

    info!(
        application_id,
        event = event.as_str(),
        "Volunteer application submitted"
    );

    Ok(SubmitApplicationResponse {
        success: true,
        application_id,
        stage: terminal.stage_name().to_string(),
        message: String::from(
            "Thank you for volunteering! We'll review your application and get back to you \
             within 2-3 business days.",
        ),
    })
}

/// Parses the wire request into the tagged form union, resolving the
/// roster match for the existing-member branch.
fn build_form(
    persistence: &mut Persistence,
    request: &SubmitApplicationRequest,
) -> Result<FormData, ApiError> {
    match request {
        SubmitApplicationRequest::NewVolunteer {
            event: _,
            first_name,
            last_name,
            email,
            phone,
            facebook_url,
            school_organization,
            field_of_interest,
            committee,
            skills,
            team_preferences,
            education_level,
            motivation,
        } => {
            let field_of_interest: FieldOfInterest =
                FieldOfInterest::from_str(field_of_interest).map_err(translate_domain_error)?;
            let committee: Committee =
                Committee::from_str(committee).map_err(translate_domain_error)?;
            let education_level: Option<EducationLevel> = education_level
                .as_deref()
                .map(EducationLevel::from_str)
                .transpose()
                .map_err(translate_domain_error)?;
            let team_preferences: Vec<TeamPreference> = team_preferences
                .iter()
                .map(|code| TeamPreference::from_str(code))
                .collect::<Result<Vec<TeamPreference>, _>>()
                .map_err(translate_domain_error)?;

            Ok(FormData::NewVolunteer(NewVolunteerForm {
                first_name: first_name.clone(),
                last_name: last_name.clone(),
                email: email.clone(),
                phone: phone.clone().unwrap_or_default(),
                facebook_url: facebook_url.clone(),
                school_organization: school_organization.clone(),
                field_of_interest: Some(field_of_interest),
                committee: Some(committee),
                skills: skills.clone(),
                team_preferences,
                education_level,
                motivation: motivation.clone(),
            }))
        }
        SubmitApplicationRequest::ExistingMember {
            event: _,
            member_email,
            committee,
        } => {
            let committee: Committee =
                Committee::from_str(committee).map_err(translate_domain_error)?;

            let matched: Option<Member> = match persistence
                .find_member_by_email(member_email.trim())
            {
                Ok(matched) => matched,
                Err(err) => {
                    error!(error = %err, "Member lookup failed during submission");
                    return Err(ApiError::Backend {
                        operation: String::from("member lookup"),
                        message: err.to_string(),
                    });
                }
            };

            // Submission is blocked until a lookup has returned a match.
            if matched.is_none() {
                let mut errors: FieldErrors = FieldErrors::new();
                errors.insert(
                    String::from("memberSearch"),
                    String::from("No member found with that email"),
                );
                return Err(ApiError::ValidationFailed { errors });
            }

            Ok(FormData::ExistingMember(ExistingMemberForm {
                search_email: member_email.clone(),
                matched,
                committee: Some(committee),
            }))
        }
    }
}
