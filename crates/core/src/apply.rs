// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::FunnelError;
use crate::event::FunnelEvent;
use crate::state::FunnelState;
use devcon_hub_domain::{Event, FieldErrors, FormData, validate_form};

/// Applies a funnel event to the current state, producing a new state.
///
/// The function is pure: the caller's state is never mutated, and an
/// `Err` leaves it authoritative. Route-parameter events (`SelectEvent`,
/// `SelectVolunteerType`) restart the downstream portion of the funnel:
/// changing the event from the form page returns to volunteer-type
/// selection, and changing the volunteer type resets the form to the
/// other branch.
///
/// `Submit` re-validates the whole form: the funnel either stays in
/// `FillingForm` carrying the fresh error map or advances to
/// `Submitting`. `Submitted` is terminal and accepts no further events.
///
/// # Errors
///
/// Returns an error if:
/// - The event is not legal in the current stage
/// - A field edit names an unknown field or the other branch
#[allow(clippy::too_many_lines)]
pub fn apply(state: &FunnelState, event: FunnelEvent) -> Result<FunnelState, FunnelError> {
    match (state, event) {
        // Event selection. Re-selecting from the type page follows a
        // route-parameter change.
        (
            FunnelState::SelectingEvent | FunnelState::SelectingVolunteerType { .. },
            FunnelEvent::SelectEvent(event),
        ) => Ok(FunnelState::SelectingVolunteerType { event }),
        (FunnelState::FillingForm { .. }, FunnelEvent::SelectEvent(event)) => {
            // Changing the event mid-form restarts type selection; the
            // committee catalog differs per event.
            Ok(FunnelState::SelectingVolunteerType { event })
        }

        // Volunteer-type selection. Re-selecting from the form page
        // resets to an empty form of the other branch.
        (
            FunnelState::SelectingVolunteerType { event } | FunnelState::FillingForm { event, .. },
            FunnelEvent::SelectVolunteerType(volunteer_type),
        ) => Ok(FunnelState::FillingForm {
            event: *event,
            form: FormData::empty(volunteer_type),
            errors: FieldErrors::new(),
        }),

        // Form edits.
        (
            FunnelState::FillingForm {
                event,
                form,
                errors,
            },
            edit @ (FunnelEvent::SetField { .. }
            | FunnelEvent::ToggleSkill(_)
            | FunnelEvent::ToggleTeamPreference(_)
            | FunnelEvent::SetCommittee(_)
            | FunnelEvent::SetFieldOfInterest(_)
            | FunnelEvent::SetEducationLevel(_)
            | FunnelEvent::MemberResolved(_)),
        ) => apply_edit(*event, form, errors, edit),

        // Submission.
        (
            FunnelState::FillingForm {
                event,
                form,
                errors: _,
            },
            FunnelEvent::Submit,
        ) => {
            let validation: FieldErrors = validate_form(*event, form);
            if validation.is_empty() {
                Ok(FunnelState::Submitting {
                    event: *event,
                    form: form.clone(),
                })
            } else {
                Ok(FunnelState::FillingForm {
                    event: *event,
                    form: form.clone(),
                    errors: validation,
                })
            }
        }
        (FunnelState::Submitting { .. }, FunnelEvent::SubmitSucceeded) => {
            Ok(FunnelState::Submitted)
        }
        (FunnelState::Submitting { event, form }, FunnelEvent::SubmitFailed) => {
            // The failed insert leaves the form exactly as the user
            // filled it, ready for a manual retry.
            Ok(FunnelState::FillingForm {
                event: *event,
                form: form.clone(),
                errors: FieldErrors::new(),
            })
        }

        (state, event) => Err(FunnelError::InvalidTransition {
            stage: state.stage_name(),
            event: event.name(),
        }),
    }
}

/// Applies a single form edit, clearing only the edited field's prior
/// error.
fn apply_edit(
    event: Event,
    form: &FormData,
    errors: &FieldErrors,
    edit: FunnelEvent,
) -> Result<FunnelState, FunnelError> {
    let mut form: FormData = form.clone();
    let mut errors: FieldErrors = errors.clone();

    match (&mut form, edit) {
        (branch_form, FunnelEvent::SetField { field, value }) => {
            let handled: bool = match branch_form {
                FormData::NewVolunteer(branch) => branch.set_text_field(&field, value),
                FormData::ExistingMember(branch) => {
                    if field == "memberSearch" {
                        // A changed search email invalidates any prior
                        // roster match.
                        branch.search_email = value;
                        branch.matched = None;
                        true
                    } else {
                        false
                    }
                }
            };
            if !handled {
                return Err(FunnelError::UnknownField { field });
            }
            errors.remove(&field);
        }
        (FormData::NewVolunteer(branch), FunnelEvent::ToggleSkill(skill)) => {
            branch.toggle_skill(&skill);
            errors.remove("skills");
        }
        (FormData::NewVolunteer(branch), FunnelEvent::ToggleTeamPreference(preference)) => {
            branch.toggle_team_preference(preference);
            errors.remove("teamPreferences");
        }
        (FormData::NewVolunteer(branch), FunnelEvent::SetFieldOfInterest(field_of_interest)) => {
            branch.field_of_interest = Some(field_of_interest);
            errors.remove("fieldOfInterest");
        }
        (FormData::NewVolunteer(branch), FunnelEvent::SetEducationLevel(level)) => {
            branch.education_level = level;
        }
        (FormData::NewVolunteer(branch), FunnelEvent::SetCommittee(committee)) => {
            branch.committee = Some(committee);
            errors.remove("committee");
        }
        (FormData::ExistingMember(branch), FunnelEvent::SetCommittee(committee)) => {
            branch.committee = Some(committee);
            errors.remove("committee");
        }
        (FormData::ExistingMember(branch), FunnelEvent::MemberResolved(matched)) => {
            branch.matched = matched;
            errors.remove("memberSearch");
        }
        (form, edit) => {
            return Err(FunnelError::WrongBranch {
                event: edit.name(),
                volunteer_type: form.volunteer_type().as_str(),
            });
        }
    }

    Ok(FunnelState::FillingForm {
        event,
        form,
        errors,
    })
}
