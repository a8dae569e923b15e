// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{ApiError, translate_domain_error, translate_funnel_error};
use crate::request_response::{FormOptions, FunnelPlanResponse, OptionItem};
use devcon_hub::{FunnelEvent, FunnelState, apply, field_plan};
use devcon_hub_domain::{
    AVAILABLE_SKILLS, EducationLevel, Event, FieldOfInterest, TeamPreference, VolunteerType,
    committees_for_event,
};
use std::str::FromStr;

/// Reconstructs the funnel stage from route parameters and returns its
/// conditional field plan.
///
/// The `event` and `type` query parameters drive the same transitions a
/// browser navigation would: no parameters yields the event-selection
/// plan, `event` alone the type-selection plan, and both the form plan
/// for the chosen branch. Option catalogs are included once an event is
/// chosen, with committees scoped to it.
///
/// # Errors
///
/// Returns an error if a code does not parse, or `type` is supplied
/// without `event`.
pub fn funnel_plan(
    event_code: Option<&str>,
    type_code: Option<&str>,
) -> Result<FunnelPlanResponse, ApiError> {
    let mut state: FunnelState = FunnelState::start();
    let mut chosen_event: Option<Event> = None;

    if let Some(code) = event_code {
        let event: Event = Event::from_str(code).map_err(translate_domain_error)?;
        state = apply(&state, FunnelEvent::SelectEvent(event)).map_err(translate_funnel_error)?;
        chosen_event = Some(event);
    }

    if let Some(code) = type_code {
        let volunteer_type: VolunteerType =
            VolunteerType::from_str(code).map_err(translate_domain_error)?;
        state = apply(&state, FunnelEvent::SelectVolunteerType(volunteer_type))
            .map_err(translate_funnel_error)?;
    }

    Ok(FunnelPlanResponse {
        plan: field_plan(&state),
        options: chosen_event.map(form_options),
    })
}

fn form_options(event: Event) -> FormOptions {
    FormOptions {
        committees: committees_for_event(event)
            .iter()
            .map(|committee| OptionItem {
                value: committee.as_str().to_string(),
                label: committee.display_name().to_string(),
            })
            .collect(),
        skills: AVAILABLE_SKILLS.iter().map(ToString::to_string).collect(),
        education_levels: EducationLevel::ALL
            .iter()
            .map(|level| OptionItem {
                value: level.as_str().to_string(),
                label: level.display_name().to_string(),
            })
            .collect(),
        fields_of_interest: FieldOfInterest::ALL
            .iter()
            .map(|field| OptionItem {
                value: field.as_str().to_string(),
                label: field.display_name().to_string(),
            })
            .collect(),
        team_preferences: TeamPreference::ALL
            .iter()
            .map(|preference| OptionItem {
                value: preference.as_str().to_string(),
                label: preference.display_name().to_string(),
            })
            .collect(),
    }
}
