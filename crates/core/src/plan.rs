// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::FunnelState;
use devcon_hub_domain::{FormData, VolunteerType};
use serde::Serialize;

/// A single field of the dynamic form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// The form field name.
    pub name: &'static str,
    /// Whether the field must be filled before submission.
    pub required: bool,
}

impl FieldSpec {
    const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
        }
    }

    const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
        }
    }
}

/// The fields to render for the current funnel state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldPlan {
    /// The funnel stage this plan belongs to.
    pub stage: &'static str,
    /// The active volunteer-type branch, once one is chosen.
    pub volunteer_type: Option<VolunteerType>,
    /// The visible fields, in render order.
    pub fields: Vec<FieldSpec>,
}

/// Every field of the new-volunteer branch, in render order.
const NEW_VOLUNTEER_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("firstName"),
    FieldSpec::required("lastName"),
    FieldSpec::required("email"),
    FieldSpec::optional("phone"),
    FieldSpec::required("facebookUrl"),
    FieldSpec::required("schoolOrganization"),
    FieldSpec::required("fieldOfInterest"),
    FieldSpec::required("committee"),
    FieldSpec::required("skills"),
    FieldSpec::required("teamPreferences"),
    FieldSpec::optional("educationLevel"),
    FieldSpec::required("motivation"),
];

/// Derives the conditional field plan from the funnel state.
///
/// The existing-member branch renders only the email search box until a
/// roster match is resolved, then only the committee selection; the
/// member's personal fields are sourced from the match and never shown.
#[must_use]
pub fn field_plan(state: &FunnelState) -> FieldPlan {
    match state {
        FunnelState::SelectingEvent => FieldPlan {
            stage: state.stage_name(),
            volunteer_type: None,
            fields: vec![FieldSpec::required("event")],
        },
        FunnelState::SelectingVolunteerType { .. } => FieldPlan {
            stage: state.stage_name(),
            volunteer_type: None,
            fields: vec![FieldSpec::required("volunteerType")],
        },
        FunnelState::FillingForm { form, .. } => FieldPlan {
            stage: state.stage_name(),
            volunteer_type: Some(form.volunteer_type()),
            fields: branch_fields(form),
        },
        FunnelState::Submitting { form, .. } => FieldPlan {
            stage: state.stage_name(),
            volunteer_type: Some(form.volunteer_type()),
            fields: Vec::new(),
        },
        FunnelState::Submitted => FieldPlan {
            stage: state.stage_name(),
            volunteer_type: None,
            fields: Vec::new(),
        },
    }
}

fn branch_fields(form: &FormData) -> Vec<FieldSpec> {
    match form {
        FormData::NewVolunteer(_) => NEW_VOLUNTEER_FIELDS.to_vec(),
        FormData::ExistingMember(branch) => {
            if branch.matched.is_some() {
                vec![FieldSpec::required("committee")]
            } else {
                vec![FieldSpec::required("memberSearch")]
            }
        }
    }
}
