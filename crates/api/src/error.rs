// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use devcon_hub::FunnelError;
use devcon_hub_domain::{DomainError, FieldErrors};

/// API-level errors.
///
/// These are distinct from domain/funnel errors and represent the API
/// contract; translation is explicit so inner errors are never leaked
/// directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The form failed field validation; nothing was persisted.
    ValidationFailed {
        /// Field-scoped error messages.
        errors: FieldErrors,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A backend operation failed; the caller's state is unchanged and
    /// the operation may be retried manually.
    Backend {
        /// The operation that failed.
        operation: String,
        /// A description of the failure.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ValidationFailed { errors } => {
                write!(f, "Validation failed for {} field(s)", errors.len())
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Backend { operation, message } => {
                write!(f, "Backend failure during {operation}: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidEvent(code) => ApiError::InvalidInput {
            field: String::from("event"),
            message: format!("Unknown event: {code}"),
        },
        DomainError::InvalidVolunteerType(code) => ApiError::InvalidInput {
            field: String::from("volunteer_type"),
            message: format!("Unknown volunteer type: {code}"),
        },
        DomainError::InvalidCommittee(code) => ApiError::InvalidInput {
            field: String::from("committee"),
            message: format!("Unknown committee: {code}"),
        },
        DomainError::CommitteeNotOffered { event, committee } => ApiError::DomainRuleViolation {
            rule: String::from("committee_scoped_by_event"),
            message: format!("Committee '{committee}' is not offered by event '{event}'"),
        },
        DomainError::InvalidEducationLevel(code) => ApiError::InvalidInput {
            field: String::from("education_level"),
            message: format!("Unknown education level: {code}"),
        },
        DomainError::InvalidFieldOfInterest(code) => ApiError::InvalidInput {
            field: String::from("field_of_interest"),
            message: format!("Unknown field of interest: {code}"),
        },
        DomainError::InvalidTeamPreference(code) => ApiError::InvalidInput {
            field: String::from("team_preferences"),
            message: format!("Unknown team preference: {code}"),
        },
        DomainError::InvalidEmail(email) => ApiError::InvalidInput {
            field: String::from("email"),
            message: format!("Invalid email address: {email}"),
        },
        DomainError::MissingMemberMatch => ApiError::DomainRuleViolation {
            rule: String::from("member_match_required"),
            message: String::from("No community member has been matched for this application"),
        },
        DomainError::BranchInvariantViolation {
            volunteer_type,
            reason,
        } => ApiError::DomainRuleViolation {
            rule: String::from("one_branch_per_application"),
            message: format!("'{volunteer_type}' application: {reason}"),
        },
    }
}

/// Translates a funnel error into an API error.
#[must_use]
pub fn translate_funnel_error(err: FunnelError) -> ApiError {
    match err {
        FunnelError::InvalidTransition { stage, event } => ApiError::DomainRuleViolation {
            rule: String::from("funnel_transition"),
            message: format!("Event '{event}' is not valid in the '{stage}' stage"),
        },
        FunnelError::UnknownField { field } => ApiError::InvalidInput {
            field,
            message: String::from("Unknown form field"),
        },
        FunnelError::WrongBranch {
            event,
            volunteer_type,
        } => ApiError::DomainRuleViolation {
            rule: String::from("branch_scoped_edit"),
            message: format!("Event '{event}' does not apply to the '{volunteer_type}' branch"),
        },
        FunnelError::IncompleteForm { field } => ApiError::InvalidInput {
            field: field.to_string(),
            message: String::from("Missing a required selection"),
        },
        FunnelError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}
