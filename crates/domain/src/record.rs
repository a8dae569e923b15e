// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// One volunteer application, in its denormalized storage shape.
///
/// Enum-typed fields are stored as their codes so that rows written by
/// earlier revisions of the funnel (with codes this revision no longer
/// recognizes) still load; aggregation falls back to the raw code for
/// display.
///
/// Exactly one volunteer-type branch's fields are populated per record;
/// see [`ApplicationRecord::check_branch_invariant`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    /// Canonical identifier assigned by the database.
    /// `None` indicates the record has not been persisted yet.
    pub application_id: Option<i64>,
    /// The applicant's first name.
    pub first_name: String,
    /// The applicant's last name.
    pub last_name: String,
    /// The applicant's email address.
    pub email: String,
    /// The applicant's phone number (optional).
    pub phone: Option<String>,
    /// The event code (e.g. `devcon-geekup`).
    pub event: String,
    /// The volunteer-type code (`new-volunteer` or `existing-member`).
    pub volunteer_type: String,
    /// The committee code, scoped by the event.
    pub committee: String,
    /// New-volunteer branch: Facebook profile link.
    pub facebook_url: Option<String>,
    /// New-volunteer branch: school or organization.
    pub school_organization: Option<String>,
    /// New-volunteer branch: field-of-interest code.
    pub field_of_interest: Option<String>,
    /// New-volunteer branch: comma-joined team-preference codes.
    pub team_preferences: Option<String>,
    /// New-volunteer branch: education-level code.
    pub education_level: Option<String>,
    /// Comma-joined skill list; selected by new volunteers, copied from
    /// the matched member otherwise.
    pub skills: Option<String>,
    /// Existing-member branch: experience text copied from the member.
    pub experience: Option<String>,
    /// New-volunteer branch: free-text motivation.
    pub motivation: Option<String>,
    /// Creation timestamp assigned by the database (ISO 8601).
    pub created_at: Option<String>,
    /// Last-update timestamp assigned by the database (ISO 8601).
    pub updated_at: Option<String>,
}

impl ApplicationRecord {
    /// Checks that exactly one volunteer-type branch's fields are
    /// populated.
    ///
    /// For `new-volunteer` records the motivation, skills, and team
    /// preferences must be present and the member-sourced experience
    /// absent. For `existing-member` records every new-volunteer-only
    /// field must be absent.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::BranchInvariantViolation` when fields from
    /// the other branch are populated, or this branch's required fields
    /// are missing. Returns `DomainError::InvalidVolunteerType` for an
    /// unknown volunteer-type code.
    pub fn check_branch_invariant(&self) -> Result<(), DomainError> {
        let violation = |reason: &str| DomainError::BranchInvariantViolation {
            volunteer_type: self.volunteer_type.clone(),
            reason: reason.to_string(),
        };

        match self.volunteer_type.as_str() {
            "new-volunteer" => {
                if self.motivation.is_none() {
                    return Err(violation("motivation is required"));
                }
                if self.skills.is_none() {
                    return Err(violation("skills are required"));
                }
                if self.team_preferences.is_none() {
                    return Err(violation("team preferences are required"));
                }
                if self.experience.is_some() {
                    return Err(violation("experience belongs to the existing-member branch"));
                }
                Ok(())
            }
            "existing-member" => {
                if self.motivation.is_some()
                    || self.facebook_url.is_some()
                    || self.school_organization.is_some()
                    || self.field_of_interest.is_some()
                    || self.team_preferences.is_some()
                    || self.education_level.is_some()
                {
                    return Err(violation(
                        "new-volunteer-only fields must be empty for member applications",
                    ));
                }
                Ok(())
            }
            other => Err(DomainError::InvalidVolunteerType(other.to_string())),
        }
    }
}
