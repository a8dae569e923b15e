// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Event code is not recognized.
    InvalidEvent(String),
    /// Volunteer-type code is not recognized.
    InvalidVolunteerType(String),
    /// Committee code is not recognized.
    InvalidCommittee(String),
    /// Committee is not offered by the chosen event.
    CommitteeNotOffered {
        /// The event code.
        event: String,
        /// The committee code.
        committee: String,
    },
    /// Education-level code is not recognized.
    InvalidEducationLevel(String),
    /// Field-of-interest code is not recognized.
    InvalidFieldOfInterest(String),
    /// Team-preference code is not recognized.
    InvalidTeamPreference(String),
    /// Email does not match the `local@domain.tld` shape.
    InvalidEmail(String),
    /// An existing-member submission was attempted without a resolved
    /// roster match.
    MissingMemberMatch,
    /// An application record mixes fields from both volunteer-type
    /// branches, or is missing its own branch's required fields.
    BranchInvariantViolation {
        /// The volunteer-type code of the record.
        volunteer_type: String,
        /// Description of the violation.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEvent(code) => write!(f, "Unknown event: {code}"),
            Self::InvalidVolunteerType(code) => write!(f, "Unknown volunteer type: {code}"),
            Self::InvalidCommittee(code) => write!(f, "Unknown committee: {code}"),
            Self::CommitteeNotOffered { event, committee } => {
                write!(f, "Committee '{committee}' is not offered by event '{event}'")
            }
            Self::InvalidEducationLevel(code) => write!(f, "Unknown education level: {code}"),
            Self::InvalidFieldOfInterest(code) => write!(f, "Unknown field of interest: {code}"),
            Self::InvalidTeamPreference(code) => write!(f, "Unknown team preference: {code}"),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {email}"),
            Self::MissingMemberMatch => {
                write!(f, "No community member has been matched for this application")
            }
            Self::BranchInvariantViolation {
                volunteer_type,
                reason,
            } => {
                write!(
                    f,
                    "Application violates the '{volunteer_type}' branch invariant: {reason}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
