// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire DTOs for the HTTP surface.
//!
//! These are distinct from domain types and represent the API contract;
//! enum-typed domain fields travel as their codes and are parsed at the
//! boundary.

use devcon_hub::FieldPlan;
use devcon_hub_analytics::{BucketTotal, CountEntry, SkillCount};
use devcon_hub_domain::{ApplicationRecord, FieldErrors, Member};
use serde::{Deserialize, Serialize};

/// A volunteer-application submission, tagged by volunteer type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "volunteer_type")]
pub enum SubmitApplicationRequest {
    /// First-time applicant branch: every personal field is collected.
    #[serde(rename = "new-volunteer")]
    NewVolunteer {
        /// The event code.
        event: String,
        /// The applicant's first name.
        first_name: String,
        /// The applicant's last name.
        last_name: String,
        /// The applicant's email address.
        email: String,
        /// The applicant's phone number (optional).
        #[serde(default)]
        phone: Option<String>,
        /// Link to the applicant's Facebook profile.
        facebook_url: String,
        /// The applicant's school or organization.
        school_organization: String,
        /// The field-of-interest code.
        field_of_interest: String,
        /// The committee code.
        committee: String,
        /// Selected skills.
        skills: Vec<String>,
        /// Team-preference codes.
        team_preferences: Vec<String>,
        /// The education-level code (optional).
        #[serde(default)]
        education_level: Option<String>,
        /// Free-text motivation.
        motivation: String,
    },
    /// Existing-member branch: personal fields come from the roster.
    #[serde(rename = "existing-member")]
    ExistingMember {
        /// The event code.
        event: String,
        /// The membership email to look up.
        member_email: String,
        /// The committee code.
        committee: String,
    },
}

impl SubmitApplicationRequest {
    /// Returns the event code of the submission.
    #[must_use]
    pub fn event_code(&self) -> &str {
        match self {
            Self::NewVolunteer { event, .. } | Self::ExistingMember { event, .. } => event,
        }
    }
}

/// Response for a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitApplicationResponse {
    /// Success indicator.
    pub success: bool,
    /// The id assigned to the persisted application.
    pub application_id: i64,
    /// The terminal funnel stage (`Submitted`).
    pub stage: String,
    /// A confirmation message.
    pub message: String,
}

/// A member, as exposed to the funnel and the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSummary {
    /// The member's id.
    pub member_id: Option<i64>,
    /// The member's first name.
    pub first_name: String,
    /// The member's last name.
    pub last_name: String,
    /// The member's email.
    pub email: String,
    /// The member's phone number (optional).
    pub phone: Option<String>,
    /// Free-text experience notes (optional).
    pub experience: Option<String>,
    /// Comma-joined skill list (optional).
    pub skills: Option<String>,
    /// Creation timestamp (ISO 8601).
    pub created_at: Option<String>,
}

impl From<Member> for MemberSummary {
    fn from(member: Member) -> Self {
        Self {
            member_id: member.member_id,
            first_name: member.first_name,
            last_name: member.last_name,
            email: member.email,
            phone: member.phone,
            experience: member.experience,
            skills: member.skills,
            created_at: member.created_at,
        }
    }
}

/// Response for a member lookup.
///
/// Zero matches are a normal outcome (`found: false`), distinct from a
/// backend failure, which surfaces as an error response instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberLookupResponse {
    /// Whether a member matched the email.
    pub found: bool,
    /// The matched member, if any.
    pub member: Option<MemberSummary>,
}

/// One selectable option of a form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    /// The code submitted back to the API.
    pub value: String,
    /// The human-readable label.
    pub label: String,
}

/// The option catalogs the dynamic form renders from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormOptions {
    /// Committees offered by the chosen event.
    pub committees: Vec<OptionItem>,
    /// The skills multi-select.
    pub skills: Vec<String>,
    /// Education levels.
    pub education_levels: Vec<OptionItem>,
    /// Fields of interest.
    pub fields_of_interest: Vec<OptionItem>,
    /// Team preferences.
    pub team_preferences: Vec<OptionItem>,
}

/// Response for the funnel plan endpoint: the reconstructed stage, its
/// field plan, and the option catalogs the form needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunnelPlanResponse {
    /// The conditional field plan for the reconstructed stage.
    pub plan: FieldPlan,
    /// Option catalogs, present once an event is chosen.
    pub options: Option<FormOptions>,
}

/// One collection of the dashboard bulk fetch, reported independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionFetch<T> {
    /// The fetched rows, absent when the fetch failed.
    pub data: Option<Vec<T>>,
    /// The failure message, absent when the fetch succeeded.
    pub error: Option<String>,
}

/// The dashboard stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Total applications fetched.
    pub total_applications: usize,
    /// Total members fetched.
    pub total_members: usize,
    /// Applications for the monthly meetup.
    pub geekup_applications: usize,
}

/// Response for the admin dashboard bulk fetch.
///
/// The two reads are independent: a failure in either is reported on
/// that side without blocking display of the other's data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardResponse {
    /// Stat cards computed over whatever data loaded.
    pub stats: DashboardStats,
    /// The applications fetch.
    pub applications: CollectionFetch<ApplicationRecord>,
    /// The members fetch.
    pub members: CollectionFetch<MemberSummary>,
}

/// Response for the admin analytics view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsResponse {
    /// Top skills across applications and members combined.
    pub top_skills: Vec<SkillCount>,
    /// Category bucket totals over the top skills.
    pub skill_buckets: Vec<BucketTotal>,
    /// Applications per committee, descending.
    pub committee_distribution: Vec<CountEntry>,
    /// Applications per event.
    pub event_stats: Vec<CountEntry>,
    /// Applications per volunteer type.
    pub volunteer_type_stats: Vec<CountEntry>,
}

/// Error body shared by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error indicator.
    pub error: bool,
    /// Error message.
    pub message: String,
    /// Field-scoped validation errors, when the failure is a validation
    /// failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}
