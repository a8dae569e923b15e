// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents an event a volunteer can apply to.
///
/// Events are fixed domain constants; the wire and storage representation
/// is the kebab-case code (e.g. `devcon-geekup`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Event {
    /// Monthly community meetup.
    DevconGeekup,
    /// School and university outreach caravan.
    CampusDevcon,
}

impl Event {
    /// All events, in display order.
    pub const ALL: &'static [Self] = &[Self::DevconGeekup, Self::CampusDevcon];

    /// Returns the storage code for this event.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DevconGeekup => "devcon-geekup",
            Self::CampusDevcon => "campus-devcon",
        }
    }

    /// Returns the human-readable name for this event.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::DevconGeekup => "DEVCON GeekUp",
            Self::CampusDevcon => "Campus DEVCON",
        }
    }
}

impl FromStr for Event {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "devcon-geekup" => Ok(Self::DevconGeekup),
            "campus-devcon" => Ok(Self::CampusDevcon),
            _ => Err(DomainError::InvalidEvent(s.to_string())),
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether an applicant is new to the organization or an existing
/// tracked member.
///
/// The volunteer type selects which branch of the application form is
/// rendered, validated, and persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VolunteerType {
    /// First-time applicant; all personal fields are collected.
    NewVolunteer,
    /// Known community member; personal fields are copied from the roster.
    ExistingMember,
}

impl VolunteerType {
    /// All volunteer types, in display order.
    pub const ALL: &'static [Self] = &[Self::NewVolunteer, Self::ExistingMember];

    /// Returns the storage code for this volunteer type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NewVolunteer => "new-volunteer",
            Self::ExistingMember => "existing-member",
        }
    }

    /// Returns the human-readable name for this volunteer type.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::NewVolunteer => "New Volunteer",
            Self::ExistingMember => "Existing Member",
        }
    }
}

impl FromStr for VolunteerType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new-volunteer" => Ok(Self::NewVolunteer),
            "existing-member" => Ok(Self::ExistingMember),
            _ => Err(DomainError::InvalidVolunteerType(s.to_string())),
        }
    }
}

impl std::fmt::Display for VolunteerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A sub-team an applicant requests to join.
///
/// Committees are scoped to events; `crate::committees_for_event` lists
/// the committees a given event offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Committee {
    Registration,
    Logistics,
    TechSupport,
    Photography,
    Networking,
    Content,
    Coordination,
    WorkshopAssist,
    StudentMentor,
    TechSetup,
    Documentation,
    Outreach,
    General,
}

impl Committee {
    /// Returns the storage code for this committee.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Registration => "registration",
            Self::Logistics => "logistics",
            Self::TechSupport => "tech-support",
            Self::Photography => "photography",
            Self::Networking => "networking",
            Self::Content => "content",
            Self::Coordination => "coordination",
            Self::WorkshopAssist => "workshop-assist",
            Self::StudentMentor => "student-mentor",
            Self::TechSetup => "tech-setup",
            Self::Documentation => "documentation",
            Self::Outreach => "outreach",
            Self::General => "general",
        }
    }

    /// Returns the human-readable name for this committee.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Registration => "Registration & Check-in",
            Self::Logistics => "Logistics & Setup",
            Self::TechSupport => "Technical Support",
            Self::Photography => "Photography & Media",
            Self::Networking => "Networking & Hospitality",
            Self::Content => "Content & Social Media",
            Self::Coordination => "School Coordination",
            Self::WorkshopAssist => "Workshop Assistant",
            Self::StudentMentor => "Student Mentoring",
            Self::TechSetup => "Technical Setup",
            Self::Documentation => "Documentation & Media",
            Self::Outreach => "Student Outreach",
            Self::General => "General Support",
        }
    }

    /// Checks whether this committee is offered by the given event.
    #[must_use]
    pub fn is_offered_for(&self, event: Event) -> bool {
        crate::catalog::committees_for_event(event).contains(self)
    }
}

impl FromStr for Committee {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "registration" => Ok(Self::Registration),
            "logistics" => Ok(Self::Logistics),
            "tech-support" => Ok(Self::TechSupport),
            "photography" => Ok(Self::Photography),
            "networking" => Ok(Self::Networking),
            "content" => Ok(Self::Content),
            "coordination" => Ok(Self::Coordination),
            "workshop-assist" => Ok(Self::WorkshopAssist),
            "student-mentor" => Ok(Self::StudentMentor),
            "tech-setup" => Ok(Self::TechSetup),
            "documentation" => Ok(Self::Documentation),
            "outreach" => Ok(Self::Outreach),
            "general" => Ok(Self::General),
            _ => Err(DomainError::InvalidCommittee(s.to_string())),
        }
    }
}

impl std::fmt::Display for Committee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Self-reported education level, collected from new volunteers only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "high-school")]
    HighSchool,
    #[serde(rename = "1st-year")]
    FirstYear,
    #[serde(rename = "2nd-year")]
    SecondYear,
    #[serde(rename = "3rd-year")]
    ThirdYear,
    #[serde(rename = "4th-year")]
    FourthYear,
    #[serde(rename = "graduate")]
    Graduate,
    #[serde(rename = "masters")]
    Masters,
    #[serde(rename = "professional")]
    Professional,
}

impl EducationLevel {
    /// All education levels, in display order.
    pub const ALL: &'static [Self] = &[
        Self::HighSchool,
        Self::FirstYear,
        Self::SecondYear,
        Self::ThirdYear,
        Self::FourthYear,
        Self::Graduate,
        Self::Masters,
        Self::Professional,
    ];

    /// Returns the storage code for this education level.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HighSchool => "high-school",
            Self::FirstYear => "1st-year",
            Self::SecondYear => "2nd-year",
            Self::ThirdYear => "3rd-year",
            Self::FourthYear => "4th-year",
            Self::Graduate => "graduate",
            Self::Masters => "masters",
            Self::Professional => "professional",
        }
    }

    /// Returns the human-readable name for this education level.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::HighSchool => "High School",
            Self::FirstYear => "1st Year College",
            Self::SecondYear => "2nd Year College",
            Self::ThirdYear => "3rd Year College",
            Self::FourthYear => "4th Year College",
            Self::Graduate => "College Graduate",
            Self::Masters => "Master's Degree",
            Self::Professional => "Professional/Working",
        }
    }
}

impl FromStr for EducationLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|level| level.as_str() == s)
            .copied()
            .ok_or_else(|| DomainError::InvalidEducationLevel(s.to_string()))
    }
}

/// Self-reported field of interest, collected from new volunteers only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldOfInterest {
    WebDevelopment,
    MobileDevelopment,
    DataScience,
    ArtificialIntelligence,
    Cybersecurity,
    CloudComputing,
    GameDevelopment,
    ProductDesign,
}

impl FieldOfInterest {
    /// All fields of interest, in display order.
    pub const ALL: &'static [Self] = &[
        Self::WebDevelopment,
        Self::MobileDevelopment,
        Self::DataScience,
        Self::ArtificialIntelligence,
        Self::Cybersecurity,
        Self::CloudComputing,
        Self::GameDevelopment,
        Self::ProductDesign,
    ];

    /// Returns the storage code for this field of interest.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WebDevelopment => "web-development",
            Self::MobileDevelopment => "mobile-development",
            Self::DataScience => "data-science",
            Self::ArtificialIntelligence => "artificial-intelligence",
            Self::Cybersecurity => "cybersecurity",
            Self::CloudComputing => "cloud-computing",
            Self::GameDevelopment => "game-development",
            Self::ProductDesign => "product-design",
        }
    }

    /// Returns the human-readable name for this field of interest.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::WebDevelopment => "Web Development",
            Self::MobileDevelopment => "Mobile Development",
            Self::DataScience => "Data Science",
            Self::ArtificialIntelligence => "Artificial Intelligence",
            Self::Cybersecurity => "Cybersecurity",
            Self::CloudComputing => "Cloud Computing",
            Self::GameDevelopment => "Game Development",
            Self::ProductDesign => "Product Design",
        }
    }
}

impl FromStr for FieldOfInterest {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|field| field.as_str() == s)
            .copied()
            .ok_or_else(|| DomainError::InvalidFieldOfInterest(s.to_string()))
    }
}

/// A team a new volunteer would prefer to work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TeamPreference {
    Programs,
    Creatives,
    Partnerships,
    Communications,
    Operations,
}

impl TeamPreference {
    /// All team preferences, in display order.
    pub const ALL: &'static [Self] = &[
        Self::Programs,
        Self::Creatives,
        Self::Partnerships,
        Self::Communications,
        Self::Operations,
    ];

    /// Returns the storage code for this team preference.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Programs => "programs",
            Self::Creatives => "creatives",
            Self::Partnerships => "partnerships",
            Self::Communications => "communications",
            Self::Operations => "operations",
        }
    }

    /// Returns the human-readable name for this team preference.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Programs => "Programs",
            Self::Creatives => "Creatives",
            Self::Partnerships => "Partnerships",
            Self::Communications => "Communications",
            Self::Operations => "Operations",
        }
    }
}

impl FromStr for TeamPreference {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|pref| pref.as_str() == s)
            .copied()
            .ok_or_else(|| DomainError::InvalidTeamPreference(s.to_string()))
    }
}

/// A pre-existing community roster entry.
///
/// Members are managed outside the funnel's write path; the funnel only
/// reads them, keyed by exact email match. Email is unique within the
/// collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Canonical identifier assigned by the database.
    /// `None` indicates the member has not been persisted yet.
    pub member_id: Option<i64>,
    /// The member's first name.
    pub first_name: String,
    /// The member's last name.
    pub last_name: String,
    /// The member's email (sole lookup key, unique).
    pub email: String,
    /// The member's phone number (optional).
    pub phone: Option<String>,
    /// Free-text experience or education notes (optional).
    pub experience: Option<String>,
    /// Comma-joined skill list (optional).
    pub skills: Option<String>,
    /// Creation timestamp assigned by the database (ISO 8601).
    pub created_at: Option<String>,
}

impl Member {
    /// Creates a new `Member` without a persisted `member_id`.
    #[must_use]
    pub const fn new(
        first_name: String,
        last_name: String,
        email: String,
        phone: Option<String>,
        experience: Option<String>,
        skills: Option<String>,
    ) -> Self {
        Self {
            member_id: None,
            first_name,
            last_name,
            email,
            phone,
            experience,
            skills,
            created_at: None,
        }
    }
}

/// Splits comma-joined skill text into trimmed, non-empty tokens.
///
/// Empty or missing skill text yields zero tokens; malformed input never
/// fails.
#[must_use]
pub fn split_skills(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Joins skill tokens into the comma-joined storage representation.
#[must_use]
pub fn join_skills(skills: &[String]) -> String {
    skills.join(", ")
}
