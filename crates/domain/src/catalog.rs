// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fixed domain catalogs: events, committees per event, the skills list,
//! and the skill-category buckets.
//!
//! The bucket membership lists are the single source of truth for every
//! aggregation view; they must not be duplicated elsewhere.

use crate::types::{Committee, Event, VolunteerType};
use serde::Serialize;
use std::str::FromStr;

/// The skills offered to new volunteers on the application form.
pub const AVAILABLE_SKILLS: &[&str] = &[
    "JavaScript",
    "Python",
    "Java",
    "C++",
    "React",
    "Node.js",
    "PHP",
    "HTML/CSS",
    "UI/UX Design",
    "Graphic Design",
    "Project Management",
    "Event Planning",
    "Public Speaking",
    "Content Writing",
    "Social Media Management",
    "Photography",
    "Video Editing",
    "Marketing",
    "Data Analysis",
    "Database Management",
    "Mobile Development",
    "Web Development",
    "DevOps",
    "Cybersecurity",
    "Other",
];

/// Committees offered by the monthly meetup.
const GEEKUP_COMMITTEES: &[Committee] = &[
    Committee::Registration,
    Committee::Logistics,
    Committee::TechSupport,
    Committee::Photography,
    Committee::Networking,
    Committee::Content,
    Committee::General,
];

/// Committees offered by the campus caravan.
const CAMPUS_COMMITTEES: &[Committee] = &[
    Committee::Coordination,
    Committee::WorkshopAssist,
    Committee::StudentMentor,
    Committee::TechSetup,
    Committee::Documentation,
    Committee::Outreach,
    Committee::General,
];

/// Returns the committees offered by the given event.
#[must_use]
pub const fn committees_for_event(event: Event) -> &'static [Committee] {
    match event {
        Event::DevconGeekup => GEEKUP_COMMITTEES,
        Event::CampusDevcon => CAMPUS_COMMITTEES,
    }
}

/// A fixed analytics category grouping related skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillBucket {
    ProgrammingDevelopment,
    EmergingTechnologies,
    DesignMedia,
}

impl SkillBucket {
    /// All buckets, in display order.
    pub const ALL: &'static [Self] = &[
        Self::ProgrammingDevelopment,
        Self::EmergingTechnologies,
        Self::DesignMedia,
    ];

    /// Returns the human-readable name for this bucket.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::ProgrammingDevelopment => "Programming & Development",
            Self::EmergingTechnologies => "Emerging Technologies",
            Self::DesignMedia => "Design & Media",
        }
    }

    /// Returns the skills belonging to this bucket.
    #[must_use]
    pub const fn members(&self) -> &'static [&'static str] {
        match self {
            Self::ProgrammingDevelopment => &[
                "JavaScript",
                "Python",
                "Java",
                "C++",
                "React",
                "Node.js",
                "PHP",
                "HTML/CSS",
                "Web Development",
                "Mobile Development",
                "DevOps",
            ],
            Self::EmergingTechnologies => &[
                "Artificial Intelligence (AI)",
                "Machine Learning",
                "IoT (Internet of Things)",
                "Blockchain",
                "Cloud Computing",
                "AR/VR Development",
                "Robotics",
                "Data Science",
                "Big Data",
                "Edge Computing",
            ],
            Self::DesignMedia => &[
                "UI/UX Design",
                "Graphic Design",
                "Photography",
                "Video Editing",
            ],
        }
    }
}

/// Returns the bucket a skill belongs to, if any.
///
/// Skills outside every bucket (e.g. "Event Planning") are uncategorized
/// and simply do not contribute to bucket totals.
#[must_use]
pub fn bucket_for_skill(skill: &str) -> Option<SkillBucket> {
    SkillBucket::ALL
        .iter()
        .find(|bucket| bucket.members().contains(&skill))
        .copied()
}

/// Display metadata for an event, as shown on the selection page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventInfo {
    /// The event this metadata describes.
    pub event: Event,
    /// The human-readable event name.
    pub display_name: &'static str,
    /// One-line description.
    pub blurb: &'static str,
    /// Scheduled date.
    pub date: &'static str,
    /// Scheduled time window.
    pub time: &'static str,
    /// Venue.
    pub venue: &'static str,
}

/// Returns the event catalog with display metadata, in display order.
#[must_use]
pub const fn event_catalog() -> &'static [EventInfo] {
    &[
        EventInfo {
            event: Event::DevconGeekup,
            display_name: "DEVCON GeekUp",
            blurb: "Monthly community meetups bringing together developers, \
                    designers, and tech enthusiasts.",
            date: "March 15, 2024",
            time: "6:00 PM - 9:00 PM",
            venue: "Iligan City Convention Center",
        },
        EventInfo {
            event: Event::CampusDevcon,
            display_name: "Campus DEVCON",
            blurb: "Bringing tech education to schools and universities \
                    across the Philippines.",
            date: "March 20-22, 2024",
            time: "9:00 AM - 5:00 PM",
            venue: "Various Universities",
        },
    ]
}

/// Maps an event code to its display name, falling back to the raw code
/// for unknown values.
#[must_use]
pub fn event_label(code: &str) -> String {
    Event::from_str(code).map_or_else(|_| code.to_string(), |event| event.display_name().to_string())
}

/// Maps a committee code to its display name, falling back to the raw
/// code for unknown values.
#[must_use]
pub fn committee_label(code: &str) -> String {
    Committee::from_str(code)
        .map_or_else(|_| code.to_string(), |committee| committee.display_name().to_string())
}

/// Maps a volunteer-type code to its analytics group label, falling back
/// to the raw code for unknown values.
#[must_use]
pub fn volunteer_type_label(code: &str) -> String {
    match VolunteerType::from_str(code) {
        Ok(VolunteerType::NewVolunteer) => String::from("New Volunteers"),
        Ok(VolunteerType::ExistingMember) => String::from("Existing Members"),
        Err(_) => code.to_string(),
    }
}
