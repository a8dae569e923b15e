// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Admin aggregation over already-fetched rows.
//!
//! Everything here is pure and synchronous: the caller fetches the
//! applications and members once, and every view is computed in memory.
//! Aggregation never fails on malformed data; empty skill text yields
//! zero tokens, and unknown event or committee codes fall back to the
//! raw code for display.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod export;

pub use export::{ExportError, write_csv};

use devcon_hub_domain::{
    ApplicationRecord, Member, SkillBucket, committee_label, event_label, split_skills,
    volunteer_type_label,
};
use serde::Serialize;
use std::collections::HashMap;

/// Skill-frequency views report at most this many skills.
pub const TOP_SKILLS_LIMIT: usize = 15;

/// One skill with its occurrence count across applications and members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCount {
    /// The skill token, as written in the source rows.
    pub skill: String,
    /// Number of rows mentioning the skill.
    pub count: usize,
}

/// One labeled group with its row count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountEntry {
    /// The mapped display label, or the raw code when unknown.
    pub label: String,
    /// Number of rows in the group.
    pub count: usize,
}

/// One skill-category bucket with its summed count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketTotal {
    /// The bucket's display name.
    pub label: &'static str,
    /// Sum of the counts of the top skills belonging to this bucket.
    pub total: usize,
}

/// A row of the skills-analysis export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillExportRow {
    /// The skill token.
    pub skill: String,
    /// Number of rows mentioning the skill.
    pub count: usize,
    /// Share of all applications and members, formatted `12.5%`.
    pub percentage: String,
}

/// A row of the committee-distribution export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitteeExportRow {
    /// The committee display label.
    pub committee: String,
    /// Number of applications for the committee.
    pub count: usize,
    /// Share of all applications, formatted `12.5%`.
    pub percentage: String,
}

/// Accumulates counts while preserving first-encountered key order, so
/// that equal counts sort deterministically.
struct OrderedCounter {
    positions: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl OrderedCounter {
    fn new() -> Self {
        Self {
            positions: HashMap::new(),
            entries: Vec::new(),
        }
    }

    fn bump(&mut self, key: String) {
        if let Some(&position) = self.positions.get(&key) {
            self.entries[position].1 += 1;
        } else {
            self.positions.insert(key.clone(), self.entries.len());
            self.entries.push((key, 1));
        }
    }

    /// Entries sorted by descending count; ties keep insertion order
    /// (the sort is stable).
    fn sorted_descending(mut self) -> Vec<(String, usize)> {
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        self.entries
    }

    /// Entries in first-encountered order.
    fn in_order(self) -> Vec<(String, usize)> {
        self.entries
    }
}

/// Counts skill occurrences across applications and members combined.
///
/// Each row's comma-joined skill text is split into trimmed tokens;
/// missing or empty text contributes nothing. The result is sorted by
/// descending count, ties in first-encountered order (applications
/// before members, each in fetch order), truncated to
/// [`TOP_SKILLS_LIMIT`] entries.
#[must_use]
pub fn skill_frequency(applications: &[ApplicationRecord], members: &[Member]) -> Vec<SkillCount> {
    let mut counter: OrderedCounter = OrderedCounter::new();

    let application_skills = applications.iter().filter_map(|app| app.skills.as_deref());
    let member_skills = members.iter().filter_map(|member| member.skills.as_deref());

    for text in application_skills.chain(member_skills) {
        for token in split_skills(text) {
            counter.bump(token);
        }
    }

    counter
        .sorted_descending()
        .into_iter()
        .take(TOP_SKILLS_LIMIT)
        .map(|(skill, count)| SkillCount { skill, count })
        .collect()
}

/// Counts applications per committee, keyed by display label and sorted
/// by descending count.
///
/// Rows with an empty committee code are skipped; unknown codes are
/// displayed raw.
#[must_use]
pub fn committee_distribution(applications: &[ApplicationRecord]) -> Vec<CountEntry> {
    let mut counter: OrderedCounter = OrderedCounter::new();

    for application in applications {
        if application.committee.is_empty() {
            continue;
        }
        counter.bump(committee_label(&application.committee));
    }

    counter
        .sorted_descending()
        .into_iter()
        .map(|(label, count)| CountEntry { label, count })
        .collect()
}

/// Counts applications per event, keyed by display label.
#[must_use]
pub fn event_stats(applications: &[ApplicationRecord]) -> Vec<CountEntry> {
    let mut counter: OrderedCounter = OrderedCounter::new();

    for application in applications {
        counter.bump(event_label(&application.event));
    }

    counter
        .in_order()
        .into_iter()
        .map(|(label, count)| CountEntry { label, count })
        .collect()
}

/// Counts applications per volunteer type, keyed by group label.
#[must_use]
pub fn volunteer_type_stats(applications: &[ApplicationRecord]) -> Vec<CountEntry> {
    let mut counter: OrderedCounter = OrderedCounter::new();

    for application in applications {
        counter.bump(volunteer_type_label(&application.volunteer_type));
    }

    counter
        .in_order()
        .into_iter()
        .map(|(label, count)| CountEntry { label, count })
        .collect()
}

/// Partitions a skill-frequency result into the fixed category buckets,
/// summing counts per bucket.
///
/// Membership comes from the centralized catalog mapping; skills outside
/// every bucket are ignored.
#[must_use]
pub fn bucket_totals(skill_counts: &[SkillCount]) -> Vec<BucketTotal> {
    SkillBucket::ALL
        .iter()
        .map(|bucket| BucketTotal {
            label: bucket.display_name(),
            total: skill_counts
                .iter()
                .filter(|entry| {
                    devcon_hub_domain::bucket_for_skill(&entry.skill) == Some(*bucket)
                })
                .map(|entry| entry.count)
                .sum(),
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn percentage_of(count: usize, total: usize) -> String {
    if total == 0 {
        return String::from("0.0%");
    }
    format!("{:.1}%", count as f64 / total as f64 * 100.0)
}

/// Builds the skills-analysis export rows: top skills with counts and
/// their share of all applications and members combined.
#[must_use]
pub fn skills_export_rows(
    applications: &[ApplicationRecord],
    members: &[Member],
) -> Vec<SkillExportRow> {
    let total: usize = applications.len() + members.len();

    skill_frequency(applications, members)
        .into_iter()
        .map(|entry| SkillExportRow {
            percentage: percentage_of(entry.count, total),
            skill: entry.skill,
            count: entry.count,
        })
        .collect()
}

/// Builds the committee-distribution export rows with each committee's
/// share of all applications.
#[must_use]
pub fn committee_export_rows(applications: &[ApplicationRecord]) -> Vec<CommitteeExportRow> {
    let total: usize = applications.len();

    committee_distribution(applications)
        .into_iter()
        .map(|entry| CommitteeExportRow {
            percentage: percentage_of(entry.count, total),
            committee: entry.label,
            count: entry.count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use devcon_hub_domain::Member;

    fn application(event: &str, volunteer_type: &str, committee: &str, skills: Option<&str>) -> ApplicationRecord {
        ApplicationRecord {
            application_id: None,
            first_name: String::from("Test"),
            last_name: String::from("Applicant"),
            email: String::from("test@example.com"),
            phone: None,
            event: event.to_string(),
            volunteer_type: volunteer_type.to_string(),
            committee: committee.to_string(),
            facebook_url: None,
            school_organization: None,
            field_of_interest: None,
            team_preferences: None,
            education_level: None,
            skills: skills.map(ToString::to_string),
            experience: None,
            motivation: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn member(skills: Option<&str>) -> Member {
        Member::new(
            String::from("Roster"),
            String::from("Member"),
            String::from("roster@example.com"),
            None,
            None,
            skills.map(ToString::to_string),
        )
    }

    #[test]
    fn test_skill_frequency_counts_across_both_collections() {
        let applications: Vec<ApplicationRecord> = vec![
            application("devcon-geekup", "new-volunteer", "registration", Some("Python, React")),
            application("devcon-geekup", "new-volunteer", "logistics", Some("Python")),
        ];
        let members: Vec<Member> = vec![member(Some("Python, Java"))];

        let counts: Vec<SkillCount> = skill_frequency(&applications, &members);

        assert_eq!(counts[0].skill, "Python");
        assert_eq!(counts[0].count, 3);
        let react_position: usize = counts.iter().position(|c| c.skill == "React").unwrap();
        let python_position: usize = counts.iter().position(|c| c.skill == "Python").unwrap();
        assert!(python_position < react_position);
    }

    #[test]
    fn test_skill_frequency_ties_keep_first_encountered_order() {
        let applications: Vec<ApplicationRecord> = vec![application(
            "devcon-geekup",
            "new-volunteer",
            "registration",
            Some("Zig, Ada"),
        )];

        let counts: Vec<SkillCount> = skill_frequency(&applications, &[]);

        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].skill, "Zig");
        assert_eq!(counts[1].skill, "Ada");
    }

    #[test]
    fn test_skill_frequency_truncates_to_top_fifteen() {
        let skills: String = (0..20).map(|i| format!("Skill{i}")).collect::<Vec<_>>().join(", ");
        let applications: Vec<ApplicationRecord> = vec![application(
            "devcon-geekup",
            "new-volunteer",
            "registration",
            Some(&skills),
        )];

        let counts: Vec<SkillCount> = skill_frequency(&applications, &[]);

        assert_eq!(counts.len(), TOP_SKILLS_LIMIT);
    }

    #[test]
    fn test_skill_frequency_tolerates_missing_and_empty_text() {
        let applications: Vec<ApplicationRecord> = vec![
            application("devcon-geekup", "new-volunteer", "registration", None),
            application("devcon-geekup", "new-volunteer", "registration", Some("  ,  ")),
        ];

        assert!(skill_frequency(&applications, &[]).is_empty());
    }

    #[test]
    fn test_committee_distribution_maps_and_sorts() {
        let applications: Vec<ApplicationRecord> = vec![
            application("devcon-geekup", "new-volunteer", "logistics", None),
            application("devcon-geekup", "new-volunteer", "registration", None),
            application("devcon-geekup", "new-volunteer", "registration", None),
        ];

        let distribution: Vec<CountEntry> = committee_distribution(&applications);

        assert_eq!(distribution.len(), 2);
        assert_eq!(distribution[0].label, "Registration & Check-in");
        assert_eq!(distribution[0].count, 2);
        assert_eq!(distribution[1].label, "Logistics & Setup");
    }

    #[test]
    fn test_committee_distribution_unknown_codes_display_raw() {
        let applications: Vec<ApplicationRecord> =
            vec![application("devcon-geekup", "new-volunteer", "snacks", None)];

        let distribution: Vec<CountEntry> = committee_distribution(&applications);

        assert_eq!(distribution[0].label, "snacks");
    }

    #[test]
    fn test_committee_distribution_each_committee_appears_once() {
        let applications: Vec<ApplicationRecord> = vec![
            application("devcon-geekup", "new-volunteer", "registration", None),
            application("devcon-geekup", "new-volunteer", "logistics", None),
            application("devcon-geekup", "new-volunteer", "registration", None),
            application("campus-devcon", "new-volunteer", "outreach", None),
        ];

        let distribution: Vec<CountEntry> = committee_distribution(&applications);

        let mut labels: Vec<&str> = distribution.iter().map(|e| e.label.as_str()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), distribution.len());

        let counted: usize = distribution.iter().map(|e| e.count).sum();
        assert!(counted <= applications.len());
    }

    #[test]
    fn test_event_stats_use_display_names() {
        let applications: Vec<ApplicationRecord> = vec![
            application("devcon-geekup", "new-volunteer", "registration", None),
            application("campus-devcon", "new-volunteer", "outreach", None),
            application("devcon-geekup", "existing-member", "general", None),
        ];

        let stats: Vec<CountEntry> = event_stats(&applications);

        assert_eq!(stats[0].label, "DEVCON GeekUp");
        assert_eq!(stats[0].count, 2);
        assert_eq!(stats[1].label, "Campus DEVCON");
        assert_eq!(stats[1].count, 1);
    }

    #[test]
    fn test_volunteer_type_stats_group_labels() {
        let applications: Vec<ApplicationRecord> = vec![
            application("devcon-geekup", "new-volunteer", "registration", None),
            application("devcon-geekup", "existing-member", "general", None),
            application("devcon-geekup", "new-volunteer", "logistics", None),
        ];

        let stats: Vec<CountEntry> = volunteer_type_stats(&applications);

        assert_eq!(stats[0].label, "New Volunteers");
        assert_eq!(stats[0].count, 2);
        assert_eq!(stats[1].label, "Existing Members");
        assert_eq!(stats[1].count, 1);
    }

    #[test]
    fn test_bucket_totals_sum_member_skills() {
        let counts: Vec<SkillCount> = vec![
            SkillCount {
                skill: String::from("Python"),
                count: 3,
            },
            SkillCount {
                skill: String::from("React"),
                count: 2,
            },
            SkillCount {
                skill: String::from("Photography"),
                count: 2,
            },
            SkillCount {
                skill: String::from("Event Planning"),
                count: 5,
            },
        ];

        let totals: Vec<BucketTotal> = bucket_totals(&counts);

        assert_eq!(totals.len(), 3);
        assert_eq!(totals[0].label, "Programming & Development");
        assert_eq!(totals[0].total, 5);
        assert_eq!(totals[1].label, "Emerging Technologies");
        assert_eq!(totals[1].total, 0);
        assert_eq!(totals[2].label, "Design & Media");
        assert_eq!(totals[2].total, 2);
    }

    #[test]
    fn test_export_rows_carry_percentages() {
        let applications: Vec<ApplicationRecord> = vec![
            application("devcon-geekup", "new-volunteer", "registration", Some("Python")),
            application("devcon-geekup", "new-volunteer", "logistics", Some("Python")),
        ];
        let members: Vec<Member> = vec![member(None), member(None)];

        let skills: Vec<SkillExportRow> = skills_export_rows(&applications, &members);
        assert_eq!(skills[0].skill, "Python");
        assert_eq!(skills[0].percentage, "50.0%");

        let committees: Vec<CommitteeExportRow> = committee_export_rows(&applications);
        assert_eq!(committees[0].percentage, "50.0%");
    }

    #[test]
    fn test_empty_inputs_produce_empty_views() {
        assert!(skill_frequency(&[], &[]).is_empty());
        assert!(committee_distribution(&[]).is_empty());
        assert!(event_stats(&[]).is_empty());
        assert!(volunteer_type_stats(&[]).is_empty());
        assert!(skills_export_rows(&[], &[]).is_empty());
    }
}
