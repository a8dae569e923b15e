// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::diesel_schema::{members, volunteer_applications};
use devcon_hub_domain::{ApplicationRecord, Member};
use diesel::prelude::*;

/// Diesel row struct for `volunteer_applications`.
#[derive(Queryable, Selectable)]
#[diesel(table_name = volunteer_applications)]
pub(crate) struct ApplicationRow {
    pub application_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub event: String,
    pub volunteer_type: String,
    pub committee: String,
    pub facebook_url: Option<String>,
    pub school_organization: Option<String>,
    pub field_of_interest: Option<String>,
    pub team_preferences: Option<String>,
    pub education_level: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub motivation: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ApplicationRow> for ApplicationRecord {
    fn from(row: ApplicationRow) -> Self {
        Self {
            application_id: Some(row.application_id),
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone: row.phone,
            event: row.event,
            volunteer_type: row.volunteer_type,
            committee: row.committee,
            facebook_url: row.facebook_url,
            school_organization: row.school_organization,
            field_of_interest: row.field_of_interest,
            team_preferences: row.team_preferences,
            education_level: row.education_level,
            skills: row.skills,
            experience: row.experience,
            motivation: row.motivation,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        }
    }
}

/// Diesel insert struct for `volunteer_applications`.
///
/// Identity and timestamps are assigned by the database.
#[derive(Insertable)]
#[diesel(table_name = volunteer_applications)]
pub(crate) struct NewApplicationRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub event: &'a str,
    pub volunteer_type: &'a str,
    pub committee: &'a str,
    pub facebook_url: Option<&'a str>,
    pub school_organization: Option<&'a str>,
    pub field_of_interest: Option<&'a str>,
    pub team_preferences: Option<&'a str>,
    pub education_level: Option<&'a str>,
    pub skills: Option<&'a str>,
    pub experience: Option<&'a str>,
    pub motivation: Option<&'a str>,
}

impl<'a> NewApplicationRow<'a> {
    pub(crate) fn from_record(record: &'a ApplicationRecord) -> Self {
        Self {
            first_name: &record.first_name,
            last_name: &record.last_name,
            email: &record.email,
            phone: record.phone.as_deref(),
            event: &record.event,
            volunteer_type: &record.volunteer_type,
            committee: &record.committee,
            facebook_url: record.facebook_url.as_deref(),
            school_organization: record.school_organization.as_deref(),
            field_of_interest: record.field_of_interest.as_deref(),
            team_preferences: record.team_preferences.as_deref(),
            education_level: record.education_level.as_deref(),
            skills: record.skills.as_deref(),
            experience: record.experience.as_deref(),
            motivation: record.motivation.as_deref(),
        }
    }
}

/// Diesel row struct for `members`.
#[derive(Queryable, Selectable)]
#[diesel(table_name = members)]
pub(crate) struct MemberRow {
    pub member_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub experience: Option<String>,
    pub skills: Option<String>,
    pub created_at: String,
}

impl From<MemberRow> for Member {
    fn from(row: MemberRow) -> Self {
        Self {
            member_id: Some(row.member_id),
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone: row.phone,
            experience: row.experience,
            skills: row.skills,
            created_at: Some(row.created_at),
        }
    }
}

/// Diesel insert struct for `members`.
#[derive(Insertable)]
#[diesel(table_name = members)]
pub(crate) struct NewMemberRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub experience: Option<&'a str>,
    pub skills: Option<&'a str>,
}

impl<'a> NewMemberRow<'a> {
    pub(crate) fn from_member(member: &'a Member) -> Self {
        Self {
            first_name: &member.first_name,
            last_name: &member.last_name,
            email: &member.email,
            phone: member.phone.as_deref(),
            experience: member.experience.as_deref(),
            skills: member.skills.as_deref(),
        }
    }
}
