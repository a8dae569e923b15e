// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod catalog;
mod error;
mod forms;
mod record;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use catalog::{
    AVAILABLE_SKILLS, EventInfo, SkillBucket, bucket_for_skill, committee_label,
    committees_for_event, event_catalog, event_label, volunteer_type_label,
};
pub use error::DomainError;
pub use forms::{ExistingMemberForm, FormData, NewVolunteerForm};
pub use record::ApplicationRecord;
pub use types::{
    Committee, EducationLevel, Event, FieldOfInterest, Member, TeamPreference, VolunteerType,
    join_skills, split_skills,
};
pub use validation::{FieldErrors, validate_email_format, validate_form};
