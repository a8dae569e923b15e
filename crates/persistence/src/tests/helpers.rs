// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Persistence;
use devcon_hub_domain::{ApplicationRecord, Member};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn new_volunteer_application(email: &str) -> ApplicationRecord {
    ApplicationRecord {
        application_id: None,
        first_name: String::from("Ana"),
        last_name: String::from("Reyes"),
        email: email.to_string(),
        phone: Some(String::from("+63 912 345 6789")),
        event: String::from("devcon-geekup"),
        volunteer_type: String::from("new-volunteer"),
        committee: String::from("registration"),
        facebook_url: Some(String::from("https://facebook.com/ana.reyes")),
        school_organization: Some(String::from("MSU-IIT")),
        field_of_interest: Some(String::from("web-development")),
        team_preferences: Some(String::from("programs, creatives")),
        education_level: Some(String::from("3rd-year")),
        skills: Some(String::from("Python, React")),
        experience: None,
        motivation: Some(String::from("I want to help the community grow.")),
        created_at: None,
        updated_at: None,
    }
}

pub fn roster_member(email: &str) -> Member {
    Member::new(
        String::from("Ben"),
        String::from("Santos"),
        email.to_string(),
        Some(String::from("+63 900 000 0000")),
        Some(String::from("Volunteered at GeekUp 2023")),
        Some(String::from("Java, DevOps")),
    )
}
