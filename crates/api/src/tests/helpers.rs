// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::SubmitApplicationRequest;
use devcon_hub_domain::Member;
use devcon_hub_persistence::Persistence;

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn seed_member(persistence: &mut Persistence, email: &str) -> Member {
    let member: Member = Member::new(
        String::from("Ben"),
        String::from("Santos"),
        email.to_string(),
        Some(String::from("+63 900 000 0000")),
        Some(String::from("Volunteered at GeekUp 2023")),
        Some(String::from("Java, DevOps")),
    );
    persistence
        .insert_member(&member)
        .expect("Failed to seed member");
    member
}

pub fn new_volunteer_request() -> SubmitApplicationRequest {
    SubmitApplicationRequest::NewVolunteer {
        event: String::from("devcon-geekup"),
        first_name: String::from("Ana"),
        last_name: String::from("Reyes"),
        email: String::from("ana.reyes@example.com"),
        phone: Some(String::from("+63 912 345 6789")),
        facebook_url: String::from("https://facebook.com/ana.reyes"),
        school_organization: String::from("MSU-IIT"),
        field_of_interest: String::from("web-development"),
        committee: String::from("registration"),
        skills: vec![String::from("Python"), String::from("React")],
        team_preferences: vec![String::from("programs")],
        education_level: Some(String::from("3rd-year")),
        motivation: String::from("I want to help the community grow."),
    }
}

pub fn existing_member_request(member_email: &str) -> SubmitApplicationRequest {
    SubmitApplicationRequest::ExistingMember {
        event: String::from("campus-devcon"),
        member_email: member_email.to_string(),
        committee: String::from("student-mentor"),
    }
}
