// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_test_persistence, existing_member_request, new_volunteer_request, seed_member,
};
use crate::{
    ApiError, MemberLookupResponse, SubmitApplicationRequest, SubmitApplicationResponse,
    lookup_member, submit_application,
};
use devcon_hub_domain::{ApplicationRecord, Member};
use devcon_hub_persistence::Persistence;

#[test]
fn test_new_volunteer_submission_inserts_one_record() {
    let mut persistence: Persistence = create_test_persistence();

    let response: SubmitApplicationResponse =
        submit_application(&mut persistence, &new_volunteer_request()).unwrap();

    assert!(response.success);
    assert_eq!(response.stage, "Submitted");

    let stored: Vec<ApplicationRecord> = persistence.list_applications().unwrap();
    assert_eq!(stored.len(), 1);
    let record: &ApplicationRecord = &stored[0];
    assert_eq!(record.application_id, Some(response.application_id));
    // The new-volunteer branch carries its own fields and nothing of the
    // member branch.
    assert!(record.motivation.is_some());
    assert!(record.skills.is_some());
    assert!(record.team_preferences.is_some());
    assert_eq!(record.experience, None);
}

#[test]
fn test_invalid_form_is_rejected_and_nothing_is_persisted() {
    let mut persistence: Persistence = create_test_persistence();
    let mut request: SubmitApplicationRequest = new_volunteer_request();
    if let SubmitApplicationRequest::NewVolunteer { motivation, email, .. } = &mut request {
        *motivation = String::new();
        *email = String::from("ana@nowhere");
    }

    let result = submit_application(&mut persistence, &request);

    match result {
        Err(ApiError::ValidationFailed { errors }) => {
            assert!(errors.contains_key("motivation"));
            assert_eq!(
                errors.get("email").map(String::as_str),
                Some("Please enter a valid email address")
            );
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(persistence.list_applications().unwrap().is_empty());
}

#[test]
fn test_unknown_event_code_is_invalid_input() {
    let mut persistence: Persistence = create_test_persistence();
    let mut request: SubmitApplicationRequest = new_volunteer_request();
    if let SubmitApplicationRequest::NewVolunteer { event, .. } = &mut request {
        *event = String::from("hacknight");
    }

    let result = submit_application(&mut persistence, &request);

    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn test_committee_outside_the_event_fails_validation() {
    let mut persistence: Persistence = create_test_persistence();
    let mut request: SubmitApplicationRequest = new_volunteer_request();
    if let SubmitApplicationRequest::NewVolunteer { event, .. } = &mut request {
        // Registration is a GeekUp committee.
        *event = String::from("campus-devcon");
    }

    let result = submit_application(&mut persistence, &request);

    match result {
        Err(ApiError::ValidationFailed { errors }) => {
            assert!(errors.contains_key("committee"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_member_submission_blocked_without_a_roster_match() {
    let mut persistence: Persistence = create_test_persistence();

    let result = submit_application(
        &mut persistence,
        &existing_member_request("nobody@example.com"),
    );

    match result {
        Err(ApiError::ValidationFailed { errors }) => {
            assert_eq!(
                errors.get("memberSearch").map(String::as_str),
                Some("No member found with that email")
            );
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(persistence.list_applications().unwrap().is_empty());
}

#[test]
fn test_member_submission_copies_roster_fields_verbatim() {
    let mut persistence: Persistence = create_test_persistence();
    let member: Member = seed_member(&mut persistence, "ben@example.com");

    let response: SubmitApplicationResponse = submit_application(
        &mut persistence,
        &existing_member_request("ben@example.com"),
    )
    .unwrap();
    assert!(response.success);

    let stored: Vec<ApplicationRecord> = persistence.list_applications().unwrap();
    let record: &ApplicationRecord = &stored[0];
    assert_eq!(record.volunteer_type, "existing-member");
    assert_eq!(record.first_name, member.first_name);
    assert_eq!(record.last_name, member.last_name);
    assert_eq!(record.email, member.email);
    assert_eq!(record.phone, member.phone);
    assert_eq!(record.skills, member.skills);
    assert_eq!(record.experience, member.experience);
    assert_eq!(record.motivation, None);
    assert_eq!(record.team_preferences, None);
}

#[test]
fn test_lookup_member_reports_found_and_not_found() {
    let mut persistence: Persistence = create_test_persistence();
    seed_member(&mut persistence, "ben@example.com");

    let found: MemberLookupResponse =
        lookup_member(&mut persistence, "ben@example.com").unwrap();
    assert!(found.found);
    assert_eq!(
        found.member.map(|member| member.first_name),
        Some(String::from("Ben"))
    );

    let missing: MemberLookupResponse =
        lookup_member(&mut persistence, "nobody@example.com").unwrap();
    assert!(!missing.found);
    assert_eq!(missing.member, None);
}

#[test]
fn test_lookup_member_requires_an_email() {
    let mut persistence: Persistence = create_test_persistence();

    let result = lookup_member(&mut persistence, "   ");

    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn test_lookup_member_trims_the_query() {
    let mut persistence: Persistence = create_test_persistence();
    seed_member(&mut persistence, "ben@example.com");

    let found: MemberLookupResponse =
        lookup_member(&mut persistence, "  ben@example.com  ").unwrap();

    assert!(found.found);
}
