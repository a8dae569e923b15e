// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    volunteer_applications (application_id) {
        application_id -> BigInt,
        first_name -> Text,
        last_name -> Text,
        email -> Text,
        phone -> Nullable<Text>,
        event -> Text,
        volunteer_type -> Text,
        committee -> Text,
        facebook_url -> Nullable<Text>,
        school_organization -> Nullable<Text>,
        field_of_interest -> Nullable<Text>,
        team_preferences -> Nullable<Text>,
        education_level -> Nullable<Text>,
        skills -> Nullable<Text>,
        experience -> Nullable<Text>,
        motivation -> Nullable<Text>,
        created_at -> Text,
        updated_at -> Text,
    }
}

diesel::table! {
    members (member_id) {
        member_id -> BigInt,
        first_name -> Text,
        last_name -> Text,
        email -> Text,
        phone -> Nullable<Text>,
        experience -> Nullable<Text>,
        skills -> Nullable<Text>,
        created_at -> Text,
    }
}
