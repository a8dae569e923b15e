// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiError;
use crate::request_response::{
    AnalyticsResponse, CollectionFetch, DashboardResponse, DashboardStats, MemberSummary,
};
use devcon_hub_analytics::{
    bucket_totals, committee_distribution, event_stats, skill_frequency, volunteer_type_stats,
};
use devcon_hub_domain::{ApplicationRecord, Event, Member};
use devcon_hub_persistence::Persistence;
use tracing::error;

/// Performs the admin dashboard bulk fetch.
///
/// The applications and members reads are independent: a failure in
/// either is logged and reported on that side of the response without
/// blocking display of the other's data, so this function itself never
/// fails.
#[must_use]
pub fn fetch_dashboard(persistence: &mut Persistence) -> DashboardResponse {
    let applications: CollectionFetch<ApplicationRecord> =
        match persistence.list_applications() {
            Ok(rows) => CollectionFetch {
                data: Some(rows),
                error: None,
            },
            Err(err) => {
                error!(error = %err, "Failed to fetch applications");
                CollectionFetch {
                    data: None,
                    error: Some(err.to_string()),
                }
            }
        };

    let members: CollectionFetch<MemberSummary> = match persistence.list_members() {
        Ok(rows) => CollectionFetch {
            data: Some(rows.into_iter().map(MemberSummary::from).collect()),
            error: None,
        },
        Err(err) => {
            error!(error = %err, "Failed to fetch members");
            CollectionFetch {
                data: None,
                error: Some(err.to_string()),
            }
        }
    };

    let fetched_applications: &[ApplicationRecord] =
        applications.data.as_deref().unwrap_or_default();
    let stats: DashboardStats = DashboardStats {
        total_applications: fetched_applications.len(),
        total_members: members.data.as_ref().map_or(0, Vec::len),
        geekup_applications: fetched_applications
            .iter()
            .filter(|application| application.event == Event::DevconGeekup.as_str())
            .count(),
    };

    DashboardResponse {
        stats,
        applications,
        members,
    }
}

/// Computes the admin analytics view over freshly fetched rows.
///
/// Unlike the dashboard bulk fetch, every aggregation here needs both
/// collections, so a failure in either read fails the whole view.
///
/// # Errors
///
/// Returns an error if either read fails.
pub fn fetch_analytics(persistence: &mut Persistence) -> Result<AnalyticsResponse, ApiError> {
    let applications: Vec<ApplicationRecord> =
        persistence.list_applications().map_err(|err| {
            error!(error = %err, "Failed to fetch applications for analytics");
            ApiError::Backend {
                operation: String::from("applications fetch"),
                message: err.to_string(),
            }
        })?;
    let members: Vec<Member> = persistence.list_members().map_err(|err| {
        error!(error = %err, "Failed to fetch members for analytics");
        ApiError::Backend {
            operation: String::from("members fetch"),
            message: err.to_string(),
        }
    })?;

    let top_skills = skill_frequency(&applications, &members);
    let skill_buckets = bucket_totals(&top_skills);

    Ok(AnalyticsResponse {
        skill_buckets,
        committee_distribution: committee_distribution(&applications),
        event_stats: event_stats(&applications),
        volunteer_type_stats: volunteer_type_stats(&applications),
        top_skills,
    })
}
