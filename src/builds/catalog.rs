//! Canonical SQL templates for the builds table.
//!
//! Every statement is written in canonical ordinal-placeholder form and
//! rendered per dialect by the registry. Repo-scoped statements order by
//! `number` (per-repo monotonic sequence) when comparing builds within one
//! repository; org-scoped and global listings order by `id`, because
//! `number` is not comparable across repositories.

use crate::template::QueryTemplate;

/// List every build row, in storage order.
pub const LIST_BUILDS: QueryTemplate = QueryTemplate::new(
    r#"
SELECT *
FROM builds
"#,
    0,
);

/// List builds for a repo, newest first, with pagination.
pub const LIST_REPO_BUILDS: QueryTemplate = QueryTemplate::new(
    r#"
SELECT *
FROM builds
WHERE repo_id = $1
ORDER BY id DESC
LIMIT $2
OFFSET $3
"#,
    3,
);

/// List builds for a repo and event type, by build number descending.
pub const LIST_REPO_BUILDS_BY_EVENT: QueryTemplate = QueryTemplate::new(
    r#"
SELECT *
FROM builds
WHERE repo_id = $1
AND event = $2
ORDER BY number DESC
LIMIT $3
OFFSET $4
"#,
    4,
);

/// List builds across every repo belonging to an org, newest first.
pub const LIST_ORG_BUILDS: QueryTemplate = QueryTemplate::new(
    r#"
SELECT builds.*
FROM builds JOIN repos
ON repos.id = builds.repo_id
WHERE repos.org = $1
ORDER BY builds.id DESC
LIMIT $2
OFFSET $3
"#,
    3,
);

/// List builds for an org and event type, newest first.
pub const LIST_ORG_BUILDS_BY_EVENT: QueryTemplate = QueryTemplate::new(
    r#"
SELECT builds.*
FROM builds JOIN repos
ON repos.id = builds.repo_id
WHERE repos.org = $1
AND builds.event = $2
ORDER BY builds.id DESC
LIMIT $3
OFFSET $4
"#,
    4,
);

/// Select one build by repo and build number.
pub const SELECT_REPO_BUILD: QueryTemplate = QueryTemplate::new(
    r#"
SELECT *
FROM builds
WHERE repo_id = $1
AND number = $2
LIMIT 1
"#,
    2,
);

/// Select the most recent build for a repo.
pub const SELECT_LAST_REPO_BUILD: QueryTemplate = QueryTemplate::new(
    r#"
SELECT *
FROM builds
WHERE repo_id = $1
ORDER BY number DESC
LIMIT 1
"#,
    1,
);

/// Select the most recent build for a repo and branch.
pub const SELECT_LAST_REPO_BUILD_BY_BRANCH: QueryTemplate = QueryTemplate::new(
    r#"
SELECT *
FROM builds
WHERE repo_id = $1
AND branch = $2
ORDER BY number DESC
LIMIT 1
"#,
    2,
);

/// Count every build in the database.
pub const SELECT_BUILDS_COUNT: QueryTemplate = QueryTemplate::new(
    r#"
SELECT count(*) AS count
FROM builds
"#,
    0,
);

/// Count builds in a given status.
pub const SELECT_BUILDS_COUNT_BY_STATUS: QueryTemplate = QueryTemplate::new(
    r#"
SELECT count(*) AS count
FROM builds
WHERE status = $1
"#,
    1,
);

/// Count builds for a repo.
pub const SELECT_REPO_BUILD_COUNT: QueryTemplate = QueryTemplate::new(
    r#"
SELECT count(*) AS count
FROM builds
WHERE repo_id = $1
"#,
    1,
);

/// Count builds for a repo and event type.
pub const SELECT_REPO_BUILD_COUNT_BY_EVENT: QueryTemplate = QueryTemplate::new(
    r#"
SELECT count(*) AS count
FROM builds
WHERE repo_id = $1
AND event = $2
"#,
    2,
);

/// Count builds across every repo belonging to an org.
pub const SELECT_ORG_BUILD_COUNT: QueryTemplate = QueryTemplate::new(
    r#"
SELECT count(*) AS count
FROM builds JOIN repos
ON repos.id = builds.repo_id
WHERE repos.org = $1
"#,
    1,
);

/// Count builds for an org and event type.
pub const SELECT_ORG_BUILD_COUNT_BY_EVENT: QueryTemplate = QueryTemplate::new(
    r#"
SELECT count(*) AS count
FROM builds JOIN repos
ON repos.id = builds.repo_id
WHERE repos.org = $1
AND builds.event = $2
"#,
    2,
);

/// Select builds still pending or running that were created after the given
/// timestamp, projected with their repo's full name for stale-build alerting.
pub const SELECT_PENDING_AND_RUNNING_BUILDS: QueryTemplate = QueryTemplate::new(
    r#"
SELECT builds.created, builds.number, builds.status, repos.full_name
FROM builds INNER JOIN repos ON builds.repo_id = repos.id
WHERE builds.created > $1
AND builds.status IN ('running', 'pending')
"#,
    1,
);

/// Remove one build by its surrogate id.
pub const DELETE_BUILD: QueryTemplate = QueryTemplate::new(
    r#"
DELETE
FROM builds
WHERE id = $1
"#,
    1,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_listing_orders_by_id() {
        assert!(LIST_REPO_BUILDS.canonical().contains("ORDER BY id DESC"));
    }

    #[test]
    fn test_repo_event_listing_orders_by_number() {
        assert!(LIST_REPO_BUILDS_BY_EVENT
            .canonical()
            .contains("ORDER BY number DESC"));
    }

    #[test]
    fn test_org_listings_order_by_surrogate_id() {
        // Build numbers are only comparable within one repo; org listings
        // span repos and must fall back to the global surrogate key.
        assert!(LIST_ORG_BUILDS.canonical().contains("ORDER BY builds.id DESC"));
        assert!(LIST_ORG_BUILDS_BY_EVENT
            .canonical()
            .contains("ORDER BY builds.id DESC"));
    }

    #[test]
    fn test_last_build_selects_by_number() {
        assert!(SELECT_LAST_REPO_BUILD.canonical().contains("ORDER BY number DESC"));
        assert!(SELECT_LAST_REPO_BUILD_BY_BRANCH
            .canonical()
            .contains("ORDER BY number DESC"));
    }

    #[test]
    fn test_stale_build_statuses_are_grouped() {
        let sql = SELECT_PENDING_AND_RUNNING_BUILDS.canonical();
        assert!(sql.contains("IN ('running', 'pending')"));
        assert!(sql.contains("builds.created > $1"));
    }
}
