use serde::Serialize;

use crate::builds::status::BuildStatus;

/// Row shape returned by `select.pendingAndRunning`.
///
/// A monitor runs that statement periodically and alerts on builds that
/// have sat in an active status past its threshold. `created` is seconds
/// since the Unix epoch, matching the `created` column.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct StaleBuild {
    pub created: i64,
    pub number: i64,
    pub status: BuildStatus,
    pub full_name: String,
}
