use serde::{Deserialize, Serialize};

/// Build lifecycle states, as stored in the `status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum BuildStatus {
    /// Queued, not yet picked up by a worker
    Pending,
    /// Currently executing
    Running,
    /// Finished successfully
    Success,
    /// Finished with a failing step
    Failure,
    /// Canceled before completion
    Killed,
    /// Aborted by a system error
    Error,
}

impl BuildStatus {
    /// Whether the build still occupies a worker slot.
    pub fn is_active(&self) -> bool {
        matches!(self, BuildStatus::Pending | BuildStatus::Running)
    }
}

impl std::fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildStatus::Pending => write!(f, "pending"),
            BuildStatus::Running => write!(f, "running"),
            BuildStatus::Success => write!(f, "success"),
            BuildStatus::Failure => write!(f, "failure"),
            BuildStatus::Killed => write!(f, "killed"),
            BuildStatus::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for BuildStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BuildStatus::Pending),
            "running" => Ok(BuildStatus::Running),
            "success" => Ok(BuildStatus::Success),
            "failure" => Ok(BuildStatus::Failure),
            "killed" => Ok(BuildStatus::Killed),
            "error" => Ok(BuildStatus::Error),
            _ => Err(format!("Invalid build status: {}", s)),
        }
    }
}
