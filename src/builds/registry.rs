use std::fmt;

use crate::builds::catalog;
use crate::dialect::Dialect;
use crate::errors::StoreError;
use crate::template::{Query, QueryTemplate};

/// Listing operations: many rows per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListOp {
    /// Every build, unfiltered.
    All,
    /// Builds for one repo, paginated.
    Repo,
    /// Builds for one repo and event type, paginated.
    RepoByEvent,
    /// Builds across an org's repos, paginated.
    Org,
    /// Builds across an org's repos for one event type, paginated.
    OrgByEvent,
}

/// Selection operations: zero/one row or an aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectOp {
    /// Exact build by repo and build number.
    Repo,
    /// Highest-numbered build for a repo.
    Last,
    /// Highest-numbered build for a repo and branch.
    LastByBranch,
    /// Total build count.
    Count,
    /// Build count for one status.
    CountByStatus,
    /// Build count for one repo.
    CountByRepo,
    /// Build count for one repo and event type.
    CountByRepoAndEvent,
    /// Build count across an org's repos.
    CountByOrg,
    /// Build count across an org's repos for one event type.
    CountByOrgAndEvent,
    /// Pending/running builds created after a timestamp, for stale-build
    /// detection.
    PendingAndRunning,
}

/// Deletion operations: removes one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeleteOp {
    /// Remove one build by surrogate id.
    Build,
}

/// Every published build query operation, partitioned by class.
///
/// The set is closed: dispatch is exhaustive over these variants, so an
/// unknown operation is unrepresentable in typed callers. String-keyed
/// callers go through [`Operation::from_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List(ListOp),
    Select(SelectOp),
    Delete(DeleteOp),
}

impl Operation {
    /// Every operation, in registry storage order.
    pub const ALL: [Operation; 16] = [
        Operation::List(ListOp::All),
        Operation::List(ListOp::Repo),
        Operation::List(ListOp::RepoByEvent),
        Operation::List(ListOp::Org),
        Operation::List(ListOp::OrgByEvent),
        Operation::Select(SelectOp::Repo),
        Operation::Select(SelectOp::Last),
        Operation::Select(SelectOp::LastByBranch),
        Operation::Select(SelectOp::Count),
        Operation::Select(SelectOp::CountByStatus),
        Operation::Select(SelectOp::CountByRepo),
        Operation::Select(SelectOp::CountByRepoAndEvent),
        Operation::Select(SelectOp::CountByOrg),
        Operation::Select(SelectOp::CountByOrgAndEvent),
        Operation::Select(SelectOp::PendingAndRunning),
        Operation::Delete(DeleteOp::Build),
    ];

    /// Resolve a published dotted key (`"list.repo"`, `"select.count"`, ...)
    /// to its operation.
    ///
    /// Unknown keys are a configuration error in the caller, reported as
    /// [`StoreError::UnknownOperation`].
    pub fn from_key(key: &str) -> Result<Self, StoreError> {
        match key {
            "list.all" => Ok(Operation::List(ListOp::All)),
            "list.repo" => Ok(Operation::List(ListOp::Repo)),
            "list.repoByEvent" => Ok(Operation::List(ListOp::RepoByEvent)),
            "list.org" => Ok(Operation::List(ListOp::Org)),
            "list.orgByEvent" => Ok(Operation::List(ListOp::OrgByEvent)),
            "select.repo" => Ok(Operation::Select(SelectOp::Repo)),
            "select.last" => Ok(Operation::Select(SelectOp::Last)),
            "select.lastByBranch" => Ok(Operation::Select(SelectOp::LastByBranch)),
            "select.count" => Ok(Operation::Select(SelectOp::Count)),
            "select.countByStatus" => Ok(Operation::Select(SelectOp::CountByStatus)),
            "select.countByRepo" => Ok(Operation::Select(SelectOp::CountByRepo)),
            "select.countByRepoAndEvent" => {
                Ok(Operation::Select(SelectOp::CountByRepoAndEvent))
            }
            "select.countByOrg" => Ok(Operation::Select(SelectOp::CountByOrg)),
            "select.countByOrgAndEvent" => Ok(Operation::Select(SelectOp::CountByOrgAndEvent)),
            "select.pendingAndRunning" => Ok(Operation::Select(SelectOp::PendingAndRunning)),
            "delete.build" => Ok(Operation::Delete(DeleteOp::Build)),
            _ => Err(StoreError::UnknownOperation(key.to_string())),
        }
    }

    /// The canonical template behind this operation.
    pub fn template(self) -> QueryTemplate {
        match self {
            Operation::List(ListOp::All) => catalog::LIST_BUILDS,
            Operation::List(ListOp::Repo) => catalog::LIST_REPO_BUILDS,
            Operation::List(ListOp::RepoByEvent) => catalog::LIST_REPO_BUILDS_BY_EVENT,
            Operation::List(ListOp::Org) => catalog::LIST_ORG_BUILDS,
            Operation::List(ListOp::OrgByEvent) => catalog::LIST_ORG_BUILDS_BY_EVENT,
            Operation::Select(SelectOp::Repo) => catalog::SELECT_REPO_BUILD,
            Operation::Select(SelectOp::Last) => catalog::SELECT_LAST_REPO_BUILD,
            Operation::Select(SelectOp::LastByBranch) => {
                catalog::SELECT_LAST_REPO_BUILD_BY_BRANCH
            }
            Operation::Select(SelectOp::Count) => catalog::SELECT_BUILDS_COUNT,
            Operation::Select(SelectOp::CountByStatus) => catalog::SELECT_BUILDS_COUNT_BY_STATUS,
            Operation::Select(SelectOp::CountByRepo) => catalog::SELECT_REPO_BUILD_COUNT,
            Operation::Select(SelectOp::CountByRepoAndEvent) => {
                catalog::SELECT_REPO_BUILD_COUNT_BY_EVENT
            }
            Operation::Select(SelectOp::CountByOrg) => catalog::SELECT_ORG_BUILD_COUNT,
            Operation::Select(SelectOp::CountByOrgAndEvent) => {
                catalog::SELECT_ORG_BUILD_COUNT_BY_EVENT
            }
            Operation::Select(SelectOp::PendingAndRunning) => {
                catalog::SELECT_PENDING_AND_RUNNING_BUILDS
            }
            Operation::Delete(DeleteOp::Build) => catalog::DELETE_BUILD,
        }
    }

    /// Position of this operation in [`Operation::ALL`].
    fn index(self) -> usize {
        match self {
            Operation::List(ListOp::All) => 0,
            Operation::List(ListOp::Repo) => 1,
            Operation::List(ListOp::RepoByEvent) => 2,
            Operation::List(ListOp::Org) => 3,
            Operation::List(ListOp::OrgByEvent) => 4,
            Operation::Select(SelectOp::Repo) => 5,
            Operation::Select(SelectOp::Last) => 6,
            Operation::Select(SelectOp::LastByBranch) => 7,
            Operation::Select(SelectOp::Count) => 8,
            Operation::Select(SelectOp::CountByStatus) => 9,
            Operation::Select(SelectOp::CountByRepo) => 10,
            Operation::Select(SelectOp::CountByRepoAndEvent) => 11,
            Operation::Select(SelectOp::CountByOrg) => 12,
            Operation::Select(SelectOp::CountByOrgAndEvent) => 13,
            Operation::Select(SelectOp::PendingAndRunning) => 14,
            Operation::Delete(DeleteOp::Build) => 15,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            Operation::List(ListOp::All) => "list.all",
            Operation::List(ListOp::Repo) => "list.repo",
            Operation::List(ListOp::RepoByEvent) => "list.repoByEvent",
            Operation::List(ListOp::Org) => "list.org",
            Operation::List(ListOp::OrgByEvent) => "list.orgByEvent",
            Operation::Select(SelectOp::Repo) => "select.repo",
            Operation::Select(SelectOp::Last) => "select.last",
            Operation::Select(SelectOp::LastByBranch) => "select.lastByBranch",
            Operation::Select(SelectOp::Count) => "select.count",
            Operation::Select(SelectOp::CountByStatus) => "select.countByStatus",
            Operation::Select(SelectOp::CountByRepo) => "select.countByRepo",
            Operation::Select(SelectOp::CountByRepoAndEvent) => "select.countByRepoAndEvent",
            Operation::Select(SelectOp::CountByOrg) => "select.countByOrg",
            Operation::Select(SelectOp::CountByOrgAndEvent) => "select.countByOrgAndEvent",
            Operation::Select(SelectOp::PendingAndRunning) => "select.pendingAndRunning",
            Operation::Delete(DeleteOp::Build) => "delete.build",
        };
        write!(f, "{}", key)
    }
}

impl From<ListOp> for Operation {
    fn from(op: ListOp) -> Self {
        Operation::List(op)
    }
}

impl From<SelectOp> for Operation {
    fn from(op: SelectOp) -> Self {
        Operation::Select(op)
    }
}

impl From<DeleteOp> for Operation {
    fn from(op: DeleteOp) -> Self {
        Operation::Delete(op)
    }
}

/// Immutable build query registry, rendered for one dialect at startup.
///
/// Holds no connections and no mutable state; share it by reference across
/// however many tasks execute the statements it hands out.
pub struct BuildQueryRegistry {
    dialect: Dialect,
    queries: Vec<Query>,
}

impl BuildQueryRegistry {
    /// Render every published statement for `dialect`.
    ///
    /// A template whose placeholders disagree with its declared arity fails
    /// construction, so a miswired catalog never reaches the executor.
    pub fn new(dialect: Dialect) -> Result<Self, StoreError> {
        let mut queries = Vec::with_capacity(Operation::ALL.len());
        for op in Operation::ALL {
            queries.push(op.template().render(&op.to_string(), dialect)?);
        }

        tracing::debug!(
            dialect = %dialect,
            statements = queries.len(),
            "rendered build query registry"
        );

        Ok(Self { dialect, queries })
    }

    /// The dialect this registry was rendered for.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Look up the rendered statement for a typed operation.
    ///
    /// Total over the operation set: every variant is rendered at
    /// construction.
    pub fn get(&self, op: impl Into<Operation>) -> &Query {
        &self.queries[op.into().index()]
    }

    /// Look up a rendered statement by its published dotted key.
    pub fn get_by_key(&self, key: &str) -> Result<&Query, StoreError> {
        Ok(self.get(Operation::from_key(key)?))
    }
}
