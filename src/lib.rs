//! # BuildStore - Build Query Registry
//!
//! The query surface for the builds entity of a CI/CD persistence layer:
//! one canonical catalog of parameterized SQL statements, rendered for the
//! target database dialect and exposed through a closed set of operations.
//!
//! ## Layout
//!
//! - **builds**: the statement catalog, operation set, and registry
//! - **dialect / template**: placeholder-style adaptation between Postgres
//!   (`$1, $2, ...`) and SQLite (`?`)
//! - **config**: database settings read from the environment
//!
//! The registry holds no connections and performs no I/O. Build it once at
//! startup and pass it to whichever repository layer executes the
//! statements:
//!
//! ```
//! use build_store::{BuildQueryRegistry, Dialect, ListOp};
//!
//! # fn example() -> Result<(), build_store::StoreError> {
//! let registry = BuildQueryRegistry::new(Dialect::Postgres)?;
//! let query = registry.get(ListOp::Repo);
//! assert_eq!(query.arity(), 3); // repo_id, limit, offset
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod builds;
pub mod config;
pub mod dialect;
pub mod errors;
pub mod template;

// Re-export key types explicitly to avoid ambiguity
pub use builds::{
    BuildQueryRegistry, BuildStatus, DeleteOp, ListOp, Operation, SelectOp, StaleBuild,
};
pub use config::DatabaseConfig;
pub use dialect::Dialect;
pub use errors::StoreError;
pub use template::{Query, QueryTemplate};
