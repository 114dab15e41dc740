//! Ratio-ordered replica selection
//!
//! Reads go to the heaviest slave first, then to the remaining slaves in
//! descending ratio, and finally to the master. A set without slaves yields
//! no candidates and the caller uses the master directly.

use std::sync::Arc;

use dal_core::{DalBootstrap, DatabaseSetRegistry};
use dal_types::{Database, DatabaseWrapper, OperationalDatabases, Statement};
use tracing::debug;

use crate::error::RouterError;
use super::ReadWriteSplitting;

/// Replica selector over a read-only database-set registry
#[derive(Debug, Clone)]
pub struct ReplicaSelector {
    database_sets: Arc<DatabaseSetRegistry>,
}

impl ReplicaSelector {
    pub fn new(database_sets: Arc<DatabaseSetRegistry>) -> Self {
        Self { database_sets }
    }

    /// Create from a bootstrap, taking a snapshot of its database sets
    pub fn from_bootstrap(bootstrap: &DalBootstrap) -> Self {
        Self::new(Arc::new(bootstrap.database_sets().clone()))
    }

    /// Produce the candidate chain for a statement
    pub fn select_candidates<S: Statement + ?Sized>(
        &self,
        statement: &S,
    ) -> Result<OperationalDatabases, RouterError> {
        self.select_for_set(statement.database_set())
    }

    /// Produce the candidate chain for a database set by name
    pub fn select_for_set(&self, database_set: &str) -> Result<OperationalDatabases, RouterError> {
        let set = self
            .database_sets
            .get(database_set)
            .ok_or_else(|| RouterError::DatabaseSetNotFound(database_set.to_string()))?;

        let mut masters = set.masters();
        let master = match (masters.next(), masters.next()) {
            (Some(master), None) => master,
            _ => {
                return Err(RouterError::InvalidMasterCount {
                    database_set: database_set.to_string(),
                    count: set.masters().count(),
                })
            }
        };

        let mut slaves: Vec<&DatabaseWrapper> = set.slaves().collect();
        if slaves.is_empty() {
            debug!(database_set, "No slaves, master only");
            return Ok(OperationalDatabases::default());
        }

        // sort_by is stable: equal ratios keep registration order
        slaves.sort_by(|a, b| b.ratio.cmp(&a.ratio));

        let mut ordered = slaves.into_iter().map(|w| w.database.clone());
        let first_candidate = ordered.next();
        let mut other_candidates: Vec<Database> = ordered.collect();
        other_candidates.push(master.database.clone());

        debug!(
            database_set,
            first = ?first_candidate.as_ref().map(|d| d.name.as_str()),
            fallbacks = other_candidates.len(),
            "Selected replica candidates"
        );

        Ok(OperationalDatabases {
            first_candidate,
            other_candidates,
        })
    }
}

impl ReadWriteSplitting for ReplicaSelector {
    fn select_candidates(&self, statement: &dyn Statement) -> Result<OperationalDatabases, RouterError> {
        ReplicaSelector::select_candidates(self, statement)
    }

    fn name(&self) -> &'static str {
        "RatioReplica"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dal_types::{DatabaseSet, StatementContext};

    fn db(name: &str) -> Database {
        Database::new(name, format!("{}_conn", name))
    }

    fn create_selector(sets: Vec<DatabaseSet>) -> ReplicaSelector {
        ReplicaSelector::new(Arc::new(sets.into_iter().collect()))
    }

    fn names(ops: &OperationalDatabases) -> Vec<String> {
        ops.other_candidates.iter().map(|d| d.name.clone()).collect()
    }

    #[test]
    fn test_descending_ratio_order() {
        let selector = create_selector(vec![DatabaseSet::new("orders")
            .with_wrapper(DatabaseWrapper::slave(db("s10"), 10))
            .with_wrapper(DatabaseWrapper::slave(db("s50"), 50))
            .with_wrapper(DatabaseWrapper::master(db("m")))
            .with_wrapper(DatabaseWrapper::slave(db("s30"), 30))]);

        let ops = selector.select_candidates(&StatementContext::new("orders")).unwrap();

        assert_eq!(ops.first_candidate, Some(db("s50")));
        assert_eq!(names(&ops), vec!["s30", "s10", "m"]);
    }

    #[test]
    fn test_ties_keep_registration_order() {
        let selector = create_selector(vec![DatabaseSet::new("orders")
            .with_wrapper(DatabaseWrapper::master(db("m")))
            .with_wrapper(DatabaseWrapper::slave(db("a"), 20))
            .with_wrapper(DatabaseWrapper::slave(db("b"), 20))
            .with_wrapper(DatabaseWrapper::slave(db("c"), 20))]);

        let ops = selector.select_for_set("orders").unwrap();

        assert_eq!(ops.first_candidate, Some(db("a")));
        assert_eq!(names(&ops), vec!["b", "c", "m"]);
    }

    #[test]
    fn test_single_slave() {
        let selector = create_selector(vec![DatabaseSet::new("orders")
            .with_wrapper(DatabaseWrapper::master(db("m")))
            .with_wrapper(DatabaseWrapper::slave(db("s"), 1))]);

        let ops = selector.select_for_set("orders").unwrap();

        assert_eq!(ops.first_candidate, Some(db("s")));
        assert_eq!(names(&ops), vec!["m"]);
    }

    #[test]
    fn test_master_only() {
        let selector = create_selector(vec![
            DatabaseSet::new("orders").with_wrapper(DatabaseWrapper::master(db("m")))
        ]);

        let ops = selector.select_for_set("orders").unwrap();

        assert!(ops.first_candidate.is_none());
        assert!(ops.other_candidates.is_empty());
    }

    #[test]
    fn test_two_masters_rejected() {
        let selector = create_selector(vec![DatabaseSet::new("orders")
            .with_wrapper(DatabaseWrapper::master(db("m1")))
            .with_wrapper(DatabaseWrapper::master(db("m2")))
            .with_wrapper(DatabaseWrapper::slave(db("s"), 5))]);

        let result = selector.select_for_set("orders");
        assert!(matches!(
            result,
            Err(RouterError::InvalidMasterCount { ref database_set, count: 2 }) if database_set == "orders"
        ));
    }

    #[test]
    fn test_no_master_rejected() {
        let selector = create_selector(vec![
            DatabaseSet::new("orders").with_wrapper(DatabaseWrapper::slave(db("s"), 5))
        ]);

        let result = selector.select_for_set("orders");
        assert!(matches!(result, Err(RouterError::InvalidMasterCount { count: 0, .. })));
    }

    #[test]
    fn test_unknown_set() {
        let selector = create_selector(vec![]);
        let result = selector.select_for_set("nope");
        assert!(matches!(result, Err(RouterError::DatabaseSetNotFound(ref name)) if name == "nope"));
    }

    #[test]
    fn test_trait_object() {
        let selector = create_selector(vec![DatabaseSet::new("orders")
            .with_wrapper(DatabaseWrapper::master(db("m")))
            .with_wrapper(DatabaseWrapper::slave(db("s"), 1))]);
        let strategy: &dyn ReadWriteSplitting = &selector;

        let ops = strategy.select_candidates(&StatementContext::new("orders")).unwrap();
        assert_eq!(ops.candidates().count(), 2);
        assert_eq!(strategy.name(), "RatioReplica");
    }
}
