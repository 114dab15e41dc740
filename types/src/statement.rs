//! Statement view used for routing
//!
//! The query object model lives elsewhere. Routing only needs to know which
//! logical database set a statement targets.

/// Anything that can be routed to a database set
pub trait Statement {
    /// Logical database-set name this statement runs against
    fn database_set(&self) -> &str;
}

/// Minimal statement carrying only its routing target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementContext {
    pub database_set: String,
}

impl StatementContext {
    pub fn new(database_set: impl Into<String>) -> Self {
        Self {
            database_set: database_set.into(),
        }
    }
}

impl Statement for StatementContext {
    fn database_set(&self) -> &str {
        &self.database_set
    }
}
