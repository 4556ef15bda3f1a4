use std::sync::Mutex;

use snakeql_core::{
    LogicalName, NamingStrategy, PhysicalName, QuoteAgnosticStrategy, Result,
};

/// Delegates to the quote-agnostic strategy and records every resolution
/// call, so tests can assert how often the derivation pass consults the
/// policy.
pub struct RecordingStrategy {
    inner: QuoteAgnosticStrategy,
    table_calls: Mutex<Vec<String>>,
    column_calls: Mutex<Vec<String>>,
}

impl RecordingStrategy {
    pub fn new() -> Self {
        Self {
            inner: QuoteAgnosticStrategy,
            table_calls: Mutex::new(Vec::new()),
            column_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn table_calls(&self) -> Vec<String> {
        self.table_calls.lock().expect("lock should not be poisoned").clone()
    }

    pub fn column_calls(&self) -> Vec<String> {
        self.column_calls.lock().expect("lock should not be poisoned").clone()
    }
}

impl NamingStrategy for RecordingStrategy {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn resolve_table_name(&self, logical: &LogicalName) -> Result<PhysicalName> {
        self.table_calls
            .lock()
            .expect("lock should not be poisoned")
            .push(logical.text.clone());
        self.inner.resolve_table_name(logical)
    }

    fn resolve_column_name(&self, logical: &LogicalName) -> Result<PhysicalName> {
        self.column_calls
            .lock()
            .expect("lock should not be poisoned")
            .push(logical.text.clone());
        self.inner.resolve_column_name(logical)
    }
}
