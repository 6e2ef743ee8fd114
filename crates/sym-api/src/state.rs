use std::sync::Arc;

use sym_db::SymDb;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<SymDb>,
    /// Store each `/analyze` request as a symptom session.
    pub record_sessions: bool,
}

impl AppState {
    #[must_use]
    pub const fn new(db: Arc<SymDb>, record_sessions: bool) -> Self {
        Self {
            db,
            record_sessions,
        }
    }
}
