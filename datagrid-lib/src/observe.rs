//! Observability hook for contained cell failures.

use log::debug;
use log::warn;

use crate::error::CellError;

/// Receives per-cell failures the grid contained.
///
/// The grid never propagates a failing value getter, comparator or
/// unparsable draft. It reports them here and carries on with an empty value.
pub trait GridObserver: Send + Sync {
    /// Called once per contained failure.
    fn on_cell_error(&self, error: &CellError);
}

/// Default observer: forwards failures to the `log` facade.
///
/// Resolution failures are logged at `warn`, format failures at `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl GridObserver for LogObserver {
    fn on_cell_error(&self, error: &CellError) {
        match error {
            CellError::Resolution { .. } => warn!("{}", error),
            CellError::Format { .. } => debug!("{}", error),
            CellError::Validation { .. } => debug!("{}", error),
        }
    }
}
