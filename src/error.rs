use std::path::PathBuf;

/// Usage text printed when no valid update method is selected.
pub const USAGE: &str = "\
Usage: life-strategies -m <method_number>
Flags:
    -m :  Method used for updating state.
    Values
        1 : update cells sequentially.
        2 : update all cells using one task per cell.
        3 : update each row using one task per row.
        4 : update using workers, one thread per worker. Each worker processes one row at a time.";

/// Errors raised at the process boundary.
///
/// The update engine itself cannot fail; these cover selecting a strategy,
/// loading configuration and seeding the starting grid.
#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    #[error("no update method selected\n{usage}", usage = USAGE)]
    MissingMethod,

    #[error("unknown update method {0}\n{usage}", usage = USAGE)]
    UnknownMethod(u32),

    #[error("unknown strategy name '{0}'\n{usage}", usage = USAGE)]
    UnknownStrategy(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("pattern '{pattern}' ({height}x{width}) does not fit at ({row}, {col}) in a {rows}x{cols} grid")]
    PatternOutOfBounds {
        pattern: &'static str,
        height: usize,
        width: usize,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

impl LifeError {
    /// Usage errors are reported with the usage text and a distinct exit code
    pub const fn is_usage(&self) -> bool {
        matches!(
            self,
            LifeError::MissingMethod | LifeError::UnknownMethod(_) | LifeError::UnknownStrategy(_)
        )
    }

    pub const fn exit_code(&self) -> i32 {
        if self.is_usage() { 2 } else { 1 }
    }
}

pub type Result<T> = std::result::Result<T, LifeError>;
