use thiserror::Error;

#[derive(Error, Debug)]
pub enum RingError {
    #[error("Invalid {field}: {value}. {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid type: Expected '{expected}', got {found}")]
    TypeMismatchError { expected: String, found: String },

    #[error("Ring is full, cannot add more boxers.")]
    CapacityError { capacity: usize },

    #[error("Boxer with ID {id} already exists in the ring")]
    DuplicateError { id: u64 },

    #[error("Boxer with name '{name}' already exists")]
    DuplicateBoxerError { name: String },

    #[error("{message}")]
    EmptyStateError { message: String },

    #[error("Boxer with ID {id} not found.")]
    BoxerNotFound { id: u64 },

    #[error("Boxer '{name}' not found.")]
    BoxerNameNotFound { name: String },

    #[error("Invalid result: {result}. Expected 'win' or 'loss'.")]
    InvalidResultError { result: String },

    #[error("Invalid sort_by parameter: {value}")]
    InvalidSortByError { value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    RingState,
    NotFound,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RingError {
    pub fn validation(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        RingError::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn empty_state(message: impl Into<String>) -> Self {
        RingError::EmptyStateError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            RingError::ValidationError { .. }
            | RingError::TypeMismatchError { .. }
            | RingError::InvalidResultError { .. }
            | RingError::InvalidSortByError { .. }
            | RingError::DuplicateBoxerError { .. } => ErrorCategory::Validation,
            RingError::CapacityError { .. }
            | RingError::DuplicateError { .. }
            | RingError::EmptyStateError { .. } => ErrorCategory::RingState,
            RingError::BoxerNotFound { .. } | RingError::BoxerNameNotFound { .. } => {
                ErrorCategory::NotFound
            }
            RingError::IoError(_) | RingError::SerializationError(_) | RingError::CsvError(_) => {
                ErrorCategory::Storage
            }
            RingError::ConfigError { .. }
            | RingError::ConfigValidationError { .. }
            | RingError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::RingState => ErrorSeverity::Medium,
            ErrorCategory::Validation | ErrorCategory::NotFound => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Validation => format!("Invalid input: {}", self),
            ErrorCategory::RingState => format!("Ring operation rejected: {}", self),
            ErrorCategory::NotFound => self.to_string(),
            ErrorCategory::Storage => format!("Could not access the boxer catalog: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RingError::ValidationError { .. } => {
                "Weight must be at least 125, height and reach positive, age between 18 and 40"
            }
            RingError::TypeMismatchError { .. } => "Check the stored boxer records for malformed entries",
            RingError::CapacityError { .. } => "Run a fight or clear the ring before adding another boxer",
            RingError::DuplicateError { .. } => "Pick two different boxers",
            RingError::DuplicateBoxerError { .. } => "Choose a name that is not already in the catalog",
            RingError::EmptyStateError { .. } => "Enter two boxers into the ring first",
            RingError::BoxerNotFound { .. } | RingError::BoxerNameNotFound { .. } => {
                "List the leaderboard or create the boxer first"
            }
            RingError::InvalidResultError { .. } => "Use 'win' or 'loss'",
            RingError::InvalidSortByError { .. } => "Use 'wins' or 'win_pct'",
            RingError::IoError(_) => "Check that the store path exists and is writable",
            RingError::SerializationError(_) => "The store file may be corrupt; restore it or start a new one",
            RingError::CsvError(_) => "Check the CSV output path",
            RingError::ConfigError { .. }
            | RingError::ConfigValidationError { .. }
            | RingError::InvalidConfigValueError { .. } => "Review the configuration file",
        }
    }
}

pub type Result<T> = std::result::Result<T, RingError>;
