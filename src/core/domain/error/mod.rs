use thiserror::Error;

/// The main error type for login probe operations.
///
/// Every fault the probe can hit ends up here: transport failures,
/// undecodable responses, invalid configuration and console write errors.
/// None of them are recovered from; they propagate straight to `main`.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// Represents errors that occur while reaching the login endpoint
    ///
    /// # Fields
    /// * `0` - A description of what went wrong during the connection attempt
    #[error("Connection error: {0}")]
    Connection(String),

    /// Represents a successful response whose body is not valid JSON
    ///
    /// # Fields
    /// * `0` - A description of the decoding failure
    #[error("Decode error: {0}")]
    Decode(String),

    /// Represents validation failures of the probe configuration
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Represents failures while writing the console transcript
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Specialized error type for validation failures.
///
/// This enum provides detailed context about why a validation
/// failed, including field-specific errors and format violations.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Type alias for Results that may fail with a ProbeError
pub type ProbeResult<T> = Result<T, ProbeError>;
