use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
/// Bean copier error
pub enum BeanError {
    /// A required input was absent or empty.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The target type could not be default-constructed.
    #[error("Create new instance of {type_name} failed: {reason}")]
    Instantiation {
        /// Name of the target bean type.
        type_name: String,
        /// What the factory reported.
        reason: String,
    },

    /// A converter was unable to produce a value.
    #[error("Conversion from: {0}")]
    Conversion(String),

    /// A bean rejected a field assignment.
    #[error("Property from: {0}")]
    Property(String),

    /// A date/time pattern could not be compiled or applied.
    #[error("Pattern from: {0}")]
    Pattern(String),

    /// A password digest could not be computed.
    #[error("Digest from: {0}")]
    Digest(String),

    /// The key-value store reported a failure.
    #[error("Store from: {0}")]
    Store(String),
}
