//! Error type for configuration loading and lookup.
//!
//! All errors here are fatal at load time: the registry is static, so there
//! is nothing to retry and no recovery path.

/// Error raised while constructing or querying the parameter registry.
#[derive(Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A derived value could not be computed consistently
    /// (e.g. zero bin count, inverted or non-positive grid bounds).
    Invalid(String),
    /// A parameter name or frequency that is not registered.
    UnknownParameter(String),
}

impl ConfigError {
    pub fn invalid(detail: impl Into<String>) -> Self {
        ConfigError::Invalid(detail.into())
    }

    pub fn unknown(name: impl Into<String>) -> Self {
        ConfigError::UnknownParameter(name.into())
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid(detail) => write!(f, "invalid configuration: {detail}"),
            ConfigError::UnknownParameter(name) => write!(f, "unknown parameter: {name}"),
        }
    }
}

impl std::fmt::Debug for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid(detail) => f.debug_tuple("Invalid").field(detail).finish(),
            ConfigError::UnknownParameter(name) => {
                f.debug_tuple("UnknownParameter").field(name).finish()
            }
        }
    }
}

impl std::error::Error for ConfigError {}
