//! Resource limits for extension lists and the standard registry.

/// Limits applied when extensions are copied into a list or a value buffer.
///
/// Exceeding either limit is reported as
/// [`ExtensionError::AllocationFailure`](crate::core::ExtensionError::AllocationFailure)
/// and leaves the target unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionsConfig {
    /// Maximum number of extensions a list will hold.
    pub max_extensions: usize,

    /// Maximum length of a single extension value, in bytes.
    pub max_value_len: usize,
}

impl Default for ExtensionsConfig {
    fn default() -> Self {
        Self {
            max_extensions: usize::MAX,
            max_value_len: usize::MAX,
        }
    }
}

impl ExtensionsConfig {
    /// Start building a configuration from the unbounded defaults.
    pub fn builder() -> ExtensionsConfigBuilder {
        ExtensionsConfigBuilder::new()
    }
}

/// Builder for [`ExtensionsConfig`].
#[derive(Debug, Default)]
pub struct ExtensionsConfigBuilder {
    config: ExtensionsConfig,
}

impl ExtensionsConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of extensions per list.
    pub fn max_extensions(mut self, max: usize) -> Self {
        self.config.max_extensions = max;
        self
    }

    /// Set the maximum value length in bytes.
    pub fn max_value_len(mut self, max: usize) -> Self {
        self.config.max_value_len = max;
        self
    }

    /// Finish building.
    pub fn build(self) -> ExtensionsConfig {
        self.config
    }
}
