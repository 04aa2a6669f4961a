use crate::error::{Error, Result};

/// Construction parameters for a [`MemorySpace`](crate::MemorySpace).
///
/// ```rust
/// use memspace::SpaceConfig;
///
/// let config = SpaceConfig::with_capacity(1024).compact_on_release(false);
///
/// assert_eq!(config.capacity, 1024);
/// assert!(!config.compact_on_release);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpaceConfig {
  /// Size of the address space, in words.
  pub capacity: usize,
  /// Run a compaction after every release.
  pub compact_on_release: bool,
}

impl SpaceConfig {
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      capacity,
      ..Self::default()
    }
  }

  pub fn compact_on_release(
    mut self,
    enabled: bool,
  ) -> Self {
    self.compact_on_release = enabled;
    self
  }

  pub fn validate(&self) -> Result<()> {
    if self.capacity == 0 {
      return Err(Error::InvalidCapacity);
    }
    Ok(())
  }
}

impl Default for SpaceConfig {
  fn default() -> Self {
    Self {
      capacity: 100,
      compact_on_release: true,
    }
  }
}
