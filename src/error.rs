use crate::block::Block;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  #[error("index {index} is out of range for a list of length {len}")]
  IndexOutOfRange { index: usize, len: usize },

  #[error("block {0} is not in the list")]
  NotFound(Block),

  /// No free block is large enough. Not fatal: the caller may release
  /// memory or compact and try again.
  #[error("no free block can hold {requested} words (largest free block is {largest_free})")]
  NoSpace { requested: usize, largest_free: usize },

  #[error("address {0} is already free")]
  DoubleFree(usize),

  #[error("allocation length must be positive")]
  InvalidLength,

  #[error("capacity must be positive")]
  InvalidCapacity,

  #[error("memory space is corrupted: {0}")]
  Corrupted(String),
}

impl Error {
  pub fn is_no_space(&self) -> bool {
    matches!(self, Error::NoSpace { .. })
  }
}

pub type Result<T> = std::result::Result<T, Error>;
