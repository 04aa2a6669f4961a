use std::fmt;

/// A contiguous range of words, `[base, base + length)`.
///
/// Two blocks are equal when both fields match. Equality is identity for the
/// lists holding them, not a geometric test: use [`Block::overlaps`] for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
  pub base: usize,
  pub length: usize,
}

impl Block {
  pub fn new(
    base: usize,
    length: usize,
  ) -> Self {
    Self { base, length }
  }

  /// One past the last word of the range.
  pub fn end(&self) -> usize {
    self.base + self.length
  }

  /// True when `other` starts exactly where `self` ends.
  pub fn is_adjacent_to(
    &self,
    other: &Block,
  ) -> bool {
    self.end() == other.base
  }

  pub fn overlaps(
    &self,
    other: &Block,
  ) -> bool {
    self.base < other.end() && other.base < self.end()
  }

  pub fn contains(
    &self,
    address: usize,
  ) -> bool {
    (self.base..self.end()).contains(&address)
  }
}

impl fmt::Display for Block {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    write!(f, "({} , {})", self.base, self.length)
  }
}
