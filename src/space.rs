use std::fmt;

use log::{debug, trace, warn};

use crate::{
  block::Block,
  config::SpaceConfig,
  error::{Error, Result},
  list::BlockList,
};

/// A fixed-size address space split between a free list and an allocated
/// list.
///
/// Both lists keep insertion order. Freed blocks go to the tail of the free
/// list, so first-fit prefers older free blocks over recently released ones,
/// and compaction only merges blocks that are neighbours in the list.
pub struct MemorySpace {
  config: SpaceConfig,
  free: BlockList,
  allocated: BlockList,
}

impl MemorySpace {
  pub fn new(capacity: usize) -> Result<Self> {
    Self::with_config(SpaceConfig::with_capacity(capacity))
  }

  pub fn with_config(config: SpaceConfig) -> Result<Self> {
    config.validate()?;

    let mut free = BlockList::new();
    free.push_back(Block::new(0, config.capacity));

    debug!("Created memory space of {} words", config.capacity);

    Ok(Self {
      config,
      free,
      allocated: BlockList::new(),
    })
  }

  pub fn capacity(&self) -> usize {
    self.config.capacity
  }

  pub fn config(&self) -> &SpaceConfig {
    &self.config
  }

  pub fn free_blocks(&self) -> &BlockList {
    &self.free
  }

  pub fn allocated_blocks(&self) -> &BlockList {
    &self.allocated
  }

  pub fn free_words(&self) -> usize {
    self.free.iter().map(|block| block.length).sum()
  }

  pub fn allocated_words(&self) -> usize {
    self.allocated.iter().map(|block| block.length).sum()
  }

  /// Length of the largest free block, or 0 when nothing is free.
  pub fn largest_free_block(&self) -> usize {
    self
      .free
      .iter()
      .map(|block| block.length)
      .max()
      .unwrap_or(0)
  }

  fn find_free_block(
    &self,
    length: usize,
  ) -> Option<usize> {
    self.free.position(|block| block.length >= length)
  }

  /// Allocates `length` words from the first free block large enough to hold
  /// them and returns the base address.
  ///
  /// The new block is appended to the allocated list. The free block it came
  /// from is dropped on an exact fit, otherwise it shrinks from the front and
  /// keeps its place in the free list.
  ///
  /// Fails with [`Error::NoSpace`] when no single free block is large enough.
  /// Nothing is modified in that case and no compaction is attempted.
  pub fn allocate(
    &mut self,
    length: usize,
  ) -> Result<usize> {
    if length == 0 {
      return Err(Error::InvalidLength);
    }

    let Some(index) = self.find_free_block(length) else {
      let largest_free = self.largest_free_block();
      debug!(
        "No free block for {} words (largest free block is {})",
        length, largest_free
      );
      return Err(Error::NoSpace {
        requested: length,
        largest_free,
      });
    };

    let found = self.free.get_mut(index)?;
    let block = Block::new(found.base, length);

    if found.length == length {
      self.free.remove_at(index)?;
    } else {
      found.base += length;
      found.length -= length;
    }

    self.allocated.push_back(block);

    debug!("Allocated {} from free block #{}", block, index);

    Ok(block.base)
  }

  /// Returns the allocated block starting at `address` to the tail of the
  /// free list, then compacts (unless disabled in the config).
  ///
  /// An address that is neither allocated nor free is ignored, and still
  /// triggers the compaction. An address that already starts a free block is
  /// rejected with [`Error::DoubleFree`] and nothing changes.
  pub fn release(
    &mut self,
    address: usize,
  ) -> Result<()> {
    if self.free.position(|block| block.base == address).is_some() {
      warn!("Rejected double free of address {}", address);
      return Err(Error::DoubleFree(address));
    }

    match self.allocated.position(|block| block.base == address) {
      Some(index) => {
        let block = self.allocated.remove_at(index)?;
        self.free.push_back(block);

        debug!("Released {}", block);
      }
      None => debug!("Address {} is not allocated, nothing to release", address),
    }

    if self.config.compact_on_release {
      self.compact()?;
    }

    Ok(())
  }

  /// Merges free blocks that are both neighbours in the free list and
  /// contiguous in the address space. Returns the number of merges.
  ///
  /// After every merge the scan restarts from the head; it stops once a full
  /// scan finds nothing to merge. Blocks that touch in the address space but
  /// sit apart in the list stay separate.
  pub fn compact(&mut self) -> Result<usize> {
    let mut merges = 0;

    while let Some(index) = self
      .free
      .find_adjacent_pair(|current, next| current.is_adjacent_to(next))
    {
      let next = self.free.remove_at(index + 1)?;
      let current = self.free.get_mut(index)?;

      current.length += next.length;
      merges += 1;

      trace!("Merged {} into free block #{} -> {}", next, index, current);
    }

    if merges > 0 {
      debug!(
        "Compaction merged {} blocks, {} free blocks left",
        merges,
        self.free.len()
      );
    }

    Ok(merges)
  }

  /// Checks that the free and allocated blocks together tile
  /// `[0, capacity)` with no gaps and no overlaps.
  pub fn check_invariants(&self) -> Result<()> {
    let mut blocks: Vec<Block> = self
      .free
      .iter()
      .chain(self.allocated.iter())
      .copied()
      .collect();

    if let Some(empty) = blocks.iter().find(|block| block.length == 0) {
      return Err(Error::Corrupted(format!("empty block {}", empty)));
    }

    blocks.sort_unstable_by_key(|block| block.base);

    let mut expected = 0;
    for block in &blocks {
      if block.base < expected {
        return Err(Error::Corrupted(format!(
          "block {} overlaps the block ending at {}",
          block, expected
        )));
      }
      if block.base > expected {
        return Err(Error::Corrupted(format!(
          "words {}..{} are neither free nor allocated",
          expected, block.base
        )));
      }
      expected = block.end();
    }

    if expected != self.capacity() {
      return Err(Error::Corrupted(format!(
        "blocks cover {} words, capacity is {}",
        expected,
        self.capacity()
      )));
    }

    Ok(())
  }
}

/// The free list, a newline, then the allocated list.
impl fmt::Display for MemorySpace {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    write!(f, "{}\n{}", self.free, self.allocated)
  }
}

impl fmt::Debug for MemorySpace {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    f.debug_struct("MemorySpace")
      .field("capacity", &self.config.capacity)
      .field("free", &self.free)
      .field("allocated", &self.allocated)
      .finish()
  }
}
