use std::fmt;

use slab::Slab;

use crate::{
  block::Block,
  error::{Error, Result},
};

struct Node {
  block: Block,
  next: Option<usize>,
}

/// A singly-linked, index-addressable sequence of [`Block`]s.
///
/// Nodes live in a slot arena and link to their successor by slot key, so a
/// removal frees its slot for the next insertion instead of shrinking
/// anything. Positions are list positions, counted from the head; slot keys
/// never leave this module.
///
/// ```text
///   head                          tail
///    │                              │
///    ▼                              ▼
///   ┌───────┐    ┌───────┐    ┌───────┐
///   │ (0,5) │───▶│(20,5) │───▶│ (5,5) │───▶ ∅
///   └───────┘    └───────┘    └───────┘
///    slot 2       slot 0       slot 1
/// ```
///
/// Pushing at either end is O(1). Everything addressed by position or by
/// block equality walks from the head and is O(n).
pub struct BlockList {
  nodes: Slab<Node>,
  head: Option<usize>,
  tail: Option<usize>,
}

impl BlockList {
  pub fn new() -> Self {
    Self {
      nodes: Slab::new(),
      head: None,
      tail: None,
    }
  }

  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.head.is_none()
  }

  pub fn first(&self) -> Option<&Block> {
    self.head.map(|key| &self.nodes[key].block)
  }

  pub fn last(&self) -> Option<&Block> {
    self.tail.map(|key| &self.nodes[key].block)
  }

  /// Slot of the node at `index`, walking from the head.
  ///
  /// `index == len` is accepted and yields `None`: the position one past the
  /// tail, where an append would land.
  fn node(
    &self,
    index: usize,
  ) -> Result<Option<usize>> {
    if index > self.len() {
      return Err(self.out_of_range(index));
    }

    let mut current = self.head;
    for _ in 0..index {
      current = current.and_then(|key| self.nodes[key].next);
    }

    Ok(current)
  }

  fn slot(
    &self,
    index: usize,
  ) -> Result<usize> {
    self.node(index)?.ok_or_else(|| self.out_of_range(index))
  }

  fn out_of_range(
    &self,
    index: usize,
  ) -> Error {
    Error::IndexOutOfRange {
      index,
      len: self.len(),
    }
  }

  pub fn get(
    &self,
    index: usize,
  ) -> Result<&Block> {
    let key = self.slot(index)?;
    Ok(&self.nodes[key].block)
  }

  pub fn get_mut(
    &mut self,
    index: usize,
  ) -> Result<&mut Block> {
    let key = self.slot(index)?;
    Ok(&mut self.nodes[key].block)
  }

  /// Inserts `block` so that it ends up at position `index`.
  ///
  /// `0` and `len()` link directly at the head and tail. Any other position
  /// splices after the node at `index - 1`.
  pub fn insert(
    &mut self,
    index: usize,
    block: Block,
  ) -> Result<()> {
    let len = self.len();

    if index > len {
      return Err(self.out_of_range(index));
    }

    if index == 0 {
      self.push_front(block);
    } else if index == len {
      self.push_back(block);
    } else {
      let prev = self.slot(index - 1)?;
      let next = self.nodes[prev].next;
      let key = self.nodes.insert(Node { block, next });

      self.nodes[prev].next = Some(key);
    }

    Ok(())
  }

  pub fn push_front(
    &mut self,
    block: Block,
  ) {
    let key = self.nodes.insert(Node {
      block,
      next: self.head,
    });

    self.head = Some(key);
    if self.tail.is_none() {
      self.tail = Some(key);
    }
  }

  pub fn push_back(
    &mut self,
    block: Block,
  ) {
    let key = self.nodes.insert(Node { block, next: None });

    match self.tail {
      Some(tail) => self.nodes[tail].next = Some(key),
      None => self.head = Some(key),
    }
    self.tail = Some(key);
  }

  /// Position of the first block equal to `block`.
  pub fn index_of(
    &self,
    block: &Block,
  ) -> Option<usize> {
    self.position(|candidate| candidate == block)
  }

  pub fn position<P>(
    &self,
    predicate: P,
  ) -> Option<usize>
  where
    P: FnMut(&Block) -> bool,
  {
    self.iter().position(predicate)
  }

  /// Position `i` of the first pair of list neighbours `(i, i + 1)` matching
  /// `predicate`.
  pub fn find_adjacent_pair<P>(
    &self,
    mut predicate: P,
  ) -> Option<usize>
  where
    P: FnMut(&Block, &Block) -> bool,
  {
    self
      .iter()
      .zip(self.iter().skip(1))
      .position(|(current, next)| predicate(current, next))
  }

  /// Removes the first block equal to `block`.
  pub fn remove(
    &mut self,
    block: &Block,
  ) -> Result<Block> {
    let index = self.index_of(block).ok_or(Error::NotFound(*block))?;
    self.remove_at(index)
  }

  pub fn remove_at(
    &mut self,
    index: usize,
  ) -> Result<Block> {
    if index >= self.len() {
      return Err(self.out_of_range(index));
    }

    let key = if index == 0 {
      let key = self.slot(0)?;

      self.head = self.nodes[key].next;
      if self.head.is_none() {
        self.tail = None;
      }

      key
    } else {
      let prev = self.slot(index - 1)?;
      let Some(key) = self.nodes[prev].next else {
        return Err(self.out_of_range(index));
      };

      self.nodes[prev].next = self.nodes[key].next;
      if self.tail == Some(key) {
        self.tail = Some(prev);
      }

      key
    };

    Ok(self.nodes.remove(key).block)
  }

  pub fn clear(&mut self) {
    self.nodes.clear();
    self.head = None;
    self.tail = None;
  }

  pub fn iter(&self) -> Iter<'_> {
    Iter {
      nodes: &self.nodes,
      cursor: self.head,
      remaining: self.len(),
    }
  }
}

impl Default for BlockList {
  fn default() -> Self {
    Self::new()
  }
}

/// Forward traversal in list order. Each call to [`BlockList::iter`] starts
/// again from the head.
pub struct Iter<'a> {
  nodes: &'a Slab<Node>,
  cursor: Option<usize>,
  remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
  type Item = &'a Block;

  fn next(&mut self) -> Option<Self::Item> {
    let nodes = self.nodes;
    let node = &nodes[self.cursor?];

    self.cursor = node.next;
    self.remaining -= 1;

    Some(&node.block)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a BlockList {
  type Item = &'a Block;
  type IntoIter = Iter<'a>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl FromIterator<Block> for BlockList {
  fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
    let mut list = BlockList::new();
    list.extend(iter);
    list
  }
}

impl Extend<Block> for BlockList {
  fn extend<I: IntoIterator<Item = Block>>(
    &mut self,
    iter: I,
  ) {
    for block in iter {
      self.push_back(block);
    }
  }
}

impl PartialEq for BlockList {
  fn eq(
    &self,
    other: &Self,
  ) -> bool {
    self.len() == other.len() && self.iter().eq(other.iter())
  }
}

impl Eq for BlockList {}

impl fmt::Debug for BlockList {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

/// Every block followed by a single space, head first.
impl fmt::Display for BlockList {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    for block in self {
      write!(f, "{} ", block)?;
    }
    Ok(())
  }
}
