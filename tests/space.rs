use memspace::{Block, Error, MemorySpace, SpaceConfig};
use test_log::test;

fn free_list(space: &MemorySpace) -> Vec<Block> {
  space.free_blocks().iter().copied().collect()
}

fn allocated_list(space: &MemorySpace) -> Vec<Block> {
  space.allocated_blocks().iter().copied().collect()
}

fn without_compaction(capacity: usize) -> MemorySpace {
  MemorySpace::with_config(SpaceConfig::with_capacity(capacity).compact_on_release(false)).unwrap()
}

#[test]
fn test_split_allocation() {
  let mut space = MemorySpace::new(20).unwrap();

  assert_eq!(space.allocate(17), Ok(0));

  assert_eq!(free_list(&space), vec![Block::new(17, 3)]);
  assert_eq!(allocated_list(&space), vec![Block::new(0, 17)]);
}

#[test]
fn test_exact_fit_removes_free_block() {
  let mut space = without_compaction(30);
  space.allocate(10).unwrap();
  space.allocate(20).unwrap();
  space.release(0).unwrap();

  assert_eq!(space.free_blocks().len(), 1);

  assert_eq!(space.allocate(10), Ok(0));

  assert!(space.free_blocks().is_empty());
  assert_eq!(space.allocated_blocks().len(), 2);
  assert_eq!(space.allocated_blocks().last(), Some(&Block::new(0, 10)));
}

#[test]
fn test_no_space_leaves_state_unchanged() {
  let mut space = MemorySpace::new(50).unwrap();
  space.allocate(20).unwrap();
  space.allocate(20).unwrap();
  let before = space.to_string();

  let err = space.allocate(11).unwrap_err();

  assert_eq!(
    err,
    Error::NoSpace {
      requested: 11,
      largest_free: 10
    }
  );
  assert!(err.is_no_space());
  assert_eq!(space.to_string(), before);
}

#[test]
fn test_first_fit_prefers_older_free_block() {
  let mut space = MemorySpace::new(100).unwrap();

  assert_eq!(space.allocate(30), Ok(0));
  assert_eq!(space.allocate(40), Ok(30));

  space.release(0).unwrap();
  assert_eq!(
    free_list(&space),
    vec![Block::new(70, 30), Block::new(0, 30)]
  );

  // (0 , 30) is free and lower, but it sits behind (70 , 30) in the free list.
  assert_eq!(space.allocate(10), Ok(70));
  assert_eq!(
    free_list(&space),
    vec![Block::new(80, 20), Block::new(0, 30)]
  );
}

#[test]
fn test_release_twice_is_double_free() {
  let mut space = MemorySpace::new(100).unwrap();
  space.allocate(30).unwrap();
  space.allocate(40).unwrap();

  space.release(0).unwrap();
  let before = space.to_string();

  assert_eq!(space.release(0), Err(Error::DoubleFree(0)));
  assert_eq!(space.to_string(), before);
}

#[test]
fn test_release_of_unknown_address_is_ignored() {
  let mut space = MemorySpace::new(40).unwrap();
  space.allocate(10).unwrap();

  assert_eq!(space.release(5), Ok(()));
  assert_eq!(space.release(1000), Ok(()));

  assert_eq!(allocated_list(&space), vec![Block::new(0, 10)]);
  assert_eq!(free_list(&space), vec![Block::new(10, 30)]);
}

#[test]
fn test_release_of_unknown_address_still_compacts() {
  let mut space = MemorySpace::new(30).unwrap();
  space.allocate(5).unwrap();
  space.allocate(5).unwrap();
  space.allocate(10).unwrap();
  space.allocate(10).unwrap();

  space.release(0).unwrap();
  space.release(20).unwrap();
  space.release(5).unwrap();
  assert_eq!(
    free_list(&space),
    vec![Block::new(0, 5), Block::new(20, 10), Block::new(5, 5)]
  );

  // Taking (20 , 10) by exact fit makes (0 , 5) and (5 , 5) list neighbours.
  // Allocation never compacts, so they stay split until the next release.
  assert_eq!(space.allocate(10), Ok(20));
  assert_eq!(free_list(&space), vec![Block::new(0, 5), Block::new(5, 5)]);

  assert_eq!(space.release(99), Ok(()));
  assert_eq!(free_list(&space), vec![Block::new(0, 10)]);
}

#[test]
fn test_compact_merges_list_neighbours() {
  let mut space = without_compaction(25);
  space.allocate(5).unwrap();
  space.allocate(5).unwrap();
  space.allocate(10).unwrap();
  space.allocate(5).unwrap();

  space.release(0).unwrap();
  space.release(5).unwrap();
  space.release(20).unwrap();
  assert_eq!(
    free_list(&space),
    vec![Block::new(0, 5), Block::new(5, 5), Block::new(20, 5)]
  );

  assert_eq!(space.compact(), Ok(1));
  assert_eq!(
    free_list(&space),
    vec![Block::new(0, 10), Block::new(20, 5)]
  );

  // Already at a fixed point.
  assert_eq!(space.compact(), Ok(0));
  assert!(space.check_invariants().is_ok());
}

#[test]
fn test_compact_misses_blocks_apart_in_list() {
  let mut space = MemorySpace::new(30).unwrap();
  space.allocate(10).unwrap();
  space.allocate(10).unwrap();
  space.allocate(10).unwrap();

  space.release(20).unwrap();
  space.release(0).unwrap();
  space.release(10).unwrap();

  // The whole space is free and contiguous, yet it stays in two pieces
  // because (20 , 10) comes before (0 , 20) in the free list.
  assert_eq!(
    free_list(&space),
    vec![Block::new(20, 10), Block::new(0, 20)]
  );
  assert!(space.allocated_blocks().is_empty());
  assert!(space.allocate(30).unwrap_err().is_no_space());
  assert_eq!(space.compact(), Ok(0));
}

#[test]
fn test_words_add_up_to_capacity() {
  let mut space = MemorySpace::new(64).unwrap();
  let mut live = Vec::new();

  for length in [7, 13, 1, 20, 9] {
    live.push(space.allocate(length).unwrap());
    assert_eq!(space.free_words() + space.allocated_words(), 64);
  }

  for address in live.into_iter().rev().step_by(2) {
    space.release(address).unwrap();
    assert_eq!(space.free_words() + space.allocated_words(), 64);
    assert!(space.check_invariants().is_ok());
  }
}

#[test]
fn test_invalid_arguments() {
  assert_eq!(MemorySpace::new(0).unwrap_err(), Error::InvalidCapacity);

  let mut space = MemorySpace::new(8).unwrap();
  assert_eq!(space.allocate(0), Err(Error::InvalidLength));
}

#[test]
fn test_render() {
  let mut space = MemorySpace::new(100).unwrap();
  space.allocate(30).unwrap();
  space.allocate(40).unwrap();
  space.release(0).unwrap();

  assert_eq!(space.to_string(), "(70 , 30) (0 , 30) \n(30 , 40) ");
}
