use memspace::{MemorySpace, Result};

/// Prints the free list and the allocated list under a label.
fn print_state(
  label: &str,
  space: &MemorySpace,
) {
  println!("\n[{}]\n{}", label, space);
}

fn main() -> Result<()> {
  // RUST_LOG=debug shows every allocation, release and merge.
  env_logger::init();

  let mut space = MemorySpace::new(100)?;
  print_state("start", &space);

  // --------------------------------------------------------------------
  // 1) Two allocations carve the single free block from the front.
  // --------------------------------------------------------------------
  let first = space.allocate(30)?;
  let second = space.allocate(40)?;
  println!("\n[1] allocate(30) = {}, allocate(40) = {}", first, second);
  print_state("1", &space);

  // --------------------------------------------------------------------
  // 2) Releasing the first block appends it to the tail of the free list.
  // --------------------------------------------------------------------
  space.release(first)?;
  print_state("2", &space);

  // --------------------------------------------------------------------
  // 3) First-fit walks the free list in order, so (70 , 30) wins over the
  //    lower (0 , 30).
  // --------------------------------------------------------------------
  let third = space.allocate(10)?;
  println!("\n[3] allocate(10) = {}", third);
  print_state("3", &space);

  // --------------------------------------------------------------------
  // 4) Nothing is large enough for 60 words. The space is left untouched.
  // --------------------------------------------------------------------
  match space.allocate(60) {
    Ok(address) => println!("\n[4] allocate(60) = {}", address),
    Err(err) if err.is_no_space() => println!("\n[4] allocate(60) failed: {}", err),
    Err(err) => return Err(err),
  }

  // --------------------------------------------------------------------
  // 5) Releasing the same address twice is rejected.
  // --------------------------------------------------------------------
  if let Err(err) = space.release(first) {
    println!("\n[5] release({}) again: {}", first, err);
  }

  // --------------------------------------------------------------------
  // 6) Release everything and compact.
  // --------------------------------------------------------------------
  space.release(second)?;
  space.release(third)?;
  let merges = space.compact()?;
  println!("\n[6] explicit compact merged {} more blocks", merges);
  print_state("6", &space);

  space.check_invariants()?;
  println!(
    "\n[7] free = {} words, allocated = {} words, largest free block = {}",
    space.free_words(),
    space.allocated_words(),
    space.largest_free_block()
  );

  Ok(())
}
