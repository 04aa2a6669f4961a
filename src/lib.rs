//! # memspace - A Simulated First-Fit Memory Space
//!
//! This crate simulates an allocator managing one linear address space of a
//! fixed number of words. The space is tracked with two lists of address
//! ranges: the blocks currently free and the blocks currently allocated.
//!
//! ## Overview
//!
//! ```text
//!   Memory Space (capacity 100):
//!
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │ 0            30                      70                          100 │
//!   │ ┌─────────────┬───────────────────────┬────────────────────────────┐ │
//!   │ │  free       │  allocated            │  free                      │ │
//!   │ │  (0 , 30)   │  (30 , 40)            │  (70 , 30)                 │ │
//!   │ └─────────────┴───────────────────────┴────────────────────────────┘ │
//!   │                                                                      │
//!   │   free list:      (70 , 30) ──▶ (0 , 30)      insertion order,       │
//!   │   allocated list: (30 , 40)                   not address order      │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Allocation is **first-fit** over the free list in list order. Released
//! blocks are appended to the tail of the free list, so in the picture above
//! the next small allocation is served from `(70 , 30)`, not from `(0 , 30)`.
//!
//! ## Crate Structure
//!
//! ```text
//!   memspace
//!   ├── block      - Block, one address range
//!   ├── list       - BlockList, singly-linked list of blocks in a slot arena
//!   ├── config     - SpaceConfig
//!   ├── error      - Error and Result
//!   └── space      - MemorySpace: allocate, release, compact
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use memspace::MemorySpace;
//!
//! let mut space = MemorySpace::new(100).unwrap();
//!
//! assert_eq!(space.allocate(30), Ok(0));
//! assert_eq!(space.allocate(40), Ok(30));
//!
//! space.release(0).unwrap();
//!
//! // The freed block went to the tail of the free list.
//! assert_eq!(space.allocate(10), Ok(70));
//! ```
//!
//! ## How It Works
//!
//! A request for `n` words takes the first free block of at least `n` words:
//!
//! ```text
//!   Split (found block longer than n):
//!
//!   before:  free (250 , 20)
//!   after:   allocated (250 , 17)   free (267 , 3)   <- same list position
//!
//!   Exact fit: the free block leaves the free list entirely.
//! ```
//!
//! Releasing moves the block to the end of the free list and compacts.
//! Compaction merges a free block with its **list successor** when the two
//! touch in memory, repeating until nothing merges:
//!
//! ```text
//!   (0 , 5) ──▶ (5 , 5) ──▶ (20 , 5)      =>      (0 , 10) ──▶ (20 , 5)
//! ```
//!
//! Blocks that touch in memory but are not list neighbours are left alone.
//!
//! ## Limitations
//!
//! - **Single-threaded only**: mutation needs `&mut`, wrap it in a lock to share
//! - **No implicit compaction**: a failed allocation never compacts on its own
//! - **Word granularity**: no alignment or size classes

mod block;
mod config;
mod error;
mod list;
mod space;

pub use block::Block;
pub use config::SpaceConfig;
pub use error::{Error, Result};
pub use list::{BlockList, Iter};
pub use space::MemorySpace;
