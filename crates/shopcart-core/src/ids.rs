//! # Line Item Ids
//!
//! Pluggable id generation for cart line items.
//!
//! | Strategy        | Ids                 | Use                          |
//! |-----------------|---------------------|------------------------------|
//! | `SequentialIds` | `"1"`, `"2"`, ...   | default, deterministic tests |
//! | `UuidIds`       | UUID v4 strings     | hosts that mix carts         |
//!
//! Either strategy only needs to produce ids that differ from the ones
//! currently in the cart; [`CartStore`](crate::cart::CartStore) redraws on a
//! collision.

use std::fmt;

use uuid::Uuid;

use crate::types::LineItemId;

/// Source of fresh line item ids.
pub trait IdGenerator: fmt::Debug {
    fn next_id(&mut self) -> LineItemId;
}

/// Monotonic counter starting at 1. Never repeats within a process.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    last: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continues after `last` (the next id is `last + 1`).
    pub fn starting_after(last: u64) -> Self {
        SequentialIds { last }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> LineItemId {
        self.last = self.last.wrapping_add(1);
        LineItemId::new(self.last.to_string())
    }
}

/// Random UUID v4 ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> LineItemId {
        LineItemId::new(Uuid::new_v4().to_string())
    }
}
