//! Repository Layer
//!
//! Typed access to the persisted master and shopping lists.

mod clock;
mod grocery_repo;

#[cfg(test)]
mod tests;

pub use clock::{Clock, ManualClock, SystemClock};
pub use grocery_repo::GroceryRepository;
