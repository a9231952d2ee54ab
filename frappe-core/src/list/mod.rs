//! List building blocks: batch generations, completion tracking, pagination

mod accumulator;
mod generation;
mod paginator;

pub use accumulator::{BatchAccumulator, Resolution, Resolved};
pub use generation::{BatchId, Generation};
pub use paginator::{PagerControl, Paginator};
