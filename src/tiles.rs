//! Basic types for working with letter tiles.
mod cell;
mod placement;
mod play;

/// Number of tiles a play keeps inline before spilling to the heap
pub(super) const RACK: usize = 7;
pub use cell::Cell;
pub use placement::Placement;
pub use play::Play;
