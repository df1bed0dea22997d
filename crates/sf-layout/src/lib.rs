//! sf-layout: placing transducer heads on tank surfaces.
//!
//! Provides:
//! - Head sequences (one label per head, shuffled reproducibly)
//! - Staggered grid placement on a rectangular surface
//! - Mounting views (tank bottom, or two side-wall halves)
//! - A marker sink seam for whatever draws the result
//!
//! Placement is a pure function: identical inputs give identical markers.

pub mod heads;
pub mod mount;
pub mod placement;
pub mod render;

// Re-exports
pub use heads::{
    DEFAULT_SHUFFLE_SEED, HeadShuffle, NoShuffle, SeededShuffle, build_head_sequence,
    build_head_sequence_with, ordered_heads, split_for_side_walls,
};
pub use mount::{MountView, PanelLayout, Surface, plan_mounting};
pub use placement::{GridShape, PlacedHead, PlacementOptions, place_heads};
pub use render::{Marker, MarkerList, MarkerSink, MarkerStyle, draw_panel};
pub use sf_sizing::FrequencyClass;
