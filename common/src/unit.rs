//! Marker types.

/// Marker type describing an order placement.
#[derive(Clone, Copy, Debug)]
pub struct Placement;
