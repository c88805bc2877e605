// Constants for the bar array model

/// Number of bars generated by a randomize
pub const BAR_COUNT: usize = 30;

/// Upper bound (inclusive) for randomly generated heights
pub const MAX_BAR_HEIGHT: u32 = 300;

/// Width given to freshly generated bars and used for out-of-range widths
pub const DEFAULT_BAR_WIDTH: u32 = 20;

/// Height applied by a resize when the requested height is out of range
pub const DEFAULT_BAR_HEIGHT: u32 = 50;

/// Widest bar accepted; one bar may span the whole surface
pub const MAX_BAR_WIDTH: u32 = 800;

/// Tallest bar accepted; one bar may span the whole surface
pub const MAX_BAR_EXTENT: u32 = 400;

/// Horizontal space between neighbouring bars, in surface units
pub const BAR_GAP: u32 = 5;
