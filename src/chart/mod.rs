//! Core chart computations: tick derivation, band mapping, tooltip formatting.
//!
//! Everything here is a pure, synchronous, total function over small immutable
//! inputs. Rendering front-ends (TUI, ASCII plot, exports) consume the results
//! without re-deriving anything.

pub mod bands;
pub mod ticks;
pub mod tooltip;

pub use bands::{band_for, fill_strips, map_bands};
pub use ticks::ticks;
pub use tooltip::{format_tooltip, format_value};
