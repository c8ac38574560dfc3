//! Highlighted option selector: a reusable dropdown control.
//!
//! Three pure steps turn caller input into something renderable:
//! [`normalize`] flattens list or keyed options into parallel `keys`/`values`,
//! [`sanitize`] validates a prospective value, and [`format`] maps the current
//! value to the dropdown index. [`HighlightedSelect`] is the egui adapter that
//! draws the control and reports picks back as values.

mod options;
mod widget;

pub use options::{
    HighlightedSelectInput, HighlightedSelectSettings, InvalidOptionError, NormalizedSelect,
    OptionSource, format, normalize, sanitize,
};
pub use widget::{HighlightedSelect, SelectResponse};
