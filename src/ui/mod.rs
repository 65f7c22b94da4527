/// UI composition module
///
/// This module holds the interactive surface and the overlay widgets:
/// - `canvas.rs` - page rendering plus gesture-to-message mapping
/// - `controls.rs` - bottom zoom button bar
/// - `drawer.rs` - slide-out thumbnail drawer
/// - `info_panel.rs` - toggleable scale/offset readout

pub mod canvas;
pub mod controls;
pub mod drawer;
pub mod info_panel;
