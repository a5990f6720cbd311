//! Text layout utilities.
//!
//! This module provides shared text handling for cards and panels:
//! - [`wrap_text`], [`wrap_hanging`] - Word wrapping
//! - [`flow_chips`] - Flow tag chips over rows
//! - [`visual_width`], [`truncate_to_width`] - Unicode-aware width handling

mod width;
mod wrap;

pub use width::{truncate_to_width, visual_width};
pub use wrap::{flow_chips, wrap_hanging, wrap_text};
