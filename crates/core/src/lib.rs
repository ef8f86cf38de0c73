//! Face detection and mask / no-mask classification for still images.
//!
//! Each bounded context keeps its traits and value types in `domain` and
//! its model, codec, and window adapters in `infrastructure`. The
//! `pipeline` module wires them into a single read → detect → classify →
//! annotate → display pass.

pub mod classification;
pub mod detection;
pub mod imaging;
pub mod pipeline;
pub mod rendering;
pub mod shared;
