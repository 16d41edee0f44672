#![no_std]
#![deny(
    warnings,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

//! Minimum-cost flow over a residual transport network, with decomposition of
//! the resulting flow into elementary source-to-sink paths.

extern crate alloc;

mod algo;
mod edge;
mod error;
mod graph;
mod id;
mod quantity;

pub use crate::algo::decompose::FlowPath;
pub use crate::edge::{ArcIndex, Edge};
pub use crate::error::Error;
pub use crate::graph::FlowNetwork;
pub use crate::id::EdgeId;
pub use crate::quantity::Quantity;
