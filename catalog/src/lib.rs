//! Core of the channel video browser: the fetched video model, the
//! display formatters, and the filter/sort/bucket/page engine. This crate
//! is free of any rendering or WASM dependency so the whole pipeline can
//! be exercised with plain `cargo test`.

pub mod engine;
pub mod format;
pub mod model;
pub mod state;
