//! Platform abstraction layer
//!
//! Browser bindings live here. The page owns the canvas, the pointer
//! handling and the 10 ms interval; it calls into `WebGame` for everything
//! else. Native hosts use `Engine` directly (see `main.rs`).

#[cfg(target_arch = "wasm32")]
mod web;
#[cfg(target_arch = "wasm32")]
pub use web::WebGame;
