//! # themeswitch-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the public directory (theme switch bundle, stylesheet, demo page)
//!   under `/assets/*`
//! - In **cached** mode, load every asset into memory at startup and let
//!   browsers keep them for a year
//! - In **hot-reload** mode, read from disk on every request (through
//!   `tower-http`'s `ServeDir`) and force revalidation so edits show up
//!   immediately
//! - Answer conditional requests (`If-Modified-Since`) with `304` and
//!   single byte ranges with `206`/`416`
//! - Derive `Content-Type` from the file extension
//!
//! ## Dependency rule
//! Knows nothing about the theme switch itself; it only ships its files.

pub mod assets;
pub mod error;
pub mod router;
pub mod store;
