//! WebAssembly bindings for the rt6502 emulator.
//!
//! This module provides a JavaScript-callable wrapper around a [`Cpu`](crate::Cpu)
//! attached to 64 KiB of RAM, for browser-based debuggers and demos.

pub mod api;

pub use api::Emulator6502;
