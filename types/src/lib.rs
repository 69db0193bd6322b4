//!
//! Core types shared between `gpu-bind` and implementations of its
//! collaborators: memory allocators and command recorders.
//!

#![no_std]

mod device;
mod encoder;
mod types;

pub use self::{device::*, encoder::*, types::*};
