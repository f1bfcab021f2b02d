//! A framework for the hash oracles used by the shufflers.

#![no_std]

extern crate alloc;

mod fn_hasher;
mod hasher;

pub use fn_hasher::*;
pub use hasher::*;
