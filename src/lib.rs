#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod error;
pub use error::*;

pub mod real;
pub use real::*;

pub mod axis;
pub use axis::*;

pub mod vector;
pub use vector::*;

#[cfg(test)]
mod tests;
