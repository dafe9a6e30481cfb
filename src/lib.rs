#![no_std]
#[cfg(feature = "std")]
extern crate std;

mod utils;
mod error;

pub mod interface;
pub mod registers;
pub mod parameters;
pub mod signal;
pub mod execution;
pub mod processor;
pub mod dispatch;
pub mod device;
pub mod controller;

pub use error::*;
