#![no_std]

#[macro_use]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod parse;
pub mod tags;
pub mod universal;

pub use parse::{InflectionalGroup, MetamorphicParse, MorphologicalParse};
