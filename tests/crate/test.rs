#![no_std]

pub use twos_bigint::*;
