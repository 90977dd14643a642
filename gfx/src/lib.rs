//! Packed-pixel graphics algorithms.
//!
//! This module is deliberately architecture-independent to allow for testing on
//! the host. Nothing in here knows about a particular display; callers pass in
//! slices and widths.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod bit;
pub mod nibble;
