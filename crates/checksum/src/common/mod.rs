//! Common utilities for CRC computation.
//!
//! This module provides:
//! - Const-fn lookup table generation for both CRC widths
//! - Bitwise reference implementations
//! - Portable bytewise and slice-by-8 kernels
//! - Kernel selection

pub mod kernels;
pub mod portable;
pub mod reference;
pub mod tables;
