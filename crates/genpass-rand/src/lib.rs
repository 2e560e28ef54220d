// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # genpass_rand
//!
//! Unbiased random integers drawn bit by bit from a high-quality entropy source.
//!
//! The crate is layered bottom to top:
//!
//! - [`EntropySource`]: blocking reads of uniformly random bytes
//! - [`BitSource`]: a stream of independent single bits
//! - [`UniformSampler`]: a lazy, infinite sequence of integers uniformly
//!   distributed over an arithmetic progression, built by power-of-two
//!   rejection sampling
//!
//! ## Core Types
//!
//! - [`DeviceEntropySource`]: sequential reads from an OS entropy device
//!   (`/dev/random` by default)
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//! - [`EntropyBitSource`]: drains one fetched byte LSB first before fetching
//!   the next
//!
//! ## Example
//!
//! ```rust
//! use genpass_rand::{EntropyBitSource, SystemEntropySource, UniformSampler};
//!
//! let bits = EntropyBitSource::new(SystemEntropySource {});
//! let dice: Vec<i64> = UniformSampler::new(bits, 1, 7, 1)
//!     .expect("valid range")
//!     .take(10)
//!     .collect::<Result<_, _>>()
//!     .expect("entropy available");
//!
//! assert!(dice.iter().all(|d| (1..7).contains(d)));
//! ```
//!
//! ## Bit accounting
//!
//! A draw over a progression of `C` elements consumes exactly
//! `ceil(log2(C))` bits per attempt; rejected attempts are discarded and
//! their bits are never reused. The expected number of attempts is below 2.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod bits;
mod device;
mod error;
mod sampler;
mod support;
mod system;
mod traits;

pub use bits::EntropyBitSource;
pub use device::{DEFAULT_ENTROPY_DEVICE, DeviceEntropySource};
pub use error::{EntropyError, SampleError};
pub use sampler::UniformSampler;
pub use system::SystemEntropySource;
pub use traits::{BitSource, EntropySource};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
