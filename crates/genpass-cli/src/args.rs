// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use genpass::rand::DEFAULT_ENTROPY_DEVICE;
use genpass::{DEFAULT_WORD_LIST, GenerateRequest};

#[derive(Parser, Debug)]
#[command(
    name = "genpass",
    version,
    about = "Generates passwords from custom character sets, or xkcd-style passphrases",
    long_about = None
)]
pub(crate) struct Args {
    /// Generate correcthorsebatterystaple type passphrases from a word list.
    #[arg(long)]
    pub(crate) xkcd: bool,

    /// Interpret LENGTH as a minimum entropy in bits and choose the length automatically.
    #[arg(short, long)]
    pub(crate) entropy: bool,

    /// Character set, e.g. `a-zA-Z0-9` or `\x21-\x7e`.
    #[arg(short, long, value_name = "SPEC", default_value = "a-z0-9")]
    pub(crate) charset: String,

    /// Number of passwords.
    #[arg(short = 'n', long, value_name = "N", default_value_t = 1)]
    pub(crate) num_passwords: usize,

    /// Word list for --xkcd.
    #[arg(long, value_name = "PATH", env = "GENPASS_WORDS", default_value = DEFAULT_WORD_LIST)]
    pub(crate) words: PathBuf,

    /// Entropy device to read random bytes from.
    #[arg(
        long,
        value_name = "PATH",
        default_value = DEFAULT_ENTROPY_DEVICE,
        conflicts_with = "system_entropy"
    )]
    pub(crate) device: PathBuf,

    /// Use the operating system CSPRNG instead of an entropy device.
    #[arg(long)]
    pub(crate) system_entropy: bool,

    /// Log progress to stderr.
    #[arg(short, long)]
    pub(crate) verbose: bool,

    /// Length in symbols, or minimum entropy in bits with --entropy.
    #[arg(value_name = "LENGTH")]
    pub(crate) length: String,
}

impl Args {
    /// Reads LENGTH as a symbol count, or as bits of entropy with `--entropy`.
    pub(crate) fn request(&self) -> Result<GenerateRequest> {
        if self.entropy {
            let bits: f64 = self
                .length
                .parse()
                .with_context(|| format!("invalid entropy {:?}", self.length))?;
            if !bits.is_finite() || bits < 0.0 {
                bail!("entropy must be a non-negative number of bits, got {:?}", self.length);
            }

            Ok(GenerateRequest::min_entropy(bits))
        } else {
            let length: usize = self
                .length
                .parse()
                .with_context(|| format!("invalid length {:?}", self.length))?;

            Ok(GenerateRequest::length(length))
        }
    }
}
