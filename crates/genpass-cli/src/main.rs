// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `genpass`: unbiased passwords and passphrases on the command line.
//!
//! ```text
//! genpass 16                      # 16 characters from a-z0-9
//! genpass -e -c 'a-zA-Z0-9' 128   # at least 128 bits of entropy
//! genpass --xkcd -n 3 4           # three passphrases of four words
//! ```

use std::io;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

mod app;
mod args;

#[cfg(test)]
mod tests;

use args::Args;

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    app::run(&args, &mut out)
}
