// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io::Write;

use anyhow::{Context, Result};
use genpass::charset::CharacterSet;
use genpass::rand::{DeviceEntropySource, EntropyBitSource, EntropySource, SystemEntropySource};
use genpass::{Generator, WordListCache};

use crate::args::Args;

/// Writes `args.num_passwords` passwords to `out`, one per line.
///
/// Arguments are validated before the entropy source is opened. The source is
/// opened once and shared by every password.
pub(crate) fn run<W: Write + ?Sized>(args: &Args, out: &mut W) -> Result<()> {
    let request = args.request()?;
    let charset = if args.xkcd {
        None
    } else {
        let charset = CharacterSet::parse(&args.charset)
            .with_context(|| format!("invalid character set {:?}", args.charset))?;
        Some(charset)
    };

    let entropy: Box<dyn EntropySource> = if args.system_entropy {
        Box::new(SystemEntropySource {})
    } else {
        let device = DeviceEntropySource::open(&args.device)
            .with_context(|| format!("cannot open entropy device {}", args.device.display()))?;
        Box::new(device)
    };
    let mut generator = Generator::new(EntropyBitSource::new(&*entropy));

    match charset {
        Some(charset) => {
            for _ in 0..args.num_passwords {
                generator.write(&charset, &request, out)?;
            }
        }
        None => {
            let mut words = WordListCache::new(&args.words);
            for _ in 0..args.num_passwords {
                let list = words.get()?;
                generator.write(list, &request, out)?;
            }
        }
    }

    Ok(())
}
