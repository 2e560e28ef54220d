// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io::Write;

use genpass_rand::{BitSource, UniformSampler};

use crate::error::GenerateError;
use crate::request::GenerateRequest;
use crate::source::SymbolSource;

/// Draws passwords from a [`SymbolSource`] using one owned [`BitSource`].
///
/// Every symbol is an independent uniform draw, so a password of `n` symbols
/// over `C` possible symbols carries `n * log2(C)` bits of entropy.
#[derive(Debug)]
pub struct Generator<B: BitSource> {
    bits: B,
}

impl<B: BitSource> Generator<B> {
    /// Creates a generator drawing from `bits`.
    pub fn new(bits: B) -> Self {
        Self { bits }
    }

    /// Writes one password to `out`, symbol by symbol, followed by a newline.
    ///
    /// The request is validated before any bit is read. On error, the symbols
    /// already written stay written.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::CallerContract`], [`GenerateError::InvalidEntropy`]
    ///   or [`GenerateError::EntropyUnreachable`] for a bad request
    /// - [`GenerateError::Range`] if the source is empty and `length > 0`
    /// - [`GenerateError::Entropy`] if the bit source fails
    /// - [`GenerateError::Output`] if writing fails
    pub fn write<S, W>(
        &mut self,
        source: &S,
        request: &GenerateRequest,
        out: &mut W,
    ) -> Result<(), GenerateError>
    where
        S: SymbolSource + ?Sized,
        W: Write + ?Sized,
    {
        let length = request.resolve_length(source.cardinality())?;

        self.for_each_symbol(source, length, |position, symbol| {
            if position > 0 {
                out.write_all(S::SEPARATOR.as_bytes())?;
            }
            write!(out, "{}", symbol)?;
            Ok(())
        })?;

        out.write_all(b"\n")?;
        out.flush()?;

        Ok(())
    }

    /// Returns one password, without trailing newline.
    ///
    /// # Errors
    ///
    /// The same as [`write`](Self::write), except [`GenerateError::Output`].
    pub fn generate<S>(
        &mut self,
        source: &S,
        request: &GenerateRequest,
    ) -> Result<String, GenerateError>
    where
        S: SymbolSource + ?Sized,
    {
        let length = request.resolve_length(source.cardinality())?;
        let mut password = String::new();

        self.for_each_symbol(source, length, |position, symbol| {
            if position > 0 {
                password.push_str(S::SEPARATOR);
            }
            password.push_str(&symbol.to_string());
            Ok(())
        })?;

        Ok(password)
    }

    /// Returns the bit source.
    pub fn into_inner(self) -> B {
        self.bits
    }

    fn for_each_symbol<'s, S, F>(
        &mut self,
        source: &'s S,
        length: usize,
        mut emit: F,
    ) -> Result<(), GenerateError>
    where
        S: SymbolSource + ?Sized,
        F: FnMut(usize, S::Symbol<'s>) -> Result<(), GenerateError>,
    {
        if length == 0 {
            return Ok(());
        }

        let cardinality = source.cardinality();
        let upper = i64::try_from(cardinality)
            .map_err(|_| GenerateError::CardinalityTooLarge { cardinality })?;
        let mut sampler = UniformSampler::below(&mut self.bits, upper)?;

        for position in 0..length {
            // below() only yields values in 0..upper
            let index = usize::try_from(sampler.draw()?).unwrap_or(usize::MAX);
            let symbol = source
                .symbol(index)
                .ok_or(GenerateError::SymbolOutOfRange { index, cardinality })?;

            emit(position, symbol)?;
        }

        Ok(())
    }
}
