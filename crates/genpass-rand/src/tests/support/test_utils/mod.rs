// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod counting_bit_source;
mod mock_entropy_source;
mod scripted_bit_source;
mod scripted_entropy_source;
