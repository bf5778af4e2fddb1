/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Utility functions.

*/

mod stack;
pub use stack::ensure_sufficient_stack;

/// Install [`env_logger`] as the global logger, with level `info` unless
/// `RUST_LOG` says otherwise.
pub fn init_env_logger() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init()?;
    Ok(())
}
