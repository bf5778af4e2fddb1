/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use objsize::prelude::*;
use std::fs::File;
use std::io::{Cursor, Write};

const P: usize = core::mem::size_of::<usize>();

#[test]
fn test_cursor() {
    let cursor = Cursor::new(vec![0_u8; 100]);
    assert_eq!(estimate_size(&cursor), P + 100);
    let cursor = Cursor::new(&b"abc"[..]);
    assert_eq!(estimate_size(&cursor), P + 3);
}

#[test]
fn test_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("data");
    let mut file = File::create(&path)?;
    file.write_all(&[0; 1000])?;
    file.flush()?;
    assert_eq!(estimate_size(&file), P + 1000);
    assert_eq!(estimate_size(&File::open(&path)?), P + 1000);
    Ok(())
}

#[test]
fn test_stream_field() {
    struct Buffered {
        id: u32,
        buffer: Cursor<Vec<u8>>,
    }
    inspect_object!(Buffered { id, buffer });

    let buffered = Buffered {
        id: 0,
        buffer: Cursor::new(vec![1; 10]),
    };
    assert_eq!(estimate_size(&buffered), (4 + 4) + (4 + P + 10));
}
