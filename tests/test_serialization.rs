/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use objsize::prelude::*;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

const P: usize = core::mem::size_of::<usize>();

#[derive(Serialize, Clone, Copy)]
enum Color {
    Red,
    Custom(u8, u8, u8),
}

inspect_fixed!(Color, closed);

struct Paint {
    color: Color,
    name: String,
    layers: Vec<u16>,
}

inspect_object!(Paint { color, name, layers }, closed);

fn paint() -> Paint {
    Paint {
        color: Color::Custom(1, 2, 3),
        name: "teal".into(),
        layers: vec![1, 2],
    }
}

#[test]
fn test_closed_object() {
    // A u32 variant index and three bytes, then the string and the vector,
    // each with a u64 length.
    let report = SizeEstimator::default().report(&paint());
    assert_eq!(report.bytes, (4 + 3) + (8 + 4) + (8 + 4));
    assert_eq!(report.serialized, 1);
    assert_eq!(report.objects, 1);
}

#[test]
fn test_serde_leaves() {
    let mut encoder = Encoder::default();
    Color::Red.encode(&mut encoder).unwrap();
    assert_eq!(encoder.len(), 4);
    assert_eq!(estimate_size(&Color::Red), core::mem::size_of::<Color>());
}

#[test]
fn test_serialization_disabled() {
    let estimator = SizeEstimator::default().serialization(false);
    let report = estimator.report(&paint());
    assert_eq!(
        report.bytes,
        (4 + core::mem::size_of::<Color>()) + (4 + P + 4) + (4 + P + 4)
    );
    assert_eq!(report.serialized, 0);
    assert_eq!(report.objects, 1);
}

#[test]
fn test_unencodable_falls_back_to_fields() {
    struct Timed {
        label: String,
        elapsed: Duration,
    }
    inspect_object!(Timed { label, elapsed }, closed);

    let timed = Timed {
        label: "run".into(),
        elapsed: Duration::from_secs(1),
    };
    let report = SizeEstimator::default().report(&timed);
    assert_eq!(report.serialized, 0);
    assert_eq!(
        report.bytes,
        (4 + P + 3) + (4 + core::mem::size_of::<Duration>())
    );
}

#[test]
fn test_closed_cycle() {
    struct Link {
        id: u8,
        next: Option<Rc<RefCell<Link>>>,
    }
    inspect_object!(Link { id, next }, closed);

    let a = Rc::new(RefCell::new(Link { id: 0, next: None }));
    let b = Rc::new(RefCell::new(Link {
        id: 1,
        next: Some(a.clone()),
    }));
    // Id and option tag, for both links.
    assert_eq!(estimate_size(&b), 4);

    // The link back to b is a u32 back reference.
    a.borrow_mut().next = Some(b.clone());
    let report = SizeEstimator::default().report(&b);
    assert_eq!(report.serialized, 1);
    assert_eq!(report.bytes, 2 * (1 + 1) + 4);
    assert_eq!(report.objects, 2);
    a.borrow_mut().next = None;
}

struct Blob {
    data: Vec<u8>,
}

inspect_object!(Blob { data }, closed);

const BLOB: usize = 8 + 1000;

fn blob() -> Rc<Blob> {
    Rc::new(Blob {
        data: vec![0; 1000],
    })
}

#[test]
fn test_shared_closed_elements() {
    let shared = blob();
    assert_eq!(estimate_size(&vec![shared.clone()]), 8 + BLOB);
    // The second reference costs a u32 back reference.
    assert_eq!(estimate_size(&vec![shared.clone(), shared]), 8 + BLOB + 4);
    assert_eq!(estimate_size(&vec![blob(), blob()]), 8 + 2 * BLOB);
}

#[test]
fn test_shared_closed_fields() {
    struct Pair {
        left: Rc<Blob>,
        right: Rc<Blob>,
    }
    inspect_object!(Pair { left, right });

    let shared = blob();
    let pair = Pair {
        left: shared.clone(),
        right: shared,
    };
    let report = SizeEstimator::default().report(&pair);
    assert_eq!(report.bytes, (4 + BLOB) + 4);
    assert_eq!(report.revisits, 1);

    struct Mixed {
        first: Rc<Blob>,
        all: Vec<Rc<Blob>>,
    }
    inspect_object!(Mixed { first, all });

    let shared = blob();
    let mixed = Mixed {
        first: shared.clone(),
        all: vec![shared.clone(), shared],
    };
    // The vector refers twice to a blob that was already counted.
    assert_eq!(estimate_size(&mixed), (4 + BLOB) + (4 + 8 + 2 * 4));
}

#[test]
fn test_closed_elements() {
    let paints = vec![paint(), paint()];
    let report = SizeEstimator::default().report(&paints);
    assert_eq!(report.bytes, 8 + 2 * ((4 + 3) + (8 + 4) + (8 + 4)));
    assert_eq!(report.serialized, 1);
}
