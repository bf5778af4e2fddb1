/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use objsize::prelude::*;
use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

const P: usize = core::mem::size_of::<usize>();

#[test]
fn test_string() {
    assert_eq!(estimate_size(&String::new()), P);
    assert_eq!(estimate_size(&String::from("hello")), P + 5);
    assert!(estimate_size(&String::from("x")) > P);
}

#[test]
fn test_utf8_length() {
    // Three characters, three bytes each.
    assert_eq!(estimate_size(&String::from("わたし")), P + 9);
    assert_eq!(estimate_size(&"é"), P + 2);
}

#[test]
fn test_string_like() {
    let boxed: Box<str> = "boxed".into();
    assert_eq!(estimate_size(&boxed), P + 5);
    let rc: Rc<str> = "rc".into();
    assert_eq!(estimate_size(&rc), P + 2);
    let arc: Arc<str> = "arc".into();
    assert_eq!(estimate_size(&arc), P + 3);
    assert_eq!(estimate_size(&Cow::Borrowed("cow")), P + 3);
    assert_eq!(estimate_size(&Rc::new(String::from("shared"))), P + 6);
}

#[test]
fn test_absent_string() {
    assert_eq!(estimate_size(&None::<String>), P);
    assert_eq!(estimate_size(&Some(String::from("abc"))), P + 3);
}

#[test]
fn test_string_fields() {
    struct Named {
        first: String,
        last: Option<String>,
    }
    inspect_object!(Named { first, last });

    let named = Named {
        first: "Ada".into(),
        last: None,
    };
    let estimator = SizeEstimator::default().field_overhead(0);
    assert_eq!(estimator.estimate(&named), (P + 3) + P);
}
