/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Strings.

use crate::desc::TypeDesc;
use crate::error::EncodeError;
use crate::estimate::Encoder;
use crate::traits::Inspect;
use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

macro_rules! impl_text {
    ($($ty:ty),*) => {$(
impl Inspect for $ty {
    #[inline(always)]
    fn declared() -> TypeDesc {
        TypeDesc::string::<Self>()
    }
    #[inline(always)]
    fn text_len(&self) -> Option<usize> {
        Some(self.len())
    }
    fn encode(&self, encoder: &mut Encoder) -> Result<(), EncodeError> {
        encoder.put::<str>(self)
    }
}
    )*};
}

impl_text! {
    String, &str, Box<str>, Rc<str>, Arc<str>, Cow<'_, str>
}
