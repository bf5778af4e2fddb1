/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Tuples, which are records whose fields are named by position.

use crate::desc::TypeDesc;
use crate::error::{EncodeError, InspectError};
use crate::estimate::Encoder;
use crate::traits::{Field, Inspect};

macro_rules! impl_tuple {
    ($(($($name:ident $idx:tt),+))*) => {$(
impl<$($name: Inspect),+> Inspect for ($($name,)+) {
    fn declared() -> TypeDesc {
        TypeDesc::record::<Self>().closed(true $(&& $name::declared().is_closed())+)
    }
    fn encode(&self, encoder: &mut Encoder) -> Result<(), EncodeError> {
        $(self.$idx.encode(encoder)?;)+
        Ok(())
    }
    fn for_each_field(&self, visit: &mut dyn FnMut(Field<'_>)) -> Result<(), InspectError> {
        $(visit(Field::new(stringify!($idx), &self.$idx));)+
        Ok(())
    }
}
    )*};
}

impl_tuple! {
    (A 0)
    (A 0, B 1)
    (A 0, B 1, C 2)
    (A 0, B 1, C 2, D 3)
    (A 0, B 1, C 2, D 3, E 4)
    (A 0, B 1, C 2, D 3, E 4, F 5)
}
