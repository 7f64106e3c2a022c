//! Traits which, typically, may be imported without concern: `use optspec::prelude::*`.
use std::collections::HashMap;

use crate::api::{ListSlot, MapSlot, ScalarSlot};

/// Behaviour for a variable to receive a single option value.
///
/// Implemented for `String`, `i64`, `f64` and `bool`.
pub trait ScalarTarget {
    #[doc(hidden)]
    fn bind(&mut self) -> ScalarSlot<'_>;
}

/// Behaviour for a `Vec<T>` to receive the values of a repeated option.
///
/// Implemented for `String`, `i64`, `f64` and `f32`.
/// An `f32` element receives each decoded `f64` narrowed via `as f32`.
pub trait ListTarget: Sized {
    #[doc(hidden)]
    fn bind(list: &mut Vec<Self>) -> ListSlot<'_>;
}

/// Behaviour for a `HashMap<String, T>` to receive the `key=value` pairs of a map option.
///
/// Implemented for `String`, `i64` and `f64`.
pub trait MapTarget: Sized {
    #[doc(hidden)]
    fn bind(map: &mut HashMap<String, Self>) -> MapSlot<'_>;
}

impl ScalarTarget for String {
    fn bind(&mut self) -> ScalarSlot<'_> {
        ScalarSlot::String(self)
    }
}

impl ScalarTarget for i64 {
    fn bind(&mut self) -> ScalarSlot<'_> {
        ScalarSlot::Integer(self)
    }
}

impl ScalarTarget for f64 {
    fn bind(&mut self) -> ScalarSlot<'_> {
        ScalarSlot::Float(self)
    }
}

impl ScalarTarget for bool {
    fn bind(&mut self) -> ScalarSlot<'_> {
        ScalarSlot::Boolean(self)
    }
}

impl ListTarget for String {
    fn bind(list: &mut Vec<Self>) -> ListSlot<'_> {
        ListSlot::String(list)
    }
}

impl ListTarget for i64 {
    fn bind(list: &mut Vec<Self>) -> ListSlot<'_> {
        ListSlot::Integer(list)
    }
}

impl ListTarget for f64 {
    fn bind(list: &mut Vec<Self>) -> ListSlot<'_> {
        ListSlot::Float(list)
    }
}

impl ListTarget for f32 {
    fn bind(list: &mut Vec<Self>) -> ListSlot<'_> {
        ListSlot::NarrowFloat(list)
    }
}

impl MapTarget for String {
    fn bind(map: &mut HashMap<String, Self>) -> MapSlot<'_> {
        MapSlot::String(map)
    }
}

impl MapTarget for i64 {
    fn bind(map: &mut HashMap<String, Self>) -> MapSlot<'_> {
        MapSlot::Integer(map)
    }
}

impl MapTarget for f64 {
    fn bind(map: &mut HashMap<String, Self>) -> MapSlot<'_> {
        MapSlot::Float(map)
    }
}
