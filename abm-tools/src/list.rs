//! Normalizing loosely typed inputs into lists.
//!
//! Framework entry points accept "one thing or several things" (a single
//! agent or a list of agents, one topology or many). [`make_list_of`] turns
//! any of those into a plain list of the caller's own type, with `None`
//! standing for the absence value. [`make_list`] is the same operation for
//! dynamic [`serde_json::Value`] inputs, where `null` is the absence value.
//!
//! Which inputs count as already being a sequence is decided by the closed
//! [`Listable`] variant set, not by inspecting runtime types.

use serde_json::Value;

/// A numeric array, such as a sampled parameter column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumericArray(pub Vec<f64>);

impl From<Vec<f64>> for NumericArray {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl From<&[f64]> for NumericArray {
    fn from(values: &[f64]) -> Self {
        Self(values.to_vec())
    }
}

/// Every shape of input the normalizers understand.
///
/// `List`, `Tuple` and `Array` are sequence-like and are unpacked as-is.
/// Everything else is wrapped.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum Listable<T = Value> {
    /// Nothing was provided.
    Absent,
    /// A plain ordered list.
    List(Vec<T>),
    /// A fixed-size tuple, already flattened into its elements.
    Tuple(Vec<T>),
    /// A numeric array, already converted into elements.
    Array(Vec<T>),
    /// Any single value.
    Scalar(T),
}

impl<T> Listable<T> {
    /// A single value.
    pub fn one(value: T) -> Self {
        Self::Scalar(value)
    }

    /// A list of values.
    pub fn many(items: impl IntoIterator<Item = T>) -> Self {
        Self::List(items.into_iter().collect())
    }

    /// A single value that may be missing.
    pub fn optional(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Self::Scalar)
    }

    /// Whether the input is already ordered, iterable and indexable.
    pub fn is_sequence_like(&self) -> bool {
        matches!(self, Self::List(_) | Self::Tuple(_) | Self::Array(_))
    }

    /// Whether this is the absence value.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Turn `value` into a list of itself unless it already is a sequence.
///
/// The absence value becomes an empty list. With `keep_none` set it is
/// kept instead, giving a one-element list holding `None`.
///
/// # Examples
///
/// ```
/// use abm_tools::{Listable, make_list_of};
///
/// #[derive(Debug, PartialEq)]
/// struct Agent(u32);
///
/// assert_eq!(make_list_of::<Agent>(Listable::one(Agent(1)), false), vec![Some(Agent(1))]);
/// assert_eq!(
///     make_list_of::<Agent>(Listable::many([Agent(1), Agent(2)]), false),
///     vec![Some(Agent(1)), Some(Agent(2))]
/// );
/// assert!(make_list_of::<Agent>(Listable::Absent, false).is_empty());
/// assert_eq!(make_list_of::<Agent>(Listable::Absent, true), vec![None]);
/// ```
pub fn make_list_of<T>(value: impl Into<Listable<T>>, keep_none: bool) -> Vec<Option<T>> {
    match value.into() {
        Listable::Absent if !keep_none => Vec::new(),
        Listable::Absent => vec![None],
        Listable::List(items) | Listable::Tuple(items) | Listable::Array(items) => {
            items.into_iter().map(Some).collect()
        }
        Listable::Scalar(value) => vec![Some(value)],
    }
}

/// [`make_list_of`] for dynamic values, with `null` as the absence value.
///
/// # Examples
///
/// ```
/// use abm_tools::make_list;
/// use serde_json::{json, Value};
///
/// assert_eq!(make_list(5, false), vec![json!(5)]);
/// assert_eq!(make_list(vec![1, 2, 3], false), vec![json!(1), json!(2), json!(3)]);
/// assert_eq!(make_list((1, 2), false), vec![json!(1), json!(2)]);
/// assert!(make_list(Value::Null, false).is_empty());
/// assert_eq!(make_list(Value::Null, true), vec![Value::Null]);
/// ```
pub fn make_list(value: impl Into<Listable>, keep_none: bool) -> Vec<Value> {
    let value: Listable = value.into();
    make_list_of::<Value>(value, keep_none)
        .into_iter()
        .map(|item| item.unwrap_or(Value::Null))
        .collect()
}

impl From<Value> for Listable {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::Array(items) => Self::List(items),
            other => Self::Scalar(other),
        }
    }
}

impl<T: Into<Listable>> From<Option<T>> for Listable {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Listable {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<A: Into<Value>, B: Into<Value>> From<(A, B)> for Listable {
    fn from((a, b): (A, B)) -> Self {
        Self::Tuple(vec![a.into(), b.into()])
    }
}

impl<A: Into<Value>, B: Into<Value>, C: Into<Value>> From<(A, B, C)> for Listable {
    fn from((a, b, c): (A, B, C)) -> Self {
        Self::Tuple(vec![a.into(), b.into(), c.into()])
    }
}

impl From<NumericArray> for Listable {
    fn from(NumericArray(values): NumericArray) -> Self {
        Self::Array(values.into_iter().map(Value::from).collect())
    }
}

macro_rules! scalar_listable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Listable {
                fn from(value: $ty) -> Self {
                    Self::Scalar(Value::from(value))
                }
            }
        )*
    };
}

scalar_listable!(bool, i32, i64, u32, u64, f64, String, &str);
