//! Parameter ranges in the SALib problem format.
//!
//! Sensitivity analysis tools expect a problem record with the fields
//! `num_vars`, `names` and `bounds`. [`param_tuples_to_salib`] reshapes a
//! name-to-`(low, high)` map into that record. Bounds are passed through
//! unchanged: no ordering or type checks.

use crate::attr_dict::AttrDict;
use crate::error::ParamError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A SALib problem definition.
///
/// Serializes with exactly the field names SALib reads:
///
/// ```
/// use abm_tools::param_tuples_to_salib;
/// use indexmap::IndexMap;
///
/// let mut ranges = IndexMap::new();
/// ranges.insert("a".to_string(), (0, 1));
/// ranges.insert("b".to_string(), (-5, 5));
///
/// let problem = param_tuples_to_salib(ranges);
/// assert_eq!(
///     serde_json::to_string(&problem).unwrap(),
///     r#"{"num_vars":2,"names":["a","b"],"bounds":[[0,1],[-5,5]]}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalibProblem<T = f64> {
    /// Number of parameters.
    pub num_vars: usize,
    /// Parameter names, in input order.
    pub names: Vec<String>,
    /// `[low, high]` per parameter, in the same order as `names`.
    pub bounds: Vec<[T; 2]>,
}

impl<T> SalibProblem<T> {
    /// Bounds of a parameter by name.
    pub fn bounds_of(&self, name: &str) -> Option<&[T; 2]> {
        let i = self.names.iter().position(|n| n == name)?;
        self.bounds.get(i)
    }
}

/// Convert `name -> (low, high)` ranges into a [`SalibProblem`].
///
/// Takes any ordered source of entries: an `IndexMap`, a `BTreeMap`, or a
/// plain list of pairs. Order of `names` and `bounds` follows its iteration
/// order.
pub fn param_tuples_to_salib<K, T, I>(ranges: I) -> SalibProblem<T>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, (T, T))>,
{
    let (names, bounds): (Vec<String>, Vec<[T; 2]>) = ranges
        .into_iter()
        .map(|(name, (low, high))| (name.into(), [low, high]))
        .unzip();
    tracing::debug!(num_vars = names.len(), "converted parameter ranges to SALib format");
    SalibProblem {
        num_vars: names.len(),
        names,
        bounds,
    }
}

/// Convert a dynamic parameter record whose values are `[low, high]`
/// numeric arrays.
///
/// Fails with [`ParamError::NotARange`] on the first value that is not a
/// two-element array of numbers.
pub fn salib_from_params(params: &AttrDict<Value>) -> Result<SalibProblem<Value>, ParamError> {
    let mut ranges = Vec::with_capacity(params.len());
    for (name, value) in params {
        let pair = match value.as_array().map(Vec::as_slice) {
            Some([low, high]) if low.is_number() && high.is_number() => (low.clone(), high.clone()),
            _ => {
                return Err(ParamError::NotARange {
                    name: name.clone(),
                    value: value.to_string(),
                });
            }
        };
        ranges.push((name.as_str(), pair));
    }
    Ok(param_tuples_to_salib(ranges))
}
