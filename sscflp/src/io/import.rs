use std::str::SplitWhitespace;

use anyhow::{Context, Result, bail};
use itertools::Itertools;
use ndarray::Array2;

use crate::entities::Instance;

/// Parses an instance from the flat text format (see [`InstanceText`](crate::io::InstanceText)).
///
/// Tokens may be separated by any whitespace.
/// The capacity ratio is not part of the format and is therefore unknown for parsed instances.
pub fn parse_instance(text: &str) -> Result<Instance> {
    let mut tokens = Tokens::new(text);

    let n = tokens.next_usize("number of facilities")?;
    let m = tokens.next_usize("number of customers")?;

    let (capacities, fixed_costs): (Vec<u64>, Vec<u64>) = (0..n)
        .map(|i| {
            let s = tokens.next_u64(|| format!("capacity of facility {i}"))?;
            let f = tokens.next_u64(|| format!("fixed cost of facility {i}"))?;
            Ok((s, f))
        })
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .unzip();

    let demands = (0..m)
        .map(|j| tokens.next_u64(|| format!("demand of customer {j}")))
        .collect::<Result<Vec<u64>>>()?;

    let costs = (0..n)
        .cartesian_product(0..m)
        .map(|(i, j)| tokens.next_u64(|| format!("assignment cost of facility {i} and customer {j}")))
        .collect::<Result<Vec<u64>>>()?;

    if let Some(token) = tokens.inner.next() {
        bail!("unexpected trailing token: {token:?}");
    }

    let assignment_costs = Array2::from_shape_vec((n, m), costs)?;

    Ok(Instance::new(
        assignment_costs,
        fixed_costs,
        demands,
        capacities,
        None,
    ))
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    fn next_u64(&mut self, what: impl FnOnce() -> String) -> Result<u64> {
        match self.inner.next() {
            Some(token) => token
                .parse::<u64>()
                .with_context(|| format!("invalid {}: {token:?}", what())),
            None => bail!("unexpected end of input, expected {}", what()),
        }
    }

    fn next_usize(&mut self, what: &str) -> Result<usize> {
        let value = self.next_u64(|| what.to_string())?;
        usize::try_from(value).with_context(|| format!("{what} out of range: {value}"))
    }
}
