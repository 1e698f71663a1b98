use anyhow::{Context, Result, ensure};
use log::info;

use crate::entities::Instance;
use crate::util::assertions;

/// Converts an instance into an Uncapacitated Facility Location Problem (UFLP) instance.
///
/// A new instance is built with:
/// * `c'[i][j] = d[j] * c[i][j]`: assignment costs are weighted by the demand they serve
/// * `f'[i] = min_j c'[i][j] * 10`
/// * `s'[i] = m`: a single facility can serve every customer
/// * `d'[j] = 1`
///
/// Converting an empty instance yields an empty instance.
pub fn convert(instance: &Instance) -> Result<Instance> {
    let m = instance.n_customers;
    ensure!(
        instance.assignment_costs.dim() == (instance.n_facilities, m)
            && instance.demands.len() == m,
        "inconsistent instance: {}x{} assignment costs and {} demands for {} facilities and {m} customers",
        instance.assignment_costs.nrows(),
        instance.assignment_costs.ncols(),
        instance.demands.len(),
        instance.n_facilities
    );

    let mut assignment_costs = instance.assignment_costs.clone();
    for ((i, j), c) in assignment_costs.indexed_iter_mut() {
        *c = instance.demands[j].checked_mul(*c).with_context(|| {
            format!("weighted assignment cost of facility {i} and customer {j} overflows")
        })?;
    }

    let fixed_costs = assignment_costs
        .rows()
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            row.iter()
                .min()
                .and_then(|c_min| c_min.checked_mul(10))
                .with_context(|| format!("no valid fixed cost for facility {i}"))
        })
        .collect::<Result<Vec<u64>>>()?;

    let capacities = vec![m as u64; instance.n_facilities];
    let demands = vec![1; m];

    let converted = Instance::new(assignment_costs, fixed_costs, demands, capacities, None);
    debug_assert!(assertions::instance_is_uncapacitated(&converted));
    debug_assert!(assertions::fixed_costs_follow_nearest_customer(&converted, 0));

    info!(
        "[UFLP] converted instance with {} facilities and {} customers",
        converted.n_facilities, converted.n_customers
    );
    Ok(converted)
}
