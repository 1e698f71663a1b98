use log::error;

use crate::entities::Instance;

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

pub fn instance_is_consistent(instance: &Instance) -> bool {
    let Instance {
        n_facilities: n,
        n_customers: m,
        assignment_costs,
        fixed_costs,
        demands,
        capacities,
        total_demand,
        capacity_ratio: _,
    } = instance;

    if assignment_costs.dim() != (*n, *m) {
        error!(
            "assignment cost matrix has dimensions {:?}, expected ({n}, {m})",
            assignment_costs.dim()
        );
        return false;
    }
    if fixed_costs.len() != *n || capacities.len() != *n {
        error!(
            "{} fixed costs and {} capacities for {n} facilities",
            fixed_costs.len(),
            capacities.len()
        );
        return false;
    }
    if demands.len() != *m {
        error!("{} demands for {m} customers", demands.len());
        return false;
    }
    total_demand_matches(instance)
}

pub fn total_demand_matches(instance: &Instance) -> bool {
    let sum = instance.demands.iter().sum::<u64>();
    if sum != instance.total_demand {
        error!(
            "total demand {} does not match sum of demands {sum}",
            instance.total_demand
        );
        return false;
    }
    true
}

pub fn instance_is_uncapacitated(instance: &Instance) -> bool {
    let m = instance.n_customers as u64;
    instance.capacities.iter().all(|&s| s == m) && instance.demands.iter().all(|&d| d == 1)
}

/// Every fixed cost equals `(min_j c[i][j] + offset) * 10`
pub fn fixed_costs_follow_nearest_customer(instance: &Instance, offset: u64) -> bool {
    instance
        .assignment_costs
        .rows()
        .into_iter()
        .zip(instance.fixed_costs.iter())
        .all(|(row, &f)| match row.iter().min() {
            Some(&c_min) => f == (c_min + offset) * 10,
            None => true,
        })
}
