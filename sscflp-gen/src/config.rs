use anyhow::Result;
use serde::{Deserialize, Serialize};
use sscflp::entities::Instance;
use sscflp::generators::{GeometricParams, InstanceGenerator, UnitSquareParams};

/// Configuration of a generation run: every job results in one instance file
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GenConfig {
    pub jobs: Vec<GenJob>,
}

/// A single instance to generate
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GenJob {
    /// Name of the instance, the file is written to `<name>.txt`
    pub name: String,
    /// Generation method and its parameters
    #[serde(flatten)]
    pub method: GenMethod,
    /// Convert the generated instance to an uncapacitated instance before writing it
    #[serde(default)]
    pub uflp: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum GenMethod {
    Geometric(GeometricParams),
    UnitSquare(UnitSquareParams),
}

impl GenMethod {
    pub fn validate(&self) -> Result<()> {
        match self {
            GenMethod::Geometric(p) => p.validate(),
            GenMethod::UnitSquare(p) => p.validate(),
        }
    }

    pub fn generate<'a>(&self, generator: &'a mut InstanceGenerator) -> Result<&'a Instance> {
        match self {
            GenMethod::Geometric(p) => generator.generate_geometric(p),
            GenMethod::UnitSquare(p) => generator.generate_unit_square(p),
        }
    }
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            jobs: vec![
                GenJob {
                    name: "StidsenAndersenDammannInstance".to_string(),
                    method: GenMethod::Geometric(GeometricParams {
                        n_facilities: 5,
                        n_customers: 10,
                        box_low: 0.0,
                        box_high: 10.0,
                        demand_low: 5,
                        demand_high: 10,
                        capacity_low: 10,
                        capacity_high: 20,
                        seed: 1,
                    }),
                    uflp: false,
                },
                GenJob {
                    name: "CornuejolsInstance".to_string(),
                    method: GenMethod::UnitSquare(UnitSquareParams {
                        n_facilities: 5,
                        n_customers: 10,
                        demand_low: 5,
                        demand_high: 35,
                        capacity_low: 10,
                        capacity_high: 160,
                        ratio: 3.0,
                        seed: 1,
                    }),
                    uflp: false,
                },
            ],
        }
    }
}
