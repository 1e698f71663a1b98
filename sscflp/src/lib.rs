//! Generator of benchmark instances for the Single-Source Capacitated Facility Location Problem (SSCFLP).
//!
//! Two published generation methods are supported:
//! * [`generators::geometric`]: the Euclidean box method of Stidsen, Andersen & Dammann
//! * [`generators::unit_square`]: the unit square method of Cornuejols et al. with economies-of-scale fixed costs
//!
//! Generated instances can be converted to the uncapacitated variant (UFLP) with [`generators::uflp`]
//! and written to (or read from) the flat text format in [`io`].

/// Entities to model facility location instances
pub mod entities;

/// Instance generation algorithms and the stateful [`InstanceGenerator`](generators::InstanceGenerator)
pub mod generators;

/// Reading and writing instances in the flat text format
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
