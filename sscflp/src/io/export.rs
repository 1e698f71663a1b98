use std::fmt;
use std::io::Write;

use anyhow::Result;

use crate::entities::Instance;

/// Displays an [`Instance`] in the flat text format:
///
/// ```text
/// n   m
///
/// s[1]    f[1]
/// ...
/// s[n]    f[n]
///
/// d[1] d[2] ... d[m]
///
/// c[1][1] c[1][2] ... c[1][m]
/// ...
/// c[n][1] c[n][2] ... c[n][m]
/// ```
///
/// The header and the capacity/fixed cost pairs are tab separated,
/// every demand and assignment cost is followed by a single space.
pub struct InstanceText<'a>(pub &'a Instance);

impl fmt::Display for InstanceText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let instance = self.0;
        writeln!(f, "{}\t{}", instance.n_facilities, instance.n_customers)?;
        writeln!(f)?;

        for (s, fc) in instance.capacities.iter().zip(instance.fixed_costs.iter()) {
            writeln!(f, "{s}\t{fc}")?;
        }
        writeln!(f)?;

        for d in &instance.demands {
            write!(f, "{d} ")?;
        }
        writeln!(f)?;
        writeln!(f)?;

        for row in instance.assignment_costs.rows() {
            for c in row {
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Writes `instance` in the flat text format to `writer`.
pub fn write_instance<W: Write>(instance: &Instance, mut writer: W) -> Result<()> {
    write!(writer, "{}", InstanceText(instance))?;
    writer.flush()?;
    Ok(())
}
