//! CSV export of finalized aggregate statistics.

use std::io::Write;

use crate::error::SimError;
use crate::montecarlo::aggregate::AggregateSummary;

/// Write the win histogram as `rider,wins,win_fraction` rows.
pub fn write_histogram_csv<W: Write>(summary: &AggregateSummary, writer: W) -> Result<(), SimError> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["rider", "wins", "win_fraction"])?;
    for (name, count) in &summary.win_counts {
        let fraction = summary.win_fractions.get(name).copied().unwrap_or(0.0);
        let wins = count.to_string();
        let fraction = format!("{fraction:.6}");
        out.write_record([name.as_str(), wins.as_str(), fraction.as_str()])?;
    }
    out.flush()?;
    Ok(())
}

/// Write pooled winner-trait means as `trait,mean` rows.
pub fn write_trait_means_csv<W: Write>(
    summary: &AggregateSummary,
    writer: W,
) -> Result<(), SimError> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["trait", "mean"])?;
    for (trait_name, mean) in &summary.winner_trait_means {
        let mean = format!("{mean:.6}");
        out.write_record([trait_name.as_str(), mean.as_str()])?;
    }
    out.flush()?;
    Ok(())
}
