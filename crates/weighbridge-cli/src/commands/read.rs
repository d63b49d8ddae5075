//! The read command: wire the scale into the adapter and print the reading.

use tracing::{debug, info, instrument};

use weighbridge_adapters::InfantScale;
use weighbridge_core::application::MetricWeightAdapter;

use crate::{error::CliResult, output::OutputManager};

/// Perform the single read/convert cycle.
///
/// Production wiring lives here and nowhere else: the infant scale is the
/// one real adaptee, injected into the metric adapter at construction.
#[instrument(skip_all)]
pub fn execute(output: &OutputManager) -> CliResult<()> {
    let adapter = MetricWeightAdapter::new(Box::new(InfantScale::new()));

    let kilograms = adapter.weight_in_kilograms();
    info!(%kilograms, "Reading converted");

    debug!(format = ?output.format(), "Emitting reading");
    output.reading(kilograms)?;
    Ok(())
}
