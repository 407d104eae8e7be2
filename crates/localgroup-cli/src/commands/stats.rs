use super::build::display_stats;
use super::load_catalog;
use crate::output::OutputWriter;
use anyhow::Result;

pub fn execute(output: &OutputWriter) -> Result<()> {
    let stats = load_catalog()?.stats();

    if output.is_json() {
        return output.result(stats);
    }

    display_stats(output, &stats);
    Ok(())
}
