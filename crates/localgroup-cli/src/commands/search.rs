use super::load_catalog;
use crate::cli::SearchArgs;
use crate::output::OutputWriter;
use crate::output_types::GalaxyRow;
use anyhow::Result;

pub fn execute(args: SearchArgs, output: &OutputWriter) -> Result<()> {
    let catalog = load_catalog()?;
    let matches = catalog.search(&args.text);

    if !output.is_json() {
        output.section(format!("{} matches for \"{}\"", matches.len(), args.text.trim()));
    }

    output.table(matches.into_iter().map(GalaxyRow::from).collect())
}
