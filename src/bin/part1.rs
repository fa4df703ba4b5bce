use anyhow::{Context, Result};
use clap::Parser;
use day12::Part1CLIArgs;

fn main() -> Result<()> {
    env_logger::init();
    let args = Part1CLIArgs::parse();
    for input_path in &args.input_paths {
        let records = day12::read_records(input_path).with_context(|| {
            format!(
                "Failed to read spring records from given file({}).",
                input_path.display()
            )
        })?;

        let arrangements_sum = day12::sum_counts(&records);
        println!(
            "The sum of possible arrangement counts of records in given file({}) is {}.",
            input_path.display(),
            arrangements_sum
        );
    }

    Ok(())
}
