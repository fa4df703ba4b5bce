use anyhow::{Context, Result};
use clap::Parser;
use day12::Part2CLIArgs;

fn main() -> Result<()> {
    env_logger::init();
    let args = Part2CLIArgs::parse();
    for input_path in &args.input_paths {
        let records = day12::read_records(input_path).with_context(|| {
            format!(
                "Failed to read spring records from given file({}).",
                input_path.display()
            )
        })?;

        let arrangements_sum = day12::sum_unfolded_counts(&records, args.factor);
        println!(
            "The sum of possible arrangement counts of records unfolded {} times in given file({}) is {}.",
            args.factor,
            input_path.display(),
            arrangements_sum
        );
    }

    Ok(())
}
