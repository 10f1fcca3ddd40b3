use clap::Parser;
use mark_predictor::utils::logger;
use mark_predictor::{build_preprocessor, load_dataset, FEATURE_COLS, TARGET_COL};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "inspect_dataset")]
#[command(about = "Load the student dataset and print the preprocessing plan")]
struct Args {
    #[arg(long, help = "Dataset path (defaults to data/student_dataset_10k.csv)")]
    csv_path: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    let dataset = load_dataset(args.csv_path.as_deref())?;
    println!(
        "Loaded {} records with {} columns",
        dataset.records.len(),
        dataset.columns.len()
    );
    println!("Features: {}", FEATURE_COLS.join(", "));
    println!("Target: {}", TARGET_COL);

    let preprocessor = build_preprocessor();
    println!("Preprocessing plan over {} columns:", preprocessor.columns.len());
    for step in &preprocessor.steps {
        println!("- {}: {:?}", step.name, step.transform);
    }

    Ok(())
}
