use clap::Parser;
use mark_predictor::utils::{logger, validation::Validate};
use mark_predictor::{build_suggestions, evaluate, CliConfig, Marks, Status};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting mark-predictor CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let marks = Marks::new(config.g1, config.g2, config.g3);
    let result = evaluate(&marks);
    let suggestions = build_suggestions(&marks, result.status, result.average);

    tracing::info!(
        "Verdict: {} (total {:.1}, average {:.1})",
        result.status,
        result.total,
        result.average
    );

    if config.json {
        let payload = serde_json::json!({
            "result": result,
            "suggestions": suggestions,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    match result.status {
        Status::Pass => println!("✅ PASS"),
        Status::Fail => println!("❌ FAIL"),
    }
    println!("Total Marks: {:.1}", result.total);
    println!("Average: {:.1}", result.average);

    if result.status == Status::Fail {
        println!();
        println!("Reasons for Failure:");
        for reason in &result.reasons {
            println!("- {}", reason);
        }
    }

    println!();
    println!("Suggestions to Improve:");
    for tip in &suggestions {
        println!("- {}", tip);
    }

    Ok(())
}
