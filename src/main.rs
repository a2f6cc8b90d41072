use clap::Parser;
use route_patch::utils::{logger, validation::Validate};
use route_patch::{CliConfig, LinePatchPipeline, LocalStorage, PatchEngine, PatchError, PatchReport};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting route-patch");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let rules = match config.load_rules() {
        Ok(rules) => rules,
        Err(e) => fail(&e),
    };

    let storage = LocalStorage::default();
    let pipeline = LinePatchPipeline::new(storage, rules, config.patch_options());
    let engine = PatchEngine::new(pipeline);

    match engine.run().await {
        Ok(report) => {
            if config.json {
                match serde_json::to_string_pretty(&report).map_err(PatchError::from) {
                    Ok(json) => println!("{}", json),
                    Err(e) => fail(&e),
                }
            } else {
                print_summary(&report);
            }
        }
        Err(e) => fail(&e),
    }

    Ok(())
}

fn print_summary(report: &PatchReport) {
    for line in &report.replaced {
        println!(
            "  {}:{} {} -> placeholder",
            report.file, line.line_number, line.target
        );
    }

    if report.written {
        println!("Routes updated successfully");
    } else if report.has_changes() {
        println!("Dry run: {} route(s) would be updated", report.replaced.len());
    } else {
        println!("No routes needed updating");
    }

    if let Some(backup) = &report.backup {
        println!("Backup saved to: {}", backup);
    }
}

fn fail(e: &PatchError) -> ! {
    tracing::error!(
        "route-patch failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
