//! Image Renamer - CLI entry point.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use image_renamer::{
    cli::Args,
    config::{validate_config, Config},
    error::{exit_codes, Error, Result},
    names::{extract_item_names, resolve_text_file},
    output::{
        print_config_summary, print_error, print_info, print_plan, print_rename_stats,
        print_success, print_warning,
    },
    rename::{plan_renames, rename_images, RenameOptions},
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(exit_codes::FAILURE as u8)
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Load configuration, CLI flags win
    let mut config = Config::load_or_default(&args.config)?;
    args.merge_into_config(&mut config);
    validate_config(&config)?;

    // Resolve and read the names file
    let text_file = resolve_text_file(
        config.input.text_file.as_deref(),
        Path::new(""),
        &config.input.candidates,
    )?;

    let names = extract_item_names(&text_file);
    if names.is_empty() {
        return Err(Error::NoItemNames(text_file));
    }

    let options = RenameOptions::from_config(&config.rename, !args.quiet)?;

    if !args.quiet {
        print_config_summary(
            &text_file.display().to_string(),
            &options.source_dir.display().to_string(),
            &options.output_dir.display().to_string(),
            &options.extension,
            options.workers,
        );
    }

    if args.dry_run {
        let plan = plan_renames(&options, &names)?;
        print_plan(&plan);
        if plan.is_empty() {
            return Err(Error::NothingRenamed {
                total: 0,
                failed: 0,
            });
        }
        print_info("Dry run, no files were copied");
        return Ok(());
    }

    let outcome = rename_images(&options, &names).await?;
    print_rename_stats(&outcome);

    if let Some(report_path) = &args.report {
        let report = outcome.to_report(&options.source_dir, &options.output_dir, &options.extension);
        match report.save(report_path) {
            Ok(()) => print_info(&format!("Report written to {}", report_path.display())),
            Err(e) => print_warning(&format!(
                "Failed to write report {}: {}",
                report_path.display(),
                e
            )),
        }
    }

    if outcome.succeeded() == 0 {
        return Err(Error::NothingRenamed {
            total: outcome.total,
            failed: outcome.failed(),
        });
    }

    print_success("Image renaming complete!");

    Ok(())
}
