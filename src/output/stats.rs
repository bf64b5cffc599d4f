//! Statistics reporting.

use console::style;

use crate::rename::{RenameOutcome, RenamePlan};

/// Print the result of a rename run.
pub fn print_rename_stats(outcome: &RenameOutcome) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Rename Statistics:").bold());
    println!("  Renamed:  {}/{}", style(outcome.succeeded()).green(), outcome.total);
    if outcome.failed() > 0 {
        println!("  Failed:   {}", style(outcome.failed()).red());
        for failure in outcome.failures() {
            if let Err(e) = &failure.result {
                println!(
                    "    {} -> {}: {}",
                    failure.task.source_filename(),
                    failure.task.destination_filename(),
                    e
                );
            }
        }
    }
    if outcome.images_dropped > 0 {
        println!(
            "  Unnamed:  {} images left untouched",
            style(outcome.images_dropped).yellow()
        );
    }
    if outcome.names_dropped > 0 {
        println!(
            "  Unused:   {} item names without an image",
            style(outcome.names_dropped).yellow()
        );
    }
    println!("{}", style("═".repeat(50)).dim());
}

/// Print the pairings of a dry run.
pub fn print_plan(plan: &RenamePlan) {
    println!();
    println!("{}", style("Planned renames:").bold());
    for task in &plan.tasks {
        println!(
            "  {:>4}. {} -> {}",
            task.position,
            task.source_filename(),
            task.destination_filename()
        );
    }
    println!(
        "  {} renames, {} images and {} names skipped",
        plan.len(),
        plan.images_dropped,
        plan.names_dropped
    );
}
