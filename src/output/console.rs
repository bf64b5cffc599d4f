//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the resolved run settings.
pub fn print_config_summary(
    text_file: &str,
    source_dir: &str,
    output_dir: &str,
    extension: &str,
    workers: usize,
) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Text file: {}", text_file);
    println!("  Source:    {}", source_dir);
    println!("  Output:    {}", output_dir);
    println!("  Extension: {}", extension);
    println!("  Workers:   {}", workers);
    println!();
}
