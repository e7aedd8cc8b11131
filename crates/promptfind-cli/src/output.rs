//! Output formatting for the CLI.

use url::Url;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

/// Print a list of resources in the specified format.
///
/// Human output shows filesystem paths; JSON and YAML carry the full URLs.
pub fn print_resources(resources: &[Url], empty_message: &str, format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            if resources.is_empty() {
                println!("{empty_message}");
                return;
            }
            for resource in resources {
                match resource.to_file_path() {
                    Ok(path) => println!("{}", path.display()),
                    Err(()) => println!("{resource}"),
                }
            }
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(resources).expect("Failed to serialize to JSON")
            );
        }
        OutputFormat::Yaml => {
            println!(
                "{}",
                serde_yaml::to_string(resources).expect("Failed to serialize to YAML")
            );
        }
    }
}

/// Print a success message in the specified format.
pub fn print_success(message: &str, format: OutputFormat) {
    match format {
        OutputFormat::Human => println!("{message}"),
        OutputFormat::Json => {
            println!(r#"{{"status": "ok", "message": "{message}"}}"#);
        }
        OutputFormat::Yaml => {
            println!("status: ok\nmessage: {message}");
        }
    }
}
