//! One-shot research CLI
//!
//! Runs the full pipeline for a single company, prints the fact sheet and
//! report, and writes `<company>_Report.docx`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use research_core::config::Config;
use research_core::domains::company::RecordField;
use research_core::domains::report::{compile_report, export_report, report_filename};
use research_core::kernel::ResearchDeps;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "research")]
#[command(about = "Research a company and export a sales report")]
struct Cli {
    /// Company name, e.g. "Apple"
    company: String,

    /// Directory the .docx report is written to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// .docx template (overrides DOCX_TEMPLATE_PATH)
    #[arg(long)]
    template: Option<PathBuf>,

    /// Print the fact sheet and report as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable with --json
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,research_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(template) = cli.template {
        config.docx_template_path = template;
    }

    let company = cli.company.trim();
    anyhow::ensure!(!company.is_empty(), "Company name must not be empty");

    let deps = ResearchDeps::from_config(&config).context("Failed to build dependencies")?;
    let compiled = compile_report(company, &deps).await;

    let bytes = export_report(&deps.docx_template_path, compiled.outcome.text())
        .context("Failed to export report")?;
    std::fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("Failed to create {}", cli.output_dir.display()))?;
    let output_path = cli.output_dir.join(report_filename(company));
    std::fs::write(&output_path, bytes)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&compiled)?);
    } else {
        for field in RecordField::ALL {
            println!("{:<26} {}", format!("{}:", field), compiled.record.get(field));
        }
        println!();
        if let Some(error) = compiled.outcome.error() {
            eprintln!("Report generation failed: {}", error);
        }
        println!("{}", compiled.outcome.text());
        println!();
    }
    eprintln!("Report written to {}", output_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_options() {
        let cli = Cli::try_parse_from([
            "research",
            "Acme Co",
            "--output-dir",
            "reports",
            "--template",
            "custom.docx",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.company, "Acme Co");
        assert_eq!(cli.output_dir, PathBuf::from("reports"));
        assert_eq!(cli.template, Some(PathBuf::from("custom.docx")));
        assert!(cli.json);
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["research", "Globex"]).unwrap();

        assert_eq!(cli.company, "Globex");
        assert_eq!(cli.output_dir, PathBuf::from("."));
        assert_eq!(cli.template, None);
        assert!(!cli.json);
    }

    #[test]
    fn test_company_is_required() {
        assert!(Cli::try_parse_from(["research", "--json"]).is_err());
    }
}
