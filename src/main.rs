use anyhow::Result;
use crossterm::style::Stylize;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use csv_insight::config::Config;
use csv_insight::data::analyzer;
use csv_insight::data::csv_loader;
use csv_insight::data::data_view::DataView;
use csv_insight::data::demo;
use csv_insight::table_display;

#[derive(Debug, Default)]
struct CliArgs {
    file: Option<String>,
    demo: bool,
    sort: Option<String>,
    descending: bool,
    filter: Option<String>,
    json: bool,
    limit: Option<usize>,
}

fn print_help() {
    println!("{}", "csv-insight - CSV dataset profiler".blue().bold());
    println!();
    println!("{}", "Usage:".yellow());
    println!("  csv-insight [OPTIONS] [FILE.csv]");
    println!();
    println!("{}", "Options:".yellow());
    println!("  {}            - Load the built-in demo dataset", "--demo".green());
    println!("  {}      - Sort the grid by a column", "--sort <column>".green());
    println!("  {}            - Sort descending instead of ascending", "--desc".green());
    println!("  {}    - Keep rows containing text (any column)", "--filter <text>".green());
    println!("  {}         - Cap the grid at N rows for this run", "--rows <n>".green());
    println!("  {}            - Print the analysis report as JSON", "--json".green());
    println!("  {} - Write the default config file", "--generate-config".green());
    println!("  {}            - Show this help", "--help".green());
    println!();
    println!("{}", "Examples:".yellow());
    println!("  csv-insight sales.csv");
    println!("  csv-insight sales.csv --sort profit --desc --filter west");
    println!("  csv-insight --demo --json");
    println!();
}

fn parse_args() -> Result<Option<CliArgs>> {
    let mut args = CliArgs::default();
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(None);
            }
            "--generate-config" => {
                let path = Config::get_config_path()?;
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&path, Config::create_default_with_comments())?;
                println!("Config file written to: {}", path.display());
                return Ok(None);
            }
            "--demo" => args.demo = true,
            "--desc" => args.descending = true,
            "--json" => args.json = true,
            "--sort" => {
                args.sort = Some(
                    iter.next()
                        .ok_or_else(|| anyhow::anyhow!("--sort requires a column name"))?,
                )
            }
            "--filter" => {
                args.filter = Some(
                    iter.next()
                        .ok_or_else(|| anyhow::anyhow!("--filter requires a value"))?,
                )
            }
            "--rows" => {
                let n = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--rows requires a number"))?;
                args.limit = Some(n.parse()?);
            }
            other if other.starts_with("--") => {
                return Err(anyhow::anyhow!("Unknown option: {}", other));
            }
            path => args.file = Some(path.to_string()),
        }
    }

    Ok(Some(args))
}

fn main() -> Result<()> {
    // Logs go to stderr so tables stay clean on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => return Ok(()),
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            std::process::exit(2);
        }
    };

    let config = Config::load().unwrap_or_default();

    let dataset = if args.demo {
        demo::demo_dataset()
    } else if let Some(path) = &args.file {
        match csv_loader::load_csv_path(path) {
            Ok(dataset) => dataset,
            Err(e) => {
                // Keep whatever the user had on screen; just report and stop.
                eprintln!("{}", e.to_string().red());
                std::process::exit(1);
            }
        }
    } else if config.behavior.load_demo_when_empty {
        demo::demo_dataset()
    } else {
        print_help();
        return Ok(());
    };

    // Explicit pipeline: load -> analyze -> render. The analyzer sees the
    // full dataset; only the grid below is capped.
    let report = analyzer::analyze_with_fields(&dataset.rows, &dataset.fields);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", format!("Dataset: {}", dataset.name).cyan());
    table_display::display_summary(&report.summary);
    table_display::display_columns(&report.columns);

    let limit = args.limit.unwrap_or(config.display.max_table_rows);
    let mut view = DataView::new(Arc::new(dataset)).with_limit(limit);
    if let Some(needle) = &args.filter {
        view = view.filter_contains(needle);
    }
    if let Some(column) = &args.sort {
        view = match view.sort_by(column, !args.descending) {
            Ok(view) => view,
            Err(e) => {
                eprintln!("{}", e.to_string().red());
                std::process::exit(2);
            }
        };
    }
    table_display::display_rows(&view, config.display.show_row_numbers);

    Ok(())
}
