//! locsync CLI - translation data conversion and locale validation
//!
//! # Commands
//!
//! ```bash
//! locsync convert en_web           # translations/en_web.csv → locales/web/en_web.json
//! locsync export en_web            # locales/web/en_web.json → translations/en_web.csv
//! locsync check zh ja --base en    # validate locales against locales/en.json
//! locsync platform en zh           # locales/<lang>.json → strings.xml + .resx
//! ```
//!
//! All commands resolve paths under the current directory unless `--root`
//! points elsewhere. `check` exits 1 when any target locale is incomplete.

use clap::{Parser, Subcommand};
use locsync::{check_translations, convert_csv, export_android, export_json, export_resx, Layout};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "locsync")]
#[command(about = "Convert translation spreadsheets and validate locale completeness", long_about = None)]
struct Cli {
    /// Root of the translation tree (default: current directory)
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a translation spreadsheet to a JSON locale dictionary
    Convert {
        /// Spreadsheet name (reads translations/<name>.csv)
        name: String,
    },

    /// Export a JSON locale dictionary to a translation spreadsheet
    Export {
        /// Dictionary name (reads locales/web/<name>.json)
        name: String,
    },

    /// Check target locales against the base locale and sort the files
    Check {
        /// Target language codes (reads locales/<lang>.json)
        #[arg(required = true)]
        languages: Vec<String>,

        /// Base language code
        #[arg(short, long, default_value = "en")]
        base: String,
    },

    /// Export locales as Android strings.xml and Windows .resx resources
    Platform {
        /// Language codes (reads locales/<lang>.json)
        #[arg(required = true)]
        languages: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    let layout = Layout::new(&cli.root);

    let result = match cli.command {
        Commands::Convert { name } => cmd_convert(&layout, &name),
        Commands::Export { name } => cmd_export(&layout, &name),
        Commands::Check { languages, base } => cmd_check(&layout, &base, &languages),
        Commands::Platform { languages } => cmd_platform(&layout, &languages),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_convert(layout: &Layout, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let input = layout.translations_csv(name);
    let output = layout.web_locale(name);
    eprintln!("📄 Converting: {}", input.display());

    // Later duplicates lose to the first occurrence without comment;
    // the exporter is the place that reports duplicate keys.
    let outcome = convert_csv(&input, &output)?;

    println!("✅ JSON file has been created: {}", output.display());
    println!("   {} keys written", outcome.key_count);

    Ok(())
}

fn cmd_export(layout: &Layout, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let input = layout.web_locale(name);
    let output = layout.translations_csv(name);
    eprintln!("📄 Exporting: {}", input.display());

    let outcome = export_json(&input, &output)?;

    if outcome.duplicate_keys.is_empty() {
        println!("✅ No duplicate keys found.");
    } else {
        eprintln!(
            "⚠️  Warning: duplicate keys found: {}",
            outcome.duplicate_keys.join(", ")
        );
    }
    println!("✅ CSV file has been created: {}", output.display());
    println!("   {} rows written", outcome.row_count);

    Ok(())
}

fn cmd_check(
    layout: &Layout,
    base: &str,
    languages: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let base_path = layout.locale(base);
    let mut incomplete = false;

    for lang in languages {
        let target_path = layout.locale(lang);
        let report = check_translations(&base_path, &target_path)?;

        for path in &report.mismatched {
            eprintln!("⚠️  {}.json: '{}' is nested in {} but flat here", lang, path, base);
        }

        if report.is_complete() {
            println!("✅ {}.json is complete.", lang);
        } else {
            incomplete = true;
            println!("❌ {}.json is missing the following keys:", lang);
            for path in &report.missing {
                println!("   - {}", path);
            }
        }

        println!("🔄 Successfully sorted {}.json and {}.json.", base, lang);
    }

    if incomplete {
        std::process::exit(1);
    }

    Ok(())
}

fn cmd_platform(layout: &Layout, languages: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    for lang in languages {
        let input = layout.locale(lang);
        eprintln!("📄 Exporting platform resources: {}", input.display());

        let xml_path = layout.android_strings(lang);
        let outcome = export_android(&input, &xml_path)?;
        println!("✅ Successfully generated Android XML: {}", xml_path.display());

        let resx_path = layout.windows_resx(lang);
        export_resx(&input, &resx_path)?;
        println!("✅ Successfully generated Windows RESX: {}", resx_path.display());

        println!("   {} strings exported", outcome.string_count);
    }

    Ok(())
}
