mod definition;
mod shell;

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "lampcfg")]
#[command(about = "lampcfg — configuration page generator for the LED strip web interface")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate config.html and style.css
    Build {
        /// Directory the generated files are written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Validate the schema without writing output
    Check {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Machine-readable `check` result.
#[derive(Serialize)]
struct JsonOut {
    ok: bool,
    diagnostics: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Build { out_dir } => cmd_build(&out_dir),
        Command::Check { json } => cmd_check(json),
    }
}

fn cmd_build(out_dir: &Path) {
    let schema = definition::schema();
    let output = lampcfg_codegen::compile(&schema);

    // Best-effort generation: problems are reported, the rest of the
    // document is still written.
    for diagnostic in &output.diagnostics {
        eprintln!("Schema error: {diagnostic}");
    }

    let document = shell::wrap(&output.html);
    let html_path = out_dir.join("config.html");
    let css_path = out_dir.join("style.css");

    if let Err(e) = std::fs::write(&html_path, document) {
        eprintln!("Error writing {}: {e}", html_path.display());
        std::process::exit(1);
    }
    if let Err(e) = std::fs::write(&css_path, &output.css) {
        eprintln!("Error writing {}: {e}", css_path.display());
        std::process::exit(1);
    }

    eprintln!("Built: {}", html_path.display());
    eprintln!("Built: {}", css_path.display());
}

fn cmd_check(json: bool) {
    let schema = definition::schema();
    let output = lampcfg_codegen::compile(&schema);
    let ok = output.diagnostics.is_empty();

    if json {
        let result = JsonOut {
            ok,
            diagnostics: output.diagnostics.iter().map(ToString::to_string).collect(),
        };
        match serde_json::to_string_pretty(&result) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error serializing result: {e}");
                std::process::exit(1);
            }
        }
    } else {
        for diagnostic in &output.diagnostics {
            eprintln!("Schema error: {diagnostic}");
        }
        if ok {
            let fields: usize = schema
                .pages
                .iter()
                .flat_map(|page| &page.groups)
                .map(|group| group.fields.len())
                .sum();
            eprintln!("OK: {} pages, {fields} fields", schema.pages.len());
        }
    }

    if !ok {
        std::process::exit(1);
    }
}
