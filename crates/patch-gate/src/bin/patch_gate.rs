//! `patch-gate`: check a JSON Patch against a schema before committing it.
//!
//! Usage:
//!   patch-gate --schema schema.json --patch patch.json [--doc doc.json] [--config options.json]
//!
//! The document is read from stdin unless `--doc` is given. The result is
//! printed as JSON; the exit status is 1 when the mutation is rejected and
//! 2 when the inputs cannot be read.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use patch_gate::cli::Inputs;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Validate a JSON Patch against a schema with immutable fields")]
struct Args {
    /// Schema description (JSON)
    #[arg(long)]
    schema: PathBuf,
    /// RFC 6902 patch (JSON array)
    #[arg(long)]
    patch: PathBuf,
    /// Original document; read from stdin when omitted
    #[arg(long)]
    doc: Option<PathBuf>,
    /// Gate options (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let inputs = match Inputs::load(
        &args.schema,
        &args.patch,
        args.doc.as_deref(),
        args.config.as_deref(),
        io::stdin().lock(),
    ) {
        Ok(inputs) => inputs,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    let result = inputs.run();
    match serde_json::to_string(&result) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    }

    if result.is_accepted() {
        ExitCode::SUCCESS
    } else {
        info!(error = ?result.error.as_ref().map(|e| e.kind), test = ?result.test, "mutation rejected");
        ExitCode::from(1)
    }
}
