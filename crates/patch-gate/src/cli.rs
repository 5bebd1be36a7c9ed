//! Input loading for the `patch-gate` binary.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::gate::{validate_json_with, GateResult};
use crate::options::GateOptions;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot read document from stdin: {0}")]
    Stdin(#[source] std::io::Error),
    #[error("{what} is not valid JSON: {source}")]
    Json {
        what: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything one gate run needs.
#[derive(Debug, Clone)]
pub struct Inputs {
    pub doc: Value,
    pub schema: Value,
    pub patch: Value,
    pub options: GateOptions,
}

impl Inputs {
    /// Loads the inputs from files. The document comes from `stdin` when no
    /// path is given; options default when no config file is given.
    pub fn load(
        schema: &Path,
        patch: &Path,
        doc: Option<&Path>,
        config: Option<&Path>,
        stdin: impl Read,
    ) -> Result<Self, CliError> {
        let doc = match doc {
            Some(path) => read_json(path)?,
            None => parse("document", &read_stdin(stdin)?)?,
        };
        let options = match config {
            Some(path) => {
                let text = read_file(path)?;
                serde_json::from_str(&text).map_err(|source| CliError::Json {
                    what: path.display().to_string(),
                    source,
                })?
            }
            None => GateOptions::default(),
        };
        Ok(Self {
            doc,
            schema: read_json(schema)?,
            patch: read_json(patch)?,
            options,
        })
    }

    pub fn run(&self) -> GateResult {
        validate_json_with(&self.doc, &self.schema, &self.patch, &self.options)
    }
}

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn read_stdin(mut stdin: impl Read) -> Result<String, CliError> {
    let mut buf = String::new();
    stdin.read_to_string(&mut buf).map_err(CliError::Stdin)?;
    Ok(buf)
}

fn read_json(path: &Path) -> Result<Value, CliError> {
    parse(&path.display().to_string(), &read_file(path)?)
}

fn parse(what: &str, text: &str) -> Result<Value, CliError> {
    serde_json::from_str(text.trim()).map_err(|source| CliError::Json {
        what: what.to_string(),
        source,
    })
}
