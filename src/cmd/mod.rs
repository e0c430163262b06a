pub mod batch;
pub mod compare;
pub mod remuneration;
pub mod schema;

use crate::core::Inputs;
use anyhow::Context;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Read a JSON inputs document from a file (or stdin with "-")
pub fn read_inputs(path: &Path) -> anyhow::Result<Inputs> {
    if path.as_os_str() == "-" {
        read_from_stdin()
    } else {
        read_from_file(path)
    }
}

fn read_from_file(path: &Path) -> anyhow::Result<Inputs> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(file);
    let inputs = serde_json::from_reader(reader)
        .with_context(|| format!("parsing inputs from {}", path.display()))?;
    Ok(inputs)
}

fn read_from_stdin() -> anyhow::Result<Inputs> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.iter().all(u8::is_ascii_whitespace) {
        anyhow::bail!("No input received. Provide a file or pipe JSON to stdin.");
    }

    let inputs = serde_json::from_slice(&buffer).context("parsing inputs from stdin")?;
    Ok(inputs)
}
