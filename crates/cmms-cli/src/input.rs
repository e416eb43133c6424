//! Resolution of document arguments: inline text, `@FILE`, or `-` for stdin.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

pub fn read_document(arg: &str) -> Result<String> {
    if arg == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("read stdin")?;
        return Ok(text);
    }
    match arg.strip_prefix('@') {
        Some(path) => {
            let path = Path::new(path);
            std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
        }
        None => Ok(arg.to_string()),
    }
}
