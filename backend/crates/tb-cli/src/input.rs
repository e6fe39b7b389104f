use crate::{CliError, Result};

use tb_core::LinkRequest;

use std::path::Path;

use serde::de::DeserializeOwned;

/// Parse `SOURCE:TARGET[:COMMAND]`.
///
/// Ids are passed through untrimmed; emptiness is reported per item by the
/// link batch. Everything after the second colon is the link phrase.
pub fn parse_link_spec(spec: &str) -> Result<LinkRequest> {
    let mut parts = spec.splitn(3, ':');

    let (Some(source), Some(target)) = (parts.next(), parts.next()) else {
        return Err(CliError::input(format!(
            "link '{}' is not SOURCE:TARGET[:COMMAND]",
            spec
        )));
    };

    let command = parts.next().filter(|c| !c.trim().is_empty());

    Ok(LinkRequest::new(source, target, command))
}

/// JSON from an inline argument or from a file, whichever was given
pub fn read_json<T: DeserializeOwned>(inline: Option<&str>, file: Option<&Path>) -> Result<T> {
    match (inline, file) {
        (Some(text), _) => parse_json(text, "argument"),
        (None, Some(path)) => read_json_file(path),
        (None, None) => Err(CliError::input("no JSON input given")),
    }
}

pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path).map_err(|e| CliError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_json(&text, &path.display().to_string())
}

fn parse_json<T: DeserializeOwned>(text: &str, origin: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|e| CliError::Json {
        origin: origin.to_string(),
        source: e,
    })
}
