//! Loading pattern and input text from arguments, files, or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Failure to obtain pattern or input text.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("{0} is required: pass it inline or use {1}")]
    Missing(&'static str, &'static str),

    #[error("{0} given both inline and as a file")]
    Ambiguous(&'static str),

    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot read both pattern and input from stdin")]
    StdinTwice,
}

pub fn load_pattern(text: Option<&str>, file: Option<&Path>) -> Result<String, LoadError> {
    load("pattern", "-p/--pattern-file", text, file)
}

pub fn load_input(
    text: Option<&str>,
    file: Option<&Path>,
    pattern_file: Option<&Path>,
) -> Result<String, LoadError> {
    if file.is_some_and(is_stdin) && pattern_file.is_some_and(is_stdin) {
        return Err(LoadError::StdinTwice);
    }
    load("input", "-i/--input-file", text, file)
}

fn load(
    what: &'static str,
    flag: &'static str,
    text: Option<&str>,
    file: Option<&Path>,
) -> Result<String, LoadError> {
    match (text, file) {
        (Some(_), Some(_)) => Err(LoadError::Ambiguous(what)),
        (Some(text), None) => Ok(text.to_owned()),
        (None, Some(path)) => read_path(path),
        (None, None) => Err(LoadError::Missing(what, flag)),
    }
}

fn read_path(path: &Path) -> Result<String, LoadError> {
    let read_err = |source: io::Error| LoadError::Read {
        path: path.to_path_buf(),
        source,
    };

    if is_stdin(path) {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(read_err)?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(read_err)
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}
