use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("pattern is required: use a file argument, - for stdin, or -p/--pattern")]
    Missing,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Pattern text plus where it came from, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedPattern {
    pub text: String,
    /// File path or `<stdin>`; `None` for inline text.
    pub origin: Option<String>,
}

pub fn load_pattern(
    pattern_path: Option<&Path>,
    pattern_text: Option<&str>,
) -> Result<LoadedPattern, LoadError> {
    if let Some(text) = pattern_text {
        return Ok(LoadedPattern {
            text: text.to_owned(),
            origin: None,
        });
    }

    match pattern_path {
        Some(path) if path.as_os_str() == "-" => load_stdin(),
        Some(path) => load_file(path),
        None => Err(LoadError::Missing),
    }
}

fn load_stdin() -> Result<LoadedPattern, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    Ok(LoadedPattern {
        text: strip_line_ending(buf),
        origin: Some("<stdin>".to_owned()),
    })
}

fn load_file(path: &Path) -> Result<LoadedPattern, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(LoadedPattern {
        text: strip_line_ending(content),
        origin: Some(path.to_string_lossy().into_owned()),
    })
}

/// Drop one trailing `\n` or `\r\n`; other whitespace is pattern text.
pub fn strip_line_ending(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
