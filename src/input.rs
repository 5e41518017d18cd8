//! Markdown input from a file or stdin.

use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// Display name used in output metadata.
    pub fn name(&self) -> String {
        match self {
            InputSource::File(path) => path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("file")
                .to_string(),
            InputSource::Stdin => "stdin".to_string(),
        }
    }
}

/// Pick the input source.
///
/// `-` selects stdin explicitly. Without a path, stdin is used only when it
/// is piped.
pub fn determine_input_source(path: Option<&Path>) -> Result<InputSource> {
    match path {
        Some(p) if p == Path::new("-") => Ok(InputSource::Stdin),
        Some(p) => Ok(InputSource::File(p.to_path_buf())),
        None if !std::io::stdin().is_terminal() => Ok(InputSource::Stdin),
        None => Err(Error::NoInput),
    }
}

/// Read the whole source into memory.
pub fn read_input(source: &InputSource) -> Result<String> {
    match source {
        InputSource::File(path) => std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        }),
        InputSource::Stdin => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(Error::Stdin)?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_explicit_sources() {
        assert_eq!(
            determine_input_source(Some(Path::new("-"))).unwrap(),
            InputSource::Stdin
        );
        assert_eq!(
            determine_input_source(Some(Path::new("post.md"))).unwrap(),
            InputSource::File(PathBuf::from("post.md"))
        );
    }

    #[test]
    fn test_read_file_input() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all("# 标题\n正文".as_bytes()).unwrap();

        let source = InputSource::File(file.path().to_path_buf());
        assert_eq!(read_input(&source).unwrap(), "# 标题\n正文");
    }

    #[test]
    fn test_read_missing_file() {
        let source = InputSource::File(PathBuf::from("/no/such/post.md"));
        assert!(matches!(read_input(&source), Err(Error::Io { .. })));
    }

    #[test]
    fn test_source_name() {
        assert_eq!(InputSource::File(PathBuf::from("a/b/post.md")).name(), "post.md");
        assert_eq!(InputSource::Stdin.name(), "stdin");
    }
}
