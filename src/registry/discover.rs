//! Import path discovery via the local Python interpreter

use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Interpreters tried in order
const INTERPRETERS: [&str; 2] = ["python3", "python"];

/// Prints one `sys.path` entry per line
const SEARCH_PATH_SCRIPT: &str = "import sys\nfor p in sys.path:\n    print(p)";

/// Ask the local interpreter for its import search path.
///
/// Returns an empty list when no interpreter can be run, which makes every
/// lookup report the package as not installed.
pub fn discover_search_paths() -> Vec<PathBuf> {
    for interpreter in INTERPRETERS {
        match Command::new(interpreter)
            .args(["-c", SEARCH_PATH_SCRIPT])
            .output()
        {
            Ok(output) if output.status.success() => {
                let stdout = String::from_utf8_lossy(&output.stdout);
                let paths = parse_search_paths(&stdout);
                debug!(interpreter, roots = paths.len(), "discovered import path");
                return paths;
            }
            Ok(output) => {
                debug!(interpreter, status = %output.status, "interpreter exited with failure");
            }
            Err(e) => {
                debug!(interpreter, error = %e, "interpreter not available");
            }
        }
    }

    Vec::new()
}

/// Parse interpreter output into search roots, keeping first occurrence order
pub fn parse_search_paths(output: &str) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = Vec::new();
    for line in output.lines() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        let path = PathBuf::from(line);
        if !paths.contains(&path) {
            paths.push(path);
        }
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_paths() {
        let output = "/usr/lib/python312.zip\n/usr/lib/python3.12\n/usr/lib/python3/dist-packages\n";
        let paths = parse_search_paths(output);
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/usr/lib/python312.zip"),
                PathBuf::from("/usr/lib/python3.12"),
                PathBuf::from("/usr/lib/python3/dist-packages"),
            ]
        );
    }

    #[test]
    fn test_parse_search_paths_skips_empty_entries() {
        let paths = parse_search_paths("\n/venv/lib/site-packages\n\n");
        assert_eq!(paths, vec![PathBuf::from("/venv/lib/site-packages")]);
    }

    #[test]
    fn test_parse_search_paths_crlf() {
        let paths = parse_search_paths("C:\\Python\\Lib\\site-packages\r\n");
        assert_eq!(paths, vec![PathBuf::from("C:\\Python\\Lib\\site-packages")]);
    }

    #[test]
    fn test_parse_search_paths_dedupes() {
        let paths = parse_search_paths("/a\n/b\n/a\n");
        assert_eq!(paths, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
    }

    #[test]
    fn test_parse_search_paths_empty_output() {
        assert!(parse_search_paths("").is_empty());
    }

    #[test]
    fn test_discover_returns_non_empty_unique_paths() {
        // Contents depend on the host interpreter, if any
        let paths = discover_search_paths();
        assert!(paths.iter().all(|p| !p.as_os_str().is_empty()));
        for (i, path) in paths.iter().enumerate() {
            assert!(!paths[i + 1..].contains(path));
        }
    }
}
