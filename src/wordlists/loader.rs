//! Word list loading utilities
//!
//! Reads lexicon files for the alternatives filter.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines are skipped and surrounding whitespace trimmed. Case is kept so
/// the caller can tell proper nouns apart.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use spelling_bee::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/lexicon.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_text(&content))
}

/// Split text into trimmed, non-empty lines
///
/// # Examples
/// ```
/// use spelling_bee::wordlists::loader::words_from_text;
///
/// let words = words_from_text("hunk\n\n  chunk \n");
/// assert_eq!(words, vec!["hunk", "chunk"]);
/// ```
#[must_use]
pub fn words_from_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_text_skips_blank() {
        let words = words_from_text("hunk\n\n  \nchunk\r\n");
        assert_eq!(words, vec!["hunk", "chunk"]);
    }

    #[test]
    fn words_from_text_keeps_case() {
        assert_eq!(words_from_text("Heck\nheck"), vec!["Heck", "heck"]);
    }

    #[test]
    fn words_from_text_empty() {
        assert!(words_from_text("").is_empty());
    }

    #[test]
    fn load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "hunk\nchunk").unwrap();
        assert_eq!(load_from_file(file.path()).unwrap(), vec!["hunk", "chunk"]);
    }

    #[test]
    fn load_missing_file() {
        assert!(load_from_file("/no/such/lexicon.txt").is_err());
    }
}
