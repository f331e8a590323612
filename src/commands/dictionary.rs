//! `build-dictionary`: turn a plain word list into a dictionary document

use crate::error::Result;
use crate::wordlists::build_dictionary;
use crate::wordlists::loader::to_document;
use log::info;
use std::fs;
use std::path::Path;

/// Read `input` (one word per line) and write the dictionary to `output`
///
/// Returns the number of words written.
///
/// # Errors
///
/// Returns an error if either file cannot be accessed.
pub fn run_build_dictionary(input: &Path, output: &Path) -> Result<usize> {
    let lines = fs::read_to_string(input)?;
    let words = build_dictionary(&lines);
    fs::write(output, to_document(&words)? + "\n")?;
    info!(
        "wrote {} words from {} to {}",
        words.len(),
        input.display(),
        output.display()
    );
    Ok(words.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::load_from_file;

    #[test]
    fn builds_loadable_document() {
        let dir = std::env::temp_dir();
        let input = dir.join(format!("wordle_helper_words_{}.txt", std::process::id()));
        let output = dir.join(format!("wordle_helper_words_{}.json", std::process::id()));
        fs::write(&input, "Слива\nстол\nсушка\nслива\n\n").unwrap();

        assert_eq!(run_build_dictionary(&input, &output).unwrap(), 2);
        let words = load_from_file(&output).unwrap();
        assert_eq!(words[0].text(), "слива");
        assert_eq!(words[1].text(), "сушка");

        fs::remove_file(&input).unwrap();
        fs::remove_file(&output).unwrap();
    }
}
