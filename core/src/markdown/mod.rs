#![deny(missing_docs)]

//! # Markdown Scanning
//!
//! Primitives shared by the component extractors.

pub mod fence;

pub use fence::{scan_fences, FenceScanner, FencedBlock, CODE_FENCE, COMPONENT_FENCE};

/// Splits on `\n` only, keeping empty lines and any `\r`.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
}

/// Splits on `\n` and drops lines that are exactly empty.
pub fn non_empty_lines(text: &str) -> impl Iterator<Item = &str> {
    lines(text).filter(|line| !line.is_empty())
}

/// Splits `line` on `|`, dropping empty tokens.
pub fn pipe_tokens(line: &str) -> Vec<&str> {
    line.split('|').filter(|token| !token.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_lines_keeps_whitespace_lines() {
        let collected: Vec<&str> = non_empty_lines("a\n\n \nb\n").collect();
        assert_eq!(collected, vec!["a", " ", "b"]);
    }

    #[test]
    fn test_pipe_tokens_drops_empty() {
        assert_eq!(pipe_tokens("|a||b|"), vec!["a", "b"]);
        assert!(pipe_tokens("||").is_empty());
    }
}
