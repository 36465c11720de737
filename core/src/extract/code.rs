#![deny(missing_docs)]

//! # Code Samples
//!
//! Recovers the per-language samples of a `code` component.

use crate::extract::models::CodeSamples;
use crate::markdown::{lines, scan_fences, CODE_FENCE};

/// Maps every fenced block's label to its trimmed body.
///
/// Labels are used verbatim; a repeated label replaces the earlier sample.
pub fn extract_code_samples(source: &str) -> CodeSamples {
    let mut samples = CodeSamples::new();
    for block in scan_fences(lines(source), CODE_FENCE) {
        samples.insert(block.label, block.body.trim().to_string());
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_single_sample() {
        let samples = extract_code_samples("```shell\nls -la\n```\n");
        assert_eq!(samples.len(), 1);
        assert_eq!(samples["shell"], "ls -la");
    }

    #[test]
    fn test_multiple_languages_trimmed() {
        let source = "\n```shell\n\n  curl -X GET /pets\n\n```\n\n```python\nimport requests\nr = requests.get('/pets')\n```\n";
        let samples = extract_code_samples(source);
        assert_eq!(samples["shell"], "curl -X GET /pets");
        assert_eq!(samples["python"], "import requests\nr = requests.get('/pets')");
    }

    #[test]
    fn test_duplicate_label_overwrites() {
        let samples = extract_code_samples("```go\nfirst\n```\n```go\nsecond\n```");
        assert_eq!(samples.len(), 1);
        assert_eq!(samples["go"], "second");
    }

    #[test]
    fn test_unterminated_sample_dropped() {
        let samples = extract_code_samples("```ruby\nputs 1\n```\n```java\nclass A {}\n");
        assert!(samples.contains_key("ruby"));
        assert!(!samples.contains_key("java"));
    }
}
