#![deny(missing_docs)]

//! # Fence Scanner
//!
//! Line-at-a-time recognizer for paired fence markers.
//!
//! The same machine serves both marker kinds found in the generated markdown:
//! triple backticks around code/JSON, and `$$$` around endpoint components.
//!
//! Transition table:
//!
//! | state            | fence line                    | other line                    |
//! |------------------|-------------------------------|-------------------------------|
//! | `Idle`           | open, go to `CapturingLabel`  | ignored                       |
//! | `CapturingLabel` | emit empty block, go `Idle`   | start body, `CapturingBody`   |
//! | `CapturingBody`  | emit block, go `Idle`         | append to body                |
//!
//! Fences never nest. Input that ends while a block is open drops that block.

use tracing::trace;

/// Marker delimiting code and JSON blocks.
pub const CODE_FENCE: &str = "```";

/// Marker delimiting endpoint components.
pub const COMPONENT_FENCE: &str = "$$$";

/// A closed fence pair and everything between it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedBlock {
    /// Trimmed text following the marker on the opening line.
    pub label: String,
    /// Lines between the fences, each terminated by `\n`.
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ScanState {
    Idle,
    CapturingLabel { label: String },
    CapturingBody { label: String, body: String },
}

/// Push-driven fence recognizer.
#[derive(Debug, Clone)]
pub struct FenceScanner<'m> {
    marker: &'m str,
    state: ScanState,
}

impl<'m> FenceScanner<'m> {
    /// Creates an idle scanner for the given marker.
    pub fn new(marker: &'m str) -> Self {
        Self {
            marker,
            state: ScanState::Idle,
        }
    }

    /// Returns true while a block is open.
    pub fn is_open(&self) -> bool {
        !matches!(self.state, ScanState::Idle)
    }

    /// Returns true when `line` is a fence line for this scanner's marker.
    pub fn is_fence(&self, line: &str) -> bool {
        line.starts_with(self.marker)
    }

    /// Advances the machine by one line.
    ///
    /// Returns the completed block when `line` closes one.
    pub fn feed(&mut self, line: &str) -> Option<FencedBlock> {
        let is_fence = self.is_fence(line);
        let state = std::mem::replace(&mut self.state, ScanState::Idle);

        let (next, emitted) = match (state, is_fence) {
            (ScanState::Idle, true) => {
                let label = line[self.marker.len()..].trim().to_string();
                (ScanState::CapturingLabel { label }, None)
            }
            (ScanState::Idle, false) => (ScanState::Idle, None),
            (ScanState::CapturingLabel { label }, true) => (
                ScanState::Idle,
                Some(FencedBlock {
                    label,
                    body: String::new(),
                }),
            ),
            (ScanState::CapturingLabel { label }, false) => {
                let mut body = String::with_capacity(line.len() + 1);
                body.push_str(line);
                body.push('\n');
                (ScanState::CapturingBody { label, body }, None)
            }
            (ScanState::CapturingBody { label, body }, true) => {
                (ScanState::Idle, Some(FencedBlock { label, body }))
            }
            (ScanState::CapturingBody { label, mut body }, false) => {
                body.push_str(line);
                body.push('\n');
                (ScanState::CapturingBody { label, body }, None)
            }
        };

        self.state = next;
        emitted
    }

    /// Ends the scan.
    ///
    /// An unterminated block is discarded; its label is returned so callers can report it.
    pub fn finish(self) -> Option<String> {
        match self.state {
            ScanState::Idle => None,
            ScanState::CapturingLabel { label } | ScanState::CapturingBody { label, .. } => {
                trace!(marker = self.marker, label = %label, "discarding unterminated block");
                Some(label)
            }
        }
    }
}

/// Collects every closed block from `lines`, in document order.
pub fn scan_fences<'a, I>(lines: I, marker: &str) -> Vec<FencedBlock>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scanner = FenceScanner::new(marker);
    let blocks = lines
        .into_iter()
        .filter_map(|line| scanner.feed(line))
        .collect();
    scanner.finish();
    blocks
}
