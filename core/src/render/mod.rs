#![deny(missing_docs)]

//! # Markdown Rendering
//!
//! Writes an API description as the marker-annotated markdown read back by
//! [`crate::extract`]:
//!
//! ```text
//! #### GET /pets/{petId}
//!
//! $$$
//! Info for a pet
//! $$$
//!
//! $$$ name
//! showPetById
//! $$$
//! ...
//! ```
//!
//! - **samples**: Request snippets for the `code` component.
//! - **status**: Reason phrases for the `meaning` column.

pub mod samples;
pub mod status;

use crate::error::{AppError, AppResult};
use crate::extract::endpoint::ENDPOINT_MARKER;
use crate::markdown::{CODE_FENCE, COMPONENT_FENCE};
use crate::oas::operations::{base_url, RequirementView};
use crate::oas::{collect_operations, Operation};
use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

pub use samples::{render_sample, SampleLanguage, SampleRequest};
pub use status::status_meaning;

/// Turns an API description into a markdown document.
///
/// Implementations must emit the marker grammar understood by
/// [`crate::extract::parse_markdown_document`].
pub trait DocumentSource {
    /// Renders `api` (an OpenAPI 3.x or Swagger 2.0 object).
    fn render(&self, api: &Value) -> AppResult<String>;
}

/// Configuration of the [`MarkdownRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit the `code` component.
    pub code_samples: bool,
    /// List every operation's summary in the preamble.
    pub toc_summary: bool,
    /// Depth of tag headings, clamped to `1..=3`.
    pub headings: u8,
    /// Sample languages, in output order.
    pub language_tabs: Vec<SampleLanguage>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            code_samples: true,
            toc_summary: false,
            headings: 2,
            language_tabs: SampleLanguage::ALL.to_vec(),
        }
    }
}

/// The built-in [`DocumentSource`].
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Creates a renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// The active options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    fn heading(&self) -> String {
        "#".repeat(self.options.headings.clamp(1, 3) as usize)
    }

    fn preamble(&self, api: &Value, operations: &[Operation<'_>], out: &mut String) {
        let info = api.get("info");
        let text = |key: &str| {
            info.and_then(|i| i.get(key))
                .and_then(Value::as_str)
                .unwrap_or("")
                .trim()
        };

        let title = match text("title") {
            "" => "API",
            title => title,
        };
        out.push_str(&format!("# {}", escape_prose(title)));
        if !text("version").is_empty() {
            out.push_str(&format!(" v{}", escape_prose(text("version"))));
        }
        out.push_str("\n\n");

        if !text("description").is_empty() {
            out.push_str(&escape_prose(text("description")));
            out.push_str("\n\n");
        }

        let base = base_url(api);
        if !base.is_empty() {
            out.push_str(&format!("Base URLs:\n\n* <{}>\n\n", escape_prose(&base)));
        }

        if self.options.toc_summary {
            for op in operations {
                let summary = op.prose().first().copied().unwrap_or("");
                out.push_str(&format!(
                    "* {} {} {}\n",
                    op.method,
                    escape_prose(op.path),
                    escape_prose(summary)
                ));
            }
            out.push('\n');
        }
    }

    fn operation<'a>(
        &self,
        api: &'a Value,
        op: &Operation<'a>,
        base: &str,
        out: &mut String,
    ) -> AppResult<()> {
        out.push_str(&format!(
            "{} {} {}\n\n",
            ENDPOINT_MARKER,
            op.method,
            escape_prose(op.path)
        ));

        let prose = op.prose();
        if !prose.is_empty() {
            let lines: Vec<String> = prose.iter().map(|p| escape_prose(p)).collect();
            component(out, "", &lines.join("\n\n"));
        }

        component(out, "name", &escape_prose(&op.name()));

        let body = op.request_body(api);

        if self.options.code_samples && !self.options.language_tabs.is_empty() {
            let url = format!("{}{}", base, op.path);
            let accept = op.accept(api);
            let request = SampleRequest {
                method: op.method,
                url: &url,
                content_type: body.as_ref().map(|b| b.content_type.as_str()),
                accept: accept.as_deref(),
            };
            let mut code = String::new();
            for language in &self.options.language_tabs {
                let sample = escape_hashes(&render_sample(*language, &request));
                code.push_str(&fenced(language.label(), &sample));
            }
            component(out, "code", &code);
        }

        if let Some(body) = body {
            let mut text = format!("{}|{}\n", op.method, escape_field(op.path));
            if let Some(example) = &body.example {
                text.push_str(&fenced("json", &json_text(example)?));
            }
            component(out, "body", &text);
        }

        let parameters = op.parameters(api);
        if !parameters.is_empty() {
            let lines: Vec<String> = parameters
                .iter()
                .map(|p| {
                    [
                        escape_field(&p.name),
                        escape_field(&p.location),
                        escape_field(&p.ty),
                        p.required.to_string(),
                        escape_field(&p.description),
                    ]
                    .join("|")
                })
                .collect();
            component(out, "parameters", &lines.join("\n"));
        }

        let responses = op.responses(api);
        let mut text = String::new();
        for response in &responses {
            if let Some(example) = &response.example {
                text.push_str(&format!("> {} Response\n\n", escape_field(&response.code)));
                text.push_str(&fenced("json", &json_text(example)?));
                text.push('\n');
            }
        }
        for response in &responses {
            let code = escape_field(&response.code);
            text.push_str(&format!(
                "% {}|{}|{}|{}\n",
                code,
                status_meaning(&response.code),
                escape_field(&response.schema),
                escape_field(&response.description)
            ));
        }
        component(out, "responses", &text);

        let callbacks = op.callbacks(api);
        if !callbacks.is_empty() {
            let lines: Vec<String> = callbacks
                .iter()
                .map(|c| {
                    format!(
                        "{}|{}|{}",
                        escape_field(&c.name),
                        escape_field(&c.expression),
                        c.method
                    )
                })
                .collect();
            component(out, "callbacks", &lines.join("\n"));
        }

        component(out, "auth", &auth_text(&op.security(api)));
        Ok(())
    }
}

impl DocumentSource for MarkdownRenderer {
    fn render(&self, api: &Value) -> AppResult<String> {
        if api.get("openapi").is_none() && api.get("swagger").is_none() {
            return Err(AppError::Render(
                "Document declares neither 'openapi' nor 'swagger'".to_string(),
            ));
        }

        let operations = collect_operations(api);
        let base = base_url(api);
        let mut out = String::new();
        self.preamble(api, &operations, &mut out);

        let mut groups: IndexMap<&str, Vec<&Operation<'_>>> = IndexMap::new();
        for op in &operations {
            groups.entry(op.first_tag().unwrap_or("Default")).or_default().push(op);
        }

        let heading = self.heading();
        for (tag, ops) in groups {
            out.push_str(&format!("{} {}\n\n", heading, escape_prose(tag)));
            for op in ops {
                self.operation(api, op, &base, &mut out)?;
            }
        }

        debug!(operations = operations.len(), bytes = out.len(), "rendered markdown");
        Ok(out)
    }
}

fn component(out: &mut String, label: &str, body: &str) {
    let header = if label.is_empty() {
        COMPONENT_FENCE.to_string()
    } else {
        format!("{} {}", COMPONENT_FENCE, label)
    };
    out.push_str(&format!("{}\n{}\n{}\n\n", header, body.trim_end(), COMPONENT_FENCE));
}

fn fenced(label: &str, body: &str) -> String {
    format!("{}{}\n{}\n{}\n", CODE_FENCE, label, body, CODE_FENCE)
}

fn json_text(value: &Value) -> AppResult<String> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Render(format!("Failed to serialize example: {}", e)))?;
    // `#` is only legal inside JSON strings, where `\u0023` decodes back to it.
    Ok(text.replace(ENDPOINT_MARKER, "\\u0023###"))
}

fn auth_text(requirements: &[RequirementView]) -> String {
    if requirements.is_empty() {
        return "None".to_string();
    }
    requirements
        .iter()
        .map(|r| {
            let scheme = escape_field(&r.scheme);
            if r.scopes.is_empty() {
                scheme
            } else {
                format!("{} ( Scopes: {} )", scheme, escape_field(&r.scopes.join(" ")))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_hashes(text: &str) -> String {
    text.replace(ENDPOINT_MARKER, "\\#\\#\\#\\#")
}

/// Free text placed between blocks: no endpoint marker, no line opening a fence.
fn escape_prose(text: &str) -> String {
    escape_hashes(text)
        .split('\n')
        .map(|line| {
            let line = line.trim_end_matches('\r');
            if line.starts_with(COMPONENT_FENCE) || line.starts_with(CODE_FENCE) {
                format!("\\{}", line)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A single pipe-delimited column.
fn escape_field(text: &str) -> String {
    let flat = text
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .replace('|', "&#124;");
    let flat = escape_hashes(&flat);
    if flat.starts_with(COMPONENT_FENCE) || flat.starts_with(CODE_FENCE) {
        format!("\\{}", flat)
    } else {
        flat
    }
}
