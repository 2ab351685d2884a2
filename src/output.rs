//! Rendering of the treemap document.
//!
//! The JSON document is assigned to a JavaScript variable, either as a bare
//! script statement (`var tree = {...};`) to be loaded next to a webtreemap
//! page, or inlined into a standalone HTML page that loads `webtreemap.js`
//! and `webtreemap.css` from the same directory.

use serde::Deserialize;

use crate::treemap::TreemapNode;

/// Default JavaScript variable holding the document.
pub const DEFAULT_VARIABLE: &str = "tree";

/// JavaScript reserved words, which cannot name a variable.
const RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Shape of the rendered output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `var tree = {...};` followed by a newline
    #[default]
    Script,

    /// A complete HTML page embedding the script statement
    Html,
}

/// Options controlling how a document is rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Script statement or HTML page
    pub format: OutputFormat,

    /// Indent the JSON instead of emitting it on one line
    pub pretty: bool,

    /// JavaScript variable the document is assigned to
    pub variable: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: false,
            variable: DEFAULT_VARIABLE.to_string(),
        }
    }
}

/// Serialize the document as JSON, compact or indented.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(document: &TreemapNode, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    }
}

/// Render the document according to `options`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(document: &TreemapNode, options: &RenderOptions) -> serde_json::Result<String> {
    let json = to_json(document, options.pretty)?;

    Ok(match options.format {
        OutputFormat::Script => script_statement(&options.variable, &json),
        OutputFormat::Html => html_page(&document.name, &options.variable, &json),
    })
}

/// Whether `name` can be used as the JavaScript variable name.
///
/// Accepts plain ASCII identifiers: a letter, `_` or `$`, followed by
/// letters, digits, `_` or `$`. Reserved words are rejected.
#[must_use]
pub fn is_valid_variable(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        && !RESERVED_WORDS.contains(&name)
}

fn script_statement(variable: &str, json: &str) -> String {
    format!("var {variable} = {json};\n")
}

fn html_page(title: &str, variable: &str, json: &str) -> String {
    // `</` inside an inline script would end it early
    let script = script_statement(variable, &json.replace("</", "<\\/"));
    let title = escape_html(title);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<link rel="stylesheet" href="webtreemap.css">
<style>
body {{ font-family: sans-serif; font-size: 0.8em; margin: 2ex 4ex; }}
#map {{ width: 100%; height: 90vh; position: relative; cursor: pointer; }}
</style>
</head>
<body>
<h1>{title}</h1>
<div id="map"></div>
<script src="webtreemap.js"></script>
<script>
{script}appendTreemap(document.getElementById('map'), {variable});
</script>
</body>
</html>
"#
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
