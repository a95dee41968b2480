//! Bot-reply formatting: a fixed-order pipeline of text-to-markup passes.
//!
//! DESIGN
//! ======
//! The chat backend answers in a constrained markdown subset (headings, bold,
//! italic, dash lists, blank-line paragraphs). Rendering is a chain of pure
//! string-to-string stages applied in a fixed order; later stages match text
//! produced by earlier ones (item wrapping must run before list coalescing,
//! bold before italic so `**` pairs are never split).
//!
//! This is a best-effort formatter, not a markdown parser: no escaping, no
//! nested emphasis, no recovery from unbalanced markers. It is applied to
//! bot-authored content only; user text goes into the transcript as literal
//! text nodes and must never pass through here. The output is not safe to
//! feed back in: re-rendering rendered text nests list containers, so callers
//! keep the raw reply and render on display.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use std::sync::LazyLock;

use regex::Regex;

static HEADING_1: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# (.*)$").unwrap());
static HEADING_2: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^## (.*)$").unwrap());
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^- (.*)\n?").unwrap());
static ITEM_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<li>.*?</li>").unwrap());

/// Render a bot reply to an HTML fragment.
///
/// Stage order is load-bearing; see the module docs.
#[must_use]
pub fn render_markup(source: &str) -> String {
    let text = headings(source);
    let text = bold(&text);
    let text = italic(&text);
    let text = list_items(&text);
    let text = coalesce_lists(&text);
    line_breaks(&text)
}

/// Lines beginning `# ` / `## ` become `<h4>` / `<h5>` headings.
///
/// Anchored to line starts, so a mid-line `# ` is left alone and the `# `
/// rule cannot eat the first marker of a `## ` line. The line terminator
/// stays in place for the line-break stage.
fn headings(text: &str) -> String {
    let text = HEADING_1.replace_all(text, "<h4>${1}</h4>");
    HEADING_2.replace_all(&text, "<h5>${1}</h5>").into_owned()
}

/// `**text**` becomes strong emphasis, non-greedy.
fn bold(text: &str) -> String {
    BOLD.replace_all(text, "<strong>${1}</strong>").into_owned()
}

/// `*text*` becomes light emphasis, non-greedy. Runs after [`bold`].
fn italic(text: &str) -> String {
    ITALIC.replace_all(text, "<em>${1}</em>").into_owned()
}

/// Lines beginning `- ` become `<li>` items.
///
/// The trailing newline is consumed so consecutive items abut, which is what
/// lets [`coalesce_lists`] merge them into one container.
fn list_items(text: &str) -> String {
    LIST_ITEM.replace_all(text, "<li>${1}</li>").into_owned()
}

/// Wrap each `<li>…</li>` span in its own `<ul>`, then dissolve adjacent
/// `</ul><ul>` boundaries so a run of items shares a single list.
fn coalesce_lists(text: &str) -> String {
    if !text.contains("<li>") {
        return text.to_owned();
    }
    let wrapped = ITEM_SPAN.replace_all(text, "<ul>${0}</ul>");
    wrapped.replace("</ul><ul>", "")
}

/// Blank lines become paragraph breaks, remaining newlines become `<br>`.
fn line_breaks(text: &str) -> String {
    text.replace("\n\n", "<br><br>").replace('\n', "<br>")
}
