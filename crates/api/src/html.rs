//! HTML rendering of dashboard pages.
//!
//! Pages arrive as [`Block`] lists from `springfield_core`; this module wraps
//! them in the dashboard layout (title, sidebar menu, sidebar image). All
//! dynamic text is escaped. Paragraph text supports the inline subset used by
//! the narrative: `**bold**`, `*italic*` and `[label](url)`.

use std::fmt::Write;

use springfield_core::narrative::SIDEBAR_IMAGE;
use springfield_core::{Block, DatasetSelection, Page, RenderedPage, Table};

/// URL prefix the image directory is served under.
pub const IMAGE_ROUTE: &str = "/img";

const STYLE: &str = "\
body{background-color:yellow;margin:0;font-family:'Source Sans Pro',sans-serif;color:#262730}
.layout{display:flex;min-height:100vh}
.sidebar{width:260px;flex-shrink:0;padding:24px 16px;background:#f0f2f6}
.sidebar select{width:100%;padding:6px;font-size:15px}
.sidebar img{width:100%;margin-top:16px}
main{flex:1;max-width:900px;padding:24px 48px}
table.dataframe{border-collapse:collapse;font-size:13px;margin:12px 0;display:block;overflow-x:auto}
table.dataframe th,table.dataframe td{border:1px solid #d0d0d0;padding:4px 8px;text-align:left;vertical-align:top}
table.dataframe th{background:#fafafa}
figure{margin:16px 0}
figure img{width:100%}
figcaption{font-size:13px;color:#555;text-align:center}
";

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render inline markup to HTML.
///
/// `***` opens or closes bold italics. A marker that is never closed stays
/// literal text, so the output is always balanced.
pub fn inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut open: Vec<Open> = Vec::new();
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        if let Some(after) = rest.strip_prefix("***") {
            let both_open = ["strong", "em"]
                .iter()
                .all(|tag| open.iter().any(|o| o.tag == *tag));
            if both_open {
                toggle(&mut out, &mut open, EM);
                toggle(&mut out, &mut open, STRONG);
            } else {
                toggle(&mut out, &mut open, STRONG);
                toggle(&mut out, &mut open, EM);
            }
            rest = after;
        } else if let Some(after) = rest.strip_prefix("**") {
            toggle(&mut out, &mut open, STRONG);
            rest = after;
        } else if let Some(after) = rest.strip_prefix('*') {
            toggle(&mut out, &mut open, EM);
            rest = after;
        } else if let Some((label, url, after)) = split_link(rest) {
            let _ = write!(out, "<a href=\"{}\">{}</a>", escape(url), inline(label));
            rest = after;
        } else {
            out.push_str(&escape(&rest[..ch.len_utf8()]));
            rest = &rest[ch.len_utf8()..];
        }
    }

    // Unclosed entries sit in ascending output order.
    while let Some(unclosed) = open.pop() {
        let tag_len = unclosed.tag.len() + 2;
        out.replace_range(unclosed.at..unclosed.at + tag_len, unclosed.marker);
    }
    out
}

const STRONG: (&str, &str) = ("strong", "**");
const EM: (&str, &str) = ("em", "*");

/// An emphasis tag written at byte `at` of the output and not yet closed.
struct Open {
    tag: &'static str,
    marker: &'static str,
    at: usize,
}

fn push_open(out: &mut String, open: &mut Vec<Open>, (tag, marker): (&'static str, &'static str)) {
    open.push(Open {
        tag,
        marker,
        at: out.len(),
    });
    let _ = write!(out, "<{tag}>");
}

/// Open `tag`, or close it (closing and reopening anything nested inside).
fn toggle(out: &mut String, open: &mut Vec<Open>, (tag, marker): (&'static str, &'static str)) {
    let Some(pos) = open.iter().rposition(|o| o.tag == tag) else {
        push_open(out, open, (tag, marker));
        return;
    };

    let nested: Vec<Open> = open.drain(pos + 1..).collect();
    for o in nested.iter().rev() {
        let _ = write!(out, "</{}>", o.tag);
    }
    let _ = write!(out, "</{tag}>");
    open.pop();
    for o in nested {
        push_open(out, open, (o.tag, o.marker));
    }
}

/// Split `[label](url)rest` into its parts.
fn split_link(text: &str) -> Option<(&str, &str, &str)> {
    let body = text.strip_prefix('[')?;
    let (label, after_label) = body.split_once("](")?;
    let (url, rest) = after_label.split_once(')')?;
    (!label.contains(']') && !url.contains(char::is_whitespace)).then_some((label, url, rest))
}

/// Render a dataframe-style table.
pub fn table(table: &Table) -> String {
    let mut out = String::from("<table class=\"dataframe\"><thead><tr>");
    for header in table.headers() {
        let _ = write!(out, "<th>{}</th>", escape(header));
    }
    out.push_str("</tr></thead><tbody>");
    for row in table.rows() {
        out.push_str("<tr>");
        for cell in row {
            let _ = write!(out, "<td>{}</td>", escape(cell));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    out
}

pub fn block(block: &Block) -> String {
    match block {
        Block::Heading { level, text } => {
            let level = (*level).clamp(1, 6);
            format!("<h{level}>{}</h{level}>", inline(text))
        }
        Block::Paragraph { text } => format!("<p>{}</p>", inline(text)),
        Block::List { items } => {
            let items: String = items
                .iter()
                .map(|item| format!("<li>{}</li>", inline(item)))
                .collect();
            format!("<ul>{items}</ul>")
        }
        Block::Table { table: t } => table(t),
        Block::Download { link } => format!(
            "<p><a href=\"{}\" download=\"{}\">{}</a></p>",
            escape(&link.href),
            escape(&link.file_name),
            escape(&link.label)
        ),
        Block::Image { src, caption } => format!(
            "<figure><img src=\"{IMAGE_ROUTE}/{}\" alt=\"{}\"><figcaption>{}</figcaption></figure>",
            escape(src),
            escape(caption),
            escape(caption)
        ),
    }
}

fn select<T: Copy + PartialEq>(
    name: &str,
    label: &str,
    options: &[T],
    selected: T,
    text: fn(&T) -> &'static str,
) -> String {
    let mut out = format!(
        "<label for=\"{name}\">{label}</label><select id=\"{name}\" name=\"{name}\" onchange=\"this.form.submit()\">"
    );
    for option in options {
        let value = escape(text(option));
        let marker = if *option == selected { " selected" } else { "" };
        let _ = write!(out, "<option value=\"{value}\"{marker}>{value}</option>");
    }
    out.push_str("</select><noscript><button type=\"submit\">Show</button></noscript>");
    out
}

/// Render a complete dashboard document for `page`.
pub fn document(page: &RenderedPage, dataset: DatasetSelection) -> String {
    let mut out = String::from("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">");
    let _ = write!(
        out,
        "<title>{} - {}</title><style>{STYLE}</style></head><body><div class=\"layout\">",
        escape(page.title),
        escape(page.page.label())
    );

    out.push_str("<aside class=\"sidebar\"><form method=\"get\" action=\"/\">");
    out.push_str(&select("menu", "Menu", &Page::ALL, page.page, Page::label));
    out.push_str("</form>");
    let _ = write!(out, "<img src=\"{IMAGE_ROUTE}/{SIDEBAR_IMAGE}\" alt=\"\">");
    out.push_str("</aside>");

    let _ = write!(out, "<main><h1>{}</h1>", escape(page.title));
    if page.page == Page::Data {
        out.push_str("<form method=\"get\" action=\"/\"><input type=\"hidden\" name=\"menu\" value=\"Data\">");
        out.push_str(&select(
            "dataset",
            "Dataset",
            &DatasetSelection::ALL,
            dataset,
            DatasetSelection::label,
        ));
        out.push_str("</form>");
    }
    for b in &page.blocks {
        out.push_str(&block(b));
    }
    out.push_str("</main></div></body></html>");
    out
}
