//! Minimal CSV reader/writer for the dataset files.
//!
//! The dialect is the one the offline pipeline writes: comma separated,
//! header row first, RFC 4180 quoting (quoted fields may hold commas,
//! doubled quotes and line breaks). Both LF and CRLF line endings are read;
//! output always uses LF with a trailing newline.

/// A parse failure, positioned at the physical line where it was detected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {message}")]
pub struct CsvError {
    pub line: usize,
    pub message: String,
}

impl CsvError {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// Parsed contents of a CSV document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDocument {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Parse a complete CSV document.
///
/// Fails on an empty document, duplicate or empty header names, an
/// unterminated quoted field, stray characters after a closing quote, or a
/// row whose field count differs from the header. Blank lines are skipped.
pub fn parse(text: &str) -> Result<CsvDocument, CsvError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut records = parse_records(text)?.into_iter();

    let (header_line, headers) = records
        .next()
        .ok_or_else(|| CsvError::new(1, "document is empty"))?;

    for (i, name) in headers.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(CsvError::new(
                header_line,
                format!("header column {} is empty", i + 1),
            ));
        }
        if headers[..i].contains(name) {
            return Err(CsvError::new(
                header_line,
                format!("duplicate header column '{name}'"),
            ));
        }
    }

    let mut rows = Vec::new();
    for (line, fields) in records {
        if fields.len() != headers.len() {
            return Err(CsvError::new(
                line,
                format!(
                    "expected {} fields, found {}",
                    headers.len(),
                    fields.len()
                ),
            ));
        }
        rows.push(fields);
    }

    Ok(CsvDocument { headers, rows })
}

/// Split text into records, each tagged with the line it starts on.
fn parse_records(text: &str) -> Result<Vec<(usize, Vec<String>)>, CsvError> {
    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut after_quote = false;
    let mut field_was_quoted = false;
    let mut line = 1;
    let mut record_line = 1;
    let mut quote_line = 1;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    current.push('"');
                    chars.next();
                }
                '"' => {
                    in_quotes = false;
                    after_quote = true;
                }
                '\n' => {
                    line += 1;
                    current.push(ch);
                }
                _ => current.push(ch),
            }
            continue;
        }

        match ch {
            ',' => {
                fields.push(std::mem::take(&mut current));
                after_quote = false;
                field_was_quoted = false;
            }
            '\r' | '\n' => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                let blank = fields.is_empty() && current.is_empty() && !field_was_quoted;
                if !blank {
                    fields.push(std::mem::take(&mut current));
                    records.push((record_line, std::mem::take(&mut fields)));
                }
                after_quote = false;
                field_was_quoted = false;
                line += 1;
                record_line = line;
            }
            '"' if current.is_empty() && !field_was_quoted => {
                in_quotes = true;
                field_was_quoted = true;
                quote_line = line;
            }
            _ if after_quote => {
                return Err(CsvError::new(
                    line,
                    format!("unexpected character '{ch}' after closing quote"),
                ));
            }
            _ => current.push(ch),
        }
    }

    if in_quotes {
        return Err(CsvError::new(quote_line, "unterminated quoted field"));
    }

    if !fields.is_empty() || !current.is_empty() || field_was_quoted {
        fields.push(current);
        records.push((record_line, fields));
    }

    Ok(records)
}

/// Quote a field when it contains a separator, quote or line break.
pub fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Serialize a header row plus data rows into CSV text.
///
/// Every line, including the last, ends with `\n`.
pub fn write(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    for record in std::iter::once(headers).chain(rows.iter().map(Vec::as_slice)) {
        let line: Vec<String> = record.iter().map(|f| escape_field(f)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}
