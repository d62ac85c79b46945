//! CSV encoding of the backing file.
//!
//! Comma-separated, `\n` line endings, minimal quoting: a field is quoted
//! only when it contains a comma, a double quote, or a line break, and
//! internal quotes are doubled. The decoder also accepts `\r\n` and bare
//! `\r` line endings, a leading UTF-8 BOM, and blank lines between rows.

use crate::core::{COLUMNS, CustomerRecord, DeskError};

/// Encode the header row followed by one row per record.
pub fn encode_table(records: &[CustomerRecord]) -> String {
    let mut out = String::new();
    write_row(&mut out, &COLUMNS);
    for record in records {
        write_row(&mut out, &record.fields());
    }
    out
}

/// Decode a whole backing file.
///
/// Empty input is an empty table. Anything else must start with the exact
/// [`COLUMNS`] header, and every following row must have one field per
/// column.
pub fn decode_table(text: &str) -> Result<Vec<CustomerRecord>, DeskError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut rows = parse_rows(text)?.into_iter();
    let header = rows
        .next()
        .ok_or_else(|| DeskError::StorageRead("missing header row".into()))?;
    if header.fields != COLUMNS {
        return Err(DeskError::StorageRead(format!(
            "header mismatch: expected [{}], found [{}]",
            COLUMNS.join(","),
            header.fields.join(",")
        )));
    }

    rows.map(|row| {
        let found = row.fields.len();
        let fields: [String; 10] = row.fields.try_into().map_err(|_| {
            DeskError::StorageRead(format!(
                "line {}: expected {} fields, found {found}",
                row.line,
                COLUMNS.len()
            ))
        })?;
        Ok(CustomerRecord::from_fields(fields))
    })
    .collect()
}

fn write_row(out: &mut String, fields: &[&str]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        csv_field_str(out, field);
    }
    out.push('\n');
}

fn csv_field_str(out: &mut String, value: &str) {
    if !value.contains([',', '"', '\r', '\n']) {
        out.push_str(value);
        return;
    }
    out.push('"');
    for ch in value.chars() {
        if ch == '"' {
            out.push_str("\"\"");
        } else {
            out.push(ch);
        }
    }
    out.push('"');
}

/// A parsed row and the line it starts on (1-based).
struct Row {
    line: usize,
    fields: Vec<String>,
}

fn parse_rows(text: &str) -> Result<Vec<Row>, DeskError> {
    let mut rows = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut line = 1;
    let mut row_line = 1;
    let mut quote_line = 1;
    let mut in_quotes = false;
    // Current field was quoted and its closing quote has been read.
    let mut closed = false;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => {
                    in_quotes = false;
                    closed = true;
                }
                '\n' => {
                    line += 1;
                    field.push(ch);
                }
                _ => field.push(ch),
            }
            continue;
        }

        match ch {
            '"' if field.is_empty() && !closed => {
                in_quotes = true;
                quote_line = line;
            }
            '"' => return Err(parse_error(line, "unexpected quote inside field")),
            ',' => {
                fields.push(std::mem::take(&mut field));
                closed = false;
            }
            '\r' | '\n' => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                fields.push(std::mem::take(&mut field));
                finish_row(&mut rows, std::mem::take(&mut fields), row_line, closed);
                closed = false;
                line += 1;
                row_line = line;
            }
            _ if closed => {
                return Err(parse_error(line, "unexpected character after closing quote"));
            }
            _ => field.push(ch),
        }
    }

    if in_quotes {
        return Err(parse_error(quote_line, "unterminated quoted field"));
    }
    if !fields.is_empty() || !field.is_empty() || closed {
        fields.push(field);
        finish_row(&mut rows, fields, row_line, closed);
    }
    Ok(rows)
}

fn finish_row(rows: &mut Vec<Row>, fields: Vec<String>, line: usize, last_quoted: bool) {
    let blank = fields.len() == 1 && fields[0].is_empty() && !last_quoted;
    if !blank {
        rows.push(Row { line, fields });
    }
}

fn parse_error(line: usize, message: &str) -> DeskError {
    DeskError::StorageRead(format!("line {line}: {message}"))
}
