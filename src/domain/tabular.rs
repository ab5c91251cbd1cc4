// src/domain/tabular.rs
//
// Delimited-text handling for the paste-to-import flow. Tab-delimited input
// (a spreadsheet paste) is a plain split; comma-delimited input honors
// double-quote quoting so addresses and notes can carry commas.

use std::collections::HashMap;

/// One data row, keyed by header name. Cells are trimmed; headers missing a
/// trailing cell map to the empty string.
pub type Row = HashMap<String, String>;

/// Splits raw delimited text into header-keyed rows. Tab wins as the
/// delimiter when the header line contains one. Anything short of a header
/// plus one data row means there is nothing to import.
pub fn parse_rows(raw: &str) -> Vec<Row> {
    let lines: Vec<&str> = raw
        .trim()
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if lines.len() < 2 {
        return Vec::new();
    }

    let tab_delimited = lines[0].contains('\t');
    let headers = split_line(lines[0], tab_delimited);

    lines[1..]
        .iter()
        .map(|line| {
            let cells = split_line(line, tab_delimited);
            headers
                .iter()
                .enumerate()
                .map(|(i, h)| (h.clone(), cells.get(i).cloned().unwrap_or_default()))
                .collect()
        })
        .collect()
}

fn split_line(line: &str, tab_delimited: bool) -> Vec<String> {
    if tab_delimited {
        line.split('\t').map(|c| c.trim().to_string()).collect()
    } else {
        split_csv_line(line)
    }
}

/// Comma split with double-quote quoting: a doubled quote inside a quoted
/// field decodes to one literal quote, and a comma inside quotes is data.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    cell.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                cells.push(std::mem::take(&mut cell));
            }
            _ => cell.push(c),
        }
    }
    cells.push(cell);

    cells.into_iter().map(|c| c.trim().to_string()).collect()
}

/// Encodes rows back out as comma-delimited text, quoting any cell that
/// needs it. The headers match the import vocabulary, so an exported
/// catalog re-imports cleanly.
pub fn encode_csv(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    push_line(&mut out, headers.iter().copied());
    for row in rows {
        push_line(&mut out, row.iter().map(String::as_str));
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>) {
    let mut first = true;
    for cell in cells {
        if !first {
            out.push(',');
        }
        first = false;
        out.push_str(&encode_cell(cell));
    }
    out.push('\n');
}

fn encode_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
