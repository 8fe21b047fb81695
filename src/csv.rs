// src/csv.rs
use std::io::{self, Write};

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Header line plus rows, as one string.
pub fn rows_to_string<H: AsRef<str>>(headers: &[H], rows: &[Vec<String>], sep: char) -> io::Result<String> {
    let mut buf: Vec<u8> = Vec::new();

    write_row(&mut buf, headers, sep)?;
    for r in rows {
        write_row(&mut buf, r, sep)?;
    }

    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["a", "b,c", "say \"hi\""], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a,\"b,c\",\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn tsv_leaves_commas_alone() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["1-80 AA", "x,y"], '\t').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1-80 AA\tx,y\n");
    }

    #[test]
    fn table_string_has_header_then_rows() {
        let rows = vec![vec![s!("BGC1"), s!("a\"b")]];
        let text = rows_to_string(&["Id", "Gene"], &rows, ',').unwrap();
        assert_eq!(text, "Id,Gene\nBGC1,\"a\"\"b\"\n");
    }
}
