//! Row tokenizer, line framing and row serialization.
//!
//! All offsets are byte offsets into the source text. Every function here
//! only stops on ASCII delimiters, so returned offsets always land on a
//! char boundary. An incoming offset inside a multi-byte character is
//! moved forward to the next boundary.

/// Row separator used when writing.
pub const ROW_TERMINATOR: &str = "\r\n";

/// Parse one CSV row starting at `offset`.
///
/// Returns the fields and the offset just past the row's `\n`. Outside
/// quotes `\r` is dropped; inside quotes `""` is a literal quote and any
/// other character (including `,` and `\n`) is kept. Reaching the end of
/// the text closes an open quote and flushes the pending field.
pub fn parse_row(text: &str, offset: usize) -> (Vec<String>, usize) {
    let bytes = text.as_bytes();
    let mut pos = char_boundary(text, offset);
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    if pos == bytes.len() {
        return (fields, pos);
    }

    while pos < bytes.len() {
        match (in_quotes, bytes[pos]) {
            (false, b'"') => {
                in_quotes = true;
                pos += 1;
            }
            (true, b'"') => {
                if bytes.get(pos + 1) == Some(&b'"') {
                    field.push('"');
                    pos += 2;
                } else {
                    in_quotes = false;
                    pos += 1;
                }
            }
            (false, b',') => {
                fields.push(std::mem::take(&mut field));
                pos += 1;
            }
            (false, b'\r') => pos += 1,
            (false, b'\n') => {
                fields.push(field);
                return (fields, pos + 1);
            }
            _ => {
                // `pos` always sits on a char boundary here
                let ch = match text[pos..].chars().next() {
                    Some(ch) => ch,
                    None => break,
                };
                field.push(ch);
                pos += ch.len_utf8();
            }
        }
    }

    fields.push(field);
    (fields, pos)
}

/// Read the line starting at `offset`, terminator included.
///
/// Accepts `\n`, `\r` or `\r\n`. The final line may have no terminator.
pub fn read_line(text: &str, offset: usize) -> (&str, usize) {
    let bytes = text.as_bytes();
    let start = char_boundary(text, offset);
    let mut pos = start;

    while pos < bytes.len() {
        match bytes[pos] {
            b'\n' => {
                pos += 1;
                break;
            }
            b'\r' => {
                pos += 1;
                if bytes.get(pos) == Some(&b'\n') {
                    pos += 1;
                }
                break;
            }
            _ => pos += 1,
        }
    }

    (&text[start..pos], pos)
}

/// First char boundary at or after `offset`, clamped to the text length.
fn char_boundary(text: &str, offset: usize) -> usize {
    let mut pos = offset.min(text.len());
    while !text.is_char_boundary(pos) {
        pos += 1;
    }
    pos
}

/// Split on runs of spaces, `\r` and `\n`, dropping empty tokens.
pub fn split_whitespace(text: &str) -> Vec<&str> {
    text.split([' ', '\r', '\n'])
        .filter(|token| !token.is_empty())
        .collect()
}

/// Join fields with `,`. Fields are written verbatim, never quoted.
pub fn serialize_row<S: AsRef<str>>(fields: &[S]) -> String {
    let mut out = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(field.as_ref());
    }
    out
}

/// Serialize rows, terminating every row with `\r\n`.
pub fn serialize_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str(&serialize_row(row));
        out.push_str(ROW_TERMINATOR);
    }
    out
}

/// Iterator over the rows of a CSV document.
pub struct Rows<'a> {
    text: &'a str,
    offset: usize,
}

/// Iterate the rows of `text` with [`parse_row`].
pub fn rows(text: &str) -> Rows<'_> {
    Rows { text, offset: 0 }
}

impl Iterator for Rows<'_> {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.text.len() {
            return None;
        }
        let (fields, next) = parse_row(self.text, self.offset);
        self.offset = next;
        Some(fields)
    }
}

/// Iterator over the lines of a document, terminators included.
pub struct Lines<'a> {
    text: &'a str,
    offset: usize,
}

/// Iterate the lines of `text` with [`read_line`].
pub fn lines(text: &str) -> Lines<'_> {
    Lines { text, offset: 0 }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.text.len() {
            return None;
        }
        let (line, next) = read_line(self.text, self.offset);
        self.offset = next;
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_comma_stays_in_field() {
        let text = "a,\"b,c\",d\n";
        let (fields, offset) = parse_row(text, 0);
        assert_eq!(fields, vec!["a", "b,c", "d"]);
        assert_eq!(offset, text.len());
    }

    #[test]
    fn test_doubled_quote_is_literal() {
        let (fields, _) = parse_row("a,\"b\"\"b\",c\n", 0);
        assert_eq!(fields, vec!["a", "b\"b", "c"]);
    }

    #[test]
    fn test_unterminated_quote_is_best_effort() {
        let (fields, offset) = parse_row("a,\"b", 0);
        assert_eq!(fields, vec!["a", "b"]);
        assert_eq!(offset, 4);
    }

    #[test]
    fn test_quote_as_last_character() {
        let (fields, offset) = parse_row("a,\"b\"", 0);
        assert_eq!(fields, vec!["a", "b"]);
        assert_eq!(offset, 5);

        let (fields, _) = parse_row("x,\"", 0);
        assert_eq!(fields, vec!["x", ""]);
    }

    #[test]
    fn test_carriage_return_dropped_outside_quotes() {
        let (fields, offset) = parse_row("1,2\r\n3,4\r\n", 0);
        assert_eq!(fields, vec!["1", "2"]);
        assert_eq!(offset, 5);

        let (fields, offset) = parse_row("1,2\r\n3,4\r\n", offset);
        assert_eq!(fields, vec!["3", "4"]);
        assert_eq!(offset, 10);
    }

    #[test]
    fn test_newline_inside_quotes_is_kept() {
        let (fields, _) = parse_row("\"two\nlines\",x\n", 0);
        assert_eq!(fields, vec!["two\nlines", "x"]);
    }

    #[test]
    fn test_parse_row_at_end_is_empty() {
        let (fields, offset) = parse_row("a\n", 2);
        assert!(fields.is_empty());
        assert_eq!(offset, 2);
    }

    #[test]
    fn test_non_ascii_fields_survive() {
        let (fields, _) = parse_row("路径,\"é,ü\"\n", 0);
        assert_eq!(fields, vec!["路径", "é,ü"]);
    }

    #[test]
    fn test_offset_inside_multibyte_char_moves_forward() {
        let text = "é,x\n";
        // byte 1 is the middle of 'é'
        let (fields, offset) = parse_row(text, 1);
        assert_eq!(fields, vec!["", "x"]);
        assert_eq!(offset, text.len());

        let (line, offset) = read_line("aé\nb", 2);
        assert_eq!(line, "\n");
        assert_eq!(offset, 4);
    }

    #[test]
    fn test_read_line_crlf_then_tail() {
        let text = "x\r\ny";
        let (first, offset) = read_line(text, 0);
        assert_eq!(first, "x\r\n");
        assert_eq!(offset, 3);
        let (second, offset) = read_line(text, offset);
        assert_eq!(second, "y");
        assert_eq!(offset, 4);
    }

    #[test]
    fn test_read_line_bare_cr_at_end() {
        let (line, offset) = read_line("abc\r", 0);
        assert_eq!(line, "abc\r");
        assert_eq!(offset, 4);
    }

    #[test]
    fn test_read_line_mixed_terminators() {
        let collected: Vec<&str> = lines("a\rb\nc\r\nd").collect();
        assert_eq!(collected, vec!["a\r", "b\n", "c\r\n", "d"]);
    }

    #[test]
    fn test_split_whitespace_drops_empty_tokens() {
        assert_eq!(
            split_whitespace("  12 4.5\r\n\r\nname  "),
            vec!["12", "4.5", "name"]
        );
        assert!(split_whitespace(" \r\n ").is_empty());
    }

    #[test]
    fn test_serialize_joins_without_quoting() {
        assert_eq!(serialize_row(&["#gate", "2.5"]), "#gate,2.5");
        assert_eq!(serialize_row::<&str>(&[]), "");
        let text = serialize_rows(&[vec!["a", "b"], vec!["c"]]);
        assert_eq!(text, "a,b\r\nc\r\n");
    }

    #[test]
    fn test_rows_iterates_whole_document() {
        let all: Vec<Vec<String>> = rows("h1,h2\r\n1,2\r\n3,4").collect();
        assert_eq!(all.len(), 3);
        assert_eq!(all[2], vec!["3", "4"]);
    }
}
