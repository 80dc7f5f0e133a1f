//! Waymark CSV - permissive CSV codec for path tables
//!
//! The dialect is deliberately forgiving: quoted fields may contain commas,
//! newlines and doubled quotes, an unterminated quote is closed at the end
//! of the text, and nothing in here ever fails. Output is never re-quoted.

pub mod codec;
pub mod io;

pub use codec::{
    lines, parse_row, read_line, rows, serialize_row, serialize_rows, split_whitespace, Lines,
    Rows, ROW_TERMINATOR,
};
pub use io::{read_csv_file, resolve_table_file, write_text_file};
