//! JSON I/O handling for CLI
//!
//! - Input: one JSON object (one-shot commands) or one object per line (serve)
//! - Output: one JSON response per line on stdout
//! - UTF-8 only

use std::io::{BufRead, Write};

use serde_json::{Map, Value};

use crate::api::Response;

use super::errors::{CliError, CliResult};

/// Read a single JSON request object from `reader`
pub fn read_request<R: BufRead>(reader: &mut R) -> CliResult<Map<String, Value>> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;

    if input.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }

    match serde_json::from_str(&input)? {
        Value::Object(map) => Ok(map),
        _ => Err(CliError::io_error("Request must be a JSON object")),
    }
}

/// Non-blank request lines from `reader`
pub fn read_requests<R: BufRead>(reader: R) -> impl Iterator<Item = CliResult<String>> {
    reader
        .lines()
        .map(|line| line.map_err(CliError::from))
        .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
}

/// Write a response as one line
pub fn write_response<W: Write>(writer: &mut W, response: &Response) -> CliResult<()> {
    write_json(writer, &response.to_json())
}

/// Write a raw JSON string as one line
pub fn write_json<W: Write>(writer: &mut W, json_str: &str) -> CliResult<()> {
    writeln!(writer, "{}", json_str)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Cursor;

    #[test]
    fn test_read_request_multiline() {
        let mut input = Cursor::new("{\n  \"product_ids\": [1, 2]\n}\n");
        let map = read_request(&mut input).unwrap();
        assert_eq!(map["product_ids"], json!([1, 2]));
    }

    #[test]
    fn test_read_request_rejects_empty_and_non_object() {
        assert!(read_request(&mut Cursor::new("  \n")).is_err());
        let err = read_request(&mut Cursor::new("[1,2]")).unwrap_err();
        assert_eq!(err.code_str(), "STOCK_CLI_IO_ERROR");
    }

    #[test]
    fn test_read_requests_skips_blank_lines() {
        let lines: Vec<_> = read_requests(Cursor::new("{\"op\":\"list\"}\n\n  \n{\"op\":\"get\"}\n"))
            .map(|l| l.unwrap())
            .collect();
        assert_eq!(lines, vec!["{\"op\":\"list\"}", "{\"op\":\"get\"}"]);
    }

    #[test]
    fn test_write_response_one_line() {
        let mut out = Vec::new();
        write_response(&mut out, &Response::success(json!({"a": 1}))).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "{\"status\":\"ok\",\"data\":{\"a\":1}}\n");
    }
}
