//! Input format detection and record iteration.
//!
//! Three layouts are accepted: a JSON array of objects, a single JSON object,
//! and JSON Lines. The trimmed content decides: a leading `{` means one record
//! per line, anything else is parsed once as a whole document.

use std::fmt;
use std::path::Path;

use serde_json::Value;

use crate::error::BatchError;

/// How the input content is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputShape {
    /// One JSON value per line.
    Lines,
    /// A single JSON document: an object or an array.
    Document,
}

impl InputShape {
    /// Detect the layout of already-trimmed content.
    #[must_use]
    pub fn detect(content: &str) -> Self {
        if content.starts_with('{') {
            Self::Lines
        } else {
            Self::Document
        }
    }
}

/// Where a record came from in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// 1-based line in the trimmed content.
    Line(usize),
    /// 1-based position in the top-level array (a lone object is element 1).
    Element(usize),
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line(n) => write!(f, "line {n}"),
            Self::Element(n) => write!(f, "element {n}"),
        }
    }
}

/// One item produced while walking the input.
#[derive(Debug)]
pub enum Entry {
    Record { value: Value, origin: Origin },
    /// A line that is not valid JSON.
    Malformed { line: usize, source: serde_json::Error },
}

/// Iterator over the entries of a batch input.
pub enum Entries<'a> {
    Lines(std::iter::Enumerate<std::str::Lines<'a>>),
    Document(std::iter::Enumerate<std::vec::IntoIter<Value>>),
}

impl Iterator for Entries<'_> {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        match self {
            Self::Lines(lines) => loop {
                let (idx, line) = lines.next()?;
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let number = idx + 1;
                return Some(match serde_json::from_str(line) {
                    Ok(value) => Entry::Record {
                        value,
                        origin: Origin::Line(number),
                    },
                    Err(source) => Entry::Malformed {
                        line: number,
                        source,
                    },
                });
            },
            Self::Document(items) => {
                let (idx, value) = items.next()?;
                Some(Entry::Record {
                    value,
                    origin: Origin::Element(idx + 1),
                })
            }
        }
    }
}

/// Read the input file into memory.
///
/// # Errors
///
/// Returns [`BatchError::InputNotFound`] if `path` does not exist, or
/// [`BatchError::Read`] if it cannot be read as UTF-8 text.
pub fn read_input(path: &Path) -> Result<String, BatchError> {
    if !path.exists() {
        return Err(BatchError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    std::fs::read_to_string(path).map_err(|source| BatchError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Detect the layout of `content` and iterate its entries.
///
/// In document mode the whole content is parsed here, so a malformed document
/// fails before any record is produced.
///
/// # Errors
///
/// Returns [`BatchError::InvalidJsonDocument`] if a document does not parse,
/// or [`BatchError::UnsupportedShape`] if its top level is neither an object
/// nor an array.
pub fn entries(content: &str) -> Result<Entries<'_>, BatchError> {
    let content = content.trim();
    match InputShape::detect(content) {
        InputShape::Lines => Ok(Entries::Lines(content.lines().enumerate())),
        InputShape::Document => {
            let items = match serde_json::from_str(content)
                .map_err(BatchError::InvalidJsonDocument)?
            {
                Value::Array(items) => items,
                object @ Value::Object(_) => vec![object],
                _ => return Err(BatchError::UnsupportedShape),
            };
            Ok(Entries::Document(items.into_iter().enumerate()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn origins(content: &str) -> Vec<Origin> {
        entries(content)
            .expect("entries")
            .filter_map(|entry| match entry {
                Entry::Record { origin, .. } => Some(origin),
                Entry::Malformed { .. } => None,
            })
            .collect()
    }

    #[test]
    fn leading_brace_selects_lines() {
        assert_eq!(InputShape::detect(r#"{"a":1}"#), InputShape::Lines);
        assert_eq!(InputShape::detect("[]"), InputShape::Document);
        assert_eq!(InputShape::detect(""), InputShape::Document);
    }

    #[test]
    fn line_numbers_count_blank_lines() {
        let content = "{\"id\":\"a\"}\n\n   \n{\"id\":\"b\"}\n";
        assert_eq!(origins(content), vec![Origin::Line(1), Origin::Line(4)]);
    }

    #[test]
    fn line_numbers_are_relative_to_trimmed_content() {
        let content = "\n\n{\"id\":\"a\"}\n{\"id\":\"b\"}";
        assert_eq!(origins(content), vec![Origin::Line(1), Origin::Line(2)]);
    }

    #[test]
    fn malformed_line_is_reported_not_fatal() {
        let content = "{\"id\":\"a\"}\n{not json\n{\"id\":\"c\"}";
        let items: Vec<Entry> = entries(content).expect("entries").collect();
        assert_eq!(items.len(), 3);
        assert!(matches!(items[1], Entry::Malformed { line: 2, .. }));
    }

    #[test]
    fn pretty_printed_object_reads_as_lines() {
        let content = "{\n  \"id\": \"x\"\n}";
        let items: Vec<Entry> = entries(content).expect("entries").collect();
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|e| matches!(e, Entry::Malformed { .. })));
    }

    #[test]
    fn document_elements_are_numbered_from_one() {
        let items: Vec<Entry> = entries("[{\"id\":\"x\"}, {\"id\":\"y\"}]")
            .expect("entries")
            .collect();
        match &items[..] {
            [Entry::Record { value, origin }, Entry::Record { origin: second, .. }] => {
                assert_eq!(value, &json!({"id": "x"}));
                assert_eq!(*origin, Origin::Element(1));
                assert_eq!(*second, Origin::Element(2));
            }
            other => panic!("unexpected entries: {other:?}"),
        }
    }

    #[test]
    fn scalar_document_is_unsupported() {
        assert!(matches!(entries("42"), Err(BatchError::UnsupportedShape)));
        assert!(matches!(
            entries("\"text\""),
            Err(BatchError::UnsupportedShape)
        ));
    }

    #[test]
    fn broken_document_is_fatal() {
        assert!(matches!(
            entries("[{\"id\": 1},"),
            Err(BatchError::InvalidJsonDocument(_))
        ));
        assert!(matches!(entries(""), Err(BatchError::InvalidJsonDocument(_))));
    }

    #[test]
    fn origin_display() {
        assert_eq!(Origin::Line(3).to_string(), "line 3");
        assert_eq!(Origin::Element(2).to_string(), "element 2");
    }
}
