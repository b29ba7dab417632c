//! Multi-document YAML decoding
//!
//! A byte stream holding several YAML documents separated by `---` lines is
//! walked lazily: each document is handed to a pluggable decoder until the
//! stream is exhausted. The first decode failure aborts the whole run.

use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// Document separator prefix
const DOCUMENT_SEPARATOR: &[u8] = b"---";

/// Multi-document decode failure
#[derive(Debug, thiserror::Error)]
#[error("error reading multiple YAMLs: document {index}: {source}")]
pub struct DecodeError {
    /// Zero-based index of the failing document
    pub index: usize,
    #[source]
    pub source: serde_yaml_ng::Error,
}

/// Decodes one document into a value
pub trait DocumentDecoder {
    type Output;

    fn decode(&self, document: &[u8]) -> Result<Self::Output, serde_yaml_ng::Error>;
}

/// Decodes each document as `T`
pub struct TypedDecoder<T>(PhantomData<fn() -> T>);

impl<T> TypedDecoder<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for TypedDecoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> DocumentDecoder for TypedDecoder<T> {
    type Output = T;

    fn decode(&self, document: &[u8]) -> Result<T, serde_yaml_ng::Error> {
        serde_yaml_ng::from_slice(document)
    }
}

/// Lazy iterator over the non-empty documents of a stream
pub struct DocumentStream<'a> {
    remaining: &'a [u8],
}

impl<'a> DocumentStream<'a> {
    pub fn new(contents: &'a [u8]) -> Self {
        Self {
            remaining: contents,
        }
    }
}

impl<'a> Iterator for DocumentStream<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        while !self.remaining.is_empty() {
            let (document, rest) = split_document(self.remaining);
            self.remaining = rest;
            if !is_blank(document) {
                return Some(document);
            }
        }
        None
    }
}

/// Decode every document in `contents`, in order.
pub fn decode_documents<D: DocumentDecoder>(
    contents: &[u8],
    decoder: &D,
) -> Result<Vec<D::Output>, DecodeError> {
    let mut decoded = Vec::new();
    for (index, document) in DocumentStream::new(contents).enumerate() {
        let value = decoder
            .decode(document)
            .map_err(|source| DecodeError { index, source })?;
        decoded.push(value);
    }
    Ok(decoded)
}

/// Split off the first document; the separator line belongs to neither half.
fn split_document(input: &[u8]) -> (&[u8], &[u8]) {
    let mut offset = 0;
    while offset < input.len() {
        let line_end = input[offset..]
            .iter()
            .position(|&b| b == b'\n')
            .map(|pos| offset + pos + 1)
            .unwrap_or(input.len());
        if is_separator(&input[offset..line_end]) {
            return (&input[..offset], &input[line_end..]);
        }
        offset = line_end;
    }
    (input, &[])
}

/// `---` optionally followed by whitespace or a comment
fn is_separator(line: &[u8]) -> bool {
    match line.strip_prefix(DOCUMENT_SEPARATOR) {
        Some(rest) => matches!(
            rest.iter().find(|b| !b.is_ascii_whitespace()),
            None | Some(b'#')
        ),
        None => false,
    }
}

/// Only whitespace and comment lines
fn is_blank(document: &[u8]) -> bool {
    document.split(|&b| b == b'\n').all(|line| {
        matches!(
            line.iter().find(|b| !b.is_ascii_whitespace()),
            None | Some(b'#')
        )
    })
}
