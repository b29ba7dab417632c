#![no_main]

use agentgen::domain::services::{decode_documents, TypedDecoder};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Splitting and decoding arbitrary bytes should never panic
    let _ = decode_documents(data, &TypedDecoder::<serde_yaml_ng::Value>::new());
});
