//! Property tests for the multi-document YAML codec.

use proptest::prelude::*;

use agentgen::domain::services::{decode_documents, TypedDecoder};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: decoding arbitrary bytes never panics.
    #[test]
    fn property_decode_never_panics(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let _ = decode_documents(&data, &TypedDecoder::<serde_yaml_ng::Value>::new());
    }

    /// PROPERTY: N terminated documents decode to N values in order.
    #[test]
    fn property_terminated_documents_keep_count_and_order(
        values in proptest::collection::vec(0u32..10_000, 0..8),
    ) {
        let data: String = values
            .iter()
            .map(|v| format!("value: {v}\n---\n"))
            .collect();

        let decoded = decode_documents(data.as_bytes(), &TypedDecoder::<serde_yaml_ng::Value>::new())
            .unwrap();

        prop_assert_eq!(decoded.len(), values.len());
        for (doc, v) in decoded.iter().zip(&values) {
            prop_assert_eq!(doc["value"].as_u64(), Some(u64::from(*v)));
        }
    }
}
