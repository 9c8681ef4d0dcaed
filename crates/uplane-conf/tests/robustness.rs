//! Integration tests focused on error handling and edge cases.
//!
//! These tests ensure the decoder correctly identifies and reports
//! malformed documents, missing carrier sections, and bad field values,
//! without panicking.

use uplane_conf::{load_uplane_conf_from_str, UplaneError};

/// A minimal valid document used as a base for creating corrupted test cases.
const MINIMAL_VALID_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<user-plane-configuration xmlns="urn:o-ran:uplane-conf:1.0">
  <tx-array-carriers>
    <name>tx0</name>
    <absolute-frequency-center>646668</absolute-frequency-center>
    <duplex-scheme>TDD</duplex-scheme>
    <gain>27.5</gain>
  </tx-array-carriers>
  <rx-array-carriers>
    <name>rx0</name>
    <gain-correction>-3.5</gain-correction>
    <n-ta-offset>25600</n-ta-offset>
  </rx-array-carriers>
</user-plane-configuration>"#;

/// Removes one element block (open tag through close tag) from the base document.
fn strip_block(xml: &str, open: &str, close: &str) -> String {
    let start = xml.find(open).unwrap();
    let end = xml.find(close).unwrap() + close.len();
    let mut out = xml.to_string();
    out.replace_range(start..end, "");
    out
}

/// Malformed XML syntax (unterminated tag) must never crash.
#[test]
fn test_malformed_xml_syntax() {
    let result = load_uplane_conf_from_str("<user-plane-configuration><tx-array");
    assert!(
        matches!(result, Err(UplaneError::MalformedDocument(_))),
        "Expected MalformedDocument error, got {:?}",
        result
    );
}

/// An empty input has no root element.
#[test]
fn test_empty_document() {
    let result = load_uplane_conf_from_str("");
    assert!(
        matches!(result, Err(UplaneError::MalformedDocument(_))),
        "Expected MalformedDocument error, got {:?}",
        result
    );
}

/// A document with no tx section reports the missing section by name.
#[test]
fn test_missing_tx_section() {
    let xml = strip_block(
        MINIMAL_VALID_XML,
        "<tx-array-carriers>",
        "</tx-array-carriers>",
    );
    let result = load_uplane_conf_from_str(&xml);
    assert!(
        matches!(
            result,
            Err(UplaneError::MissingSection {
                section: "tx-array-carriers"
            })
        ),
        "Expected MissingSection for tx-array-carriers, got {:?}",
        result
    );
}

/// A document with no rx section reports the missing section by name.
#[test]
fn test_missing_rx_section() {
    let xml = strip_block(
        MINIMAL_VALID_XML,
        "<rx-array-carriers>",
        "</rx-array-carriers>",
    );
    let result = load_uplane_conf_from_str(&xml);
    assert!(
        matches!(
            result,
            Err(UplaneError::MissingSection {
                section: "rx-array-carriers"
            })
        ),
        "Expected MissingSection for rx-array-carriers, got {:?}",
        result
    );
}

/// Numeric elements with unparseable text are rejected, not zeroed.
#[test]
fn test_invalid_numeric_value() {
    let xml = MINIMAL_VALID_XML.replace("646668", "not-a-number");
    let result = load_uplane_conf_from_str(&xml);
    assert!(
        matches!(
            result,
            Err(UplaneError::FieldFormat {
                element: "absolute-frequency-center",
                ..
            })
        ),
        "Expected FieldFormat error, got {:?}",
        result
    );
}

/// A present-but-empty numeric element is a format error under the
/// strict parse policy (absence, by contrast, defaults to zero).
#[test]
fn test_empty_numeric_element() {
    let xml = MINIMAL_VALID_XML.replace(
        "<n-ta-offset>25600</n-ta-offset>",
        "<n-ta-offset></n-ta-offset>",
    );
    let result = load_uplane_conf_from_str(&xml);
    assert!(
        matches!(
            result,
            Err(UplaneError::FieldFormat {
                element: "n-ta-offset",
                ..
            })
        ),
        "Expected FieldFormat error, got {:?}",
        result
    );
}

/// Carrier names longer than the 50-byte bound are rejected instead of
/// being truncated.
#[test]
fn test_overlong_name() {
    let long_name = "x".repeat(51);
    let xml = MINIMAL_VALID_XML.replace("tx0", &long_name);
    let result = load_uplane_conf_from_str(&xml);
    assert!(
        matches!(result, Err(UplaneError::FieldFormat { element: "name", .. })),
        "Expected FieldFormat error for oversized name, got {:?}",
        result
    );
}

/// Short token fields accept the full 10-byte bound and reject the
/// first length past it.
#[test]
fn test_token_length_bound() {
    let xml = MINIMAL_VALID_XML.replace(
        "<duplex-scheme>TDD</duplex-scheme>",
        "<duplex-scheme>ABCDEFGHIJ</duplex-scheme>",
    );
    let config = load_uplane_conf_from_str(&xml).expect("10-byte token must be accepted");
    assert_eq!(config.tx_array_carrier.duplex_scheme, "ABCDEFGHIJ");

    let xml = MINIMAL_VALID_XML.replace(
        "<duplex-scheme>TDD</duplex-scheme>",
        "<duplex-scheme>ABCDEFGHIJK</duplex-scheme>",
    );
    let result = load_uplane_conf_from_str(&xml);
    assert!(
        matches!(
            result,
            Err(UplaneError::FieldFormat {
                element: "duplex-scheme",
                ..
            })
        ),
        "Expected FieldFormat error for 11-byte token, got {:?}",
        result
    );
}

/// Unrecognized child elements are skipped without error.
#[test]
fn test_unknown_children_ignored() {
    // Initialize the logger so the decoder's skip diagnostics are
    // observable when RUST_LOG is set.
    let _ = env_logger::builder().is_test(true).try_init();

    let xml = MINIMAL_VALID_XML.replace(
        "<name>tx0</name>",
        "<beam-id>7</beam-id><name>tx0</name><vendor-extension>yes</vendor-extension>",
    );
    let config = load_uplane_conf_from_str(&xml).expect("Unknown children must be ignored");
    assert_eq!(config.tx_array_carrier.name, "tx0");
    assert_eq!(config.tx_array_carrier.arfcn_center, 646668);
}

/// Carrier sections are found regardless of how deep they sit in the tree.
#[test]
fn test_sections_found_at_depth() {
    let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<config-envelope>
  <payload>
    <user-plane-configuration xmlns="urn:o-ran:uplane-conf:1.0">
      <carriers>
        <tx-array-carriers>
          <name>deep-tx</name>
        </tx-array-carriers>
      </carriers>
      <rx-array-carriers>
        <name>deep-rx</name>
      </rx-array-carriers>
    </user-plane-configuration>
  </payload>
</config-envelope>"#;

    let config = load_uplane_conf_from_str(xml).expect("Nested sections must be found");
    assert_eq!(config.tx_array_carrier.name, "deep-tx");
    assert_eq!(config.rx_array_carrier.name, "deep-rx");
}

/// The decoder matches `duplex-scheme` literally; the `rw-duplex-scheme`
/// element the encoder writes is ignored like any unknown element.
#[test]
fn test_duplex_scheme_element_name_asymmetry() {
    let config = load_uplane_conf_from_str(MINIMAL_VALID_XML).expect("Failed to parse base doc");
    assert_eq!(config.tx_array_carrier.duplex_scheme, "TDD");

    let xml = MINIMAL_VALID_XML.replace("duplex-scheme>", "rw-duplex-scheme>");
    let config = load_uplane_conf_from_str(&xml).expect("Failed to parse renamed doc");
    assert_eq!(config.tx_array_carrier.duplex_scheme, "");
}

/// dB values keep only their integer part on decode, including negatives.
#[test]
fn test_db_values_truncated() {
    let config = load_uplane_conf_from_str(MINIMAL_VALID_XML).expect("Failed to parse base doc");
    assert_eq!(config.tx_array_carrier.gain, 27.0);
    assert_eq!(config.rx_array_carrier.gain_correction, -3.0);
}

/// XML entities in text content are decoded.
#[test]
fn test_xml_entity_decoding() {
    let xml = MINIMAL_VALID_XML.replace("<name>tx0</name>", "<name>tx&amp;0</name>");
    let config = load_uplane_conf_from_str(&xml).expect("Failed to parse XML with entities");
    assert_eq!(config.tx_array_carrier.name, "tx&0");
}
