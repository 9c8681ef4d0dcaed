// crates/uplane-conf/src/parser.rs

use crate::error::UplaneError;
use crate::types::{ArrayCarrier, RadioUnitConfig, MAX_NAME_LEN, MAX_TOKEN_LEN};
use log::debug;
use roxmltree::{Document, Node};

/// Parses a uplane-conf XML document and populates a [`RadioUnitConfig`]
/// from its `tx-array-carriers` and `rx-array-carriers` sections.
///
/// Each section is located by an independent depth-first, document-order
/// search over the whole tree, so the carriers are found regardless of
/// nesting depth. Direct children map onto carrier fields by element
/// name; fields whose element is absent keep their zero value.
/// Unrecognized children are skipped.
///
/// Known asymmetries against [`crate::save_uplane_conf_to_string`]:
/// - only `duplex-scheme` is matched, never the `rw-duplex-scheme` the
///   encoder writes;
/// - `rw-type` is never read back;
/// - `gain` and `gain-correction` keep only their integer part.
///
/// # Errors
/// Returns [`UplaneError::MalformedDocument`] if the input is not
/// well-formed XML, [`UplaneError::MissingSection`] if a carrier section
/// is absent, and [`UplaneError::FieldFormat`] if an element's text does
/// not parse as the expected type.
pub fn load_uplane_conf_from_str(xml_content: &str) -> Result<RadioUnitConfig, UplaneError> {
    let document = Document::parse(xml_content)?;

    let mut config = RadioUnitConfig::default();

    let tx_section =
        find_section(document.root(), "tx-array-carriers").ok_or(UplaneError::MissingSection {
            section: "tx-array-carriers",
        })?;
    populate_tx_carrier(&mut config.tx_array_carrier, tx_section)?;

    let rx_section =
        find_section(document.root(), "rx-array-carriers").ok_or(UplaneError::MissingSection {
            section: "rx-array-carriers",
        })?;
    populate_rx_carrier(&mut config.rx_array_carrier, rx_section)?;

    Ok(config)
}

/// Returns the first element named `name`, in document order, or `None`.
///
/// `descendants()` is a depth-first traversal of the subtree, so the
/// first hit is the shallowest-leftmost match and the walk stops there.
fn find_section<'a, 'input>(root: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    root.descendants()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

fn populate_tx_carrier(
    carrier: &mut ArrayCarrier,
    section: Node<'_, '_>,
) -> Result<(), UplaneError> {
    for child in section.children().filter(Node::is_element) {
        let text = child.text().unwrap_or("");
        match child.tag_name().name() {
            "name" => carrier.name = bounded_copy("name", text, MAX_NAME_LEN)?,
            "absolute-frequency-center" => {
                carrier.arfcn_center = parse_number("absolute-frequency-center", text)?;
            }
            "center-of-channel-bandwidth" => {
                carrier.center_channel_bandwidth =
                    parse_number("center-of-channel-bandwidth", text)?;
            }
            "channel-bandwidth" => {
                carrier.channel_bandwidth = parse_number("channel-bandwidth", text)?;
            }
            "active" => carrier.active_state = bounded_copy("active", text, MAX_TOKEN_LEN)?,
            // The encoder writes `rw-duplex-scheme`; only `duplex-scheme`
            // matches here, so a round-trip never recovers the duplex
            // scheme.
            "duplex-scheme" => {
                carrier.duplex_scheme = bounded_copy("duplex-scheme", text, MAX_TOKEN_LEN)?;
            }
            "gain" => carrier.gain = parse_truncated_db("gain", text)?,
            "downlink-radio-frame-offset" => {
                carrier.downlink_radio_frame_offset =
                    parse_number("downlink-radio-frame-offset", text)?;
            }
            "downlink-sfn-offset" => {
                carrier.downlink_sfn_offset = parse_number("downlink-sfn-offset", text)?;
            }
            other => debug!("ignoring unrecognized tx-array-carriers child <{other}>"),
        }
    }
    Ok(())
}

fn populate_rx_carrier(
    carrier: &mut ArrayCarrier,
    section: Node<'_, '_>,
) -> Result<(), UplaneError> {
    for child in section.children().filter(Node::is_element) {
        let text = child.text().unwrap_or("");
        match child.tag_name().name() {
            "name" => carrier.name = bounded_copy("name", text, MAX_NAME_LEN)?,
            "absolute-frequency-center" => {
                carrier.arfcn_center = parse_number("absolute-frequency-center", text)?;
            }
            "center-of-channel-bandwidth" => {
                carrier.center_channel_bandwidth =
                    parse_number("center-of-channel-bandwidth", text)?;
            }
            "channel-bandwidth" => {
                carrier.channel_bandwidth = parse_number("channel-bandwidth", text)?;
            }
            "active" => carrier.active_state = bounded_copy("active", text, MAX_TOKEN_LEN)?,
            "downlink-radio-frame-offset" => {
                carrier.downlink_radio_frame_offset =
                    parse_number("downlink-radio-frame-offset", text)?;
            }
            "downlink-sfn-offset" => {
                carrier.downlink_sfn_offset = parse_number("downlink-sfn-offset", text)?;
            }
            "gain-correction" => {
                carrier.gain_correction = parse_truncated_db("gain-correction", text)?;
            }
            "n-ta-offset" => carrier.n_ta_offset = parse_number("n-ta-offset", text)?,
            other => debug!("ignoring unrecognized rx-array-carriers child <{other}>"),
        }
    }
    Ok(())
}

// --- Helper Functions ---

/// Strict decimal parse into any integer field type.
fn parse_number<T: core::str::FromStr>(
    element: &'static str,
    text: &str,
) -> Result<T, UplaneError> {
    text.trim().parse().map_err(|_| UplaneError::FieldFormat {
        element,
        value: text.to_string(),
    })
}

/// Parses a dB value as its integer part only, fractional digits
/// discarded. "27.5" becomes 27.0.
fn parse_truncated_db(element: &'static str, text: &str) -> Result<f32, UplaneError> {
    let trimmed = text.trim();
    let integer_part = trimmed.split_once('.').map_or(trimmed, |(head, _)| head);
    integer_part
        .parse::<i32>()
        .map(|v| v as f32)
        .map_err(|_| UplaneError::FieldFormat {
            element,
            value: text.to_string(),
        })
}

/// Bounds-checked string assignment; rejects oversized content instead
/// of truncating.
fn bounded_copy(
    element: &'static str,
    text: &str,
    max_len: usize,
) -> Result<String, UplaneError> {
    if text.len() > max_len {
        return Err(UplaneError::FieldFormat {
            element,
            value: text.to_string(),
        });
    }
    Ok(text.to_string())
}
