// crates/uplane-conf/src/builder.rs

use crate::error::UplaneError;
use crate::model;
use crate::types::RadioUnitConfig;
use core::fmt::Write;
use serde::Serialize;

/// Serializes a [`RadioUnitConfig`] into a `urn:o-ran:uplane-conf:1.0`
/// XML `String`.
///
/// This function converts the high-level struct into the internal
/// `serde` model and then uses `quick-xml` to generate the XML string.
/// Element order follows the schema's fixed order; unsigned integers
/// render as plain decimal, `gain` and `gain-correction` with exactly
/// one fractional digit.
///
/// The `delay-management` block is never emitted.
///
/// # Errors
/// Returns an `UplaneError` if serialization fails.
pub fn save_uplane_conf_to_string(config: &RadioUnitConfig) -> Result<String, UplaneError> {
    let tx = &config.tx_array_carrier;
    let rx = &config.rx_array_carrier;

    let document = model::UserPlaneConfiguration {
        xmlns: model::XMLNS,
        tx_array_carriers: model::TxArrayCarriers {
            name: tx.name.clone(),
            absolute_frequency_center: tx.arfcn_center,
            center_of_channel_bandwidth: tx.center_channel_bandwidth,
            channel_bandwidth: tx.channel_bandwidth,
            active: tx.active_state.clone(),
            rw_duplex_scheme: tx.duplex_scheme.clone(),
            rw_type: tx.radio_type.clone(),
            gain: format_db(tx.gain),
            downlink_radio_frame_offset: tx.downlink_radio_frame_offset,
            downlink_sfn_offset: tx.downlink_sfn_offset,
        },
        rx_array_carriers: model::RxArrayCarriers {
            name: rx.name.clone(),
            absolute_frequency_center: rx.arfcn_center,
            center_of_channel_bandwidth: rx.center_channel_bandwidth,
            channel_bandwidth: rx.channel_bandwidth,
            active: rx.active_state.clone(),
            downlink_radio_frame_offset: rx.downlink_radio_frame_offset,
            downlink_sfn_offset: rx.downlink_sfn_offset,
            gain_correction: format_db(rx.gain_correction),
            n_ta_offset: rx.n_ta_offset,
        },
    };

    // The XML declaration must be written manually.
    let mut buffer = String::new();
    write!(&mut buffer, "{}", "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n")?;

    let mut serializer = quick_xml::se::Serializer::new(&mut buffer);
    serializer.indent(' ', 2);

    document.serialize(serializer)?;
    buffer.push('\n');

    Ok(buffer)
}

/// Formats a dB value with exactly one fractional digit, e.g. "27.0".
fn format_db(value: f32) -> String {
    format!("{value:.1}")
}
