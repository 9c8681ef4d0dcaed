// crates/uplane-conf/src/model.rs

//! Internal `serde` data structures that map 1:1 onto the
//! `urn:o-ran:uplane-conf:1.0` XML schema. These are used for
//! serialization only; the decoder walks the document tree directly
//! (see `parser`).

use serde::Serialize;

/// Namespace carried by the root element.
pub const XMLNS: &str = "urn:o-ran:uplane-conf:1.0";

/// The root `<user-plane-configuration>` element.
#[derive(Debug, Serialize)]
#[serde(rename = "user-plane-configuration")]
pub struct UserPlaneConfiguration {
    #[serde(rename = "@xmlns")]
    pub xmlns: &'static str,

    #[serde(rename = "tx-array-carriers")]
    pub tx_array_carriers: TxArrayCarriers,

    #[serde(rename = "rx-array-carriers")]
    pub rx_array_carriers: RxArrayCarriers,
}

/// `<tx-array-carriers>`. Field order here is the wire element order.
#[derive(Debug, Serialize)]
pub struct TxArrayCarriers {
    #[serde(rename = "name")]
    pub name: String,

    #[serde(rename = "absolute-frequency-center")]
    pub absolute_frequency_center: u32,

    #[serde(rename = "center-of-channel-bandwidth")]
    pub center_of_channel_bandwidth: u64,

    #[serde(rename = "channel-bandwidth")]
    pub channel_bandwidth: u32,

    #[serde(rename = "active")]
    pub active: String,

    #[serde(rename = "rw-duplex-scheme")]
    pub rw_duplex_scheme: String,

    #[serde(rename = "rw-type")]
    pub rw_type: String,

    /// Pre-formatted with exactly one fractional digit.
    #[serde(rename = "gain")]
    pub gain: String,

    #[serde(rename = "downlink-radio-frame-offset")]
    pub downlink_radio_frame_offset: u8,

    #[serde(rename = "downlink-sfn-offset")]
    pub downlink_sfn_offset: u8,
}

/// `<rx-array-carriers>`. Field order here is the wire element order.
#[derive(Debug, Serialize)]
pub struct RxArrayCarriers {
    #[serde(rename = "name")]
    pub name: String,

    #[serde(rename = "absolute-frequency-center")]
    pub absolute_frequency_center: u32,

    #[serde(rename = "center-of-channel-bandwidth")]
    pub center_of_channel_bandwidth: u64,

    #[serde(rename = "channel-bandwidth")]
    pub channel_bandwidth: u32,

    #[serde(rename = "active")]
    pub active: String,

    #[serde(rename = "downlink-radio-frame-offset")]
    pub downlink_radio_frame_offset: u8,

    #[serde(rename = "downlink-sfn-offset")]
    pub downlink_sfn_offset: u8,

    /// Pre-formatted with exactly one fractional digit.
    #[serde(rename = "gain-correction")]
    pub gain_correction: String,

    #[serde(rename = "n-ta-offset")]
    pub n_ta_offset: u32,
}
