// crates/uplane-conf/src/types.rs

//! Public, ergonomic data structures for a radio unit's user-plane
//! configuration.

/// Maximum byte length of a carrier `<name>` value.
///
/// The bounds below are full buffer widths inherited from the wire
/// format's fixed-size fields, not NUL-terminated string capacities:
/// a 50-byte name and a 10-byte token are accepted.
pub const MAX_NAME_LEN: usize = 50;

/// Maximum byte length of short token values (`<active>`, `<duplex-scheme>`).
pub const MAX_TOKEN_LEN: usize = 10;

/// One transmit or receive array carrier.
///
/// The same struct serves both roles with asymmetric field usage:
/// `duplex_scheme`, `radio_type` and `gain` are transmit-side,
/// `gain_correction` and `n_ta_offset` are receive-side.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ArrayCarrier {
    /// `<name>`
    pub name: String,

    /// `<absolute-frequency-center>` (ARFCN).
    pub arfcn_center: u32,

    /// `<center-of-channel-bandwidth>` in Hz. 64-bit: carrier centers sit
    /// in the billions of Hz.
    pub center_channel_bandwidth: u64,

    /// `<channel-bandwidth>` in Hz.
    pub channel_bandwidth: u32,

    /// `<active>` (e.g. "ACTIVE").
    pub active_state: String,

    /// `<rw-duplex-scheme>` (e.g. "TDD"). The decoder only matches the
    /// element name `duplex-scheme`; see [`crate::load_uplane_conf_from_str`].
    pub duplex_scheme: String,

    /// `<rw-type>` (e.g. "NR"). Write-only: the decoder never reads it back.
    pub radio_type: String,

    /// `<downlink-radio-frame-offset>`
    pub downlink_radio_frame_offset: u8,

    /// `<downlink-sfn-offset>`
    pub downlink_sfn_offset: u8,

    /// `<gain>` in dB, transmit side.
    pub gain: f32,

    /// `<gain-correction>` in dB, receive side.
    pub gain_correction: f32,

    /// `<n-ta-offset>`, receive side.
    pub n_ta_offset: u32,
}

/// Delay-management timing-window bounds.
///
/// Part of the uplane-conf data model for schema completeness; the
/// `delay-management` section has no encode or decode path.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DelayManagement {
    pub t2a_min_up: u32,
    pub t2a_max_up: u32,
    pub t2a_min_cp_dl: u32,
    pub t2a_max_cp_dl: u32,
    pub tcp_adv_dl: u32,
    pub ta3_min: u32,
    pub ta3_max: u32,
    pub t2a_min_cp_ul: u32,
    pub t2a_max_cp_ul: u32,
}

/// A complete `user-plane-configuration` document: one transmit carrier,
/// one receive carrier, one delay-management block.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RadioUnitConfig {
    pub tx_array_carrier: ArrayCarrier,
    pub rx_array_carrier: ArrayCarrier,
    pub delay_management: DelayManagement,
}

impl RadioUnitConfig {
    /// The sample configuration shipped with the original tooling: a
    /// 100 MHz NR TDD carrier pair centered at 3.7 GHz.
    pub fn sample() -> Self {
        RadioUnitConfig {
            tx_array_carrier: ArrayCarrier {
                name: "txarraycarrier0".into(),
                arfcn_center: 646668,
                center_channel_bandwidth: 3_700_020_000,
                channel_bandwidth: 100_000_000,
                active_state: "ACTIVE".into(),
                duplex_scheme: "TDD".into(),
                radio_type: "NR".into(),
                gain: 27.0,
                downlink_radio_frame_offset: 0,
                downlink_sfn_offset: 0,
                ..Default::default()
            },
            rx_array_carrier: ArrayCarrier {
                name: "rxarraycarrier0".into(),
                arfcn_center: 646668,
                center_channel_bandwidth: 3_700_020_000,
                channel_bandwidth: 100_000_000,
                active_state: "ACTIVE".into(),
                gain_correction: 0.0,
                n_ta_offset: 25600,
                ..Default::default()
            },
            delay_management: DelayManagement::default(),
        }
    }
}
