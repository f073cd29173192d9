//! The device schema.
//!
//! Every page, group, and field of the configuration UI, with the same
//! ranges the firmware enforces. The `label_for` values are the wire names
//! the firmware reads back on POST; changing one breaks stored
//! preferences.

use lampcfg_schema::{FieldDefinition, FieldType, Group, Page, Schema};
use std::net::Ipv4Addr;

const LIGHT_MAX_BRIGHTNESS: u16 = 255;
const LIGHT_MIN_BRIGHTNESS: u16 = 1;
const LIGHT_DEF_BRIGHTNESS: u16 = 210;

const LIGHT_DEF_TRANSITION_TIME: u16 = 1000;
const LIGHT_MIN_TRANSITION_TIME: u16 = 1;
const LIGHT_MAX_TRANSITION_TIME: u16 = 10000;

const LIGHT_DEF_BRIGHTNESS_STEP: u16 = 8;
const LIGHT_MIN_BRIGHTNESS_STEP: u16 = 1;
const LIGHT_MAX_BRIGHTNESS_STEP: u16 = 255;

const NIGHT_MAX_BRIGHTNESS: u16 = 128;
const NIGHT_MIN_BRIGHTNESS: u16 = 1;
const NIGHT_DEF_BRIGHTNESS: u16 = 8;

const NIGHT_DEF_DURATION: u16 = 30;
const NIGHT_MIN_DURATION: u16 = 1;
const NIGHT_MAX_DURATION: u16 = 600;

const LDR_DEF_VALUE: u16 = 30;
const LDR_MIN_VALUE: u16 = 1;
const LDR_MAX_VALUE: u16 = 4095;

const PRS_MIN_DIST_VALUE: u16 = 30;
const PRS_MAX_DIST_VALUE: u16 = 800;

const PRS_MIN_NRG_VALUE: u16 = 0;
const PRS_MAX_NRG_VALUE: u16 = 100;

/// The complete configuration schema, pages in display order.
pub fn schema() -> Schema {
    Schema::new()
        .page(light())
        .page(nightlight())
        .page(presence())
        .page(network())
        .page(system())
}

fn light() -> Page {
    Page::new("Light").group(
        Group::new()
            .explained(&format!(
                "Lower values mean lower brightness. Allowed values: \
                 {LIGHT_MIN_BRIGHTNESS}..{LIGHT_MAX_BRIGHTNESS}."
            ))
            .field(
                "OnBrightness",
                FieldDefinition::new(
                    FieldType::Uint8,
                    "Brightness in light mode",
                    "obr",
                    LIGHT_DEF_BRIGHTNESS,
                )
                .range(LIGHT_MIN_BRIGHTNESS, LIGHT_MAX_BRIGHTNESS),
            )
            .field(
                "MaxBrightness",
                FieldDefinition::new(
                    FieldType::Uint8,
                    "Max brightness in light mode",
                    "mbr",
                    LIGHT_DEF_BRIGHTNESS,
                )
                .range(LIGHT_MIN_BRIGHTNESS, LIGHT_MAX_BRIGHTNESS),
            ),
    )
}

fn nightlight() -> Page {
    Page::new("Nightlight")
        .group(Group::new().field(
            "AllowNightLight",
            FieldDefinition::new(FieldType::Bool, "Allow nightlight mode", "alnl", true),
        ))
        .group(
            Group::new()
                .explained(&format!(
                    "Lower values mean lower brightness. Allowed values: \
                     {NIGHT_MIN_BRIGHTNESS}..{NIGHT_MAX_BRIGHTNESS}."
                ))
                .field(
                    "NightLightBrightness",
                    FieldDefinition::new(
                        FieldType::Uint8,
                        "Brightness in nightlight mode",
                        "mnlb",
                        NIGHT_DEF_BRIGHTNESS,
                    )
                    .range(NIGHT_MIN_BRIGHTNESS, NIGHT_MAX_BRIGHTNESS),
                )
                .field(
                    "MaxNightLightBrightness",
                    FieldDefinition::new(
                        FieldType::Uint8,
                        "Max brightness in nightlight mode",
                        "nlbr",
                        NIGHT_MAX_BRIGHTNESS,
                    )
                    .range(NIGHT_MIN_BRIGHTNESS, NIGHT_MAX_BRIGHTNESS),
                ),
        )
        .group(
            Group::new()
                .explained(&format!(
                    "Allowed values: {NIGHT_MIN_DURATION}..{NIGHT_MAX_DURATION}."
                ))
                .field(
                    "NightLightOnDuration",
                    FieldDefinition::new(
                        FieldType::Uint16,
                        "On duration (seconds)",
                        "odu",
                        NIGHT_DEF_DURATION,
                    )
                    .range(NIGHT_MIN_DURATION, NIGHT_MAX_DURATION),
                ),
        )
        .group(
            Group::new()
                .explained(&format!(
                    "Brightness detection, lower values mean lower brightness. \
                     Allowed values: {LDR_MIN_VALUE}..{LDR_MAX_VALUE}."
                ))
                .field(
                    "NightLightThreshold",
                    FieldDefinition::new(FieldType::Uint16, "LDR Threshold", "nllt", LDR_DEF_VALUE)
                        .range(LDR_MIN_VALUE, LDR_MAX_VALUE),
                ),
        )
}

fn presence() -> Page {
    Page::new("Presence detection")
        .group(
            Group::new()
                .titled("Distance")
                .explained(&format!(
                    "Distance is a generic value (not meters or the like). \
                     Allowed values: {PRS_MIN_DIST_VALUE}..{PRS_MAX_DIST_VALUE}."
                ))
                .field(
                    "MaxMovingTargetDistance",
                    FieldDefinition::new(
                        FieldType::Uint16,
                        "Max moving target distance",
                        "mamd",
                        PRS_MAX_DIST_VALUE,
                    )
                    .range(PRS_MIN_DIST_VALUE, PRS_MAX_DIST_VALUE),
                )
                .field(
                    "MinMovingTargetDistance",
                    FieldDefinition::new(
                        FieldType::Uint16,
                        "Min moving target distance",
                        "mimd",
                        PRS_MIN_DIST_VALUE,
                    )
                    .range(PRS_MIN_DIST_VALUE, PRS_MAX_DIST_VALUE),
                )
                .field(
                    "MaxStationaryTargetDistance",
                    FieldDefinition::new(
                        FieldType::Uint16,
                        "Max stationary target distance",
                        "masd",
                        PRS_MAX_DIST_VALUE,
                    )
                    .range(PRS_MIN_DIST_VALUE, PRS_MAX_DIST_VALUE),
                )
                .field(
                    "MinStationaryTargetDistance",
                    FieldDefinition::new(
                        FieldType::Uint16,
                        "Min stationary target distance",
                        "misd",
                        PRS_MIN_DIST_VALUE,
                    )
                    .range(PRS_MIN_DIST_VALUE, PRS_MAX_DIST_VALUE),
                ),
        )
        .group(
            Group::new()
                .titled("Energy")
                .explained(&format!(
                    "Read \"energy\" as \"certainty\". Allowed values: \
                     {PRS_MIN_NRG_VALUE}..{PRS_MAX_NRG_VALUE}."
                ))
                .field(
                    "MaxMovingTargetEnergy",
                    FieldDefinition::new(
                        FieldType::Uint8,
                        "Max moving target energy",
                        "mame",
                        PRS_MAX_NRG_VALUE,
                    )
                    .range(PRS_MIN_NRG_VALUE, PRS_MAX_NRG_VALUE),
                )
                .field(
                    "MinMovingTargetEnergy",
                    FieldDefinition::new(
                        FieldType::Uint8,
                        "Min moving target energy",
                        "mime",
                        PRS_MIN_NRG_VALUE,
                    )
                    .range(PRS_MIN_NRG_VALUE, PRS_MAX_NRG_VALUE),
                )
                .field(
                    "MaxStationaryTargetEnergy",
                    FieldDefinition::new(
                        FieldType::Uint8,
                        "Max stationary target energy",
                        "mase",
                        PRS_MAX_NRG_VALUE,
                    )
                    .range(PRS_MIN_NRG_VALUE, PRS_MAX_NRG_VALUE),
                )
                .field(
                    "MinStationaryTargetEnergy",
                    FieldDefinition::new(
                        FieldType::Uint8,
                        "Min stationary target energy",
                        "mise",
                        PRS_MIN_NRG_VALUE,
                    )
                    .range(PRS_MIN_NRG_VALUE, PRS_MAX_NRG_VALUE),
                ),
        )
}

fn network() -> Page {
    Page::new("Network")
        .group(
            Group::new()
                .titled("Web interface login")
                .explained(
                    "When password is empty, the web interface will be accessible \
                     without a login (NOT recommended!).",
                )
                .field(
                    "WebAuthUsername",
                    FieldDefinition::new(FieldType::Text, "User", "waun", "admin").required(),
                )
                .field(
                    "WebAuthPassword",
                    FieldDefinition::new(FieldType::Password, "Password", "wapw", "lamp"),
                ),
        )
        .group(
            Group::new()
                .titled("WiFi Access")
                .explained(
                    "When SSID is empty, the lamp will not try to connect to a WiFi \
                     network. The lamp will boot into Access Point Mode when the \
                     credentials are invalid.",
                )
                .field(
                    "WifiStaSsid",
                    FieldDefinition::new(FieldType::Text, "WiFi network name (SSID)", "wsss", ""),
                )
                .field(
                    "WifiStaPassphrase",
                    FieldDefinition::new(FieldType::Password, "Password", "wspa", ""),
                )
                .field(
                    "WifiHostname",
                    FieldDefinition::new(
                        FieldType::Text,
                        "Hostname (max len 32)",
                        "whon",
                        "esp32LEDStrip",
                    )
                    .required(),
                ),
        )
        .group(
            Group::new()
                .titled("Access Point")
                .explained("To access the access point without a password, leave Password empty.")
                .field(
                    "WifiApSsid",
                    FieldDefinition::new(
                        FieldType::Text,
                        "Access Point network name (SSID)",
                        "wass",
                        "esp32LEDStrip",
                    )
                    .required(),
                )
                .field(
                    "WifiApPassphrase",
                    FieldDefinition::new(FieldType::Password, "Password", "wapa", ""),
                )
                .field(
                    "WifiApIpv4Address",
                    FieldDefinition::new(
                        FieldType::Ipv4,
                        "IPv4 address",
                        "waip",
                        Ipv4Addr::new(192, 168, 72, 12),
                    )
                    .required(),
                )
                .field(
                    "WifiApIpv4Netmask",
                    FieldDefinition::new(
                        FieldType::Ipv4,
                        "IPv4 net mask",
                        "wanm",
                        Ipv4Addr::new(255, 255, 255, 0),
                    )
                    .required(),
                ),
        )
        .group(
            Group::new()
                .titled("MQTT")
                .field(
                    "MqttServerAddress",
                    FieldDefinition::new(FieldType::Text, "Server address", "mqsv", ""),
                )
                .field(
                    "MqttUsername",
                    FieldDefinition::new(FieldType::Text, "Username", "mqus", ""),
                )
                .field(
                    "MqttPassword",
                    FieldDefinition::new(FieldType::Password, "Password", "mqpw", ""),
                ),
        )
}

fn system() -> Page {
    // sapr/slst are set through the lamp UI at runtime, not through this form.
    Page::new("System").group(
        Group::new()
            .titled("Brightness settings")
            .field(
                "TransitionDurationMs",
                FieldDefinition::new(
                    FieldType::Uint16,
                    "Transition duration (millisecs)",
                    "ptdm",
                    LIGHT_DEF_TRANSITION_TIME,
                )
                .range(LIGHT_MIN_TRANSITION_TIME, LIGHT_MAX_TRANSITION_TIME),
            )
            .field(
                "BrightnessStep",
                FieldDefinition::new(
                    FieldType::Uint8,
                    "In-/Decrease per step",
                    "stbr",
                    LIGHT_DEF_BRIGHTNESS_STEP,
                )
                .range(LIGHT_MIN_BRIGHTNESS_STEP, LIGHT_MAX_BRIGHTNESS_STEP),
            ),
    )
}
