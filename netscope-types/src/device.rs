//! Device inventory entities.
//!
//! Devices arrive from the inventory collaborator with loosely-typed
//! category strings; this module normalizes them into closed enumerations
//! so downstream rendering never falls through an ad hoc lookup.

use core::fmt;

use chrono::{DateTime, Utc};

/// Canonical device category, normalized from upstream strings.
///
/// Unknown categories map to [`DeviceType::Other`] explicitly, both during
/// deserialization and via [`DeviceType::from_raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DeviceType {
    Router,
    Switch,
    #[cfg_attr(feature = "serde", serde(rename = "ap"))]
    AccessPoint,
    Server,
    Desktop,
    Laptop,
    Phone,
    Tablet,
    Printer,
    Camera,
    Iot,
    Nas,
    Tv,
    Gaming,
    #[default]
    #[cfg_attr(feature = "serde", serde(other))]
    Other,
}

impl DeviceType {
    /// Normalize an upstream category string.
    ///
    /// Accepts the legacy aliases the dashboard historically stored
    /// (`"pc"` for desktops, `"ap"` for access points); anything
    /// unrecognized is `Other`.
    pub fn from_raw(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "router" => Self::Router,
            "switch" => Self::Switch,
            "ap" | "accesspoint" => Self::AccessPoint,
            "server" => Self::Server,
            "desktop" | "pc" => Self::Desktop,
            "laptop" => Self::Laptop,
            "phone" => Self::Phone,
            "tablet" => Self::Tablet,
            "printer" => Self::Printer,
            "camera" => Self::Camera,
            "iot" => Self::Iot,
            "nas" => Self::Nas,
            "tv" => Self::Tv,
            "gaming" => Self::Gaming,
            _ => Self::Other,
        }
    }

    /// Icon identifier for this category.
    ///
    /// Total over the enumeration; the renderer never needs a fallback.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Router => "ri-router-line",
            Self::Switch => "ri-git-branch-line",
            Self::AccessPoint => "ri-wireless-charging-line",
            Self::Server => "ri-server-line",
            Self::Desktop => "ri-computer-line",
            Self::Laptop => "ri-macbook-line",
            Self::Phone => "ri-smartphone-line",
            Self::Tablet => "ri-tablet-line",
            Self::Printer => "ri-printer-line",
            Self::Camera => "ri-camera-line",
            Self::Iot => "ri-home-smile-line",
            Self::Nas => "ri-hard-drive-2-line",
            Self::Tv => "ri-tv-line",
            Self::Gaming => "ri-gamepad-line",
            Self::Other => "ri-device-line",
        }
    }

    /// Human-readable category label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Router => "Router",
            Self::Switch => "Switch",
            Self::AccessPoint => "Access Point",
            Self::Server => "Server",
            Self::Desktop => "Desktop",
            Self::Laptop => "Laptop",
            Self::Phone => "Phone",
            Self::Tablet => "Tablet",
            Self::Printer => "Printer",
            Self::Camera => "Camera",
            Self::Iot => "IoT",
            Self::Nas => "NAS",
            Self::Tv => "Smart TV",
            Self::Gaming => "Gaming",
            Self::Other => "Device",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// How a device entered the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DeviceStatus {
    /// Discovered by a scan and not yet reviewed.
    New,
    /// Reviewed and kept.
    Saved,
    /// Entered by hand.
    Manual,
}

impl DeviceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Saved => "saved",
            Self::Manual => "manual",
        }
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One inventory entry.
///
/// The inventory collaborator guarantees that a persisted record carries at
/// least one of `display_name`, `hostname`, or `ip_address`; the engine only
/// reads snapshots and never mutates them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceRecord {
    /// Unique inventory id.
    pub id: i64,

    /// User-assigned name, preferred over `hostname` for display.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub display_name: Option<String>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub hostname: Option<String>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub ip_address: Option<String>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub mac_address: Option<String>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub brand: Option<String>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub location: Option<String>,

    pub device_type: DeviceType,

    pub is_online: bool,

    pub status: DeviceStatus,

    pub first_seen: DateTime<Utc>,

    pub last_seen: DateTime<Utc>,
}

impl DeviceRecord {
    /// Best available display label: name, then hostname, then address.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.hostname.as_deref())
            .or(self.ip_address.as_deref())
            .unwrap_or("")
    }
}
