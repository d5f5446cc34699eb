//! Inventory sort/filter/search pipeline.
//!
//! A multi-field, type-aware comparator and predicate pipeline over a
//! device collection. The pipeline never mutates its input; it returns a
//! fresh ordered view on every call.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::str::FromStr;

use netscope_types::{
    DeviceRecord, DeviceStatus, METRIC_NEW, METRIC_OFFLINE, METRIC_ONLINE, METRIC_TOTAL,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EngineError;

/// Sortable inventory column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
    Ip,
    Mac,
    Brand,
    Location,
    Status,
}

impl FromStr for SortField {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "ip" => Ok(Self::Ip),
            "mac" => Ok(Self::Mac),
            "brand" => Ok(Self::Brand),
            "location" => Ok(Self::Location),
            "status" => Ok(Self::Status),
            _ => Err(EngineError::InvalidSortField(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Which column to order by, and which way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::Name,
            direction: SortDirection::Asc,
        }
    }
}

/// Status clause of the filter predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Online,
    Offline,
    New,
    Saved,
    Manual,
}

impl FromStr for StatusFilter {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "online" => Ok(Self::Online),
            "offline" => Ok(Self::Offline),
            "new" => Ok(Self::New),
            "saved" => Ok(Self::Saved),
            "manual" => Ok(Self::Manual),
            _ => Err(EngineError::InvalidStatusFilter(s.to_string())),
        }
    }
}

/// Status clause AND case-insensitive substring search, both optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    pub status: StatusFilter,
    /// Case-insensitive substring matched against every textual field;
    /// empty passes everything.
    pub search: String,
}

/// Filter, search, and sort a device collection into a fresh ordered view.
///
/// The sort is stable: devices comparing equal keep their input order, in
/// both directions. Descending order reverses the comparator.
pub fn apply(devices: &[DeviceRecord], filter: &FilterSpec, sort: &SortSpec) -> Vec<DeviceRecord> {
    let query = filter.search.to_lowercase();

    let mut view: Vec<DeviceRecord> = devices
        .iter()
        .filter(|device| passes_status(device, filter.status) && matches_search(device, &query))
        .cloned()
        .collect();

    view.sort_by(|a, b| {
        let ordering = compare(a, b, sort.field);
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    debug!(
        input = devices.len(),
        output = view.len(),
        field = ?sort.field,
        "applied inventory query"
    );

    view
}

fn passes_status(device: &DeviceRecord, filter: StatusFilter) -> bool {
    match filter {
        StatusFilter::All => true,
        StatusFilter::Online => device.is_online,
        StatusFilter::Offline => !device.is_online,
        StatusFilter::New => device.status == DeviceStatus::New,
        StatusFilter::Saved => device.status == DeviceStatus::Saved,
        StatusFilter::Manual => device.status == DeviceStatus::Manual,
    }
}

fn matches_search(device: &DeviceRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    [
        &device.display_name,
        &device.hostname,
        &device.ip_address,
        &device.mac_address,
        &device.brand,
        &device.description,
        &device.location,
    ]
    .into_iter()
    .any(|field| {
        field
            .as_deref()
            .unwrap_or("")
            .to_lowercase()
            .contains(query)
    })
}

fn compare(a: &DeviceRecord, b: &DeviceRecord, field: SortField) -> Ordering {
    match field {
        SortField::Name => name_key(a).cmp(&name_key(b)),
        SortField::Ip => {
            ip_key(a.ip_address.as_deref()).cmp(&ip_key(b.ip_address.as_deref()))
        }
        SortField::Mac => {
            lower_or_empty(a.mac_address.as_deref()).cmp(&lower_or_empty(b.mac_address.as_deref()))
        }
        SortField::Brand => {
            lower_or_empty(a.brand.as_deref()).cmp(&lower_or_empty(b.brand.as_deref()))
        }
        SortField::Location => {
            lower_or_empty(a.location.as_deref()).cmp(&lower_or_empty(b.location.as_deref()))
        }
        SortField::Status => {
            // Online first, then by how the record entered the inventory.
            let rank = |device: &DeviceRecord| u8::from(!device.is_online);
            rank(a)
                .cmp(&rank(b))
                .then_with(|| a.status.as_str().cmp(b.status.as_str()))
        }
    }
}

/// Display name falling back to hostname, case-folded.
fn name_key(device: &DeviceRecord) -> String {
    device
        .display_name
        .as_deref()
        .or(device.hostname.as_deref())
        .unwrap_or("")
        .to_lowercase()
}

/// IPv4 addresses compare numerically per octet: each dot-separated
/// component is left-zero-padded to 3 digits, so `1.2.3.9` sorts before
/// `1.2.3.10`. Absent addresses sort first.
fn ip_key(address: Option<&str>) -> String {
    address
        .unwrap_or("")
        .split('.')
        .map(|octet| format!("{octet:0>3}"))
        .collect::<Vec<_>>()
        .join(".")
}

fn lower_or_empty(value: Option<&str>) -> String {
    value.unwrap_or("").to_lowercase()
}

/// Current-state counts over a device collection.
///
/// Drives the dashboard's stat tiles, and doubles as the snapshot that
/// seeds trailing-series synthesis when no real history exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeviceStats {
    pub total: u64,
    pub online: u64,
    pub offline: u64,
    pub new: u64,
}

impl DeviceStats {
    /// Count a device collection.
    pub fn collect(devices: &[DeviceRecord]) -> Self {
        let total = devices.len() as u64;
        let online = devices.iter().filter(|d| d.is_online).count() as u64;
        let new = devices
            .iter()
            .filter(|d| d.status == DeviceStatus::New)
            .count() as u64;
        Self {
            total,
            online,
            offline: total - online,
            new,
        }
    }

    /// The counts as a metric map, keyed by the inventory metric family.
    pub fn as_metrics(&self) -> BTreeMap<String, u64> {
        BTreeMap::from([
            (METRIC_TOTAL.to_string(), self.total),
            (METRIC_ONLINE.to_string(), self.online),
            (METRIC_OFFLINE.to_string(), self.offline),
            (METRIC_NEW.to_string(), self.new),
        ])
    }
}
