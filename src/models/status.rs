use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Shown wherever a dependency did not report a value
pub const PLACEHOLDER: &str = "—";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint {
    pub name: String,
    pub url: String,
}

impl ServiceEndpoint {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ServiceStatus {
    Up,
    Down,
}

impl ServiceStatus {
    pub fn glyph(&self) -> &'static str {
        match self {
            ServiceStatus::Up => "🟢",
            ServiceStatus::Down => "🔴",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ServiceStatus::Up => "up",
            ServiceStatus::Down => "down",
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceStatus::Up => write!(f, "UP"),
            ServiceStatus::Down => write!(f, "DOWN"),
        }
    }
}

/// Normalized outcome of one probe
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StatusRecord {
    pub status: ServiceStatus,
    pub uptime: String,
    pub details: String,
}

impl StatusRecord {
    pub fn up(uptime: Option<String>, details: impl Into<String>) -> Self {
        Self {
            status: ServiceStatus::Up,
            uptime: uptime.unwrap_or_else(|| PLACEHOLDER.to_string()),
            details: details.into(),
        }
    }

    pub fn down(details: impl Into<String>) -> Self {
        Self {
            status: ServiceStatus::Down,
            uptime: PLACEHOLDER.to_string(),
            details: details.into(),
        }
    }

    pub fn is_up(&self) -> bool {
        self.status == ServiceStatus::Up
    }
}

/// Records from one aggregation cycle, in configuration order.
///
/// Serializes as a JSON object keyed by service name with keys emitted in
/// the same order the services were configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusReport {
    entries: Vec<(String, StatusRecord)>,
}

impl StatusReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, record: StatusRecord) {
        self.entries.push((name.into(), record));
    }

    pub fn get(&self, name: &str) -> Option<&StatusRecord> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, record)| record)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StatusRecord)> {
        self.entries
            .iter()
            .map(|(name, record)| (name.as_str(), record))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn up_count(&self) -> usize {
        self.entries.iter().filter(|(_, record)| record.is_up()).count()
    }
}

impl FromIterator<(String, StatusRecord)> for StatusReport {
    fn from_iter<I: IntoIterator<Item = (String, StatusRecord)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Serialize for StatusReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, record) in &self.entries {
            map.serialize_entry(name, record)?;
        }
        map.end()
    }
}
