//! Dimension hotspots
//!
//! A hotspot is a dimension of the catalog placed on the reference image at
//! its percentage coordinates, together with its current value.

use feederkit_core::{is_set, DimensionDefinition};

/// Lifecycle of one hotspot
///
/// `Unset` -> (click) -> `Editing` -> (confirm) -> `Set`, or back to `Unset`
/// when the editor closes with blank input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotspotStatus {
    Unset,
    Editing,
    Set,
}

impl std::fmt::Display for HotspotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unset => write!(f, "unset"),
            Self::Editing => write!(f, "editing"),
            Self::Set => write!(f, "set"),
        }
    }
}

/// A dimension hotspot as rendered on the overlay
#[derive(Debug, Clone, PartialEq)]
pub struct Hotspot {
    pub id: String,
    pub description: String,
    pub x: f64,
    pub y: f64,
    pub value: Option<String>,
    pub status: HotspotStatus,
}

impl Hotspot {
    pub fn new(definition: &DimensionDefinition, value: Option<&str>, editing: bool) -> Self {
        let value = value.filter(|v| is_set(Some(*v))).map(str::to_string);
        let status = match (editing, &value) {
            (true, _) => HotspotStatus::Editing,
            (false, Some(_)) => HotspotStatus::Set,
            (false, None) => HotspotStatus::Unset,
        };
        Self {
            id: definition.id.clone(),
            description: definition.description.clone(),
            x: definition.x,
            y: definition.y,
            value,
            status,
        }
    }

    /// Text drawn on the hotspot: the value once set, otherwise the id
    pub fn label(&self) -> &str {
        self.value.as_deref().unwrap_or(&self.id)
    }
}

/// One row of the dimensions summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub id: String,
    pub description: String,
    pub value: Option<String>,
}

impl SummaryRow {
    pub fn new(definition: &DimensionDefinition, value: Option<&str>) -> Self {
        Self {
            id: definition.id.clone(),
            description: definition.description.clone(),
            value: value.filter(|v| is_set(Some(*v))).map(str::to_string),
        }
    }

    /// `"<value> mm"`, or dashes while unset
    pub fn display_value(&self) -> String {
        match &self.value {
            Some(v) => format!("{} mm", v),
            None => "--------".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dim() -> DimensionDefinition {
        DimensionDefinition::new("C", "Base height", 19.1, 51.4)
    }

    #[test]
    fn test_hotspot_status() {
        assert_eq!(Hotspot::new(&dim(), None, false).status, HotspotStatus::Unset);
        assert_eq!(Hotspot::new(&dim(), Some("  "), false).status, HotspotStatus::Unset);
        assert_eq!(Hotspot::new(&dim(), Some("0"), false).status, HotspotStatus::Set);
        assert_eq!(Hotspot::new(&dim(), Some("4"), true).status, HotspotStatus::Editing);
    }

    #[test]
    fn test_hotspot_label() {
        assert_eq!(Hotspot::new(&dim(), None, false).label(), "C");
        assert_eq!(Hotspot::new(&dim(), Some("125"), false).label(), "125");
    }

    #[test]
    fn test_summary_display() {
        assert_eq!(SummaryRow::new(&dim(), Some("80")).display_value(), "80 mm");
        assert_eq!(SummaryRow::new(&dim(), None).display_value(), "--------");
    }
}
