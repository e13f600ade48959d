//! Feeder catalog definitions
//!
//! A catalog describes one feeder type: the machine information fields the
//! user fills in, and the named dimensions shown as hotspots on the feeder's
//! reference image. Catalogs are static configuration and never edited by
//! the user.

use super::FeederTypeId;
use crate::error::CatalogDefinitionError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Input kind of a machine information field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free text
    #[default]
    Text,
    /// One value out of a fixed option list
    Select,
    /// Numeric value
    Number,
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Select => write!(f, "select"),
            Self::Number => write!(f, "number"),
        }
    }
}

fn default_required() -> bool {
    true
}

/// A machine information input (machine number, rotation, UPH, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineInfoFieldDefinition {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub kind: FieldKind,
    /// Ordered option list for [`FieldKind::Select`]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Optional fields are ignored by the completeness check
    #[serde(default = "default_required")]
    pub required: bool,
}

impl MachineInfoFieldDefinition {
    /// Required text field
    pub fn text(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: FieldKind::Text,
            options: Vec::new(),
            required: true,
        }
    }

    /// Required numeric field
    pub fn number(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind: FieldKind::Number,
            ..Self::text(id, label)
        }
    }

    /// Required select field
    pub fn select<I, S>(id: impl Into<String>, label: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: FieldKind::Select,
            options: options.into_iter().map(Into::into).collect(),
            ..Self::text(id, label)
        }
    }

    /// Mark the field optional
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// A named dimension anchored on the reference image
///
/// `x` and `y` are percentages (0-100) of the image width and height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionDefinition {
    pub id: String,
    pub description: String,
    pub x: f64,
    pub y: f64,
}

impl DimensionDefinition {
    pub fn new(id: impl Into<String>, description: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            x,
            y,
        }
    }
}

/// Everything the form view needs to render one feeder type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeederCatalog {
    pub feeder_type: FeederTypeId,
    /// Report title, e.g. "Bowl Feeder Configuration Report"
    pub title: String,
    #[serde(default)]
    pub image_path: String,
    #[serde(default)]
    pub image_alt: String,
    #[serde(default)]
    pub machine_info_fields: Vec<MachineInfoFieldDefinition>,
    #[serde(default)]
    pub dimensions: Vec<DimensionDefinition>,
}

impl FeederCatalog {
    pub fn new(feeder_type: impl Into<FeederTypeId>, title: impl Into<String>) -> Self {
        Self {
            feeder_type: feeder_type.into(),
            title: title.into(),
            image_path: String::new(),
            image_alt: String::new(),
            machine_info_fields: Vec::new(),
            dimensions: Vec::new(),
        }
    }

    pub fn with_image(mut self, path: impl Into<String>, alt: impl Into<String>) -> Self {
        self.image_path = path.into();
        self.image_alt = alt.into();
        self
    }

    pub fn with_field(mut self, field: MachineInfoFieldDefinition) -> Self {
        self.machine_info_fields.push(field);
        self
    }

    pub fn with_dimension(mut self, dimension: DimensionDefinition) -> Self {
        self.dimensions.push(dimension);
        self
    }

    /// Look up a dimension definition by id
    pub fn dimension(&self, id: &str) -> Option<&DimensionDefinition> {
        self.dimensions.iter().find(|d| d.id == id)
    }

    /// Look up a machine info field definition by id
    pub fn field(&self, id: &str) -> Option<&MachineInfoFieldDefinition> {
        self.machine_info_fields.iter().find(|f| f.id == id)
    }

    /// Check ids, coordinates and select options
    pub fn validate(&self) -> Result<(), CatalogDefinitionError> {
        let feeder_type = self.feeder_type.to_string();
        // Used as a file name for reports and 3D models
        if feeder_type.trim().is_empty()
            || feeder_type.contains(['/', '\\'])
            || feeder_type == "."
            || feeder_type == ".."
        {
            return Err(CatalogDefinitionError::InvalidFeederType(feeder_type));
        }

        let mut seen = HashSet::new();
        for dim in &self.dimensions {
            if dim.id.trim().is_empty() {
                return Err(CatalogDefinitionError::EmptyId {
                    feeder_type,
                    kind: "dimension",
                });
            }
            if !seen.insert(dim.id.as_str()) {
                return Err(CatalogDefinitionError::DuplicateDimension {
                    feeder_type,
                    id: dim.id.clone(),
                });
            }
            for (axis, value) in [("x", dim.x), ("y", dim.y)] {
                if !(0.0..=100.0).contains(&value) {
                    return Err(CatalogDefinitionError::CoordinateOutOfRange {
                        id: dim.id.clone(),
                        axis,
                        value,
                    });
                }
            }
        }

        let mut seen = HashSet::new();
        for field in &self.machine_info_fields {
            if field.id.trim().is_empty() {
                return Err(CatalogDefinitionError::EmptyId {
                    feeder_type,
                    kind: "field",
                });
            }
            if !seen.insert(field.id.as_str()) {
                return Err(CatalogDefinitionError::DuplicateField {
                    feeder_type,
                    id: field.id.clone(),
                });
            }
            if field.kind == FieldKind::Select && field.options.is_empty() {
                return Err(CatalogDefinitionError::SelectWithoutOptions(
                    field.id.clone(),
                ));
            }
        }

        Ok(())
    }
}
