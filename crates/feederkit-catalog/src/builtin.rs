//! Built-in feeder catalogs and sets
//!
//! Coordinates are percentages of the reference drawing of each feeder type.

use crate::sets::FeederSet;
use feederkit_core::{DimensionDefinition, FeederCatalog, MachineInfoFieldDefinition};

/// (id, description, x, y)
type DimensionRow = (&'static str, &'static str, f64, f64);

const BOWL_FEEDER_DIMENSIONS: &[DimensionRow] = &[
    ("A", "Height", 15.7, 29.4),
    ("B", "Linear track length", 19.8, 42.0),
    ("C", "Base height", 19.1, 51.4),
    ("D", "Track width", 28.6, 50.2),
    ("E", "Base width", 33.9, 52.5),
    ("F", "Actuator height", 19.6, 85.2),
    ("G", "Total height", 41.5, 83.1),
    ("H", "Floor clearance", 18.4, 98.7),
    ("I", "Base depth", 43.2, 98.8),
    ("J", "Hopper height", 43.5, 67.2),
    ("K", "Hopper width", 31.8, 55.5),
    ("L", "Total width", 59.2, 51.6),
    ("M", "Top width", 29.8, 1.5),
    ("N", "Inner width", 31.8, 4.3),
    ("O", "Bowl height", 42.0, 33.5),
    ("P", "Total height with bowl", 45.4, 29.0),
];

const LINEAR_FEEDER_DIMENSIONS: &[DimensionRow] = &[
    ("A", "Height", 48.5, 28.0),
    ("B", "Linear track length", 64.0, 7.0),
    ("C", "Base width", 36.7, 78.0),
    ("D", "Track width", 65.0, 57.0),
    ("E", "Total width", 47.0, 93.5),
    ("F", "Actuator height", 82.0, 89.5),
];

const HOPPER_DIMENSIONS: &[DimensionRow] = &[
    ("A", "Hopper height", 22.5, 35.0),
    ("B", "Hopper width", 48.0, 8.5),
    ("C", "Hopper depth", 76.5, 21.0),
    ("D", "Outlet height", 70.0, 62.5),
    ("E", "Outlet width", 55.5, 74.0),
    ("F", "Base height", 18.0, 88.5),
];

fn with_dimensions(mut catalog: FeederCatalog, rows: &[DimensionRow]) -> FeederCatalog {
    catalog.dimensions = rows
        .iter()
        .map(|&(id, description, x, y)| DimensionDefinition::new(id, description, x, y))
        .collect();
    catalog
}

fn remark() -> MachineInfoFieldDefinition {
    MachineInfoFieldDefinition::text("remark", "Remark").optional()
}

pub fn bowl_feeder() -> FeederCatalog {
    let catalog = FeederCatalog::new("bowl-feeder", "Bowl Feeder Configuration Report")
        .with_image("/dimension-drawing.jpeg", "Bowl Feeder Dimension Drawing")
        .with_field(MachineInfoFieldDefinition::text("machineNo", "Machine no."))
        .with_field(MachineInfoFieldDefinition::select(
            "rotation",
            "Rotation",
            ["Clockwise", "Anti-clockwise"],
        ))
        .with_field(MachineInfoFieldDefinition::number("uph", "UPH"))
        .with_field(remark());
    with_dimensions(catalog, BOWL_FEEDER_DIMENSIONS)
}

pub fn linear_feeder() -> FeederCatalog {
    let catalog = FeederCatalog::new("linear-feeder", "Linear Feeder Configuration Report")
        .with_image("/linear-feeder.jpeg", "Linear Feeder Dimension Drawing")
        .with_field(MachineInfoFieldDefinition::text("machineNo", "Machine no."))
        .with_field(MachineInfoFieldDefinition::text("linearNo", "Linear no."))
        .with_field(remark());
    with_dimensions(catalog, LINEAR_FEEDER_DIMENSIONS)
}

pub fn hopper() -> FeederCatalog {
    let catalog = FeederCatalog::new("hopper", "Hopper Configuration Report")
        .with_image("/hopper.jpeg", "Hopper Dimension Drawing")
        .with_field(MachineInfoFieldDefinition::text("machineNo", "Machine no."))
        .with_field(MachineInfoFieldDefinition::text("hopperNo", "Hopper no."))
        .with_field(MachineInfoFieldDefinition::number("capacity", "Capacity (L)"))
        .with_field(remark());
    with_dimensions(catalog, HOPPER_DIMENSIONS)
}

pub fn builtin_catalogs() -> Vec<FeederCatalog> {
    vec![bowl_feeder(), linear_feeder(), hopper()]
}

pub fn builtin_sets() -> Vec<FeederSet> {
    vec![
        FeederSet::new(
            "set-a",
            "Set A (Bowl + Linear)",
            ["bowl-feeder", "linear-feeder"],
        ),
        FeederSet::new("set-b", "Set B (Bowl + Hopper)", ["bowl-feeder", "hopper"]),
        FeederSet::new(
            "set-c",
            "Set C (Bowl + Linear + Hopper)",
            ["bowl-feeder", "linear-feeder", "hopper"],
        ),
    ]
}
