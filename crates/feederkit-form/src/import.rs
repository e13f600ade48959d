//! Best-effort bulk import
//!
//! Scrapes `key: value` pairs out of free-form pasted text. Lines that match
//! no dimension or machine information field are skipped without comment;
//! only the aggregate count is reported. This is a convenience heuristic and
//! does not take part in record validation beyond the usual input policy.

use feederkit_core::{FeederCatalog, FieldKind, InputPolicy, MachineInfoFieldDefinition, ValueMap};
use regex::Regex;
use std::sync::OnceLock;

/// Values recognised in pasted text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportResult {
    pub machine_info: ValueMap,
    pub dimensions: ValueMap,
    /// Non-blank lines that yielded nothing
    pub skipped: usize,
}

impl ImportResult {
    /// Number of distinct values recognised
    pub fn imported(&self) -> usize {
        self.machine_info.len() + self.dimensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.imported() == 0
    }
}

fn dimension_regex() -> &'static Regex {
    static DIMENSION_REGEX: OnceLock<Regex> = OnceLock::new();
    DIMENSION_REGEX.get_or_init(|| {
        Regex::new(
            r"(?i)^(?:dim(?:ension)?\s+)?([a-z][a-z0-9]*)\s*[:=]\s*(-?\d+(?:\.\d+)?)\s*(?:mm)?$",
        )
        .expect("invalid regex pattern")
    })
}

fn field_regex() -> &'static Regex {
    static FIELD_REGEX: OnceLock<Regex> = OnceLock::new();
    FIELD_REGEX.get_or_init(|| Regex::new(r"^([^:=]+?)\s*[:=]\s*(.+)$").expect("invalid regex pattern"))
}

/// Lower-cased key without a trailing full stop, so `Machine no.` and
/// `machine no` compare equal
fn normalize_key(key: &str) -> String {
    key.trim().trim_end_matches('.').trim().to_lowercase()
}

fn find_field<'a>(catalog: &'a FeederCatalog, key: &str) -> Option<&'a MachineInfoFieldDefinition> {
    let key = normalize_key(key);
    catalog
        .machine_info_fields
        .iter()
        .find(|f| f.id.to_lowercase() == key || normalize_key(&f.label) == key)
}

fn parse_dimension(
    line: &str,
    catalog: &FeederCatalog,
    policy: &InputPolicy,
) -> Option<(String, String)> {
    let caps = dimension_regex().captures(line)?;
    let key = &caps[1];
    let definition = catalog
        .dimension(key)
        .or_else(|| catalog.dimension(&key.to_uppercase()))?;
    let value = policy.normalize_dimension(&definition.id, &caps[2]).ok()??;
    Some((definition.id.clone(), value))
}

fn parse_field(
    line: &str,
    catalog: &FeederCatalog,
    policy: &InputPolicy,
) -> Option<(String, String)> {
    let caps = field_regex().captures(line)?;
    let field = find_field(catalog, &caps[1])?;
    let raw = caps[2].trim();

    let value = match field.kind {
        FieldKind::Select => field
            .options
            .iter()
            .find(|o| o.eq_ignore_ascii_case(raw))
            .cloned()?,
        _ => policy.normalize_field(field, raw).ok()?,
    };
    if value.trim().is_empty() {
        return None;
    }
    Some((field.id.clone(), value))
}

/// Extract dimension and machine information values from pasted text
///
/// Input is split on newlines and `;`. Later occurrences of a key win.
pub fn parse_pasted(text: &str, catalog: &FeederCatalog, policy: &InputPolicy) -> ImportResult {
    let mut result = ImportResult::default();

    for line in text.lines().flat_map(|l| l.split(';')).map(str::trim) {
        if line.is_empty() {
            continue;
        }
        if let Some((id, value)) = parse_dimension(line, catalog, policy) {
            result.dimensions.insert(id, value);
        } else if let Some((id, value)) = parse_field(line, catalog, policy) {
            result.machine_info.insert(id, value);
        } else {
            tracing::debug!(line, "Skipped unrecognised import line");
            result.skipped += 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use feederkit_core::DimensionDefinition;

    fn catalog() -> FeederCatalog {
        FeederCatalog::new("bowl-feeder", "Bowl Feeder Configuration Report")
            .with_field(MachineInfoFieldDefinition::text("machineNo", "Machine no."))
            .with_field(MachineInfoFieldDefinition::select(
                "rotation",
                "Rotation",
                ["Clockwise", "Anti-clockwise"],
            ))
            .with_field(MachineInfoFieldDefinition::number("uph", "UPH"))
            .with_dimension(DimensionDefinition::new("A", "Height", 10.0, 10.0))
            .with_dimension(DimensionDefinition::new("B", "Length", 20.0, 20.0))
    }

    #[test]
    fn test_dimension_forms() {
        let text = "A: 12.5\nb = 40 mm\nDimension A: 13";
        let result = parse_pasted(text, &catalog(), &InputPolicy::default());
        assert_eq!(result.dimensions.get("A").map(String::as_str), Some("13"));
        assert_eq!(result.dimensions.get("B").map(String::as_str), Some("40"));
        assert_eq!(result.skipped, 0);
    }

    #[test]
    fn test_fields_by_label_or_id() {
        let text = "Machine no: MX-7; rotation = anti-clockwise\nuph: 1200";
        let result = parse_pasted(text, &catalog(), &InputPolicy::default());
        assert_eq!(
            result.machine_info.get("machineNo").map(String::as_str),
            Some("MX-7")
        );
        assert_eq!(
            result.machine_info.get("rotation").map(String::as_str),
            Some("Anti-clockwise")
        );
        assert_eq!(result.machine_info.get("uph").map(String::as_str), Some("1200"));
        assert_eq!(result.imported(), 3);
    }

    #[test]
    fn test_unmatched_lines_are_skipped() {
        let text = "hello world\n\nZ: 4\nA: -3\nrotation: sideways\nuph: lots";
        let result = parse_pasted(text, &catalog(), &InputPolicy::default());
        assert!(result.is_empty());
        assert_eq!(result.skipped, 5);
    }

    #[test]
    fn test_negative_allowed_by_policy() {
        let policy = InputPolicy {
            allow_negative: true,
            ..InputPolicy::default()
        };
        let result = parse_pasted("A: -3", &catalog(), &policy);
        assert_eq!(result.dimensions.get("A").map(String::as_str), Some("-3"));
    }
}
