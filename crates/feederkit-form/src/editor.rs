/// Open editor for one dimension
///
/// The buffer starts with the dimension's current value. Nothing reaches the
/// record until the editor is confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionEditor {
    pub dimension_id: String,
    pub description: String,
    pub input: String,
}

impl DimensionEditor {
    pub fn new(
        dimension_id: impl Into<String>,
        description: impl Into<String>,
        existing: Option<&str>,
    ) -> Self {
        Self {
            dimension_id: dimension_id.into(),
            description: description.into(),
            input: existing.unwrap_or_default().to_string(),
        }
    }

    /// Dialog heading, e.g. "Enter dimension A: Height"
    pub fn prompt(&self) -> String {
        format!("Enter dimension {}: {}", self.dimension_id, self.description)
    }
}
