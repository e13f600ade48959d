use feederkit_core::FeederTypeId;
use serde::{Deserialize, Serialize};

/// A predefined sequence of feeder types configured one after another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeederSet {
    pub id: String,
    pub name: String,
    pub members: Vec<FeederTypeId>,
}

impl FeederSet {
    pub fn new<I, S>(id: impl Into<String>, name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<FeederTypeId>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    pub fn first(&self) -> Option<&FeederTypeId> {
        self.members.first()
    }

    /// Member following `feeder_type`, `None` for the last member or a
    /// non-member
    pub fn next_after(&self, feeder_type: &FeederTypeId) -> Option<&FeederTypeId> {
        let pos = self.members.iter().position(|m| m == feeder_type)?;
        self.members.get(pos + 1)
    }

    pub fn contains(&self, feeder_type: &FeederTypeId) -> bool {
        self.members.contains(feeder_type)
    }
}
