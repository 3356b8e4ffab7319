use serde::{Deserialize, Serialize};

use crate::model::ids::CdId;

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: CdId,
    pub title: String,
    pub artist: String,
}

impl Record {
    #[must_use]
    pub fn new(
        id: impl Into<CdId>,
        title: impl Into<String>,
        artist: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
        }
    }
}
