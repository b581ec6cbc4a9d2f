//! Classification configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClassifyConfig {
    /// Attach extracted domain keywords to every output record.
    #[serde(default)]
    pub extract_keywords: bool,
}
