use serde::{Deserialize, Serialize};

use dispatchforge_core::ValueObject;

/// Model metadata attached to a serialized unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub brand: String,
    #[serde(rename = "modelCode")]
    pub model_code: String,
}

impl ValueObject for ModelInfo {}

/// A single serialized unit as reported by the stock query.
///
/// The serial number is unique within a snapshot; the engine treats it as the
/// unit's identity and never edits unit data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockUnit {
    #[serde(rename = "serialNumber")]
    pub serial_number: String,
    pub model: ModelInfo,
}

impl StockUnit {
    pub fn new(serial_number: impl Into<String>, brand: impl Into<String>, model_code: impl Into<String>) -> Self {
        Self {
            serial_number: serial_number.into(),
            model: ModelInfo {
                brand: brand.into(),
                model_code: model_code.into(),
            },
        }
    }
}
