use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Activity flag carried by every back-office record.
///
/// The commerce backend spells it `activo`/`inactivo` and the catalog backend
/// `A`/`I`; both parse into this type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    #[default]
    Active,
    Inactive,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown status `{0}`")]
pub struct UnknownStatus(pub String);

impl FromStr for RecordStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "active" | "activo" | "a" => Ok(Self::Active),
            "inactive" | "inactivo" | "i" => Ok(Self::Inactive),
            _ => Err(UnknownStatus(value.to_string())),
        }
    }
}

/// Fulfilment stage of an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStage {
    #[default]
    Processing,
    Shipped,
    Delivered,
}

impl OrderStage {
    pub const ALL: [OrderStage; 3] = [Self::Processing, Self::Shipped, Self::Delivered];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
        }
    }

    /// Name shown to operators.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Processing => "Procesando",
            Self::Shipped => "Enviado",
            Self::Delivered => "Entregado",
        }
    }
}

impl fmt::Display for OrderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown order stage `{0}`")]
pub struct UnknownStage(pub String);

impl FromStr for OrderStage {
    type Err = UnknownStage;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "processing" | "procesando" => Ok(Self::Processing),
            "shipped" | "enviado" => Ok(Self::Shipped),
            "delivered" | "entregado" => Ok(Self::Delivered),
            _ => Err(UnknownStage(value.to_string())),
        }
    }
}
