//! Wire spellings of [`RecordStatus`] and [`OrderStage`].
//!
//! Reading accepts either backend's vocabulary; writing uses the one the
//! target backend expects.

use serde::{Deserialize, Deserializer, de::Error};

use crate::domain::{OrderStage, RecordStatus};

fn read_status<'de, D>(deserializer: D) -> Result<RecordStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(D::Error::custom)
}

/// `activo` / `inactivo`.
pub mod commerce {
    use serde::{Deserializer, Serializer};

    use crate::domain::RecordStatus;

    pub fn as_wire(status: RecordStatus) -> &'static str {
        match status {
            RecordStatus::Active => "activo",
            RecordStatus::Inactive => "inactivo",
        }
    }

    pub fn serialize<S>(value: &RecordStatus, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(as_wire(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<RecordStatus, D::Error>
    where
        D: Deserializer<'de>,
    {
        super::read_status(deserializer)
    }
}

/// `A` / `I`.
pub mod catalog {
    use serde::{Deserializer, Serializer};

    use crate::domain::RecordStatus;

    pub fn as_wire(status: RecordStatus) -> &'static str {
        match status {
            RecordStatus::Active => "A",
            RecordStatus::Inactive => "I",
        }
    }

    pub fn serialize<S>(value: &RecordStatus, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(as_wire(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<RecordStatus, D::Error>
    where
        D: Deserializer<'de>,
    {
        super::read_status(deserializer)
    }
}

/// `procesando` / `enviado` / `entregado`.
pub mod stage {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use crate::domain::OrderStage;

    pub fn as_wire(stage: OrderStage) -> &'static str {
        match stage {
            OrderStage::Processing => "procesando",
            OrderStage::Shipped => "enviado",
            OrderStage::Delivered => "entregado",
        }
    }

    pub fn serialize<S>(value: &OrderStage, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(as_wire(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<OrderStage, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

/// Account flag sent as `0`/`1`; booleans are accepted on read.
pub mod flag {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFlag {
        Bool(bool),
        Number(i64),
        Text(String),
    }

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawFlag::deserialize(deserializer)? {
            RawFlag::Bool(value) => Ok(value),
            RawFlag::Number(value) => Ok(value != 0),
            RawFlag::Text(value) => match value.trim() {
                "1" | "true" => Ok(true),
                "0" | "false" | "" => Ok(false),
                other => Err(D::Error::custom(format!("invalid flag `{other}`"))),
            },
        }
    }
}

/// Body of the order stage PATCH.
#[derive(Debug, serde::Serialize)]
pub struct StagePatch {
    #[serde(with = "stage")]
    pub estado_pedido: OrderStage,
}
