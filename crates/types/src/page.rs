use crate::geometry::Size;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// The physical page formats a quote can be printed on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PageSize {
    #[default]
    Letter,
    Legal,
    A4,
}

impl PageSize {
    pub fn dimensions_pt(&self) -> Size {
        match self {
            PageSize::Letter => Size::new(612.0, 792.0),
            PageSize::Legal => Size::new(612.0, 1008.0),
            PageSize::A4 => Size::new(595.28, 841.89),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PageSize::Letter => "Letter",
            PageSize::Legal => "Legal",
            PageSize::A4 => "A4",
        }
    }

    fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "letter" => Ok(PageSize::Letter),
            "legal" => Ok(PageSize::Legal),
            "a4" => Ok(PageSize::A4),
            _ => Err(format!("Unknown page size: {}", s)),
        }
    }
}

impl Serialize for PageSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}
