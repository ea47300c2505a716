use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// Response category reported in the `Type` field.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, EnumIter, EnumString, Eq, IntoStaticStr, PartialEq,
    Serialize,
)]
#[serde(from = "String", into = "&'static str")]
pub enum Category {
    #[strum(serialize = "A")]
    Article,
    #[strum(serialize = "D")]
    Disambiguation,
    #[strum(serialize = "C")]
    Category,
    #[strum(serialize = "N")]
    Name,
    #[strum(serialize = "E")]
    Exclusive,
    #[default]
    #[strum(serialize = "")]
    None,
}

impl Category {
    pub fn code(&self) -> &'static str {
        self.into()
    }
}

// Unknown codes fall back to `None` instead of failing the whole decode.
impl From<String> for Category {
    fn from(code: String) -> Self {
        code.parse().unwrap_or_default()
    }
}
