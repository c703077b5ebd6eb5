//! Panel identifiers backed by a process-wide string interner.
//!
//! Panel ids are strings in board files (`"panel-1718000000000-k3j9x0a1b"`),
//! but the interaction code passes them around constantly: sessions remember
//! the id of the panel they manipulate, lookups compare ids on every pointer
//! move. [`PanelId`] interns the string once and is `Copy` afterwards.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock, PoisonError},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for panel ids.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Stable identifier of a panel.
///
/// # Examples
///
/// ```
/// use corkboard_core::identifier::PanelId;
///
/// let a = PanelId::new("panel-1");
/// let b: PanelId = "panel-1".into();
///
/// assert_eq!(a, b);
/// assert_eq!(a, "panel-1");
/// assert_eq!(a.to_string(), "panel-1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelId(DefaultSymbol);

impl PanelId {
    /// Interns `name` and returns its id.
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }

    /// Returns the id as an owned string.
    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner();
        let value = interner.resolve(self.0).unwrap_or_default();
        f.write_str(value)
    }
}

impl From<&str> for PanelId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for PanelId {
    fn eq(&self, other: &str) -> bool {
        interner().resolve(self.0) == Some(other)
    }
}

impl PartialEq<&str> for PanelId {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Serialize for PanelId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PanelId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::new(&name))
    }
}
