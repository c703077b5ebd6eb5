//! Renderer registry.
//!
//! Hosts register one renderer handle per panel type name. The engine never
//! interprets handles; it only resolves them, falling back to a
//! [`Placeholder`] for names nobody registered so that a board loaded from a
//! newer file still shows every panel.

use std::collections::HashMap;

use log::debug;

use corkboard_core::panel::PanelKind;

/// Stand-in for a panel type without a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    type_name: String,
}

impl Placeholder {
    fn new(type_name: &str) -> Self {
        Self {
            type_name: type_name.to_string(),
        }
    }

    /// The unregistered type name, as looked up.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Text shown by the placeholder.
    pub fn label(&self) -> String {
        format!("Type: {}", self.type_name)
    }
}

/// Outcome of a registry lookup.
#[derive(Debug, PartialEq)]
pub enum Lookup<'a, R> {
    Renderer(&'a R),
    Fallback(Placeholder),
}

impl<'a, R> Lookup<'a, R> {
    pub fn renderer(&self) -> Option<&'a R> {
        match self {
            Lookup::Renderer(renderer) => Some(renderer),
            Lookup::Fallback(_) => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Lookup::Fallback(_))
    }
}

/// Maps panel type names to renderer handles of type `R`.
///
/// # Examples
///
/// ```
/// # use corkboard::registry::{Lookup, Registry};
/// # use corkboard_core::panel::PanelKind;
/// let mut registry = Registry::new();
/// registry.register(PanelKind::Chart, "chart-view");
///
/// assert_eq!(registry.lookup("chart").renderer(), Some(&"chart-view"));
/// match registry.lookup("gauge") {
///     Lookup::Fallback(placeholder) => assert_eq!(placeholder.label(), "Type: gauge"),
///     Lookup::Renderer(_) => unreachable!(),
/// }
/// ```
#[derive(Debug)]
pub struct Registry<R> {
    renderers: HashMap<String, R>,
}

impl<R> Default for Registry<R> {
    fn default() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }
}

impl<R> Registry<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `renderer` for a built-in panel type, replacing any previous one.
    pub fn register(&mut self, kind: PanelKind, renderer: R) -> Option<R> {
        self.register_name(<&'static str>::from(kind), renderer)
    }

    /// Registers `renderer` under an arbitrary type name.
    pub fn register_name(&mut self, name: impl Into<String>, renderer: R) -> Option<R> {
        let name = name.into();
        debug!(type_name = name.as_str(); "Renderer registered");
        self.renderers.insert(name, renderer)
    }

    /// Resolves the renderer for `name`, or a placeholder labeled with `name`.
    pub fn lookup(&self, name: &str) -> Lookup<'_, R> {
        match self.renderers.get(name) {
            Some(renderer) => Lookup::Renderer(renderer),
            None => Lookup::Fallback(Placeholder::new(name)),
        }
    }

    pub fn lookup_kind(&self, kind: PanelKind) -> Lookup<'_, R> {
        self.lookup(kind.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.renderers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

/// Human readable label of a panel type.
pub fn kind_label(kind: PanelKind) -> &'static str {
    kind.label()
}

/// Label for a raw type name; unknown names are returned unchanged.
pub fn type_label(name: &str) -> &str {
    name.parse::<PanelKind>().map_or(name, |kind| kind.label())
}
