//! Shape registry: type names to shape factories.

use std::collections::HashMap;

use crate::defaults::names;
use crate::log::debug;
use crate::shapes::{
    CubeShape, CylinderShape, ProcessShape, RectangleShape, ShapeKind, ShapeState,
};

/// Builds a fresh shape for one render of one element.
pub type ShapeFactory = for<'a> fn(ShapeState<'a>) -> ShapeKind<'a>;

pub fn rectangle(state: ShapeState<'_>) -> ShapeKind<'_> {
    RectangleShape::new(state).into()
}

pub fn cylinder(state: ShapeState<'_>) -> ShapeKind<'_> {
    CylinderShape::new(state).into()
}

pub fn cube(state: ShapeState<'_>) -> ShapeKind<'_> {
    CubeShape::new(state).into()
}

pub fn process(state: ShapeState<'_>) -> ShapeKind<'_> {
    ProcessShape::new(state).into()
}

/// Maps style `shape` names to factories.
///
/// Registering a name again replaces the earlier factory. Unknown names
/// produce a [`RectangleShape`].
#[derive(Debug, Clone, Default)]
pub struct ShapeRegistry {
    factories: HashMap<String, ShapeFactory>,
}

impl ShapeRegistry {
    /// An empty registry; every lookup falls back to the rectangle.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding `rectangle`, `cylinder`, `cube` and `process`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(names::RECTANGLE, rectangle);
        registry.register(names::CYLINDER, cylinder);
        registry.register(names::CUBE, cube);
        registry.register(names::PROCESS, process);
        registry
    }

    /// Associate `name` with `factory`, returning the factory it replaced.
    pub fn register(&mut self, name: impl Into<String>, factory: ShapeFactory) -> Option<ShapeFactory> {
        let name = name.into();
        let previous = self.factories.insert(name.clone(), factory);
        if previous.is_some() {
            debug!(name = %name, "replaced shape registration");
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<ShapeFactory> {
        self.factories.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Instantiate the shape registered as `name`.
    pub fn create<'a>(&self, name: Option<&str>, state: ShapeState<'a>) -> ShapeKind<'a> {
        match name.and_then(|n| self.factories.get(n)) {
            Some(factory) => factory(state),
            None => {
                debug!(name = ?name, "no shape registered, using rectangle");
                rectangle(state)
            }
        }
    }
}
