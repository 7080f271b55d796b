use std::collections::HashMap;

use crate::bodies::Body;
use crate::error::SimError;
use crate::Result;

/// Insertion-ordered, name-keyed arena owning every registered body.
///
/// Registration moves a body in; afterwards it is addressed by name.
/// Iteration follows registration order, which keeps stepping and rendering
/// deterministic for a fixed body set.
#[derive(Debug, Default)]
pub struct BodyRegistry {
    bodies: Vec<Body>,
    index: HashMap<String, usize>,
}

impl BodyRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of a body.
    ///
    /// Fails with `DuplicateName` if a body with the same name is already
    /// registered; the offered body is dropped in that case.
    pub fn add(&mut self, body: Body) -> Result<()> {
        if self.index.contains_key(body.name()) {
            return Err(SimError::DuplicateName(body.name().to_string()));
        }
        self.index.insert(body.name().to_string(), self.bodies.len());
        self.bodies.push(body);
        Ok(())
    }

    /// Removes a body and hands it back out
    pub fn remove(&mut self, name: &str) -> Result<Body> {
        let idx = self
            .index
            .remove(name)
            .ok_or_else(|| SimError::BodyNotFound(name.to_string()))?;
        let body = self.bodies.remove(idx);
        for slot in self.index.values_mut() {
            if *slot > idx {
                *slot -= 1;
            }
        }
        Ok(body)
    }

    /// Gets a body by name, returning an error if not found
    pub fn get(&self, name: &str) -> Result<&Body> {
        self.index
            .get(name)
            .map(|&idx| &self.bodies[idx])
            .ok_or_else(|| SimError::BodyNotFound(name.to_string()))
    }

    /// Gets a mutable reference to a body by name, returning an error if
    /// not found
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Body> {
        match self.index.get(name) {
            Some(&idx) => Ok(&mut self.bodies[idx]),
            None => Err(SimError::BodyNotFound(name.to_string())),
        }
    }

    /// Returns whether a body with the given name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the number of registered bodies
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Returns whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Removes all bodies
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.index.clear();
    }

    /// Returns the registered names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.bodies.iter().map(|body| body.name()).collect()
    }

    /// Iterates over the bodies in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    /// Iterates mutably over the bodies in registration order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.bodies.iter_mut()
    }
}
