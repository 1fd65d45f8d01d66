// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The editable overlay group holding the user's drawn field.

use super::shape::DrawnShape;

/// Shapes rendered above the base tiles.
///
/// Holds at most one shape: the most recently drawn.
#[derive(Debug, Default, Clone)]
pub struct OverlayGroup {
    active: Option<DrawnShape>,
}

impl OverlayGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `shape` the only shape in the group, returning the one it evicted.
    pub fn replace_active_shape(&mut self, shape: DrawnShape) -> Option<DrawnShape> {
        self.active.replace(shape)
    }

    pub fn active(&self) -> Option<&DrawnShape> {
        self.active.as_ref()
    }

    /// All shapes currently in the group.
    pub fn shapes(&self) -> impl Iterator<Item = &DrawnShape> {
        self.active.iter()
    }

    pub fn len(&self) -> usize {
        usize::from(self.active.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::shape::{Position, ShapeId};

    fn triangle(id: u64) -> DrawnShape {
        DrawnShape::new(
            ShapeId(id),
            vec![
                Position::new(0.0, 0.0),
                Position::new(0.0, 1.0),
                Position::new(1.0, 0.0),
            ],
        )
    }

    #[test]
    fn test_starts_empty() {
        let group = OverlayGroup::new();
        assert!(group.is_empty());
        assert_eq!(group.len(), 0);
        assert!(group.active().is_none());
    }

    #[test]
    fn test_replace_keeps_only_latest() {
        let mut group = OverlayGroup::new();

        assert!(group.replace_active_shape(triangle(1)).is_none());
        for id in 2..=5 {
            let evicted = group.replace_active_shape(triangle(id));
            assert_eq!(evicted.map(|s| s.id()), Some(ShapeId(id - 1)));
            assert_eq!(group.len(), 1);
            let ids: Vec<_> = group.shapes().map(|s| s.id()).collect();
            assert_eq!(ids, vec![ShapeId(id)]);
        }
    }
}
