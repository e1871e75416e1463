use std::collections::BTreeMap;

use crate::{light::Light, primitive::Primitive};

/// Key returned when a primitive or light is added to a [`Scene`]. Handles
/// count up from 1 and are never reused, even after a removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Handle(u32);

impl Handle {
    pub fn value(&self) -> u32 {
        self.0
    }
}

#[derive(Debug)]
struct Slots<T> {
    items: BTreeMap<Handle, T>,
    last: u32,
}

impl<T> Default for Slots<T> {
    fn default() -> Self {
        Self {
            items: BTreeMap::new(),
            last: 0,
        }
    }
}

impl<T> Slots<T> {
    fn insert(&mut self, item: T) -> Handle {
        self.last += 1;
        let handle = Handle(self.last);
        self.items.insert(handle, item);
        handle
    }
}

/// The primitives and lights to render. An empty scene is valid and renders
/// black.
///
/// Iteration follows handle order, which is also insertion order.
#[derive(Debug, Default)]
pub struct Scene {
    primitives: Slots<Primitive>,
    lights: Slots<Light>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_primitive(&mut self, primitive: impl Into<Primitive>) -> Handle {
        self.primitives.insert(primitive.into())
    }

    pub fn add_light(&mut self, light: Light) -> Handle {
        self.lights.insert(light)
    }

    pub fn remove_primitive(&mut self, handle: Handle) -> Option<Primitive> {
        self.primitives.items.remove(&handle)
    }

    pub fn remove_light(&mut self, handle: Handle) -> Option<Light> {
        self.lights.items.remove(&handle)
    }

    pub fn primitive(&self, handle: Handle) -> Option<&Primitive> {
        self.primitives.items.get(&handle)
    }

    pub fn light(&self, handle: Handle) -> Option<&Light> {
        self.lights.items.get(&handle)
    }

    pub fn light_mut(&mut self, handle: Handle) -> Option<&mut Light> {
        self.lights.items.get_mut(&handle)
    }

    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> + Clone + '_ {
        self.primitives.items.values()
    }

    pub fn lights(&self) -> impl Iterator<Item = &Light> + Clone + '_ {
        self.lights.items.values()
    }
}
