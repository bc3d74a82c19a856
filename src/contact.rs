//! Active pointer contacts.

use serde::{Deserialize, Serialize};

/// Stable identity of one pointer for the lifetime of its contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointerId(pub u32);

/// A 2D position in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One pointer touching the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: PointerId,
    /// Position relative to the surface's displayed bounding box.
    pub offset: Point,
    /// Raw client/screen position.
    pub client: Point,
}

impl Contact {
    pub fn new(id: PointerId, offset: Point, client: Point) -> Self {
        Self { id, offset, client }
    }

    /// Contact whose client position equals its surface-local position.
    pub fn at(id: u32, x: f64, y: f64) -> Self {
        let point = Point::new(x, y);
        Self::new(PointerId(id), point, point)
    }
}

/// Contacts in the order they started.
///
/// Lookups are by identity and report a miss as `None`, never as a position.
#[derive(Debug, Clone, Default)]
pub struct ContactSet {
    contacts: Vec<Contact>,
}

impl ContactSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// The earliest contact still active.
    pub fn first(&self) -> Option<&Contact> {
        self.contacts.first()
    }

    /// The first two contacts, which form the pinch pair.
    pub fn pinch_pair(&self) -> Option<(&Contact, &Contact)> {
        match self.contacts.as_slice() {
            [first, second, ..] => Some((first, second)),
            _ => None,
        }
    }

    pub fn get(&self, id: PointerId) -> Option<&Contact> {
        self.contacts.iter().find(|contact| contact.id == id)
    }

    pub fn contains(&self, id: PointerId) -> bool {
        self.get(id).is_some()
    }

    /// Add a contact at the end. A contact with the same identity is replaced in
    /// place so an identity appears at most once.
    pub fn insert(&mut self, contact: Contact) {
        match self.contacts.iter_mut().find(|c| c.id == contact.id) {
            Some(existing) => *existing = contact,
            None => self.contacts.push(contact),
        }
    }

    /// Overwrite the stored contact with the same identity.
    ///
    /// Returns `false` and leaves the set untouched when no contact matches.
    pub fn update(&mut self, contact: Contact) -> bool {
        match self.contacts.iter_mut().find(|c| c.id == contact.id) {
            Some(existing) => {
                *existing = contact;
                true
            }
            None => false,
        }
    }

    /// Remove and return the contact with the given identity.
    pub fn remove(&mut self, id: PointerId) -> Option<Contact> {
        let index = self.contacts.iter().position(|contact| contact.id == id)?;
        Some(self.contacts.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    pub fn clear(&mut self) {
        self.contacts.clear();
    }
}
