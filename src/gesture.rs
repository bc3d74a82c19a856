//! Gesture tracking: turns pointer and wheel input into pan/zoom deltas.
//!
//! One [`GestureTracker`] is attached to one rendering surface. It owns the
//! active contacts and the pinch baseline; the view window itself always lives
//! on the surface and is re-read for every delta.

use serde::{Deserialize, Serialize};
use zoop_view::{Anchor, Surface, ViewWindow, ZoomPolicy};

use crate::constants::UNSET_PINCH_BASELINE;
use crate::contact::{Contact, ContactSet, PointerId};

/// A semantic change requested by one input step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GestureDelta {
    /// Displacement in surface-local pixels.
    Pan { dx: f64, dy: f64 },
    /// Signed zoom magnitude and the surface-local point to hold fixed.
    Zoom { scale: f64, anchor: Anchor },
}

/// Everything one input event produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dispatch {
    /// Deltas in the order they were applied.
    pub deltas: Vec<GestureDelta>,
    /// Set when the event named a pointer that is not being tracked.
    pub unknown_contact: Option<PointerId>,
}

impl Dispatch {
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty() && self.unknown_contact.is_none()
    }
}

/// Per-surface gesture state.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    contacts: ContactSet,
    /// Previous two-contact client-X separation, `None` while unset.
    pinch_baseline: Option<f64>,
    policy: ZoomPolicy,
}

impl GestureTracker {
    pub fn new(policy: ZoomPolicy) -> Self {
        Self {
            contacts: ContactSet::new(),
            pinch_baseline: None,
            policy,
        }
    }

    pub fn contacts(&self) -> &ContactSet {
        &self.contacts
    }

    pub fn pinch_baseline(&self) -> Option<f64> {
        self.pinch_baseline
    }

    pub fn policy(&self) -> &ZoomPolicy {
        &self.policy
    }

    /// Start tracking a contact. Emits nothing.
    pub fn contact_start(&mut self, contact: Contact) {
        self.contacts.insert(contact);
        log::debug!(
            "Contact {:?} started, {} active",
            contact.id,
            self.contacts.len()
        );
    }

    /// Update gesture state for a moved contact and return the resulting deltas
    /// without touching any surface.
    ///
    /// The pan reference is the first contact as stored *before* this move is
    /// recorded. With exactly two contacts a pinch zoom is emitted as well.
    pub fn move_deltas(&mut self, contact: Contact) -> Dispatch {
        let (dispatch, separation) = self.plan_move(contact);
        self.commit_move(contact, separation);
        dispatch
    }

    /// Handle a contact move and apply every resulting delta to `surface`.
    ///
    /// Contact positions and the pinch baseline are only updated once every
    /// delta has been applied. If one fails the error is returned and the
    /// tracker keeps its previous state.
    pub fn contact_move<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        contact: Contact,
    ) -> zoop_view::Result<Dispatch> {
        let (dispatch, separation) = self.plan_move(contact);
        for delta in &dispatch.deltas {
            self.apply(surface, delta)?;
        }
        self.commit_move(contact, separation);
        Ok(dispatch)
    }

    /// Compute the deltas for a move as if it were already recorded.
    ///
    /// Also returns the new pinch separation when a pinch step was emitted.
    fn plan_move(&self, contact: Contact) -> (Dispatch, Option<f64>) {
        let mut dispatch = Dispatch::default();

        if let Some(first) = self.contacts.first() {
            dispatch.deltas.push(GestureDelta::Pan {
                dx: first.offset.x - contact.offset.x,
                dy: first.offset.y - contact.offset.y,
            });
        }

        if !self.contacts.contains(contact.id) {
            log::warn!("Move for untracked contact {:?} ignored", contact.id);
            dispatch.unknown_contact = Some(contact.id);
        }

        // The pinch pair as it will look once this move is recorded.
        let recorded = |stored: &Contact| {
            if stored.id == contact.id {
                contact
            } else {
                *stored
            }
        };
        let pair = self
            .contacts
            .pinch_pair()
            .filter(|_| self.contacts.len() == 2)
            .map(|(a, b)| (recorded(a), recorded(b)));

        let mut separation = None;
        if let Some((a, b)) = pair {
            let current = a.client.x - b.client.x;
            let anchor = Anchor::new(
                (a.offset.x - b.offset.x) / 2.0,
                (a.offset.y - b.offset.y) / 2.0,
            );
            let previous = self.pinch_baseline.unwrap_or(UNSET_PINCH_BASELINE);

            dispatch.deltas.push(GestureDelta::Zoom {
                scale: current - previous,
                anchor,
            });
            separation = Some(current);
        }

        (dispatch, separation)
    }

    fn commit_move(&mut self, contact: Contact, separation: Option<f64>) {
        self.contacts.update(contact);

        if let Some(separation) = separation {
            if self.pinch_baseline.is_none() {
                log::debug!("Pinch baseline seeded at {}", separation);
            }
            self.pinch_baseline = Some(separation);
        }
    }

    /// Stop tracking a contact.
    ///
    /// Returns the removed contact, or `None` if the identity was unknown.
    pub fn contact_end(&mut self, id: PointerId) -> Option<Contact> {
        let removed = self.contacts.remove(id);
        if removed.is_none() {
            log::warn!("End for untracked contact {:?} ignored", id);
        }

        if self.contacts.len() < 2 && self.pinch_baseline.take().is_some() {
            log::debug!("Pinch baseline reset");
        }

        log::debug!("Contact {:?} ended, {} active", id, self.contacts.len());
        removed
    }

    /// Cancellation has no semantics beyond ending the contact.
    pub fn contact_cancel(&mut self, id: PointerId) -> Option<Contact> {
        self.contact_end(id)
    }

    /// Handle a wheel step as a zoom at `anchor`.
    ///
    /// Suppressing the host's default scroll is the caller's job.
    pub fn wheel<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        delta_y: f64,
        anchor: Anchor,
    ) -> zoop_view::Result<Dispatch> {
        let delta = GestureDelta::Zoom {
            scale: delta_y,
            anchor,
        };
        self.apply(surface, &delta)?;
        Ok(Dispatch {
            deltas: vec![delta],
            unknown_contact: None,
        })
    }

    /// Apply a single delta to the surface's current view window.
    pub fn apply<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        delta: &GestureDelta,
    ) -> zoop_view::Result<ViewWindow> {
        match *delta {
            GestureDelta::Pan { dx, dy } => zoop_view::pan(surface, dx, dy),
            GestureDelta::Zoom { scale, anchor } => {
                zoop_view::zoom(surface, scale, anchor, &self.policy)
            }
        }
    }

    /// Forget every contact, e.g. when the surface is detached.
    pub fn reset(&mut self) {
        self.contacts.clear();
        self.pinch_baseline = None;
    }
}
