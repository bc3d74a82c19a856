//! Raw input events as delivered by the attachment layer.

use serde::{Deserialize, Serialize};
use zoop_view::{Anchor, Surface};

use crate::contact::{Contact, Point, PointerId};
use crate::gesture::{Dispatch, GestureTracker};

/// One input event, processed strictly in arrival order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown(Contact),
    PointerMove(Contact),
    PointerUp { id: PointerId },
    PointerCancel { id: PointerId },
    /// Wheel step with its surface-local position.
    Wheel { delta_y: f64, offset: Point },
}

impl InputEvent {
    /// Short name of the event kind, as used in the JSON `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            InputEvent::PointerDown(_) => "pointer_down",
            InputEvent::PointerMove(_) => "pointer_move",
            InputEvent::PointerUp { .. } => "pointer_up",
            InputEvent::PointerCancel { .. } => "pointer_cancel",
            InputEvent::Wheel { .. } => "wheel",
        }
    }
}

impl GestureTracker {
    /// Route one event to its handler and apply the result to `surface`.
    pub fn handle<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        event: &InputEvent,
    ) -> zoop_view::Result<Dispatch> {
        match *event {
            InputEvent::PointerDown(contact) => {
                self.contact_start(contact);
                Ok(Dispatch::default())
            }
            InputEvent::PointerMove(contact) => self.contact_move(surface, contact),
            InputEvent::PointerUp { id } => Ok(ended(id, self.contact_end(id))),
            InputEvent::PointerCancel { id } => Ok(ended(id, self.contact_cancel(id))),
            InputEvent::Wheel { delta_y, offset } => {
                self.wheel(surface, delta_y, Anchor::new(offset.x, offset.y))
            }
        }
    }
}

fn ended(id: PointerId, removed: Option<Contact>) -> Dispatch {
    Dispatch {
        deltas: Vec::new(),
        unknown_contact: removed.is_none().then_some(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zoop_view::{AttributeSurface, DisplaySize, ViewWindow};

    #[test]
    fn test_event_json_shape() {
        let json = r#"[
            { "type": "pointer_down", "id": 1,
              "offset": { "x": 10.0, "y": 20.0 }, "client": { "x": 110.0, "y": 220.0 } },
            { "type": "pointer_cancel", "id": 1 },
            { "type": "wheel", "delta_y": -3.0, "offset": { "x": 5.0, "y": 6.0 } }
        ]"#;

        let events: Vec<InputEvent> = serde_json::from_str(json).unwrap();

        assert_eq!(
            events,
            vec![
                InputEvent::PointerDown(Contact::new(
                    PointerId(1),
                    Point::new(10.0, 20.0),
                    Point::new(110.0, 220.0)
                )),
                InputEvent::PointerCancel { id: PointerId(1) },
                InputEvent::Wheel {
                    delta_y: -3.0,
                    offset: Point::new(5.0, 6.0)
                },
            ]
        );
    }

    #[test]
    fn test_handle_routes_events() {
        let mut surface = AttributeSurface::new(
            ViewWindow::new(0.0, 0.0, 100.0, 100.0),
            DisplaySize::new(100.0, 100.0),
        );
        let mut tracker = GestureTracker::default();

        let down = tracker
            .handle(&mut surface, &InputEvent::PointerDown(Contact::at(1, 50.0, 50.0)))
            .unwrap();
        assert!(down.is_empty());

        tracker
            .handle(&mut surface, &InputEvent::PointerMove(Contact::at(1, 40.0, 50.0)))
            .unwrap();
        assert_eq!(
            surface.view_window().unwrap(),
            ViewWindow::new(10.0, 0.0, 100.0, 100.0)
        );

        let up = tracker
            .handle(&mut surface, &InputEvent::PointerUp { id: PointerId(1) })
            .unwrap();
        assert!(up.is_empty());

        let stray = tracker
            .handle(&mut surface, &InputEvent::PointerUp { id: PointerId(1) })
            .unwrap();
        assert_eq!(stray.unknown_contact, Some(PointerId(1)));
    }
}
