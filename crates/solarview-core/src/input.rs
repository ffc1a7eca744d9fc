use crate::view::ViewMode;

/// Input events the view understands. The host pushes these as DOM
/// events arrive; the runner drains the queue once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A click/tap ended at canvas coordinates (x, y).
    PointerUp { x: f32, y: f32 },
    /// The canvas was resized to (width, height) CSS pixels.
    Resize { width: f32, height: f32 },
    /// The speed slider moved. 1.0 is real speed.
    SetSpeed { factor: f64 },
    /// The orbit guide toggle flipped.
    SetShowOrbits { on: bool },
    /// A navigation tab selected a different section.
    SetMode { mode: ViewMode },
    /// Reset control: clear the selection, restore default speed.
    Reset,
}

/// A queue of input events.
/// The host writes events into the queue; the runner drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event.
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerUp { x: 10.0, y: 20.0 });
        q.push(InputEvent::SetSpeed { factor: 2.0 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn drain_preserves_arrival_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::SetShowOrbits { on: false });
        q.push(InputEvent::Reset);
        assert_eq!(
            q.drain(),
            vec![InputEvent::SetShowOrbits { on: false }, InputEvent::Reset]
        );
    }
}
