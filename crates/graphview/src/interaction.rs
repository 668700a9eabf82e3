use scholarnet_layout::Position;

/// Pointer state over the graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Interaction {
    #[default]
    Idle,
    Hovering(usize),
    Dragging(usize),
}

impl Interaction {
    pub fn hovered(self) -> Option<usize> {
        match self {
            Interaction::Hovering(i) => Some(i),
            _ => None,
        }
    }

    pub fn dragged(self) -> Option<usize> {
        match self {
            Interaction::Dragging(i) => Some(i),
            _ => None,
        }
    }

    pub fn is_dragging(self) -> bool {
        matches!(self, Interaction::Dragging(_))
    }
}

/// Pointer input in graph coordinates (origin at the center of the view)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Moved(Position),
    Pressed(Position),
    Released(Position),
    Clicked(Position),
}

impl PointerEvent {
    pub fn position(&self) -> Position {
        match *self {
            PointerEvent::Moved(p)
            | PointerEvent::Pressed(p)
            | PointerEvent::Released(p)
            | PointerEvent::Clicked(p) => p,
        }
    }
}
