//! Cards, connections and the world geometry they occupy.

use std::fmt;

pub const UNTITLED: &str = "Untitled";
pub const NO_CONTENT: &str = "No content";

pub const NEW_CARD_TITLE: &str = "New Card";
pub const NEW_CARD_CONTENT: &str = "Type something here...";

// Footprint of a card on the canvas, in world units.
pub const CARD_WIDTH: f64 = 256.0;
pub const CARD_HEIGHT: f64 = 160.0;

/// Unique identifier of a card on the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A point on the canvas, in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// The user-editable part of a card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardData {
    pub title: String,
    pub content: String,
}

impl CardData {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn placeholder() -> Self {
        Self::new(NEW_CARD_TITLE, NEW_CARD_CONTENT)
    }

    pub fn display_title(&self) -> &str {
        display_or(&self.title, UNTITLED)
    }

    pub fn display_content(&self) -> &str {
        display_or(&self.content, NO_CONTENT)
    }
}

fn display_or<'a>(text: &'a str, placeholder: &'a str) -> &'a str {
    if text.is_empty() {
        placeholder
    } else {
        text
    }
}

/// Axis-aligned rectangle in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Position,
    pub max: Position,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Position {
        Position::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    pub fn union(self, other: Bounds) -> Bounds {
        Bounds {
            min: Position::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Position::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: CardId,
    pub position: Position,
    pub data: CardData,
}

impl Card {
    pub fn new(id: CardId, position: Position, data: CardData) -> Self {
        Self { id, position, data }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            min: self.position,
            max: self.position.offset(CARD_WIDTH, CARD_HEIGHT),
        }
    }
}

/// Directed link between two cards. Carries no meaning beyond existing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub source: CardId,
    pub target: CardId,
}

impl Connection {
    pub fn new(source: CardId, target: CardId) -> Self {
        Self { source, target }
    }

    pub fn touches(&self, id: &CardId) -> bool {
        &self.source == id || &self.target == id
    }
}
