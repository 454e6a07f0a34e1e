//! The canvas controller: sole owner of the cards and their connections.
//!
//! Everything that changes the board goes through the methods here, either
//! directly or through [`Board::dispatch`]. Card views only ever produce
//! [`BoardCommand`] values.

use crate::model::{Bounds, Card, CardData, CardId, Connection, Position};
use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info, warn};

pub const WELCOME_ID: &str = "1";
pub const WELCOME_TITLE: &str = "Welcome";
pub const WELCOME_CONTENT: &str = "Double click to edit.\nDrag to move.\nClick + to add new cards.";
pub const WELCOME_POSITION: Position = Position { x: 250.0, y: 250.0 };

/// Region new cards are dropped into, anchored at the world origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnArea {
    pub width: f64,
    pub height: f64,
}

impl Default for SpawnArea {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
        }
    }
}

impl SpawnArea {
    /// A point inside the area. A side that is not a finite positive length
    /// collapses to zero.
    fn random_position(&self, rng: &mut impl Rng) -> Position {
        let mut sample = |side: f64| {
            if side.is_finite() && side > 0.0 {
                rng.gen_range(0.0..side)
            } else {
                0.0
            }
        };
        Position::new(sample(self.width), sample(self.height))
    }
}

/// A mutation request addressed to the board.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardCommand {
    AddCard,
    UpdateCard { id: CardId, data: CardData },
    MoveCard { id: CardId, position: Position },
    DeleteCard { id: CardId },
    Connect { source: CardId, target: CardId },
    Disconnect { source: CardId, target: CardId },
}

#[derive(Debug, Clone, Default)]
pub struct Board {
    cards: Vec<Card>,
    connections: Vec<Connection>,
    spawn: SpawnArea,
}

impl Board {
    pub fn new(spawn: SpawnArea) -> Self {
        Self {
            cards: Vec::new(),
            connections: Vec::new(),
            spawn,
        }
    }

    /// A board holding only the welcome card.
    pub fn with_welcome_card(spawn: SpawnArea) -> Self {
        let mut board = Self::new(spawn);
        board.cards.push(Card::new(
            CardId::new(WELCOME_ID),
            WELCOME_POSITION,
            CardData::new(WELCOME_TITLE, WELCOME_CONTENT),
        ));
        board
    }

    /// Applies a command. Returns the id of the new card for `AddCard`.
    pub fn dispatch(&mut self, command: BoardCommand) -> Option<CardId> {
        match command {
            BoardCommand::AddCard => return Some(self.add_card()),
            BoardCommand::UpdateCard { id, data } => {
                self.update_card(&id, data);
            }
            BoardCommand::MoveCard { id, position } => {
                self.move_card(&id, position);
            }
            BoardCommand::DeleteCard { id } => {
                self.delete_card(&id);
            }
            BoardCommand::Connect { source, target } => {
                self.add_connection(source, target);
            }
            BoardCommand::Disconnect { source, target } => {
                self.remove_connection(&source, &target);
            }
        }
        None
    }

    /// Appends a placeholder card somewhere inside the spawn area.
    pub fn add_card(&mut self) -> CardId {
        let position = self.spawn.random_position(&mut rand::thread_rng());
        self.add_card_at(position, CardData::placeholder())
    }

    pub fn add_card_at(&mut self, position: Position, data: CardData) -> CardId {
        let id = self.next_card_id();
        info!(card = %id, x = position.x, y = position.y, "card added");
        self.cards.push(Card::new(id.clone(), position, data));
        id
    }

    /// Replaces title and content. Returns false when no card has `id`.
    pub fn update_card(&mut self, id: &CardId, data: CardData) -> bool {
        match self.card_mut(id) {
            Some(card) => {
                debug!(card = %id, title = %data.title, "card updated");
                card.data = data;
                true
            }
            None => {
                warn!(card = %id, "update ignored, no such card");
                false
            }
        }
    }

    pub fn move_card(&mut self, id: &CardId, position: Position) -> bool {
        match self.card_mut(id) {
            Some(card) => {
                debug!(card = %id, x = position.x, y = position.y, "card moved");
                card.position = position;
                true
            }
            None => {
                warn!(card = %id, "move ignored, no such card");
                false
            }
        }
    }

    /// Removes a card together with every connection that references it.
    pub fn delete_card(&mut self, id: &CardId) -> Option<Card> {
        let Some(index) = self.cards.iter().position(|card| &card.id == id) else {
            warn!(card = %id, "delete ignored, no such card");
            return None;
        };

        let removed = self.cards.remove(index);
        let before = self.connections.len();
        self.connections.retain(|conn| !conn.touches(id));
        info!(
            card = %id,
            dropped_connections = before - self.connections.len(),
            "card deleted"
        );
        Some(removed)
    }

    /// Appends a connection. Duplicates and self-links are accepted; links
    /// to cards that are not on the board are not.
    pub fn add_connection(&mut self, source: CardId, target: CardId) -> bool {
        if !self.contains(&source) || !self.contains(&target) {
            warn!(%source, %target, "connection ignored, endpoint missing");
            return false;
        }
        info!(%source, %target, "cards connected");
        self.connections.push(Connection::new(source, target));
        true
    }

    /// Drops every connection from `source` to `target`. Returns false when
    /// there was none.
    pub fn remove_connection(&mut self, source: &CardId, target: &CardId) -> bool {
        let before = self.connections.len();
        self.connections
            .retain(|conn| !(&conn.source == source && &conn.target == target));
        let removed = before - self.connections.len();
        if removed == 0 {
            warn!(%source, %target, "no connection to remove");
            return false;
        }
        info!(%source, %target, removed, "cards disconnected");
        true
    }

    pub fn is_connected(&self, source: &CardId, target: &CardId) -> bool {
        self.connections
            .iter()
            .any(|conn| &conn.source == source && &conn.target == target)
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| &card.id == id)
    }

    fn card_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| &card.id == id)
    }

    pub fn contains(&self, id: &CardId) -> bool {
        self.card(id).is_some()
    }

    /// Cards in insertion order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// World bounding box of every card, or `None` for an empty board.
    pub fn bounds(&self) -> Option<Bounds> {
        self.cards
            .iter()
            .map(Card::bounds)
            .reduce(|acc, bounds| acc.union(bounds))
    }

    fn next_card_id(&self) -> CardId {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default();
        self.unique_id(format!("card-{millis}"))
    }

    fn unique_id(&self, base: String) -> CardId {
        let candidate = CardId::new(base.clone());
        if !self.contains(&candidate) {
            return candidate;
        }
        (1..)
            .map(|n| CardId::new(format!("{base}-{n}")))
            .find(|id| !self.contains(id))
            .unwrap_or(candidate)
    }
}
