use crate::board::{Board, BoardCommand, SpawnArea};
use crate::card_view::CardView;
use crate::config::AppConfig;
use crate::model::{Card, CardId, Position};
use crate::viewport::{ScreenRect, Viewport};
use ratatui::layout::Rect;
use std::collections::HashMap;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    Connecting {
        source: CardId,
        target: Option<CardId>,
    },
    Help,
}

/// What the pointer is doing between press and release.
#[derive(Debug, Clone, PartialEq)]
pub enum Drag {
    Card {
        id: CardId,
        origin: Position,
        start: (u16, u16),
    },
    Pan {
        last: (u16, u16),
    },
    Connect {
        source: CardId,
    },
}

#[derive(Debug, Clone)]
pub struct Click {
    pub at: Instant,
    pub card: CardId,
}

pub struct AppState {
    pub running: bool,
    pub mode: AppMode,
    pub config: AppConfig,

    pub board: Board,
    pub views: HashMap<CardId, CardView>,
    pub selected: Option<CardId>,

    // Canvas state, `canvas_area` is refreshed on every draw
    pub viewport: Viewport,
    pub canvas_area: Rect,
    pub show_minimap: bool,
    pub needs_fit: bool,

    // Pointer state
    pub drag: Option<Drag>,
    pub last_click: Option<Click>,

    // Message for status line
    pub message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let spawn = SpawnArea {
            width: config.spawn_width,
            height: config.spawn_height,
        };
        let board = if config.welcome_card {
            Board::with_welcome_card(spawn)
        } else {
            Board::new(spawn)
        };

        let mut app = Self {
            running: true,
            mode: AppMode::Normal,
            viewport: Viewport::new(config.min_zoom, config.max_zoom),
            show_minimap: config.show_minimap,
            config,
            board,
            views: HashMap::new(),
            selected: None,
            canvas_area: Rect::new(0, 0, 80, 22),
            needs_fit: true,
            drag: None,
            last_click: None,
            message: None,
        };
        app.reconcile_views();
        app
    }

    /// Sends a command to the board and brings the card views back in line.
    pub fn dispatch(&mut self, command: BoardCommand) -> Option<CardId> {
        let added = self.board.dispatch(command);
        self.reconcile_views();
        added
    }

    fn reconcile_views(&mut self) {
        self.views.retain(|id, _| self.board.contains(id));
        for card in self.board.cards() {
            self.views
                .entry(card.id.clone())
                .and_modify(|view| view.sync(&card.data))
                .or_insert_with(|| CardView::new(card));
        }

        if let Some(selected) = &self.selected {
            if !self.board.contains(selected) {
                self.selected = None;
            }
        }
        if let AppMode::Connecting { source, .. } = &self.mode {
            if !self.board.contains(source) {
                self.mode = AppMode::Normal;
            }
        }
    }

    pub fn view(&self, id: &CardId) -> Option<&CardView> {
        self.views.get(id)
    }

    pub fn view_mut(&mut self, id: &CardId) -> Option<&mut CardView> {
        self.views.get_mut(id)
    }

    /// The card whose view is in Editing mode, in board order.
    pub fn editing_card(&self) -> Option<&CardId> {
        self.board
            .cards()
            .iter()
            .map(|card| &card.id)
            .find(|id| self.views.get(*id).is_some_and(CardView::is_editing))
    }

    pub fn editing_view_mut(&mut self) -> Option<&mut CardView> {
        let id = self.editing_card()?.clone();
        self.views.get_mut(&id)
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.selected.as_ref().and_then(|id| self.board.card(id))
    }

    /// Screen rectangle of a card, relative to the canvas origin.
    pub fn card_rect(&self, card: &Card) -> ScreenRect {
        self.viewport.card_rect(card)
    }

    /// Topmost card under an absolute terminal position.
    pub fn card_at(&self, column: u16, row: u16) -> Option<&Card> {
        let (col, row) = self.canvas_relative(column, row)?;
        self.board
            .cards()
            .iter()
            .rev()
            .find(|card| self.card_rect(card).contains(col, row))
    }

    pub fn canvas_relative(&self, column: u16, row: u16) -> Option<(i32, i32)> {
        let area = self.canvas_area;
        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;
        inside.then(|| ((column - area.x) as i32, (row - area.y) as i32))
    }

    pub fn canvas_center(&self) -> (i32, i32) {
        (
            self.canvas_area.width as i32 / 2,
            self.canvas_area.height as i32 / 2,
        )
    }

    pub fn fit_view(&mut self) {
        if let Some(bounds) = self.board.bounds() {
            self.viewport.fit(bounds, self.canvas_area);
        }
    }

    pub fn select(&mut self, id: Option<CardId>) {
        self.selected = id;
    }

    /// Moves the selection through the cards in board order.
    pub fn select_step(&mut self, forward: bool) {
        let cards = self.board.cards();
        if cards.is_empty() {
            self.selected = None;
            return;
        }
        let current = self
            .selected
            .as_ref()
            .and_then(|id| cards.iter().position(|card| &card.id == id));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => cards.len() - 1,
            (Some(i), true) => (i + 1) % cards.len(),
            (Some(i), false) => (i + cards.len() - 1) % cards.len(),
        };
        self.selected = Some(cards[next].id.clone());
    }

    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }
}
