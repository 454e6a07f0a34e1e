//! Pan and zoom over the world plane.
//!
//! At zoom 1.0 one terminal cell covers `CELL_WIDTH` × `CELL_HEIGHT` world
//! units. `pan` is the world point drawn in the top-left cell of the canvas.

use crate::model::{Bounds, Card, Position};
use ratatui::layout::Rect;

pub const CELL_WIDTH: f64 = 10.0;
pub const CELL_HEIGHT: f64 = 20.0;

pub const DEFAULT_MIN_ZOOM: f64 = 0.1;
pub const DEFAULT_MAX_ZOOM: f64 = 4.0;
/// Largest zoom a configuration may ask for.
pub const MAX_ZOOM_LIMIT: f64 = 100.0;

// Projected cell coordinates are kept within this range so rectangle
// arithmetic stays far away from `i32` limits.
const SCREEN_LIMIT: f64 = 1.0e6;

const FIT_PADDING: f64 = 0.9;

/// A card projected onto the canvas, in cells relative to the canvas origin.
/// Coordinates may be negative or beyond the canvas when partly off-screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl ScreenRect {
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn contains(&self, col: i32, row: i32) -> bool {
        col >= self.x && col < self.right() && row >= self.y && row < self.bottom()
    }

    pub fn center_x(&self) -> i32 {
        self.x.saturating_add(self.width / 2)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub pan: Position,
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_ZOOM, DEFAULT_MAX_ZOOM)
    }
}

impl Viewport {
    pub fn new(min_zoom: f64, max_zoom: f64) -> Self {
        Self {
            pan: Position::default(),
            zoom: 1.0_f64.clamp(min_zoom, max_zoom),
            min_zoom,
            max_zoom,
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn zoom_bounds(&self) -> (f64, f64) {
        (self.min_zoom, self.max_zoom)
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Multiplies the zoom, keeping the world point under `anchor` in place.
    pub fn zoom_by(&mut self, factor: f64, anchor: (i32, i32)) {
        let fixed = self.to_world(anchor.0, anchor.1);
        self.set_zoom(self.zoom * factor);
        self.pan = Position::new(
            fixed.x - anchor.0 as f64 * CELL_WIDTH / self.zoom,
            fixed.y - anchor.1 as f64 * CELL_HEIGHT / self.zoom,
        );
    }

    pub fn pan_by(&mut self, cols: i32, rows: i32) {
        self.pan = self.pan.offset(
            cols as f64 * CELL_WIDTH / self.zoom,
            rows as f64 * CELL_HEIGHT / self.zoom,
        );
    }

    /// World distance covered by a pointer drag of `cols` × `rows` cells.
    pub fn cells_to_world(&self, cols: i32, rows: i32) -> (f64, f64) {
        (
            cols as f64 * CELL_WIDTH / self.zoom,
            rows as f64 * CELL_HEIGHT / self.zoom,
        )
    }

    /// Zooms and pans so `bounds` fills most of `area`, centred.
    pub fn fit(&mut self, bounds: Bounds, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let visible_w = area.width as f64 * CELL_WIDTH;
        let visible_h = area.height as f64 * CELL_HEIGHT;
        let zoom_w = visible_w / bounds.width().max(1.0);
        let zoom_h = visible_h / bounds.height().max(1.0);
        self.set_zoom(zoom_w.min(zoom_h) * FIT_PADDING);

        let center = bounds.center();
        self.pan = Position::new(
            center.x - visible_w / self.zoom / 2.0,
            center.y - visible_h / self.zoom / 2.0,
        );
    }

    pub fn to_screen(&self, position: Position) -> (i32, i32) {
        (
            to_cell((position.x - self.pan.x) * self.zoom / CELL_WIDTH),
            to_cell((position.y - self.pan.y) * self.zoom / CELL_HEIGHT),
        )
    }

    /// World point at the top-left corner of a cell.
    pub fn to_world(&self, col: i32, row: i32) -> Position {
        Position::new(
            self.pan.x + col as f64 * CELL_WIDTH / self.zoom,
            self.pan.y + row as f64 * CELL_HEIGHT / self.zoom,
        )
    }

    pub fn project(&self, bounds: Bounds) -> ScreenRect {
        let (x0, y0) = self.to_screen(bounds.min);
        let (x1, y1) = self.to_screen(bounds.max);
        ScreenRect {
            x: x0,
            y: y0,
            width: x1.saturating_sub(x0).max(2),
            height: y1.saturating_sub(y0).max(2),
        }
    }

    pub fn card_rect(&self, card: &Card) -> ScreenRect {
        self.project(card.bounds())
    }
}

fn to_cell(value: f64) -> i32 {
    value.floor().clamp(-SCREEN_LIMIT, SCREEN_LIMIT) as i32
}
