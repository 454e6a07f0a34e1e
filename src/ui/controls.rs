//! Clickable widgets drawn over the canvas: the add button in the top-right
//! corner and the zoom controls in the bottom-left corner.

use ratatui::layout::{Position, Rect};

pub const ADD_BUTTON_LABEL: &str = "[+ Add Note]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    ZoomIn,
    ZoomOut,
    Fit,
}

impl Control {
    pub const ALL: [Control; 3] = [Control::ZoomIn, Control::ZoomOut, Control::Fit];

    pub fn label(self) -> &'static str {
        match self {
            Control::ZoomIn => "[+]",
            Control::ZoomOut => "[-]",
            Control::Fit => "[fit]",
        }
    }
}

pub fn add_button_rect(area: Rect) -> Rect {
    let width = ADD_BUTTON_LABEL.len() as u16;
    let x = area.right().saturating_sub(width + 1).max(area.x);
    Rect::new(x, area.y, width.min(area.width), area.height.min(1))
}

/// Control positions in absolute terminal coordinates, left to right.
pub fn control_rects(area: Rect) -> Vec<(Control, Rect)> {
    if area.height == 0 {
        return Vec::new();
    }
    let y = area.bottom() - 1;
    let mut x = area.x + 1;
    let mut rects = Vec::with_capacity(Control::ALL.len());
    for control in Control::ALL {
        let width = control.label().len() as u16;
        if x + width > area.right() {
            break;
        }
        rects.push((control, Rect::new(x, y, width, 1)));
        x += width + 1;
    }
    rects
}

pub fn hit_control(area: Rect, column: u16, row: u16) -> Option<Control> {
    control_rects(area)
        .into_iter()
        .find(|(_, rect)| rect.contains(Position::new(column, row)))
        .map(|(control, _)| control)
}

/// Bottom-right box the minimap is drawn in, or `None` when the canvas is
/// too small to spare the room.
pub fn minimap_rect(area: Rect, width: u16, height: u16) -> Option<Rect> {
    if area.width < width * 2 || area.height < height + 2 {
        return None;
    }
    Some(Rect::new(
        area.right() - width - 1,
        area.bottom() - height - 1,
        width,
        height,
    ))
}
