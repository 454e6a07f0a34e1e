use crate::ui::canvas::BufferCanvas;
use crate::ui::constants::junction;
use crate::viewport::ScreenRect;
use ratatui::style::Style;

/// Routes a connection as an elbow: down from the middle of the source's
/// bottom edge, across at the half-way row, then down into the middle of
/// the target's top edge.
pub struct ConnectionRenderer;

impl ConnectionRenderer {
    pub fn draw(canvas: &mut BufferCanvas, source: ScreenRect, target: ScreenRect, style: Style) {
        let (sx, sy) = (source.center_x(), source.bottom());
        let (tx, ty) = (target.center_x(), target.y - 1);
        let mid = (sy + ty) / 2;

        if sx == tx {
            canvas.vline(sx, sy, ty, junction::VERTICAL, style);
        } else {
            canvas.vline(sx, sy, mid, junction::VERTICAL, style);
            canvas.hline(mid, sx, tx, junction::HORIZONTAL, style);
            canvas.vline(tx, mid, ty, junction::VERTICAL, style);

            let rightwards = tx > sx;
            if mid != sy {
                let corner = match (mid > sy, rightwards) {
                    (true, true) => junction::BOTTOM_LEFT,
                    (true, false) => junction::BOTTOM_RIGHT,
                    (false, true) => junction::TOP_LEFT,
                    (false, false) => junction::TOP_RIGHT,
                };
                canvas.put(sx, mid, corner, style);
            }
            if mid != ty {
                let corner = match (ty > mid, rightwards) {
                    (true, true) => junction::TOP_RIGHT,
                    (true, false) => junction::TOP_LEFT,
                    (false, true) => junction::BOTTOM_RIGHT,
                    (false, false) => junction::BOTTOM_LEFT,
                };
                canvas.put(tx, mid, corner, style);
            }
        }

        let arrow = if ty >= sy {
            junction::ARROW_DOWN
        } else {
            junction::ARROW_UP
        };
        canvas.put(tx, ty, arrow, style);
    }
}
