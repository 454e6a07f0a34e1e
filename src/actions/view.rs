use crate::app::AppState;

pub fn pan(app: &mut AppState, cols: i32, rows: i32) {
    app.viewport.pan_by(cols, rows);
}

pub fn zoom_in(app: &mut AppState) {
    let anchor = app.canvas_center();
    app.viewport.zoom_by(app.config.zoom_step, anchor);
    report_zoom(app);
}

pub fn zoom_out(app: &mut AppState) {
    let anchor = app.canvas_center();
    app.viewport.zoom_by(1.0 / app.config.zoom_step, anchor);
    report_zoom(app);
}

pub fn fit_view(app: &mut AppState) {
    app.fit_view();
    report_zoom(app);
}

pub fn toggle_minimap(app: &mut AppState) {
    app.show_minimap = !app.show_minimap;
}

fn report_zoom(app: &mut AppState) {
    let (min, max) = app.viewport.zoom_bounds();
    let zoom = app.viewport.zoom();
    if zoom <= min {
        app.set_message("Zoomed out all the way");
    } else if zoom >= max {
        app.set_message("Zoomed in all the way");
    }
}
