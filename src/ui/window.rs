//! The clock window: a drawing area sized to the gauge grid, repainted
//! every second, shaped by the dial mask.

use chrono::Utc;
use gtk4::gdk::Display;
use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, CssProvider, DrawingArea};
use log::{info, warn};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::frame::render_frame;
use crate::app::{Action, AppState};

const REDRAW_INTERVAL: Duration = Duration::from_secs(1);

/// Build and present the clock window.
pub fn build_window(app: &Application, state: Rc<RefCell<AppState>>) -> ApplicationWindow {
    let (width, height) = state.borrow().engine.config().surface_size();
    let shaped = state.borrow().settings.shaped_window;

    load_css();

    let window = ApplicationWindow::builder()
        .application(app)
        .title("Dial Clock")
        .resizable(false)
        .decorated(!shaped)
        .build();
    if shaped {
        window.add_css_class("transparent-background");
    }

    let area = DrawingArea::new();
    area.set_content_width(width);
    area.set_content_height(height);

    let state_for_draw = state.clone();
    area.set_draw_func(move |_, cr, _width, _height| {
        let mut state = state_for_draw.borrow_mut();
        let AppState {
            engine,
            faces,
            settings,
            ..
        } = &mut *state;
        if let Err(e) = render_frame(engine, cr, faces.iter(), &settings.style, Utc::now()) {
            warn!("Failed to draw clocks: {}", e);
        }
    });
    window.set_child(Some(&area));

    // The mask needs the realized surface
    if shaped {
        let state_for_mask = state.clone();
        window.connect_realize(move |window| {
            apply_mask(window, &state_for_mask.borrow());
        });
    }

    let area_for_tick = area.clone();
    glib::timeout_add_local(REDRAW_INTERVAL, move || {
        area_for_tick.queue_draw();
        glib::ControlFlow::Continue
    });

    let key_controller = gtk4::EventControllerKey::new();
    let window_for_key = window.clone();
    let area_for_key = area.clone();
    key_controller.connect_key_pressed(move |_, key, _code, modifiers| {
        let Some(action) = Action::from_key(key, modifiers) else {
            return glib::Propagation::Proceed;
        };
        let screen_max = screen_max(&window_for_key, &state.borrow());
        let outcome = match state.borrow_mut().apply(action, screen_max) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("{:?} failed: {:#}", action, e);
                return glib::Propagation::Stop;
            }
        };

        if outcome.quit {
            window_for_key.close();
            return glib::Propagation::Stop;
        }
        if outcome.geometry_changed {
            let (width, height) = state.borrow().engine.config().surface_size();
            area_for_key.set_content_width(width);
            area_for_key.set_content_height(height);
            window_for_key.set_default_size(width, height);
            if shaped {
                // Wait for the surface to take the new size
                let window = window_for_key.clone();
                let state = state.clone();
                glib::idle_add_local_once(move || {
                    apply_mask(&window, &state.borrow());
                });
            }
        }
        if outcome.redraw {
            area_for_key.queue_draw();
        }
        glib::Propagation::Stop
    });
    window.add_controller(key_controller);

    info!("Clock window {}x{}", width, height);
    window.present();
    window
}

/// Limit input to the dial circles.
fn apply_mask(window: &ApplicationWindow, state: &AppState) {
    let Some(surface) = window.surface() else {
        warn!("Window has no surface, not applying mask");
        return;
    };
    match state.engine.build_mask() {
        Some(region) => {
            surface.set_input_region(&region);
            log::debug!("Applied window mask");
        }
        None => warn!("No window mask, input covers the whole window"),
    }
}

/// Largest dial that keeps the grid on screen
fn screen_max(window: &ApplicationWindow, state: &AppState) -> Option<i32> {
    let surface = window.surface()?;
    let display = surface.display();
    // Fall back to the first monitor when the surface has none yet
    let monitor = display.monitor_at_surface(&surface).or_else(|| {
        display
            .monitors()
            .item(0)
            .and_then(|obj| obj.downcast::<gtk4::gdk::Monitor>().ok())
    })?;
    let geometry = monitor.geometry();
    let config = state.engine.config();
    Some((geometry.width() / config.dial_width).min(geometry.height() / config.dial_height))
}

fn load_css() {
    let Some(display) = Display::default() else {
        warn!("No display, skipping CSS");
        return;
    };
    let provider = CssProvider::new();
    provider.load_from_data(
        "
        window.transparent-background,
        window.transparent-background drawingarea {
            background: transparent;
            background-color: transparent;
            box-shadow: none;
        }
        ",
    );
    gtk4::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}
