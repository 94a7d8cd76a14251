//! Canvas particle field behind the hero.

use std::f64::consts::TAU;

use leptos::{ev, html, prelude::*};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::app::AppContext;
use crate::config::particles::{DARK_COLOR, LIGHT_COLOR};
use crate::core::ParticleField;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/hero/particles.module.css");

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()??
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

fn fit_to_viewport(canvas: &HtmlCanvasElement) -> Option<(f64, f64)> {
    let (width, height) = dom::viewport_size()?;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    Some((width, height))
}

fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField, color: &str) {
    ctx.clear_rect(0.0, 0.0, field.width(), field.height());
    ctx.set_fill_style_str(color);
    for p in field.particles() {
        ctx.begin_path();
        if ctx.arc(p.x, p.y, p.size, 0.0, TAU).is_ok() {
            ctx.fill();
        }
    }
}

/// One animation frame; reschedules itself until the component is disposed.
fn run_frame(
    canvas_ref: NodeRef<html::Canvas>,
    field: StoredValue<Option<ParticleField>>,
    dark: Signal<bool>,
) {
    let Some(canvas) = canvas_ref.get_untracked() else {
        return;
    };
    let Some(ctx) = context_2d(&canvas) else {
        return;
    };
    let color = if dark.get_untracked() { DARK_COLOR } else { LIGHT_COLOR };

    let alive = field
        .try_update_value(|field| {
            if let Some(field) = field {
                field.step();
                draw(&ctx, field, color);
            }
        })
        .is_some();

    if alive {
        request_animation_frame(move || run_frame(canvas_ref, field, dark));
    }
}

#[component]
pub fn ParticlesBackground() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let dark = Signal::derive(move || ctx.is_dark());

    let canvas_ref = NodeRef::<html::Canvas>::new();
    let field = StoredValue::new(None::<ParticleField>);

    // Start once the canvas is mounted
    Effect::new(move || {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if field.with_value(Option::is_some) {
            return;
        }
        if let Some((width, height)) = fit_to_viewport(&canvas) {
            field.set_value(Some(ParticleField::new(width, height)));
            run_frame(canvas_ref, field, dark);
        }
    });

    let resize = window_event_listener(ev::resize, move |_| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        if let Some((width, height)) = fit_to_viewport(&canvas) {
            field.update_value(|field| {
                if let Some(field) = field {
                    field.resize(width, height);
                }
            });
        }
    });
    on_cleanup(move || resize.remove());

    view! { <canvas node_ref=canvas_ref class=css::canvas aria-hidden="true"></canvas> }
}
