use std::f64::consts::PI;

use shared::animator::segment_angle;
use shared::constants::POINTER_OFFSET_DEG;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::styles::segment_color;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub names: Vec<String>,
    pub rotation: f64,
    pub is_spinning: bool,
}

fn is_dark_mode() -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|el| el.class_list().contains("dark"))
        .unwrap_or(false)
}

fn context_for(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn truncate_label(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        return name.to_string();
    }
    let mut label: String = name.chars().take(max_chars.saturating_sub(1)).collect();
    label.push('…');
    label
}

fn draw_wheel(context: &CanvasRenderingContext2d, width: f64, height: f64, props: &WheelCanvasProps) {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = width.min(height) / 2.0 - 20.0;
    let dark = is_dark_mode();

    context.clear_rect(0.0, 0.0, width, height);

    // Glow behind the wheel
    context.begin_path();
    let glow = if props.is_spinning { 0.25 } else { 0.15 };
    context.set_fill_style_str(&format!("rgba(100, 130, 255, {})", glow));
    let _ = context.arc(center_x, center_y, radius + 12.0, 0.0, 2.0 * PI);
    context.fill();

    if props.names.is_empty() {
        context.begin_path();
        context.set_fill_style_str(if dark { "#1a1c2e" } else { "#f0f2ff" });
        let _ = context.arc(center_x, center_y, radius, 0.0, 2.0 * PI);
        context.fill();

        context.set_fill_style_str(if dark { "#9ca3af" } else { "#6b7280" });
        context.set_text_align("center");
        context.set_text_baseline("middle");
        context.set_font("bold 20px 'Segoe UI', Roboto, system-ui, sans-serif");
        let _ = context.fill_text("Add an option", center_x, center_y);
        return;
    }

    let count = props.names.len();
    let slice = segment_angle(count) * PI / 180.0;

    context.save();
    let _ = context.translate(center_x, center_y);
    let _ = context.rotate((props.rotation + POINTER_OFFSET_DEG) * PI / 180.0);

    // Segment i is centered at local angle -i * slice
    for (index, name) in props.names.iter().enumerate() {
        let center = -(index as f64) * slice;

        context.begin_path();
        context.set_fill_style_str(segment_color(index, count));
        context.move_to(0.0, 0.0);
        let _ = context.arc(0.0, 0.0, radius, center - slice / 2.0, center + slice / 2.0);
        context.close_path();
        context.fill();

        if count > 1 {
            context.set_stroke_style_str("rgba(255, 255, 255, 0.9)");
            context.set_line_width(2.5);
            context.stroke();
        }

        context.save();
        let _ = context.rotate(center);
        context.set_fill_style_str("#ffffff");
        context.set_text_align("right");
        context.set_text_baseline("middle");
        context.set_shadow_color("rgba(0, 0, 0, 0.5)");
        context.set_shadow_blur(3.0);
        let font_size = if count > 12 { 14 } else { 20 };
        context.set_font(&format!(
            "bold {}px 'Segoe UI', Roboto, system-ui, sans-serif",
            font_size
        ));
        let _ = context.fill_text(&truncate_label(name, 16), radius - 16.0, 0.0);
        context.restore();
    }

    context.restore();

    // Hub
    context.begin_path();
    context.set_fill_style_str(if dark { "#2d3142" } else { "#8b5cf6" });
    let _ = context.arc(center_x, center_y, radius * 0.12, 0.0, 2.0 * PI);
    context.fill();

    // Outer ring
    context.begin_path();
    context.set_stroke_style_str(if dark {
        "rgba(180, 130, 255, 0.5)"
    } else {
        "rgba(130, 100, 255, 0.5)"
    });
    context.set_line_width(4.0);
    let _ = context.arc(center_x, center_y, radius - 2.0, 0.0, 2.0 * PI);
    context.stroke();

    // Pointer at the top, tip touching the rim
    context.begin_path();
    context.move_to(center_x, center_y - radius + 14.0);
    context.line_to(center_x - 16.0, center_y - radius - 16.0);
    context.line_to(center_x + 16.0, center_y - radius - 16.0);
    context.close_path();
    context.set_fill_style_str(if props.is_spinning { "#ffd700" } else { "#f59e0b" });
    context.fill();
    context.set_stroke_style_str("#e69500");
    context.set_line_width(1.5);
    context.stroke();
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let names = props.names.clone();
        let rotation = props.rotation;
        let is_spinning = props.is_spinning;

        use_effect_with(
            (names, rotation.to_bits(), is_spinning),
            move |(names, _, is_spinning)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    match context_for(&canvas) {
                        Some(context) => {
                            let snapshot = WheelCanvasProps {
                                names: names.clone(),
                                rotation,
                                is_spinning: *is_spinning,
                            };
                            draw_wheel(
                                &context,
                                canvas.width() as f64,
                                canvas.height() as f64,
                                &snapshot,
                            );
                        }
                        None => log::warn!("Wheel canvas has no 2d context"),
                    }
                }
                || ()
            },
        );
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width="450"
                height="450"
                class="w-full max-w-[450px] h-auto rounded-full shadow-lg transition-all duration-300"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(130, 100, 255, 0.4));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
        </div>
    }
}
