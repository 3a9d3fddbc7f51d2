//! Progress ring widget drawn with the egui painter.

use egui::{Color32, Pos2, Stroke, Vec2};

use crate::ui::theme::CountdownTheme;
use crate::utils::format::pad2;

const RING_SIZE: f32 = 120.0;
const RING_RADIUS: f32 = 46.0;
const RING_STROKE: f32 = 10.0;
const ARC_SEGMENTS: usize = 96;

/// Fraction of the ring to fill for `value` out of `max`, clamped to [0, 1].
pub fn ring_fraction(value: i64, max: i64) -> f32 {
    if max <= 0 {
        return 0.0;
    }
    (value as f32 / max as f32).clamp(0.0, 1.0)
}

/// Draw a single progress ring with its padded value inside and a label
/// underneath.
pub fn draw_ring(
    ui: &mut egui::Ui,
    value: i64,
    max: i64,
    label: &str,
    color: Color32,
    theme: &CountdownTheme,
) {
    ui.vertical_centered(|ui| {
        let (rect, _response) =
            ui.allocate_exact_size(Vec2::splat(RING_SIZE), egui::Sense::hover());
        let painter = ui.painter_at(rect);
        let center = rect.center();

        painter.circle_stroke(center, RING_RADIUS, Stroke::new(RING_STROKE, theme.ring_track));

        let fraction = ring_fraction(value, max);
        if fraction > 0.0 {
            let points = arc_points(center, RING_RADIUS, fraction);
            painter.add(egui::Shape::line(points, Stroke::new(RING_STROKE, color)));
        }

        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            pad2(value),
            egui::FontId::proportional(26.0),
            theme.text_primary,
        );

        ui.label(
            egui::RichText::new(label.to_uppercase())
                .size(12.0)
                .color(theme.text_secondary),
        );
    });
}

/// Sample points along the filled arc, starting at twelve o'clock and
/// sweeping clockwise.
fn arc_points(center: Pos2, radius: f32, fraction: f32) -> Vec<Pos2> {
    let segments = ((ARC_SEGMENTS as f32 * fraction).ceil() as usize).max(1);
    let start = -std::f32::consts::FRAC_PI_2;
    let sweep = std::f32::consts::TAU * fraction;

    (0..=segments)
        .map(|i| {
            let angle = start + sweep * (i as f32 / segments as f32);
            Pos2::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}
