use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::models::breakdown::TimeBreakdown;
use crate::models::target::CountdownTarget;
use crate::services::clock::{Clock, SystemClock};
use crate::services::config::{self, AppConfig};
use crate::services::countdown::{spawn_refresh, RefreshHandle, TICK_PERIOD};
use crate::services::session::{self, SessionState, WindowGeometry};
use crate::ui::rings::draw_ring;
use crate::ui::theme::CountdownTheme;
use crate::utils::format::group_thousands;

pub struct CountdownApp {
    target: CountdownTarget,
    title: String,
    /// Latest breakdown published by the refresh loop (single writer),
    /// read here once per frame (single reader)
    latest: Arc<Mutex<TimeBreakdown>>,
    /// Stops the ticker when the display goes away
    refresh_handle: Option<RefreshHandle>,
    theme: CountdownTheme,
    session: SessionState,
    session_path: PathBuf,
}

impl eframe::App for CountdownApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Dropping the handle halts future ticks before teardown
        self.refresh_handle.take();
        self.persist_session();
    }
}

impl CountdownApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config_path = config::resolve_config_path();
        let config = AppConfig::load_or_default(&config_path);
        log::info!(
            "Loaded config from {}: target={}, destination={:?}",
            config_path.display(),
            config.target,
            config.destination
        );

        let target = config.target();
        let theme = CountdownTheme::from_name(&config.theme);
        theme.apply_to_context(&cc.egui_ctx);

        let clock = SystemClock;
        let latest = Arc::new(Mutex::new(TimeBreakdown::compute(
            target.instant_ms(),
            clock.now_ms(),
        )));

        let sink_latest = Arc::clone(&latest);
        let egui_ctx = cc.egui_ctx.clone();
        let refresh_handle = spawn_refresh(
            target.instant_ms(),
            clock,
            TICK_PERIOD,
            move |breakdown| {
                if let Ok(mut slot) = sink_latest.lock() {
                    *slot = breakdown;
                }
                egui_ctx.request_repaint();
            },
        );

        Self {
            target,
            title: config.title,
            latest,
            refresh_handle: Some(refresh_handle),
            theme,
            session: SessionState::default(),
            session_path: config::resolve_session_path(),
        }
    }

    fn latest_breakdown(&self) -> TimeBreakdown {
        self.latest.lock().map(|slot| *slot).unwrap_or_default()
    }

    fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.track_window_geometry(ctx);

        let breakdown = self.latest_breakdown();

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.theme.app_background)
                    .inner_margin(24.0),
            )
            .show(ctx, |ui| {
                self.render_header(ui);
                ui.add_space(18.0);

                if breakdown.is_arrived() {
                    self.render_arrived(ui);
                } else {
                    self.render_rings(ui, &breakdown);
                    ui.add_space(20.0);
                    self.render_totals(ui, &breakdown);
                }

                ui.add_space(24.0);
                self.render_footer(ui);
            });
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        ui.heading(egui::RichText::new(self.title.as_str()).size(24.0).strong());

        let mut subtitle = String::from("Arriving ");
        if let Some(destination) = self.target.destination() {
            subtitle.push_str("in ");
            subtitle.push_str(destination);
            subtitle.push(' ');
        }
        subtitle.push_str("on ");
        subtitle.push_str(&self.target.human_readable());

        ui.label(
            egui::RichText::new(subtitle)
                .size(13.0)
                .color(self.theme.text_secondary),
        );
    }

    fn render_rings(&self, ui: &mut egui::Ui, breakdown: &TimeBreakdown) {
        ui.columns(4, |columns| {
            draw_ring(
                &mut columns[0],
                breakdown.days,
                365,
                "days",
                self.theme.ring_days,
                &self.theme,
            );
            draw_ring(
                &mut columns[1],
                breakdown.hours,
                24,
                "hours",
                self.theme.ring_hours,
                &self.theme,
            );
            draw_ring(
                &mut columns[2],
                breakdown.minutes,
                60,
                "minutes",
                self.theme.ring_minutes,
                &self.theme,
            );
            draw_ring(
                &mut columns[3],
                breakdown.seconds,
                60,
                "seconds",
                self.theme.ring_seconds,
                &self.theme,
            );
        });
    }

    fn render_totals(&self, ui: &mut egui::Ui, breakdown: &TimeBreakdown) {
        ui.columns(2, |columns| {
            self.render_stat_panel(&mut columns[0], "Total hours", breakdown.total_hours());
            self.render_stat_panel(&mut columns[1], "Total minutes", breakdown.total_minutes());
        });
    }

    fn render_stat_panel(&self, ui: &mut egui::Ui, label: &str, value: i64) {
        egui::Frame::none()
            .fill(self.theme.panel_background)
            .rounding(8.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(group_thousands(value))
                            .size(22.0)
                            .strong(),
                    );
                    ui.label(
                        egui::RichText::new(label)
                            .size(12.0)
                            .color(self.theme.text_secondary),
                    );
                });
            });
    }

    fn render_arrived(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(48.0);
            ui.label(
                egui::RichText::new("I'm here!")
                    .size(30.0)
                    .strong()
                    .color(self.theme.arrived_accent),
            );
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new("Let's make every moment count")
                    .size(14.0)
                    .color(self.theme.text_secondary),
            );
            ui.add_space(48.0);
        });
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("Every tick brings us closer together.")
                    .size(11.0)
                    .color(self.theme.text_secondary),
            );
        });
    }

    /// Remember the current window placement so it can be restored next run.
    fn track_window_geometry(&mut self, ctx: &egui::Context) {
        let outer_rect = ctx.input(|i| i.viewport().outer_rect);
        if let Some(rect) = outer_rect {
            let geometry = WindowGeometry {
                x: rect.min.x,
                y: rect.min.y,
                width: rect.width(),
                height: rect.height(),
            };
            if geometry.is_plausible() {
                self.session.window_geometry = Some(geometry);
            }
        }
    }

    fn persist_session(&self) {
        if let Err(err) = session::save_session(&self.session_path, &self.session) {
            log::warn!("Failed to persist session state: {err:?}");
        }
    }
}
