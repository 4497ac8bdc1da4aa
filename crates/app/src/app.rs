use eframe::egui::{self, Color32};
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotBounds, PlotPoints, Points};
use lotka_core::{ControlRange, InputBatch, Parameters, RenderPayload, Session, State, TimeGrid};
use lotka_solvers::ode::DormandPrince45;

use crate::playback::Playback;

/// Fixed display bounds for the phase plot. Holding the viewport still keeps
/// repeated re-renders from jittering; clicks outside the bounds are clamped
/// onto them. A display constant, not a simulation constraint.
const PREY_AXIS_MAX: f64 = 100.0;
const PREDATOR_AXIS_MAX: f64 = 100.0;

/// The interactive explorer window.
///
/// Holds the simulation session, the live slider values, and the last
/// successful render. Every frame the sliders and the plot report whether an
/// input changed; one change means one synchronous recompute.
pub struct ExplorerApp {
    session: Session,
    integrator: DormandPrince45,
    /// Live slider values; the session keeps the committed copy.
    controls: Parameters,
    /// The last successful render, kept on screen through failed cycles.
    render: Option<RenderPayload>,
    error: Option<String>,
    playback: Playback,
}

impl ExplorerApp {
    #[must_use]
    pub fn new() -> Self {
        let mut app = Self {
            session: Session::new(TimeGrid::default()),
            integrator: DormandPrince45::default(),
            controls: Parameters::default(),
            render: None,
            error: None,
            playback: Playback::new(),
        };
        app.recompute(None);
        app
    }

    /// Runs one recomputation cycle from the current inputs.
    fn recompute(&mut self, click: Option<State>) {
        let mut batch = InputBatch::controls(self.controls);
        if let Some(point) = click {
            batch = batch.with_click(point);
        }

        match self.session.trigger(&self.integrator, batch) {
            Ok(payload) => {
                self.render = Some(payload);
                self.error = None;
                self.playback.rewind();
            }
            Err(err) => {
                log::warn!("integration failed, keeping previous render: {err}");
                self.error = Some(err.to_string());
            }
        }
    }

    fn controls_panel(&mut self, ui: &mut egui::Ui, total: usize) -> bool {
        let mut changed = false;

        ui.heading("Model parameters");
        ui.add_space(4.0);
        changed |= parameter_slider(
            ui,
            &mut self.controls.alpha,
            Parameters::ALPHA,
            "α prey growth",
        );
        changed |= parameter_slider(ui, &mut self.controls.beta, Parameters::BETA, "β predation");
        changed |= parameter_slider(
            ui,
            &mut self.controls.gamma,
            Parameters::GAMMA,
            "γ predator death",
        );
        changed |= parameter_slider(
            ui,
            &mut self.controls.delta,
            Parameters::DELTA,
            "δ predator growth",
        );

        ui.add_space(4.0);
        if ui.button("Reset to defaults").clicked() {
            self.controls = Parameters::default();
            self.session = Session::new(TimeGrid::default());
            changed = true;
        }

        ui.separator();
        ui.heading("Playback");
        ui.checkbox(&mut self.playback.animate, "Reveal trajectory over time");
        if self.playback.animate {
            ui.horizontal(|ui| {
                let label = if self.playback.playing { "Pause" } else { "Play" };
                if ui.button(label).clicked() {
                    if !self.playback.playing && self.playback.at_end(total) {
                        self.playback.rewind();
                    }
                    self.playback.playing = !self.playback.playing;
                }
                if ui.button("Restart").clicked() {
                    self.playback.rewind();
                    self.playback.playing = true;
                }
            });
            ui.add(
                egui::Slider::new(&mut self.playback.samples_per_second, 20.0..=600.0)
                    .text("samples/s"),
            );
        }

        ui.separator();
        let initial = self.session.initial();
        let equilibrium = self.session.parameters().equilibrium();
        ui.monospace(format!(
            "seed        ({:>6.2}, {:>6.2})",
            initial.prey, initial.predators
        ));
        ui.monospace(format!(
            "equilibrium ({:>6.2}, {:>6.2})",
            equilibrium.prey, equilibrium.predators
        ));
        ui.add_space(4.0);
        ui.label("Click anywhere in the plot to restart the orbit from that point.");

        if let Some(error) = &self.error {
            ui.add_space(8.0);
            ui.colored_label(
                Color32::RED,
                format!("Integration failed: {error}. Showing the last successful run."),
            );
        }

        changed
    }

    /// Draws the phase plot and returns a click's plot-space coordinate, if
    /// the user clicked this frame.
    fn phase_plot(&self, ui: &mut egui::Ui) -> Option<State> {
        let visible = self
            .render
            .as_ref()
            .map(|payload| self.playback.visible(payload.trajectory.len()));

        let response = Plot::new("phase-portrait")
            .legend(Legend::default())
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .x_axis_label("Prey population")
            .y_axis_label("Predator population")
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [0.0, 0.0],
                    [PREY_AXIS_MAX, PREDATOR_AXIS_MAX],
                ));

                if let (Some(payload), Some(visible)) = (&self.render, visible) {
                    let shown = &payload.trajectory.points()[..visible];
                    let path: Vec<[f64; 2]> =
                        shown.iter().map(|s| [s.prey, s.predators]).collect();

                    plot_ui.line(
                        Line::new(PlotPoints::from(path))
                            .color(Color32::from_rgb(70, 130, 220))
                            .name("Trajectory"),
                    );

                    plot_ui.points(
                        Points::new(vec![[payload.initial.prey, payload.initial.predators]])
                            .color(Color32::RED)
                            .shape(MarkerShape::Circle)
                            .radius(5.0)
                            .name("Initial condition"),
                    );

                    let equilibrium = self.session.parameters().equilibrium();
                    plot_ui.points(
                        Points::new(vec![[equilibrium.prey, equilibrium.predators]])
                            .color(Color32::GOLD)
                            .shape(MarkerShape::Diamond)
                            .radius(4.0)
                            .name("Equilibrium"),
                    );

                    // A head marker makes the reveal legible while it runs.
                    if let Some(head) = shown.last().filter(|_| self.playback.animate) {
                        plot_ui.points(
                            Points::new(vec![[head.prey, head.predators]])
                                .color(Color32::from_rgb(70, 130, 220))
                                .shape(MarkerShape::Circle)
                                .radius(3.0),
                        );
                    }
                }

                if plot_ui.response().clicked() {
                    plot_ui.pointer_coordinate()
                } else {
                    None
                }
            });

        response.inner.map(|point| {
            State::new(
                point.x.clamp(0.0, PREY_AXIS_MAX),
                point.y.clamp(0.0, PREDATOR_AXIS_MAX),
            )
        })
    }
}

impl Default for ExplorerApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let total = self
            .render
            .as_ref()
            .map_or(0, |payload| payload.trajectory.len());

        if self.playback.animate && self.playback.playing {
            let dt = f64::from(ctx.input(|i| i.stable_dt));
            self.playback.advance(dt, total);
            ctx.request_repaint();
        }

        let mut changed = false;
        egui::SidePanel::left("controls")
            .resizable(false)
            .min_width(280.0)
            .show(ctx, |ui| {
                changed = self.controls_panel(ui, total);
            });

        let mut clicked = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            clicked = self.phase_plot(ui);
        });

        // All inputs that changed this frame coalesce into one batch and one
        // recompute, with the click taking precedence over the stored seed.
        if changed || clicked.is_some() {
            self.recompute(clicked);
        }
    }
}

fn parameter_slider(
    ui: &mut egui::Ui,
    value: &mut f64,
    range: ControlRange,
    label: &str,
) -> bool {
    ui.add(
        egui::Slider::new(value, range.min..=range.max)
            .step_by(range.step)
            .text(label),
    )
    .changed()
}
