use {
    eframe::{
        Frame,
        egui::{CentralPanel, Context, ScrollArea, Visuals},
    },
    poll_promise::Promise,
    std::{sync::Arc, time::Duration},
};

use crate::{
    Cli,
    app::{
        AppState, DropOutcome, FileIntake, PageController, PageEvent,
        dispatch::{PredictionDispatcher, PredictionPromise},
        intake::{PickedFile, pick_file, validate_picked},
        phases::PhaseView,
    },
    config::DF,
    data::HttpPredictionClient,
    domain::UploadedFile,
    ui::{ToastStack, UI_CONFIG, render_header},
};

pub struct App {
    pub(crate) controller: PageController,
    pub(crate) intake: FileIntake,
    dispatcher: PredictionDispatcher,
    in_flight: Option<PredictionPromise>,
    picking: Option<Promise<PickedFile>>,
    toasts: ToastStack,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> anyhow::Result<Self> {
        setup_custom_visuals(&cc.egui_ctx);

        let client = HttpPredictionClient::new(&args.backend_url);
        log::info!("Predictions will be requested from {}", client.endpoint());

        Ok(Self {
            controller: PageController::new(),
            intake: FileIntake::default(),
            dispatcher: PredictionDispatcher::new(Arc::new(client))?,
            in_flight: None,
            picking: None,
            toasts: ToastStack::default(),
        })
    }

    /// Idle -> Uploading, then fire the request.
    fn submit(&mut self, ctx: &Context, file: UploadedFile) {
        if let Some(file) = self.controller.submit(file) {
            self.in_flight = Some(self.dispatcher.dispatch(ctx, file));
        }
    }

    fn handle_event(&mut self, ctx: &Context, event: PageEvent) {
        match event {
            PageEvent::PickFile => {
                if self.picking.is_none() && self.controller.accepts_uploads() {
                    self.picking = Some(pick_file());
                }
            }
            PageEvent::UploadNew => self.controller.upload_new(),
            PageEvent::SelectWindow(window) => self.controller.select_window(window),
        }
        ctx.request_repaint();
    }

    fn poll_picker(&mut self, ctx: &Context) {
        let Some(promise) = self.picking.take() else {
            return;
        };
        match promise.try_take() {
            Ok(None) => {
                if DF.log_intake {
                    log::info!("File dialog cancelled");
                }
            }
            Ok(Some(picked)) => match picked.and_then(validate_picked) {
                Ok(file) => self.submit(ctx, file),
                Err(e) => self.controller.reject(e.to_string()),
            },
            Err(pending) => self.picking = Some(pending),
        }
    }

    fn poll_in_flight(&mut self, ctx: &Context) {
        let Some(promise) = self.in_flight.take() else {
            return;
        };
        match promise.try_take() {
            Ok(outcome) => self.controller.complete(outcome),
            Err(pending) => {
                self.in_flight = Some(pending);
                ctx.request_repaint_after(Duration::from_millis(100));
            }
        }
    }

    /// Drops only count while the intake is visible.
    fn handle_file_drops(&mut self, ctx: &Context) {
        let (hovering, dropped) = ctx.input(|i| {
            (
                !i.raw.hovered_files.is_empty(),
                i.raw.dropped_files.clone(),
            )
        });

        if !self.controller.accepts_uploads() {
            self.intake.set_drag_active(false);
            return;
        }
        self.intake.set_drag_active(hovering);

        if dropped.is_empty() {
            return;
        }
        match self.intake.handle_drop(&dropped) {
            DropOutcome::Ignored => {}
            DropOutcome::Accepted(file) => self.submit(ctx, file),
            DropOutcome::Unreadable(e) => self.controller.reject(e.to_string()),
        }
    }

    fn render_page(&self, ctx: &Context) -> Option<PageEvent> {
        let mut event = None;
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(UI_CONFIG.content_max_width);
                        render_header(ui);
                        ui.add_space(24.0);
                        event = match self.controller.state() {
                            AppState::Idle(s) => s.show(ui, &self.intake),
                            AppState::Uploading(s) => s.show(ui, &self.intake),
                            AppState::Ready(s) => s.show(ui, &self.intake),
                        };
                    });
                });
            });
        event
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.poll_picker(ctx);
        self.poll_in_flight(ctx);
        self.handle_file_drops(ctx);

        if let Some(event) = self.render_page(ctx) {
            self.handle_event(ctx, event);
        }

        for notification in self.controller.drain_notifications() {
            self.toasts.push(notification);
        }
        self.toasts.show(ctx);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.card;
    visuals.panel_fill = UI_CONFIG.colors.background;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
