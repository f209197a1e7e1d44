use std::sync::mpsc;
use std::time::Duration;

use anyhow::anyhow;
use eframe::egui;
use folio_core::{update, AppState, AppViewModel, Msg};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::persistence;
use crate::data;

/// How often the shell polls for viewport/clipboard/timer results.
const POLL_INTERVAL: Duration = Duration::from_millis(75);

pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    let links = data::portfolio_links()?;
    let restored = persistence::load_current_index(&config.state_dir);
    let state = AppState::new(links, restored);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let effects = EffectRunner::new(msg_tx.clone(), config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };
    let app = FolioApp::new(state, msg_rx, effects);
    eframe::run_native("Folio", options, Box::new(move |_cc| Ok(Box::new(app))))
        .map_err(|err| anyhow!("ui shell failed: {err}"))
}

struct FolioApp {
    state: AppState,
    msg_rx: mpsc::Receiver<Msg>,
    effects: EffectRunner,
}

impl FolioApp {
    fn new(state: AppState, msg_rx: mpsc::Receiver<Msg>, effects: EffectRunner) -> Self {
        let mut app = Self {
            state,
            msg_rx,
            effects,
        };
        app.dispatch(Msg::Started);
        app
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.run(effects);
    }

    fn process_pending_messages(&mut self) {
        let mut inbox = Vec::new();
        while let Ok(msg) = self.msg_rx.try_recv() {
            inbox.push(msg);
        }
        for msg in inbox {
            self.dispatch(msg);
        }
    }

    fn draw(&self, ctx: &egui::Context, view: &AppViewModel, pending: &mut Vec<Msg>) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Folio").strong());
                ui.separator();
                controls(ui, view, pending);
            });
            ui.add_space(4.0);
        });

        if let Some(notice) = &view.notice {
            egui::TopBottomPanel::bottom("notice").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(notice);
                    if ui.small_button("Dismiss").clicked() {
                        pending.push(Msg::NoticeDismissed);
                    }
                });
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            viewport_area(ui, view);
        });
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_pending_messages();

        let view = self.state.view();
        let mut pending = Vec::new();
        self.draw(ctx, &view, &mut pending);
        for msg in pending {
            self.dispatch(msg);
        }

        if self.state.consume_dirty() {
            ctx.request_repaint();
        }
        ctx.request_repaint_after(POLL_INTERVAL);
    }
}

fn controls(ui: &mut egui::Ui, view: &AppViewModel, pending: &mut Vec<Msg>) {
    if ui
        .add_enabled(view.controls_enabled, egui::Button::new("🎲 Random"))
        .clicked()
    {
        pending.push(Msg::RandomClicked);
    }
    if ui
        .add_enabled(view.can_step_back, egui::Button::new("◀"))
        .clicked()
    {
        pending.push(Msg::BackClicked);
    }

    let mut text = view.input_text.clone();
    let edit = ui.add_enabled(
        view.controls_enabled,
        egui::TextEdit::singleline(&mut text).desired_width(48.0),
    );
    if edit.changed() {
        pending.push(Msg::InputChanged(text));
    }
    if edit.lost_focus() {
        if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            pending.push(Msg::InputSubmitted);
        } else {
            pending.push(Msg::InputBlurred);
        }
    }
    ui.label(format!("of {}", view.total));

    if ui
        .add_enabled(view.can_step_forward, egui::Button::new("▶"))
        .clicked()
    {
        pending.push(Msg::ForwardClicked);
    }
    ui.separator();

    let copy_label = if view.copied { "✔ Copied" } else { "Copy" };
    if ui
        .add_enabled(view.controls_enabled, egui::Button::new(copy_label))
        .clicked()
    {
        pending.push(Msg::CopyClicked);
    }
    if ui
        .add_enabled(view.controls_enabled, egui::Button::new("Share"))
        .clicked()
    {
        pending.push(Msg::ShareClicked);
    }
}

fn viewport_area(ui: &mut egui::Ui, view: &AppViewModel) {
    let Some(url) = &view.current_url else {
        ui.centered_and_justified(|ui| {
            ui.label("No portfolios to browse.");
        });
        return;
    };

    ui.add_space(8.0);
    if view.loading {
        ui.horizontal(|ui| {
            ui.add(egui::Spinner::new());
            ui.label("Loading…");
        });
    } else {
        let title = view.page_title.as_deref().unwrap_or("(untitled)");
        ui.heading(title);
    }
    ui.add_space(4.0);
    ui.hyperlink_to(url.as_str(), url.as_str());
}
