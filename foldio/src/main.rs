#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use egui_notify::Toasts;
use theme::{set_theme, GITHUB_DARK, GITHUB_LIGHT};

use foldio::models::notification::Notification;
use foldio::models::tree::TreeState;
use foldio::models::ui::UIEvent;
use foldio::views::filetree::FileTree;
use foldio::views::header::Header;

pub struct Foldio {
    tree: TreeState,
    header: Header,
    filetree: FileTree,
    notification: Toasts,
    dark_mode: bool,
}

impl Default for Foldio {
    fn default() -> Self {
        Foldio {
            tree: TreeState::new(foldio::seed_entries()),
            header: Header::new(),
            filetree: FileTree::new(),
            notification: Toasts::default(),
            dark_mode: true,
        }
    }
}

impl eframe::App for Foldio {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        set_theme(ctx, if self.dark_mode { GITHUB_DARK } else { GITHUB_LIGHT });

        let mut events = Vec::new();

        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::new().inner_margin(8.0))
            .show(ctx, |ui| {
                self.header.ui(ui, &self.tree, &mut self.dark_mode, &mut events);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.filetree.ui(ui, &self.tree, &mut events);
        });

        for event in events {
            self.apply(event);
        }

        self.notification.show(ctx);
    }
}

impl Foldio {
    fn apply(&mut self, event: UIEvent) {
        log::debug!("ui event: {:?}", event);
        match event {
            UIEvent::ToggleOpen(key) => self.tree.toggle_open(&key),
            UIEvent::Delete(key) => {
                if let Some(entry) = self.tree.entries().iter().find(|el| el.key == key) {
                    Notification::Success(format!("Deleted {}", entry.name))
                        .create_toast(&mut self.notification);
                }
                self.tree.delete(&key);
            }
            UIEvent::Reorder { from, to, key } => self.tree.reorder(from, to, &key),
            UIEvent::Search(term) => self.tree.search(&term),
            UIEvent::SetRole(role) => self.tree.set_role(role),
            UIEvent::Reset => {
                self.tree.reset();
                Notification::Info("Folders restored".to_string())
                    .create_toast(&mut self.notification);
            }
        }
    }
}

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting Foldio...");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([520.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Foldio",
        options,
        Box::new(|cc| {
            egui_material_icons::initialize(&cc.egui_ctx);
            Ok(Box::<Foldio>::default())
        }),
    )
}
