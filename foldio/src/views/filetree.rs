use egui::{Color32, RichText, Sense};
use egui_material_icons::icons::{
    ICON_DELETE, ICON_DESCRIPTION, ICON_DRAG_INDICATOR, ICON_FOLDER, ICON_KEYBOARD_ARROW_DOWN,
    ICON_KEYBOARD_ARROW_RIGHT,
};
use std::collections::{HashMap, HashSet};

use crate::models::entry::Entry;
use crate::models::tree::TreeState;
use crate::models::ui::UIEvent;

const INDENT_STEP: f32 = 16.0;
const CARET_SLOT: f32 = 20.0;

/// Indices carried across the frames of one drag gesture. `source` is set
/// when a handle starts being dragged, `hover` follows the row under the
/// pointer. Both refer to positions in the flattened list as rendered, and
/// both are cleared unconditionally when the gesture ends or aborts so a
/// later drag can never reuse a stale index.
#[derive(Debug, Clone, Copy, Default)]
struct DragState {
    source: Option<usize>,
    hover: Option<usize>,
}

impl DragState {
    fn clear(&mut self) {
        self.source = None;
        self.hover = None;
    }
}

pub struct FileTree {
    drag: DragState,
}

impl FileTree {
    pub fn new() -> Self {
        FileTree {
            drag: DragState::default(),
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, tree: &TreeState, events: &mut Vec<UIEvent>) {
        // A drag can abort without its stop event reaching us, e.g. when the
        // source row disappears mid-gesture. No pointer down means no drag.
        if self.drag.source.is_some() && !ui.ctx().input(|i| i.pointer.any_down()) {
            self.drag.clear();
        }

        let depths = tree.depths();
        let parents = tree.parent_keys();

        ui.add_space(12.0);
        ui.heading("Folders");
        ui.separator();
        ui.add_space(4.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                for (index, entry) in tree.entries().iter().enumerate() {
                    if !entry.is_visible() {
                        continue;
                    }
                    self.row(ui, index, entry, tree, &depths, &parents, events);
                }
            });
    }

    fn row(
        &mut self,
        ui: &mut egui::Ui,
        index: usize,
        entry: &Entry,
        tree: &TreeState,
        depths: &HashMap<String, usize>,
        parents: &HashSet<String>,
        events: &mut Vec<UIEvent>,
    ) {
        let palette = if ui.visuals().dark_mode {
            theme::GITHUB_DARK
        } else {
            theme::GITHUB_LIGHT
        };
        let allowed = entry.allows(tree.role());

        let fill = if entry.active {
            palette.highlight
        } else if self.drag.source.is_some() && self.drag.hover == Some(index) {
            palette.surface
        } else {
            Color32::TRANSPARENT
        };

        let row = egui::Frame::new()
            .fill(fill)
            .inner_margin(egui::Margin::symmetric(4, 2))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let handle = ui
                        .add_enabled(
                            allowed,
                            egui::Button::new(RichText::new(ICON_DRAG_INDICATOR))
                                .frame(false)
                                .sense(Sense::drag()),
                        )
                        .on_hover_cursor(egui::CursorIcon::Grab);
                    if handle.drag_started() {
                        self.drag.source = Some(index);
                    }
                    if handle.drag_stopped() {
                        if let (Some(from), Some(to)) = (self.drag.source, self.drag.hover) {
                            if from != to {
                                events.push(UIEvent::Reorder {
                                    from,
                                    to,
                                    key: entry.key.clone(),
                                });
                            }
                        }
                        self.drag.clear();
                    }

                    // Search hits are listed flat, everything else indents
                    // by its structural depth.
                    if !entry.search {
                        let depth = depths.get(&entry.key).copied().unwrap_or(0);
                        ui.add_space(depth as f32 * INDENT_STEP);
                    }

                    let caret = entry.is_folder()
                        && parents.contains(&entry.key)
                        && !tree.searching()
                        && allowed;
                    if caret {
                        let icon = if entry.open {
                            ICON_KEYBOARD_ARROW_DOWN
                        } else {
                            ICON_KEYBOARD_ARROW_RIGHT
                        };
                        if ui
                            .add(egui::Button::new(RichText::new(icon)).frame(false))
                            .clicked()
                        {
                            events.push(UIEvent::ToggleOpen(entry.key.clone()));
                        }
                    } else {
                        ui.add_space(CARET_SLOT);
                    }

                    let (icon, icon_color) = if entry.is_folder() {
                        (ICON_FOLDER, palette.folder)
                    } else {
                        (ICON_DESCRIPTION, palette.file)
                    };
                    ui.label(RichText::new(icon).color(icon_color));

                    let name_color = if allowed { palette.text } else { palette.subtext };
                    ui.label(RichText::new(&entry.name).color(name_color));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let delete_color = if allowed { palette.danger } else { palette.subtext };
                        if ui
                            .add_enabled(
                                allowed,
                                egui::Button::new(
                                    RichText::new(ICON_DELETE).color(delete_color),
                                )
                                .frame(false),
                            )
                            .clicked()
                        {
                            events.push(UIEvent::Delete(entry.key.clone()));
                        }
                    });
                });
            });

        if self.drag.source.is_some()
            && self.drag.source != Some(index)
            && ui.rect_contains_pointer(row.response.rect)
        {
            self.drag.hover = Some(index);
        }
    }
}
