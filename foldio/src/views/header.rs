use egui::RichText;
use egui_flex::{Flex, FlexAlignContent, FlexItem};
use egui_material_icons::icons::{ICON_DARK_MODE, ICON_LIGHT_MODE};

use crate::models::entry::Role;
use crate::models::tree::TreeState;
use crate::models::ui::UIEvent;

/// The control strip above the tree: search box, role selector, reset and
/// the theme toggle. Owns the search text; the engine only ever sees the
/// term to filter by.
pub struct Header {
    query: String,
}

impl Header {
    pub fn new() -> Self {
        Header {
            query: String::new(),
        }
    }

    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        tree: &TreeState,
        dark_mode: &mut bool,
        events: &mut Vec<UIEvent>,
    ) {
        Flex::horizontal()
            .align_content(FlexAlignContent::Stretch)
            .show(ui, |flex| {
                flex.add_ui(FlexItem::new().grow(1.0), |ui| {
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.query)
                            .hint_text("Search folders and files")
                            .desired_width(f32::INFINITY),
                    );
                    if response.changed() {
                        events.push(UIEvent::Search(self.query.clone()));
                    }
                });

                flex.add_ui(FlexItem::new(), |ui| {
                    let mut selected = tree.role();
                    egui::ComboBox::from_id_salt("role_select")
                        .selected_text(selected.label())
                        .show_ui(ui, |ui| {
                            for role in Role::ALL {
                                if ui
                                    .selectable_value(&mut selected, role, role.label())
                                    .changed()
                                {
                                    // Switching the permission context drops
                                    // any active search, box included.
                                    self.query.clear();
                                    events.push(UIEvent::SetRole(role));
                                }
                            }
                        });
                });

                flex.add_ui(FlexItem::new(), |ui| {
                    if ui.button("Reset").clicked() {
                        self.query.clear();
                        events.push(UIEvent::Reset);
                    }
                });

                flex.add_ui(FlexItem::new(), |ui| {
                    let icon = if *dark_mode {
                        ICON_LIGHT_MODE
                    } else {
                        ICON_DARK_MODE
                    };
                    if ui.button(RichText::new(icon)).clicked() {
                        *dark_mode = !*dark_mode;
                    }
                });
            });
    }
}
