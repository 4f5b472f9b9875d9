mod themes;

pub use themes::{Theme, GITHUB_DARK, GITHUB_LIGHT};

use egui::style;

/// Apply a [`Theme`] to every widget class of the given context.
pub fn set_theme(ctx: &egui::Context, theme: Theme) {
    let old = ctx.style().visuals.clone();
    ctx.set_visuals(theme_visuals(old, theme));
}

fn make_widget_visuals(
    old: style::WidgetVisuals,
    theme: &Theme,
    bg_fill: egui::Color32,
) -> style::WidgetVisuals {
    style::WidgetVisuals {
        bg_fill,
        weak_bg_fill: bg_fill,
        bg_stroke: egui::Stroke {
            color: theme.crust,
            ..old.bg_stroke
        },
        fg_stroke: egui::Stroke {
            color: theme.text,
            ..old.fg_stroke
        },
        ..old
    }
}

fn theme_visuals(old: egui::Visuals, theme: Theme) -> egui::Visuals {
    egui::Visuals {
        dark_mode: theme.dark,
        hyperlink_color: theme.accent,
        faint_bg_color: theme.surface,
        extreme_bg_color: theme.crust,
        code_bg_color: theme.mantle,
        warn_fg_color: theme.folder,
        error_fg_color: theme.danger,
        window_fill: theme.base,
        panel_fill: theme.base,
        window_stroke: egui::Stroke {
            color: theme.crust,
            ..old.window_stroke
        },
        widgets: style::Widgets {
            noninteractive: make_widget_visuals(old.widgets.noninteractive, &theme, theme.base),
            inactive: make_widget_visuals(old.widgets.inactive, &theme, theme.surface),
            hovered: make_widget_visuals(old.widgets.hovered, &theme, theme.crust),
            active: make_widget_visuals(old.widgets.active, &theme, theme.highlight),
            open: make_widget_visuals(old.widgets.open, &theme, theme.surface),
        },
        selection: style::Selection {
            bg_fill: theme.highlight,
            stroke: egui::Stroke {
                color: theme.accent,
                ..old.selection.stroke
            },
        },
        ..old
    }
}
