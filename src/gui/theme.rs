use eframe::egui::{
    self,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    RichText,
    Stroke,
    Visuals,
};

use crate::core::StatusKind;

#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dracula()
    }
}

impl Theme {
    pub fn dracula() -> Self {
        Theme { dark: ThemeDetails::dracula(), light: ThemeDetails::dracula_light() }
    }

    fn details(&self, dark_mode: bool) -> &ThemeDetails {
        if dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn heading(&self, ui: &egui::Ui, content: &str) -> RichText {
        RichText::new(content).color(self.details(ui.visuals().dark_mode).purple)
    }

    pub fn status_color(&self, ui: &egui::Ui, kind: StatusKind) -> Color32 {
        let details = self.details(ui.visuals().dark_mode);
        match kind {
            StatusKind::Neutral => ui.visuals().text_color(),
            StatusKind::Success => details.green,
            StatusKind::Error => details.red,
        }
    }
}

#[derive(Clone)]
struct ThemeDetails {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    red: Color32,
    orange: Color32,
    green: Color32,
    purple: Color32,
    cyan: Color32,
    background_darker: Color32,
    background_dark: Color32,
    background_light: Color32,
    background_lighter: Color32,
}

impl ThemeDetails {
    //Colors from:
    //https://github.com/ShabbirHasan1/egui_dracula/blob/master/src/lib.rs
    fn dracula() -> Self {
        Self {
            background: Color32::from_rgb(0x28, 0x2a, 0x36),
            foreground: Color32::from_rgb(0xf8, 0xf8, 0xf2),
            selection: Color32::from_rgb(0x44, 0x47, 0x5a),
            red: Color32::from_rgb(0xff, 0x55, 0x55),
            orange: Color32::from_rgb(0xff, 0xb8, 0x6c),
            green: Color32::from_rgb(0x50, 0xfa, 0x7b),
            purple: Color32::from_rgb(189, 147, 249),
            cyan: Color32::from_rgb(139, 233, 253),
            background_darker: Color32::from_rgb(25, 26, 33),
            background_dark: Color32::from_rgb(33, 35, 53),
            background_light: Color32::from_rgb(52, 54, 66),
            background_lighter: Color32::from_rgb(66, 69, 80),
        }
    }

    fn dracula_light() -> Self {
        Self {
            background: Color32::from_rgb(248, 248, 242),
            foreground: Color32::from_rgb(40, 42, 54),
            selection: Color32::from_rgb(200, 200, 220),
            red: Color32::from_rgb(200, 80, 80),
            orange: Color32::from_rgb(220, 150, 90),
            green: Color32::from_rgb(40, 150, 80),
            purple: Color32::from_rgb(150, 120, 220),
            cyan: Color32::from_rgb(80, 190, 230),
            background_darker: Color32::from_rgb(235, 235, 230),
            background_dark: Color32::from_rgb(245, 245, 240),
            background_light: Color32::from_rgb(255, 255, 250),
            background_lighter: Color32::from_rgb(255, 255, 255),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn widget_visuals(
    base: WidgetVisuals,
    bg_fill: Color32,
    border: Color32,
    theme: &ThemeDetails,
) -> WidgetVisuals {
    WidgetVisuals {
        bg_fill,
        weak_bg_fill: theme.background_lighter,
        bg_stroke: Stroke { color: border, ..base.bg_stroke },
        fg_stroke: Stroke { color: theme.foreground, ..base.fg_stroke },
        ..base
    }
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: widget_visuals(
                    default.widgets.noninteractive,
                    theme.background,
                    theme.background_dark,
                    theme,
                ),
                inactive: widget_visuals(
                    default.widgets.inactive,
                    theme.background_light,
                    theme.background_dark,
                    theme,
                ),
                hovered: widget_visuals(
                    default.widgets.hovered,
                    theme.selection,
                    theme.cyan,
                    theme,
                ),
                active: widget_visuals(default.widgets.active, theme.selection, theme.cyan, theme),
                open: widget_visuals(
                    default.widgets.open,
                    theme.background_dark,
                    theme.purple,
                    theme,
                ),
            },
            selection: Selection {
                bg_fill: theme.selection,
                stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
            },
            hyperlink_color: theme.cyan,
            faint_bg_color: match is_dark {
                true => theme.background_darker,
                false => theme.background_light,
            },
            extreme_bg_color: theme.background_darker,
            error_fg_color: theme.red,
            warn_fg_color: theme.orange,
            window_fill: theme.background,
            panel_fill: theme.background_dark,
            ..default
        },
    );
}
