use bevy::log::error;
use bevy_egui::egui;

use super::options::{HighlightedSelectSettings, format, sanitize};

/// Result of drawing a [`HighlightedSelect`].
pub struct SelectResponse<T> {
    /// Response of the whole row frame.
    pub response: egui::Response,
    /// The row was clicked outside the dropdown. Dropdown clicks never set this.
    pub row_clicked: bool,
    /// Value picked from the dropdown this frame.
    pub updated: Option<T>,
}

/// Row fill and stroke; depends on nothing but the highlight flag.
fn row_style(visuals: &egui::Visuals, highlight: bool) -> (egui::Color32, egui::Stroke) {
    if highlight {
        (
            visuals.widgets.inactive.weak_bg_fill,
            egui::Stroke::new(1.0, visuals.selection.stroke.color),
        )
    } else {
        (egui::Color32::TRANSPARENT, egui::Stroke::NONE)
    }
}

/// Value behind a dropdown move from `current` to `picked`, if it moved.
fn picked_value<T>(settings: &HighlightedSelectSettings<T>, current: usize, picked: usize) -> Option<T>
where
    T: Clone + PartialEq + std::fmt::Display,
{
    if picked == current {
        return None;
    }
    let next = settings.values.get(picked).cloned()?;
    match sanitize(next, settings) {
        Ok(next) => Some(next),
        Err(err) => {
            error!("{err}");
            None
        }
    }
}

/// A labelled dropdown whose frame lights up while `settings.highlight` is set.
///
/// The dropdown is bound to an index into `settings.values`, so values need
/// not be strings. Highlight state is read from the settings every frame and
/// never stored by the widget.
pub struct HighlightedSelect<'a, T> {
    id_salt: egui::Id,
    label: &'a str,
    value: &'a T,
    settings: &'a HighlightedSelectSettings<T>,
    disabled: bool,
}

impl<'a, T> HighlightedSelect<'a, T>
where
    T: Clone + PartialEq + std::fmt::Display,
{
    /// Creates a selector showing `value` among `settings`.
    pub fn new(
        id_salt: impl std::hash::Hash,
        label: &'a str,
        value: &'a T,
        settings: &'a HighlightedSelectSettings<T>,
    ) -> Self {
        Self {
            id_salt: egui::Id::new(id_salt),
            label,
            value,
            settings,
            disabled: false,
        }
    }

    /// Greys the control out and ignores input.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Draws the row and reports clicks and picks.
    ///
    /// The whole framed row senses clicks; the dropdown sits on top of it, so
    /// dropdown interaction never reaches the row.
    pub fn show(self, ui: &mut egui::Ui) -> SelectResponse<T> {
        let Self {
            id_salt,
            label,
            value,
            settings,
            disabled,
        } = self;

        let accent = ui.visuals().selection.stroke.color;
        let (row_fill, row_stroke) = row_style(ui.visuals(), settings.highlight);

        let current = format(value, settings);
        let mut index = current;

        let row = ui
            .add_enabled_ui(!disabled, |ui| {
                ui.scope_builder(
                    egui::UiBuilder::new()
                        .id_salt(id_salt.with("row"))
                        .sense(egui::Sense::click()),
                    |ui| {
                        egui::Frame::new()
                            .inner_margin(egui::Margin::same(6))
                            .corner_radius(egui::CornerRadius::same(6))
                            .fill(row_fill)
                            .stroke(row_stroke)
                            .show(ui, |ui| {
                                ui.horizontal(|ui| {
                                    ui.add(egui::Label::new(label).selectable(false));
                                    ui.with_layout(
                                        egui::Layout::right_to_left(egui::Align::Center),
                                        |ui| {
                                            if settings.highlight {
                                                let widgets = &mut ui.visuals_mut().widgets;
                                                widgets.inactive.bg_stroke =
                                                    egui::Stroke::new(1.0, accent);
                                                widgets.hovered.bg_stroke =
                                                    egui::Stroke::new(1.0, accent);
                                            }
                                            let keys = &settings.keys;
                                            egui::ComboBox::from_id_salt(id_salt)
                                                .width(120.0)
                                                .show_index(ui, &mut index, keys.len(), |i| {
                                                    keys.get(i).map(String::as_str).unwrap_or_default()
                                                });
                                        },
                                    );
                                });
                            });
                    },
                )
                .response
            })
            .inner;

        let row_clicked = row.clicked();
        let updated = picked_value(settings, current, index);

        SelectResponse {
            response: row,
            row_clicked,
            updated,
        }
    }
}
