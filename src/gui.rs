use crate::statics;
use crate::{Activity, Column, EditorSession, LoadedCatalog};
use eframe::egui;
use egui_extras::TableBuilder;
use std::path::{Path, PathBuf};

pub fn run_gui() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 720.0]),
        ..Default::default()
    };
    let title = format!("{} {}", statics::EN_APP_TITLE, env!("CARGO_PKG_VERSION"));
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| {
            // Startup load: a missing or unreadable backing file silently
            // yields an empty catalog with the path kept as the save target.
            let catalog = LoadedCatalog::load_or_empty(Path::new(statics::CAT_DEFAULT_FILE));
            Ok(Box::new(CmeApp {
                session: EditorSession::new(catalog),
                theme_dark: true,
                ..Default::default()
            }))
        }),
    )
}

/// The main application state and GUI logic.
/// Owns the editing session (backing store + filter + projected view) and
/// the surrounding UI state (dialogs, status line, cosmetic pager).
#[derive(Default)]
struct CmeApp {
    session: EditorSession,
    dialog_dir: Option<PathBuf>,

    // Cosmetic pagination over the projected view.
    page: usize,

    status: String,
    last_error: Option<String>,

    about_open: bool,
    theme_dark: bool,
}

impl CmeApp {
    fn file_dialog(&self) -> rfd::FileDialog {
        let mut dlg = rfd::FileDialog::new().add_filter("Catalog CSV", &["csv"]);

        if let Some(dir) = self.dialog_dir.clone() {
            dlg = dlg.set_directory(dir);
        }

        dlg
    }

    fn open_file(&mut self) {
        let Some(path) = self.file_dialog().pick_file() else {
            return;
        };

        match LoadedCatalog::load_path(&path) {
            Ok(catalog) => {
                self.dialog_dir = path.parent().map(PathBuf::from);
                self.status = format!("Loaded {}", path.display());
                self.session = EditorSession::new(catalog);
                self.page = 0;
                self.last_error = None;
            }
            Err(e) => {
                self.last_error = Some(format!("{} {e:#}", statics::EN_ERR_LOAD_PREFIX));
            }
        }
    }

    /// "Save Changes": overwrite the backing file in place. Falls back to
    /// Save As when the session has no source path yet.
    fn save_changes(&mut self) {
        match self.session.catalog.source_path.clone() {
            Some(path) => self.save_to(&path),
            None => self.save_file_as(),
        }
    }

    fn save_file_as(&mut self) {
        let mut dlg = self.file_dialog();
        let file_name = self
            .session
            .catalog
            .source_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| statics::CAT_DEFAULT_FILE.to_string());
        dlg = dlg.set_file_name(file_name);

        let Some(path) = dlg.save_file() else {
            return;
        };
        self.save_to(&path);
    }

    /// A save failure becomes a visible error line; the in-memory catalog is
    /// untouched and the session continues.
    fn save_to(&mut self, path: &Path) {
        if let Err(e) = self.session.catalog.save_to_path(path) {
            self.last_error = Some(format!("{} {e:#}", statics::EN_ERR_SAVE_PREFIX));
        } else {
            self.dialog_dir = path.parent().map(PathBuf::from);
            self.status = format!("{} ({})", statics::EN_STATUS_SAVED, path.display());
            self.last_error = None;
        }
    }

    fn activity_fill(activity: Activity) -> egui::Color32 {
        let (r, g, b) = match activity {
            Activity::Active => statics::COLOR_ACTIVE,
            Activity::NonActive => statics::COLOR_NON_ACTIVE,
        };
        egui::Color32::from_rgb(r, g, b)
    }

    fn render_filter_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(statics::EN_LABEL_FILTER_COLUMN);

            let mut filter_column = self.session.filter.column;
            egui::ComboBox::from_id_salt("filter_column")
                .selected_text(filter_column.header())
                .show_ui(ui, |ui| {
                    for column in Column::ALL {
                        ui.selectable_value(&mut filter_column, column, column.header());
                    }
                });
            if filter_column != self.session.filter.column {
                self.session.set_filter_column(filter_column);
                self.page = 0;
            }

            ui.label(statics::EN_LABEL_FILTER_VALUE);

            let options = self.session.filter_options(self.session.filter.column);
            let mut selected = self.session.filter.value.clone();
            let selected_text = selected
                .clone()
                .unwrap_or_else(|| statics::EN_FILTER_ALL.to_string());
            egui::ComboBox::from_id_salt("filter_value")
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut selected, None, statics::EN_FILTER_ALL);
                    for option in &options {
                        ui.selectable_value(&mut selected, Some(option.clone()), option);
                    }
                });
            if selected != self.session.filter.value {
                self.session.set_filter_value(selected);
                self.page = 0;
            }

            ui.separator();
            if ui.button(statics::EN_BTN_ADD_ROW).clicked() {
                self.session.add_row();
                // Jump to the last page so the new row is visible.
                let total = self.session.view.len();
                self.page = total.saturating_sub(1) / statics::GRID_PAGE_SIZE;
            }
        });
    }

    fn render_grid(&mut self, ui: &mut egui::Ui) {
        let total = self.session.view.len();
        let page_count = total.div_ceil(statics::GRID_PAGE_SIZE).max(1);
        self.page = self.page.min(page_count - 1);
        let start = self.page * statics::GRID_PAGE_SIZE;
        let end = (start + statics::GRID_PAGE_SIZE).min(total);

        let row_h = ui.text_style_height(&egui::TextStyle::Body) + 8.0;

        let mut changed_any = false;
        let mut toggle_row: Option<usize> = None;
        let mut delete_row: Option<usize> = None;

        ui.push_id("catalog_table", |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .columns(egui_extras::Column::remainder().resizable(true), 7)
                .column(egui_extras::Column::initial(70.0).resizable(false))
                .header(row_h, |mut header| {
                    for column in Column::ALL {
                        header.col(|ui| {
                            ui.strong(column.header());
                        });
                    }
                    header.col(|ui| {
                        ui.strong("");
                    });
                })
                .body(|mut body| {
                    for i in start..end {
                        body.row(row_h, |mut table_row| {
                            for column in Column::ALL {
                                table_row.col(|ui| {
                                    if column == Column::Activity {
                                        let activity = self.session.view[i].activity;
                                        let text = egui::RichText::new(activity.as_str())
                                            .color(egui::Color32::BLACK);
                                        let button = egui::Button::new(text)
                                            .fill(Self::activity_fill(activity));
                                        if ui.add(button).clicked() {
                                            toggle_row = Some(i);
                                        }
                                    } else if let Some(field) =
                                        self.session.view[i].field_mut(column)
                                    {
                                        let edit = egui::TextEdit::singleline(field)
                                            .desired_width(ui.available_width());
                                        if ui.add(edit).changed() {
                                            changed_any = true;
                                        }
                                    }
                                });
                            }
                            table_row.col(|ui| {
                                if ui.button(statics::EN_BTN_DELETE).clicked() {
                                    delete_row = Some(i);
                                }
                            });
                        });
                    }
                });
        });

        // One reconciliation pass per user action, after the grid releases
        // its borrow on the view.
        if changed_any {
            self.session.commit_view_edits();
        }
        if let Some(i) = toggle_row {
            self.session.toggle_activity(i);
        }
        if let Some(i) = delete_row {
            self.session.remove_view_row(i);
        }

        ui.separator();
        ui.horizontal(|ui| {
            if ui
                .add_enabled(self.page > 0, egui::Button::new(statics::EN_PAGE_PREV))
                .clicked()
            {
                self.page -= 1;
            }
            ui.label(format!(
                "{} {}/{}",
                statics::EN_LABEL_PAGE,
                self.page + 1,
                page_count
            ));
            if ui
                .add_enabled(
                    self.page + 1 < page_count,
                    egui::Button::new(statics::EN_PAGE_NEXT),
                )
                .clicked()
            {
                self.page += 1;
            }
        });
    }
}

impl eframe::App for CmeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                if ui.button(statics::EN_BTN_OPEN).clicked() {
                    self.open_file();
                }

                if ui.button(statics::EN_BTN_SAVE).clicked() {
                    self.save_changes();
                }

                if ui.button(statics::EN_BTN_SAVE_AS).clicked() {
                    self.save_file_as();
                }

                if ui.button(statics::EN_BTN_ABOUT).clicked() {
                    self.about_open = true;
                }

                if ui.button(statics::EN_BTN_TOGGLE_THEME).clicked() {
                    self.theme_dark = !self.theme_dark;
                    if self.theme_dark {
                        ctx.set_visuals(egui::Visuals::dark());
                    } else {
                        ctx.set_visuals(egui::Visuals::light());
                    }
                }

                if !self.status.is_empty() {
                    ui.separator();
                    ui.label(&self.status);
                }
            });
        });

        if self.about_open {
            let mut open = self.about_open;
            egui::Window::new(statics::EN_WINDOW_ABOUT)
                .collapsible(false)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.heading(statics::EN_ABOUT_HEADING);
                    ui.label(format!(
                        "{} {}",
                        statics::EN_ABOUT_VERSION,
                        env!("CARGO_PKG_VERSION")
                    ));
                    ui.separator();
                    ui.hyperlink_to(
                        format!("{} @ {}", statics::EN_PROJECT_REPO, statics::GITHUB_URL),
                        statics::GITHUB_URL,
                    );
                });
            self.about_open = open;
        }

        if let Some(err) = self.last_error.clone() {
            egui::TopBottomPanel::top("error_bar").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(egui::Color32::RED, err);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button(statics::EN_BTN_CLEAR).clicked() {
                            self.last_error = None;
                        }
                    });
                });
            });
        }

        // The bottom status bar must be shown before the central panel so it
        // reserves space across the full window width.
        egui::TopBottomPanel::bottom("bottom_status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let file_label = self
                    .session
                    .catalog
                    .source_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| statics::EN_PLACEHOLDER_UNSAVED.to_string());
                ui.label(file_label);
                ui.separator();
                ui.label(format!(
                    "{} {}",
                    statics::EN_LABEL_ROWS,
                    self.session.catalog.rows.len()
                ));
                ui.separator();
                ui.label(format!(
                    "{} {}",
                    statics::EN_LABEL_SHOWING,
                    self.session.view.len()
                ));
                if self.session.catalog.dirty {
                    ui.separator();
                    ui.colored_label(egui::Color32::YELLOW, statics::EN_BADGE_DIRTY);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.session.catalog.rows.is_empty() && !self.session.catalog.dirty {
                ui.heading(statics::EN_HOME_HEADING);
                ui.label(statics::EN_HOME_INSTRUCTIONS);
                ui.separator();
            }

            self.render_filter_bar(ui);
            ui.separator();
            self.render_grid(ui);
        });
    }
}
