use crate::action::Action;
use crate::config::Config;
use crate::entry::DirectoryEntry;
use crate::error::FsError;
use crate::io;
use crate::state::{AppMode, ModeState, NavigationState, UIState};
use crate::style::{self, Theme};
use eframe::egui;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

pub struct Tansu {
    pub navigation: NavigationState,
    pub mode: ModeState,
    pub ui: UIState,
}

impl Tansu {
    pub fn new(config: &Config) -> Self {
        let mut app = Self {
            navigation: NavigationState::new(config.start_path()),
            mode: ModeState::new(),
            ui: UIState::new(Theme::from_name(&config.theme.mode)),
        };
        tracing::info!(path = %app.navigation.current_path.display(), "starting file manager");
        app.dispatch(Action::Refresh);
        app
    }

    /// Run one action to completion. Failures end up in the status bar,
    /// never as a panic.
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(?action, "dispatch");
        let result = match action {
            Action::OpenFolder(path) => self.open_folder(&path),
            Action::Up => self.go_up(),
            Action::Refresh => self.refresh(),
            Action::Select(index) => {
                self.navigation.select(index);
                Ok(())
            }
            Action::SelectDelta(delta) => {
                self.navigation.select_delta(delta);
                Ok(())
            }
            Action::Activate(index) => self.activate(index),
            Action::RequestDelete => {
                if self.require_selection().is_some() {
                    self.mode.set_mode(AppMode::DeleteConfirm);
                }
                Ok(())
            }
            Action::ConfirmDelete => self.perform_delete(),
            Action::RequestRename => {
                if let Some(entry) = self.require_selection() {
                    self.mode.begin_rename(&entry.name);
                }
                Ok(())
            }
            Action::Rename(new_name) => self.perform_rename(&new_name),
            Action::Copy(dest) => self.perform_copy(&dest),
            Action::Move(dest) => self.perform_move(&dest),
            Action::Search(query) => self.search(&query),
            Action::CancelPrompt => {
                self.mode.reset();
                Ok(())
            }
        };

        if let Err(err) = result {
            self.report_error(err);
        }
    }

    /// The selected entry, or an info notice when nothing is selected.
    pub(crate) fn require_selection(&mut self) -> Option<DirectoryEntry> {
        let entry = self.navigation.selected_entry().cloned();
        if entry.is_none() {
            self.ui.set_info("No entry selected".to_string());
        }
        entry
    }

    fn report_error(&mut self, err: FsError) {
        tracing::warn!(error = %err, "operation failed");
        let message = if err.is_permission_denied() {
            "Permission Denied".to_string()
        } else {
            format!("Operation failed: {}", err)
        };
        self.ui.set_error(message);
    }

    fn refresh(&mut self) -> Result<(), FsError> {
        self.ui.search_query.clear();
        self.navigation.refresh()
    }

    fn open_folder(&mut self, path: &Path) -> Result<(), FsError> {
        if path.as_os_str().is_empty() {
            return Ok(());
        }
        self.ui.search_query.clear();
        self.navigation.enter(path)
    }

    fn go_up(&mut self) -> Result<(), FsError> {
        self.ui.search_query.clear();
        if !self.navigation.up()? {
            self.ui.set_info("Already at the filesystem root".to_string());
        }
        Ok(())
    }

    fn activate(&mut self, index: usize) -> Result<(), FsError> {
        if !self.navigation.select(index) {
            return Ok(());
        }
        let Some(entry) = self.navigation.selected_entry().cloned() else {
            return Ok(());
        };
        if io::is_directory(&entry.path) {
            self.ui.search_query.clear();
            self.navigation.enter(&entry.path)
        } else {
            io::open_in_system(&entry.path)
        }
    }

    fn perform_delete(&mut self) -> Result<(), FsError> {
        self.mode.reset();
        let Some(entry) = self.require_selection() else {
            return Ok(());
        };
        io::remove_entry(&entry.path, entry.is_dir)?;
        self.ui.set_info(format!("Deleted {}", entry.name));
        self.refresh()
    }

    fn perform_rename(&mut self, new_name: &str) -> Result<(), FsError> {
        self.mode.reset();
        if new_name.is_empty() {
            return Ok(());
        }
        let Some(entry) = self.require_selection() else {
            return Ok(());
        };
        if new_name == entry.name {
            return Ok(());
        }
        validate_name(new_name)?;

        let new_path = self.navigation.current_path.join(new_name);
        io::rename_entry(&entry.path, &new_path)?;
        self.ui.set_info(format!("Renamed {} to {}", entry.name, new_name));
        self.refresh()
    }

    fn perform_copy(&mut self, dest_dir: &Path) -> Result<(), FsError> {
        if dest_dir.as_os_str().is_empty() {
            return Ok(());
        }
        let Some(entry) = self.require_selection() else {
            return Ok(());
        };
        let copied = io::copy_entry(&entry.path, dest_dir, entry.is_dir)?;
        self.ui.set_info(format!("Copied to {}", copied.display()));
        self.refresh()
    }

    fn perform_move(&mut self, dest_dir: &Path) -> Result<(), FsError> {
        if dest_dir.as_os_str().is_empty() {
            return Ok(());
        }
        let Some(entry) = self.require_selection() else {
            return Ok(());
        };
        let moved = io::move_entry(&entry.path, dest_dir)?;
        self.ui.set_info(format!("Moved to {}", moved.display()));
        self.refresh()
    }

    fn search(&mut self, query: &str) -> Result<(), FsError> {
        self.navigation.search(query)?;
        self.ui
            .set_info(format!("{} match(es) for \"{}\"", self.navigation.entries.len(), query));
        Ok(())
    }

    /// Folder picker rooted at the current directory. `None` when cancelled.
    pub(crate) fn pick_folder(&self, title: &str) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_directory(&self.navigation.current_path)
            .set_title(title)
            .pick_folder()
    }
}

/// A new name must be exactly one normal path component.
fn validate_name(name: &str) -> Result<(), FsError> {
    let mut components = Path::new(name).components();
    let single = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !single || name.contains(['/', '\\']) {
        return Err(FsError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

impl eframe::App for Tansu {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui.clear_expired_messages(style::MESSAGE_TIMEOUT_SECS);

        // Deferred actions, applied after rendering
        let mut actions = Vec::new();
        self.handle_input(ctx, &mut actions);

        self.render_top_bar(ctx, &mut actions);
        self.render_status_bar(ctx);
        self.render_button_column(ctx, &mut actions);
        self.render_entry_list(ctx, &mut actions);
        self.render_rename_modal(ctx, &mut actions);
        self.render_delete_modal(ctx, &mut actions);

        for action in actions {
            self.dispatch(action);
        }

        if self.ui.error_message.is_some() || self.ui.info_message.is_some() {
            ctx.request_repaint_after(Duration::from_secs(1));
        }
    }
}
