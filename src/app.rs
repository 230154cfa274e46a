use std::time::Instant;

use anyhow::Result;
use ratatui::style::{Color, Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

use crate::models::{Task, task::timestamp_now};
use crate::store::{StoreError, TaskStore};

/// Rows the entry form occupies when fully open.
pub const FORM_OPEN_HEIGHT: u16 = 7;
/// Rows the slide animation moves per tick.
const FORM_ANIM_STEP: u16 = 2;

/// Debug log helper. Appends to a fixed file so the alternate screen stays
/// clean.
pub fn log_debug(msg: String) {
    use std::fs::OpenOptions;
    use std::io::Write;

    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/tudu_debug.log")
    {
        let _ = writeln!(
            file,
            "[{}] {}",
            chrono::Local::now().format("%H:%M:%S"),
            msg
        );
    }
}

/// Notification level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Transient notification message
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub created_at: Instant,
}

impl Notification {
    /// Expired notifications disappear after 3 seconds.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed().as_secs() >= 3
    }
}

/// What a form submission does. The entry form is a single widget; this
/// enumeration, not any callback rebinding, decides whether submit creates a
/// task or updates one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// Form collapsed, no pending action.
    Closed,
    /// Form expanded with an empty field; submit inserts.
    Create,
    /// Form expanded pre-filled; submit rewrites the task with this id.
    Edit { id: i64 },
}

/// Application state
pub struct App {
    /// Task store handle, owned for the process lifetime.
    store: TaskStore,
    /// Render copy of the task list, in store order.
    pub tasks: Vec<Task>,
    /// Index of the selected row.
    pub selected: usize,
    /// Entry form state machine.
    pub form: FormState,
    /// Entry form input field.
    pub input: TextArea<'static>,
    /// Current height of the form region; animates toward the target.
    pub form_height: u16,
    /// Transient notification
    pub notification: Option<Notification>,
}

impl App {
    /// Load all tasks from the store and start with the form closed.
    pub fn new(store: TaskStore) -> Result<Self> {
        let tasks = store.all()?;

        log_debug(format!("app start: {} tasks loaded", tasks.len()));

        Ok(Self {
            store,
            tasks,
            selected: 0,
            form: FormState::Closed,
            input: new_input(""),
            form_height: 0,
            notification: None,
        })
    }

    /// Dispatch a key event. Returns false when the app should quit.
    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) -> bool {
        crate::input::handle_key_input(self, key)
    }

    /// Toggle the form between closed and open-for-create. Leaving create
    /// mode clears the field.
    pub fn toggle_form(&mut self) {
        match self.form {
            FormState::Closed => {
                self.form = FormState::Create;
                self.input = new_input("");
            }
            _ => self.close_form(),
        }
    }

    /// Force the form into edit mode for the selected row, whatever state it
    /// was in, pre-filling the field with the row's current text.
    pub fn open_edit(&mut self) {
        if let Some(task) = self.tasks.get(self.selected) {
            self.form = FormState::Edit { id: task.id };
            self.input = new_input(&task.text);
        }
    }

    /// Collapse the form and clear the field. No store call.
    pub fn close_form(&mut self) {
        self.form = FormState::Closed;
        self.input = new_input("");
    }

    /// Submit the form. Blank text is rejected in both create and edit mode;
    /// the form stays open so the user can fix it.
    pub fn submit(&mut self) -> Result<(), StoreError> {
        let text = self.input.lines().join(" ").trim().to_string();

        if text.is_empty() {
            self.show_notification(
                "Task text cannot be empty".to_string(),
                NotificationLevel::Warning,
            );
            return Ok(());
        }

        match self.form {
            FormState::Closed => {}
            FormState::Create => {
                let task = self.store.insert(&text, &timestamp_now())?;
                self.tasks.push(task);
                self.selected = self.tasks.len() - 1;
                self.close_form();
                self.show_notification("Task added".to_string(), NotificationLevel::Success);
            }
            FormState::Edit { id } => {
                let date = timestamp_now();
                if self.store.update(id, &text, &date)? {
                    if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
                        task.text = text;
                        task.date = date;
                    }
                    self.show_notification(
                        "Task updated".to_string(),
                        NotificationLevel::Success,
                    );
                } else {
                    // Row vanished underneath us; drop it from the view too.
                    self.tasks.retain(|t| t.id != id);
                    self.clamp_selection();
                    self.show_notification(
                        "Task no longer exists".to_string(),
                        NotificationLevel::Error,
                    );
                }
                self.close_form();
            }
        }

        Ok(())
    }

    /// Delete the selected task. No confirmation step.
    pub fn delete_selected(&mut self) -> Result<(), StoreError> {
        if self.tasks.is_empty() {
            return Ok(());
        }

        let id = self.tasks[self.selected].id;
        self.store.delete(id)?;
        self.tasks.remove(self.selected);
        self.clamp_selection();
        self.show_notification("Task deleted".to_string(), NotificationLevel::Info);

        Ok(())
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.tasks.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.tasks.len().saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.tasks.len() {
            self.selected = self.tasks.len().saturating_sub(1);
        }
    }

    /// Height the form region is sliding toward.
    pub fn form_target_height(&self) -> u16 {
        match self.form {
            FormState::Closed => 0,
            _ => FORM_OPEN_HEIGHT,
        }
    }

    /// Whether the slide animation has frames left to render.
    pub fn is_animating(&self) -> bool {
        self.form_height != self.form_target_height()
    }

    /// Advance time-driven state: slide the form one step toward its target
    /// and drop expired notifications. Called once per poll tick.
    pub fn tick(&mut self) {
        let target = self.form_target_height();
        if self.form_height < target {
            self.form_height = (self.form_height + FORM_ANIM_STEP).min(target);
        } else if self.form_height > target {
            self.form_height = self.form_height.saturating_sub(FORM_ANIM_STEP);
        }

        self.clear_expired_notification();
    }

    /// Show a transient notification.
    pub fn show_notification(&mut self, message: String, level: NotificationLevel) {
        self.notification = Some(Notification {
            message,
            level,
            created_at: Instant::now(),
        });
    }

    /// Drop the notification once it has expired.
    pub fn clear_expired_notification(&mut self) {
        if let Some(ref notification) = self.notification {
            if notification.is_expired() {
                self.notification = None;
            }
        }
    }

    /// Release the store connection at shutdown.
    pub fn close(self) -> Result<(), StoreError> {
        self.store.close()
    }
}

/// Build the entry field: single-line, placeholder hint, block cursor.
fn new_input(initial: &str) -> TextArea<'static> {
    let mut textarea = if initial.is_empty() {
        TextArea::default()
    } else {
        TextArea::from([initial.to_string()])
    };

    textarea.set_placeholder_text("Write a new task...");
    textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));
    textarea.set_cursor_style(
        Style::default()
            .bg(Color::Cyan)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    );
    // No current-line highlight; the field is one line tall.
    textarea.set_cursor_line_style(Style::default());
    textarea.move_cursor(CursorMove::End);

    textarea
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    fn test_app() -> (TempDir, App) {
        let dir = TempDir::new().unwrap();
        let store = TaskStore::open(dir.path().join("test.db")).unwrap();
        let app = App::new(store).unwrap();
        (dir, app)
    }

    fn test_app_with(rows: &[(&str, &str)]) -> (TempDir, App) {
        let dir = TempDir::new().unwrap();
        let store = TaskStore::open(dir.path().join("test.db")).unwrap();
        for (text, date) in rows {
            store.insert(text, date).unwrap();
        }
        let app = App::new(store).unwrap();
        (dir, app)
    }

    fn type_text(app: &mut App, text: &str) {
        app.input.insert_str(text);
    }

    fn clear_input(app: &mut App) {
        app.input.select_all();
        app.input.cut();
    }

    #[test]
    fn test_startup_loads_store_order() {
        let (_dir, app) = test_app_with(&[("A", "d1"), ("B", "d2")]);
        let texts: Vec<_> = app.tasks.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["A", "B"]);
    }

    #[test]
    fn test_toggle_opens_and_closes_create() {
        let (_dir, mut app) = test_app();

        app.toggle_form();
        assert_eq!(app.form, FormState::Create);

        type_text(&mut app, "half finished");
        app.toggle_form();
        assert_eq!(app.form, FormState::Closed);
        // Leaving create mode clears the field.
        assert_eq!(app.input.lines().join(""), "");
    }

    #[test]
    fn test_open_edit_prefills_field() {
        let (_dir, mut app) = test_app_with(&[("Buy milk", "01/01/2025 10:00")]);

        app.open_edit();
        assert_eq!(app.form, FormState::Edit { id: app.tasks[0].id });
        assert_eq!(app.input.lines().join(""), "Buy milk");
    }

    #[test]
    fn test_edit_wins_over_create() {
        let (_dir, mut app) = test_app_with(&[("existing", "d")]);

        // Edit forces its state regardless of an already-open create form.
        app.toggle_form();
        type_text(&mut app, "in progress");
        app.open_edit();

        assert_eq!(app.form, FormState::Edit { id: app.tasks[0].id });
        assert_eq!(app.input.lines().join(""), "existing");
    }

    #[test]
    fn test_empty_create_submit_is_rejected() {
        let (_dir, mut app) = test_app();

        app.toggle_form();
        app.submit().unwrap();

        assert!(app.tasks.is_empty());
        // State unchanged: the form stays open for another try.
        assert_eq!(app.form, FormState::Create);
        assert!(matches!(
            app.notification.as_ref().map(|n| n.level),
            Some(NotificationLevel::Warning)
        ));
    }

    #[test]
    fn test_whitespace_only_submit_is_rejected() {
        let (_dir, mut app) = test_app();

        app.toggle_form();
        type_text(&mut app, "   ");
        app.submit().unwrap();

        assert!(app.tasks.is_empty());
        assert_eq!(app.form, FormState::Create);
    }

    #[test]
    fn test_create_submit_appends_and_closes() {
        let (_dir, mut app) = test_app();

        app.toggle_form();
        type_text(&mut app, "Buy milk");
        app.submit().unwrap();

        assert_eq!(app.form, FormState::Closed);
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].text, "Buy milk");
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_edit_submit_updates_row_in_place() {
        let (_dir, mut app) = test_app_with(&[("A", "01/01/2025 10:00"), ("B", "d2")]);
        let id = app.tasks[0].id;

        app.open_edit();
        clear_input(&mut app);
        type_text(&mut app, "A2");
        app.submit().unwrap();

        assert_eq!(app.form, FormState::Closed);
        assert_eq!(app.tasks[0].id, id);
        assert_eq!(app.tasks[0].text, "A2");
        // Timestamp refreshed along with the text.
        assert_ne!(app.tasks[0].date, "01/01/2025 10:00");
        assert_eq!(app.tasks[1].text, "B");
    }

    #[test]
    fn test_blank_edit_submit_is_rejected() {
        let (_dir, mut app) = test_app_with(&[("keep me", "01/01/2025 10:00")]);

        app.open_edit();
        clear_input(&mut app);
        app.submit().unwrap();

        // Same policy as create: no silent timestamp-only refresh.
        assert!(matches!(app.form, FormState::Edit { .. }));
        assert_eq!(app.tasks[0].text, "keep me");
        assert_eq!(app.tasks[0].date, "01/01/2025 10:00");
    }

    #[test]
    fn test_delete_selected_removes_row() {
        let (_dir, mut app) = test_app_with(&[("A", "d1"), ("B", "d2"), ("C", "d3")]);

        app.selected = 1;
        app.delete_selected().unwrap();

        let texts: Vec<_> = app.tasks.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["A", "C"]);
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn test_delete_last_row_clamps_selection() {
        let (_dir, mut app) = test_app_with(&[("A", "d1"), ("B", "d2")]);

        app.selected = 1;
        app.delete_selected().unwrap();
        assert_eq!(app.selected, 0);

        app.delete_selected().unwrap();
        assert!(app.tasks.is_empty());

        // Deleting with nothing selected is a no-op.
        app.delete_selected().unwrap();
    }

    #[test]
    fn test_selection_navigation_bounds() {
        let (_dir, mut app) = test_app_with(&[("A", "d"), ("B", "d"), ("C", "d")]);

        app.select_prev();
        assert_eq!(app.selected, 0);

        app.select_next();
        app.select_next();
        app.select_next();
        assert_eq!(app.selected, 2);

        app.select_first();
        assert_eq!(app.selected, 0);
        app.select_last();
        assert_eq!(app.selected, 2);
    }

    #[test]
    fn test_form_slides_open_and_shut() {
        let (_dir, mut app) = test_app();

        app.toggle_form();
        assert!(app.is_animating());
        while app.is_animating() {
            app.tick();
        }
        assert_eq!(app.form_height, FORM_OPEN_HEIGHT);

        app.toggle_form();
        while app.is_animating() {
            app.tick();
        }
        assert_eq!(app.form_height, 0);
    }

    #[test]
    fn test_expired_notification_is_cleared_on_tick() {
        let (_dir, mut app) = test_app();

        app.notification = Some(Notification {
            message: "old".to_string(),
            level: NotificationLevel::Info,
            created_at: Instant::now() - Duration::from_secs(4),
        });

        app.tick();
        assert!(app.notification.is_none());
    }
}
