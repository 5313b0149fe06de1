//! Manager state

use super::actions::{ActionError, Stage};
use crate::domain::schema::FormField;
use crate::domain::{EntityId, EntityLabels, Resource};

/// Everything one manager shows
///
/// `editing` is `Some` only while the dialog edits a stored record.
#[derive(Debug, Clone, PartialEq)]
pub struct ManagerState<T> {
    pub items: Vec<T>,
    pub draft: T,
    pub editing: Option<EntityId>,
    pub dialog_open: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T: Resource> Default for ManagerState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Resource> ManagerState<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            draft: T::draft(),
            editing: None,
            dialog_open: false,
            loading: false,
            error: None,
        }
    }

    pub fn labels(&self) -> EntityLabels {
        T::KIND.labels()
    }

    pub fn dialog_title(&self) -> &'static str {
        if self.editing.is_some() {
            self.labels().edit_action
        } else {
            self.labels().new_action
        }
    }

    pub fn open_new(&mut self) {
        self.draft = T::draft();
        self.editing = None;
        self.dialog_open = true;
    }

    pub fn open_edit(&mut self, item: &T) {
        self.draft = item.clone();
        self.editing = item.id();
        self.dialog_open = true;
    }

    /// Closing discards the draft
    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
        self.editing = None;
        self.draft = T::draft();
    }

    pub fn edit_field(&mut self, field: &FormField<T>, value: &str) {
        (field.write)(&mut self.draft, value);
    }

    /// An action is in flight
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, result: Result<Vec<T>, ActionError>) {
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(err) => self.fail(err),
        }
    }

    /// The dialog stays open only when the save itself failed
    pub fn finish_save(&mut self, result: Result<Vec<T>, ActionError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.close_dialog();
            }
            Err(err) => {
                if err.stage == Stage::Load {
                    self.close_dialog();
                }
                self.fail(err);
            }
        }
    }

    pub fn finish_delete(&mut self, result: Result<Vec<T>, ActionError>) {
        self.finish_load(result);
    }

    fn fail(&mut self, err: ActionError) {
        let labels = self.labels();
        log::error!("{} {}", labels.tab, err);
        self.error = Some(
            match err.stage {
                Stage::Load => labels.load_error,
                Stage::Save => labels.save_error,
                Stage::Delete => labels.delete_error,
            }
            .to_string(),
        );
    }
}
