//! # Entity Management Facade
//!
//! Generic state container behind every admin management screen. One facade per
//! [`ManagedEntity`] owns the loaded list, the detail/edit/delete modal state, the
//! busy flags, and the search/filter inputs.
//!
//! ## Action Pattern
//!
//! Every async action follows the same steps:
//!
//! 1. set the matching busy flag and clear `error`
//! 2. call the gateway (no lock is held across the await)
//! 3. on success update the list, close the related modal, show a success toast
//! 4. on failure store the server message (or a fallback), show an error toast,
//!    and return the error to the caller
//!
//! ## Example
//!
//! ```rust,ignore
//! let products = EntityFacade::<Product>::new(gateway, notifications.clone());
//! products.load().await?;
//! products.set_search_term("cake");
//! let visible = products.filtered();
//! ```

use std::sync::Arc;

use parking_lot::RwLock;

use crate::core::error::{AppError, Result};
use crate::core::service::{CrudGateway, ManagedEntity};
use crate::services::notifications::{NotificationAction, NotificationCenter};
use crate::utils::runtime;

/// Observable state of one management screen.
pub struct ManagementState<E: ManagedEntity> {
    pub items: Vec<E>,
    /// Item shown in the detail panel.
    pub selected: Option<E>,
    /// Item being edited in the modal.
    pub editing: Option<E>,
    /// The modal is open for a new item.
    pub creating: bool,
    /// Item awaiting delete confirmation.
    pub deleting_id: Option<E::Id>,
    pub is_loading: bool,
    pub is_updating: bool,
    pub is_deleting: bool,
    pub error: Option<String>,
    pub search_term: String,
    pub filter: E::Filter,
}

impl<E: ManagedEntity> Default for ManagementState<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            editing: None,
            creating: false,
            deleting_id: None,
            is_loading: false,
            is_updating: false,
            is_deleting: false,
            error: None,
            search_term: String::new(),
            filter: E::Filter::default(),
        }
    }
}

impl<E: ManagedEntity> Clone for ManagementState<E> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            selected: self.selected.clone(),
            editing: self.editing.clone(),
            creating: self.creating,
            deleting_id: self.deleting_id,
            is_loading: self.is_loading,
            is_updating: self.is_updating,
            is_deleting: self.is_deleting,
            error: self.error.clone(),
            search_term: self.search_term.clone(),
            filter: self.filter.clone(),
        }
    }
}

impl<E: ManagedEntity> std::fmt::Debug for ManagementState<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManagementState")
            .field("items", &self.items.len())
            .field("creating", &self.creating)
            .field("deleting_id", &self.deleting_id)
            .field("is_loading", &self.is_loading)
            .field("is_updating", &self.is_updating)
            .field("is_deleting", &self.is_deleting)
            .field("error", &self.error)
            .field("search_term", &self.search_term)
            .field("filter", &self.filter)
            .finish()
    }
}

impl<E: ManagedEntity> ManagementState<E> {
    /// Items matching the search term (case-insensitive) and the filter.
    pub fn filtered(&self) -> Vec<E> {
        let search = self.search_term.trim().to_lowercase();
        self.items
            .iter()
            .filter(|item| item.matches(&search, &self.filter))
            .cloned()
            .collect()
    }

    pub fn find(&self, id: E::Id) -> Option<&E> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn is_modal_open(&self) -> bool {
        self.creating || self.editing.is_some()
    }
}

/// Message shown for a failed action: the server's own text when there is one.
pub(crate) fn failure_message(err: &AppError, fallback: String) -> String {
    err.server_message()
        .filter(|message| !message.trim().is_empty())
        .map(str::to_string)
        .unwrap_or(fallback)
}

/// Shared handle to one management screen's state.
pub struct EntityFacade<E: ManagedEntity> {
    gateway: Arc<dyn CrudGateway<E>>,
    notifications: NotificationCenter,
    state: Arc<RwLock<ManagementState<E>>>,
}

impl<E: ManagedEntity> Clone for EntityFacade<E> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            notifications: self.notifications.clone(),
            state: self.state.clone(),
        }
    }
}

impl<E: ManagedEntity> EntityFacade<E> {
    pub fn new(gateway: Arc<dyn CrudGateway<E>>, notifications: NotificationCenter) -> Self {
        Self {
            gateway,
            notifications,
            state: Arc::new(RwLock::new(ManagementState::default())),
        }
    }

    pub fn snapshot(&self) -> ManagementState<E> {
        self.state.read().clone()
    }

    pub fn items(&self) -> Vec<E> {
        self.state.read().items.clone()
    }

    pub fn filtered(&self) -> Vec<E> {
        self.state.read().filtered()
    }

    fn update_state(&self, f: impl FnOnce(&mut ManagementState<E>)) {
        let mut state = self.state.write();
        f(&mut state);
    }

    fn fail(&self, err: &AppError, fallback: String, clear_busy: impl FnOnce(&mut ManagementState<E>)) -> String {
        let message = failure_message(err, fallback);
        self.update_state(|s| {
            s.error = Some(message.clone());
            clear_busy(s);
        });
        message
    }

    /// Replace the list with the backend's current contents.
    pub async fn load(&self) -> Result<()> {
        self.update_state(|s| {
            s.is_loading = true;
            s.error = None;
        });

        match self.gateway.list().await {
            Ok(items) => {
                tracing::info!(entity = E::LABELS.plural, count = items.len(), "Loaded");
                self.update_state(|s| {
                    s.items = items;
                    s.is_loading = false;
                });
                Ok(())
            }
            Err(err) => {
                tracing::warn!(entity = E::LABELS.plural, error = %err, "Load failed");
                let message = self.fail(&err, E::LABELS.load_failed(), |s| s.is_loading = false);
                self.notifications
                    .error_with_action("Error", &message, self.retry_action());
                Err(err)
            }
        }
    }

    fn retry_action(&self) -> NotificationAction {
        let facade = self.clone();
        NotificationAction {
            label: "Retry".to_string(),
            callback: Arc::new(move || {
                let facade = facade.clone();
                runtime::spawn(async move {
                    let _ = facade.load().await;
                });
            }),
        }
    }

    pub async fn create(&self, draft: E::Draft) -> Result<E> {
        self.update_state(|s| {
            s.is_updating = true;
            s.error = None;
        });

        match self.gateway.create(draft).await {
            Ok(created) => {
                tracing::info!(entity = E::LABELS.singular, id = %created.id(), "Created");
                let item = created.clone();
                self.update_state(|s| {
                    if E::NEWEST_FIRST {
                        s.items.insert(0, item);
                    } else {
                        s.items.push(item);
                    }
                    s.is_updating = false;
                    s.creating = false;
                    s.editing = None;
                });
                self.notifications.success(
                    &E::LABELS.created(),
                    &format!("The {} has been created", E::LABELS.singular.to_lowercase()),
                );
                Ok(created)
            }
            Err(err) => {
                tracing::warn!(entity = E::LABELS.singular, error = %err, "Create failed");
                let message = self.fail(&err, E::LABELS.create_failed(), |s| s.is_updating = false);
                self.notifications.error("Error", &message);
                Err(err)
            }
        }
    }

    pub async fn update(&self, id: E::Id, patch: E::Patch) -> Result<E> {
        self.update_state(|s| {
            s.is_updating = true;
            s.error = None;
        });

        match self.gateway.update(id, patch).await {
            Ok(updated) => {
                tracing::info!(entity = E::LABELS.singular, %id, "Updated");
                let item = updated.clone();
                self.update_state(|s| {
                    if let Some(slot) = s.items.iter_mut().find(|existing| existing.id() == id) {
                        *slot = item.clone();
                    }
                    if s.selected.as_ref().is_some_and(|selected| selected.id() == id) {
                        s.selected = Some(item);
                    }
                    s.is_updating = false;
                    s.editing = None;
                });
                self.notifications
                    .success(&E::LABELS.updated(), "Changes saved successfully");
                Ok(updated)
            }
            Err(err) => {
                tracing::warn!(entity = E::LABELS.singular, %id, error = %err, "Update failed");
                let message = self.fail(&err, E::LABELS.update_failed(), |s| s.is_updating = false);
                self.notifications.error("Error", &message);
                Err(err)
            }
        }
    }

    pub async fn delete(&self, id: E::Id) -> Result<()> {
        self.update_state(|s| {
            s.is_deleting = true;
            s.error = None;
        });

        match self.gateway.delete(id).await {
            Ok(()) => {
                tracing::info!(entity = E::LABELS.singular, %id, "Deleted");
                self.update_state(|s| {
                    s.items.retain(|item| item.id() != id);
                    if s.selected.as_ref().is_some_and(|selected| selected.id() == id) {
                        s.selected = None;
                    }
                    s.is_deleting = false;
                    s.deleting_id = None;
                });
                self.notifications.success(
                    &E::LABELS.deleted(),
                    &format!("The {} has been deleted", E::LABELS.singular.to_lowercase()),
                );
                Ok(())
            }
            Err(err) => {
                tracing::warn!(entity = E::LABELS.singular, %id, error = %err, "Delete failed");
                let message = self.fail(&err, E::LABELS.delete_failed(), |s| s.is_deleting = false);
                self.notifications.error("Error", &message);
                Err(err)
            }
        }
    }

    pub fn select(&self, item: E) {
        self.update_state(|s| s.selected = Some(item));
    }

    pub fn close_detail(&self) {
        self.update_state(|s| s.selected = None);
    }

    pub fn open_create(&self) {
        self.update_state(|s| {
            s.creating = true;
            s.editing = None;
        });
    }

    pub fn open_edit(&self, item: E) {
        self.update_state(|s| {
            s.editing = Some(item);
            s.creating = false;
        });
    }

    pub fn close_edit(&self) {
        self.update_state(|s| {
            s.editing = None;
            s.creating = false;
        });
    }

    pub fn open_delete(&self, id: E::Id) {
        self.update_state(|s| s.deleting_id = Some(id));
    }

    pub fn close_delete(&self) {
        self.update_state(|s| s.deleting_id = None);
    }

    pub fn set_search_term(&self, term: &str) {
        self.update_state(|s| s.search_term = term.to_string());
    }

    pub fn set_filter(&self, filter: E::Filter) {
        self.update_state(|s| s.filter = filter);
    }

    pub fn clear_error(&self) {
        self.update_state(|s| s.error = None);
    }

    pub fn reset(&self) {
        *self.state.write() = ManagementState::default();
    }
}
