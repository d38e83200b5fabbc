// web_app/list/actions.rs - Per-row actions
//
// Actions get a shared reference to the row and a refresh handle. They
// never touch list state directly; a completed action asks the list to
// refresh itself.

use std::fmt;
use std::sync::Arc;

use futures::future::LocalBoxFuture;
use futures::FutureExt;

/// Handle a row action calls to make the list re-fetch
#[derive(Clone)]
pub struct Refresh(Arc<dyn Fn() + Send + Sync>);

impl Refresh {
    pub fn new<F>(refresh: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self(Arc::new(refresh))
    }

    pub fn run(&self) {
        (self.0)()
    }
}

impl fmt::Debug for Refresh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Refresh(..)")
    }
}

/// Visible text and accessible name of an action button
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionLabel {
    pub label: String,
    pub aria_label: String,
}

impl ActionLabel {
    pub fn new(label: impl Into<String>, aria_label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            aria_label: aria_label.into(),
        }
    }

    /// Accessible name for the button on a specific row
    pub fn aria_for(&self, row_name: &str) -> String {
        if row_name.is_empty() {
            self.aria_label.clone()
        } else {
            format!("{} {}", self.aria_label, row_name)
        }
    }
}

pub type RemoveFuture = LocalBoxFuture<'static, Result<(), String>>;

type LinkFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;
type RemoveFn<T> = Arc<dyn Fn(&T) -> RemoveFuture + Send + Sync>;
type InvokeFn<T> = Arc<dyn Fn(&T, Refresh) + Send + Sync>;

pub enum RowAction<T> {
    /// Navigate to an edit screen for the row
    Edit { label: ActionLabel, link: LinkFn<T> },
    /// Confirm, remove the row through the data source, then refresh
    Delete {
        label: ActionLabel,
        confirm: LinkFn<T>,
        remove: RemoveFn<T>,
    },
    /// Anything else; responsible for calling refresh itself
    Custom { label: ActionLabel, invoke: InvokeFn<T> },
}

/// What invoking an action asks of the view
pub enum ActionOutcome {
    Navigate(String),
    Pending(LocalBoxFuture<'static, ()>),
    Done,
}

impl fmt::Debug for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionOutcome::Navigate(path) => f.debug_tuple("Navigate").field(path).finish(),
            ActionOutcome::Pending(_) => f.write_str("Pending(..)"),
            ActionOutcome::Done => f.write_str("Done"),
        }
    }
}

impl<T> RowAction<T> {
    pub fn edit<F>(label: ActionLabel, link: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        RowAction::Edit {
            label,
            link: Arc::new(link),
        }
    }

    pub fn delete<C, R>(label: ActionLabel, confirm: C, remove: R) -> Self
    where
        C: Fn(&T) -> String + Send + Sync + 'static,
        R: Fn(&T) -> RemoveFuture + Send + Sync + 'static,
    {
        RowAction::Delete {
            label,
            confirm: Arc::new(confirm),
            remove: Arc::new(remove),
        }
    }

    pub fn custom<F>(label: ActionLabel, invoke: F) -> Self
    where
        F: Fn(&T, Refresh) + Send + Sync + 'static,
    {
        RowAction::Custom {
            label,
            invoke: Arc::new(invoke),
        }
    }

    pub fn label(&self) -> &ActionLabel {
        match self {
            RowAction::Edit { label, .. }
            | RowAction::Delete { label, .. }
            | RowAction::Custom { label, .. } => label,
        }
    }

    /// Confirmation prompt, for actions that need one
    pub fn confirmation(&self, row: &T) -> Option<String> {
        match self {
            RowAction::Delete { confirm, .. } => Some(confirm(row)),
            _ => None,
        }
    }

    /// Target of an edit link, rendered as a plain anchor
    pub fn href(&self, row: &T) -> Option<String> {
        match self {
            RowAction::Edit { link, .. } => Some(link(row)),
            _ => None,
        }
    }

    pub fn invoke(&self, row: &T, refresh: Refresh) -> ActionOutcome {
        match self {
            RowAction::Edit { link, .. } => ActionOutcome::Navigate(link(row)),
            RowAction::Delete { remove, label, .. } => {
                let pending = remove(row);
                let action = label.label.clone();
                ActionOutcome::Pending(
                    async move {
                        match pending.await {
                            Ok(()) => refresh.run(),
                            Err(e) => tracing::error!("{} failed: {}", action, e),
                        }
                    }
                    .boxed_local(),
                )
            }
            RowAction::Custom { invoke, .. } => {
                invoke(row, refresh);
                ActionOutcome::Done
            }
        }
    }
}

impl<T> Clone for RowAction<T> {
    fn clone(&self) -> Self {
        match self {
            RowAction::Edit { label, link } => RowAction::Edit {
                label: label.clone(),
                link: Arc::clone(link),
            },
            RowAction::Delete {
                label,
                confirm,
                remove,
            } => RowAction::Delete {
                label: label.clone(),
                confirm: Arc::clone(confirm),
                remove: Arc::clone(remove),
            },
            RowAction::Custom { label, invoke } => RowAction::Custom {
                label: label.clone(),
                invoke: Arc::clone(invoke),
            },
        }
    }
}

impl<T> fmt::Debug for RowAction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            RowAction::Edit { .. } => "Edit",
            RowAction::Delete { .. } => "Delete",
            RowAction::Custom { .. } => "Custom",
        };
        f.debug_struct(kind).field("label", self.label()).finish()
    }
}
