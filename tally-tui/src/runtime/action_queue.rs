use tally_core::NewTimeEntry;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Work that needs the backend. Key handlers only enqueue these; the event
/// loop runs them in order between frames.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Action {
    LogTimeEntry(NewTimeEntry),
    AddProject { name: String },
    ConfirmDelete,
    Refresh,
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
