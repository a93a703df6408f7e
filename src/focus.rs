// SPDX-License-Identifier: GPL-3.0-only

//! Focus observation.
//!
//! The keyboard never takes focus itself. Instead it follows the host's
//! focused control: the host reports every focus change through a
//! [`FocusNotifier`], and the [`FocusTracker`] owned by the widget applies
//! those reports whenever the active control is read. Only the most recent
//! report matters.

use crate::input::TextTarget;
use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures::{FutureExt, StreamExt};

/// Identifier of a focusable control in the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u32);

/// The application hosting the keyboard.
pub trait FocusHost {
    /// Returns the editable text control with the given id.
    ///
    /// Controls that are not editable text return `None`.
    fn text_target(&mut self, id: TargetId) -> Option<&mut dyn TextTarget>;

    /// Returns the control after `id` in the host's focus order.
    fn next_focusable(&self, id: TargetId) -> Option<TargetId>;

    /// Gives keyboard focus to the control.
    fn request_focus(&mut self, id: TargetId);
}

/// Sending half handed to the host for reporting focus changes.
#[derive(Debug, Clone)]
pub struct FocusNotifier {
    sender: UnboundedSender<Option<TargetId>>,
}

impl FocusNotifier {
    /// Reports that `target` now has focus, or that nothing does.
    pub fn focus_changed(&self, target: Option<TargetId>) {
        if let Err(err) = self.sender.unbounded_send(target) {
            tracing::debug!("Focus change to {:?} not delivered: {}", target, err);
        }
    }
}

/// Tracks the most recently focused control.
#[derive(Debug)]
pub struct FocusTracker {
    sender: UnboundedSender<Option<TargetId>>,
    receiver: UnboundedReceiver<Option<TargetId>>,
    active: Option<TargetId>,
}

impl Default for FocusTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusTracker {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self {
            sender,
            receiver,
            active: None,
        }
    }

    /// Returns a notifier feeding this tracker.
    pub fn notifier(&self) -> FocusNotifier {
        FocusNotifier {
            sender: self.sender.clone(),
        }
    }

    /// Sets the active control directly, bypassing the channel.
    ///
    /// Reports already queued were sent earlier, so they are applied first
    /// and then overwritten by this call.
    pub fn set_active(&mut self, target: Option<TargetId>) {
        self.apply_queued();
        self.overwrite(target);
    }

    /// The focused control, with every queued report applied.
    pub fn active(&mut self) -> Option<TargetId> {
        self.apply_queued();
        self.active
    }

    fn apply_queued(&mut self) {
        if let Some(latest) = self.drain() {
            self.overwrite(latest);
        }
    }

    fn overwrite(&mut self, target: Option<TargetId>) {
        if target != self.active {
            tracing::debug!("Active target {:?} -> {:?}", self.active, target);
        }
        self.active = target;
    }

    fn drain(&mut self) -> Option<Option<TargetId>> {
        let mut latest = None;
        // The tracker holds a sender, so the stream never ends and an empty
        // queue shows up as a pending future.
        while let Some(Some(report)) = self.receiver.next().now_or_never() {
            latest = Some(report);
        }
        latest
    }
}
