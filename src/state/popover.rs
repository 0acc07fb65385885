/// Tag filter popover state machine
///
/// The popover is the only surface that edits the selected-tag set. While
/// it is open the page underneath must not scroll, so the controller owns
/// a `ScrollLock` handle that is acquired on open and released on every
/// path back to closed, including teardown.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// How long the enter/exit animation runs, in milliseconds
pub const ANIMATION_DURATION: u64 = 300;

/// Where a pointer-down landed, as seen by the popover controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The control that toggles the popover
    Trigger,
    /// The popover surface itself
    Popover,
    /// Anywhere else on the page
    Outside,
}

/// Presentational animation phase.
///
/// `Exited` means fully unmounted; the other phases keep the surface in
/// the widget tree so the exit animation can play out. The phase never
/// affects filtering semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    Entering,
    Entered,
    Exiting,
    #[default]
    Exited,
}

/// Page-level scroll suspension flag.
///
/// Cloning hands out another handle onto the same flag, so the embedding
/// page can read what the controller wrote. Acquire and release are
/// idempotent: the flag is either held or not.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    locked: Arc<AtomicBool>,
}

impl ScrollLock {
    pub fn acquire(&self) {
        self.locked.store(true, Ordering::SeqCst);
    }

    pub fn release(&self) {
        self.locked.store(false, Ordering::SeqCst);
    }

    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::SeqCst)
    }
}

/// Controller for the tag filter popover
#[derive(Debug, Default)]
pub struct TagFilterPopover {
    open: bool,
    phase: Transition,
    selected: BTreeSet<String>,
    scroll_lock: ScrollLock,
}

impl TagFilterPopover {
    /// Create a controller around the page's scroll lock handle
    pub fn new(scroll_lock: ScrollLock) -> Self {
        TagFilterPopover {
            open: false,
            phase: Transition::Exited,
            selected: BTreeSet::new(),
            scroll_lock,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the surface should be in the widget tree at all. The
    /// popover stays mounted through its exit animation.
    pub fn is_mounted(&self) -> bool {
        self.open || self.phase == Transition::Exiting
    }

    pub fn phase(&self) -> Transition {
        self.phase
    }

    pub fn selected_tags(&self) -> &BTreeSet<String> {
        &self.selected
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected.contains(tag)
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_lock.is_locked()
    }

    /// Flip the popover from the trigger control
    pub fn toggle_open(&mut self) {
        if self.open {
            self.request_close();
        } else {
            self.open = true;
            self.phase = Transition::Entering;
            self.scroll_lock.acquire();
        }
    }

    /// Close from any affordance. A no-op while already closed.
    pub fn request_close(&mut self) {
        if self.open {
            self.open = false;
            self.phase = Transition::Exiting;
            self.scroll_lock.release();
        }
    }

    /// Route a pointer-down to the controller. Only a press that lands
    /// outside both the trigger and the surface dismisses the popover.
    pub fn pointer_down(&mut self, hit: HitTarget) {
        if self.open && hit == HitTarget::Outside {
            self.request_close();
        }
    }

    /// Toggle one tag's membership. The popover stays open so several
    /// tags can be picked in one session.
    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.selected.remove(tag) {
            self.selected.insert(tag.to_owned());
        }
    }

    /// Empty the selection and close, regardless of how much was selected
    pub fn clear_all(&mut self) {
        self.selected.clear();
        self.request_close();
    }

    /// Advance the enter/exit animation one step. Driven by a delayed
    /// message scheduled whenever a transition starts; a late tick on a
    /// settled phase changes nothing.
    pub fn advance_transition(&mut self) {
        self.phase = match self.phase {
            Transition::Entering => Transition::Entered,
            Transition::Exiting => Transition::Exited,
            settled => settled,
        };
    }
}

impl Drop for TagFilterPopover {
    // Teardown must not leave the page scroll-locked.
    fn drop(&mut self) {
        self.scroll_lock.release();
    }
}
