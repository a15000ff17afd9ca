//! Hand-off between the HTTP task and the lamp loop.
//!
//! On hosts where requests are served from another task or interrupt, the
//! controller must still be driven from one place. Requests are queued as
//! [`LampCommand`]s, the lamp loop serves them in order, one per loop
//! iteration, and publishes the resulting [`LampView`] against the
//! command's [`Ticket`] for the page renderer. Both sides synchronize
//! through `critical-section`, so this works on bare metal and under std.

use core::cell::{Cell, RefCell};

use critical_section::Mutex;
use heapless::Deque;

use crate::command::LampCommand;
use crate::view::LampView;

/// Error returned when the queue has no room left; carries the command back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull(pub LampCommand);

/// Receipt for a submitted command
///
/// Tickets are handed out in submission order. Pass one to
/// [`ViewCell::view_for`] to get the view produced by that command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u32);

impl Ticket {
    /// Whether `self` was served no later than `served`
    const fn is_covered_by(self, served: u32) -> bool {
        // Tickets wrap, so compare by distance
        served.wrapping_sub(self.0) < u32::MAX / 2
    }
}

struct Pending<const SIZE: usize> {
    commands: Deque<(Ticket, LampCommand), SIZE>,
    next_ticket: u32,
}

/// Bounded FIFO of pending lamp commands
pub struct CommandQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Pending<SIZE>>>,
}

impl<const SIZE: usize> CommandQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Pending {
                commands: Deque::new(),
                next_ticket: 1,
            })),
        }
    }

    /// Queue a command behind the ones already pending
    pub fn submit(&self, command: LampCommand) -> Result<Ticket, QueueFull> {
        critical_section::with(|cs| {
            let mut pending = self.inner.borrow(cs).borrow_mut();
            let ticket = Ticket(pending.next_ticket);
            pending
                .commands
                .push_back((ticket, command))
                .map_err(|(_, command)| QueueFull(command))?;
            pending.next_ticket = pending.next_ticket.wrapping_add(1);
            Ok(ticket)
        })
    }

    /// Take the oldest pending command, if any
    pub fn try_next(&self) -> Option<(Ticket, LampCommand)> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().commands.pop_front())
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().commands.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for CommandQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Last published lamp view, with the newest ticket it reflects
pub struct ViewCell {
    inner: Mutex<Cell<(LampView, u32)>>,
}

impl ViewCell {
    pub const fn new(initial: LampView) -> Self {
        Self {
            inner: Mutex::new(Cell::new((initial, 0))),
        }
    }

    /// Publish a view that serves no new command, e.g. after a tick
    pub fn publish(&self, view: LampView) {
        critical_section::with(|cs| {
            let cell = self.inner.borrow(cs);
            let (_, served) = cell.get();
            cell.set((view, served));
        });
    }

    /// Publish the view produced by the command behind `ticket`
    pub fn complete(&self, ticket: Ticket, view: LampView) {
        critical_section::with(|cs| self.inner.borrow(cs).set((view, ticket.0)));
    }

    pub fn get(&self) -> LampView {
        critical_section::with(|cs| self.inner.borrow(cs).get().0)
    }

    /// The current view once the command behind `ticket` was served
    ///
    /// `None` while it is still pending; the page for that request must
    /// not be rendered before this returns a view.
    pub fn view_for(&self, ticket: Ticket) -> Option<LampView> {
        let (view, served) = critical_section::with(|cs| self.inner.borrow(cs).get());
        ticket.is_covered_by(served).then_some(view)
    }
}
