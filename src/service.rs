//! The cooperative lamp loop
//!
//! One [`LampService`] is the single execution context for the lamp: it
//! either runs a routed request directly ([`LampService::dispatch`]) or
//! serves one command queued by another task ([`LampService::poll`]), and
//! gives the animation one tick per loop iteration. Neither call blocks.

use embassy_time::Instant;

use crate::OutputDriver;
use crate::config::LED_COUNT;
use crate::controller::LampController;
use crate::queue::{CommandQueue, ViewCell};
use crate::route::Route;
use crate::view::LampView;

pub struct LampService<'a, D: OutputDriver, const N: usize = LED_COUNT, const SIZE: usize = 4> {
    controller: LampController<D, N>,
    commands: &'a CommandQueue<SIZE>,
    view: &'a ViewCell,
}

impl<'a, D: OutputDriver, const N: usize, const SIZE: usize> LampService<'a, D, N, SIZE> {
    pub fn new(
        controller: LampController<D, N>,
        commands: &'a CommandQueue<SIZE>,
        view: &'a ViewCell,
    ) -> Self {
        view.publish(controller.view());
        Self {
            controller,
            commands,
            view,
        }
    }

    pub const fn controller(&self) -> &LampController<D, N> {
        &self.controller
    }

    /// Run the operation behind `route` and return the resulting view
    pub fn dispatch(&mut self, route: Route, now: Instant) -> LampView {
        if let Some(command) = route.command() {
            self.controller.apply(command, now);
        }
        self.publish()
    }

    /// One loop iteration: serve at most one queued command, then tick
    ///
    /// The served command's view is published against its ticket before
    /// the tick runs. Returns `true` if anything was rendered.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut rendered = false;
        if let Some((ticket, command)) = self.commands.try_next() {
            self.controller.apply(command, now);
            self.view.complete(ticket, self.controller.view());
            rendered = true;
        }
        if self.controller.tick(now) {
            self.publish();
            rendered = true;
        }
        rendered
    }

    fn publish(&self) -> LampView {
        let view = self.controller.view();
        self.view.publish(view);
        view
    }
}
