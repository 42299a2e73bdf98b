//! Main polling loop
//!
//! The controller owns the state registry and the [`PackContext`] and runs
//! one state-machine step per loop iteration. Nothing in a step blocks;
//! waiting on a sample is repeated polling across iterations.

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::config::PackConfig;
use crate::context::{Hardware, PackContext, Peripherals};
use crate::state::{PackState, StateError, StateId, StateManager};

/// Registry capacity, one slot per [`StateId`]
pub const STATE_CAPACITY: usize = StateId::ALL.len();

/// Prop controller driving the pack state machine
///
/// # Usage
///
/// ```ignore
/// let controller = PropController::new(peripherals, &PackConfig::DEFAULT, Instant::now())?;
/// controller.run(Instant::now);
/// ```
pub struct PropController<H: Hardware> {
    manager: StateManager<PackState, STATE_CAPACITY>,
    context: PackContext<H>,
}

impl<H: Hardware> PropController<H> {
    /// Register every state and enter [`StateId::PowerOn`]
    pub fn new(
        peripherals: Peripherals<H>,
        config: &PackConfig,
        now: Instant,
    ) -> Result<Self, StateError> {
        let mut manager = StateManager::new();
        for id in StateId::ALL {
            manager.add_state(id.as_str(), id.to_slot())?;
        }
        let mut context = PackContext::new(peripherals, config, now);
        manager.queue_state(StateId::PowerOn.as_str(), &mut context)?;

        Ok(Self { manager, context })
    }

    /// Run one loop iteration at `now`
    ///
    /// A failed transition is reported and dropped; the loop keeps going
    /// in the current state.
    pub fn tick(&mut self, now: Instant) {
        self.context.now = now;
        if let Err(_err) = self.manager.update(&mut self.context) {
            #[cfg(feature = "esp32-log")]
            println!("[PropController.tick] transition aborted: {}", _err);
        }
    }

    /// Poll forever, reading the time from `clock` on every iteration
    pub fn run<F: FnMut() -> Instant>(mut self, mut clock: F) -> ! {
        loop {
            self.tick(clock());
        }
    }

    /// Active state
    pub fn state(&self) -> Option<StateId> {
        self.manager.current().map(PackState::id)
    }

    /// Pending state, applied on the next tick
    pub fn pending(&self) -> Option<StateId> {
        self.manager.pending_name().and_then(StateId::parse_from_str)
    }

    pub fn manager(&self) -> &StateManager<PackState, STATE_CAPACITY> {
        &self.manager
    }

    /// Get a reference to the context
    pub fn context(&self) -> &PackContext<H> {
        &self.context
    }

    /// Get a mutable reference to the context
    pub fn context_mut(&mut self) -> &mut PackContext<H> {
        &mut self.context
    }
}
