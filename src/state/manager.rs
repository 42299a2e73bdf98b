//! Named state registry with queued transitions
//!
//! At most one transition is pending at a time; queuing again replaces the
//! target. A pending transition is applied at the start of the next
//! [`StateManager::update`], so `exited`/`entered` always bracket a switch
//! and `update` never runs in between.

use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{Next, State, StateError};

pub struct StateManager<S, const N: usize> {
    states: Vec<(&'static str, S), N>,
    current: Option<usize>,
    next: Option<usize>,
}

impl<S, const N: usize> Default for StateManager<S, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, const N: usize> StateManager<S, N> {
    pub const fn new() -> Self {
        Self {
            states: Vec::new(),
            current: None,
            next: None,
        }
    }

    /// Register `state` as `name`, replacing an earlier registration
    pub fn add_state(&mut self, name: &'static str, state: S) -> Result<(), StateError> {
        if let Some(slot) = self.states.iter_mut().find(|(known, _)| *known == name) {
            slot.1 = state;
            return Ok(());
        }
        self.states
            .push((name, state))
            .map_err(|_| StateError::RegistryFull)
    }

    /// Request a switch to the state registered as `name`
    ///
    /// With no active state the target is entered right away; otherwise it
    /// becomes the pending state, replacing any earlier request.
    pub fn queue_state<C>(&mut self, name: &str, ctx: &mut C) -> Result<(), StateError>
    where
        S: State<C>,
    {
        #[cfg(feature = "esp32-log")]
        println!("[StateManager.queue_state] requested {}", name);

        let index = self.lookup(name)?;
        if self.current.is_none() {
            self.current = Some(index);
            self.enter(index, ctx)
        } else {
            self.next = Some(index);
            Ok(())
        }
    }

    /// Apply a pending transition, then update the active state
    pub fn update<C>(&mut self, ctx: &mut C) -> Result<(), StateError>
    where
        S: State<C>,
    {
        match (self.current, self.next.take()) {
            (None, Some(target)) => {
                self.current = Some(target);
                self.enter(target, ctx)?;
            }
            (Some(current), Some(target)) => self.switch(current, target, ctx)?,
            _ => {}
        }

        if let Some(index) = self.current {
            let mut next = Next::default();
            self.states[index].1.update(ctx, &mut next);
            self.apply(next, ctx)?;
        }
        Ok(())
    }

    /// Name of the active state
    pub fn current_name(&self) -> Option<&'static str> {
        self.current.map(|index| self.states[index].0)
    }

    /// Name of the pending state
    pub fn pending_name(&self) -> Option<&'static str> {
        self.next.map(|index| self.states[index].0)
    }

    /// The active state
    pub fn current(&self) -> Option<&S> {
        self.current.map(|index| &self.states[index].1)
    }

    /// Number of registered states
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    fn lookup(&self, name: &str) -> Result<usize, StateError> {
        let found = self.states.iter().position(|(known, _)| *known == name);
        if found.is_none() {
            #[cfg(feature = "esp32-log")]
            println!("[StateManager.lookup] unknown state {}", name);
        }
        found.ok_or(StateError::UnknownState)
    }

    /// Leave `current` and enter `target`
    ///
    /// A request made by the `exited` hook replaces `target`. An unknown
    /// name there is reported after `target` has been entered, so the
    /// exited state never stays active.
    fn switch<C>(&mut self, current: usize, target: usize, ctx: &mut C) -> Result<(), StateError>
    where
        S: State<C>,
    {
        let mut next = Next::default();
        self.states[current].1.exited(ctx, &mut next);
        let mut redirect = Ok(());
        let target = match next.take().map(|name| self.lookup(name)) {
            Some(Ok(index)) => index,
            Some(Err(err)) => {
                redirect = Err(err);
                target
            }
            None => target,
        };

        #[cfg(feature = "esp32-log")]
        println!(
            "[StateManager.switch] {} -> {}",
            self.states[current].0, self.states[target].0
        );

        self.current = Some(target);
        self.enter(target, ctx)?;
        redirect
    }

    fn enter<C>(&mut self, index: usize, ctx: &mut C) -> Result<(), StateError>
    where
        S: State<C>,
    {
        let mut next = Next::default();
        self.states[index].1.entered(ctx, &mut next);
        self.apply(next, ctx)
    }

    fn apply<C>(&mut self, mut next: Next, ctx: &mut C) -> Result<(), StateError>
    where
        S: State<C>,
    {
        match next.take() {
            Some(name) => self.queue_state(name, ctx),
            None => Ok(()),
        }
    }
}
