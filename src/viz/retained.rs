//! In-memory charting backend: live charts are kept as configurations keyed by container.
//!
//! Immediate-mode hosts (the egui viewer) paint whatever config is live each frame.
//! Clones share state, so a host can keep one clone for painting and give another
//! to a [`crate::controller::ToggleController`].

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use super::types::{ChartConfig, ContainerId};
use super::{ChartBackend, ChartHandle};
use crate::error::{RenderError, RenderResult};

#[derive(Debug)]
struct Slot {
    instance: u64,
    config: ChartConfig,
}

#[derive(Debug, Default)]
struct Shared {
    live: RefCell<BTreeMap<ContainerId, Slot>>,
    generated: Cell<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct RetainedBackend {
    shared: Rc<Shared>,
}

impl RetainedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration of the chart currently bound to `container`.
    pub fn chart(&self, container: &ContainerId) -> Option<ChartConfig> {
        self.shared
            .live
            .borrow()
            .get(container)
            .map(|slot| slot.config.clone())
    }

    pub fn live_count(&self) -> usize {
        self.shared.live.borrow().len()
    }

    /// Total number of charts ever generated through this backend.
    pub fn generated(&self) -> u64 {
        self.shared.generated.get()
    }
}

impl ChartBackend for RetainedBackend {
    type Handle = RetainedHandle;

    fn generate(&mut self, config: &ChartConfig) -> RenderResult<RetainedHandle> {
        let mut live = self.shared.live.borrow_mut();
        if live.contains_key(&config.bind_to) {
            return Err(RenderError::ContainerBusy(config.bind_to.clone()));
        }
        let instance = self.shared.generated.get() + 1;
        self.shared.generated.set(instance);
        live.insert(
            config.bind_to.clone(),
            Slot {
                instance,
                config: config.clone(),
            },
        );
        Ok(RetainedHandle {
            container: config.bind_to.clone(),
            instance,
            shared: Rc::clone(&self.shared),
        })
    }
}

#[derive(Debug)]
pub struct RetainedHandle {
    container: ContainerId,
    instance: u64,
    shared: Rc<Shared>,
}

impl ChartHandle for RetainedHandle {
    fn container(&self) -> &ContainerId {
        &self.container
    }

    fn destroy(&mut self) -> RenderResult<()> {
        let mut live = self.shared.live.borrow_mut();
        // Only remove the slot this handle created.
        if live
            .get(&self.container)
            .is_some_and(|slot| slot.instance == self.instance)
        {
            live.remove(&self.container);
        }
        Ok(())
    }
}
