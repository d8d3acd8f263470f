//! The slide-up biography panel.
//!
//! Independent of the card machine except for one rule: the info button
//! that opens it is disabled while a card is mid-transition.

use tracing::debug;

use crate::config::BioConfig;
use crate::gesture::Vec2;
use crate::machine::SwipeMachine;

#[derive(Debug, Clone, Default)]
pub struct BioPanel {
    open: bool,
    config: BioConfig,
}

impl BioPanel {
    pub fn new(config: BioConfig) -> Self {
        Self {
            open: false,
            config,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the panel. Returns true if it was closed before.
    pub fn open(&mut self) -> bool {
        let changed = !self.open;
        self.open = true;
        if changed {
            debug!("bio panel opened");
        }
        changed
    }

    /// Close the panel. Returns true if it was open before.
    pub fn close(&mut self) -> bool {
        let changed = self.open;
        self.open = false;
        if changed {
            debug!("bio panel closed");
        }
        changed
    }

    /// Info button press; ignored while the card machine is locked.
    pub fn open_from_info(&mut self, machine: &SwipeMachine) -> bool {
        if !machine.info_enabled() {
            return false;
        }
        self.open()
    }

    /// A tap on the dimmed backdrop outside the sheet closes it.
    pub fn backdrop_tap(&mut self) -> bool {
        self.close()
    }

    /// Whether a released vertical drag dismisses the sheet.
    pub fn dismisses(&self, offset: Vec2, velocity: Vec2) -> bool {
        let cfg = &self.config;
        offset.y > cfg.dismiss_distance
            || (velocity.y > cfg.flick_velocity && offset.y > cfg.flick_min_offset)
    }

    /// Finger lifted on the sheet. Returns true if this closed it.
    pub fn release_drag(&mut self, offset: Vec2, velocity: Vec2) -> bool {
        if self.open && self.dismisses(offset, velocity) {
            self.close()
        } else {
            false
        }
    }
}
