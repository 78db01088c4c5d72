use usbd_hid::descriptor::KeyboardReport;

use crate::hid::keycodes::{HidKey, KeyCode, Modifier};

/// Boot keyboards report at most six keys besides modifiers.
pub const MAX_HELD: usize = 6;

/// What the host has to be sent after a state change.
pub enum Update {
    Unchanged,
    Send(KeyboardReport),
    /// Lift then press a key that was already down.
    Retap {
        lifted: KeyboardReport,
        pressed: KeyboardReport,
    },
}

struct Held {
    key: HidKey,
    // Presses not yet matched by a release
    presses: u8,
}

/// The keys currently down, as the host last saw them.
pub struct ReportState {
    held: heapless::Vec<Held, MAX_HELD>,
}

impl ReportState {
    pub const fn new() -> Self {
        Self {
            held: heapless::Vec::new(),
        }
    }

    /// A key that is already down is lifted and pressed again, so the host
    /// sees a fresh key-down while it stays held.
    pub fn press(&mut self, key: char) -> Update {
        let Some(hid_key) = HidKey::from_char(key) else {
            warn!("No HID key for {}", key);
            return Update::Unchanged;
        };
        if let Some(held) = self.held.iter_mut().find(|held| held.key.code == hid_key.code) {
            held.presses = held.presses.saturating_add(1);
            return Update::Retap {
                lifted: self.report_without(Some(hid_key.code)),
                pressed: self.report(),
            };
        }
        if self
            .held
            .push(Held {
                key: hid_key,
                presses: 1,
            })
            .is_err()
        {
            warn!("Rollover, dropped {}", key);
            return Update::Unchanged;
        }
        Update::Send(self.report())
    }

    /// The key goes up once every press of it has been released.
    pub fn release(&mut self, key: char) -> Update {
        let Some(hid_key) = HidKey::from_char(key) else {
            return Update::Unchanged;
        };
        let Some(pos) = self.held.iter().position(|held| held.key.code == hid_key.code) else {
            return Update::Unchanged;
        };
        if self.held[pos].presses > 1 {
            self.held[pos].presses -= 1;
            return Update::Unchanged;
        }
        self.held.remove(pos);
        Update::Send(self.report())
    }

    pub fn release_all(&mut self) -> Update {
        if self.held.is_empty() {
            return Update::Unchanged;
        }
        self.held.clear();
        Update::Send(self.report())
    }

    #[must_use]
    pub fn modifier(&self) -> Modifier {
        Modifier(self.held.iter().fold(0, |acc, held| acc | held.key.modifier.0))
    }

    #[must_use]
    pub fn keycodes(&self) -> [u8; MAX_HELD] {
        let mut keycodes = [KeyCode::NONE.0; MAX_HELD];
        for (slot, held) in keycodes.iter_mut().zip(&self.held) {
            *slot = held.key.code.0;
        }
        keycodes
    }

    #[must_use]
    pub fn report(&self) -> KeyboardReport {
        self.report_without(None)
    }

    fn report_without(&self, skip: Option<KeyCode>) -> KeyboardReport {
        let mut modifier = Modifier::NONE.0;
        let mut keycodes = [KeyCode::NONE.0; MAX_HELD];
        let shown = self.held.iter().filter(|held| Some(held.key.code) != skip);
        for (slot, held) in keycodes.iter_mut().zip(shown) {
            *slot = held.key.code.0;
            modifier |= held.key.modifier.0;
        }
        KeyboardReport {
            modifier,
            reserved: 0,
            leds: 0,
            keycodes,
        }
    }
}
