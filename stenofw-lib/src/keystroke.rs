use embedded_hal::delay::DelayNs;
use fugit::MillisDurationU32;

/// Room for the longest stream any encoder produces, the haptic dump.
pub const MAX_KEY_EVENTS: usize = 128;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyEvent {
    Press(char),
    Release(char),
    /// Press immediately followed by release
    Tap(char),
    ReleaseAll,
}

/// Host keyboard emulation.
///
/// Implementations own their transport errors, nothing is reported back.
pub trait KeySink {
    fn press(&mut self, key: char);

    fn release(&mut self, key: char);

    fn release_all(&mut self);

    #[inline]
    fn tap(&mut self, key: char) {
        self.press(key);
        self.release(key);
    }
}

/// Ordered key events for one chord, with an optional pause after each tap.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct KeyStream {
    events: heapless::Vec<KeyEvent, MAX_KEY_EVENTS>,
    tap_pace: Option<MillisDurationU32>,
}

impl KeyStream {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            events: heapless::Vec::new(),
            tap_pace: None,
        }
    }

    #[must_use]
    pub const fn paced(tap_pace: MillisDurationU32) -> Self {
        Self {
            events: heapless::Vec::new(),
            tap_pace: Some(tap_pace),
        }
    }

    #[inline]
    pub fn push(&mut self, event: KeyEvent) {
        if self.events.push(event).is_err() {
            warn!("Key stream full, dropped {}", event);
        }
    }

    /// Appends the closing release-all, regardless of what is still held.
    #[inline]
    #[must_use]
    pub fn finish(mut self) -> Self {
        // Always leave room for this one
        if self.events.is_full() {
            self.events.pop();
        }
        self.push(KeyEvent::ReleaseAll);
        self
    }

    #[inline]
    #[must_use]
    pub fn events(&self) -> &[KeyEvent] {
        &self.events
    }

    #[inline]
    #[must_use]
    pub fn tap_pace(&self) -> Option<MillisDurationU32> {
        self.tap_pace
    }

    /// Replays the stream into `sink`, sleeping on `delay` after each tap
    /// when the stream is paced.
    pub fn play<K: KeySink, D: DelayNs>(&self, sink: &mut K, delay: &mut D) {
        for event in &self.events {
            match *event {
                KeyEvent::Press(key) => sink.press(key),
                KeyEvent::Release(key) => sink.release(key),
                KeyEvent::Tap(key) => {
                    sink.tap(key);
                    if let Some(pace) = self.tap_pace {
                        delay.delay_ms(pace.to_millis());
                    }
                }
                KeyEvent::ReleaseAll => sink.release_all(),
            }
        }
    }
}

/// The first key pressed in a chord stays down, every later key is
/// pressed and released at once.
pub(crate) struct AnchoredPresses {
    stream: KeyStream,
    anchored: bool,
}

impl AnchoredPresses {
    pub(crate) const fn new() -> Self {
        Self {
            stream: KeyStream::new(),
            anchored: false,
        }
    }

    pub(crate) fn press(&mut self, key: char) {
        self.stream.push(KeyEvent::Press(key));
        if self.anchored {
            self.stream.push(KeyEvent::Release(key));
        } else {
            self.anchored = true;
        }
    }

    /// Drops whatever is held and makes `key` the new anchor.
    pub(crate) fn re_anchor(&mut self, key: char) {
        self.stream.push(KeyEvent::ReleaseAll);
        self.stream.push(KeyEvent::Press(key));
        self.anchored = true;
    }

    pub(crate) fn finish(self) -> KeyStream {
        self.stream.finish()
    }
}
