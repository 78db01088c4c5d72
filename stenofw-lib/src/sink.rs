use embedded_hal::delay::DelayNs;

use crate::keystroke::{KeySink, KeyStream};
use crate::protocol::ChordSink;

/// Ordered byte transport, a serial line or a USB CDC port.
///
/// Write failures stay inside the implementation.
pub trait ByteSink {
    fn write_bytes(&mut self, bytes: &[u8]);
}

/// Any blocking [`embedded_io::Write`], a UART for instance.
pub struct WriteSink<W> {
    inner: W,
}

impl<W: embedded_io::Write> WriteSink<W> {
    pub const fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: embedded_io::Write> ByteSink for WriteSink<W> {
    fn write_bytes(&mut self, bytes: &[u8]) {
        if self.inner.write_all(bytes).is_err() {
            warn!("Serial write failed, dropped {} bytes", bytes.len());
            return;
        }
        if self.inner.flush().is_err() {
            warn!("Serial flush failed");
        }
    }
}

/// Packets go out over `serial`, key streams are dropped.
pub struct SerialOutput<S> {
    serial: S,
}

impl<S: ByteSink> SerialOutput<S> {
    pub const fn new(serial: S) -> Self {
        Self { serial }
    }
}

impl<S: ByteSink> ChordSink for SerialOutput<S> {
    #[inline]
    fn send_packet(&mut self, packet: &[u8]) {
        self.serial.write_bytes(packet);
    }

    fn send_keys(&mut self, _keys: &KeyStream) {
        warn!("Serial output can't type keys");
    }
}

/// Key streams are typed on `keyboard`, paced with `delay`, packets are
/// dropped.
pub struct KeyboardOutput<K, D> {
    keyboard: K,
    delay: D,
}

impl<K: KeySink, D: DelayNs> KeyboardOutput<K, D> {
    pub const fn new(keyboard: K, delay: D) -> Self {
        Self { keyboard, delay }
    }
}

impl<K: KeySink, D: DelayNs> ChordSink for KeyboardOutput<K, D> {
    fn send_packet(&mut self, _packet: &[u8]) {
        warn!("Keyboard output can't send packets");
    }

    #[inline]
    fn send_keys(&mut self, keys: &KeyStream) {
        keys.play(&mut self.keyboard, &mut self.delay);
    }
}
