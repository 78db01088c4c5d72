//! USB HID boot keyboard, types the key streams of the keyboard protocols.
use usb_device::bus::{UsbBus, UsbBusAllocator};
use usb_device::device::{StringDescriptors, UsbDevice, UsbDeviceBuilder, UsbVidPid};
use usb_device::prelude::BuilderError;
use usb_device::{LangID, UsbError};
use usbd_hid::descriptor::{KeyboardReport, SerializedDescriptor};
use usbd_hid::hid_class::HIDClass;

use crate::hid::report::{ReportState, Update};
use crate::keystroke::KeySink;

pub mod keycodes;
pub mod report;

/// Polling interval of the interrupt endpoint, in ms.
const POLL_MS: u8 = 1;

pub struct HidKeyboard<'a, B: UsbBus> {
    hid: HIDClass<'a, B>,
    dev: UsbDevice<'a, B>,
    state: ReportState,
}

impl<'a, B: UsbBus> HidKeyboard<'a, B> {
    /// # Errors
    /// The string descriptors don't fit the device
    pub fn new(
        allocator: &'a UsbBusAllocator<B>,
        vid_pid: UsbVidPid,
    ) -> Result<Self, BuilderError> {
        let hid = HIDClass::new_ep_in(allocator, KeyboardReport::desc(), POLL_MS);
        let dev = UsbDeviceBuilder::new(allocator, vid_pid)
            .strings(&[StringDescriptors::new(LangID::EN)
                .manufacturer("StenoFW")
                .product("Steno keyboard")
                .serial_number("1")])?
            .device_class(0)
            .build();
        Ok(Self {
            hid,
            dev,
            state: ReportState::new(),
        })
    }

    /// Returns false if the report was lost to a bus error.
    pub fn submit_blocking(&mut self, keyboard_report: &KeyboardReport) -> bool {
        loop {
            match self.hid.push_input(keyboard_report) {
                Err(UsbError::WouldBlock) => {
                    self.poll();
                }
                Ok(_) => {
                    break true;
                }
                Err(_) => {
                    break false;
                }
            }
        }
    }

    #[inline]
    pub fn poll(&mut self) -> bool {
        self.dev.poll(&mut [&mut self.hid])
    }

    fn submit_update(&mut self, update: Update) {
        let sent = match update {
            Update::Unchanged => true,
            Update::Send(report) => self.submit_blocking(&report),
            Update::Retap { lifted, pressed } => {
                self.submit_blocking(&lifted) && self.submit_blocking(&pressed)
            }
        };
        if !sent {
            warn!("HID report lost");
        }
    }
}

impl<B: UsbBus> KeySink for HidKeyboard<'_, B> {
    fn press(&mut self, key: char) {
        let update = self.state.press(key);
        self.submit_update(update);
    }

    fn release(&mut self, key: char) {
        let update = self.state.release(key);
        self.submit_update(update);
    }

    fn release_all(&mut self) {
        let update = self.state.release_all();
        self.submit_update(update);
    }
}
