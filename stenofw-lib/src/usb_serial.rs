use core::borrow::BorrowMut;

use usb_device::bus::{UsbBus, UsbBusAllocator};
use usb_device::device::{StringDescriptors, UsbDevice, UsbDeviceBuilder, UsbVidPid};
use usb_device::prelude::BuilderError;
use usb_device::{LangID, UsbError};
use usbd_serial::SerialPort;

use crate::sink::ByteSink;

/// Chunk size matching the CDC bulk endpoint.
const CHUNK_LEN: usize = 16;

/// Stenography machine serial port over USB CDC-ACM, what Plover and
/// friends open for Gemini and TX Bolt.
pub struct UsbSerialSink<'a, B: UsbBus> {
    serial: SerialPort<'a, B>,
    dev: UsbDevice<'a, B>,
}

impl<'a, B: UsbBus> UsbSerialSink<'a, B> {
    /// # Errors
    /// The string descriptors don't fit the device
    pub fn new(
        usb_bus: &'a UsbBusAllocator<B>,
        vid_pid: UsbVidPid,
    ) -> Result<Self, BuilderError> {
        // Ordering here is extremely important, serial before device.
        let serial = SerialPort::new(usb_bus);
        let dev = UsbDeviceBuilder::new(usb_bus, vid_pid)
            .strings(&[StringDescriptors::new(LangID::EN)
                .manufacturer("StenoFW")
                .product("Steno serial")
                .serial_number("1")])?
            .device_class(usbd_serial::USB_CLASS_CDC)
            .build();
        Ok(Self { serial, dev })
    }

    /// Services the bus, call at least every 10ms when not sending.
    #[inline]
    pub fn poll(&mut self) -> bool {
        self.dev.poll(&mut [&mut self.serial])
    }
}

impl<B: UsbBus> ByteSink for UsbSerialSink<'_, B> {
    fn write_bytes(&mut self, bytes: &[u8]) {
        if serial_write_all(&mut self.serial, &mut self.dev, bytes).is_err() {
            warn!("USB serial write failed, dropped packet");
        }
    }
}

fn serial_write_all<B: UsbBus, B1: BorrowMut<[u8]>, B2: BorrowMut<[u8]>>(
    serial: &mut SerialPort<B, B1, B2>,
    dev: &mut UsbDevice<B>,
    buf: &[u8],
) -> Result<(), UsbError> {
    for chunk in buf.chunks(CHUNK_LEN) {
        let mut rem = chunk;
        while !rem.is_empty() {
            match serial.write(rem) {
                Ok(wrote) => {
                    rem = &rem[wrote..];
                }
                Err(UsbError::WouldBlock) => {
                    // Host hasn't drained the endpoint yet
                    dev.poll(&mut [&mut *serial]);
                }
                Err(e) => return Err(e),
            }
        }
    }
    match serial.flush() {
        Ok(()) | Err(UsbError::WouldBlock) => Ok(()),
        Err(e) => Err(e),
    }
}
