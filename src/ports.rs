/// Peripheral bus assignments.
///
/// The carrier puts the microSD card and IMU on one shared SPI bus, the
/// SARA-R5 on the first hardware UART, and the Qwiic connector plus the
/// battery fuel gauge on the primary I2C bus. These assignments hold on
/// every processor board; only the STM32 needs its UART explicitly
/// remapped onto the MicroMod pads.
use serde::Serialize;

use crate::pins::PinId;

/// Handle to a communication peripheral instance on the processor board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BusHandle {
    Spi(u8),
    Uart(u8),
    I2c(u8),
}

/// SPI bus shared by the microSD card and the IMU.
pub const SD_AND_IMU_SPI: BusHandle = BusHandle::Spi(0);

/// UART connected to the SARA-R5.
pub const SARA_SERIAL: BusHandle = BusHandle::Uart(1);

/// I2C bus used by the Qwiic connector and the battery fuel gauge.
pub const AT_WIRE: BusHandle = BusHandle::I2c(0);

/// Explicit (rx, tx) pin remap for `SARA_SERIAL`, where the board's core
/// does not route the UART to the MicroMod pads on its own. Only the
/// STM32 needs this; everywhere else the default routing is correct.
#[cfg(feature = "stm32")]
pub const SARA_SERIAL_PIN_REMAP: Option<(PinId, PinId)> =
    Some((crate::board::RX1, crate::board::TX1));

#[cfg(not(feature = "stm32"))]
pub const SARA_SERIAL_PIN_REMAP: Option<(PinId, PinId)> = None;
