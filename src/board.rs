/// Processor-board pad tables.
///
/// Each module maps the MicroMod pad names used by the Asset Tracker
/// (G0..G10, D0, I2CINT, CS, BATTVIN3, and the UART pads) to the native
/// pin numbers of one processor board, selected at compile time via
/// feature flags. Pads that are not routed on a given processor board
/// carry the `UNSUPPORTED` sentinel so downstream code can detect the
/// gap instead of driving a wrong pin.

#[cfg(feature = "artemis")]
mod hw {
    use crate::pins::{PinId, UNSUPPORTED};

    pub const BOARD_NAME: &str = "artemis";

    pub const D0: PinId = 0;
    pub const G0: PinId = 16;
    pub const G1: PinId = 33;
    pub const G2: PinId = 34;
    pub const G3: PinId = 27;
    pub const G4: PinId = 28;
    pub const G5: PinId = 29;
    pub const G6: PinId = 14;
    pub const G7: PinId = 15;
    pub const G9: PinId = 10;
    pub const G10: PinId = 9;
    pub const I2CINT: PinId = 2;
    pub const CS: PinId = 1;
    pub const BATTVIN3: PinId = 31;

    // The Apollo3 core enables RTS/CTS hardware handshaking on UART1
    // itself, so the pads are deliberately not exposed here. TX2/RX2 are
    // not routed, which rules out the SARA's 2-UART mode.
    pub const RTS1: PinId = UNSUPPORTED;
    pub const CTS1: PinId = UNSUPPORTED;
    pub const TX2: PinId = UNSUPPORTED;
    pub const RX2: PinId = UNSUPPORTED;

    pub const HAS_HW_FLOW_CONTROL: bool = true;
}

#[cfg(feature = "samd51")]
mod hw {
    use crate::pins::{PinId, UNSUPPORTED};

    pub const BOARD_NAME: &str = "samd51";

    pub const D0: PinId = 0;
    pub const G0: PinId = 2;
    pub const G1: PinId = 3;
    pub const G2: PinId = 4;
    pub const G3: PinId = 5;
    pub const G4: PinId = 6;
    pub const G5: PinId = 7;
    pub const G6: PinId = 8;
    pub const G7: PinId = 9;
    pub const G9: PinId = 11;
    pub const G10: PinId = UNSUPPORTED; // not connected on the SAMD51
    pub const I2CINT: PinId = 12;
    pub const CS: PinId = 48;
    pub const BATTVIN3: PinId = 18; // A4

    // TX2/RX2 exist on the SAMD51 but share pins with I2C_SCL1/SDA1; the
    // carrier only routes them through the SARA_SCL/SARA_SDA split pads,
    // so the table leaves them unsupported.
    pub const RTS1: PinId = UNSUPPORTED;
    pub const CTS1: PinId = UNSUPPORTED;
    pub const TX2: PinId = UNSUPPORTED;
    pub const RX2: PinId = UNSUPPORTED;

    pub const HAS_HW_FLOW_CONTROL: bool = false;
}

#[cfg(feature = "esp32")]
mod hw {
    use crate::pins::{PinId, UNSUPPORTED};

    pub const BOARD_NAME: &str = "esp32";

    pub const D0: PinId = 14;
    pub const G0: PinId = 32;
    pub const G1: PinId = 33;
    pub const G2: PinId = 26;
    pub const G3: PinId = 25;
    pub const G4: PinId = 27;
    pub const G5: PinId = 12;
    pub const G6: PinId = 13;
    pub const G7: PinId = UNSUPPORTED; // not connected
    pub const G9: PinId = UNSUPPORTED; // not connected
    pub const G10: PinId = UNSUPPORTED; // not connected
    pub const I2CINT: PinId = 4; // I2C_INT
    pub const CS: PinId = 5; // SS
    pub const BATTVIN3: PinId = 39; // BATT_VIN

    pub const RTS1: PinId = UNSUPPORTED;
    pub const CTS1: PinId = UNSUPPORTED;
    pub const TX2: PinId = UNSUPPORTED;
    pub const RX2: PinId = UNSUPPORTED;

    pub const HAS_HW_FLOW_CONTROL: bool = false;
}

#[cfg(feature = "nano33ble")]
mod hw {
    use crate::pins::PinId;

    pub const BOARD_NAME: &str = "nano33ble";

    pub const D0: PinId = 27;
    pub const G0: PinId = 29;
    pub const G1: PinId = 44;
    pub const G2: PinId = 45;
    pub const G3: PinId = 46;
    pub const G4: PinId = 47;
    pub const G5: PinId = 42;
    pub const G6: PinId = 43;
    pub const G7: PinId = 11;
    pub const G9: PinId = 35;
    pub const G10: PinId = 36;
    pub const I2CINT: PinId = 15; // PIN_WIRE_INT
    pub const CS: PinId = 2; // SS
    pub const BATTVIN3: PinId = 5;

    // Only processor board with dedicated second-UART pads, enabling the
    // SARA's 2-UART mode on carrier revisions that route them.
    pub const RTS1: PinId = 33; // PIN_SERIAL_RTS1
    pub const CTS1: PinId = 34; // PIN_SERIAL_CTS1
    pub const TX2: PinId = 37; // PIN_SERIAL_TX2
    pub const RX2: PinId = 38; // PIN_SERIAL_RX2

    pub const HAS_HW_FLOW_CONTROL: bool = false;
}

#[cfg(feature = "stm32")]
mod hw {
    use crate::pins::{PinId, UNSUPPORTED};

    pub const BOARD_NAME: &str = "stm32";

    pub const D0: PinId = 0;
    pub const G0: PinId = 25;
    pub const G1: PinId = 26;
    pub const G2: PinId = 27;
    pub const G3: PinId = 28;
    pub const G4: PinId = 29;
    pub const G5: PinId = 30;
    pub const G6: PinId = 31;
    pub const G7: PinId = UNSUPPORTED; // not connected
    pub const G9: PinId = 32;
    pub const G10: PinId = 33;
    pub const I2CINT: PinId = 38; // INT
    pub const CS: PinId = 10; // PIN_SPI_SS
    pub const BATTVIN3: PinId = 2; // A2 == PA_1

    // The STM32 core does not route Serial1 to the MicroMod UART1 pads by
    // default; `ports::SARA_SERIAL_PIN_REMAP` carries the override.
    pub const RX1: PinId = 7;
    pub const TX1: PinId = 8;

    pub const RTS1: PinId = UNSUPPORTED;
    pub const CTS1: PinId = UNSUPPORTED;
    pub const TX2: PinId = UNSUPPORTED;
    pub const RX2: PinId = UNSUPPORTED;

    pub const HAS_HW_FLOW_CONTROL: bool = false;
}

#[cfg(not(any(
    feature = "artemis",
    feature = "samd51",
    feature = "esp32",
    feature = "nano33ble",
    feature = "stm32"
)))]
compile_error!(
    "No processor board selected. Enable exactly one of: `artemis`, `samd51`, `esp32`, `nano33ble`, `stm32`."
);

#[cfg(all(feature = "stm32", feature = "carrier-r1"))]
compile_error!("The STM32 processor board is only supported by carrier revision 2 (`carrier-r2`).");

pub use hw::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pins::is_supported;

    #[test]
    fn board_name_is_set() {
        assert!(!BOARD_NAME.is_empty());
    }

    #[test]
    fn primary_pads_are_routed_everywhere() {
        // G0..G5 and the SPI/I2C/analog pads exist on every supported
        // processor board.
        for pad in [D0, G0, G1, G2, G3, G4, G5, I2CINT, CS, BATTVIN3] {
            assert!(is_supported(pad), "pad unexpectedly unsupported on {}", BOARD_NAME);
        }
    }

    #[cfg(feature = "samd51")]
    #[test]
    fn samd51_pad_numbers() {
        assert_eq!(D0, 0);
        assert_eq!(G0, 2);
        assert_eq!(G6, 8);
        assert_eq!(G7, 9);
        assert_eq!(G9, 11);
        assert_eq!(I2CINT, 12);
        assert_eq!(CS, 48);
        assert!(!is_supported(G10));
    }

    #[cfg(feature = "esp32")]
    #[test]
    fn esp32_unrouted_pads() {
        assert!(!is_supported(G7));
        assert!(!is_supported(G9));
        assert!(!is_supported(G10));
    }

    #[cfg(feature = "nano33ble")]
    #[test]
    fn nano33ble_routes_second_uart_pads() {
        for pad in [RTS1, CTS1, TX2, RX2] {
            assert!(is_supported(pad));
        }
    }

    #[cfg(feature = "artemis")]
    #[test]
    fn artemis_owns_flow_control() {
        assert!(HAS_HW_FLOW_CONTROL);
        assert!(!is_supported(RTS1));
        assert!(!is_supported(CTS1));
    }
}
