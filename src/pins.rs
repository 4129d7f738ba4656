/// Logical signal table for the Asset Tracker.
///
/// Every hardware function on the carrier has a stable logical name here,
/// resolved against the active processor board's pad table. The set of
/// names never changes with the selected features; only the resolved
/// values do. Signals that the selected board/revision combination cannot
/// route resolve to `UNSUPPORTED`.
///
/// Carrier wiring notes that firmware must respect:
/// - ESP32: G1 and G2 double as the PDM microphone clock/data lines. Using
///   the microphone requires opening the G1/SD_PWR and G2/LTE_PWR split
///   pads, after which both power enables default to on.
/// - ESP32: G3 and G4 double as the audio-out/audio-in lines (TX1/RX1).
///   The G3/IMU_PWR and G4/RI split pads isolate them; IMU power then
///   defaults to on.
/// - SAMD51: the SARA's 2-UART pins are shared with I2C_SCL1/SDA1 behind
///   the SARA_SCL/SARA_SDA split pads, so they stay unsupported here.
use serde::Serialize;

use crate::board;

/// Native pin number on the active processor board.
pub type PinId = i32;

/// Sentinel for a signal with no valid pin on the active board/revision.
pub const UNSUPPORTED: PinId = -1;

/// Whether a resolved pin is usable (not the `UNSUPPORTED` sentinel).
pub const fn is_supported(pin: PinId) -> bool {
    pin >= 0
}

// ── Carrier-revision routing ───────────────────────────────────────────

#[cfg(feature = "carrier-r1")]
mod routing {
    use crate::board;
    use crate::pins::{PinId, UNSUPPORTED};

    pub const CARRIER_REV: &str = "r1";

    pub const SARA_ON: PinId = board::G9;
    pub const SARA_ON_ALT: PinId = board::G10;
    pub const ANT_PWR_EN: PinId = board::G6;

    // Revision 1 carriers do not route the second-UART level shifter, so
    // the SARA's 2-UART mode is unavailable regardless of processor board.
    pub const SARA_RTS: PinId = UNSUPPORTED;
    pub const SARA_CTS: PinId = UNSUPPORTED;
    pub const SARA_DTR: PinId = UNSUPPORTED;
    pub const SARA_DCD: PinId = UNSUPPORTED;
}

#[cfg(feature = "carrier-r2")]
mod routing {
    use crate::board;
    use crate::pins::{PinId, UNSUPPORTED};

    pub const CARRIER_REV: &str = "r2";

    // Revision 2 moved SARA_ON from G9 to G6, dropping the alternate route
    // and the switchable antenna power in the process.
    pub const SARA_ON: PinId = board::G6;
    pub const SARA_ON_ALT: PinId = UNSUPPORTED;
    pub const ANT_PWR_EN: PinId = UNSUPPORTED;

    pub const SARA_RTS: PinId = board::RTS1;
    pub const SARA_CTS: PinId = board::CTS1;
    pub const SARA_DTR: PinId = board::TX2;
    pub const SARA_DCD: PinId = board::RX2;
}

#[cfg(not(any(feature = "carrier-r1", feature = "carrier-r2")))]
compile_error!(
    "No carrier revision selected. Enable exactly one of: `carrier-r1`, `carrier-r2`."
);

/// Carrier hardware revision the routing below targets.
pub const CARRIER_REV: &str = routing::CARRIER_REV;

// ── Logical signals ────────────────────────────────────────────────────

/// External SPI chip select. Output, active low.
pub const EXT_SPI_CS: PinId = board::D0;

/// microSD card chip select. Output, active low.
pub const MICROSD_CS: PinId = board::G0;
/// Pull low to enable power for the microSD card, high to disable.
pub const MICROSD_PWR_EN: PinId = board::G1;
/// Pull high then low to switch the SARA-R5 on. Pull high for five seconds
/// then low again to switch it off.
pub const SARA_PWR: PinId = board::G2;
/// Pull high to enable power for the IMU, low to disable.
pub const IMU_PWR_EN: PinId = board::G3;
/// SARA-R5 ring indicator. Becomes CTS2 in 2-UART mode.
pub const SARA_RI: PinId = board::G4;
/// SARA-R5 EXT_INT interrupt.
pub const SARA_INT: PinId = board::G5;
/// Pulled low while the SARA-R5 is on, high while it is off. On G9 for
/// revision 1 carriers, G6 for revision 2.
pub const SARA_ON: PinId = routing::SARA_ON;
/// Alternate route for `SARA_ON` on revision 1 carriers (G10).
pub const SARA_ON_ALT: PinId = routing::SARA_ON_ALT;
/// Pull high to enable power for the GNSS active antenna. Revision 1
/// carriers only; revision 2 powers the antenna unconditionally.
pub const ANT_PWR_EN: PinId = routing::ANT_PWR_EN;
/// SARA-R5 DSR. Becomes RTS2 (an output) in 2-UART mode; the direction of
/// the 74AVC4T774 level shifter is chosen by a split pad.
pub const SARA_DSR: PinId = board::G7;

/// SARA-R5 RTS. Output.
pub const SARA_RTS: PinId = routing::SARA_RTS;
/// SARA-R5 CTS. Input.
pub const SARA_CTS: PinId = routing::SARA_CTS;
/// SARA-R5 DTR. Becomes TXD2 in 2-UART mode.
pub const SARA_DTR: PinId = routing::SARA_DTR;
/// SARA-R5 DCD. Becomes RXD2 in 2-UART mode.
pub const SARA_DCD: PinId = routing::SARA_DCD;

/// IMU interrupt.
pub const IMU_INT: PinId = board::I2CINT;
/// IMU SPI chip select. Output, active low.
pub const IMU_CS: PinId = board::CS;
/// VIN supply voltage divided by 3. Analog input.
pub const VIN_DIV_3: PinId = board::BATTVIN3;

/// Whether the SARA's 2-UART mode is usable: all four extra UART signals
/// must have valid pins. True only for nano33ble on a revision 2 carrier.
pub const SARA_2UART_SUPPORTED: bool = is_supported(SARA_RTS)
    && is_supported(SARA_CTS)
    && is_supported(SARA_DTR)
    && is_supported(SARA_DCD);

// ── Descriptor table ───────────────────────────────────────────────────

/// Electrical direction of a signal as seen from the processor board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Input,
    Output,
    Analog,
}

/// One logical signal and its resolution on the active board/revision.
#[derive(Debug, Clone, Serialize)]
pub struct SignalDef {
    pub name: &'static str,
    pub pin: PinId,
    pub dir: Direction,
    pub description: &'static str,
}

/// Every logical signal the carrier defines, in a fixed order that does
/// not depend on the selected features.
pub static SIGNALS: &[SignalDef] = &[
    SignalDef {
        name: "EXT_SPI_CS",
        pin: EXT_SPI_CS,
        dir: Direction::Output,
        description: "External SPI chip select (active low)",
    },
    SignalDef {
        name: "MICROSD_CS",
        pin: MICROSD_CS,
        dir: Direction::Output,
        description: "microSD card chip select (active low)",
    },
    SignalDef {
        name: "MICROSD_PWR_EN",
        pin: MICROSD_PWR_EN,
        dir: Direction::Output,
        description: "microSD card power enable (active low)",
    },
    SignalDef {
        name: "SARA_PWR",
        pin: SARA_PWR,
        dir: Direction::Output,
        description: "SARA-R5 power toggle",
    },
    SignalDef {
        name: "IMU_PWR_EN",
        pin: IMU_PWR_EN,
        dir: Direction::Output,
        description: "IMU power enable (active high)",
    },
    SignalDef {
        name: "SARA_RI",
        pin: SARA_RI,
        dir: Direction::Input,
        description: "SARA-R5 ring indicator (CTS2 in 2-UART mode)",
    },
    SignalDef {
        name: "SARA_INT",
        pin: SARA_INT,
        dir: Direction::Input,
        description: "SARA-R5 EXT_INT interrupt",
    },
    SignalDef {
        name: "SARA_ON",
        pin: SARA_ON,
        dir: Direction::Input,
        description: "Low while the SARA-R5 is on",
    },
    SignalDef {
        name: "SARA_ON_ALT",
        pin: SARA_ON_ALT,
        dir: Direction::Input,
        description: "Alternate SARA_ON route (revision 1 carriers)",
    },
    SignalDef {
        name: "ANT_PWR_EN",
        pin: ANT_PWR_EN,
        dir: Direction::Output,
        description: "GNSS antenna power enable (revision 1 carriers)",
    },
    SignalDef {
        name: "SARA_DSR",
        pin: SARA_DSR,
        dir: Direction::Input,
        description: "SARA-R5 DSR (RTS2 in 2-UART mode)",
    },
    SignalDef {
        name: "SARA_RTS",
        pin: SARA_RTS,
        dir: Direction::Output,
        description: "SARA-R5 RTS",
    },
    SignalDef {
        name: "SARA_CTS",
        pin: SARA_CTS,
        dir: Direction::Input,
        description: "SARA-R5 CTS",
    },
    SignalDef {
        name: "SARA_DTR",
        pin: SARA_DTR,
        dir: Direction::Output,
        description: "SARA-R5 DTR (TXD2 in 2-UART mode)",
    },
    SignalDef {
        name: "SARA_DCD",
        pin: SARA_DCD,
        dir: Direction::Input,
        description: "SARA-R5 DCD (RXD2 in 2-UART mode)",
    },
    SignalDef {
        name: "IMU_INT",
        pin: IMU_INT,
        dir: Direction::Input,
        description: "IMU interrupt",
    },
    SignalDef {
        name: "IMU_CS",
        pin: IMU_CS,
        dir: Direction::Output,
        description: "IMU SPI chip select (active low)",
    },
    SignalDef {
        name: "VIN_DIV_3",
        pin: VIN_DIV_3,
        dir: Direction::Analog,
        description: "VIN supply voltage divided by 3",
    },
];

/// Look up a signal descriptor by its logical name.
pub fn lookup(name: &str) -> Option<&'static SignalDef> {
    SIGNALS.iter().find(|s| s.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The full vocabulary, independent of any feature selection.
    const ALL_NAMES: [&str; 18] = [
        "EXT_SPI_CS",
        "MICROSD_CS",
        "MICROSD_PWR_EN",
        "SARA_PWR",
        "IMU_PWR_EN",
        "SARA_RI",
        "SARA_INT",
        "SARA_ON",
        "SARA_ON_ALT",
        "ANT_PWR_EN",
        "SARA_DSR",
        "SARA_RTS",
        "SARA_CTS",
        "SARA_DTR",
        "SARA_DCD",
        "IMU_INT",
        "IMU_CS",
        "VIN_DIV_3",
    ];

    #[test]
    fn table_exposes_every_signal_name() {
        assert_eq!(SIGNALS.len(), ALL_NAMES.len());
        for name in ALL_NAMES {
            assert!(lookup(name).is_some(), "missing signal {name}");
        }
    }

    #[test]
    fn every_signal_resolves_or_is_explicitly_unsupported() {
        for sig in SIGNALS {
            assert!(
                sig.pin == UNSUPPORTED || sig.pin >= 0,
                "{} resolved to a nonsense value {}",
                sig.name,
                sig.pin
            );
        }
    }

    #[test]
    fn table_matches_exported_constants() {
        assert_eq!(lookup("SARA_ON").unwrap().pin, SARA_ON);
        assert_eq!(lookup("SARA_DSR").unwrap().pin, SARA_DSR);
        assert_eq!(lookup("IMU_CS").unwrap().pin, IMU_CS);
        assert_eq!(lookup("VIN_DIV_3").unwrap().pin, VIN_DIV_3);
    }

    #[test]
    fn lookup_rejects_unknown_names() {
        assert!(lookup("SARA_NONSENSE").is_none());
    }

    #[test]
    fn two_uart_flag_matches_its_pins() {
        let all_routed = [SARA_RTS, SARA_CTS, SARA_DTR, SARA_DCD]
            .iter()
            .all(|&p| is_supported(p));
        assert_eq!(SARA_2UART_SUPPORTED, all_routed);
    }

    #[test]
    fn signal_def_serializes() {
        let sig = lookup("SARA_INT").unwrap();
        let mut buf = [0u8; 256];
        let len = serde_json_core::to_slice(sig, &mut buf).unwrap();
        let json = core::str::from_utf8(&buf[..len]).unwrap();
        assert!(json.contains(r#""name":"SARA_INT""#));
        assert!(json.contains(r#""dir":"Input""#));
    }

    // ── Scenario checks per board/revision ─────────────────────────

    #[cfg(all(feature = "samd51", feature = "carrier-r2"))]
    #[test]
    fn samd51_r2_sara_on_moved_to_g6() {
        assert_eq!(SARA_ON, 8); // pad G6
        assert!(!is_supported(SARA_ON_ALT));
        assert!(!is_supported(ANT_PWR_EN));
    }

    #[cfg(feature = "esp32")]
    #[test]
    fn esp32_dsr_is_unsupported() {
        assert_eq!(SARA_DSR, UNSUPPORTED); // pad G7 is not connected
    }

    #[cfg(feature = "stm32")]
    #[test]
    fn stm32_dsr_is_unsupported() {
        assert_eq!(SARA_DSR, UNSUPPORTED);
    }

    #[cfg(all(feature = "nano33ble", feature = "carrier-r2"))]
    #[test]
    fn nano33ble_r2_declares_full_second_uart() {
        for name in ["SARA_RTS", "SARA_CTS", "SARA_DTR", "SARA_DCD"] {
            assert!(is_supported(lookup(name).unwrap().pin), "{name} unrouted");
        }
        assert!(SARA_2UART_SUPPORTED);
    }

    #[cfg(not(all(feature = "nano33ble", feature = "carrier-r2")))]
    #[test]
    fn second_uart_unsupported_elsewhere() {
        assert!(!SARA_2UART_SUPPORTED);
    }

    #[cfg(feature = "carrier-r1")]
    #[test]
    fn r1_routes_sara_on_via_g9() {
        assert_eq!(SARA_ON, crate::board::G9);
        assert_eq!(SARA_ON_ALT, crate::board::G10);
        assert_eq!(ANT_PWR_EN, crate::board::G6);
    }

    #[cfg(feature = "carrier-r2")]
    #[test]
    fn r2_routes_sara_on_via_g6() {
        assert_eq!(SARA_ON, crate::board::G6);
    }
}
