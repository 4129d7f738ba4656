//! Pin and port definitions for the MicroMod Asset Tracker.
//!
//! The Asset Tracker is a carrier board that accepts any MicroMod processor
//! board. Firmware refers to every hardware function by a stable logical
//! signal name (`SARA_PWR`, `IMU_INT`, `MICROSD_CS`, ...) and this crate
//! resolves each name to the native pin number of whichever processor board
//! is selected at compile time. Recompiling with a different board feature
//! changes the numbers, never the names.
//!
//! Selection is two-axis:
//! - a **processor board** feature (`artemis`, `samd51`, `esp32`,
//!   `nano33ble`, `stm32`) picks the MicroMod pad → native pin table;
//! - a **carrier revision** feature (`carrier-r1`, `carrier-r2`) picks the
//!   logical signal → pad routing, since the two carrier hardware revisions
//!   moved a handful of signals (most notably `SARA_ON`, from G9 to G6).
//!
//! Signals with no valid route on the selected combination resolve to the
//! explicit [`pins::UNSUPPORTED`] sentinel rather than a plausible-looking
//! wrong pin. Building with no board or no revision selected is a compile
//! error. The crate is pure data — `no_std`, no allocator, no hardware
//! access — and the whole table is testable on any host with `cargo test`.

#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod check;
pub mod pins;
pub mod ports;
