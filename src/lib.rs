//! # PAC for the DDR PHY of the BCM2708 SDRAM controller
//!
//! This crate provides the peripheral access API for the data-path front-end
//! register blocks of the SDRAM controller's DDR PHY. The register map is
//! transcribed from the generated register description of the chip database,
//! with all addresses, field masks, field widths and reset values kept
//! bit-exact.
//!
//! Only the register layer is provided here. Calibration and training logic
//! belongs into a HAL built on top of this crate.
#![no_std]

pub mod dq_front;

pub use dq_front::{DqFrontEnd, MmioDqFrontEnd};
