//! # DQ data-path front-end of the DDR PHY.
//!
//! Control/status registers for the per-byte-lane DLLs, the read DQS gating
//! path, pad drive and PVT compensation control, and the CRC block of the
//! data integrity path.
use arbitrary_int::u28;

pub const DPHY_CSR_BASE_ADDR: usize = 0x7EE0_7000;

/// Implemented-bits mask of the CRC control register, as documented by the
/// register database.
///
/// The database documents a field width of 9 ([CRC_CTRL_WIDTH]) for this
/// register even though the mask only has 3 set bits. The mismatch is present
/// in the upstream register description and is kept as-is here.
pub const CRC_CTRL_MASK: u32 = 0x0000_0111;
/// Documented field width of the CRC control register. See [CRC_CTRL_MASK]
/// for a caveat on this value.
pub const CRC_CTRL_WIDTH: u32 = 9;
/// Reset value of the CRC control register.
pub const CRC_CTRL_RESET: u32 = 0;

/// Implemented-bits mask of the CRC data register.
pub const CRC_DATA_MASK: u32 = 0x0FFF_FFFF;
/// Documented field width of the CRC data register.
pub const CRC_DATA_WIDTH: u32 = 28;
/// Reset value of the CRC data register.
pub const CRC_DATA_RESET: u32 = 0;

#[bitbybit::bitfield(u32, default = 0x0, debug)]
pub struct CrcData {
    #[bits(0..=27, rw)]
    crc: u28,
}

/// DQ front-end control/status register block.
#[derive(derive_mmio::Mmio)]
#[repr(C)]
pub struct DqFrontEnd {
    /// Revision ID of the DQ front-end block.
    #[mmio(PureRead)]
    dq_rev_id: u32,
    glbl_dq_dll_reset: u32,
    glbl_dq_dll_recalibrate: u32,
    glbl_dq_dll_cntrl: u32,
    /// Phase load value for the global DQ DLL.
    glbl_dq_dll_phase_ld_vl: u32,
    /// Master DLL bypass enable.
    glbl_dq_mstr_dll_byp_en: u32,
    #[mmio(PureRead)]
    glbl_mstr_dll_lock_stat: u32,
    /// Slave DLL offset, one register per byte lane.
    slave_dll_offset: [u32; 4],
    /// Master DLL output, one register per byte lane.
    master_dll_output: [u32; 4],
    /// DQS gate control for normal operation.
    norm_read_dqs_gate_ctrl: u32,
    /// DQS gate control for the boot frequency range.
    boot_read_dqs_gate_ctrl: u32,
    phy_fifo_pntrs: u32,
    dq_phy_misc_ctrl: u32,
    dq_pad_drv_slew_ctrl: u32,
    dq_pad_misc_ctrl: u32,
    dq_pvt_comp_ctrl: u32,
    /// Override control for the PVT compensation cells.
    dq_pvt_comp_overrd_ctrl: u32,
    #[mmio(PureRead)]
    dq_pvt_comp_status: u32,
    dq_pvt_comp_debug: u32,
    dq_phy_read_ctrl: u32,
    #[mmio(PureRead)]
    dq_phy_read_status: u32,
    /// Scratchpad register.
    dq_spr_rw: u32,
    /// Read-only scratchpad registers.
    #[mmio(PureRead)]
    dq_spr1_ro: u32,
    #[mmio(PureRead)]
    dq_spr_ro: u32,

    _reserved0: [u32; 0x1E2],

    /// See [CRC_CTRL_MASK] for the documented field metadata of this
    /// register, including a mask/width inconsistency carried over from the
    /// register database.
    crc_ctrl: u32,
    crc_data: CrcData,
}

static_assertions::const_assert_eq!(core::mem::size_of::<DqFrontEnd>(), 0x808);

impl DqFrontEnd {
    /// Create a new DQ front-end MMIO instance for the block at address
    /// [DPHY_CSR_BASE_ADDR].
    ///
    /// # Safety
    ///
    /// This API can be used to potentially create a driver to the same peripheral structure
    /// from multiple threads. The user must ensure that concurrent accesses are safe and do not
    /// interfere with each other.
    pub const unsafe fn new_mmio_fixed() -> MmioDqFrontEnd<'static> {
        unsafe { Self::new_mmio_at(DPHY_CSR_BASE_ADDR) }
    }
}
