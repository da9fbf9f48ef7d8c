//! SSD1306 OLED Display Driver
//!
//! Driver for 128x64 SSD1306-based OLED displays via async I2C. Uses
//! horizontal addressing so a whole page-ordered frame goes out in one
//! transfer, during which the executor is free to run other tasks.

use embedded_hal_async::i2c::I2c;
use joyglow_core::display::{FrameBuffer, BUFFER_SIZE, HEIGHT, PAGES, WIDTH};
use joyglow_core::traits::FrameSink;

/// Control byte prefixing a command
const CONTROL_COMMAND: u8 = 0x00;
/// Control byte prefixing display RAM data
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_COLUMN_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const ENTIRE_DISPLAY_RESUME: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
}

/// Horizontal addressing mode argument for SET_MEMORY_MODE
const HORIZONTAL_ADDRESSING: u8 = 0x00;

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
    /// Data control byte followed by one frame
    tx: [u8; BUFFER_SIZE + 1],
}

impl<I2C> Ssd1306<I2C>
where
    I2C: I2c,
{
    /// Create a new SSD1306 driver at the given 7-bit address
    pub fn new(i2c: I2C, address: u8) -> Self {
        let mut tx = [0; BUFFER_SIZE + 1];
        tx[0] = CONTROL_DATA;
        Self { i2c, address, tx }
    }

    /// Initialize the display
    pub async fn init(&mut self) -> Result<(), I2C::Error> {
        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_MEMORY_MODE,
            HORIZONTAL_ADDRESSING,
            cmd::SET_START_LINE | 0x00,
            cmd::SET_SEG_REMAP,    // Column 127 mapped to SEG0
            cmd::SET_MUX_RATIO,
            (HEIGHT - 1) as u8,
            cmd::SET_COM_SCAN_DEC, // Scan from COM[N-1] to COM0
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_COM_PINS,
            0x12, // Alternative COM config, no remap
            cmd::SET_CLOCK_DIV,
            0x80, // Default clock
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x30,
            cmd::SET_CONTRAST,
            0xFF,
            cmd::ENTIRE_DISPLAY_RESUME,
            cmd::SET_NORMAL,
            cmd::SET_CHARGE_PUMP,
            0x14, // Enable charge pump
            cmd::DISPLAY_ON,
        ];

        self.commands(init_cmds).await
    }

    /// Send a command to the display
    async fn command(&mut self, cmd: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[CONTROL_COMMAND, cmd]).await
    }

    async fn commands(&mut self, cmds: &[u8]) -> Result<(), I2C::Error> {
        for &c in cmds {
            self.command(c).await?;
        }
        Ok(())
    }

    /// Write a full frame to display RAM
    ///
    /// Resets the column and page window to the whole panel, then streams
    /// all pages in a single addressed write.
    pub async fn write_frame(&mut self, frame: &FrameBuffer) -> Result<(), I2C::Error> {
        self.commands(&[
            cmd::SET_COLUMN_ADDR,
            0,
            (WIDTH - 1) as u8,
            cmd::SET_PAGE_ADDR,
            0,
            (PAGES - 1) as u8,
        ])
        .await?;

        self.tx[1..].copy_from_slice(frame.as_bytes());
        self.i2c.write(self.address, &self.tx).await
    }

    /// Release the underlying bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> FrameSink for Ssd1306<I2C> {
    type Error = I2C::Error;

    async fn flush(&mut self, frame: &FrameBuffer) -> Result<(), Self::Error> {
        self.write_frame(frame).await
    }
}
