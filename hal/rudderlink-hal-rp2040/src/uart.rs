//! Buffered UART transmitter
//!
//! UART0: GPIO 0/1, 12/13, 16/17
//! UART1: GPIO 4/5, 8/9, 20/21, 24/25

use embassy_rp::uart::{self, BufferedUartTx};
use embedded_io::Write;
use rudderlink_hal::uart::{DataBits, Parity, StopBits};
use rudderlink_hal::{UartConfig, UartTx};

/// Translate the board-agnostic settings into embassy-rp's
pub fn uart_config(config: &UartConfig) -> uart::Config {
    let mut out = uart::Config::default();
    out.baudrate = config.baudrate;
    out.data_bits = match config.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
    };
    out.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    out.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    out
}

pub struct SerialTx {
    tx: BufferedUartTx,
}

impl SerialTx {
    pub fn new(tx: BufferedUartTx) -> Self {
        Self { tx }
    }
}

impl UartTx for SerialTx {
    type Error = uart::Error;

    /// Blocks only while the transmit ring buffer is full
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.tx.write_all(data)
    }
}
