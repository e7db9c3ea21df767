//! Rudderlink - rudder position telemetry over a serial link
//!
//! Firmware for the Raspberry Pi Pico. Each board runs both halves of the
//! link: the local node samples the rudder potentiometer and streams its
//! normalized position over UART0, and the remote node decodes the stream
//! and draws it on the OLED.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use embassy_sync::mutex::Mutex;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use rudderlink_core::rudder::LocalRudder;
use rudderlink_hal_rp2040::{uart_config, Button, Led, PotInput, SerialTx};

use crate::channels::SharedRudder;
use crate::ssd1306::Ssd1306;

mod channels;
mod config;
mod ssd1306;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

static RUDDER: StaticCell<SharedRudder> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Rudderlink firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();

    // Serial link: UART0, TX=GPIO0, RX=GPIO1
    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 256]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config(&config.uart()));
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    info!("UART0 initialized at {} baud", config.serial.baudrate);

    // Rudder potentiometer on ADC1 (GPIO27)
    let adc = Adc::new_blocking(p.ADC, adc::Config::default());
    let pot_channel = Channel::new_pin(p.PIN_27, Pull::None);
    let pot = PotInput::new(adc, pot_channel);

    let rudder = match LocalRudder::from_config(pot, &config) {
        Ok(rudder) => rudder,
        Err(e) => {
            // config::load only returns validated configs
            defmt::panic!("invalid rudder configuration: {}", e);
        }
    };
    let rudder: &'static SharedRudder = RUDDER.init(Mutex::new(rudder));

    // Calibration button, active high
    let button = Button::new(Input::new(p.PIN_19, Pull::Down));

    // On-board LED for the transmit blink
    let led = Led::new(Output::new(p.PIN_25, Level::Low));

    // OLED on I2C1: SDA=GPIO10, SCL=GPIO11
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = 400_000;
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_11, p.PIN_10, i2c_config);
    let mut display = Ssd1306::new(i2c);
    if let Err(e) = display.init() {
        warn!("OLED init failed: {:?}", Debug2Format(&e));
    }
    info!("OLED initialized");

    info!("Spawning tasks...");
    spawner.spawn(tasks::blink_task(led)).unwrap();
    spawner
        .spawn(tasks::transmitter_task(rudder, SerialTx::new(tx), config.timing))
        .unwrap();
    spawner
        .spawn(tasks::receiver_task(rx, config))
        .unwrap();
    spawner
        .spawn(tasks::panel_task(
            rudder,
            button,
            display,
            config.rudder.gesture,
            config.travel(),
        ))
        .unwrap();

    info!("All tasks spawned");
}
