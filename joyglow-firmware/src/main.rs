//! joyglow - Joystick LED and OLED cursor firmware
//!
//! Main firmware binary for RP2040 boards with a two-axis analog joystick,
//! two push buttons, an RGB LED and a 128x64 SSD1306 OLED.
//!
//! Joystick deflection dims the red (X) and blue (Y) LEDs and moves a
//! cursor block on the display. Button A toggles the LEDs; the joystick
//! button toggles a nested frame and the green LED.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c, InterruptHandler as I2cInterruptHandler};
use embassy_rp::peripherals::I2C1;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use fixed::types::U12F4;
use {defmt_rtt as _, panic_probe as _};

use joyglow_core::config::ControlConfig;
use joyglow_core::ControlLoop;
use joyglow_drivers::display::Ssd1306;
use joyglow_drivers::led::{GpioLed, PwmLedPair};

mod channels;
mod sampler;
mod tasks;

use crate::sampler::JoystickAdc;
use crate::tasks::ButtonInputs;

/// Board configuration (compiled into firmware)
const CONFIG: ControlConfig = ControlConfig::DEFAULT;

bind_interrupts!(struct Irqs {
    I2C1_IRQ => I2cInterruptHandler<I2C1>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("joyglow firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");
    debug!("Pin map: {}", CONFIG.pins);

    // Setup interrupt-driven I2C1 for the OLED (GPIO14=SDA, GPIO15=SCL)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = CONFIG.display.i2c_frequency_hz;
    let i2c = I2c::new_async(p.I2C1, p.PIN_15, p.PIN_14, Irqs, i2c_config);

    // Initialize OLED display
    let mut display = Ssd1306::new(i2c, CONFIG.display.address);
    if let Err(e) = display.init().await {
        error!("Failed to initialize display: {:?}", e);
    } else {
        info!("OLED initialized");
    }

    // Setup PWM slice 6 for the RGB LED (GPIO12=blue on A, GPIO13=red on B)
    let mut pwm_config = PwmConfig::default();
    pwm_config.divider = U12F4::from_num(CONFIG.pwm.clock_divider);
    pwm_config.top = CONFIG.pwm.wrap;
    pwm_config.compare_a = 0;
    pwm_config.compare_b = 0;
    let pwm = Pwm::new_output_ab(p.PWM_SLICE6, p.PIN_12, p.PIN_13, pwm_config);
    let (blue, red) = pwm.split();
    let leds = PwmLedPair::new(unwrap!(red), unwrap!(blue));

    info!(
        "PWM initialized: divider={}, wrap={}",
        CONFIG.pwm.clock_divider, CONFIG.pwm.wrap
    );

    // Setup ADC for the joystick (GPIO27=X on ADC1, GPIO26=Y on ADC0)
    let adc = Adc::new_blocking(p.ADC, adc::Config::default());
    let axis_x = Channel::new_pin(p.PIN_27, Pull::None);
    let axis_y = Channel::new_pin(p.PIN_26, Pull::None);
    let sampler = JoystickAdc::new(adc, axis_x, axis_y);

    info!("ADC initialized");

    // Buttons (pull-up, active-low) and green status LED
    let inputs = ButtonInputs {
        button_a: Input::new(p.PIN_5, Pull::Up),
        joystick: Input::new(p.PIN_22, Pull::Up),
        green: GpioLed::new(Output::new(p.PIN_11, Level::Low)),
    };

    let control = ControlLoop::new(sampler, leds, display, &CONFIG);

    // Spawn tasks
    unwrap!(spawner.spawn(tasks::button_task(
        inputs,
        CONFIG.debounce.window_us
    )));
    unwrap!(spawner.spawn(tasks::control_task(
        control,
        CONFIG.control_loop.period_ms
    )));

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
