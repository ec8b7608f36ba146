//! STM32F103 Blue Pill serial glyph dispatcher
//! =============================================================================================
//!
//! Receives single characters over UART1 and shows each one on an SSD1306
//! OLED. Digits are also drawn as a 5x5 glyph on a WS2812 matrix. Two
//! buttons toggle a green and a blue LED, reporting the new state on the
//! OLED.
//!
//! Hardware Connections:
//!   OLED Display -> Blue Pill
//!      GND  -> GND
//!      VCC  -> 5V
//!      SDA  -> PB7 (I2C1)
//!      SCL  -> PB6 (I2C1)
//!
//!   USB-serial adapter:
//!      TX   -> PA10 (USART1 RX)
//!      RX   -> PA9  (USART1 TX)
//!
//!   WS2812 5x5 matrix:
//!      DIN  -> PA7 (SPI1 MOSI)
//!
//!   Button A -> PB12 (to GND, internal pull-up)   Green LED -> PB0
//!   Button B -> PB13 (to GND, internal pull-up)   Blue LED  -> PB1
//!
//! Run with `cargo firmware`.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_stm32::{
    bind_interrupts,
    exti::ExtiInput,
    gpio::{Level, Output, Pull, Speed},
    i2c, peripherals,
    spi::{self, Spi},
    time::Hertz,
    usart::{self, BufferedUart},
};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use glyph_dispatch::{
    config::{OLED_I2C_KHZ, UART_BAUD, WS2812_SPI_HZ},
    event_loop::{EventLoop, PressChannel, PressSender},
    hardware::{
        gpio_button::GpioButton, gpio_led::GpioLed, led_matrix::LedMatrix5x5, oled::OledDisplay,
        uart_serial::UartSerial, ws2812_spi::Ws2812Spi,
    },
    indicator::Indicator,
    render::RenderDispatcher,
};

// Button tasks -> event loop
static PRESSES: PressChannel = PressChannel::new();

static UART_TX_BUF: StaticCell<[u8; 16]> = StaticCell::new();
static UART_RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

bind_interrupts!(struct Irqs {
    USART1 => usart::BufferedInterruptHandler<peripherals::USART1>;
    I2C1_EV => i2c::EventInterruptHandler<peripherals::I2C1>;
    I2C1_ER => i2c::ErrorInterruptHandler<peripherals::I2C1>;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    // HSE 8MHz -> PLL x9 -> 72MHz, APB2 at full speed for SPI1
    let mut config = embassy_stm32::Config::default();
    {
        use embassy_stm32::rcc::*;
        config.rcc.hse = Some(Hse {
            freq: Hertz(8_000_000),
            mode: HseMode::Oscillator,
        });
        config.rcc.pll = Some(Pll {
            src: PllSource::HSE,
            prediv: PllPreDiv::DIV1,
            mul: PllMul::MUL9,
        });
        config.rcc.sys = Sysclk::PLL1_P;
        config.rcc.ahb_pre = AHBPrescaler::DIV1;
        config.rcc.apb1_pre = APBPrescaler::DIV2;
        config.rcc.apb2_pre = APBPrescaler::DIV1;
    }
    let p = embassy_stm32::init(config);

    // UART1 at 115200 8N1
    let mut uart_config = usart::Config::default();
    uart_config.baudrate = UART_BAUD;
    let uart = BufferedUart::new(
        p.USART1,
        Irqs,
        p.PA10,
        p.PA9,
        UART_TX_BUF.init([0; 16]),
        UART_RX_BUF.init([0; 64]),
        uart_config,
    )
    .unwrap();
    let (_uart_tx, uart_rx) = uart.split();
    let serial = UartSerial::new(uart_rx);

    // OLED on I2C1
    #[cfg(feature = "async")]
    let oled_i2c = i2c::I2c::new(
        p.I2C1,
        p.PB6,
        p.PB7,
        Irqs,
        p.DMA1_CH6,
        p.DMA1_CH7,
        Hertz::khz(OLED_I2C_KHZ),
        Default::default(),
    );
    #[cfg(not(feature = "async"))]
    let oled_i2c = i2c::I2c::new_blocking(
        p.I2C1,
        p.PB6,
        p.PB7,
        Hertz::khz(OLED_I2C_KHZ),
        Default::default(),
    );
    let display = OledDisplay::new(oled_i2c).unwrap();

    // WS2812 data out of SPI1 MOSI, no clock pin needed
    let mut spi_config = spi::Config::default();
    spi_config.frequency = Hertz(WS2812_SPI_HZ);
    let spi = Spi::new_blocking_txonly_nosck(p.SPI1, p.PA7, spi_config);
    let matrix = LedMatrix5x5::new(Ws2812Spi::new(spi));

    let green = GpioLed::new(Output::new(p.PB0, Level::Low, Speed::Low));
    let blue = GpioLed::new(Output::new(p.PB1, Level::Low, Speed::Low));

    let button_a = GpioButton::new(ExtiInput::new(p.PB12, p.EXTI12, Pull::Up), Indicator::Green);
    let button_b = GpioButton::new(ExtiInput::new(p.PB13, p.EXTI13, Pull::Up), Indicator::Blue);
    spawner
        .spawn(button_task(button_a, PRESSES.sender()))
        .unwrap();
    spawner
        .spawn(button_task(button_b, PRESSES.sender()))
        .unwrap();

    let mut event_loop = EventLoop::new(
        serial,
        display,
        matrix,
        green,
        blue,
        PRESSES.receiver(),
        RenderDispatcher::default(),
    );
    event_loop.init().unwrap();
    info!("peripherals up");

    let Err(err) = event_loop.run().await;
    defmt::panic!("peripheral failure: {}", err);
}

/// Button Edge Task
///
/// Waits for falling edges and queues a timestamped press. Debouncing and
/// every render happen in the event loop.
#[embassy_executor::task(pool_size = 2)]
async fn button_task(
    mut button: GpioButton<ExtiInput<'static>>,
    presses: PressSender<'static>,
) {
    loop {
        let Ok(press) = button.wait_for_press().await;
        defmt::trace!("edge on {}", press.indicator);
        presses.send(press).await;
    }
}
