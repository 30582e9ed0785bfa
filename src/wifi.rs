//! Client-mode WiFi bring-up for the Pico W.
//!
//! Joins the network named by the `WIFI_SSID`/`WIFI_PASS` compile-time
//! environment (see `build.rs`), acquires a DHCP lease, and hands back the
//! network stack. Join failures retry forever; the clock keeps running on
//! the display regardless; only the status server and time sync wait on
//! this.

#![allow(clippy::future_not_send, reason = "single-threaded")]

use cyw43::{JoinOptions, aligned_bytes};
use cyw43_pio::{DEFAULT_CLOCK_DIVIDER, PioSpi};
use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_net::{Config, Stack, StackResources};
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::{DMA_CH0, DMA_CH1, PIN_23, PIN_24, PIN_25, PIN_29, PIO0};
use embassy_rp::pio::{InterruptHandler, Pio};
use embassy_rp::{Peri, bind_interrupts, dma};
use embassy_time::Timer;
use static_cell::StaticCell;

use crate::Result;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => InterruptHandler<PIO0>;
    DMA_IRQ_0 => dma::InterruptHandler<DMA_CH0>, dma::InterruptHandler<DMA_CH1>;
});

/// Network credentials injected at compile time.
const WIFI_SSID: &str = env!("WIFI_SSID");
const WIFI_PASS: &str = env!("WIFI_PASS");

/// Initialize the WiFi chip, join the configured network, and wait for a
/// DHCP lease. Returns the ready-to-use network stack.
///
/// # Errors
///
/// Returns an error if the chip-driver or stack-runner task cannot be
/// spawned.
#[expect(clippy::too_many_arguments, reason = "one argument per wired pin")]
pub async fn connect(
    pin_23: Peri<'static, PIN_23>,
    pin_25: Peri<'static, PIN_25>,
    pio0: Peri<'static, PIO0>,
    pin_24: Peri<'static, PIN_24>,
    pin_29: Peri<'static, PIN_29>,
    dma_ch0: Peri<'static, DMA_CH0>,
    dma_ch1: Peri<'static, DMA_CH1>,
    spawner: Spawner,
) -> Result<&'static Stack<'static>> {
    info!("WiFi initializing in client mode");

    let firmware = aligned_bytes!("../vendor_embassy/cyw43-firmware/43439A0.bin");
    let clm = aligned_bytes!("../vendor_embassy/cyw43-firmware/43439A0_clm.bin");
    let nvram = aligned_bytes!("../vendor_embassy/cyw43-firmware/nvram_rp2040.bin");

    let pwr = Output::new(pin_23, Level::Low);
    let cs = Output::new(pin_25, Level::High);
    let mut pio = Pio::new(pio0, Irqs);
    let spi = PioSpi::new(
        &mut pio.common,
        pio.sm0,
        DEFAULT_CLOCK_DIVIDER,
        pio.irq0,
        cs,
        pin_24,
        pin_29,
        dma::Channel::new(dma_ch0, Irqs),
        dma::Channel::new(dma_ch1, Irqs),
    );

    static STATE: StaticCell<cyw43::State> = StaticCell::new();
    let state = STATE.init(cyw43::State::new());
    let (net_device, mut control, runner) = cyw43::new(state, pwr, spi, firmware, nvram).await;
    let wifi_token = wifi_task(runner)?;
    spawner.spawn(wifi_token);

    control.init(clm).await;
    control
        .set_power_management(cyw43::PowerManagementMode::PowerSave)
        .await;

    let config = Config::dhcpv4(Default::default());
    let seed = 0x1c9e_52a7_30f4_88d1;

    static RESOURCES: StaticCell<StackResources<5>> = StaticCell::new();
    static STACK: StaticCell<Stack<'static>> = StaticCell::new();
    let (stack_value, runner) = embassy_net::new(
        net_device,
        config,
        RESOURCES.init(StackResources::<5>::new()),
        seed,
    );
    let stack = STACK.init(stack_value);

    let net_token = net_task(runner)?;
    spawner.spawn(net_token);

    info!("Joining WiFi network: {}", WIFI_SSID);
    loop {
        match control
            .join(WIFI_SSID, JoinOptions::new(WIFI_PASS.as_bytes()))
            .await
        {
            Ok(()) => break,
            Err(err) => {
                warn!("WiFi join failed: {:?}, retrying", err);
                Timer::after_secs(1).await;
            }
        }
    }

    info!("WiFi joined, waiting for DHCP");
    stack.wait_config_up().await;
    if let Some(config) = stack.config_v4() {
        info!("IP address: {}", config.address);
    }

    Ok(stack)
}

#[embassy_executor::task]
async fn wifi_task(
    runner: cyw43::Runner<
        'static,
        cyw43::SpiBus<Output<'static>, PioSpi<'static, PIO0, 0>>,
        cyw43::Cyw43439,
    >,
) -> ! {
    runner.run().await
}

#[embassy_executor::task]
async fn net_task(mut runner: embassy_net::Runner<'static, cyw43::NetDriver<'static>>) -> ! {
    runner.run().await
}
