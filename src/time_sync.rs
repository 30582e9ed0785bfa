//! Periodic NTP time synchronization over WiFi.
//!
//! The device task performs an initial sync with backoff, then refreshes
//! hourly, signalling each outcome. The tick loop consumes the events and
//! re-anchors the [`Clock`](crate::clock::Clock). Without the `wifi` feature
//! a stub with the same surface is compiled, so call sites do not change;
//! the stub simply never signals.

#![allow(clippy::future_not_send, reason = "single-threaded")]

#[cfg(feature = "wifi")]
mod wifi_impl {
    use core::convert::Infallible;
    use defmt::{info, warn};
    use embassy_executor::Spawner;
    use embassy_net::{Stack, dns::DnsQueryType, udp};
    use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
    use embassy_sync::signal::Signal;
    use embassy_time::{Duration, Timer, with_timeout};

    use crate::Result;
    use crate::unix_seconds::UnixSeconds;

    /// Outcome of one synchronization attempt.
    #[derive(Clone)]
    pub enum TimeSyncEvent {
        Success { unix_seconds: UnixSeconds },
        Failed(&'static str),
    }

    type TimeSyncEvents = Signal<CriticalSectionRawMutex, TimeSyncEvent>;

    /// Resources backing a [`TimeSync`]; assign to a `static`.
    pub struct TimeSyncStatic {
        events: TimeSyncEvents,
    }

    /// Handle to the time synchronization device.
    pub struct TimeSync {
        events: &'static TimeSyncEvents,
    }

    /// Delays between failed initial attempts; the last entry repeats.
    const RETRY_SCHEDULE: [u64; 4] = [10, 30, 60, 300];
    /// Seconds between refreshes after a success.
    const REFRESH_SECONDS: u64 = 3600;

    impl TimeSync {
        /// Create time-sync resources.
        #[must_use]
        pub const fn new_static() -> TimeSyncStatic {
            TimeSyncStatic {
                events: Signal::new(),
            }
        }

        /// Create the device on an already-connected network stack and spawn
        /// its task.
        ///
        /// # Errors
        ///
        /// Returns an error if the task cannot be spawned.
        pub fn new(
            time_sync_static: &'static TimeSyncStatic,
            stack: &'static Stack<'static>,
            spawner: Spawner,
        ) -> Result<Self> {
            let token = device_loop(stack, &time_sync_static.events)?;
            spawner.spawn(token);
            Ok(Self {
                events: &time_sync_static.events,
            })
        }

        /// Wait for and return the next sync event.
        pub async fn wait(&self) -> TimeSyncEvent {
            self.events.wait().await
        }
    }

    #[embassy_executor::task]
    async fn device_loop(
        stack: &'static Stack<'static>,
        events: &'static TimeSyncEvents,
    ) -> ! {
        let err = inner_device_loop(stack, events).await.unwrap_err();
        core::panic!("{err}");
    }

    async fn inner_device_loop(
        stack: &'static Stack<'static>,
        events: &'static TimeSyncEvents,
    ) -> Result<Infallible> {
        info!("Time sync device started");

        // Initial sync, with backoff until it lands.
        let mut attempt = 0_usize;
        loop {
            match fetch_network_time(stack).await {
                Ok(unix_seconds) => {
                    info!("Initial time sync: {}", unix_seconds.as_i64());
                    events.signal(TimeSyncEvent::Success { unix_seconds });
                    break;
                }
                Err(message) => {
                    events.signal(TimeSyncEvent::Failed(message));
                    let delay = RETRY_SCHEDULE.get(attempt).copied().unwrap_or(300);
                    attempt = attempt.saturating_add(1);
                    info!("Time sync failed, retrying in {}s", delay);
                    Timer::after_secs(delay).await;
                }
            }
        }

        // Hourly refresh; on failure retry every five minutes.
        let mut wait_secs = REFRESH_SECONDS;
        loop {
            Timer::after_secs(wait_secs).await;
            match fetch_network_time(stack).await {
                Ok(unix_seconds) => {
                    info!("Periodic time sync: {}", unix_seconds.as_i64());
                    events.signal(TimeSyncEvent::Success { unix_seconds });
                    wait_secs = REFRESH_SECONDS;
                }
                Err(message) => {
                    events.signal(TimeSyncEvent::Failed(message));
                    wait_secs = 300;
                }
            }
        }
    }

    const NTP_SERVER: &str = "pool.ntp.org";
    const NTP_PORT: u16 = 123;

    async fn fetch_network_time(stack: &Stack<'static>) -> Result<UnixSeconds, &'static str> {
        let addresses = stack
            .dns_query(NTP_SERVER, DnsQueryType::A)
            .await
            .map_err(|err| {
                warn!("NTP DNS lookup failed: {:?}", err);
                "DNS lookup failed"
            })?;
        let server = addresses.first().ok_or("no DNS results")?;

        let mut rx_meta = [udp::PacketMetadata::EMPTY; 1];
        let mut rx_buffer = [0; 128];
        let mut tx_meta = [udp::PacketMetadata::EMPTY; 1];
        let mut tx_buffer = [0; 128];
        let mut socket = udp::UdpSocket::new(
            *stack,
            &mut rx_meta,
            &mut rx_buffer,
            &mut tx_meta,
            &mut tx_buffer,
        );
        socket.bind(0).map_err(|err| {
            warn!("NTP socket bind failed: {:?}", err);
            "socket bind failed"
        })?;

        // 48-byte request: LI=0, VN=3, client mode.
        let mut request = [0_u8; 48];
        request[0] = 0x1B;
        socket
            .send_to(&request, (*server, NTP_PORT))
            .await
            .map_err(|err| {
                warn!("NTP send failed: {:?}", err);
                "send failed"
            })?;

        let mut response = [0_u8; 48];
        let (length, _from) = with_timeout(Duration::from_secs(5), socket.recv_from(&mut response))
            .await
            .map_err(|_| "receive timeout")?
            .map_err(|err| {
                warn!("NTP receive failed: {:?}", err);
                "receive failed"
            })?;
        if length < 48 {
            return Err("response too short");
        }

        // Transmit timestamp, bytes 40..44, big-endian NTP seconds.
        let ntp_seconds =
            u32::from_be_bytes([response[40], response[41], response[42], response[43]]);
        UnixSeconds::from_ntp_seconds(ntp_seconds).ok_or("timestamp before Unix epoch")
    }
}

#[cfg(feature = "wifi")]
pub use wifi_impl::{TimeSync, TimeSyncEvent, TimeSyncStatic};

#[cfg(not(feature = "wifi"))]
mod stub {
    use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
    use embassy_sync::signal::Signal;

    use crate::unix_seconds::UnixSeconds;

    /// Outcome of one synchronization attempt (never produced by the stub).
    #[derive(Clone)]
    pub enum TimeSyncEvent {
        Success { unix_seconds: UnixSeconds },
        Failed(&'static str),
    }

    type TimeSyncEvents = Signal<CriticalSectionRawMutex, TimeSyncEvent>;

    /// Resources backing a [`TimeSync`]; assign to a `static`.
    pub struct TimeSyncStatic {
        events: TimeSyncEvents,
    }

    /// Stub device for builds without networking: waits forever.
    pub struct TimeSync {
        events: &'static TimeSyncEvents,
    }

    impl TimeSync {
        /// Create time-sync resources.
        #[must_use]
        pub const fn new_static() -> TimeSyncStatic {
            TimeSyncStatic {
                events: Signal::new(),
            }
        }

        /// Create the stub device. No task is spawned.
        #[must_use]
        pub const fn new(time_sync_static: &'static TimeSyncStatic) -> Self {
            Self {
                events: &time_sync_static.events,
            }
        }

        /// Wait for the next sync event; the stub never signals one.
        pub async fn wait(&self) -> TimeSyncEvent {
            self.events.wait().await
        }
    }
}

#[cfg(not(feature = "wifi"))]
pub use stub::{TimeSync, TimeSyncEvent, TimeSyncStatic};
