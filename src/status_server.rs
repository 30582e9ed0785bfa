//! The HTTP status endpoint, one request per connection on port 80.
//!
//! Read-only views of the effective time and alarm schedule, plus the one
//! mutation the original clock ever exposed: turning the alarm on or off.
//! The server task shares only the [`AlarmSettings`] flag and a [`Clock`]
//! copy with the tick loop; a flipped flag takes effect on the next tick.

#![allow(clippy::future_not_send, reason = "single-threaded")]

use core::fmt::Write as _;

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_net::Stack;
use embassy_net::tcp::TcpSocket;
use embassy_time::{Duration, Timer};
use embedded_io_async::Write as _;
use heapless::String;
use static_cell::StaticCell;

use crate::Result;
use crate::alarm::AlarmSchedule;
use crate::clock::Clock;
use crate::settings::AlarmSettings;

type Response = String<192>;

/// Spawn the status server on an already-connected stack.
///
/// # Errors
///
/// Returns an error if the server task cannot be spawned.
pub fn start(
    stack: &'static Stack<'static>,
    clock: Clock,
    settings: &'static AlarmSettings,
    schedule: AlarmSchedule,
    spawner: Spawner,
) -> Result<()> {
    let token = server_task(stack, clock, settings, schedule)?;
    spawner.spawn(token);
    Ok(())
}

#[embassy_executor::task]
async fn server_task(
    stack: &'static Stack<'static>,
    clock: Clock,
    settings: &'static AlarmSettings,
    schedule: AlarmSchedule,
) -> ! {
    info!("Status server starting");

    static RX_BUFFER: StaticCell<[u8; 1024]> = StaticCell::new();
    static TX_BUFFER: StaticCell<[u8; 1024]> = StaticCell::new();
    static REQUEST_BUFFER: StaticCell<[u8; 1024]> = StaticCell::new();

    let rx_buffer = RX_BUFFER.init([0; 1024]);
    let tx_buffer = TX_BUFFER.init([0; 1024]);
    let request = REQUEST_BUFFER.init([0; 1024]);

    loop {
        let mut socket = TcpSocket::new(*stack, rx_buffer, tx_buffer);
        socket.set_timeout(Some(Duration::from_secs(10)));

        if let Err(err) = socket.accept(80).await {
            warn!("Status server accept error: {:?}", err);
            Timer::after_millis(500).await;
            continue;
        }

        let request_len = match socket.read(request).await {
            Ok(0) => {
                socket.close();
                continue;
            }
            Ok(n) => n,
            Err(err) => {
                warn!("Status server read error: {:?}", err);
                socket.close();
                continue;
            }
        };

        let request_text = core::str::from_utf8(request.get(..request_len).unwrap_or(&[]))
            .unwrap_or("");
        let response = route(request_text, clock, settings, schedule);

        if let Err(err) = socket.write_all(response.as_bytes()).await {
            warn!("Status server write error: {:?}", err);
        }
        let _ = socket.flush().await;
        socket.close();
    }
}

fn route(
    request: &str,
    clock: Clock,
    settings: &'static AlarmSettings,
    schedule: AlarmSchedule,
) -> Response {
    let request_line = request.lines().next().unwrap_or("");
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("");

    match (method, path) {
        ("GET", "/api/time") => {
            let now = clock.now_local();
            let mut body = String::<16>::new();
            let _ = write!(
                body,
                "{:02}:{:02}:{:02}",
                now.hour(),
                now.minute(),
                now.second()
            );
            respond("200 OK", &body)
        }
        ("GET", "/api/alarm_time") => {
            let mut body = String::<8>::new();
            let _ = write!(body, "{}:{:02}", schedule.hour, schedule.minute);
            respond("200 OK", &body)
        }
        ("GET", "/api/alarm_enabled") => {
            let body = if settings.is_enabled() { "ON" } else { "OFF" };
            respond("200 OK", body)
        }
        ("POST", "/api/alarm_enabled") => match form_value(request, "alarm_onoff") {
            Some(value) if value.as_str() == "ON" => {
                info!("Setting alarm enabled to true");
                settings.set_enabled(true);
                respond("200 OK", "")
            }
            Some(value) if value.as_str() == "OFF" => {
                info!("Setting alarm enabled to false");
                settings.set_enabled(false);
                respond("200 OK", "")
            }
            _ => respond("400 Bad Request", "missing or invalid alarm_onoff"),
        },
        _ => respond("404 Not Found", ""),
    }
}

fn respond(status_line: &str, body: &str) -> Response {
    let mut response = Response::new();
    let _ = write!(
        response,
        "HTTP/1.1 {status_line}\r\n\
         Content-Type: text/plain\r\n\
         Connection: close\r\n\
         \r\n\
         {body}"
    );
    response
}

/// Extract a urlencoded form field from the request body.
fn form_value(request: &str, key: &str) -> Option<String<8>> {
    let body_start = request.find("\r\n\r\n")?.checked_add(4)?;
    let body = request.get(body_start..)?;

    for parameter in body.trim_end_matches(char::from(0)).split('&') {
        if let Some((parameter_key, value)) = parameter.split_once('=') {
            if url_decode::<32>(parameter_key).as_str() == key {
                return Some(url_decode::<8>(value));
            }
        }
    }
    None
}

/// Minimal urlencoding decoder: `+` and `%XX`. Overlong input truncates.
fn url_decode<const N: usize>(encoded: &str) -> String<N> {
    let mut decoded = String::<N>::new();
    let mut characters = encoded.chars();

    while let Some(ch) = characters.next() {
        if ch == '+' {
            let _ = decoded.push(' ');
        } else if ch == '%' {
            if let (Some(high), Some(low)) = (characters.next(), characters.next()) {
                if let (Some(high), Some(low)) = (high.to_digit(16), low.to_digit(16)) {
                    #[expect(
                        clippy::cast_possible_truncation,
                        reason = "Two hex digits always fit a byte"
                    )]
                    let byte = ((high << 4) | low) as u8;
                    if let Ok(text) = core::str::from_utf8(&[byte]) {
                        let _ = decoded.push_str(text);
                    }
                }
            }
        } else {
            let _ = decoded.push(ch);
        }
    }

    decoded
}
