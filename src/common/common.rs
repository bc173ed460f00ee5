use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use smallvec::SmallVec;
use std::collections::HashMap;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

/// Announce event reported when a torrent starts.
pub const EVENT_STARTED: &str = "started";

/// Announce event reported when a torrent stops.
pub const EVENT_STOPPED: &str = "stopped";

pub type QueryValues = SmallVec<[Vec<u8>; 1]>;

/// Escapes raw bytes as a query component.
///
/// Space encodes as `+`, bytes outside `[A-Za-z0-9-_.~]` as `%HH` with
/// uppercase hex. This is the encoding Transmission emits on the wire.
pub fn query_escape(data: &[u8]) -> String {
    const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(data.len());
    for &byte in data {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            _ => {
                out.push('%');
                out.push(HEX_CHARS[(byte >> 4) as usize] as char);
                out.push(HEX_CHARS[(byte & 0xf) as usize] as char);
            }
        }
    }
    out
}

/// Decodes a query component back into raw bytes.
///
/// `+` decodes to space, `%HH` to the byte it names. Fails on a truncated
/// or non-hex percent escape.
pub fn query_unescape(data: &str) -> Result<Vec<u8>, CustomError> {
    let bytes = data.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut index = 0;
    while index < bytes.len() {
        match bytes[index] {
            b'+' => {
                out.push(b' ');
                index += 1;
            }
            b'%' => {
                if index + 2 >= bytes.len() {
                    return Err(CustomError::new("truncated percent escape"));
                }
                let high = hex_to_nibble(bytes[index + 1]);
                let low = hex_to_nibble(bytes[index + 2]);
                if high == 0xFF || low == 0xFF {
                    return Err(CustomError::new("invalid percent escape"));
                }
                out.push((high << 4) | low);
                index += 3;
            }
            byte => {
                out.push(byte);
                index += 1;
            }
        }
    }
    Ok(out)
}

pub(crate) fn hex_to_nibble(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        b'A'..=b'F' => byte - b'A' + 10,
        _ => 0xFF,
    }
}

/// Parses a raw query string into a name/values map.
///
/// This is the lenient parser used on incoming announce queries: names are
/// lowercased, duplicate values are kept in arrival order, keys without a
/// value are tolerated, empty fragments are skipped.
#[inline]
pub fn parse_query(query: Option<String>) -> Result<HashMap<String, QueryValues>, CustomError> {
    let mut queries: HashMap<String, QueryValues> = HashMap::with_capacity(16);
    if let Some(result) = query {
        for query_item in result.split('&') {
            if query_item.is_empty() {
                continue;
            }
            if let Some(equal_pos) = query_item.find('=') {
                let (key_part, value_part) = query_item.split_at(equal_pos);
                let key_name = match query_unescape(key_part) {
                    Ok(data) => String::from_utf8_lossy(&data).to_lowercase(),
                    Err(_) => continue,
                };
                if key_name.is_empty() {
                    continue;
                }
                let value_data = query_unescape(&value_part[1..])
                    .map_err(|_| CustomError::new("invalid query value encoding"))?;
                queries.entry(key_name).or_default().push(value_data);
            } else {
                let key_name = match query_unescape(query_item) {
                    Ok(data) => String::from_utf8_lossy(&data).to_lowercase(),
                    Err(_) => continue,
                };
                if key_name.is_empty() {
                    continue;
                }
                queries.entry(key_name).or_default().push(Vec::new());
            }
        }
    }
    Ok(queries)
}

pub fn setup_logging(config: &Configuration) {
    let level = match config.log_level.as_str() {
        "off" => log::LevelFilter::Off,
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => {
            panic!("Unknown log level encountered: '{}'", config.log_level.as_str());
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(_err) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
    {
        panic!("Failed to initialize logging.")
    }
    info!("logging initialized.");
}
