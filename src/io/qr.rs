//! Wi-Fi payload construction and QR module matrix encoding

use std::fmt;

use qrcode::{Color as ModuleColor, EcLevel, QrCode};

use crate::io::error::{MosaicError, Result};

/// Authentication type advertised in the Wi-Fi payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Security {
    /// WEP key
    #[value(name = "WEP")]
    Wep,
    /// WPA or WPA2 passphrase
    #[default]
    #[value(name = "WPA")]
    Wpa,
    /// Open network
    #[value(name = "nopass")]
    NoPass,
}

impl fmt::Display for Security {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Wep => "WEP",
            Self::Wpa => "WPA",
            Self::NoPass => "nopass",
        })
    }
}

/// Network details encoded into the QR code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiCredentials {
    /// Network name
    pub ssid: String,
    /// Network password
    pub password: String,
    /// Authentication type
    pub security: Security,
    /// Whether the network does not broadcast its SSID
    pub hidden: bool,
}

impl WifiCredentials {
    /// Payload in the `WIFI:` URI format understood by phone cameras
    ///
    /// Backslash, `;`, `,`, `:` and `"` in the SSID and password are
    /// backslash escaped. This deliberately departs from plain field
    /// concatenation: credentials containing those characters encode to a
    /// different payload, and phone readers unescape them back. Credentials
    /// without them produce exactly the concatenated form.
    pub fn payload(&self) -> String {
        format!(
            "WIFI:S:{};T:{};P:{};H:{};;",
            escape_field(&self.ssid),
            self.security,
            escape_field(&self.password),
            if self.hidden { "True" } else { "False" }
        )
    }
}

fn escape_field(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '\\' | ';' | ',' | ':' | '"') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Encode `text` and return its module matrix, `true` for dark modules
///
/// Uses the lowest error correction level to keep the grid small. The
/// matrix excludes the quiet zone.
///
/// # Errors
///
/// Returns [`MosaicError::QrEncoding`] if the payload does not fit in any
/// QR version.
pub fn encode_modules(text: &str) -> Result<Vec<Vec<bool>>> {
    let code = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::L).map_err(|e| {
        MosaicError::QrEncoding {
            payload_len: text.len(),
            source: e,
        }
    })?;

    let side = code.width();
    let modules = code
        .to_colors()
        .chunks(side.max(1))
        .map(|row| row.iter().map(|&color| color == ModuleColor::Dark).collect())
        .collect();
    Ok(modules)
}
