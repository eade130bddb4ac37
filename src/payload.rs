//! Builders for the text payloads most QR readers know how to act on.

use url::form_urlencoded;

/// Security types accepted in a `WIFI:` payload.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum WifiSecurity {
    #[default]
    Wpa,
    Wep,
    Open,
}

impl WifiSecurity {
    fn code(self) -> &'static str {
        match self {
            WifiSecurity::Wpa => "WPA",
            WifiSecurity::Wep => "WEP",
            WifiSecurity::Open => "nopass",
        }
    }
}

/// Structured content that renders to a QR payload string.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Payload {
    Text(String),
    Url(String),
    Wifi {
        security: WifiSecurity,
        ssid: String,
        password: String,
    },
    VCard {
        name: String,
        phone: String,
        email: String,
        company: String,
        address: String,
    },
    Email {
        to: String,
        subject: String,
        body: String,
    },
}

impl Payload {
    /// The string handed to the symbol encoder.
    pub fn encode(&self) -> String {
        match self {
            Payload::Text(text) | Payload::Url(text) => text.clone(),
            Payload::Wifi { security, ssid, password } => {
                format!("WIFI:T:{};S:{};P:{};;", security.code(), ssid, password)
            }
            Payload::VCard { name, phone, email, company, address } => {
                let mut out = String::from("BEGIN:VCARD\nVERSION:3.0\n");
                let fields = [
                    ("FN:", name.as_str(), ""),
                    ("TEL:", phone.as_str(), ""),
                    ("EMAIL:", email.as_str(), ""),
                    ("ORG:", company.as_str(), ""),
                    ("ADR:;;", address.as_str(), ";;;;"),
                ];
                for (prefix, value, suffix) in fields {
                    if !value.trim().is_empty() {
                        out.push_str(prefix);
                        out.push_str(value);
                        out.push_str(suffix);
                        out.push('\n');
                    }
                }
                out.push_str("END:VCARD");
                out
            }
            Payload::Email { to, subject, body } => {
                let params: Vec<String> = [("subject", subject), ("body", body)]
                    .into_iter()
                    .filter(|(_, v)| !v.trim().is_empty())
                    .map(|(k, v)| format!("{}={}", k, form_urlencoded::byte_serialize(v.as_bytes()).collect::<String>()))
                    .collect();
                if params.is_empty() {
                    format!("mailto:{}", to)
                } else {
                    format!("mailto:{}?{}", to, params.join("&"))
                }
            }
        }
    }

    /// A short human label for the payload, used when the caller gives none.
    pub fn default_label(&self) -> String {
        match self {
            Payload::Text(text) => text.chars().take(20).collect(),
            Payload::Url(url) => url.chars().take(30).collect(),
            Payload::Wifi { ssid, .. } => ssid.clone(),
            Payload::VCard { name, .. } => name.clone(),
            Payload::Email { to, .. } => to.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wifi_payload() {
        let p = Payload::Wifi {
            security: WifiSecurity::Wpa,
            ssid: "HomeNet".into(),
            password: "hunter2".into(),
        };
        assert_eq!(p.encode(), "WIFI:T:WPA;S:HomeNet;P:hunter2;;");
        assert_eq!(p.default_label(), "HomeNet");
    }

    #[test]
    fn test_vcard_skips_blank_fields() {
        let p = Payload::VCard {
            name: "Ada Lovelace".into(),
            phone: "".into(),
            email: "ada@example.com".into(),
            company: "  ".into(),
            address: "12 St James's Square".into(),
        };
        assert_eq!(
            p.encode(),
            "BEGIN:VCARD\nVERSION:3.0\nFN:Ada Lovelace\nEMAIL:ada@example.com\nADR:;;12 St James's Square;;;;\nEND:VCARD"
        );
    }

    #[test]
    fn test_email_payload_encodes_params() {
        let p = Payload::Email {
            to: "team@example.com".into(),
            subject: "Hello there".into(),
            body: "a&b".into(),
        };
        assert_eq!(p.encode(), "mailto:team@example.com?subject=Hello+there&body=a%26b");

        let bare = Payload::Email { to: "x@y.z".into(), subject: "".into(), body: "".into() };
        assert_eq!(bare.encode(), "mailto:x@y.z");
    }

    #[test]
    fn test_default_labels_truncate() {
        let text = Payload::Text("abcdefghijklmnopqrstuvwxyz".into());
        assert_eq!(text.default_label(), "abcdefghijklmnopqrst");
        let url = Payload::Url("https://example.com/a/very/long/path".into());
        assert_eq!(url.default_label().chars().count(), 30);
    }
}
