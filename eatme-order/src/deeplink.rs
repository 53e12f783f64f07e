//! Messaging deep links of the form `https://wa.me/<destination>?text=<message>`.
use serde::{Deserialize, Serialize};

/// External messaging endpoint the order is sent to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagingEndpoint {
    pub base_url: String,
    /// Phone number in international format without `+`
    pub destination_id: String,
}

impl Default for MessagingEndpoint {
    fn default() -> Self {
        Self {
            base_url: String::from("https://wa.me"),
            destination_id: String::from("2250555708866"),
        }
    }
}

impl MessagingEndpoint {
    /// Link that opens a chat with the destination, pre-filled with `message`.
    #[must_use]
    pub fn link_for(&self, message: &str) -> String {
        format!(
            "{}/{}?text={}",
            self.base_url.trim_end_matches('/'),
            self.destination_id,
            urlencoding::encode(message)
        )
    }
}

/// Recover the message body from a deep link built by
/// [`MessagingEndpoint::link_for`].
#[must_use]
pub fn decode_message(link: &str) -> Option<String> {
    let (_, query) = link.split_once('?')?;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "text")
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(std::borrow::Cow::into_owned)
}
