use serde_json::Value;

use super::http::FetchError;

pub const ALLORIGINS_PROXY: &str = "https://api.allorigins.win/get?url=";
pub const CORSPROXY_PROXY: &str = "https://corsproxy.io/?";

/// One way of reaching the recent-tracks endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackSource {
    /// Call the API itself.
    Direct,
    /// Relay the call through a CORS proxy by prefixing the target URL.
    Proxy {
        prefix: String,
        /// Percent-encode the target before appending it.
        encode_target: bool,
        /// The relay answers `{"contents": "<target body as a string>"}`.
        unwrap_contents: bool,
    },
}

/// Direct call first, then allorigins (encoded, wrapped), then corsproxy (raw).
pub fn default_sources() -> Vec<TrackSource> {
    vec![
        TrackSource::Direct,
        TrackSource::Proxy {
            prefix: ALLORIGINS_PROXY.to_string(),
            encode_target: true,
            unwrap_contents: true,
        },
        TrackSource::Proxy {
            prefix: CORSPROXY_PROXY.to_string(),
            encode_target: false,
            unwrap_contents: false,
        },
    ]
}

impl TrackSource {
    pub fn label(&self) -> &str {
        match self {
            TrackSource::Direct => "direct",
            TrackSource::Proxy { prefix, .. } => prefix,
        }
    }

    pub fn request_url(&self, target: &str) -> String {
        match self {
            TrackSource::Direct => target.to_string(),
            TrackSource::Proxy {
                prefix,
                encode_target: true,
                ..
            } => format!("{}{}", prefix, urlencoding::encode(target)),
            TrackSource::Proxy { prefix, .. } => format!("{}{}", prefix, target),
        }
    }

    /// Strip the relay envelope, if this source has one.
    ///
    /// A missing, null or empty `contents` leaves the body as it is.
    pub fn unwrap_body(&self, body: Value) -> Result<Value, FetchError> {
        let unwrap = matches!(
            self,
            TrackSource::Proxy {
                unwrap_contents: true,
                ..
            }
        );
        if !unwrap {
            return Ok(body);
        }

        match body.get("contents") {
            None | Some(Value::Null) => Ok(body),
            Some(Value::String(contents)) if contents.is_empty() => Ok(body),
            Some(Value::String(contents)) => serde_json::from_str(contents)
                .map_err(|e| FetchError::MalformedData(format!("relay contents: {}", e))),
            Some(other) => Err(FetchError::MalformedData(format!(
                "relay contents is not a string: {}",
                other
            ))),
        }
    }
}
