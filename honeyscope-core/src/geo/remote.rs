use crate::geo::{GeoInfo, GeoLookup, LookupError};
use reqwest::blocking::Client;
use serde_json::Value;
use std::net::IpAddr;
use std::time::Duration;

pub const DEFAULT_REMOTE_URL: &str = "https://api.ozeliurs.com/ip/{ip}";

/// Lookup against an ip-api style HTTP service.
///
/// The service answers with a JSON object such as
/// `{"status":"success","countryCode":"DE","isp":"Contabo GmbH",...}`.
/// Requests are bounded by a timeout; a timeout is an ordinary lookup failure.
pub struct RemoteLookup {
    client: Client,
    url_template: String,
}

impl RemoteLookup {
    /// `url_template` must contain an `{ip}` placeholder.
    pub fn new(url_template: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url_template: url_template.into(),
        })
    }

    pub fn url_for(&self, ip: IpAddr) -> String {
        self.url_template.replace("{ip}", &ip.to_string())
    }

    /// Full payload from the remote service, untouched.
    pub fn ip_info(&self, ip: IpAddr) -> Result<Value, LookupError> {
        let payload = self
            .client
            .get(self.url_for(ip))
            .send()?
            .error_for_status()?
            .json::<Value>()?;

        Ok(payload)
    }
}

impl GeoLookup for RemoteLookup {
    fn lookup(&self, ip: IpAddr) -> Result<GeoInfo, LookupError> {
        let payload = self.ip_info(ip)?;
        geo_from_payload(ip, &payload)
    }
}

pub(crate) fn geo_from_payload(ip: IpAddr, payload: &Value) -> Result<GeoInfo, LookupError> {
    if payload.get("status").and_then(Value::as_str) == Some("fail") {
        return Err(LookupError::NotFound(ip));
    }

    let field = |keys: &[&str]| {
        keys.iter()
            .find_map(|k| payload.get(*k).and_then(Value::as_str))
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    let geo = GeoInfo {
        country_short: field(&["countryCode", "country_code"]),
        isp: field(&["isp", "org"]),
    };

    if geo.has_some_info() {
        Ok(geo)
    } else {
        Err(LookupError::NotFound(ip))
    }
}
