use log::debug;
use regex::Regex;

use crate::error::{Error, Result};

pub const DEFAULT_URL: &str = "http://wttr.in/{city}?format=%t";

pub fn request_url(template: &str, city: &str) -> String {
    template.replace("{city}", &city.trim().replace(' ', "+"))
}

/// First run of ASCII digits in `body`, ignoring sign and unit.
pub fn first_digit_run(body: &str) -> Option<&str> {
    let re = Regex::new("[0-9]+").ok()?;
    re.find(body).map(|m| m.as_str())
}

/// Fetches the current temperature for `city` as a digit string.
pub fn fetch_temperature(template: &str, city: &str) -> Result<String> {
    let url = request_url(template, city);
    debug!("GET {}", url);

    let body = reqwest::blocking::get(&url)?.error_for_status()?.text()?;
    debug!("response {:?}", body);

    first_digit_run(&body)
        .map(str::to_string)
        .ok_or(Error::NoDigits(body))
}
