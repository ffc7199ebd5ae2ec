//! Email address as typed into the sign-in and sign-up forms
//!
//! Only the shape is checked here; whether an account exists is the API's call.

use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const MAX_ADDRESS_LEN: usize = 254;
const MAX_LOCAL_PART_LEN: usize = 64;

#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Surrounding whitespace is dropped; the address is otherwise kept as
    /// typed, case included, since the API matches it verbatim.
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let address = raw.into().trim().to_string();
        match address.len() {
            0 => Err(AppError::bad_request("Email cannot be empty")),
            len if len > MAX_ADDRESS_LEN => Err(AppError::bad_request(format!(
                "Email is longer than {MAX_ADDRESS_LEN} characters"
            ))),
            _ if !well_formed(&address) => Err(AppError::bad_request("Invalid email format")),
            _ => Ok(Self(address)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// `local@host.tld`, with a host made of dot-separated alphanumeric labels
fn well_formed(address: &str) -> bool {
    let Some((local, host)) = address.split_once('@') else {
        return false;
    };
    let local_ok = (1..=MAX_LOCAL_PART_LEN).contains(&local.len());
    let labels: Vec<&str> = host.split('.').collect();
    let host_ok = labels.len() >= 2
        && labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
        });
    local_ok && host_ok
}

impl FromStr for Email {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
