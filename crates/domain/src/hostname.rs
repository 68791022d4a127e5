use std::fmt;
use std::sync::Arc;

use crate::errors::DomainError;

pub const MAX_NAME_LENGTH: usize = 253;
pub const MAX_LABEL_LENGTH: usize = 63;

/// Syntax-validated DNS hostname.
///
/// Stored lowercased and without the trailing root dot, so values coming
/// from user input and from NS record targets compare equal. `Arc<str>`
/// keeps clones cheap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hostname(Arc<str>);

impl Hostname {
    pub fn new(name: &str) -> Result<Self, DomainError> {
        let trimmed = name.trim();
        let normalized = trimmed.strip_suffix('.').unwrap_or(trimmed);

        validate(normalized)
            .map_err(|reason| DomainError::InvalidDomainName(format!("{name}: {reason}")))?;

        Ok(Self(Arc::from(normalized.to_ascii_lowercase().as_str())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Hostname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn validate(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("hostname is empty".to_string());
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(format!(
            "hostname exceeds {MAX_NAME_LENGTH} characters"
        ));
    }

    let labels: Vec<&str> = name.split('.').collect();
    if labels.len() < 2 {
        return Err("hostname needs at least two labels".to_string());
    }

    for label in labels {
        if label.is_empty() {
            return Err("empty label".to_string());
        }
        if label.len() > MAX_LABEL_LENGTH {
            return Err(format!("label '{label}' exceeds {MAX_LABEL_LENGTH} characters"));
        }
        if !label
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-')
        {
            return Err(format!("invalid character in label '{label}'"));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(format!("label '{label}' starts or ends with a hyphen"));
        }
    }

    Ok(())
}
