use serde::{Deserialize, Serialize};

/// Access capabilities advertised for a server or namespace.
///
/// All five flags are required on the wire; a payload missing any of them is
/// rejected. No flag implies another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capabilities {
    #[serde(rename = "PublicRead")]
    pub public_read: bool,
    #[serde(rename = "Read")]
    pub read: bool,
    #[serde(rename = "Write")]
    pub write: bool,
    #[serde(rename = "Listing")]
    pub listing: bool,
    #[serde(rename = "FallBackRead")]
    pub fallback_read: bool,
}

impl Capabilities {
    /// Objects can be read without a token
    pub fn allows_anonymous_read(&self) -> bool {
        self.public_read
    }

    /// Objects can be read by some client, with or without a token
    pub fn allows_authorized_read(&self) -> bool {
        self.public_read || self.read
    }

    pub fn is_read_only(&self) -> bool {
        !self.write
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_names() {
        let caps = Capabilities {
            public_read: true,
            fallback_read: true,
            ..Default::default()
        };
        let value = serde_json::to_value(caps).unwrap();
        assert_eq!(
            value,
            json!({
                "PublicRead": true,
                "Read": false,
                "Write": false,
                "Listing": false,
                "FallBackRead": true
            })
        );
    }

    #[test]
    fn test_missing_flag_is_rejected() {
        let payload = json!({
            "PublicRead": true,
            "Read": true,
            "Write": false,
            "Listing": false
        });
        let err = serde_json::from_value::<Capabilities>(payload).unwrap_err();
        assert!(err.to_string().contains("FallBackRead"));
    }

    #[test]
    fn test_write_without_read_is_representable() {
        let caps: Capabilities = serde_json::from_value(json!({
            "PublicRead": false,
            "Read": false,
            "Write": true,
            "Listing": false,
            "FallBackRead": false
        }))
        .unwrap();
        assert!(caps.write);
        assert!(!caps.allows_authorized_read());
        assert!(!caps.is_read_only());
    }

    #[test]
    fn test_public_read_only() {
        let caps = Capabilities {
            public_read: true,
            ..Default::default()
        };
        assert!(caps.allows_anonymous_read());
        assert!(caps.allows_authorized_read());
        assert!(caps.is_read_only());
        assert!(!caps.listing);
    }
}
