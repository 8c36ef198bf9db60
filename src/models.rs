use serde::{Deserialize, Serialize};

/// Options forwarded to the identity script's initialize entry point.
/// Field names match the provider's wire format.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OneTapOptions {
    pub client_id: String,
    pub auto_select: bool,
    pub cancel_on_tap_outside: bool,
}

/// Request body for the credential exchange with the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CredentialPayload {
    pub credential: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_payload_shape() {
        let payload = CredentialPayload {
            credential: "tok123".to_string(),
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"credential":"tok123"}"#);
    }

    #[test]
    fn test_credential_payload_roundtrip() {
        let payload: CredentialPayload = serde_json::from_str(r#"{"credential":"tok123"}"#).unwrap();
        assert_eq!(payload.credential, "tok123");
    }

    #[test]
    fn test_options_use_provider_field_names() {
        let options = OneTapOptions {
            client_id: "client-1".to_string(),
            auto_select: true,
            cancel_on_tap_outside: false,
        };
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["client_id"], "client-1");
        assert_eq!(json["auto_select"], true);
        assert_eq!(json["cancel_on_tap_outside"], false);
    }
}
