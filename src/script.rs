//! Lifecycle of the injected Google Identity Services script element.
//!
//! The script tag is a page resource owned by the mounting component:
//! acquired once during setup, released again on teardown. Credentials
//! produced by the provider's callback arrive over the eval channel.

use dioxus::document::{self, Eval};

use crate::models::OneTapOptions;
use crate::service::AuthError;

/// Source URL of the Google Identity Services client library
pub const GSI_SCRIPT_SRC: &str = "https://accounts.google.com/gsi/client";

/// Element id of the injected script tag
pub const GSI_SCRIPT_ID: &str = "google-one-tap-client";

/// Handle owning the injected script element for one component mount.
///
/// Acquiring the handle injects the script tag and registers the provider
/// callback; the handle then yields one credential per completed sign-in.
/// The provider may re-prompt, so more than one credential can arrive over
/// the lifetime of a single handle.
pub struct GsiScript {
    channel: Eval,
}

impl GsiScript {
    /// Inject the script element and register the credential callback
    pub fn acquire(options: &OneTapOptions) -> Result<Self, AuthError> {
        let js = load_script_js(options)?;
        Ok(Self {
            channel: document::eval(&js),
        })
    }

    /// Wait for the next credential delivered by the provider's callback.
    /// Returns `None` once the channel is closed.
    pub async fn next_credential(&mut self) -> Option<String> {
        self.channel.recv::<String>().await.ok()
    }

    /// Remove the injected script element from the document
    pub fn release() {
        let _ = document::eval(&unload_script_js());
    }
}

/// Build the injection script. The load handler initializes the provider
/// with the given options and triggers the one-tap prompt; the registered
/// callback forwards the raw credential token over the eval channel.
fn load_script_js(options: &OneTapOptions) -> Result<String, AuthError> {
    let options = serde_json::to_string(options)
        .map_err(|e| AuthError::JsonError(format!("Failed to encode options: {}", e)))?;

    Ok(format!(
        r#"
        var script = document.createElement("script");
        script.id = "{id}";
        script.src = "{src}";
        script.async = true;
        script.defer = true;
        script.onload = function () {{
            if (!(window.google && window.google.accounts && window.google.accounts.id)) {{
                return;
            }}
            var options = {options};
            window.google.accounts.id.initialize({{
                client_id: options.client_id,
                auto_select: options.auto_select,
                cancel_on_tap_outside: options.cancel_on_tap_outside,
                callback: function (response) {{
                    dioxus.send(response.credential);
                }}
            }});
            window.google.accounts.id.prompt();
        }};
        document.body.appendChild(script);
        "#,
        id = GSI_SCRIPT_ID,
        src = GSI_SCRIPT_SRC,
        options = options,
    ))
}

fn unload_script_js() -> String {
    format!(
        r#"
        var script = document.getElementById("{id}");
        if (script) {{
            script.parentNode.removeChild(script);
        }}
        "#,
        id = GSI_SCRIPT_ID,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> OneTapOptions {
        OneTapOptions {
            client_id: "client-1".to_string(),
            auto_select: true,
            cancel_on_tap_outside: false,
        }
    }

    #[test]
    fn test_load_script_points_at_provider_library() {
        let js = load_script_js(&options()).unwrap();
        assert!(js.contains(GSI_SCRIPT_SRC));
        assert!(js.contains(GSI_SCRIPT_ID));
        assert!(js.contains("document.body.appendChild(script)"));
    }

    #[test]
    fn test_load_script_is_async_and_deferred() {
        let js = load_script_js(&options()).unwrap();
        assert!(js.contains("script.async = true"));
        assert!(js.contains("script.defer = true"));
    }

    #[test]
    fn test_load_script_initializes_and_prompts() {
        let js = load_script_js(&options()).unwrap();
        assert!(js.contains("window.google.accounts.id.initialize"));
        assert!(js.contains("window.google.accounts.id.prompt()"));
        assert!(js.contains("dioxus.send(response.credential)"));
    }

    #[test]
    fn test_load_script_embeds_options_as_json() {
        let js = load_script_js(&options()).unwrap();
        assert!(js.contains(r#""client_id":"client-1""#));
        assert!(js.contains(r#""auto_select":true"#));
        assert!(js.contains(r#""cancel_on_tap_outside":false"#));
    }

    #[test]
    fn test_load_script_escapes_option_values() {
        let mut options = options();
        options.client_id = "a\"b".to_string();
        let js = load_script_js(&options).unwrap();
        assert!(js.contains(r#""client_id":"a\"b""#));
    }

    #[test]
    fn test_unload_script_targets_injected_element() {
        let js = unload_script_js();
        assert!(js.contains(GSI_SCRIPT_ID));
        assert!(js.contains("removeChild"));
    }
}
