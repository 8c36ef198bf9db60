use std::collections::HashMap;

use dioxus::prelude::*;

use crate::models::OneTapOptions;
use crate::script::GsiScript;
use crate::service::OneTapService;

/// Props for the OneTapSignIn component
#[derive(Props, Clone, PartialEq)]
pub struct OneTapSignInProps {
    /// Google OAuth client id the identity script is initialized with
    pub client_id: String,
    /// Backend endpoint receiving the credential after sign-in
    pub auth_url: String,
    /// Callback invoked with the backend's parsed JSON response
    #[props(default)]
    pub on_signed_in: Option<EventHandler<serde_json::Value>>,
    /// Headers for the credential exchange request (defaults to JSON content type)
    #[props(default)]
    pub headers: Option<HashMap<String, String>>,
    /// Automatically select the session when a single Google account is available
    #[props(default = true)]
    pub auto_select: bool,
    /// Dismiss the prompt when the user taps outside of it
    #[props(default = false)]
    pub cancel_on_tap_outside: bool,
}

/// Google One Tap sign-in component
///
/// Injects the Google Identity Services client script once per mount,
/// initializes the one-tap prompt with the given client id, and exchanges
/// each credential the provider hands out against the configured backend
/// endpoint. The backend's JSON response is passed to `on_signed_in`.
///
/// The component renders nothing; all effects are on the document and the
/// network. One-tap is best-effort: if the provider script fails to load or
/// the provider is unavailable, the prompt never appears and the host keeps
/// its ordinary sign-in paths.
///
/// # Example
/// ```rust,ignore
/// OneTapSignIn {
///     client_id: "1234567890-abc.apps.googleusercontent.com".to_string(),
///     auth_url: "https://example.com/auth/google".to_string(),
///     on_signed_in: move |data| {
///         // Store the signed-in user
///     },
/// }
/// ```
#[component]
pub fn OneTapSignIn(props: OneTapSignInProps) -> Element {
    let mut initialized = use_signal(|| false);

    use_effect(move || {
        if let Err(e) = OneTapService::validate_config(&props.client_id, &props.auth_url) {
            log::error!("OneTapSignIn: {}", e);
            return;
        }

        // One-time setup per mount, re-renders must not inject twice
        if *initialized.peek() {
            return;
        }
        initialized.set(true);

        let options = OneTapOptions {
            client_id: props.client_id.clone(),
            auto_select: props.auto_select,
            cancel_on_tap_outside: props.cancel_on_tap_outside,
        };
        let service = OneTapService::new(props.auth_url.clone(), props.headers.clone());
        let on_signed_in = props.on_signed_in;

        spawn(async move {
            let mut script = match GsiScript::acquire(&options) {
                Ok(script) => script,
                Err(e) => {
                    log::error!("OneTapSignIn: {}", e);
                    return;
                }
            };

            // The provider may re-prompt, so keep receiving for the whole mount
            while let Some(credential) = script.next_credential().await {
                match service.exchange_credential(&credential).await {
                    Ok(data) => {
                        log::debug!("One-tap credential exchange completed");
                        if let Some(handler) = on_signed_in {
                            handler.call(data);
                        }
                    }
                    Err(e) => {
                        log::error!("OneTapSignIn: {}", e);
                    }
                }
            }
        });
    });

    use_drop(|| GsiScript::release());

    rsx! {}
}
