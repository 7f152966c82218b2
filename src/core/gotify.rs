//! Gotify push notifications for completed cleanups

use reqwest::blocking::Client;

use crate::core::config::GotifyConfig;
use crate::core::event::MediaEvent;

/// Priority sent with every deletion notice
const PRIORITY: &str = "10";

/// Send a fire-and-forget deletion notice.
///
/// No-op when notifications are disabled. Delivery failures are logged and
/// never propagated; the notification is a best-effort side channel.
pub fn notify_deletion(config: &GotifyConfig, event: &MediaEvent) {
    if !config.enabled {
        return;
    }

    let url = format!("{}/message", config.server_url.trim_end_matches('/'));
    let message = format!("Deleting source path {}", event.source_path);
    let title = format!("Deleting Media from {}", event.arr);

    let result = Client::new()
        .post(&url)
        .query(&[("token", config.token.as_str())])
        .form(&[
            ("message", message.as_str()),
            ("title", title.as_str()),
            ("priority", PRIORITY),
        ])
        .send();

    match result {
        Ok(response) if !response.status().is_success() => {
            log::warn!("Gotify returned status {}", response.status());
        }
        Ok(_) => log::info!("Sent deletion notice for {}", event.source_path),
        Err(e) => log::warn!("Failed to reach Gotify: {}", e),
    }
}
