//! Administrative commands behind the `schoolhub-cli` binary.

pub mod seeder;

use schoolhub_models::{DeliveryReport, NotificationBatch, NotificationContent, Section};
use schoolhub_push::PushGateway;
use schoolhub_remote::RemoteClient;

use crate::modules::push::FanOutService;
use crate::session::SchoolClient;

/// Relays one notification to `tokens` through `gateway`.
pub async fn send_notification(
    gateway: &dyn PushGateway,
    tokens: Vec<String>,
    title: &str,
    body: &str,
) -> Result<DeliveryReport, Box<dyn std::error::Error>> {
    let batch = NotificationBatch {
        tokens,
        notification: Some(NotificationContent {
            title: title.to_string(),
            body: body.to_string(),
            data: None,
        }),
    };

    Ok(FanOutService::dispatch(gateway, batch).await?)
}

/// Signs in through a fresh client session and returns the section the
/// navigation gate lands on. The session is signed out again afterwards.
pub async fn login_dry_run(
    remote: RemoteClient,
    email: &str,
    password: &str,
) -> Result<Section, Box<dyn std::error::Error>> {
    let mut client = SchoolClient::new(remote);
    client.start(None).await.map_err(|e| e.message())?;
    client
        .login(email, password)
        .await
        .map_err(|e| e.message())?;

    let section = client.section();
    client.logout().await;

    Ok(section)
}
