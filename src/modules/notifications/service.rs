use schoolhub_core::AppError;
use schoolhub_models::Role;
use schoolhub_remote::RemoteClient;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::metrics::track_resource_write;
use crate::modules::notifications::model::{
    CreateNotificationDto, NewNotification, NotificationRecord, TargetRole,
};

const TABLE: &str = "notifications";

pub struct NotificationService;

impl NotificationService {
    /// In-app feed for a role: notifications addressed to everyone or to that
    /// role, newest first.
    #[instrument(skip(remote))]
    pub async fn feed(remote: &RemoteClient, role: Role) -> Result<Vec<NotificationRecord>, AppError> {
        Ok(remote
            .from(TABLE)
            .select("*")
            .in_list("target_role", &[TargetRole::All, TargetRole::from(role)])
            .order("created_at", false)
            .fetch()
            .await?)
    }

    #[instrument(skip(remote, dto), fields(target_role = %dto.target_role))]
    pub async fn create(
        remote: &RemoteClient,
        author: Uuid,
        dto: CreateNotificationDto,
    ) -> Result<NotificationRecord, AppError> {
        let row = NewNotification::authored(dto, author);
        let record: NotificationRecord = remote.from(TABLE).insert(&row).await?;

        track_resource_write(TABLE, "create");
        info!(notification_id = %record.id, "Notification published");
        Ok(record)
    }

    #[instrument(skip(remote))]
    pub async fn delete(remote: &RemoteClient, id: Uuid) -> Result<(), AppError> {
        remote.from(TABLE).eq("id", id).delete().await?;
        track_resource_write(TABLE, "delete");
        Ok(())
    }
}
