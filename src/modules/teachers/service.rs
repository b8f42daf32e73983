use schoolhub_core::AppError;
use schoolhub_remote::RemoteClient;
use tracing::instrument;
use uuid::Uuid;

use crate::metrics::track_resource_write;
use crate::modules::ensure_changes;
use crate::modules::teachers::model::{CreateTeacherDto, Teacher, UpdateTeacherDto};

const TABLE: &str = "teachers";

pub struct TeacherService;

impl TeacherService {
    #[instrument(skip(remote))]
    pub async fn list(remote: &RemoteClient) -> Result<Vec<Teacher>, AppError> {
        Ok(remote
            .from(TABLE)
            .select("*")
            .order("name", true)
            .fetch()
            .await?)
    }

    #[instrument(skip(remote))]
    pub async fn get(remote: &RemoteClient, id: Uuid) -> Result<Teacher, AppError> {
        Ok(remote.from(TABLE).select("*").eq("id", id).fetch_one().await?)
    }

    #[instrument(skip(remote, dto), fields(email = %dto.email))]
    pub async fn create(remote: &RemoteClient, dto: CreateTeacherDto) -> Result<Teacher, AppError> {
        let teacher = remote.from(TABLE).insert(&dto).await?;
        track_resource_write(TABLE, "create");
        Ok(teacher)
    }

    #[instrument(skip(remote, dto))]
    pub async fn update(
        remote: &RemoteClient,
        id: Uuid,
        dto: UpdateTeacherDto,
    ) -> Result<Teacher, AppError> {
        ensure_changes(&dto)?;

        let teacher = remote.from(TABLE).eq("id", id).update(&dto).await?;
        track_resource_write(TABLE, "update");
        Ok(teacher)
    }

    #[instrument(skip(remote))]
    pub async fn delete(remote: &RemoteClient, id: Uuid) -> Result<(), AppError> {
        remote.from(TABLE).eq("id", id).delete().await?;
        track_resource_write(TABLE, "delete");
        Ok(())
    }
}
