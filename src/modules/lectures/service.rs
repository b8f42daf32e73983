use schoolhub_core::AppError;
use schoolhub_remote::RemoteClient;
use tracing::instrument;
use uuid::Uuid;

use crate::metrics::track_resource_write;
use crate::modules::ensure_changes;
use crate::modules::lectures::model::{
    CreateLectureDto, LECTURE_SELECT, Lecture, LectureFilterParams, UpdateLectureDto,
};

const TABLE: &str = "lectures";

pub struct LectureService;

impl LectureService {
    /// Lectures in schedule order, each with its teacher's name, email and subject.
    #[instrument(skip(remote))]
    pub async fn list(
        remote: &RemoteClient,
        filters: LectureFilterParams,
    ) -> Result<Vec<Lecture>, AppError> {
        let mut query = remote.from(TABLE).select(LECTURE_SELECT);

        if let Some(class) = &filters.class {
            query = query.eq("class", class);
        }
        if let Some(teacher_id) = filters.teacher_id {
            query = query.eq("teacher_id", teacher_id);
        }
        if let Some(subject) = &filters.subject {
            query = query.eq("subject", subject);
        }

        Ok(query.order("scheduled_at", true).fetch().await?)
    }

    #[instrument(skip(remote))]
    pub async fn get(remote: &RemoteClient, id: Uuid) -> Result<Lecture, AppError> {
        Ok(remote
            .from(TABLE)
            .select(LECTURE_SELECT)
            .eq("id", id)
            .fetch_one()
            .await?)
    }

    #[instrument(skip(remote, dto), fields(title = %dto.title, class = %dto.class))]
    pub async fn create(remote: &RemoteClient, dto: CreateLectureDto) -> Result<Lecture, AppError> {
        let lecture = remote
            .from(TABLE)
            .select(LECTURE_SELECT)
            .insert(&dto)
            .await?;
        track_resource_write(TABLE, "create");
        Ok(lecture)
    }

    #[instrument(skip(remote, dto))]
    pub async fn update(
        remote: &RemoteClient,
        id: Uuid,
        dto: UpdateLectureDto,
    ) -> Result<Lecture, AppError> {
        ensure_changes(&dto)?;

        let lecture = remote
            .from(TABLE)
            .select(LECTURE_SELECT)
            .eq("id", id)
            .update(&dto)
            .await?;
        track_resource_write(TABLE, "update");
        Ok(lecture)
    }

    #[instrument(skip(remote))]
    pub async fn delete(remote: &RemoteClient, id: Uuid) -> Result<(), AppError> {
        remote.from(TABLE).eq("id", id).delete().await?;
        track_resource_write(TABLE, "delete");
        Ok(())
    }
}
