use schoolhub_core::AppError;
use schoolhub_remote::RemoteClient;
use tracing::instrument;
use uuid::Uuid;

use crate::metrics::track_resource_write;
use crate::modules::ensure_changes;
use crate::modules::exams::model::{CreateExamDto, Exam, ExamFilterParams, UpdateExamDto};

const TABLE: &str = "exams";

pub struct ExamService;

impl ExamService {
    /// Exams by date, soonest first.
    #[instrument(skip(remote))]
    pub async fn list(remote: &RemoteClient, filters: ExamFilterParams) -> Result<Vec<Exam>, AppError> {
        let mut query = remote.from(TABLE).select("*");

        if let Some(class) = &filters.class {
            query = query.eq("class", class);
        }
        if let Some(subject) = &filters.subject {
            query = query.eq("subject", subject);
        }

        Ok(query.order("exam_date", true).fetch().await?)
    }

    #[instrument(skip(remote))]
    pub async fn get(remote: &RemoteClient, id: Uuid) -> Result<Exam, AppError> {
        Ok(remote.from(TABLE).select("*").eq("id", id).fetch_one().await?)
    }

    #[instrument(skip(remote, dto), fields(title = %dto.title, exam_date = %dto.exam_date))]
    pub async fn create(remote: &RemoteClient, dto: CreateExamDto) -> Result<Exam, AppError> {
        let exam = remote.from(TABLE).insert(&dto).await?;
        track_resource_write(TABLE, "create");
        Ok(exam)
    }

    #[instrument(skip(remote, dto))]
    pub async fn update(remote: &RemoteClient, id: Uuid, dto: UpdateExamDto) -> Result<Exam, AppError> {
        ensure_changes(&dto)?;

        let exam = remote.from(TABLE).eq("id", id).update(&dto).await?;
        track_resource_write(TABLE, "update");
        Ok(exam)
    }

    #[instrument(skip(remote))]
    pub async fn delete(remote: &RemoteClient, id: Uuid) -> Result<(), AppError> {
        remote.from(TABLE).eq("id", id).delete().await?;
        track_resource_write(TABLE, "delete");
        Ok(())
    }
}
