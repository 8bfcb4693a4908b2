use tracing::info;

use crate::catalog::{CatalogClient, CatalogError, UserDraft};
use crate::jobs::{JobError, JobSummary, RecordOutcome};

pub async fn create_user(
    client: &dyn CatalogClient,
    user: &UserDraft,
    report: &mut dyn FnMut(&RecordOutcome),
) -> Result<JobSummary, JobError> {
    info!("Creating user '{}'", user.name);

    let mut summary = JobSummary::default();
    let result = client.user_create(user).await;
    summary.settle("create user", &user.name, result, CatalogError::is_validation, report)?;

    Ok(summary)
}
