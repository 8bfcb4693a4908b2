use tracing::info;

use crate::catalog::{CatalogClient, CatalogError, OrganizationDraft};
use crate::jobs::containers::DEFAULT_COUNTRY;
use crate::jobs::{JobError, JobSummary, RecordOutcome};

pub const DATA_DEPOSIT_NAME: &str = "data-deposit";

/// The single container that newly deposited datasets land in
pub fn data_deposit() -> OrganizationDraft {
    let mut org = OrganizationDraft::data_container(DATA_DEPOSIT_NAME, "Data Deposit");
    org.country = DEFAULT_COUNTRY.to_string();
    org.geographic_area = "World".to_string();
    org
}

pub async fn create_data_deposit(
    client: &dyn CatalogClient,
    report: &mut dyn FnMut(&RecordOutcome),
) -> Result<JobSummary, JobError> {
    let org = data_deposit();
    info!("Creating data deposit '{}'", org.name);

    let mut summary = JobSummary::default();
    let result = client.organization_create(&org).await;
    summary.settle("create data deposit", &org.name, result, CatalogError::is_validation, report)?;

    Ok(summary)
}
