use std::collections::HashSet;
use std::path::Path;
use tracing::info;

use crate::catalog::{CatalogClient, CatalogError, GroupRef, OrganizationDraft, OrganizationPatch};
use crate::jobs::slug::slugify;
use crate::jobs::{JobError, JobSummary, RecordOutcome};

/// Placeholder country used until containers get their real one
pub const DEFAULT_COUNTRY: &str = "VAR";

/// Read every data row of a CSV file, skipping the header row
pub fn read_rows(path: &Path) -> Result<Vec<Vec<String>>, JobError> {
    let csv_err = |source| JobError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(csv_err)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(rows)
}

fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or_default()
}

/// Turn the container hierarchy sheet into organizations to create.
///
/// Columns 0, 1 and 2 hold the root, first and second level container of a
/// row. Each title is emitted once, the first time it is seen, with a
/// reference to the container one level up. Blank cells are skipped.
pub fn plan_data_containers(rows: &[Vec<String>]) -> Vec<OrganizationDraft> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut orgs = Vec::new();

    for row in rows {
        let levels = [cell(row, 0), cell(row, 1), cell(row, 2)];

        for (depth, &title) in levels.iter().enumerate() {
            if title.trim().is_empty() || !seen.insert(title) {
                continue;
            }

            let mut org = OrganizationDraft::data_container(slugify(title), title);
            org.country = DEFAULT_COUNTRY.to_string();
            org.visible_external = Some(true);
            if depth > 0 {
                org.groups.push(GroupRef {
                    name: slugify(levels[depth - 1]),
                });
            }

            orgs.push(org);
        }
    }

    orgs
}

pub async fn create_data_containers(
    client: &dyn CatalogClient,
    csv_path: &Path,
    report: &mut dyn FnMut(&RecordOutcome),
) -> Result<JobSummary, JobError> {
    let rows = read_rows(csv_path)?;
    let orgs = plan_data_containers(&rows);
    info!("Creating {} data containers from {}", orgs.len(), csv_path.display());

    let mut summary = JobSummary::default();
    for org in &orgs {
        let result = client.organization_create(org).await;
        summary.settle("create data container", &org.name, result, CatalogError::is_validation, report)?;
    }

    Ok(summary)
}

/// Map `(container id, "Yes"/"No")` rows to visibility patches
pub fn plan_visibility_updates(rows: &[Vec<String>]) -> Vec<OrganizationPatch> {
    rows.iter()
        .map(|row| OrganizationPatch {
            id: cell(row, 0).to_string(),
            visible_external: Some(cell(row, 1) == "Yes"),
        })
        .collect()
}

pub async fn update_container_visibility(
    client: &dyn CatalogClient,
    csv_path: &Path,
    report: &mut dyn FnMut(&RecordOutcome),
) -> Result<JobSummary, JobError> {
    let rows = read_rows(csv_path)?;
    let patches = plan_visibility_updates(&rows);
    info!("Updating visibility of {} data containers", patches.len());

    let mut summary = JobSummary::default();
    for patch in &patches {
        let result = client.organization_patch(patch).await;
        summary.settle("update", &patch.id, result, CatalogError::is_record_level, report)?;
    }

    Ok(summary)
}
