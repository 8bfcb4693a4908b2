mod common;

use anyhow::Result;
use ridl_tools::catalog::RemoteCatalog;
use ridl_tools::config::CatalogConfig;
use ridl_tools::jobs::{self, JobError, JobSummary, RecordOutcome};

fn connect(mock: &common::MockCatalog, api_key: &str) -> Result<RemoteCatalog> {
    let settings = CatalogConfig {
        verify_tls: true,
        timeout_secs: 5,
    };
    Ok(RemoteCatalog::new(&mock.base_url, api_key, &settings)?)
}

#[tokio::test]
async fn import_data_containers_from_csv() -> Result<()> {
    let mock = common::MockCatalog::start().await?;
    let catalog = connect(&mock, common::API_KEY)?;

    let csv = common::temp_path("containers.csv");
    std::fs::write(
        &csv,
        "Region,Subregion,Operation\n\
         Americas,North America,Canada\n\
         Americas,Taken Region,\n\
         Europe,,\n",
    )?;

    let mut outcomes = Vec::new();
    let summary = jobs::create_data_containers(&catalog, &csv, &mut |o: &RecordOutcome| {
        outcomes.push(o.clone())
    })
    .await?;

    assert_eq!(summary, JobSummary { processed: 5, succeeded: 4, failed: 1 });

    let failed: Vec<_> = outcomes.iter().filter(|o| !o.is_success()).collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].record, "taken-region");

    let calls = mock.calls();
    let names: Vec<_> = calls.iter().map(|c| c.body["name"].as_str().unwrap_or_default()).collect();
    assert_eq!(names, vec!["americas", "north-america", "canada", "taken-region", "europe"]);
    assert_eq!(calls[2].body["groups"][0]["name"], "north-america");
    assert_eq!(calls[4].body["country"], "VAR");

    let _ = std::fs::remove_file(&csv);
    Ok(())
}

#[tokio::test]
async fn visibility_update_skips_missing_containers() -> Result<()> {
    let mock = common::MockCatalog::start().await?;
    let catalog = connect(&mock, common::API_KEY)?;

    let csv = common::temp_path("visibility.csv");
    std::fs::write(&csv, "id,visible\namericas,Yes\nmissing-one,No\neurope,No\n")?;

    let summary = jobs::update_container_visibility(&catalog, &csv, &mut |_: &RecordOutcome| {}).await?;
    assert_eq!(summary, JobSummary { processed: 3, succeeded: 2, failed: 1 });

    let calls = mock.calls();
    assert!(calls.iter().all(|c| c.action == "organization_patch"));
    assert_eq!(calls[0].body["visible_external"], true);
    assert_eq!(calls[2].body["visible_external"], false);

    let _ = std::fs::remove_file(&csv);
    Ok(())
}

#[tokio::test]
async fn wrong_api_key_aborts_the_run() -> Result<()> {
    let mock = common::MockCatalog::start().await?;
    let catalog = connect(&mock, "not-the-key")?;

    let mut outcomes = Vec::new();
    let err = jobs::create_data_deposit(&catalog, &mut |o: &RecordOutcome| outcomes.push(o.clone()))
        .await
        .unwrap_err();

    assert!(matches!(err, JobError::Catalog(_)));
    assert!(outcomes.is_empty());
    assert_eq!(mock.calls().len(), 1);
    Ok(())
}
