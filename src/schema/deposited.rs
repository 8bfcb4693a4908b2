use serde_json::{Map, Value};
use std::path::Path;
use tracing::{debug, info};

use crate::schema::document::{
    FieldSpec, SchemaDocument, DATASET_FIELDS, DATASET_TYPE, RESOURCE_FIELDS,
};
use crate::schema::error::SchemaError;
use crate::schema::io::{read_schema, write_schema};

pub const DEPOSITED_DATASET_TYPE: &str = "deposited-dataset";

const OWNER_ORG: &str = "owner_org";
const OWNER_ORG_DEST: &str = "owner_org_dest";

/// Fields that keep whatever `required` flag the base schema gave them
const DATASET_REQUIRED_EXEMPT: &[&str] = &["title"];
const RESOURCE_REQUIRED_EXEMPT: &[&str] = &["type"];

/// Derive the `deposited-dataset` schema from the base `dataset` schema.
///
/// Deposited datasets are drafts waiting to be moved into a data container, so
/// almost nothing is required: only `title` on the dataset and `type` on
/// resources keep their flags. `owner_org` is pinned to the data deposit and a
/// new `owner_org_dest` field right after it records the destination
/// container. The two field lists always end up as the last two keys.
pub fn derive(base: &SchemaDocument) -> Result<SchemaDocument, SchemaError> {
    let mut dataset_fields = base.dataset_fields()?;
    let mut resource_fields = base.resource_fields()?;

    relax_required(&mut dataset_fields, DATASET_REQUIRED_EXEMPT);
    relax_required(&mut resource_fields, RESOURCE_REQUIRED_EXEMPT);

    if let Some(index) = dataset_fields.iter().position(|f| f.field_name() == OWNER_ORG) {
        if dataset_fields.iter().any(|f| f.field_name() == OWNER_ORG_DEST) {
            return Err(SchemaError::malformed(format!(
                "'{}' already defines '{}'",
                DATASET_FIELDS, OWNER_ORG_DEST
            )));
        }

        let owner_org = &mut dataset_fields[index];
        owner_org.set("form_snippet", Value::Null);
        owner_org.set("display_snippet", Value::Null);
        owner_org.set("validators", "deposited_dataset_owner_org");
        owner_org.set_required(true);

        dataset_fields.insert(index + 1, owner_org_dest_field());
    } else {
        debug!("No '{}' field in base schema, skipping data container field", OWNER_ORG);
    }

    // Rebuild the top level so the field lists come last
    let mut map = Map::new();
    for (key, value) in base.as_map() {
        match key.as_str() {
            DATASET_FIELDS | RESOURCE_FIELDS => continue,
            DATASET_TYPE => {
                map.insert(key.clone(), Value::String(DEPOSITED_DATASET_TYPE.into()));
            }
            _ => {
                map.insert(key.clone(), value.clone());
            }
        }
    }
    if !map.contains_key(DATASET_TYPE) {
        map.insert(DATASET_TYPE.into(), Value::String(DEPOSITED_DATASET_TYPE.into()));
    }
    map.insert(DATASET_FIELDS.into(), to_array(dataset_fields));
    map.insert(RESOURCE_FIELDS.into(), to_array(resource_fields));

    Ok(SchemaDocument::from_map(map))
}

fn relax_required(fields: &mut [FieldSpec], exempt: &[&str]) {
    for field in fields.iter_mut() {
        if !exempt.contains(&field.field_name()) {
            field.set_required(false);
        }
    }
}

fn owner_org_dest_field() -> FieldSpec {
    FieldSpec::new(OWNER_ORG_DEST)
        .with("label", "Data Container")
        .with("form_snippet", "owner_org_dest.html")
        .with("display_snippet", "owner_org_dest.html")
        .with("validators", "deposited_dataset_owner_org_dest")
        .with("required", true)
}

fn to_array(fields: Vec<FieldSpec>) -> Value {
    Value::Array(fields.into_iter().map(Value::from).collect())
}

/// Summary of a generate run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub dataset_fields: usize,
    pub resource_fields: usize,
}

/// Read the base schema at `input`, derive and write it to `output`
pub fn generate(input: &Path, output: &Path) -> Result<GenerateReport, SchemaError> {
    info!("Reading base schema from {}", input.display());
    let base = read_schema(input)?;

    let derived = derive(&base)?;
    let report = GenerateReport {
        dataset_fields: derived.dataset_fields()?.len(),
        resource_fields: derived.resource_fields()?.len(),
    };

    write_schema(output, &derived)?;
    info!(
        "Wrote {} ({} dataset fields, {} resource fields)",
        output.display(),
        report.dataset_fields,
        report.resource_fields
    );

    Ok(report)
}
