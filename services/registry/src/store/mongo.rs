//! MongoDB implementation of the graduate store.
//!
//! # Purpose
//! The durable backend: one document per graduate in a `graduates`
//! collection, with a unique index on `student_id` built at connect time.
//!
//! # Notes
//! Reads deserialize into a revision-tolerant document shape (serde aliases
//! for the field names older deployments wrote) and normalize into the
//! canonical record exactly once, here at the data-access boundary. Writes
//! always emit canonical names.
use super::{GraduateStore, StoreError, StoreResult};
use crate::config::MongoConfig;
use anyhow::Context;
use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use bson::{Document, doc};
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{IndexOptions, ReturnDocument};
use mongodb::{Client, Collection, Database, IndexModel};
use registry_model::normalize::resolve_full_name;
use registry_model::{Cohort, Graduate, GraduateFields};
use serde::{Deserialize, Serialize};

/// A graduate document as stored, tolerant of older field spellings.
#[derive(Debug, Serialize, Deserialize)]
struct GraduateDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    #[serde(default, alias = "studentId")]
    student_id: Option<String>,
    #[serde(
        default,
        alias = "fullName",
        alias = "name",
        skip_serializing_if = "Option::is_none"
    )]
    full_name: Option<String>,
    #[serde(default, alias = "firstName", skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
    #[serde(default, alias = "lastName", skip_serializing_if = "Option::is_none")]
    last_name: Option<String>,
    #[serde(default)]
    program: Option<String>,
    #[serde(default)]
    cohort: Option<Cohort>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    gender: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    employer: Option<String>,
    #[serde(default, alias = "jobTitle")]
    job_title: Option<String>,
    #[serde(with = "chrono_datetime_as_bson_datetime", alias = "createdAt")]
    created_at: DateTime<Utc>,
}

impl GraduateDocument {
    fn from_fields(id: ObjectId, created_at: DateTime<Utc>, fields: GraduateFields) -> Self {
        Self {
            id,
            student_id: Some(fields.student_id),
            full_name: Some(fields.full_name),
            first_name: None,
            last_name: None,
            program: Some(fields.program),
            cohort: Some(fields.cohort),
            status: Some(fields.status),
            address: fields.address,
            gender: fields.gender,
            phone: fields.phone,
            email: Some(fields.email),
            employer: fields.employer,
            job_title: fields.job_title,
            created_at,
        }
    }

    fn into_graduate(self) -> Graduate {
        Graduate {
            id: self.id.to_hex(),
            student_id: self.student_id.unwrap_or_default(),
            full_name: resolve_full_name(self.full_name, self.first_name, self.last_name),
            program: self.program.unwrap_or_default(),
            cohort: self.cohort.unwrap_or(Cohort::Year(0)),
            status: self.status.unwrap_or_else(|| "unknown".to_string()),
            address: self.address,
            gender: self.gender,
            phone: self.phone,
            email: self.email.unwrap_or_default(),
            employer: self.employer,
            job_title: self.job_title,
            created_at: self.created_at,
        }
    }
}

pub struct MongoStore {
    database: Database,
    collection: Collection<GraduateDocument>,
}

fn unexpected(err: mongodb::error::Error) -> StoreError {
    StoreError::Unexpected(anyhow::Error::new(err))
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match &*err.kind {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == 11000,
        ErrorKind::Command(command_error) => command_error.code == 11000,
        _ => false,
    }
}

/// Invalid ids cannot name a stored record, so they read as absent rather
/// than as client errors.
fn parse_id(id: &str) -> StoreResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| StoreError::NotFound("graduate".into()))
}

impl MongoStore {
    pub async fn connect(config: &MongoConfig) -> anyhow::Result<Self> {
        let client = Client::with_uri_str(&config.url)
            .await
            .with_context(|| "connect to mongodb")?;
        let database = client.database(&config.database);
        let collection = database.collection::<GraduateDocument>("graduates");
        collection
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "student_id": 1 })
                    .options(IndexOptions::builder().unique(true).build())
                    .build(),
            )
            .await
            .with_context(|| "create student_id index")?;
        Ok(Self {
            database,
            collection,
        })
    }

    fn set_document(fields: &GraduateFields) -> StoreResult<Document> {
        bson::to_document(fields)
            .map_err(|err| StoreError::Unexpected(anyhow::Error::new(err)))
    }
}

#[async_trait]
impl GraduateStore for MongoStore {
    async fn list_graduates(&self) -> StoreResult<Vec<Graduate>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": -1, "_id": -1 })
            .await
            .map_err(unexpected)?;
        let documents: Vec<GraduateDocument> = cursor.try_collect().await.map_err(unexpected)?;
        Ok(documents
            .into_iter()
            .map(GraduateDocument::into_graduate)
            .collect())
    }

    async fn get_graduate(&self, id: &str) -> StoreResult<Graduate> {
        let oid = parse_id(id)?;
        self.collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(unexpected)?
            .map(GraduateDocument::into_graduate)
            .ok_or_else(|| StoreError::NotFound("graduate".into()))
    }

    async fn create_graduate(&self, fields: GraduateFields) -> StoreResult<Graduate> {
        let document = GraduateDocument::from_fields(ObjectId::new(), Utc::now(), fields);
        match self.collection.insert_one(&document).await {
            Ok(_) => {
                metrics::counter!("registry_graduate_ops_total", "op" => "created").increment(1);
                Ok(document.into_graduate())
            }
            Err(err) if is_duplicate_key(&err) => {
                Err(StoreError::Conflict("student id exists".into()))
            }
            Err(err) => Err(unexpected(err)),
        }
    }

    async fn update_graduate(&self, id: &str, fields: GraduateFields) -> StoreResult<Graduate> {
        let oid = parse_id(id)?;
        let update = doc! { "$set": Self::set_document(&fields)? };
        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": oid }, update)
            .return_document(ReturnDocument::After)
            .await
            .map_err(|err| {
                if is_duplicate_key(&err) {
                    StoreError::Conflict("student id exists".into())
                } else {
                    unexpected(err)
                }
            })?;
        match updated {
            Some(document) => {
                metrics::counter!("registry_graduate_ops_total", "op" => "updated").increment(1);
                Ok(document.into_graduate())
            }
            None => Err(StoreError::NotFound("graduate".into())),
        }
    }

    async fn delete_graduate(&self, id: &str) -> StoreResult<()> {
        let oid = parse_id(id)?;
        let result = self
            .collection
            .delete_one(doc! { "_id": oid })
            .await
            .map_err(unexpected)?;
        if result.deleted_count == 0 {
            return Err(StoreError::NotFound("graduate".into()));
        }
        metrics::counter!("registry_graduate_ops_total", "op" => "deleted").increment(1);
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(unexpected)?;
        Ok(())
    }

    fn is_durable(&self) -> bool {
        true
    }

    fn backend_name(&self) -> &'static str {
        "mongodb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_documents_normalize_on_read() {
        let document: GraduateDocument = bson::from_document(doc! {
            "_id": ObjectId::new(),
            "studentId": "20230001",
            "firstName": "Jane",
            "lastName": "Smith",
            "program": "Law",
            "cohort": 2023,
            "email": "jane@example.com",
            "createdAt": bson::DateTime::from_millis(1_714_560_000_000),
        })
        .expect("decode legacy document");
        let graduate = document.into_graduate();
        assert_eq!(graduate.student_id, "20230001");
        assert_eq!(graduate.full_name, "Jane Smith");
        assert_eq!(graduate.cohort, Cohort::Year(2023));
        assert_eq!(graduate.status, "unknown");
    }

    #[test]
    fn written_documents_use_canonical_names() {
        let fields = GraduateFields {
            student_id: "20230001".to_string(),
            full_name: "Jane Smith".to_string(),
            program: "Law".to_string(),
            cohort: Cohort::Range {
                start: 2019,
                end: 2023,
            },
            status: "graduated".to_string(),
            address: None,
            gender: None,
            phone: None,
            email: "jane@example.com".to_string(),
            employer: None,
            job_title: None,
        };
        let document = GraduateDocument::from_fields(ObjectId::new(), Utc::now(), fields);
        let encoded = bson::to_document(&document).expect("encode");
        assert_eq!(
            encoded.get_str("student_id").expect("student_id"),
            "20230001"
        );
        assert_eq!(encoded.get_str("cohort").expect("cohort"), "2019-2023");
        assert!(!encoded.contains_key("first_name"));
    }

    #[test]
    fn malformed_ids_read_as_absent() {
        assert!(matches!(
            parse_id("not-an-object-id"),
            Err(StoreError::NotFound(_))
        ));
    }
}
