//! Shared fixtures for unit tests: an in-memory recording API and a fixed clock.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use time::OffsetDateTime;
use time::macros::datetime;

use crate::api::{ApiError, FunctionsApi};
use crate::clock::Clock;
use crate::config::RecordDefaults;
use crate::model::{FunctionRecord, NewFunction, Parameter};
use crate::store::FunctionStore;

/// One observed call against the API, with the payload as sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    List,
    Get(String),
    Create(FunctionRecord),
    Update(String, FunctionRecord),
    Delete(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    List,
    Get,
    Create,
    Update,
    Delete,
}

/// In-memory `FunctionsApi` that records every call and can fail on demand.
#[derive(Default)]
pub struct RecordingApi {
    records: Mutex<Vec<FunctionRecord>>,
    calls: Mutex<Vec<Call>>,
    failing: Mutex<HashSet<Op>>,
}

fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl RecordingApi {
    pub fn with_records(records: Vec<FunctionRecord>) -> Arc<Self> {
        Arc::new(Self { records: Mutex::new(records), ..Self::default() })
    }

    pub fn fail(&self, op: Op) {
        locked(&self.failing).insert(op);
    }

    pub fn recover(&self, op: Op) {
        locked(&self.failing).remove(&op);
    }

    pub fn calls(&self) -> Vec<Call> {
        locked(&self.calls).clone()
    }

    pub fn clear_calls(&self) {
        locked(&self.calls).clear();
    }

    pub fn stored(&self) -> Vec<FunctionRecord> {
        locked(&self.records).clone()
    }

    fn record_call(&self, op: Op, call: Call) -> Result<(), ApiError> {
        locked(&self.calls).push(call);
        if locked(&self.failing).contains(&op) {
            return Err(ApiError::Status { status: 500, body: "injected failure".into() });
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl FunctionsApi for RecordingApi {
    async fn list(&self) -> Result<Vec<FunctionRecord>, ApiError> {
        self.record_call(Op::List, Call::List)?;
        Ok(self.stored())
    }

    async fn get(&self, id: &str) -> Result<FunctionRecord, ApiError> {
        self.record_call(Op::Get, Call::Get(id.to_owned()))?;
        locked(&self.records)
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(ApiError::Status { status: 404, body: String::new() })
    }

    async fn create(&self, record: &FunctionRecord) -> Result<(), ApiError> {
        self.record_call(Op::Create, Call::Create(record.clone()))?;
        locked(&self.records).push(record.clone());
        Ok(())
    }

    async fn update(&self, id: &str, record: &FunctionRecord) -> Result<(), ApiError> {
        self.record_call(Op::Update, Call::Update(id.to_owned(), record.clone()))?;
        let mut records = locked(&self.records);
        match records.iter_mut().find(|r| r.id == id) {
            Some(existing) => {
                *existing = record.clone();
                Ok(())
            }
            None => Err(ApiError::Status { status: 404, body: String::new() }),
        }
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.record_call(Op::Delete, Call::Delete(id.to_owned()))?;
        locked(&self.records).retain(|r| r.id != id);
        Ok(())
    }
}

/// A clock frozen at one instant.
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

pub const FIXED_NOW: OffsetDateTime = datetime!(2025-03-04 05:06:07.089 UTC);
pub const FIXED_NOW_TEXT: &str = "2025-03-04T05:06:07.089Z";

/// Store over the given mock, with the default metadata and [`FIXED_NOW`].
pub fn store_with(api: &Arc<RecordingApi>) -> FunctionStore {
    let api: Arc<dyn FunctionsApi> = api.clone();
    FunctionStore::new(api, RecordDefaults::default()).with_clock(Arc::new(FixedClock(FIXED_NOW)))
}

pub fn sample_record(id: &str, name: &str) -> FunctionRecord {
    FunctionRecord {
        id: id.into(),
        name: name.into(),
        description: format!("{name} description"),
        lambda_function: format!("arn:aws:lambda:us-east-1:123:function:{name}"),
        enabled: true,
        parameters: vec![Parameter {
            name: "city".into(),
            kind: "string".into(),
            description: "City name".into(),
            enum_values: Vec::new(),
            required: true,
            ..Parameter::default()
        }],
        created_by: Some("First name Last name".into()),
        last_modified: Some("2024-01-01T00:00:00.000Z".into()),
        file_size: Some("1Kb".into()),
        extra: serde_json::Map::new(),
    }
}

pub fn sample_draft() -> NewFunction {
    NewFunction {
        name: "f1".into(),
        description: "d".into(),
        lambda_function: "arn:1".into(),
        enabled: true,
        parameters: Vec::new(),
    }
}
