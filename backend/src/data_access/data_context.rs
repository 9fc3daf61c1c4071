use redb::{Database, ReadableTable, TableDefinition};
#[cfg(feature = "profile")]
use redb::TableHandle;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
#[cfg(feature = "profile")]
use std::time::Instant;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::{
    reminder::Reminder, settings::Settings, task::Task, user::{normalize_email, User},
    user_add_request::UserAddRequest,
};

/// Records are JSON blobs keyed by the 16 raw bytes of their UUID.
type RecordTable = TableDefinition<'static, &'static [u8], &'static [u8]>;

const USERS_TABLE: RecordTable = TableDefinition::new("users");
const EMAIL_INDEX: TableDefinition<&str, &[u8]> = TableDefinition::new("email_index");
const TASKS_TABLE: RecordTable = TableDefinition::new("tasks");
const REMINDERS_TABLE: RecordTable = TableDefinition::new("reminders");

#[derive(Debug, Error)]
pub enum DataError {
    #[error("redb: {0}")]
    Redb(String),
    #[error("stored record is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("email {0} is already registered")]
    EmailTaken(String),
    #[error("password hashing failed: {0}")]
    PasswordHash(String),
}

// redb 2.x has many error types. Blanket them all into DataError::Redb.
macro_rules! from_redb {
    ($($t:ty),*) => {
        $(impl From<$t> for DataError {
            fn from(e: $t) -> Self { DataError::Redb(e.to_string()) }
        })*
    };
}

from_redb!(
    redb::Error,
    redb::DatabaseError,
    redb::TableError,
    redb::TransactionError,
    redb::StorageError,
    redb::CommitError
);

/// Handle to the redb file holding users, tasks and reminders. Cloneable (Arc inside).
#[derive(Clone)]
pub struct DataContext {
    db: Arc<Database>
}

impl DataContext {
    /// Open (or create) the database at `path`, creating missing tables.
    pub fn new(path: &str) -> Result<Self, DataError> {
        let db = Database::create(path)?;
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(USERS_TABLE)?;
            let _ = write_txn.open_table(EMAIL_INDEX)?;
            let _ = write_txn.open_table(TASKS_TABLE)?;
            let _ = write_txn.open_table(REMINDERS_TABLE)?;
        }
        write_txn.commit()?;
        Ok(DataContext { db: Arc::new(db) })
    }

    // USERS
    pub fn create_user(&self, user: &User) -> Result<(), DataError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut email_index = write_txn.open_table(EMAIL_INDEX)?;
            if email_index.get(user.email.as_str())?.is_some() {
                return Err(DataError::EmailTaken(user.email.clone()));
            }
            let mut users_table = write_txn.open_table(USERS_TABLE)?;
            let user_bytes = serde_json::to_vec(user)?;
            let id_bytes = user.id.as_bytes();
            users_table.insert(id_bytes.as_slice(), user_bytes.as_slice())?;
            email_index.insert(user.email.as_str(), id_bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    pub fn get_user(&self, id: Uuid) -> Result<Option<User>, DataError> {
        self.get_record(USERS_TABLE, id)
    }

    pub fn get_user_by_email(&self, email: &str) -> Result<Option<User>, DataError> {
        let read_txn = self.db.begin_read()?;
        let email_index = read_txn.open_table(EMAIL_INDEX)?;

        match email_index.get(normalize_email(email).as_str())? {
            Some(id_data) => {
                let users_table = read_txn.open_table(USERS_TABLE)?;
                match users_table.get(id_data.value())? {
                    Some(user_data) => Ok(Some(serde_json::from_slice(user_data.value())?)),
                    None => Ok(None),
                }
            }
            None => Ok(None),
        }
    }

    pub fn list_users(&self) -> Result<Vec<User>, DataError> {
        self.list_records(USERS_TABLE)
    }

    /// Replace a stored user, moving its email index entry when the email changed.
    pub fn edit_user(&self, edited_user: &User) -> Result<bool, DataError> {
        let user = if let Some(u) = self.get_user(edited_user.id)? { u } else { return Ok(false) };
        let write_txn = self.db.begin_write()?;
        {
            let mut users_table = write_txn.open_table(USERS_TABLE)?;
            let mut email_index = write_txn.open_table(EMAIL_INDEX)?;
            let id_bytes = edited_user.id.as_bytes();
            if user.email != edited_user.email {
                let owner = email_index.get(edited_user.email.as_str())?.map(|v| v.value().to_vec());
                if owner.is_some_and(|o| o.as_slice() != id_bytes.as_slice()) {
                    return Err(DataError::EmailTaken(edited_user.email.clone()));
                }
                email_index.remove(user.email.as_str())?;
            }
            let user_bytes = serde_json::to_vec(edited_user)?;
            users_table.insert(id_bytes.as_slice(), user_bytes.as_slice())?;
            email_index.insert(edited_user.email.as_str(), id_bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(true)
    }

    /// Seed the admin account from settings when no users exist. Returns true if created.
    pub fn ensure_default_user(&self, settings: &Settings) -> Result<bool, DataError> {
        if !self.list_users()?.is_empty() {
            return Ok(false);
        }

        let default_user_creation_request = UserAddRequest {
            name: settings.default_admin_name.clone(),
            email: settings.default_admin_email.clone(),
            password: settings.default_admin_password.clone(),
        };
        let mut default_admin = User::new(default_user_creation_request)
            .map_err(|e| DataError::PasswordHash(e.to_string()))?;
        default_admin.is_admin = true;
        self.create_user(&default_admin)?;
        info!(email = %default_admin.email, "created default admin user");
        Ok(true)
    }

    // TASKS
    pub fn create_task(&self, task: &Task) -> Result<(), DataError> {
        self.put_record(TASKS_TABLE, task.id, task)
    }

    pub fn get_task(&self, id: Uuid) -> Result<Option<Task>, DataError> {
        self.get_record(TASKS_TABLE, id)
    }

    /// Every task owned by `user_id`, newest first.
    pub fn list_tasks_for_user(&self, user_id: Uuid) -> Result<Vec<Task>, DataError> {
        let mut tasks: Vec<Task> = self.list_records(TASKS_TABLE)?;
        tasks.retain(|t| t.user_id == user_id);
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tasks)
    }

    pub fn update_task(&self, task: &Task) -> Result<(), DataError> {
        self.put_record(TASKS_TABLE, task.id, task)
    }

    pub fn delete_task(&self, id: Uuid) -> Result<bool, DataError> {
        self.delete_record(TASKS_TABLE, id)
    }

    // REMINDERS
    pub fn create_reminder(&self, reminder: &Reminder) -> Result<(), DataError> {
        self.put_record(REMINDERS_TABLE, reminder.id, reminder)
    }

    pub fn get_reminder(&self, id: Uuid) -> Result<Option<Reminder>, DataError> {
        self.get_record(REMINDERS_TABLE, id)
    }

    /// Every reminder owned by `user_id`, soonest first.
    pub fn list_reminders_for_user(&self, user_id: Uuid) -> Result<Vec<Reminder>, DataError> {
        let mut reminders: Vec<Reminder> = self.list_records(REMINDERS_TABLE)?;
        reminders.retain(|r| r.user_id == user_id);
        reminders.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(reminders)
    }

    pub fn update_reminder(&self, reminder: &Reminder) -> Result<(), DataError> {
        self.put_record(REMINDERS_TABLE, reminder.id, reminder)
    }

    pub fn delete_reminder(&self, id: Uuid) -> Result<bool, DataError> {
        self.delete_record(REMINDERS_TABLE, id)
    }

    fn put_record<T: Serialize>(
        &self,
        table: RecordTable,
        id: Uuid,
        record: &T,
    ) -> Result<(), DataError> {
        #[cfg(feature = "profile")]
        let start = Instant::now();
        let bytes = serde_json::to_vec(record)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut t = write_txn.open_table(table)?;
            t.insert(id.as_bytes().as_slice(), bytes.as_slice())?;
        }
        write_txn.commit()?;
        #[cfg(feature = "profile")]
        tracing::debug!(table = table.name(), elapsed_us = start.elapsed().as_micros() as u64, "put committed");
        Ok(())
    }

    fn get_record<T: DeserializeOwned>(
        &self,
        table: RecordTable,
        id: Uuid,
    ) -> Result<Option<T>, DataError> {
        let read_txn = self.db.begin_read()?;
        let t = read_txn.open_table(table)?;
        match t.get(id.as_bytes().as_slice())? {
            Some(data) => Ok(Some(serde_json::from_slice(data.value())?)),
            None => Ok(None),
        }
    }

    fn list_records<T: DeserializeOwned>(
        &self,
        table: RecordTable,
    ) -> Result<Vec<T>, DataError> {
        #[cfg(feature = "profile")]
        let start = Instant::now();
        let read_txn = self.db.begin_read()?;
        let t = read_txn.open_table(table)?;

        let mut records = Vec::new();
        for entry in t.iter()? {
            let (_, value) = entry?;
            records.push(serde_json::from_slice(value.value())?);
        }
        #[cfg(feature = "profile")]
        tracing::debug!(table = table.name(), rows = records.len(), elapsed_us = start.elapsed().as_micros() as u64, "scan finished");
        Ok(records)
    }

    fn delete_record(&self, table: RecordTable, id: Uuid) -> Result<bool, DataError> {
        let write_txn = self.db.begin_write()?;
        let deleted;
        {
            let mut t = write_txn.open_table(table)?;
            deleted = t.remove(id.as_bytes().as_slice())?.is_some();
        }
        write_txn.commit()?;
        Ok(deleted)
    }
}
