//! # Persistence Adapter
//!
//! Mirrors the two application records into a [`KeyValueStore`]:
//!
//! ```text
//! studyGenius_profile  ← JSON profile (camelCase fields)
//! studyGenius_tasks    ← JSON array of tasks
//! ```
//!
//! Records are read once at start-up and written whenever the in-memory value
//! changes. Writes are not transactional.

use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{Profile, StudyTask};

use super::traits::{KeyValueStore, StorageError};

pub const PROFILE_KEY: &str = "studyGenius_profile";
pub const TASKS_KEY: &str = "studyGenius_tasks";

/// Everything restored at start-up
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub profile: Option<Profile>,
    pub tasks: Vec<StudyTask>,
}

/// Reads and writes the profile and task records
#[derive(Debug, Clone)]
pub struct Persistence<S> {
    store: S,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn load_profile(&self) -> Result<Option<Profile>, StorageError> {
        self.load(PROFILE_KEY)
    }

    /// Read the task list. Entries that fail validation (a zero duration, a
    /// missing field) are dropped one by one; only a record that is not a
    /// JSON array is reported as malformed.
    pub fn load_tasks(&self) -> Result<Option<Vec<StudyTask>>, StorageError> {
        let Some(entries) = self.load::<Vec<serde_json::Value>>(TASKS_KEY)? else {
            return Ok(None);
        };

        let tasks = entries
            .into_iter()
            .filter_map(|entry| {
                serde_json::from_value::<StudyTask>(entry)
                    .inspect_err(|e| warn!("Dropping stored task: {}", e))
                    .ok()
            })
            .collect();
        Ok(Some(tasks))
    }

    pub fn save_profile(&self, profile: &Profile) -> Result<(), StorageError> {
        self.save(PROFILE_KEY, profile)
    }

    /// Write the task list. An empty list is written as `[]`.
    pub fn save_tasks(&self, tasks: &[StudyTask]) -> Result<(), StorageError> {
        self.save(TASKS_KEY, tasks)
    }

    /// Remove every persisted key. Callers restart the application afterwards.
    pub fn clear(&self) -> Result<(), StorageError> {
        info!("Clearing all persisted data");
        self.store.clear()
    }

    /// Load both records for bootstrap.
    ///
    /// A record that is missing, unreadable, or malformed is treated as "no
    /// saved state" for that record; the problem is logged and start-up goes on.
    pub fn load_snapshot(&self) -> Snapshot {
        let profile = self.load_profile().unwrap_or_else(|e| {
            warn!("Ignoring saved profile: {}", e);
            None
        });
        let tasks = self
            .load_tasks()
            .unwrap_or_else(|e| {
                warn!("Ignoring saved tasks: {}", e);
                None
            })
            .unwrap_or_default();

        info!(
            "Restored snapshot (profile: {}, tasks: {})",
            profile.is_some(),
            tasks.len()
        );
        Snapshot { profile, tasks }
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.store.get(key)? else {
            debug!("No stored value for '{}'", key);
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Malformed {
                key: key.to_string(),
                source,
            })
    }

    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)?;
        self.store.set(key, &json)?;
        debug!("Saved '{}' ({} bytes)", key, json.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use shared::TaskKind;

    fn sample_profile() -> Profile {
        Profile::new(
            "Alex",
            "10th Grade",
            vec!["Math".to_string(), "History".to_string()],
            vec!["Math".to_string()],
            2.0,
        )
        .unwrap()
    }

    fn sample_task(id: &str) -> StudyTask {
        StudyTask {
            id: id.to_string(),
            subject: "Math".to_string(),
            topic: "Fractions".to_string(),
            kind: TaskKind::Study,
            duration_minutes: 45,
            completed: false,
            notes: Some("Work through the examples".to_string()),
        }
    }

    #[test]
    fn test_empty_store_loads_nothing() {
        let persistence = Persistence::new(MemoryStore::new());
        assert_eq!(persistence.load_profile().unwrap(), None);
        assert_eq!(persistence.load_tasks().unwrap(), None);
        assert_eq!(persistence.load_snapshot(), Snapshot::default());
    }

    #[test]
    fn test_profile_and_tasks_are_stored_independently() {
        let store = MemoryStore::new();
        let persistence = Persistence::new(store.clone());

        persistence.save_profile(&sample_profile()).unwrap();
        assert!(store.contains_key(PROFILE_KEY));
        assert!(!store.contains_key(TASKS_KEY));

        persistence.save_tasks(&[sample_task("task::1")]).unwrap();
        let snapshot = persistence.load_snapshot();
        assert_eq!(snapshot.profile, Some(sample_profile()));
        assert_eq!(snapshot.tasks, vec![sample_task("task::1")]);
    }

    #[test]
    fn test_empty_task_list_overwrites_previous_tasks() {
        let persistence = Persistence::new(MemoryStore::new());
        persistence.save_tasks(&[sample_task("task::1")]).unwrap();
        persistence.save_tasks(&[]).unwrap();

        assert_eq!(persistence.load_tasks().unwrap(), Some(vec![]));
    }

    #[test]
    fn test_reads_records_in_camel_case_storage_format() {
        let store = MemoryStore::new();
        store
            .set(
                PROFILE_KEY,
                r#"{"name":"Sam","grade":"General","subjects":["Biology"],"weakSubjects":[],"dailyHours":1.5,"isSetup":true}"#,
            )
            .unwrap();
        store
            .set(
                TASKS_KEY,
                r#"[{"id":"k3j2h1","subject":"Break","topic":"Stretch","type":"break","durationMinutes":10,"completed":true}]"#,
            )
            .unwrap();

        let snapshot = Persistence::new(store).load_snapshot();
        let profile = snapshot.profile.unwrap();
        assert_eq!(profile.name(), "Sam");
        assert_eq!(profile.daily_hours(), 1.5);
        assert_eq!(snapshot.tasks.len(), 1);
        assert_eq!(snapshot.tasks[0].kind, TaskKind::Break);
        assert!(snapshot.tasks[0].completed);
    }

    #[test]
    fn test_stored_task_with_zero_duration_is_dropped() {
        let store = MemoryStore::new();
        store
            .set(
                TASKS_KEY,
                r#"[{"id":"x","subject":"Math","topic":"Fractions","type":"study","durationMinutes":0,"completed":false},
                    {"id":"y","subject":"Math","topic":"Decimals","type":"study","durationMinutes":30,"completed":false}]"#,
            )
            .unwrap();

        let snapshot = Persistence::new(store).load_snapshot();
        assert_eq!(snapshot.tasks.len(), 1);
        assert_eq!(snapshot.tasks[0].id, "y");
        assert!(snapshot.tasks.iter().all(|t| t.duration_minutes > 0));
    }

    #[test]
    fn test_malformed_record_is_reported_by_load() {
        let store = MemoryStore::new();
        store.set(PROFILE_KEY, "{not json").unwrap();

        let err = Persistence::new(store).load_profile().unwrap_err();
        assert!(matches!(err, StorageError::Malformed { ref key, .. } if key == PROFILE_KEY));
    }

    #[test]
    fn test_malformed_record_falls_back_in_snapshot() {
        let store = MemoryStore::new();
        store.set(PROFILE_KEY, "{not json").unwrap();
        let persistence = Persistence::new(store);
        persistence.save_tasks(&[sample_task("task::1")]).unwrap();

        let snapshot = persistence.load_snapshot();
        assert_eq!(snapshot.profile, None);
        assert_eq!(snapshot.tasks.len(), 1);
    }

    #[test]
    fn test_clear_removes_both_records() {
        let store = MemoryStore::new();
        let persistence = Persistence::new(store.clone());
        persistence.save_profile(&sample_profile()).unwrap();
        persistence.save_tasks(&[sample_task("task::1")]).unwrap();

        persistence.clear().unwrap();
        assert!(store.is_empty());
    }
}
