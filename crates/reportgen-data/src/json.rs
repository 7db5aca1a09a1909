//! JSON file data source.
//!
//! Reads the four data files of a data directory. Every query decodes its file
//! afresh, so edits on disk are visible to the next report request.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use serde::de::DeserializeOwned;

use reportgen_core::error::DataError;
use reportgen_core::model::{Assessment, AttemptResponse, Question, Student};
use reportgen_core::traits::DataSource;

use crate::config::DataConfig;

/// A `DataSource` reading JSON arrays from a data directory.
#[derive(Debug, Clone)]
pub struct JsonDataSource {
    config: DataConfig,
}

impl JsonDataSource {
    /// Use the default file names inside `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, DataError> {
        Self::from_config(&DataConfig::in_dir(dir))
    }

    /// Use the directory and file names of a configuration.
    ///
    /// Fails when the directory does not exist; missing files are reported by
    /// the query that needs them.
    pub fn from_config(config: &DataConfig) -> Result<Self, DataError> {
        if !config.dir.is_dir() {
            return Err(DataError::NotFound(config.dir.clone()));
        }
        Ok(Self {
            config: config.clone(),
        })
    }

    fn read_records<T: DeserializeOwned>(&self, file_name: &str) -> Result<Vec<T>, DataError> {
        let path = self.config.dir.join(file_name);
        let file = File::open(&path).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => DataError::NotFound(path.clone()),
            _ => DataError::Io {
                path: path.clone(),
                source,
            },
        })?;

        let records: Vec<T> = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| DataError::Malformed {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(records = records.len(), "loaded {}", path.display());
        Ok(records)
    }

    fn read_keyed<T, F>(&self, file_name: &str, id: F) -> Result<HashMap<String, T>, DataError>
    where
        T: DeserializeOwned,
        F: Fn(&T) -> String,
    {
        Ok(self
            .read_records::<T>(file_name)?
            .into_iter()
            .map(|record| (id(&record), record))
            .collect())
    }
}

impl DataSource for JsonDataSource {
    fn load_students(&self) -> Result<HashMap<String, Student>, DataError> {
        self.read_keyed(&self.config.students_file, |s: &Student| s.id.clone())
    }

    fn load_assessments(&self) -> Result<HashMap<String, Assessment>, DataError> {
        self.read_keyed(&self.config.assessments_file, |a: &Assessment| a.id.clone())
    }

    fn load_questions(&self) -> Result<HashMap<String, Question>, DataError> {
        self.read_keyed(&self.config.questions_file, |q: &Question| q.id.clone())
    }

    fn responses_for_student(&self, student_id: &str) -> Result<Vec<AttemptResponse>, DataError> {
        Ok(self
            .read_records::<AttemptResponse>(&self.config.responses_file)?
            .into_iter()
            .filter(|response| response.is_for_student(student_id))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reportgen_core::{ReportEngine, ReportKind};
    use tempfile::TempDir;

    const STUDENTS: &str = r#"[
        {"id": "student1", "firstName": "Tony", "lastName": "Stark", "yearLevel": 6},
        {"id": "student2", "firstName": "Steve", "lastName": "Rogers", "yearLevel": 6}
    ]"#;

    const ASSESSMENTS: &str = r#"[
        {"id": "assessment1", "name": "Numeracy", "questions": [{"questionId": "numeracy1", "position": 1}]}
    ]"#;

    const QUESTIONS: &str = r#"[
        {
            "id": "numeracy1",
            "stem": "What is 2 + 5?",
            "type": "multiple-choice",
            "strand": "Number and Algebra",
            "config": {
                "options": [{"id": "option1", "label": "A", "value": "7"}],
                "key": "option1"
            }
        }
    ]"#;

    const RESPONSES: &str = r#"[
        {
            "id": "r1",
            "assessmentId": "assessment1",
            "started": "16/12/2019 10:00:00",
            "completed": "16/12/2019 10:46:00",
            "student": {"id": "student1", "yearLevel": 3},
            "responses": [{"questionId": "numeracy1", "response": "option1"}],
            "results": {"rawScore": 1}
        },
        {
            "id": "r2",
            "assessmentId": "assessment2",
            "started": "16/12/2020 10:00:00",
            "completed": "16/12/2020 10:46:00",
            "student": {"id": "student1", "yearLevel": 4},
            "responses": []
        },
        {
            "id": "r3",
            "assessmentId": "assessment1",
            "started": "17/12/2020 10:00:00",
            "student": {"id": "student1", "yearLevel": 4},
            "responses": []
        },
        {
            "id": "orphan",
            "assessmentId": "assessment1",
            "started": "16/12/2019 10:00:00",
            "responses": []
        }
    ]"#;

    fn data_dir() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("students.json"), STUDENTS).unwrap();
        std::fs::write(dir.path().join("assessments.json"), ASSESSMENTS).unwrap();
        std::fs::write(dir.path().join("questions.json"), QUESTIONS).unwrap();
        std::fs::write(dir.path().join("student-responses.json"), RESPONSES).unwrap();
        dir
    }

    #[test]
    fn missing_directory_is_rejected() {
        let err = JsonDataSource::new("/no/such/data/dir").unwrap_err();
        assert!(matches!(err, DataError::NotFound(_)));
    }

    #[test]
    fn loads_reference_data_keyed_by_id() {
        let dir = data_dir();
        let source = JsonDataSource::new(dir.path()).unwrap();

        let students = source.load_students().unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students["student1"].full_name(), "Tony Stark");

        let assessments = source.load_assessments().unwrap();
        assert_eq!(assessments["assessment1"].name, "Numeracy");

        let questions = source.load_questions().unwrap();
        assert_eq!(questions["numeracy1"].strand, "Number and Algebra");
    }

    #[test]
    fn filters_responses() {
        let dir = data_dir();
        let source = JsonDataSource::new(dir.path()).unwrap();

        assert_eq!(source.responses_for_student("student1").unwrap().len(), 3);
        assert!(source.responses_for_student("student2").unwrap().is_empty());

        let by_assessment = source
            .responses_for_student_and_assessment("student1", "assessment1")
            .unwrap();
        let ids: Vec<_> = by_assessment.iter().filter_map(|r| r.id.as_deref()).collect();
        assert_eq!(ids, vec!["r1", "r3"]);

        let latest = source.most_recent_completed_for_student("student1").unwrap().unwrap();
        assert_eq!(latest.id.as_deref(), Some("r2"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = data_dir();
        std::fs::remove_file(dir.path().join("questions.json")).unwrap();
        let source = JsonDataSource::new(dir.path()).unwrap();

        let err = source.load_questions().unwrap_err();
        assert!(matches!(err, DataError::NotFound(path) if path.ends_with("questions.json")));
    }

    #[test]
    fn malformed_file_names_the_path() {
        let dir = data_dir();
        std::fs::write(dir.path().join("students.json"), "[{\"id\": ").unwrap();
        let source = JsonDataSource::new(dir.path()).unwrap();

        let err = source.load_students().unwrap_err();
        assert!(matches!(err, DataError::Malformed { .. }));
        assert!(err.to_string().contains("students.json"));
    }

    #[test]
    fn configured_file_names_are_used() {
        let dir = data_dir();
        std::fs::rename(
            dir.path().join("student-responses.json"),
            dir.path().join("responses-2021.json"),
        )
        .unwrap();

        let config = DataConfig {
            responses_file: "responses-2021.json".into(),
            ..DataConfig::in_dir(dir.path())
        };
        let source = JsonDataSource::from_config(&config).unwrap();
        assert_eq!(source.responses_for_student("student1").unwrap().len(), 3);
    }

    #[test]
    fn records_with_missing_fields_still_load() {
        let dir = data_dir();
        std::fs::write(
            dir.path().join("assessments.json"),
            r#"[{"id": "assessment1", "questions": []}]"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("student-responses.json"),
            r#"[
                {
                    "assessmentId": "assessment1",
                    "started": "16/12/2019 10:00:00",
                    "completed": "16/12/2019 10:46:00",
                    "student": {"id": "student1"},
                    "responses": [
                        {"questionId": "numeracy1", "response": "option1"},
                        {"response": "option1"}
                    ]
                },
                {"started": "17/12/2019 10:00:00", "student": {"id": "student1"}}
            ]"#,
        )
        .unwrap();

        let source = JsonDataSource::new(dir.path()).unwrap();
        let engine = ReportEngine::new(&source);

        let diagnostic = engine.generate(ReportKind::Diagnostic, "student1").unwrap();
        assert!(diagnostic.contains("Tony Stark recently completed Assessment assessment"));
        assert!(diagnostic.contains("Tony Stark got 1 out of 1 correct."));

        let progress = engine.generate(ReportKind::Progress, "student1").unwrap();
        assert!(progress.contains("Tony Stark has completed Assessment assessment 1 times"));
        assert!(progress.contains("Raw Score: 1 out of 2"));

        let feedback = engine.generate(ReportKind::Feedback, "student1").unwrap();
        assert!(feedback.contains("Excellent work!"));
    }

    #[test]
    fn reads_changes_between_calls() {
        let dir = data_dir();
        let source = JsonDataSource::new(dir.path()).unwrap();
        assert_eq!(source.load_students().unwrap().len(), 2);

        std::fs::write(dir.path().join("students.json"), "[]").unwrap();
        assert!(source.load_students().unwrap().is_empty());
    }
}
