//! The `reportgen init` command.

use std::path::Path;

use anyhow::{Context, Result};

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("reportgen.toml"), SAMPLE_CONFIG)?;

    std::fs::create_dir_all("data").context("failed to create data directory")?;
    for (file_name, content) in [
        ("students.json", SAMPLE_STUDENTS),
        ("assessments.json", SAMPLE_ASSESSMENTS),
        ("questions.json", SAMPLE_QUESTIONS),
        ("student-responses.json", SAMPLE_RESPONSES),
    ] {
        write_if_missing(&Path::new("data").join(file_name), content)?;
    }

    println!("\nNext steps:");
    println!("  1. Replace the sample files in data/ with your own records");
    println!("  2. Run: reportgen types");
    println!("  3. Run: reportgen generate --student student1 --report diagnostic");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# reportgen configuration

[data]
dir = "./data/"
students_file = "students.json"
assessments_file = "assessments.json"
questions_file = "questions.json"
responses_file = "student-responses.json"
"#;

const SAMPLE_STUDENTS: &str = r#"[
  {"id": "student1", "firstName": "Tony", "lastName": "Stark", "yearLevel": 6},
  {"id": "student2", "firstName": "Steve", "lastName": "Rogers", "yearLevel": 6}
]
"#;

const SAMPLE_ASSESSMENTS: &str = r#"[
  {
    "id": "assessment1",
    "name": "Numeracy",
    "questions": [
      {"questionId": "numeracy1", "position": 1},
      {"questionId": "numeracy2", "position": 2},
      {"questionId": "measurement1", "position": 3},
      {"questionId": "measurement2", "position": 4}
    ]
  }
]
"#;

const SAMPLE_QUESTIONS: &str = r#"[
  {
    "id": "numeracy1",
    "stem": "What is the 'median' of the following group of numbers 5, 21, 7, 18, 9?",
    "type": "multiple-choice",
    "strand": "Number and Algebra",
    "position": 1,
    "config": {
      "options": [
        {"id": "option1", "label": "A", "value": "7"},
        {"id": "option2", "label": "B", "value": "9"},
        {"id": "option3", "label": "C", "value": "18"},
        {"id": "option4", "label": "D", "value": "21"}
      ],
      "key": "option2",
      "hint": "You must first arrange the numbers in ascending order. The median is the middle term, which in this case is 9"
    }
  },
  {
    "id": "numeracy2",
    "stem": "Which number is the largest?",
    "type": "multiple-choice",
    "strand": "Number and Algebra",
    "position": 2,
    "config": {
      "options": [
        {"id": "option1", "label": "A", "value": "0.5"},
        {"id": "option2", "label": "B", "value": "0.05"},
        {"id": "option3", "label": "C", "value": "0.55"},
        {"id": "option4", "label": "D", "value": "0.505"}
      ],
      "key": "option3",
      "hint": "Compare the tenths digit first, then the hundredths."
    }
  },
  {
    "id": "measurement1",
    "stem": "How many millimetres are in 3.5 centimetres?",
    "type": "multiple-choice",
    "strand": "Measurement and Geometry",
    "position": 3,
    "config": {
      "options": [
        {"id": "option1", "label": "A", "value": "0.35"},
        {"id": "option2", "label": "B", "value": "3.5"},
        {"id": "option3", "label": "C", "value": "35"},
        {"id": "option4", "label": "D", "value": "350"}
      ],
      "key": "option3",
      "hint": "There are 10 millimetres in 1 centimetre."
    }
  },
  {
    "id": "measurement2",
    "stem": "A rectangle is 4 cm long and 3 cm wide. What is its perimeter?",
    "type": "multiple-choice",
    "strand": "Measurement and Geometry",
    "position": 4,
    "config": {
      "options": [
        {"id": "option1", "label": "A", "value": "7"},
        {"id": "option2", "label": "B", "value": "12"},
        {"id": "option3", "label": "C", "value": "14"},
        {"id": "option4", "label": "D", "value": "24"}
      ],
      "key": "option3"
    }
  }
]
"#;

const SAMPLE_RESPONSES: &str = r#"[
  {
    "id": "studentReponse1",
    "assessmentId": "assessment1",
    "assigned": "14/12/2019 10:31:00",
    "started": "16/12/2019 10:00:00",
    "completed": "16/12/2019 10:46:00",
    "student": {"id": "student1", "yearLevel": 3},
    "responses": [
      {"questionId": "numeracy1", "response": "option1"},
      {"questionId": "numeracy2", "response": "option1"},
      {"questionId": "measurement1", "response": "option3"},
      {"questionId": "measurement2", "response": "option2"}
    ],
    "results": {"rawScore": 1}
  },
  {
    "id": "studentReponse2",
    "assessmentId": "assessment1",
    "assigned": "14/12/2020 10:31:00",
    "started": "16/12/2020 10:00:00",
    "completed": "16/12/2020 10:46:00",
    "student": {"id": "student1", "yearLevel": 4},
    "responses": [
      {"questionId": "numeracy1", "response": "option2"},
      {"questionId": "numeracy2", "response": "option1"},
      {"questionId": "measurement1", "response": "option3"},
      {"questionId": "measurement2", "response": "option2"}
    ],
    "results": {"rawScore": 2}
  },
  {
    "id": "studentReponse3",
    "assessmentId": "assessment1",
    "assigned": "14/12/2021 10:31:00",
    "started": "16/12/2021 10:00:00",
    "completed": "16/12/2021 10:46:00",
    "student": {"id": "student1", "yearLevel": 5},
    "responses": [
      {"questionId": "numeracy1", "response": "option2"},
      {"questionId": "numeracy2", "response": "option3"},
      {"questionId": "measurement1", "response": "option2"},
      {"questionId": "measurement2", "response": "option3"}
    ],
    "results": {"rawScore": 3}
  },
  {
    "id": "studentReponse4",
    "assessmentId": "assessment1",
    "assigned": "14/12/2021 10:31:00",
    "started": "16/12/2021 11:00:00",
    "completed": "16/12/2021 11:30:00",
    "student": {"id": "student2", "yearLevel": 6},
    "responses": [
      {"questionId": "numeracy1", "response": "option2"},
      {"questionId": "numeracy2", "response": "option3"},
      {"questionId": "measurement1", "response": "option3"},
      {"questionId": "measurement2", "response": "option3"}
    ],
    "results": {"rawScore": 4}
  },
  {
    "id": "studentReponse5",
    "assessmentId": "assessment1",
    "assigned": "14/12/2021 10:31:00",
    "started": "18/12/2021 09:00:00",
    "student": {"id": "student2", "yearLevel": 6},
    "responses": [
      {"questionId": "numeracy1", "response": "option1"}
    ]
  }
]
"#;
