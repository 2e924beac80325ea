use opic_question_miner::models::{
    AnswerQuality, AnswerSource, QuestionBank, QuestionType, TopicDescriptor,
};
use opic_question_miner::services::SampleAnswerStore;
use opic_question_miner::utils::logging;
use opic_question_miner::{App, BatchProcessor, Config, Level, QuestionId, TopicTable};
use std::path::Path;
use std::sync::Arc;

const WORK_LESSON: &str = "\
2강 직장, 업무

Q2: Describe your office and the people you work with.
Q1: What do you do for a living these days?

Sample Answer 1: I work as a software engineer at a mid-sized company in Seoul.
Sample Answer 2: My office is on the tenth floor, and my coworkers are friendly and helpful.

Useful Expressions:
• on top of that
• as a matter of fact
";

const PARK_LESSON: &str = "\
Question 1: How often do you go to the park near your home?
Answer 1: I go there almost every weekend with my dog.
유용한 표현: • as a matter of fact • 솔직히 말하면
";

fn topic(id: &str, file: &str, audio: Option<&str>) -> TopicDescriptor {
    TopicDescriptor {
        id: id.to_string(),
        name: id.to_string(),
        name_ko: id.to_string(),
        pdf_file_name: Some(file.to_string()),
        audio_file_name: audio.map(str::to_string),
    }
}

fn lesson_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("work.txt"), WORK_LESSON).unwrap();
    std::fs::write(dir.path().join("park.txt"), PARK_LESSON).unwrap();
    std::fs::write(dir.path().join("readme.txt"), "Q1: This file has no topic entry.").unwrap();
    dir
}

fn config(folder: &Path, out: &Path) -> Config {
    Config {
        pdf_folder: folder.to_path_buf(),
        output_file: out.join("questions.json"),
        sample_answer_store: out.join("sample-answers.json"),
        output_log_file: out.join("output.txt"),
        document_extensions: vec!["txt".to_string()],
        ..Config::default()
    }
}

fn topics() -> TopicTable {
    TopicTable::new(vec![
        topic("work", "work.txt", Some("2강_직장, 업무.mp3")),
        topic("park", "park.txt", None),
    ])
}

#[tokio::test]
async fn test_batch_orders_documents_and_questions() {
    logging::init(false);
    let dir = lesson_dir();
    let out = tempfile::tempdir().unwrap();

    let processor = BatchProcessor::new(&config(dir.path(), out.path()), Arc::new(topics()));
    let report = processor.process_directory(dir.path(), Level::IH).await.unwrap();

    // park.txt 排在 work.txt 之前；readme.txt 没有主题被跳过
    let ids: Vec<String> = report.questions.iter().map(|q| q.id.to_string()).collect();
    assert_eq!(ids, vec!["park-q1", "work-q1", "work-q2"]);
    assert_eq!(report.parsed, 2);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.failed, 0);

    let work_q2 = &report.questions[2];
    assert_eq!(work_q2.question_type, QuestionType::Narration);
    assert_eq!(
        work_q2.sample_answer.as_deref(),
        Some("My office is on the tenth floor, and my coworkers are friendly and helpful.")
    );
    assert_eq!(
        work_q2.useful_expressions.as_deref(),
        Some(&["on top of that".to_string(), "as a matter of fact".to_string()][..])
    );
    assert_eq!(
        work_q2.audio_path.as_deref(),
        Some("/audio/hackers/2강_직장, 업무.mp3")
    );

    let park_q1 = &report.questions[0];
    assert_eq!(park_q1.level, Level::IH);
    assert!(park_q1.audio_path.is_none());
    assert_eq!(
        park_q1.useful_expressions.as_deref(),
        Some(&["as a matter of fact".to_string(), "솔직히 말하면".to_string()][..])
    );
}

#[tokio::test]
async fn test_unmatched_documents_do_not_change_output() {
    let dir = lesson_dir();
    let out = tempfile::tempdir().unwrap();
    let processor = BatchProcessor::new(&config(dir.path(), out.path()), Arc::new(topics()));

    let before = processor.process_directory(dir.path(), Level::AL).await.unwrap();
    std::fs::write(
        dir.path().join("extra.txt"),
        "Q1: Another document without any topic descriptor.",
    )
    .unwrap();
    let after = processor.process_directory(dir.path(), Level::AL).await.unwrap();

    assert_eq!(before.questions, after.questions);
    assert_eq!(after.skipped, before.skipped + 1);
}

#[tokio::test]
async fn test_batch_is_idempotent() {
    let dir = lesson_dir();
    let out = tempfile::tempdir().unwrap();
    let processor = BatchProcessor::new(&config(dir.path(), out.path()), Arc::new(topics()));

    let first = processor.process_directory(dir.path(), Level::IH).await.unwrap();
    let second = processor.process_directory(dir.path(), Level::IH).await.unwrap();
    assert_eq!(first.questions, second.questions);
}

#[tokio::test]
async fn test_app_writes_bank_and_answer_store() {
    let dir = lesson_dir();
    let out = tempfile::tempdir().unwrap();

    let topics_file = out.path().join("topics.toml");
    std::fs::write(
        &topics_file,
        r#"
[[topics]]
id = "work"
name = "Work & Office"
nameKo = "직장, 업무"
pdfFileName = "work.txt"

[[topics]]
id = "park"
name = "Going to Park"
nameKo = "공원가기"
pdfFileName = "park.txt"
"#,
    )
    .unwrap();

    let mut config = config(dir.path(), out.path());
    config.topics_file = Some(topics_file);
    let output_file = config.output_file.clone();
    let store_file = config.sample_answer_store.clone();

    let summary = App::initialize(config).unwrap().run().await.unwrap();
    assert_eq!(summary.questions, 6);
    assert_eq!(summary.answers_saved, 3);
    assert_eq!(summary.failed_documents, 0);

    let bank: QuestionBank =
        serde_json::from_str(&std::fs::read_to_string(&output_file).unwrap()).unwrap();
    assert_eq!(bank.ih.len(), 3);
    assert_eq!(bank.al.len(), 3);
    assert!(bank.al.iter().all(|q| q.level == Level::AL));

    let store = SampleAnswerStore::new(store_file);
    let answer = store
        .get(&QuestionId::new("park", 1))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(answer.text, "I go there almost every weekend with my dog.");
    assert_eq!(answer.source, AnswerSource::Pdf);
    assert_eq!(answer.quality, AnswerQuality::Unverified);
    assert_eq!(store.unverified().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_app_fails_on_missing_directory() {
    let out = tempfile::tempdir().unwrap();
    let config = config(&out.path().join("missing"), out.path());

    let err = App::initialize(config).unwrap().run().await.unwrap_err();
    assert!(err.is_fatal());
}
