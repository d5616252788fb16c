//! # HTML Extraction
//!
//! Builds a question file from an HTML export of a question document.
//! Elements are read in document order:
//!
//! - a `<p>` whose text is a short, purely alphabetic title starts a topic
//!   (a repeated title starts that topic over)
//! - any other `<p>` text is a question in the current topic
//! - every `<li>` under a `<ul>` is a question in the current topic
//!
//! Content before the first topic is dropped. The result is written as a
//! 4-space indented JSON object that `QuestionSet::from_json` reads back.

use std::fmt;
use std::fs;
use std::path::Path;

use log::{debug, info};
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::core::questions::QuestionSet;

/// Longest title, in words, that can start a topic.
const MAX_TOPIC_WORDS: usize = 3;

#[derive(Debug)]
pub enum ExtractError {
    Io(std::io::Error),
    Selector(String),
    Json(serde_json::Error),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::Io(e) => write!(f, "extract I/O error: {e}"),
            ExtractError::Selector(msg) => write!(f, "invalid selector: {msg}"),
            ExtractError::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for ExtractError {}

/// Whether a paragraph's text reads as a topic title.
pub fn is_topic_title(text: &str) -> bool {
    !text.is_empty()
        && text.split_whitespace().count() <= MAX_TOPIC_WORDS
        && text.chars().all(char::is_alphabetic)
}

/// Parse an HTML document into an ordered question set.
pub fn extract_questions(html: &str) -> Result<QuestionSet, ExtractError> {
    let blocks = selector("p, ul")?;
    let items = selector("li")?;
    let document = Html::parse_document(html);

    let mut set = QuestionSet::new();
    let mut current: Option<String> = None;

    for element in document.select(&blocks) {
        match element.value().name() {
            "p" => {
                let text = element_text(element);
                if is_topic_title(&text) {
                    debug!("Topic: {}", text);
                    set.insert(text.clone(), Vec::new());
                    current = Some(text);
                } else if let Some(topic) = &current
                    && !text.is_empty()
                {
                    set.append(topic, text);
                }
            }
            "ul" => {
                let Some(topic) = &current else {
                    continue;
                };
                for item in element.select(&items) {
                    let text = element_text(item);
                    if !text.is_empty() {
                        set.append(topic, text);
                    }
                }
            }
            _ => {}
        }
    }

    Ok(set)
}

/// Render a question set as 4-space indented JSON.
pub fn to_pretty_json(set: &QuestionSet) -> Result<Vec<u8>, ExtractError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    set.serialize(&mut serializer).map_err(ExtractError::Json)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Read `input` as HTML and write the extracted questions to `output`.
pub fn run_extract(input: &Path, output: &Path) -> Result<QuestionSet, ExtractError> {
    let html = fs::read_to_string(input).map_err(ExtractError::Io)?;
    let set = extract_questions(&html)?;
    fs::write(output, to_pretty_json(&set)?).map_err(ExtractError::Io)?;
    info!(
        "Extracted {} questions in {} topics from {} to {}",
        set.question_count(),
        set.len(),
        input.display(),
        output.display()
    );
    Ok(set)
}

fn selector(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::Selector(format!("{css}: {e:?}")))
}

/// Text of an element with each text node trimmed and blanks skipped.
fn element_text(element: ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"<!DOCTYPE html>
<html>
<body>
  <p>Questions collected for the weekly quiz night</p>
  <ul><li>Dropped before any topic</li></ul>
  <p>Math</p>
  <ul>
    <li>2+2?</li>
    <li>Is <b>7</b> prime?</li>
  </ul>
  <p>What is a derivative?</p>
  <p>History</p>
  <ul><li>Year WW2 started?</li><li>   </li></ul>
  <p></p>
  <p>Math</p>
  <ul><li>Sum of angles in a triangle?</li></ul>
  <p>Art</p>
</body>
</html>"#;

    #[test]
    fn test_topic_title_rules() {
        assert!(is_topic_title("Math"));
        assert!(is_topic_title("Géographie"));
        assert!(!is_topic_title(""));
        assert!(!is_topic_title("2+2?"));
        assert!(!is_topic_title("What is a derivative?"));
        assert!(!is_topic_title("Chapter1"));
    }

    #[test]
    fn test_extracts_topics_in_document_order() {
        let set = extract_questions(FIXTURE).unwrap();
        let topics: Vec<&str> = set.topics().collect();
        assert_eq!(topics, vec!["Math", "History", "Art"]);
    }

    #[test]
    fn test_paragraphs_and_list_items_become_questions() {
        let set = extract_questions(FIXTURE).unwrap();
        assert_eq!(set.questions("History").unwrap(), ["Year WW2 started?"]);
        assert!(set.questions("Art").unwrap().is_empty());
    }

    #[test]
    fn test_repeated_topic_starts_over_in_place() {
        let set = extract_questions(FIXTURE).unwrap();
        // The second "Math" heading discards the first block's questions
        assert_eq!(set.questions("Math").unwrap(), ["Sum of angles in a triangle?"]);
        assert_eq!(set.topics().next(), Some("Math"));
    }

    #[test]
    fn test_nested_text_is_joined() {
        let html = "<p>Math</p><ul><li>Is <b>7</b> prime?</li></ul><p>Why <i>is</i> it?</p>";
        let set = extract_questions(html).unwrap();
        assert_eq!(set.questions("Math").unwrap(), ["Is7prime?", "Whyisit?"]);
    }

    #[test]
    fn test_document_without_topics_is_empty() {
        let html = "<p>Just an introduction, nothing else.</p><ul><li>orphan</li></ul>";
        assert!(extract_questions(html).unwrap().is_empty());
    }

    #[test]
    fn test_pretty_json_round_trips_through_loader() {
        let set = extract_questions(FIXTURE).unwrap();
        let json = String::from_utf8(to_pretty_json(&set).unwrap()).unwrap();
        assert!(json.starts_with("{\n    \"Math\": [\n        \"Sum of angles"));
        assert!(json.contains("\"Art\": []"));
        assert_eq!(QuestionSet::from_json(&json).unwrap(), set);
    }

    #[test]
    fn test_run_extract_writes_output_file() {
        let dir = std::env::temp_dir().join(format!("quizcycle-extract-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let input = dir.join("questions.html");
        let output = dir.join("questions.json");
        fs::write(&input, FIXTURE).unwrap();

        let set = run_extract(&input, &output).unwrap();
        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(QuestionSet::from_json(&written).unwrap(), set);
        assert_eq!(set.question_count(), 2);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_run_extract_missing_input_is_io_error() {
        let input = std::env::temp_dir().join("quizcycle-no-such-dir/questions.html");
        let output = std::env::temp_dir().join("quizcycle-no-such-dir/questions.json");
        assert!(matches!(run_extract(&input, &output), Err(ExtractError::Io(_))));
    }
}
