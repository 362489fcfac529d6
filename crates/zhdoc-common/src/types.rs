use serde::{Deserialize, Serialize};

/// The fully segmented document tree returned to clients.
///
/// Translation, pinyin and part-of-speech fields are reserved for later
/// annotation passes and are never populated by the segmentation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub full_text: String,
    pub full_translation: Option<String>,
    pub paragraphs: Vec<Paragraph>,
}

/// One paragraph of the source text. `id` is the 0-based position among
/// paragraphs in source order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    pub id: usize,
    pub text: String,
    pub translation: Option<String>,
    pub pinyin: Option<String>,
    pub sentences: Vec<Sentence>,
}

/// One sentence within a paragraph. `id` restarts at 0 in every paragraph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentence {
    pub id: usize,
    pub text: String,
    pub translation: Option<String>,
    pub words: Vec<Word>,
}

/// One extracted word. `index` restarts at 0 in every sentence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub text: String,
    pub index: usize,
    pub pinyin: Option<String>,
    pub part_of_speech: Option<String>,
    pub translation: Option<String>,
}

impl Word {
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
            pinyin: None,
            part_of_speech: None,
            translation: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let doc = Document {
            full_text: "你好。".to_string(),
            full_translation: None,
            paragraphs: vec![Paragraph {
                id: 0,
                text: "你好。".to_string(),
                translation: None,
                pinyin: None,
                sentences: vec![Sentence {
                    id: 0,
                    text: "你好。".to_string(),
                    translation: None,
                    words: vec![Word::new("你好", 0)],
                }],
            }],
        };

        let json = serde_json::to_value(&doc).unwrap();
        assert!(json.get("fullText").is_some());
        assert!(json.get("fullTranslation").is_some());
        let word = &json["paragraphs"][0]["sentences"][0]["words"][0];
        assert!(word.get("partOfSpeech").is_some());
        assert_eq!(word["index"], 0);
    }
}
