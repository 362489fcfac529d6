/// Terminal punctuation that can end a Chinese sentence.
const TERMINALS: [char; 3] = ['。', '！', '？'];

/// Double-quote marks counted by the quote-balance heuristic. Straight and
/// curly forms are treated alike since source texts mix them.
const QUOTES: [char; 3] = ['"', '“', '”'];

/// Split a paragraph into sentences on terminal punctuation, keeping quoted
/// dialogue intact.
///
/// A terminal mark only ends a sentence when the number of quote marks seen
/// since the last accepted boundary is even; an odd count means the mark sits
/// inside an open quotation (e.g. `他说：“你好！”然后走了。` stays one
/// sentence). Trailing text without terminal punctuation becomes a final
/// sentence of its own.
pub fn split_sentences(paragraph: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut span_start = 0;
    let mut quote_count = 0usize;

    for (pos, ch) in paragraph.char_indices() {
        if QUOTES.contains(&ch) {
            quote_count += 1;
            continue;
        }
        if TERMINALS.contains(&ch) && quote_count % 2 == 0 {
            let span_end = pos + ch.len_utf8();
            let sentence = paragraph[span_start..span_end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            span_start = span_end;
            quote_count = 0;
        }
    }

    if span_start < paragraph.len() {
        let tail = paragraph[span_start..].trim();
        if !tail.is_empty() {
            sentences.push(tail.to_string());
        }
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_terminal_punctuation() {
        let sentences = split_sentences("今天天气很好。我们去公园吧！你来吗？");
        assert_eq!(sentences, vec!["今天天气很好。", "我们去公园吧！", "你来吗？"]);
    }

    #[test]
    fn test_quoted_dialogue_stays_one_sentence() {
        let sentences = split_sentences("他说：“你好！”然后走了。");
        assert_eq!(sentences, vec!["他说：“你好！”然后走了。"]);
    }

    #[test]
    fn test_straight_quotes_also_balance() {
        let sentences = split_sentences("他说：\"走吧！\"大家都走了。");
        assert_eq!(sentences, vec!["他说：\"走吧！\"大家都走了。"]);
    }

    #[test]
    fn test_no_terminal_punctuation_yields_whole_paragraph() {
        assert_eq!(split_sentences("  没有标点的段落  "), vec!["没有标点的段落"]);
    }

    #[test]
    fn test_trailing_text_becomes_final_sentence() {
        let sentences = split_sentences("第一句。然后是没结尾的");
        assert_eq!(sentences, vec!["第一句。", "然后是没结尾的"]);
    }

    #[test]
    fn test_concatenation_reconstructs_paragraph() {
        let paragraph = "今天天气很好。他说：“你好！”然后走了。最后一句？";
        let rebuilt: String = split_sentences(paragraph).concat();
        assert_eq!(rebuilt, paragraph);
    }

    #[test]
    fn test_quote_balance_resets_at_accepted_boundary() {
        // The closed quotation in the first sentence must not poison the
        // boundary decision for the second.
        let sentences = split_sentences("他说：“早。”她点头。");
        assert_eq!(sentences, vec!["他说：“早。”她点头。"]);

        let sentences = split_sentences("“早。”她说。然后呢？");
        assert_eq!(sentences.last().unwrap(), "然后呢？");
    }
}
