use crate::paragraph::split_paragraphs;
use crate::sentence::split_sentences;
use crate::token::TokenEstimator;

/// Plan extraction chunks for `text` so that each chunk's estimated token
/// cost stays strictly below `budget`.
///
/// Whole paragraphs are packed greedily, first-fit; a paragraph that alone
/// exceeds the budget is split into consecutive sentence groups instead. No
/// rebalancing happens once a chunk is emitted, so the result is not a
/// minimal packing.
///
/// `paragraphs` lets callers that already split the text avoid doing it
/// twice.
pub fn plan_chunks(
    text: &str,
    estimator: &dyn TokenEstimator,
    budget: usize,
    paragraphs: Option<&[&str]>,
) -> Vec<String> {
    let total = estimator.estimate(text);
    if total < budget {
        return vec![text.to_string()];
    }

    let chunk_count = total.div_ceil(budget);

    let computed;
    let paragraphs: &[&str] = match paragraphs {
        Some(paragraphs) => paragraphs,
        None => {
            computed = split_paragraphs(text);
            &computed
        }
    };

    let mut chunks: Vec<String> = Vec::new();
    for &paragraph in paragraphs {
        let cost = estimator.estimate(paragraph);

        if cost < budget {
            let fits_last = match chunks.last() {
                Some(last) => estimator.estimate(last) + cost < budget,
                None => false,
            };
            if fits_last {
                let last = chunks.len() - 1;
                chunks[last].push_str(paragraph);
            } else {
                chunks.push(paragraph.to_string());
            }
            continue;
        }

        // Oversized paragraph: fall back to sentence groups. This path does
        // not merge with the paragraph-level packing above.
        let sentences = split_sentences(paragraph);
        if sentences.is_empty() {
            // Whitespace-only paragraph: trimming left nothing to group.
            continue;
        }
        let per_chunk = sentences.len().div_ceil(chunk_count);
        for group in sentences.chunks(per_chunk) {
            chunks.push(group.concat());
        }
    }

    chunks
}

/// Split one over-budget sentence into overlapping equal-length character
/// windows.
///
/// Interior window edges are extended by ~10% of the window length on each
/// side (clamped to the sentence) so neighboring windows share context; the
/// extraction adapter strips the resulting duplicate tokens afterwards.
pub fn plan_overlap_windows(
    sentence: &str,
    estimator: &dyn TokenEstimator,
    budget: usize,
) -> Vec<String> {
    let total = estimator.estimate(sentence);
    if total < budget {
        return vec![sentence.to_string()];
    }

    let chars: Vec<char> = sentence.chars().collect();
    // 1.3 oversampling keeps each extended window itself under budget.
    let window_count = ((total as f64 * 1.3) / budget as f64).ceil() as usize;
    let window_len = chars.len().div_ceil(window_count);
    let margin = window_len / 10;

    let mut windows = Vec::with_capacity(window_count);
    for i in 0..window_count {
        let nominal_start = i * window_len;
        if nominal_start >= chars.len() {
            break;
        }
        let nominal_end = (nominal_start + window_len).min(chars.len());
        let start = nominal_start.saturating_sub(margin);
        let end = (nominal_end + margin).min(chars.len());
        windows.push(chars[start..end].iter().collect());
    }

    windows
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One token per character, for exact arithmetic in tests.
    struct CharEstimator;

    impl TokenEstimator for CharEstimator {
        fn estimate(&self, text: &str) -> usize {
            text.chars().count()
        }
    }

    #[test]
    fn test_under_budget_text_is_one_chunk() {
        let text = "很短。";
        let chunks = plan_chunks(text, &CharEstimator, 100, None);
        assert_eq!(chunks, vec![text.to_string()]);
    }

    #[test]
    fn test_chunks_stay_under_budget() {
        let text = "第一段有几个字。\n第二段也有几个字。\n第三段再来几个字。\n第四段收个尾。";
        let budget = 20;
        let chunks = plan_chunks(text, &CharEstimator, budget, None);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(CharEstimator.estimate(chunk) < budget, "chunk over budget: {chunk}");
        }
    }

    #[test]
    fn test_small_paragraphs_are_packed_together() {
        let text = "一二三。\n四五六。\n七八九。";
        // Total 12 >= 10, but pairs of paragraphs fit (4 + 4 < 10).
        let chunks = plan_chunks(text, &CharEstimator, 10, None);
        assert_eq!(chunks, vec!["一二三。四五六。".to_string(), "七八九。".to_string()]);
    }

    #[test]
    fn test_oversized_paragraph_falls_back_to_sentence_groups() {
        let paragraph = "第一句话说完了。第二句话也说完了。第三句话还在说。第四句话结束了。";
        let budget = 20;
        let chunks = plan_chunks(paragraph, &CharEstimator, budget, None);
        assert!(chunks.len() > 1);
        assert_eq!(chunks.concat(), paragraph);
        for chunk in &chunks {
            assert!(CharEstimator.estimate(chunk) < budget);
        }
    }

    #[test]
    fn test_oversized_whitespace_paragraph_is_skipped() {
        // A blank-padded paragraph can exceed the budget yet trim down to no
        // sentences at all; it must be dropped, not grouped.
        let text = " ".repeat(50);
        let chunks = plan_chunks(&text, &CharEstimator, 10, None);
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_reuses_caller_provided_paragraphs() {
        let text = "一二三。\n四五六。";
        let paragraphs = split_paragraphs(text);
        let chunks = plan_chunks(text, &CharEstimator, 5, Some(&paragraphs));
        assert_eq!(chunks, vec!["一二三。".to_string(), "四五六。".to_string()]);
    }

    #[test]
    fn test_overlap_windows_cover_the_sentence() {
        let sentence: String = "天地玄黄宇宙洪荒日月盈昃辰宿列张寒来暑往秋收冬藏".repeat(3);
        let windows = plan_overlap_windows(&sentence, &CharEstimator, 30);
        assert!(windows.len() > 1);

        // Every character of the sentence appears in some window, in order.
        let first = &windows[0];
        assert!(sentence.starts_with(first.as_str()));
        let last = windows.last().unwrap();
        assert!(sentence.ends_with(last.as_str()));
    }

    #[test]
    fn test_interior_windows_share_context_with_neighbors() {
        let sentence: String = "甲乙丙丁戊己庚辛壬癸".repeat(10);
        let windows = plan_overlap_windows(&sentence, &CharEstimator, 30);
        assert!(windows.len() >= 2);

        let total_window_chars: usize = windows.iter().map(|w| w.chars().count()).sum();
        // Overlap margins make the windows longer than the sentence itself.
        assert!(total_window_chars > sentence.chars().count());
    }

    #[test]
    fn test_under_budget_sentence_is_one_window() {
        let windows = plan_overlap_windows("短句。", &CharEstimator, 100);
        assert_eq!(windows, vec!["短句。".to_string()]);
    }
}
