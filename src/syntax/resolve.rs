//! Overlap resolution and span application
//!
//! Spans are applied in the order the highlighter produced them, so for any
//! character covered by several spans the last one applied decides how it
//! looks. [`resolve`] computes that outcome directly; [`apply_spans`] replays
//! it against a [`StyleSink`].

use super::style::Span;
use super::tokens::Category;

/// A surface that can display category styling over character ranges
pub trait StyleSink {
    /// Remove every range styled with `category`
    fn clear_style(&mut self, category: Category);

    /// Style `start..end` (character offsets) with `category`
    fn apply_style(&mut self, category: Category, start: usize, end: usize);
}

/// Clear every category on `sink`, then apply `spans` in order
pub fn apply_spans(spans: &[Span], sink: &mut dyn StyleSink) {
    for category in Category::ALL {
        sink.clear_style(category);
    }
    for span in spans {
        sink.apply_style(span.category, span.start, span.end);
    }
}

/// Flatten an ordered span list into non-overlapping runs
///
/// Each character takes the category of the last span covering it. Runs are
/// returned in document order and adjacent characters with the same category
/// are merged. Spans reaching past `len` are clipped.
pub fn resolve(spans: &[Span], len: usize) -> Vec<Span> {
    let mut owner: Vec<Option<Category>> = vec![None; len];
    for span in spans {
        let end = span.end.min(len);
        if span.start < end {
            owner[span.start..end].fill(Some(span.category));
        }
    }

    let mut runs = Vec::new();
    let mut current: Option<Span> = None;
    for (pos, slot) in owner.into_iter().enumerate() {
        if let (Some(category), Some(run)) = (slot, current.as_mut()) {
            if run.category == category && run.end == pos {
                run.end = pos + 1;
                continue;
            }
        }
        if let Some(run) = current.take() {
            runs.push(run);
        }
        if let Some(category) = slot {
            current = Some(Span::new(category, pos, pos + 1));
        }
    }
    if let Some(run) = current {
        runs.push(run);
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Records which category each character currently shows
    #[derive(Default)]
    struct RecordingSink {
        tags: HashMap<Category, Vec<(usize, usize)>>,
        order: Vec<Category>,
        clears: usize,
    }

    impl RecordingSink {
        fn visible(&self, len: usize) -> Vec<Option<Category>> {
            let mut out = vec![None; len];
            for category in &self.order {
                for &(s, e) in self.tags.get(category).into_iter().flatten() {
                    out[s..e.min(len)].fill(Some(*category));
                }
            }
            out
        }
    }

    impl StyleSink for RecordingSink {
        fn clear_style(&mut self, category: Category) {
            self.tags.remove(&category);
            self.clears += 1;
        }

        fn apply_style(&mut self, category: Category, start: usize, end: usize) {
            self.tags.entry(category).or_default().push((start, end));
            self.order.retain(|c| *c != category);
            self.order.push(category);
        }
    }

    #[test]
    fn test_last_write_wins() {
        let spans = vec![
            Span::new(Category::Keyword, 0, 6),
            Span::new(Category::SpecialKeyword, 0, 6),
            Span::new(Category::Variable, 4, 8),
        ];
        assert_eq!(resolve(&spans, 10), vec![
            Span::new(Category::SpecialKeyword, 0, 4),
            Span::new(Category::Variable, 4, 8),
        ]);
    }

    #[test]
    fn test_adjacent_runs_merge() {
        let spans = vec![
            Span::new(Category::String, 0, 2),
            Span::new(Category::String, 2, 4),
        ];
        assert_eq!(resolve(&spans, 4), vec![Span::new(Category::String, 0, 4)]);
    }

    #[test]
    fn test_clips_to_length() {
        let spans = vec![Span::new(Category::Comment, 2, 50)];
        assert_eq!(resolve(&spans, 5), vec![Span::new(Category::Comment, 2, 5)]);
        assert!(resolve(&spans, 0).is_empty());
    }

    #[test]
    fn test_apply_clears_every_category_first() {
        let mut sink = RecordingSink::default();
        apply_spans(&[Span::new(Category::Comment, 0, 3)], &mut sink);
        assert_eq!(sink.clears, Category::ALL.len());
        assert_eq!(sink.tags[&Category::Comment], vec![(0, 3)]);
    }

    #[test]
    fn test_reapplying_is_idempotent() {
        let spans = vec![
            Span::new(Category::Comment, 0, 9),
            Span::new(Category::Variable, 10, 11),
        ];
        let mut sink = RecordingSink::default();
        apply_spans(&spans, &mut sink);
        let first = sink.visible(12);
        apply_spans(&spans, &mut sink);
        assert_eq!(sink.visible(12), first);
    }
}
