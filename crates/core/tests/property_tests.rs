use doxygen_filter_core::pipeline::CompositionMode;
use doxygen_filter_core::{FilterPipeline, rename_underscored_default, suppress_macros_default};
use proptest::prelude::*;

/// Lines mixing ordinary C, marker-prefixed macros, continuations and renamable calls.
fn header_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z ;{}*/]{0,20}\n",
        "#define PI_[A-Za-z]{1,6}\\([a-z, ]{0,8}\\) \\\\\n",
        "#define PI_[A-Za-z]{1,6}\\([a-z=() ]{0,8}\\)[a-z ]{0,5}\n",
        "  [a-z();]{0,12} \\\\\n",
        "int PI_[A-Za-z0-9]{1,6}_\\([a-z ,]{0,10}\\);\n",
        "[a-z ]{0,10}",
    ]
}

/// Lines that can never contain the marker prefix.
fn plain_line() -> impl Strategy<Value = String> {
    "[a-z#_(),; \\\\]{0,30}\n?"
}

fn is_subsequence(needle: &[String], haystack: &[String]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|line| rest.any(|candidate| candidate == line))
}

proptest! {
    #[test]
    fn renamer_preserves_line_count(lines in prop::collection::vec(header_line(), 0..40)) {
        prop_assert_eq!(rename_underscored_default(&lines).len(), lines.len());
    }

    #[test]
    fn renamer_removes_at_most_one_char_per_line(lines in prop::collection::vec(header_line(), 0..40)) {
        let out = rename_underscored_default(&lines);
        for (before, after) in lines.iter().zip(&out) {
            prop_assert!(before.len() == after.len() || before.len() == after.len() + 1);
        }
    }

    #[test]
    fn suppressor_output_is_subsequence(lines in prop::collection::vec(header_line(), 0..40)) {
        let out = suppress_macros_default(&lines);
        prop_assert!(out.len() <= lines.len());
        prop_assert!(is_subsequence(&out, &lines));
    }

    #[test]
    fn unmarked_input_is_unchanged(lines in prop::collection::vec(plain_line(), 0..40)) {
        prop_assert_eq!(&suppress_macros_default(&lines), &lines);
        prop_assert_eq!(&rename_underscored_default(&lines), &lines);
    }

    #[test]
    fn streaming_and_batch_agree(lines in prop::collection::vec(header_line(), 0..40)) {
        let mut streaming = FilterPipeline::default();
        let mut batch = FilterPipeline::default().with_mode(CompositionMode::Batch);
        prop_assert_eq!(streaming.filter_lines(&lines), batch.filter_lines(&lines));
        prop_assert_eq!(streaming.stats(), batch.stats());
    }

    #[test]
    fn pipeline_equals_composition(lines in prop::collection::vec(header_line(), 0..40)) {
        let composed = rename_underscored_default(&suppress_macros_default(&lines));
        prop_assert_eq!(FilterPipeline::default().filter_lines(&lines), composed);
    }
}
