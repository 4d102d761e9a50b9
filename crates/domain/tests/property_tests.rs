use code_counter_domain::{
    CommentSyntax, analyze,
    pipeline::{normalize, strip},
};
use proptest::prelude::*;

// Lines free of `#`, `"` and `'`, so no pass has anything to remove.
fn code_line() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_ =()+,.]{0,30}"
}

proptest! {
    #[test]
    fn stripping_clean_lines_is_identity(lines in prop::collection::vec(code_line(), 0..40)) {
        let syntax = CommentSyntax::default();
        let lines: Vec<String> = lines.into_iter().map(|l| l.trim().to_string()).filter(|l| !l.is_empty()).collect();
        let once = strip(lines.clone(), &syntax);
        prop_assert_eq!(&once, &lines);
        let twice = strip(once.clone(), &syntax);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn code_lines_keep_relative_order(
        lines in prop::collection::vec(code_line(), 1..30),
        comments in prop::collection::vec("[a-z ]{0,20}", 1..30),
    ) {
        // interleave each code line with a hash comment line
        let mut raw = String::new();
        for (i, line) in lines.iter().enumerate() {
            raw.push_str(line);
            raw.push('\n');
            raw.push_str("# ");
            raw.push_str(&comments[i % comments.len()]);
            raw.push('\n');
        }

        let expected = normalize(&lines.join("\n"));
        match analyze(&raw, &CommentSyntax::default()) {
            Ok(analysis) => {
                let cleaned: Vec<String> = analysis.cleaned().iter().map(|l| l.trim_end().to_string()).collect();
                prop_assert_eq!(cleaned, expected);
            }
            Err(_) => prop_assert!(expected.is_empty()),
        }
    }

    #[test]
    fn code_lines_keep_relative_order_across_block_comments(
        lines in prop::collection::vec(code_line(), 1..20),
        regions in prop::collection::vec(
            (prop::bool::ANY, prop::collection::vec("[a-z ]{0,20}", 0..4)),
            1..20,
        ),
    ) {
        // each code line is followed by a """ or ''' region with prose inside
        let mut raw = String::new();
        for (i, line) in lines.iter().enumerate() {
            raw.push_str(line);
            raw.push('\n');
            let (double, interior) = &regions[i % regions.len()];
            let delimiter = if *double { "\"\"\"" } else { "'''" };
            raw.push_str(delimiter);
            raw.push('\n');
            for prose in interior {
                raw.push_str(prose);
                raw.push('\n');
            }
            raw.push_str(delimiter);
            raw.push('\n');
        }

        let expected = normalize(&lines.join("\n"));
        match analyze(&raw, &CommentSyntax::default()) {
            Ok(analysis) => prop_assert_eq!(analysis.cleaned().as_slice(), expected.as_slice()),
            Err(_) => prop_assert!(expected.is_empty()),
        }
    }

    #[test]
    fn counts_stay_parallel(raw in "[a-z#'\" \n]{0,200}") {
        if let Ok(analysis) = analyze(&raw, &CommentSyntax::default()) {
            prop_assert_eq!(analysis.char_counts().len(), analysis.cleaned().len());
            prop_assert_eq!(analysis.statistics().lines.value(), analysis.cleaned().len());
            prop_assert!(analysis.statistics().min <= analysis.statistics().max);
            prop_assert!(analysis.cleaned().iter().all(|l| !l.is_empty()));
        }
    }
}
