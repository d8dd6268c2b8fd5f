//! Property-based tests for the lexical primitives and the scan driver

use bsvdoc::bsv::ast::{Identifier, IdentifierCase};
use bsvdoc::bsv::parser::{
    any_identifier, capitalized_identifier, lowercase_identifier, parse_complete,
};
use bsvdoc::bsv::scanner::scan;
use proptest::prelude::*;

fn identifier_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_$]{0,12}"
}

proptest! {
    #[test]
    fn test_identifier_classes_partition(name in identifier_strategy()) {
        let capitalized = parse_complete(capitalized_identifier(), &name).is_ok();
        let lowercase = parse_complete(lowercase_identifier(), &name).is_ok();
        let any = parse_complete(any_identifier(), &name).is_ok();

        prop_assert!(any);
        prop_assert!(capitalized != lowercase, "{} accepted by both or neither", name);
        prop_assert_eq!(capitalized, name.starts_with(|c: char| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_identifier_case_tag(name in identifier_strategy()) {
        let ident = Identifier::new(name.clone()).unwrap();
        let expected = if name.starts_with(|c: char| c.is_ascii_uppercase()) {
            IdentifierCase::Capitalized
        } else {
            IdentifierCase::Lowercase
        };
        prop_assert_eq!(ident.case, expected);
    }

    #[test]
    fn test_doc_line_always_attaches(text in "[A-Za-z0-9 ,.]{0,40}", name in "[a-z][a-z0-9_]{0,8}") {
        prop_assume!(!text.trim().is_empty());
        prop_assume!(name != "function");
        let source = format!("/// {}\nfunction Bool {}();\nendfunction\n", text, name);
        let doc = scan(&source, "P.bsv");
        prop_assert_eq!(doc.declarations.len(), 1);
        let attached = doc.declarations[0].doc.clone().unwrap_or_default();
        prop_assert_eq!(attached.trim(), text.trim());
    }

    #[test]
    fn test_scan_never_panics(source in "[ -~\n]{0,200}") {
        let first = scan(&source, "R.bsv");
        let second = scan(&source, "R.bsv");
        prop_assert_eq!(first, second);
    }
}
