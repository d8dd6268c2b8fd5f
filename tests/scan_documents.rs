//! Scanning the curated BSV samples: declaration discovery, doc attachment and rendering

use bsvdoc::bsv::config::RenderConfig;
use bsvdoc::bsv::formats::markdown::render_markdown;
use bsvdoc::bsv::scanner::{scan, Scanner};
use bsvdoc::bsv::testing::{assert_document, fixtures};
use rstest::rstest;

fn load(name: &str) -> String {
    fixtures::get_string(name).expect("fixture to load")
}

#[test]
fn test_counter_package() {
    let source = load("counter.bsv");
    let doc = scan(&source, "counter.bsv");

    assert_document(&doc)
        .package("Counter")
        .imports(&["FIFO", "Vector"])
        .exports(&["Counter", "mkCounter"])
        .declaration_count(4)
        .declaration(0, |d| {
            d.kind("package").name("Counter").line(1).no_doc();
        })
        .declaration(1, |d| {
            d.kind("interface")
                .name("Counter")
                .line(12)
                .has_parameters(true)
                .doc("A saturating up-counter.\n\n`inc` is ignored once the counter reaches its maximum.");
        })
        .declaration(2, |d| {
            // only the doc line after the ordinary comment attaches
            d.kind("function")
                .name("maxValue")
                .line(19)
                .doc("Largest value representable in `n` bits");
        })
        .declaration(3, |d| {
            d.kind("module")
                .name("mkCounter")
                .line(28)
                .has_parameters(false)
                .doc("Counter implementation.\n\nResets to zero.");
        });
}

#[test]
fn test_typedef_forms() {
    let source = load("typedefs.bsv");
    let doc = scan(&source, "typedefs.bsv");

    assert_document(&doc)
        .package("Types")
        .declaration_count(5)
        .declaration(1, |d| {
            d.kind("typedef")
                .name("Word")
                .line(4)
                .doc("Machine word")
                .text(&source, "typedef Bit#(32) Word;");
        })
        .declaration(2, |d| {
            d.name("Stage").line(7).has_parameters(false).doc("Pipeline stage");
        })
        .declaration(3, |d| {
            d.name("MemReq").line(15).doc("Memory request");
        })
        .declaration(4, |d| {
            d.name("Option").line(25).has_parameters(true).doc("Optional value");
        });
}

#[test]
fn test_nested_functions() {
    let source = load("nested_functions.bsv");
    let doc = scan(&source, "nested_functions.bsv");

    assert_document(&doc)
        .declaration_count(2)
        .declaration(0, |d| {
            d.name("twice").line(2).doc("Apply `f` twice").nested(&["once"]);
        })
        .declaration(1, |d| {
            d.name("isZero").line(10).no_doc().nested(&[]);
        });
}

#[test]
fn test_typeclasses_and_opaque_bodies() {
    let source = load("typeclasses.bsv");
    let doc = scan(&source, "typeclasses.bsv");

    assert_document(&doc)
        .declaration_count(4)
        .declaration(1, |d| {
            d.kind("typeclass")
                .name("Convert")
                .line(4)
                .has_parameters(true)
                .doc("Conversion between two representations");
        })
        .declaration(2, |d| {
            d.kind("instance").name("Convert").line(10).has_parameters(true);
        })
        .declaration(3, |d| {
            // `endmodule` inside a string literal does not close the module
            d.kind("module").name("mkTb").line(14).no_doc();
        });
    let module = &doc.declarations[3];
    assert!(module.span.slice(&source).ends_with("endmodule"));
}

#[test]
fn test_nested_functions_markdown() {
    let source = load("nested_functions.bsv");
    let doc = scan(&source, "nested_functions.bsv");
    let out = render_markdown(&doc, &source, &RenderConfig::default());

    insta::assert_snapshot!(out.trim_end(), @r###"
    ## [twice](nested_functions.bsv#L2)

    Apply `f` twice
    ```bluespec
    function t twice(function t f(t x), t v);
        /// Not attached: nested functions belong to their parent
        function t once(t y);
            return f(y);
        endfunction
        return once(once(v));
    endfunction
    ```

    ## [isZero](nested_functions.bsv#L10)
    ```bluespec
    function Bool isZero(Bit#(8) x) provisos (Add#(8, 0, 8));
        return x == 0;
    endfunction : isZero
    ```
    "###);
}

#[rstest]
#[case("counter.bsv")]
#[case("typedefs.bsv")]
#[case("nested_functions.bsv")]
#[case("typeclasses.bsv")]
fn test_scanning_is_repeatable(#[case] name: &str) {
    let source = load(name);
    let mut scanner = Scanner::new();
    let first = scanner.scan(&source, name);
    let second = scanner.scan(&source, name);
    assert_eq!(first, second);
    assert_eq!(first, scan(&source, name));
}

#[rstest]
#[case("/// does the thing\nfunction Bool f();\nendfunction\n", Some("does the thing"))]
#[case("/// stale\n// interruption\nfunction Bool f();\nendfunction\n", None)]
#[case("/** block */\nfunction Bool f();\nendfunction\n", Some("block"))]
#[case("/// stale\n/* interruption */\nfunction Bool f();\nendfunction\n", None)]
#[case("/**/\nfunction Bool f();\nendfunction\n", None)]
#[case("/// one\n/// two\nfunction Bool f();\nendfunction\n", Some("one\ntwo"))]
fn test_doc_attachment(#[case] source: &str, #[case] expected: Option<&str>) {
    let doc = scan(source, "F.bsv");
    assert_document(&doc).declaration_count(1).declaration(0, |d| match expected {
        Some(text) => {
            d.doc(text);
        }
        None => {
            d.no_doc();
        }
    });
}
