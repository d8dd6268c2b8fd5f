//! Built-in grammar self-test table
//!
//! Each [`GrammarCase`] pairs a grammar rule with inputs it must accept and
//! inputs it must reject. An input is accepted only when the rule consumes all
//! of it. Running the table reports one line per input and counts mismatches;
//! the binary's `--test` mode exits non-zero when the count is positive.

use chumsky::prelude::*;
use std::fmt;
use std::io::Write;

use crate::bsv::comments::CommentClass;
use crate::bsv::error::BsvDocError;
use crate::bsv::lexer::tokenize;
use crate::bsv::parser::combinators::keyword;
use crate::bsv::parser::{
    any_identifier, capitalized_identifier, decimal_literal, export_statement, function,
    import_statement, instance, int_literal, interface, lowercase_identifier, module,
    parse_complete, typeclass, type_expr, typedef,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarRule {
    LineComment,
    DocLineComment,
    CapitalizedIdentifier,
    LowercaseIdentifier,
    AnyIdentifier,
    DecimalLiteral,
    IntLiteral,
    /// The keyword followed by exactly one more token
    Keyword(&'static str),
    TypeExpr,
    Typedef,
    Interface,
    Typeclass,
    Instance,
    Module,
    Function,
    Import,
    Export,
}

impl GrammarRule {
    /// Whether the rule consumes all of `input`
    pub fn accepts(self, input: &str) -> bool {
        match self {
            GrammarRule::LineComment => is_single_comment(input, CommentClass::Line),
            GrammarRule::DocLineComment => is_single_comment(input, CommentClass::DocLine),
            GrammarRule::CapitalizedIdentifier => {
                parse_complete(capitalized_identifier(), input).is_ok()
            }
            GrammarRule::LowercaseIdentifier => parse_complete(lowercase_identifier(), input).is_ok(),
            GrammarRule::AnyIdentifier => parse_complete(any_identifier(), input).is_ok(),
            GrammarRule::DecimalLiteral => parse_complete(decimal_literal(), input).is_ok(),
            GrammarRule::IntLiteral => parse_complete(int_literal(), input).is_ok(),
            GrammarRule::Keyword(word) => {
                parse_complete(keyword(word).then(any()), input).is_ok()
            }
            GrammarRule::TypeExpr => parse_complete(type_expr(), input).is_ok(),
            GrammarRule::Typedef => parse_complete(typedef(), input).is_ok(),
            GrammarRule::Interface => parse_complete(interface(), input).is_ok(),
            GrammarRule::Typeclass => parse_complete(typeclass(), input).is_ok(),
            GrammarRule::Instance => parse_complete(instance(), input).is_ok(),
            GrammarRule::Module => parse_complete(module(), input).is_ok(),
            GrammarRule::Function => parse_complete(function(), input).is_ok(),
            GrammarRule::Import => parse_complete(import_statement(), input).is_ok(),
            GrammarRule::Export => parse_complete(export_statement(), input).is_ok(),
        }
    }
}

impl fmt::Display for GrammarRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarRule::LineComment => write!(f, "one line comment"),
            GrammarRule::DocLineComment => write!(f, "doc one line comment"),
            GrammarRule::CapitalizedIdentifier => write!(f, "Identifier"),
            GrammarRule::LowercaseIdentifier => write!(f, "identifier"),
            GrammarRule::AnyIdentifier => write!(f, "any identifier"),
            GrammarRule::DecimalLiteral => write!(f, "decimal literal"),
            GrammarRule::IntLiteral => write!(f, "integer literal"),
            GrammarRule::Keyword(word) => write!(f, "keyword `{}`", word),
            GrammarRule::TypeExpr => write!(f, "type"),
            GrammarRule::Typedef => write!(f, "typedef"),
            GrammarRule::Interface => write!(f, "interface"),
            GrammarRule::Typeclass => write!(f, "typeclass"),
            GrammarRule::Instance => write!(f, "instance"),
            GrammarRule::Module => write!(f, "module"),
            GrammarRule::Function => write!(f, "function"),
            GrammarRule::Import => write!(f, "import"),
            GrammarRule::Export => write!(f, "export"),
        }
    }
}

fn is_single_comment(input: &str, class: CommentClass) -> bool {
    match tokenize(input).as_slice() {
        [token] => CommentClass::of(token) == Some(class),
        _ => false,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GrammarCase {
    pub rule: GrammarRule,
    pub matches: &'static [&'static str],
    pub rejects: &'static [&'static str],
}

const fn case(
    rule: GrammarRule,
    matches: &'static [&'static str],
    rejects: &'static [&'static str],
) -> GrammarCase {
    GrammarCase {
        rule,
        matches,
        rejects,
    }
}

/// The full self-test table
pub fn grammar_cases() -> Vec<GrammarCase> {
    vec![
        case(
            GrammarRule::LineComment,
            &["//", "//Hello, World!", "// Hello, World!", "////Hello, World!", "//// Hello, World!"],
            &["///", "///Hello, World!", "/// Hello, World!"],
        ),
        case(
            GrammarRule::DocLineComment,
            &["///", "///Hello, World!", "/// Hello, World!"],
            &["//", "//Hello, World!", "// Hello, World!", "////Hello, World!", "//// Hello, World!"],
        ),
        case(
            GrammarRule::CapitalizedIdentifier,
            &["Hello", "World", "A", "ALL_CAPS", "About_$3_50"],
            &["$display", "a", "_TEST", "`Riscv", ""],
        ),
        case(
            GrammarRule::LowercaseIdentifier,
            &["hello", "world", "a", "aLMOST_ALL_CAPS", "about_$3_50", "_TEST_", "_abc"],
            &["$display", "A", "`Riscv", ""],
        ),
        case(
            GrammarRule::AnyIdentifier,
            &["hello", "Hello", "HELLO", "world"],
            &[""],
        ),
        case(
            GrammarRule::DecimalLiteral,
            &["0", "1", "2", "42"],
            &["1a", "hello", "world"],
        ),
        case(
            GrammarRule::IntLiteral,
            &["0", "1", "'1", "'0", "20152", "'hf0A", "201'hfff", "'b10110", "8'b11111111"],
            &["'b00101001012"],
        ),
        case(
            GrammarRule::Keyword("module"),
            &["module;", "module ;"],
            &["modules", "module_", "module2"],
        ),
        case(
            GrammarRule::TypeExpr,
            &[
                "a",
                "WriteReq",
                "Bool",
                "function Bit#(1) f(Bit#(1) x)",
                "void",
                "Bit#(2)",
                "List::List#(t)",
                "Vector#(2, Reg#(Bit#(32)))",
            ],
            &["Vector#(2 Reg#(Bit#(5)))", "A#(B#(C#(a))"],
        ),
        case(
            GrammarRule::Typedef,
            &[
                "typedef a MyA;",
                "typedef Bit#(n) Word#(numeric type n);",
                "typedef enum { Idle, Busy = 2 } State deriving (Bits, Eq);",
                "typedef struct { Bit#(32) addr; Bool write; } Req deriving (Bits);",
                "typedef union tagged { void Invalid; t Valid; } Maybe#(type t) deriving (Eq);",
                "typedef struct { union tagged { void None; Bit#(4) Some; } Opt; Bool b; } Nest;",
            ],
            &["typedef x y;", "typedef enum { idle } State;", "typedef struct { } Empty;"],
        ),
        case(
            GrammarRule::Interface,
            &[
                "interface Put#(type t); method Action put(t x); endinterface",
                "interface Empty2; endinterface : Empty2",
            ],
            &["interface put; endinterface"],
        ),
        case(
            GrammarRule::Typeclass,
            &["typeclass Arith#(type data_t) provisos (Literal#(data_t)); endtypeclass"],
            &["typeclass Arith; endtypeclass"],
        ),
        case(
            GrammarRule::Instance,
            &["instance Eq#(Foo); function Bool \\== (Foo a, Foo b) = True; endinstance"],
            &["instance Eq; endinstance"],
        ),
        case(
            GrammarRule::Module,
            &["module[m] mkTest(); endmodule : mkTest", "module mkTop(Empty); endmodule"],
            &["module MkTop; endmodule"],
        ),
        case(
            GrammarRule::Function,
            &[
                "function Bool f(); endfunction",
                "function f(x); return x; endfunction : f",
                "function Bool outer(); function Bool inner(); endfunction endfunction",
            ],
            &["function Bool F(); endfunction", "function Bool f();"],
        ),
        case(
            GrammarRule::Import,
            &["import FIFO::*;", "import Vector :: * ;"],
            &["import fifo::*;", "import FIFO;"],
        ),
        case(
            GrammarRule::Export,
            &["export mkFifo;", "export Fifo(..);"],
            &["export Fifo(.);", "export;"],
        ),
    ]
}

/// Result of checking one input against its rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome {
    pub rule: GrammarRule,
    pub input: &'static str,
    pub expected: bool,
    pub matched: bool,
}

impl CaseOutcome {
    pub fn is_mismatch(&self) -> bool {
        self.expected != self.matched
    }
}

impl fmt::Display for CaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.is_mismatch() { "ERROR: " } else { "" };
        let result = if self.matched { "match" } else { "no match" };
        write!(f, "{}{} -> {} ({})", prefix, self.input, result, self.rule)
    }
}

/// Check every input of every case
pub fn run_cases(cases: &[GrammarCase]) -> Vec<CaseOutcome> {
    cases
        .iter()
        .flat_map(|case| {
            let expected_matches = case.matches.iter().map(move |input| (true, *input));
            let expected_rejects = case.rejects.iter().map(move |input| (false, *input));
            expected_matches
                .chain(expected_rejects)
                .map(move |(expected, input)| CaseOutcome {
                    rule: case.rule,
                    input,
                    expected,
                    matched: case.rule.accepts(input),
                })
        })
        .collect()
}

/// Run the built-in table, writing one line per input. Returns the mismatch count.
pub fn run_self_tests<W: Write>(out: &mut W) -> Result<usize, BsvDocError> {
    let outcomes = run_cases(&grammar_cases());
    let mut errors = 0;
    for outcome in &outcomes {
        if outcome.is_mismatch() {
            errors += 1;
        }
        writeln!(out, "{}", outcome)?;
    }
    tracing::debug!(checked = outcomes.len(), errors, "self-test finished");
    Ok(errors)
}
