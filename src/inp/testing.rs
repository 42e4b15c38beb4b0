//! Testing utilities
//!
//! # Parser Testing Guidelines
//!
//! ## Rule 1: Use the sample files
//!
//! MAAP input is easy to get subtly wrong when typed into a test by hand: a missing `END`
//! or a stray character turns a block into a run of plain expressions and the test still
//! passes for the wrong reason. Grammar tests should load the vetted files under
//! `tests/data/` through [Samples]:
//!
//! ```rust,ignore
//! use maap_inp::inp::testing::Samples;
//!
//! // CORRECT: a curated sample, parsed strictly with locations off
//! let program = Samples::load("block").parse().unwrap();
//!
//! // WRONG: ad-hoc source for a grammar test
//! let program = parse_program("PARAMETER CHANGE\nX = 1\nEND", false).unwrap();
//! ```
//!
//! Inline source is fine for small unit tests of a single combinator or edge case.
//!
//! ## Rule 2: Compare whole nodes
//!
//! Serialize the node and compare it with the expected JSON (or snapshot it with insta)
//! instead of poking at individual fields. [element_json] does the conversion; [assert_roundtrip]
//! checks that the serializer's output parses back to the same tree.
//!
//! ```rust,ignore
//! let program = Samples::load("timer").parse().unwrap();
//! assert_eq!(
//!     element_json(&program, 0),
//!     json!({"type": "set_timer", "value": {"type": "timer", "value": 1}})
//! );
//! assert_roundtrip(&program);
//! ```

mod samples;

pub use samples::{Sample, Samples};

use crate::inp::ast::Program;
use crate::inp::formats::serialize;
use crate::inp::parsing::parse_program;

/// The JSON form of the `index`th top-level element
///
/// Panics if the program has fewer elements.
pub fn element_json(program: &Program, index: usize) -> serde_json::Value {
    let element = program.value.get(index).unwrap_or_else(|| {
        panic!(
            "Expected an element at index {}, program has {}",
            index,
            program.len()
        )
    });
    serde_json::to_value(element).unwrap_or_else(|e| panic!("Element did not serialize: {}", e))
}

/// Serialize `program`, parse the result and assert the trees match
///
/// `program` must have been parsed with locations off.
pub fn assert_roundtrip(program: &Program) {
    let text = serialize(program);
    let reparsed = parse_program(&text, false)
        .unwrap_or_else(|e| panic!("Serialized text did not parse: {}\n{}", e, text));
    assert_eq!(
        &reparsed, program,
        "Round trip changed the tree; serialized text:\n{}",
        text
    );
}
