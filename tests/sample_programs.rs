//! Dumps of real Python programs
//!
//! Each fixture under `tests/fixtures/` is a program's tree as a `_type`
//! document, next to the text CPython 3.11 prints for the same tree with
//! `ast.dump(tree)`, `ast.dump(tree, indent=2)` and
//! `ast.dump(tree, include_attributes=True)`.

use astdump::ast::{Mod, StmtKind};
use astdump::{dump, AstNode, Dump, DumpInput, DumpOptions, IndentMode, Node, Tree};
use rstest::rstest;
use std::fs;

fn read_fixture(name: &str) -> String {
    fs::read_to_string(format!("tests/fixtures/{name}")).expect("Failed to read fixture")
}

fn load_module(name: &str) -> Node {
    let tree: Tree = Tree::from_json_str(&read_fixture(&format!("{name}.json")))
        .expect("Fixture should load");
    match tree {
        Tree::Single(node) => node,
        Tree::Many(_) => panic!("{name}.json should hold a single Module"),
    }
}

fn expected(name: &str, variant: &str) -> String {
    read_fixture(&format!("{name}.{variant}")).trim_end().to_string()
}

#[rstest]
#[case("simple_main_call")]
#[case("no_main_function")]
#[case("docstring")]
#[case("module_structure")]
#[case("complex_error")]
#[case("stdlib")]
#[case("comprehensive_stdlib")]
#[case("async")]
#[case("module_execution_order")]
#[case("original_error")]
#[case("comprehensive_init_main")]
#[case("complex_main_scenario")]
fn test_single_line_dump(#[case] name: &str) {
    let module = load_module(name);
    assert_eq!(module.dump(None), expected(name, "dump"));
}

#[rstest]
#[case("simple_main_call")]
#[case("no_main_function")]
#[case("docstring")]
#[case("module_structure")]
#[case("complex_error")]
#[case("stdlib")]
#[case("comprehensive_stdlib")]
#[case("async")]
#[case("module_execution_order")]
#[case("original_error")]
#[case("comprehensive_init_main")]
#[case("complex_main_scenario")]
fn test_indented_dump(#[case] name: &str) {
    let module = load_module(name);
    assert_eq!(
        module.dump(Some(&IndentMode::Spaces(2))),
        expected(name, "indent2.dump")
    );
}

#[rstest]
#[case("simple_main_call")]
#[case("no_main_function")]
#[case("docstring")]
#[case("module_structure")]
#[case("complex_error")]
#[case("stdlib")]
#[case("comprehensive_stdlib")]
#[case("async")]
#[case("module_execution_order")]
#[case("original_error")]
#[case("comprehensive_init_main")]
#[case("complex_main_scenario")]
fn test_attributes_dump(#[case] name: &str) {
    let module = load_module(name);
    let options = DumpOptions::default().include_attributes(true);
    assert_eq!(module.dump_with(&options), expected(name, "attributes.dump"));
}

#[rstest]
#[case("simple_main_call")]
#[case("docstring")]
#[case("stdlib")]
fn test_body_sequence_matches_module_field(#[case] name: &str) {
    let Node::Mod(module) = load_module(name) else {
        panic!("{name}.json should hold a Mod");
    };
    let body = dump(DumpInput::Many(module.body()), None, 0);
    let whole = expected(name, "dump");
    assert_eq!(whole, format!("Module(body={body}, type_ignores=[])"));
}

#[test]
fn test_top_level_statements_as_sequence_document() {
    let Node::Mod(Mod::Module { body }) = load_module("simple_main_call") else {
        panic!("simple_main_call.json should hold a Module");
    };
    let document = serde_json::to_value(&body).unwrap();
    let output = astdump::dump_value(document, None, 0).unwrap();

    assert!(output.starts_with("[FunctionDef(name='main', args=arguments("));
    assert!(output.ends_with(
        "body=[Expr(value=Call(func=Name(id='main', ctx=Load()), args=[], keywords=[]))], orelse=[])]"
    ));
}

#[test]
fn test_unannotated_statement() {
    let Node::Mod(module) = load_module("simple_main_call") else {
        panic!("simple_main_call.json should hold a Mod");
    };
    let print = match &module.body()[0].kind {
        StmtKind::FunctionDef(def) => &def.body[0],
        other => panic!("unexpected first statement: {other:?}"),
    };
    let options = DumpOptions::default().annotate_fields(false);
    assert_eq!(
        print.dump_with(&options),
        "Expr(Call(Name('print', Load()), [Constant('This is the main function')], []))"
    );
}

#[test]
fn test_docstring_escapes_newlines() {
    let output = load_module("docstring").dump(None);
    assert!(output.contains(
        "Constant(value='Calculate the nth Fibonacci number using recursion.\\n    \\n    Args:"
    ));
}

#[test]
fn test_repr_switches_quotes() {
    let output = load_module("stdlib").dump(None);
    assert!(output.contains(r#"Constant(value="os.getenv('HOME'):")"#));
}
