//! Scene Dump Parser
//!
//! A scene dump is a text description of host state:
//!
//! ```text
//! frame 12
//! resolution 320 240
//! node "pCube1" "transform" {
//!     matrix worldMatrix 1 0 0 0  0 1 0 0  0 0 1 0  0 0 0 1
//! }
//! node "pCubeShape1" "mesh" parent "pCube1" {
//!     floats points [0 0 0  1 0 0  0 1 0]
//!     ints faceVertexCounts [3]
//!     ints faceVertexIndices [0 1 2]
//!     key 10 bool visibility false
//! }
//! connect "pCubeShape1.instObjGroups" "MSG.dagSetMembers"
//! ```

mod common;

use common::*;
use pbrt_core::common::*;
use pbrt_core::fileutil::*;
use pbrt_core::geometry::*;
use pbrt_core::host::*;
use pbrt_core::paramset::*;
use pbrt_core::spectrum::*;
use pest::iterators::*;
use pest::Parser;
use std::path::Path;

/// The `pest` parser generated from a grammar.
#[derive(Parser)]
#[grammar = "parser/grammar.pest"]
struct SceneDumpParser;

/// Parses a scene dump file into an in-memory scene.
///
/// * `path` - The file.
pub fn parse_file(path: &Path) -> Result<MemoryHost, String> {
    let text = file_to_string(path)?;
    parse_str(&text).map_err(|e| format!("Error parsing '{}'. {e}", path.display()))
}

/// Parses scene dump text into an in-memory scene.
///
/// * `text` - The text.
pub fn parse_str(text: &str) -> Result<MemoryHost, String> {
    let dump = parse_dump(text)?;
    debug!("Parsed {} statements", dump.stmts.len());
    dump.process()
}

fn parse_dump(text: &str) -> Result<Dump, String> {
    let mut pairs = SceneDumpParser::parse(Rule::dump, text).map_err(|e| format!("{e}"))?;
    let dump = next_pair(&mut pairs, "dump")?;

    let mut stmts = vec![];
    for pair in dump.into_inner() {
        match pair.as_rule() {
            Rule::stmt => {
                let stmt = next_pair(&mut pair.into_inner(), "statement")?;
                stmts.push(parse_stmt(stmt)?);
            }
            Rule::EOI => (),
            rule => return Err(unexpected(rule)),
        }
    }
    Ok(Dump { stmts })
}

/// Returns the next token pair or an error naming what was expected.
fn next_pair<'a>(pairs: &mut Pairs<'a, Rule>, what: &str) -> Result<Pair<'a, Rule>, String> {
    pairs.next().ok_or(format!("Expected {what}"))
}

fn unexpected(rule: Rule) -> String {
    format!("Unexpected {rule:?}")
}

fn parse_stmt(pair: Pair<Rule>) -> Result<Stmt, String> {
    let rule = pair.as_rule();
    let mut inner = pair.into_inner();
    match rule {
        Rule::frame_stmt => Ok(Stmt::Frame(parse_int(next_pair(&mut inner, "frame")?)?)),
        Rule::resolution_stmt => {
            let width = parse_int(next_pair(&mut inner, "width")?)?;
            let height = parse_int(next_pair(&mut inner, "height")?)?;
            Ok(Stmt::Resolution(width, height))
        }
        Rule::connect_stmt => {
            let src = parse_quoted_str(next_pair(&mut inner, "source")?)?;
            let dst = parse_quoted_str(next_pair(&mut inner, "destination")?)?;
            Ok(Stmt::Connect(src, dst))
        }
        Rule::node_stmt => parse_node_stmt(inner).map(Stmt::Node),
        rule => Err(unexpected(rule)),
    }
}

fn parse_node_stmt(mut pairs: Pairs<Rule>) -> Result<NodeStmt, String> {
    let name = parse_quoted_str(next_pair(&mut pairs, "node name")?)?;
    let kind = parse_quoted_str(next_pair(&mut pairs, "node kind")?)?;
    let mut stmt = NodeStmt {
        name,
        kind,
        parent: None,
        attrs: vec![],
        keys: vec![],
    };

    for pair in pairs {
        match pair.as_rule() {
            Rule::parent_clause => {
                let parent = next_pair(&mut pair.into_inner(), "parent name")?;
                stmt.parent = Some(parse_quoted_str(parent)?);
            }
            Rule::node_item => {
                let item = next_pair(&mut pair.into_inner(), "attribute")?;
                match item.as_rule() {
                    Rule::attr => stmt.attrs.push(parse_attr(item)?),
                    Rule::key_stmt => {
                        let mut inner = item.into_inner();
                        let frame = parse_int(next_pair(&mut inner, "key frame")?)?;
                        let (attr, value) = parse_attr(next_pair(&mut inner, "key value")?)?;
                        stmt.keys.push((frame, attr, value));
                    }
                    rule => return Err(unexpected(rule)),
                }
            }
            rule => return Err(unexpected(rule)),
        }
    }
    Ok(stmt)
}

/// Parses an `attr` rule into the attribute name and its value.
fn parse_attr(pair: Pair<Rule>) -> Result<(String, AttrValue), String> {
    let typed = next_pair(&mut pair.into_inner(), "typed attribute")?;
    let rule = typed.as_rule();

    // Skip the type keyword.
    let mut inner = typed.into_inner().skip(1);
    let ident = inner.next().ok_or("Expected attribute name")?;
    let name = ident.as_str().to_string();
    let values: Vec<Pair<Rule>> = inner.collect();

    let floats = |values: &[Pair<Rule>]| -> Result<Vec<Float>, String> {
        values.iter().map(|p| parse_float(p.clone())).collect()
    };
    let value = match rule {
        Rule::bool_attr => AttrValue::Bool(values.first().map(|p| p.as_str()) == Some("true")),
        Rule::int_attr => AttrValue::Int(parse_int(single(&values, &name)?)?),
        Rule::ints_attr => AttrValue::IntArray(
            values
                .iter()
                .map(|p| parse_int(p.clone()))
                .collect::<Result<Vec<Int>, String>>()?,
        ),
        Rule::float_attr => AttrValue::Float(parse_float(single(&values, &name)?)?),
        Rule::float2_attr => {
            let v = floats(&values)?;
            AttrValue::Float2([v[0], v[1]])
        }
        Rule::float3_attr => {
            let v = floats(&values)?;
            AttrValue::Float3([v[0], v[1], v[2]])
        }
        Rule::floats_attr => AttrValue::FloatArray(floats(&values)?),
        Rule::color_attr => {
            let v = floats(&values)?;
            AttrValue::Color(Color::new(v[0], v[1], v[2]))
        }
        Rule::string_attr => AttrValue::String(parse_quoted_str(single(&values, &name)?)?),
        Rule::matrix_attr => AttrValue::Matrix(Matrix4x4::from_row_major(&floats(&values)?)?),
        rule => return Err(unexpected(rule)),
    };
    Ok((name, value))
}

/// Returns the only value of a scalar attribute.
fn single<'a>(values: &[Pair<'a, Rule>], name: &str) -> Result<Pair<'a, Rule>, String> {
    match values {
        [value] => Ok(value.clone()),
        _ => Err(format!("Attribute '{name}' expects one value")),
    }
}

fn parse_int(pair: Pair<Rule>) -> Result<Int, String> {
    pair.as_str()
        .parse::<Int>()
        .map_err(|e| format!("Invalid integer '{}'. {e}", pair.as_str()))
}

fn parse_float(pair: Pair<Rule>) -> Result<Float, String> {
    pair.as_str()
        .parse::<Float>()
        .map_err(|e| format!("Invalid float '{}'. {e}", pair.as_str()))
}

fn parse_quoted_str(pair: Pair<Rule>) -> Result<String, String> {
    match pair.into_inner().next() {
        Some(inner) => Ok(inner.as_str().to_string()),
        None => Ok(String::new()),
    }
}
