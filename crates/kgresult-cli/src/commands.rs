//! Subcommand implementations. Kept free of I/O where possible so they can
//! be tested directly.

use std::io::Read;
use std::path::Path;

use clap::ValueEnum;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;

use kgresult_core::{BigNode, Encoder, Link, Node, Policy, Record, ResultItem, SearchResult};

/// Record type of an `encode` input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordType {
    SearchResult,
    ResultItem,
    Node,
    Link,
}

/// Read the whole input from a file, or from stdin when no file is given.
pub fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .wrap_err("failed to read stdin")?;
            Ok(input)
        }
    }
}

pub fn print_json(value: &Value, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{text}");
    Ok(())
}

/// Decode a JSON array of `kind` records and encode it under `policy`.
pub fn encode(policy: Policy, kind: RecordType, input: &str) -> Result<Value> {
    match kind {
        RecordType::SearchResult => encode_as::<SearchResult>(policy, input),
        RecordType::ResultItem => encode_as::<ResultItem>(policy, input),
        RecordType::Node => encode_as::<Node>(policy, input),
        RecordType::Link => encode_as::<Link>(policy, input),
    }
}

fn encode_as<R: Record + DeserializeOwned>(policy: Policy, input: &str) -> Result<Value> {
    let records: Vec<R> =
        serde_json::from_str(input).wrap_err("failed to decode input records")?;
    let encoded = policy
        .encode_all(&records)
        .wrap_err_with(|| format!("{policy} encoder rejected input"))?;
    Ok(encoded)
}

/// Validate a JSON array of BigNodes and return their serialized form.
pub fn big_nodes(input: &str) -> Result<Value> {
    let values: Vec<Value> = serde_json::from_str(input).wrap_err("expected a JSON array")?;

    let nodes = values
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            BigNode::from_value(value)
                .map(|node| node.to_json())
                .wrap_err_with(|| format!("invalid BigNode at index {i}"))
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(count = nodes.len(), "validated BigNodes");
    Ok(Value::Array(nodes))
}
