use std::collections::HashMap;

use kgresult_core::{Link, Node, ResultItem, SearchResult};

#[test]
fn test_node_as_map_key() {
    let mut weights = HashMap::new();
    weights.insert(Node::new(1, "a", 10), 1.0);
    weights.insert(Node::new(1, "b", 11).with_tag("other"), 2.0);
    weights.insert(Node::new(2, "a", 10), 3.0);

    assert_eq!(weights.len(), 2);
    assert_eq!(weights[&Node::new(1, "anything", 0)], 2.0);
}

#[test]
fn test_result_item_defaults_are_fresh() {
    let mut first = ResultItem::new(1.0, 1, 1, "a", vec![], vec![]);
    let second = ResultItem::new(1.0, 2, 1, "b", vec![], vec![]);

    first.channel.push("tg".to_string());
    first.location.push("Oslo".to_string());

    assert!(second.channel.is_empty());
    assert!(second.location.is_empty());
}

#[test]
fn test_search_result_defaults_are_fresh() {
    let mut first = SearchResult::new(1, 1, "a");
    let second = SearchResult::new(2, 1, "b");

    first.channel.push("tg".to_string());
    first.location.push("Oslo".to_string());
    first.languages.push("en".to_string());

    assert!(second.channel.is_empty());
    assert!(second.location.is_empty());
    assert!(second.languages.is_empty());
}

#[test]
fn test_result_item_keeps_path_order() {
    let nodes = vec![Node::new(0, "query", 100), Node::new(1, "hop", 101), Node::new(2, "target", 102)];
    let links = vec![Link::new(1, 0).with_tag("cites"), Link::new(2, 1).with_value(3)];
    let item = ResultItem::new(0.75, 2, 9, "target", nodes, links)
        .with_selected(1)
        .with_date("2022-01-01")
        .with_url("https://example.org/2");

    let ids: Vec<i64> = item.nodes.iter().map(|n| n.intra_id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
    assert_eq!(item.links[0].tag, "cites");
    assert_eq!(item.links[1].value, Some(3));
    assert_eq!(item.selected, 1);
}
