use crate::{
    fbx::{Node, Property},
    foundation::error::{UvError, UvResult},
};

/// Walk `nodes` by child name and return the first property of the final node.
///
/// At each step the first node whose name matches wins. A step with no match, or a final
/// node without properties, resolves to `Ok(None)`.
pub fn resolve<'a>(nodes: &'a [Node], path: &[&str]) -> UvResult<Option<&'a Property>> {
    let Some((last, parents)) = path.split_last() else {
        return Err(UvError::decode("property path must name at least one node"));
    };

    let mut level = nodes;
    for step in parents {
        match find(level, step) {
            Some(node) => level = &node.children,
            None => return Ok(None),
        }
    }

    Ok(find(level, last).and_then(|node| node.properties.first()))
}

fn find<'a>(level: &'a [Node], name: &str) -> Option<&'a Node> {
    level.iter().find(|n| n.name == name)
}

#[cfg(test)]
#[path = "../../tests/unit/fbx/path.rs"]
mod tests;
