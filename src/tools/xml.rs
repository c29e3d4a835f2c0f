use crate::tree::{NodeId, Tree};

enum Tag {
    Open(NodeId),
    Close(NodeId),
}

/// Render a contracted tree as XML: `<label>children</label>` for internal nodes and `<label/>`
/// for leaves. No declaration, no whitespace.
pub fn to_xml(tree: &Tree<String>) -> String {
    let mut xml = String::new();
    let mut stack: Vec<Tag> = tree.root().map(Tag::Open).into_iter().collect();
    while let Some(tag) = stack.pop() {
        match tag {
            Tag::Open(id) if tree.arity(id) == 0 => {
                xml.push_str(&format!("<{}/>", tree.key(id)));
            }
            Tag::Open(id) => {
                xml.push_str(&format!("<{}>", tree.key(id)));
                stack.push(Tag::Close(id));
                stack.extend(tree.children(id).iter().rev().map(|&child| Tag::Open(child)));
            }
            Tag::Close(id) => {
                xml.push_str(&format!("</{}>", tree.key(id)));
            }
        }
    }
    xml
}

#[cfg(test)]
mod test {
    use super::to_xml;
    use crate::tree::{build_contracted_tree, Tree};

    #[test]
    fn example_test() {
        let tree = build_contracted_tree("ACCGUGAGCCAUGUUAGGGA", "..((((...)))..(.).).").unwrap();
        assert_eq!(
            to_xml(&tree),
            "<ac><r><yqs><agc><e/></agc><gu><x><a><e/></a><g><e/></g></x></gu></yqs><a><e/></a></r></ac>"
        );
    }

    #[test]
    fn small_trees_test() {
        assert_eq!(to_xml(&build_contracted_tree("", "").unwrap()), "<e/>");
        assert_eq!(to_xml(&build_contracted_tree("au", "()").unwrap()), "<p><e/><e/></p>");
        assert_eq!(to_xml(&Tree::default()), "");
    }

    #[test]
    fn deep_tree_test() {
        // deep enough to overflow a recursive renderer
        let depth = 100_000;
        let structure = format!("{}{}", "(.".repeat(depth), ")".repeat(depth));
        let sequence = format!("{}{}", "GA".repeat(depth), "C".repeat(depth));
        let tree = build_contracted_tree(&sequence, &structure).unwrap();
        let xml = to_xml(&tree);
        assert!(xml.starts_with("<s><a><s><a>"));
        assert!(xml.ends_with("</s>"));
    }
}
