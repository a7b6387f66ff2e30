//! Presentation-neutral tree of groups and aliases

use super::Alias;

/// A node of the group/alias tree handed to whatever renders it.
///
/// Icons, expansion state and labels are the renderer's business; the node
/// only carries data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Group { name: String, children: Vec<TreeNode> },
    Alias { group: String, alias: Alias },
}

impl TreeNode {
    /// Build a group node whose children are alias nodes in sequence order
    pub fn group(name: impl Into<String>, aliases: Vec<Alias>) -> Self {
        let name = name.into();
        let children = aliases
            .into_iter()
            .map(|alias| TreeNode::Alias {
                group: name.clone(),
                alias,
            })
            .collect();
        TreeNode::Group { name, children }
    }

    pub fn name(&self) -> &str {
        match self {
            TreeNode::Group { name, .. } => name,
            TreeNode::Alias { alias, .. } => &alias.alias_name,
        }
    }

    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::Group { children, .. } => children,
            TreeNode::Alias { .. } => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_node_children_carry_group_name() {
        let node = TreeNode::group(
            "git",
            vec![Alias::new("gs", "git status"), Alias::new("gp", "git push")],
        );

        assert_eq!(node.name(), "git");
        assert_eq!(node.children().len(), 2);
        match &node.children()[1] {
            TreeNode::Alias { group, alias } => {
                assert_eq!(group, "git");
                assert_eq!(alias.alias_name, "gp");
            }
            other => panic!("unexpected node: {:?}", other),
        }
    }

    #[test]
    fn test_alias_node_has_no_children() {
        let node = TreeNode::Alias {
            group: "System".into(),
            alias: Alias::new("ll", "ls -la"),
        };
        assert!(node.children().is_empty());
        assert_eq!(node.name(), "ll");
    }
}
