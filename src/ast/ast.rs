use std::{fmt::Display, ops::Index};

use crate::lexer::tokens::Token;

/// Index of a node inside its [`Ast`].
pub type NodeId = usize;

/// Node Types
///
/// The grammar level a node was created for, from the lowest precedence
/// (`BaseStatement`) to the leaves (`Primitive`).
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum NodeType {
    BaseStatement,
    PlusMinus,
    MultiplyDivide,
    Primitive,
}

impl Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A binary tree node.
///
/// Children are owned by the tree that holds the node. `parent` is only a
/// lookup link used to walk upward while the tree is being built.
#[derive(Debug, Clone)]
pub struct AstNode {
    role: NodeType,
    token: Option<Token>,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl AstNode {
    fn new(role: NodeType, token: Option<Token>, parent: Option<NodeId>) -> Self {
        AstNode {
            role,
            token,
            parent,
            left: None,
            right: None,
        }
    }

    pub fn get_role(&self) -> NodeType {
        self.role
    }

    pub fn get_token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub fn get_parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn get_left(&self) -> Option<NodeId> {
        self.left
    }

    pub fn get_right(&self) -> Option<NodeId> {
        self.right
    }
}

/// Expression tree.
///
/// Nodes live in an arena so the tree is dropped in one pass no matter how
/// deep it is. The root is always a `BaseStatement` node at [`Ast::ROOT`].
#[derive(Debug, Clone)]
pub struct Ast {
    nodes: Vec<AstNode>,
}

impl Default for Ast {
    fn default() -> Self {
        Self::new()
    }
}

impl Ast {
    pub const ROOT: NodeId = 0;

    pub fn new() -> Self {
        Ast {
            nodes: vec![AstNode::new(NodeType::BaseStatement, None, None)],
        }
    }

    pub fn root(&self) -> &AstNode {
        &self.nodes[Self::ROOT]
    }

    pub fn get(&self, id: NodeId) -> Option<&AstNode> {
        self.nodes.get(id)
    }

    /// Number of nodes created, including any replaced subtree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Creates a node under `parent`, filling `left` first. A third child
    /// replaces `right`; the old subtree is no longer reachable from the root.
    pub fn attach(&mut self, parent: NodeId, role: NodeType, token: Option<Token>) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(AstNode::new(role, token, Some(parent)));

        let parent_node = &mut self.nodes[parent];
        if parent_node.left.is_none() {
            parent_node.left = Some(id);
        } else {
            parent_node.right = Some(id);
        }

        id
    }

    pub fn set_token(&mut self, id: NodeId, token: Token) {
        self.nodes[id].token = Some(token);
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|node| node.parent)
    }

    /// Ids of the nodes reachable from the root, in order: left subtree,
    /// node, right subtree.
    pub fn in_order(&self) -> Vec<NodeId> {
        let mut order = vec![];
        let mut stack = vec![];
        let mut current = Some(Self::ROOT);

        while current.is_some() || !stack.is_empty() {
            while let Some(id) = current {
                stack.push(id);
                current = self.nodes[id].left;
            }

            if let Some(id) = stack.pop() {
                order.push(id);
                current = self.nodes[id].right;
            }
        }

        order
    }

    pub fn in_order_tokens(&self) -> Vec<&Token> {
        self.in_order()
            .into_iter()
            .filter_map(|id| self.nodes[id].token.as_ref())
            .collect()
    }

    /// Token texts in traversal order, e.g. `2+3*4`.
    pub fn render(&self) -> String {
        self.in_order_tokens()
            .iter()
            .map(|token| token.value.as_str())
            .collect()
    }

    /// Indented pre-order dump of the reachable nodes.
    pub fn fmt_tree(&self) -> String {
        let mut result = String::new();
        let mut stack = vec![(Self::ROOT, 0usize)];

        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id];

            result.push_str(&"  ".repeat(depth));
            result.push_str(&node.role.to_string());
            if let Some(token) = &node.token {
                result.push_str(&format!(" '{}'", token.value));
            }
            result.push('\n');

            if let Some(right) = node.right {
                stack.push((right, depth + 1));
            }
            if let Some(left) = node.left {
                stack.push((left, depth + 1));
            }
        }

        result
    }
}

impl Index<NodeId> for Ast {
    type Output = AstNode;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id]
    }
}

impl Display for Ast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
