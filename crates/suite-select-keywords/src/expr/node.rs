//! Parse-time expression tree and the precedence rotation.

/// Node in a parsed keyword expression.
///
/// `Group` marks a parenthesised subtree. It exists only so the precedence
/// rotation treats such subtrees as atomic; lowering into a predicate erases
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ExprNode {
    Literal(String),
    Not(Box<ExprNode>),
    And(Box<ExprNode>, Box<ExprNode>),
    Or(Box<ExprNode>, Box<ExprNode>),
    Group(Box<ExprNode>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    And,
    Or,
}

impl BinaryOp {
    const fn precedence(self) -> u8 {
        match self {
            Self::And => 1,
            Self::Or => 0,
        }
    }

    pub(crate) fn apply(self, left: ExprNode, right: ExprNode) -> ExprNode {
        match self {
            Self::And => ExprNode::And(Box::new(left), Box::new(right)),
            Self::Or => ExprNode::Or(Box::new(left), Box::new(right)),
        }
    }
}

impl ExprNode {
    /// Binding strength used by the rotation: `Or` = 0, `And` = 1, everything
    /// else (literals, negations, parenthesised groups) = 2.
    const fn precedence(&self) -> u8 {
        match self {
            Self::Or(..) => 0,
            Self::And(..) => 1,
            Self::Literal(_) | Self::Not(_) | Self::Group(_) => 2,
        }
    }

    /// Restore and-over-or grouping after flat left-to-right construction.
    ///
    /// The parser builds binary nodes with no precedence distinction, so
    /// `a | b & c` first comes out as `And(Or(a, b), c)`. Applied to every
    /// freshly built binary node: when the node binds tighter than its
    /// binary left child, the left child's right subtree is rotated into the
    /// node, the rotation recurses on the shrunk node, and the former left
    /// child becomes the root. One rotation per construction keeps arbitrary
    /// `&`/`|` chains correctly grouped.
    pub(crate) fn reorder(self) -> Self {
        match self {
            Self::And(left, right) => rotate(BinaryOp::And, *left, *right),
            Self::Or(left, right) => rotate(BinaryOp::Or, *left, *right),
            other => other,
        }
    }

    /// Canonical rendering with explicit grouping: binary nodes are always
    /// parenthesised, so the text reflects the tree that will be evaluated.
    pub(crate) fn canonical(&self) -> String {
        match self {
            Self::Literal(keyword) => keyword.clone(),
            Self::Not(inner) => format!("!{}", inner.canonical()),
            Self::And(left, right) => format!("({} & {})", left.canonical(), right.canonical()),
            Self::Or(left, right) => format!("({} | {})", left.canonical(), right.canonical()),
            Self::Group(inner) => inner.canonical(),
        }
    }
}

fn rotate(op: BinaryOp, left: ExprNode, right: ExprNode) -> ExprNode {
    if op.precedence() > left.precedence() {
        match left {
            ExprNode::And(l_left, l_right) => {
                let shrunk = op.apply(*l_right, right).reorder();
                ExprNode::And(l_left, Box::new(shrunk))
            }
            ExprNode::Or(l_left, l_right) => {
                let shrunk = op.apply(*l_right, right).reorder();
                ExprNode::Or(l_left, Box::new(shrunk))
            }
            other => op.apply(other, right),
        }
    } else {
        op.apply(left, right)
    }
}
