//! Collapsible comment tree used by the nested comments demo.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub text: String,
    #[serde(default)]
    pub replies: Vec<Comment>,
}

/// A comment plus its own collapse flag. Children are owned.
#[derive(Debug, Clone)]
pub struct CommentNode {
    pub id: String,
    pub author: String,
    pub text: String,
    pub expanded: bool,
    pub children: Vec<CommentNode>,
}

/// One line of the flattened, visible thread.
#[derive(Debug, Clone, Copy)]
pub struct CommentRow<'a> {
    pub depth: usize,
    pub node: &'a CommentNode,
}

#[derive(Debug, Clone, Default)]
pub struct CommentThread {
    pub roots: Vec<CommentNode>,
}

impl From<Comment> for CommentNode {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            author: comment.author,
            text: comment.text,
            expanded: true,
            children: comment.replies.into_iter().map(CommentNode::from).collect(),
        }
    }
}

impl CommentNode {
    pub fn reply_count(&self) -> usize {
        self.children.len()
    }

    pub fn has_replies(&self) -> bool {
        !self.children.is_empty()
    }

    /// Label of the replies toggle, `None` when there is nothing to toggle.
    pub fn toggle_label(&self) -> Option<String> {
        if !self.has_replies() {
            None
        } else if self.expanded {
            Some("Hide Replies".to_string())
        } else {
            Some(format!("Show {} replies", self.reply_count()))
        }
    }

    pub fn initial(&self) -> char {
        self.author.chars().next().unwrap_or('?')
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut CommentNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }

    fn collect_visible<'a>(&'a self, depth: usize, rows: &mut Vec<CommentRow<'a>>) {
        rows.push(CommentRow { depth, node: self });
        if self.expanded {
            for child in &self.children {
                child.collect_visible(depth + 1, rows);
            }
        }
    }
}

impl CommentThread {
    pub fn new(comments: Vec<Comment>) -> Self {
        Self {
            roots: comments.into_iter().map(CommentNode::from).collect(),
        }
    }

    /// The sample discussion shown in the demo.
    pub fn sample() -> Self {
        let reply = |id: &str, author: &str, text: &str, replies: Vec<Comment>| Comment {
            id: id.to_string(),
            author: author.to_string(),
            text: text.to_string(),
            replies,
        };

        Self::new(vec![
            reply(
                "1",
                "Alice",
                "This is a great article! Really helped me understand React patterns.",
                vec![
                    reply(
                        "1-1",
                        "Bob",
                        "I agree! The examples are very clear.",
                        vec![reply(
                            "1-1-1",
                            "Charlie",
                            "Especially the part about Context API.",
                            vec![],
                        )],
                    ),
                    reply("1-2", "Diana", "Thanks for sharing this resource.", vec![]),
                ],
            ),
            reply(
                "2",
                "Eve",
                "Could you explain more about the performance implications?",
                vec![reply(
                    "2-1",
                    "Frank",
                    "Good question! Re-renders can be optimized with useMemo.",
                    vec![],
                )],
            ),
        ])
    }

    /// Flip the collapse flag of a comment. Returns false if the id is unknown.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.roots.iter_mut().find_map(|root| root.find_mut(id)) {
            Some(node) => {
                node.expanded = !node.expanded;
                true
            }
            None => false,
        }
    }

    /// Pre-order traversal that skips the subtrees of collapsed comments.
    pub fn visible_rows(&self) -> Vec<CommentRow<'_>> {
        let mut rows = Vec::new();
        for root in &self.roots {
            root.collect_visible(0, &mut rows);
        }
        rows
    }

    pub fn top_level_count(&self) -> usize {
        self.roots.len()
    }
}
