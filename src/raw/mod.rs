mod node;
mod raw_rbtree;
mod rebalance;

pub(crate) use node::{Link, Node};
pub(crate) use raw_rbtree::RawRBTree;
