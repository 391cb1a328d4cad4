use crate::graph::{gain::GainNode, node::GraphNode, through::Through};

pub trait NodeExt: GraphNode + Sized {
    fn through<F: GraphNode>(self, effect: F) -> Through<Self, F> {
        Through::new(self, effect)
    }

    /// Append a smoothed output gain, starting closed.
    fn gain(self) -> Through<Self, GainNode> {
        Through::new(self, GainNode::silent())
    }
}

impl<T: GraphNode> NodeExt for T {}
