use crate::graph::node::{GraphNode, RenderCtx};

/*
Serial Signal Chain (Through)
=============================

Through connects two nodes in series, passing the output of the first (source)
into the second (effect). Every pad voice is two of these:

    OscNode ──→ FilterNode ──→ GainNode ──→ output

How It Works:
-------------
1. Render the source into the output buffer
2. Pass that buffer through the effect (in-place processing)

  Source renders:  [0.5, 0.8, -0.3, 0.9, ...]
  Effect processes in-place (e.g., filter, gain)
  Final output:    [0.4, 0.6, -0.2, 0.7, ...]

Nesting is left-leaning, so the outermost effect of a chain is the last stage
and can be reached with `effect_mut()` - that is how the engine gets at a
voice's gain without knowing the rest of its shape.
*/

pub struct Through<S, F> {
    source: S,
    effect: F,
}

impl<S, F> Through<S, F> {
    pub fn new(source: S, effect: F) -> Self {
        Self { source, effect }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn effect(&self) -> &F {
        &self.effect
    }

    pub fn effect_mut(&mut self) -> &mut F {
        &mut self.effect
    }
}

impl<S: GraphNode, F: GraphNode> GraphNode for Through<S, F> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.source.render_block(out, ctx);
        self.effect.render_block(out, ctx);
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        self.source.note_on(ctx);
        self.effect.note_on(ctx);
    }
}
