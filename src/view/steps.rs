//! Step tree rendering.
//!
//! [`render_steps`] mirrors the recipe's step tree, tagging each node with
//! its nesting depth. [`flatten_steps`] turns that tree into numbered lines
//! for list-style output.

use crate::catalog::Step;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedStep<'a> {
    pub text: &'a str,
    pub depth: usize,
    pub children: Vec<RenderedStep<'a>>,
}

pub fn render_steps(steps: &[Step]) -> Vec<RenderedStep<'_>> {
    render_steps_at(steps, 0)
}

pub fn render_steps_at(steps: &[Step], depth: usize) -> Vec<RenderedStep<'_>> {
    steps
        .iter()
        .map(|step| RenderedStep {
            text: step.text(),
            depth,
            children: render_steps_at(step.substeps(), depth + 1),
        })
        .collect()
}

/// One numbered line of a flattened step tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepLine<'a> {
    pub depth: usize,
    /// 1-based position at each level, outermost first.
    pub path: Vec<usize>,
    pub text: &'a str,
}

impl StepLine<'_> {
    /// Dotted number such as `3.1`.
    pub fn number(&self) -> String {
        self.path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// Pre-order flattening. Numbering restarts at 1 inside each composite.
pub fn flatten_steps<'a>(rendered: &[RenderedStep<'a>]) -> Vec<StepLine<'a>> {
    let mut lines = Vec::new();
    flatten_into(rendered, &mut Vec::new(), &mut lines);
    lines
}

fn flatten_into<'a>(
    rendered: &[RenderedStep<'a>],
    prefix: &mut Vec<usize>,
    out: &mut Vec<StepLine<'a>>,
) {
    for (index, step) in rendered.iter().enumerate() {
        prefix.push(index + 1);
        out.push(StepLine {
            depth: step.depth,
            path: prefix.clone(),
            text: step.text,
        });
        flatten_into(&step.children, prefix, out);
        prefix.pop();
    }
}
