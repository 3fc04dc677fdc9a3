use serde::{Deserialize, Serialize};

use crate::shape::Shape;

/// A pixel-difference split feature: two probe positions, each anchored to a
/// landmark plus an offset in face-box-normalized units.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SplitFeature {
    pub anchor_a: u16,
    pub offset_a: [f32; 2],
    pub anchor_b: u16,
    pub offset_b: [f32; 2],
}

/// One node of a regression tree, indexed within the tree's node vector.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum TreeNode {
    Split {
        feature: SplitFeature,
        threshold: f32,
        left: u32,
        right: u32,
    },
    Leaf {
        delta: Shape,
    },
}

/// A single regression tree. Node 0 is the root; traversal compares the
/// probe intensity difference against the split threshold until a leaf's
/// shape delta is reached.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegressionTree {
    pub nodes: Vec<TreeNode>,
}

impl RegressionTree {
    pub fn new(nodes: Vec<TreeNode>) -> Self {
        Self { nodes }
    }

    /// Walk to a leaf and return its delta.
    ///
    /// Greater-than goes left, matching the dlib convention.
    pub fn predict<F>(&self, get_feature: F) -> &Shape
    where
        F: Fn(&SplitFeature) -> f32,
    {
        let mut idx = 0usize;
        loop {
            match &self.nodes[idx] {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if get_feature(feature) > *threshold {
                        *left as usize
                    } else {
                        *right as usize
                    };
                }
                TreeNode::Leaf { delta } => return delta,
            }
        }
    }
}

/// An ensemble of regression trees; the predicted delta is the sum of every
/// tree's leaf delta.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TreeEnsemble {
    pub trees: Vec<RegressionTree>,
    pub num_landmarks: usize,
}

impl TreeEnsemble {
    pub fn new(trees: Vec<RegressionTree>, num_landmarks: usize) -> Self {
        Self {
            trees,
            num_landmarks,
        }
    }

    pub fn predict<F>(&self, get_feature: F) -> Shape
    where
        F: Fn(&SplitFeature) -> f32,
    {
        let mut delta = Shape::zeros(self.num_landmarks);
        for tree in &self.trees {
            delta.add_delta(tree.predict(&get_feature));
        }
        delta
    }
}
