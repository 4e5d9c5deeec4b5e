//! Solved sheet strengths at the panel-array nodes.

use pf_core::Real;

/// Vortex sheet strength at every panel-array node, the solver's output.
///
/// A closed array of N panels has N+1 nodes: the first and last both sit at
/// the trailing edge and are tracked independently, related by the
/// trailing-edge condition rather than merged.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VortexStrengths {
    nodes: Vec<Real>,
}

impl VortexStrengths {
    pub fn new(nodes: Vec<Real>) -> Self {
        Self { nodes }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn as_slice(&self) -> &[Real] {
        &self.nodes
    }

    /// The strength pair carried by panel `j`: its first and second
    /// endpoint values.
    pub fn panel_pair(&self, j: usize) -> (Real, Real) {
        (self.nodes[j], self.nodes[j + 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_pair_indexes_adjacent_nodes() {
        let s = VortexStrengths::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(s.node_count(), 3);
        assert_eq!(s.panel_pair(0), (1.0, 2.0));
        assert_eq!(s.panel_pair(1), (2.0, 3.0));
    }
}
