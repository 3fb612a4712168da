/// The role a unit plays in the network. Evaluation dispatches on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// Pass-through of one record attribute.
    Input,
    /// Constant `1.0`, last unit of the input layer.
    BiasToHidden,
    /// Activation of the weighted sum over the input layer.
    Hidden,
    /// Constant `1.0`, last unit of the hidden layer.
    BiasToOutput,
    /// Activation of the weighted sum over the hidden layer.
    Output,
}

impl UnitKind {
    pub fn is_bias(self) -> bool {
        matches!(self, UnitKind::BiasToHidden | UnitKind::BiasToOutput)
    }

    /// Whether units of this kind own incoming edges.
    pub fn has_incoming(self) -> bool {
        matches!(self, UnitKind::Hidden | UnitKind::Output)
    }
}

/// Layers that can feed an edge. The output layer never appears here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLayer {
    Input,
    Hidden,
}

/// Back-reference from an edge to its source unit: a layer plus a position
/// within that layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitRef {
    pub layer: SourceLayer,
    pub index: usize,
}

impl UnitRef {
    pub fn new(layer: SourceLayer, index: usize) -> UnitRef {
        UnitRef { layer, index }
    }
}

/// A weighted connection into a destination unit.
///
/// Edges are never modified in place: a weight update swaps in a new edge
/// with the same source via `with_weight`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    source: UnitRef,
    weight: f64,
}

impl Edge {
    pub fn new(source: UnitRef, weight: f64) -> Edge {
        Edge { source, weight }
    }

    pub fn source(&self) -> UnitRef {
        self.source
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn with_weight(&self, weight: f64) -> Edge {
        Edge { source: self.source, weight }
    }
}

#[derive(Debug)]
pub struct Unit {
    kind: UnitKind,
    pub(crate) output: f64,
    pub(crate) incoming: Vec<Edge>,
}

impl Unit {
    pub(crate) fn input() -> Unit {
        Unit { kind: UnitKind::Input, output: 0.0, incoming: Vec::new() }
    }

    /// Bias units start (and stay) at `1.0`.
    pub(crate) fn bias(kind: UnitKind) -> Unit {
        debug_assert!(kind.is_bias());
        Unit { kind, output: 1.0, incoming: Vec::new() }
    }

    pub(crate) fn computed(kind: UnitKind, incoming: Vec<Edge>) -> Unit {
        debug_assert!(kind.has_incoming());
        Unit { kind, output: 0.0, incoming }
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    pub fn output(&self) -> f64 {
        self.output
    }

    /// Incoming edges in source-layer order. Empty for input and bias units.
    pub fn incoming(&self) -> &[Edge] {
        &self.incoming
    }

    /// Current weights of the incoming edges, in source-layer order.
    pub fn weights(&self) -> Vec<f64> {
        self.incoming.iter().map(Edge::weight).collect()
    }
}
