use serde::{Deserialize, Serialize};

use super::{Distance, VertexId};

/// A directed road segment. A two-way street is stored as two `Road`s with
/// swapped endpoints, the same name and the same distance.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Road {
    tail: VertexId,
    head: VertexId,
    distance: Distance,
    name: String,
}

impl Road {
    pub fn new(tail: VertexId, head: VertexId, distance: Distance, name: &str) -> Road {
        Road {
            tail,
            head,
            distance,
            name: name.to_string(),
        }
    }

    pub fn tail(&self) -> VertexId {
        self.tail
    }

    pub fn head(&self) -> VertexId {
        self.head
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.tail, self.head)
    }

    pub fn reversed(&self) -> Road {
        Road {
            tail: self.head,
            head: self.tail,
            distance: self.distance,
            name: self.name.clone(),
        }
    }
}
