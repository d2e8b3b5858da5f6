/// A single heap entry: an ordered weight and an opaque payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node<W, P> {
    pub weight: W,
    pub payload: P,
}

impl<W, P> Node<W, P> {
    pub fn new(weight: W, payload: P) -> Self {
        Self { weight, payload }
    }

    pub fn into_pair(self) -> (W, P) {
        (self.weight, self.payload)
    }

    pub fn as_pair(&self) -> (&W, &P) {
        (&self.weight, &self.payload)
    }
}

impl<W, P> From<(W, P)> for Node<W, P> {
    fn from((weight, payload): (W, P)) -> Self {
        Self::new(weight, payload)
    }
}
