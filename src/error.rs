use displaydoc::Display;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Error {
    /// Flow is not conserved at vertex {0}
    FlowNotConserved(usize),
}
