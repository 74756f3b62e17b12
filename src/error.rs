use std::fmt;

use crate::{Element, Priority};

/// Why an argument was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    /// The element is already in the heap.
    DuplicateElement(Element),
    /// Priorities must be non-negative.
    NegativePriority(Priority),
    /// The element whose priority should change is not in the heap.
    AbsentElement(Element),
}

/// Error type for heap operations.
///
/// Every variant is a caller-contract violation. The heap is left exactly as
/// it was before the failing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    InvalidArgument(InvalidArgument),
    /// Extraction or peek on an empty heap.
    EmptyContainer,
    /// Query for an element that is not in the heap.
    NotFound(Element),
}

pub type Result<T> = std::result::Result<T, HeapError>;

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgument::DuplicateElement(e) => write!(f, "element {} is already present", e),
            InvalidArgument::NegativePriority(p) => write!(f, "priority {} is negative", p),
            InvalidArgument::AbsentElement(e) => write!(f, "element {} is not present", e),
        }
    }
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::InvalidArgument(reason) => write!(f, "invalid argument: {}", reason),
            HeapError::EmptyContainer => write!(f, "heap is empty"),
            HeapError::NotFound(e) => write!(f, "element {} not found", e),
        }
    }
}

impl std::error::Error for HeapError {}

impl From<InvalidArgument> for HeapError {
    fn from(reason: InvalidArgument) -> Self {
        HeapError::InvalidArgument(reason)
    }
}
