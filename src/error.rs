use smallvec::CollectionAllocErr;
use thiserror::Error;

/// Failure reported by region operations.
///
/// Running out of memory while growing rectangle storage is the only way an
/// operation can fail; the destination region is left untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegionError {
    #[error("failed to reserve storage for {requested} rectangles")]
    Alloc { requested: usize },
    #[error("rectangle storage capacity overflow")]
    CapacityOverflow,
}

impl RegionError {
    pub(crate) fn from_reserve(err: CollectionAllocErr, requested: usize) -> Self {
        match err {
            CollectionAllocErr::CapacityOverflow => RegionError::CapacityOverflow,
            CollectionAllocErr::AllocErr { .. } => RegionError::Alloc { requested },
        }
    }
}

pub type Result<T> = std::result::Result<T, RegionError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rect::Rect;
    use std::alloc::Layout;

    #[test]
    fn reserve_errors_map_to_region_errors() {
        assert_eq!(
            RegionError::from_reserve(CollectionAllocErr::CapacityOverflow, 3),
            RegionError::CapacityOverflow
        );

        let layout = Layout::array::<Rect>(12).unwrap();
        assert_eq!(
            RegionError::from_reserve(CollectionAllocErr::AllocErr { layout }, 12),
            RegionError::Alloc { requested: 12 }
        );
    }

    #[test]
    fn messages() {
        assert_eq!(
            RegionError::Alloc { requested: 5 }.to_string(),
            "failed to reserve storage for 5 rectangles"
        );
        assert_eq!(
            RegionError::CapacityOverflow.to_string(),
            "rectangle storage capacity overflow"
        );
    }
}
