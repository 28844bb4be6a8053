pub mod aggregate;
pub mod sync;

pub use aggregate::{HolderRole, JointHolder, LockerInfo, MirroredLockerInfo, RentDetails};
pub use sync::{assign, AssignmentResult, HolderForms, LockerAssignmentOwner};
